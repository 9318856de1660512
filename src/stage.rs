//! Static description of the composition pipeline and of the files it feeds.

use crate::constants::{PASSTHROUGH_CLOSE, PASSTHROUGH_OPEN};
use crate::context::keys::*;

/// Replacement of the passthrough markers with concrete output delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRewrite {
    pub open: &'static str,
    pub close: &'static str,
}

impl DelimiterRewrite {
    /// EJS value interpolation: `<%= ... %>`.
    pub const VALUE: DelimiterRewrite = DelimiterRewrite {
        open: "<%=",
        close: "%>",
    };
    /// EJS control flow: `<% ... %>`.
    pub const CONTROL: DelimiterRewrite = DelimiterRewrite {
        open: "<%",
        close: "%>",
    };

    pub fn apply(&self, text: &str) -> String {
        text.replace(PASSTHROUGH_OPEN, self.open)
            .replace(PASSTHROUGH_CLOSE, self.close)
    }
}

/// One rendering step: reads `needed_keys`, writes `output_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateStage {
    pub name: &'static str,
    /// Template name inside the template store.
    pub source: &'static str,
    pub needed_keys: &'static [&'static str],
    pub output_key: &'static str,
    pub rewrite: Option<DelimiterRewrite>,
}

const FIELD_INPUTS: &[&str] = &[MODEL_ATTRIBUTE_NAMES, ID, MODEL_CONTROLLER_NAME];

/// The pipeline, in execution order. Every stage only needs keys written by
/// the seed or by a stage above it.
pub const PIPELINE: &[TemplateStage] = &[
    TemplateStage {
        name: "new_form_fields",
        source: "new_form_fields.j2",
        needed_keys: FIELD_INPUTS,
        output_key: COMPILED_NEW_FORM_FIELDS,
        rewrite: None,
    },
    TemplateStage {
        name: "show_form_fields",
        source: "show_form_fields.j2",
        needed_keys: FIELD_INPUTS,
        output_key: COMPILED_SHOW_FORM_FIELDS,
        rewrite: Some(DelimiterRewrite::VALUE),
    },
    TemplateStage {
        name: "show_edit_link",
        source: "show_edit_link.j2",
        needed_keys: FIELD_INPUTS,
        output_key: COMPILED_SHOW_EDIT_LINK,
        rewrite: Some(DelimiterRewrite::VALUE),
    },
    TemplateStage {
        name: "index_table_headings",
        source: "index_table_headings.j2",
        needed_keys: FIELD_INPUTS,
        output_key: COMPILED_INDEX_TABLE_HEADINGS,
        rewrite: None,
    },
    TemplateStage {
        name: "index_table_data",
        source: "index_table_data.j2",
        needed_keys: &[
            MODEL_ATTRIBUTE_NAMES,
            ID,
            MODEL_CONTROLLER_NAME,
            COMPILED_INDEX_TABLE_HEADINGS,
        ],
        output_key: COMPILED_INDEX_TABLE_DATA,
        rewrite: Some(DelimiterRewrite::VALUE),
    },
    TemplateStage {
        name: "index_for_each",
        source: "index_for_each.j2",
        needed_keys: &[
            COMPILED_INDEX_TABLE_DATA,
            MODEL_CONTROLLER_NAME_PLURALIZED,
            MODEL_CONTROLLER_NAME,
        ],
        output_key: COMPILED_INDEX_FOR_EACH,
        rewrite: Some(DelimiterRewrite::CONTROL),
    },
    TemplateStage {
        name: "edit_form_fields",
        source: "edit_form_fields.j2",
        needed_keys: &[MODEL_ATTRIBUTE_NAMES, MODEL_CONTROLLER_NAME],
        output_key: COMPILED_EDIT_FORM_FIELDS,
        rewrite: Some(DelimiterRewrite::VALUE),
    },
    TemplateStage {
        name: "edit_form_action",
        source: "edit_form_action.j2",
        needed_keys: &[MODEL_ATTRIBUTE_NAMES, MODEL_CONTROLLER_NAME],
        output_key: COMPILED_EDIT_FORM_ACTION,
        rewrite: Some(DelimiterRewrite::VALUE),
    },
    TemplateStage {
        name: "action_param_object",
        source: "action_param_object.j2",
        needed_keys: FIELD_INPUTS,
        output_key: COMPILED_ACTION_PARAM_OBJECT,
        rewrite: None,
    },
    TemplateStage {
        name: "action_update_param_object",
        source: "action_update_param_object.j2",
        needed_keys: FIELD_INPUTS,
        output_key: COMPILED_ACTION_UPDATE_PARAM_OBJECT,
        rewrite: None,
    },
    TemplateStage {
        name: "action",
        source: "action.j2",
        needed_keys: &[
            COMPILED_ACTION_PARAM_OBJECT,
            COMPILED_ACTION_UPDATE_PARAM_OBJECT,
            ID,
            MODEL_CONTROLLER_NAME,
        ],
        output_key: COMPILED_ACTIONS,
        rewrite: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Model,
    Controller,
    View,
}

/// A file rendered once the pipeline has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    pub stage: TemplateStage,
    /// Path relative to the destination root, itself rendered as a template.
    pub destination: &'static str,
}

impl Target {
    pub fn name(&self) -> &'static str {
        self.stage.name
    }
}

pub const TARGETS: &[Target] = &[
    Target {
        kind: TargetKind::Model,
        stage: TemplateStage {
            name: "model",
            source: "model.j2",
            needed_keys: &[ID, MODEL_ATTRIBUTES],
            output_key: "rendered_model",
            rewrite: None,
        },
        destination: "api/models/{{ id }}.js",
    },
    Target {
        kind: TargetKind::Controller,
        stage: TemplateStage {
            name: "controller",
            source: "controller.j2",
            needed_keys: &[ID, ACTION_FNS],
            output_key: "rendered_controller",
            rewrite: None,
        },
        destination: "api/controllers/{{ id }}Controller.js",
    },
    Target {
        kind: TargetKind::View,
        stage: TemplateStage {
            name: "new",
            source: "new.j2",
            needed_keys: &[ID, MODEL_CONTROLLER_NAME, COMPILED_NEW_FORM_FIELDS],
            output_key: "rendered_new_view",
            rewrite: Some(DelimiterRewrite::VALUE),
        },
        destination: "views/{{ id }}/new.ejs",
    },
    Target {
        kind: TargetKind::View,
        stage: TemplateStage {
            name: "show",
            source: "show.j2",
            needed_keys: &[
                ID,
                MODEL_CONTROLLER_NAME,
                COMPILED_SHOW_FORM_FIELDS,
                COMPILED_SHOW_EDIT_LINK,
            ],
            output_key: "rendered_show_view",
            rewrite: None,
        },
        destination: "views/{{ id }}/show.ejs",
    },
    Target {
        kind: TargetKind::View,
        stage: TemplateStage {
            name: "index",
            source: "index.j2",
            needed_keys: &[
                ID,
                MODEL_CONTROLLER_NAME,
                COMPILED_INDEX_TABLE_HEADINGS,
                COMPILED_INDEX_FOR_EACH,
            ],
            output_key: "rendered_index_view",
            rewrite: None,
        },
        destination: "views/{{ id }}/index.ejs",
    },
    Target {
        kind: TargetKind::View,
        stage: TemplateStage {
            name: "edit",
            source: "edit.j2",
            needed_keys: &[
                ID,
                MODEL_CONTROLLER_NAME,
                COMPILED_EDIT_FORM_FIELDS,
                COMPILED_EDIT_FORM_ACTION,
            ],
            output_key: "rendered_edit_view",
            rewrite: Some(DelimiterRewrite::VALUE),
        },
        destination: "views/{{ id }}/edit.ejs",
    },
];
