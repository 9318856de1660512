//! Sources of template bodies.
//!
//! The default set is compiled into the binary from `templates/`. A template
//! directory with the same file names can replace it at runtime.
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Trait for looking up template bodies by name.
pub trait TemplateStore {
    /// Returns the body of the template called `source`.
    fn load(&self, source: &str) -> Result<String>;
}

/// Template bodies shipped with spar.
pub const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    (
        "new_form_fields.j2",
        include_str!("../templates/new_form_fields.j2"),
    ),
    (
        "show_form_fields.j2",
        include_str!("../templates/show_form_fields.j2"),
    ),
    (
        "show_edit_link.j2",
        include_str!("../templates/show_edit_link.j2"),
    ),
    (
        "index_table_headings.j2",
        include_str!("../templates/index_table_headings.j2"),
    ),
    (
        "index_table_data.j2",
        include_str!("../templates/index_table_data.j2"),
    ),
    (
        "index_for_each.j2",
        include_str!("../templates/index_for_each.j2"),
    ),
    (
        "edit_form_fields.j2",
        include_str!("../templates/edit_form_fields.j2"),
    ),
    (
        "edit_form_action.j2",
        include_str!("../templates/edit_form_action.j2"),
    ),
    (
        "action_param_object.j2",
        include_str!("../templates/action_param_object.j2"),
    ),
    (
        "action_update_param_object.j2",
        include_str!("../templates/action_update_param_object.j2"),
    ),
    ("action.j2", include_str!("../templates/action.j2")),
    ("model.j2", include_str!("../templates/model.j2")),
    ("controller.j2", include_str!("../templates/controller.j2")),
    ("new.j2", include_str!("../templates/new.j2")),
    ("show.j2", include_str!("../templates/show.j2")),
    ("index.j2", include_str!("../templates/index.j2")),
    ("edit.j2", include_str!("../templates/edit.j2")),
];

/// Store backed by [`EMBEDDED_TEMPLATES`].
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedStore {
    fn load(&self, source: &str) -> Result<String> {
        EMBEDDED_TEMPLATES
            .iter()
            .find(|(name, _)| *name == source)
            .map(|(_, body)| body.to_string())
            .ok_or_else(|| Error::TemplateNotFound {
                name: source.to_string(),
            })
    }
}

/// Store reading `<root>/<source>` from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    root: PathBuf,
}

impl FileSystemStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateStore for FileSystemStore {
    /// # Errors
    /// * `Error::TemplateLoadError` if the file is missing or not valid UTF-8
    fn load(&self, source: &str) -> Result<String> {
        let path = self.root.join(source);
        debug!("Loading template from {}", path.display());
        fs::read_to_string(&path).map_err(|e| Error::TemplateLoadError {
            path: path.display().to_string(),
            source: e,
        })
    }
}
