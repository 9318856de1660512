//! The generation context: every value computed during one run, by key.

use indexmap::IndexMap;
use serde::Serialize;

use crate::attribute::Attribute;
use crate::error::{Error, Result};

/// Well-known context keys.
pub mod keys {
    pub const ID: &str = "id";
    pub const MODEL_CONTROLLER_NAME: &str = "model_controller_name";
    pub const MODEL_CONTROLLER_NAME_PLURALIZED: &str = "model_controller_name_pluralized";
    pub const MODEL_ATTRIBUTES: &str = "model_attributes";
    pub const MODEL_ATTRIBUTE_NAMES: &str = "model_attribute_names";

    pub const COMPILED_NEW_FORM_FIELDS: &str = "compiled_new_form_fields";
    pub const COMPILED_SHOW_FORM_FIELDS: &str = "compiled_show_form_fields";
    pub const COMPILED_SHOW_EDIT_LINK: &str = "compiled_show_edit_link";
    pub const COMPILED_INDEX_TABLE_HEADINGS: &str = "compiled_index_table_headings";
    pub const COMPILED_INDEX_TABLE_DATA: &str = "compiled_index_table_data";
    pub const COMPILED_INDEX_FOR_EACH: &str = "compiled_index_for_each";
    pub const COMPILED_EDIT_FORM_FIELDS: &str = "compiled_edit_form_fields";
    pub const COMPILED_EDIT_FORM_ACTION: &str = "compiled_edit_form_action";
    pub const COMPILED_ACTION_PARAM_OBJECT: &str = "compiled_action_param_object";
    pub const COMPILED_ACTION_UPDATE_PARAM_OBJECT: &str = "compiled_action_update_param_object";
    pub const COMPILED_ACTIONS: &str = "compiled_actions";

    pub const ACTION_FNS: &str = "action_fns";
}

/// A value stored in the context.
///
/// Serializes untagged, so templates see plain strings and sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Text(String),
    List(Vec<String>),
    Attributes(Vec<Attribute>),
}

impl ContextValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContextValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ContextValue::Text(_) => "text",
            ContextValue::List(_) => "list",
            ContextValue::Attributes(_) => "attribute list",
        }
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Text(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for ContextValue {
    fn from(value: Vec<String>) -> Self {
        ContextValue::List(value)
    }
}

impl From<Vec<Attribute>> for ContextValue {
    fn from(value: Vec<Attribute>) -> Self {
        ContextValue::Attributes(value)
    }
}

/// A batch of context writes, in the order they should be applied.
pub type Writes = Vec<(String, ContextValue)>;

/// Snapshot of all values known at one point of a run.
///
/// Snapshots are never edited in place: [`GenerationContext::merge_defaults`]
/// consumes one and returns the next. A key, once present, keeps its first
/// value for the rest of the run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerationContext {
    values: IndexMap<String, ContextValue>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `writes` into the context, skipping keys that already exist.
    pub fn merge_defaults(mut self, writes: Writes) -> Self {
        for (key, value) in writes {
            if self.values.contains_key(&key) {
                log::debug!("Keeping existing value for '{key}'");
                continue;
            }
            self.values.insert(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks up `key` on behalf of `stage`.
    ///
    /// # Errors
    /// * `Error::UnresolvedContextKey` if the key is absent
    pub fn require(&self, stage: &str, key: &str) -> Result<&ContextValue> {
        self.values
            .get(key)
            .ok_or_else(|| Error::UnresolvedContextKey {
                stage: stage.to_string(),
                key: key.to_string(),
            })
    }

    /// Like [`GenerationContext::require`], for a value that must be text.
    pub fn require_text(&self, stage: &str, key: &str) -> Result<&str> {
        match self.require(stage, key)? {
            ContextValue::Text(text) => Ok(text),
            value => Err(Error::MismatchedContextValue {
                key: key.to_string(),
                expected: "text",
                found: value.kind(),
            }),
        }
    }

    /// Like [`GenerationContext::require`], for a value that must be a list.
    pub fn require_list(&self, stage: &str, key: &str) -> Result<&[String]> {
        match self.require(stage, key)? {
            ContextValue::List(list) => Ok(list),
            value => Err(Error::MismatchedContextValue {
                key: key.to_string(),
                expected: "list",
                found: value.kind(),
            }),
        }
    }

    /// Builds the render context for `stage` from the listed keys only.
    ///
    /// # Errors
    /// * `Error::UnresolvedContextKey` for the first key that is absent
    pub fn subset(&self, stage: &str, needed_keys: &[&str]) -> Result<serde_json::Value> {
        let mut map = serde_json::Map::new();
        for key in needed_keys {
            let value = self.require(stage, key)?;
            map.insert(key.to_string(), serde_json::to_value(value)?);
        }
        Ok(serde_json::Value::Object(map))
    }
}
