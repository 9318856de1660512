//! Attribute declaration parsing and identifier derivation.
//!
//! An attribute declaration is a `name[:type]` token taken from the command
//! line after the resource identifier, e.g. `title`, `age:integer`.

use clap::ValueEnum;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Type assumed when a declaration carries no `:type` part.
pub const DEFAULT_ATTRIBUTE_TYPE: &str = "string";

/// One field of the generated resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    /// Opaque type name, passed through to the model file unchanged.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Result of parsing the attribute tokens of one invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedAttributes {
    /// Valid attributes in declaration order.
    pub attributes: Vec<Attribute>,
    /// One diagnostic per rejected token.
    pub invalid: Vec<String>,
}

impl ParsedAttributes {
    pub fn names(&self) -> Vec<String> {
        self.attributes
            .iter()
            .map(|attribute| attribute.name.clone())
            .collect()
    }
}

/// What to do with malformed declarations once parsing is done.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidAttributePolicy {
    /// Drop them silently.
    #[default]
    Ignore,
    /// Drop them and log a warning for each.
    Warn,
    /// Abort the generation run.
    Deny,
}

impl InvalidAttributePolicy {
    /// Applies the policy to the diagnostics collected by [`parse_attributes`].
    pub fn enforce(&self, invalid: &[String]) -> Result<()> {
        if invalid.is_empty() {
            return Ok(());
        }
        match self {
            InvalidAttributePolicy::Ignore => {
                debug!(
                    "Ignoring {} invalid attribute declaration(s)",
                    invalid.len()
                );
                Ok(())
            }
            InvalidAttributePolicy::Warn => {
                for message in invalid {
                    warn!("{message}");
                }
                Ok(())
            }
            InvalidAttributePolicy::Deny => Err(Error::InvalidAttributes(invalid.to_vec())),
        }
    }
}

/// Parses a single declaration, splitting on the first `:`.
///
/// Returns the diagnostic message when the name or the type is empty.
pub fn parse_attribute(token: &str) -> std::result::Result<Attribute, String> {
    let (name, kind) = token
        .split_once(':')
        .unwrap_or((token, DEFAULT_ATTRIBUTE_TYPE));

    if name.is_empty() || kind.is_empty() {
        return Err(format!("Invalid attribute notation: \"{token}\""));
    }

    Ok(Attribute {
        name: name.to_string(),
        kind: kind.to_string(),
    })
}

/// Parses every declaration token, keeping valid attributes gap-free and
/// collecting diagnostics for the rest.
pub fn parse_attributes<S: AsRef<str>>(tokens: &[S]) -> ParsedAttributes {
    let mut parsed = ParsedAttributes::default();
    for token in tokens {
        match parse_attribute(token.as_ref()) {
            Ok(attribute) => parsed.attributes.push(attribute),
            Err(message) => parsed.invalid.push(message),
        }
    }
    parsed
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Appends a literal `s`.
///
/// No inflection rules apply (`city` becomes `citys`). Generated view code
/// refers to the collection under this exact name.
pub fn pluralize(identifier: &str) -> String {
    format!("{identifier}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_first_colon_only() {
        let attribute = parse_attribute("tags:array:string").unwrap();
        assert_eq!(attribute.name, "tags");
        assert_eq!(attribute.kind, "array:string");
    }

    #[test]
    fn test_capitalize_keeps_tail() {
        assert_eq!(capitalize("blogPost"), "BlogPost");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }
}
