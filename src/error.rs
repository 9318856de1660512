//! Error handling for the spar generator.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Custom error types for spar operations.
///
/// Every fatal condition aborts the whole generation run. Nothing is handed to
/// the file writer unless generation returned `Ok`.
#[derive(Error, Debug)]
pub enum Error {
    /// The invocation did not start with a resource identifier.
    #[error("Please provide a name for this resource.")]
    MissingResourceName,

    /// A scope variable the generator cannot run without is absent.
    #[error("Missing required scope variable: `{name}`.")]
    MissingScopeVariable { name: String },

    /// A template file could not be read from the template directory.
    #[error("Failed to load template '{path}': {source}.")]
    TemplateLoadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The embedded template set has no body under the requested name.
    #[error("Template '{name}' does not exist.")]
    TemplateNotFound { name: String },

    /// A stage asked for a context key no earlier step has written.
    #[error("Stage '{stage}' requires '{key}', which has not been computed yet.")]
    UnresolvedContextKey { stage: String, key: String },

    /// A context value exists but has the wrong shape for its consumer.
    #[error("Context value '{key}' has type {found}, expected {expected}.")]
    MismatchedContextValue {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Malformed `name:type` declarations, reported only under the `deny` policy.
    #[error("{}", .0.join("; "))]
    InvalidAttributes(Vec<String>),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with spar's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
