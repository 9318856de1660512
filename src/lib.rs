//! spar generates a CRUD resource: a model, a controller and four EJS views,
//! composed from a chain of templates driven by `name:type` attribute
//! declarations.

/// Attribute declaration parsing and identifier derivation
pub mod attribute;

/// Command-line interface module
pub mod cli;

/// Template stage execution
pub mod composer;

/// Configuration file handling
/// Supports JSON and YAML formats (spar.json, spar.yml, spar.yaml)
pub mod config;

pub mod constants;

/// Values computed during one generation run
pub mod context;

/// Error types and handling
pub mod error;

/// Orchestration of one generation run
pub mod generator;

pub mod logger;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// The pipeline and target declarations
pub mod stage;

/// Template body sources: embedded or on disk
pub mod store;

/// Writing generated files to disk
pub mod writer;
