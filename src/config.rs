//! Configuration handling for spar.
//! An optional `spar.json`, `spar.yml` or `spar.yaml` in the working directory
//! provides defaults for the command-line flags.

use crate::attribute::InvalidAttributePolicy;
use crate::cli::Args;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use crate::constants::CONFIG_FILES;

/// Values read from a configuration file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub invalid_attributes: Option<InvalidAttributePolicy>,
    pub force: bool,
}

/// Settings for one run after merging the file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub invalid_attributes: InvalidAttributePolicy,
    pub force: bool,
    pub dry_run: bool,
}

/// Returns the contents of the first configuration file found in `dir`.
///
/// # Arguments
/// * `dir` - Directory to look in
/// * `config_files` - Candidate file names, in priority order
pub fn load_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!(
        "No configuration file found (tried: {})",
        config_files.join(", ")
    );
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads and parses the configuration file in `dir`, if there is one.
pub fn get_config<P: AsRef<Path>>(dir: P) -> Result<ConfigFile> {
    match load_config(dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(ConfigFile::default()),
    }
}

impl Settings {
    /// Command-line flags override file values.
    pub fn resolve(args: &Args, file: ConfigFile) -> Self {
        Self {
            output_dir: args.output_dir.clone().or(file.output_dir),
            templates_dir: args.templates.clone().or(file.templates_dir),
            invalid_attributes: args
                .invalid_attributes
                .or(file.invalid_attributes)
                .unwrap_or(InvalidAttributePolicy::Warn),
            force: args.force || file.force,
            dry_run: args.dry_run,
        }
    }
}
