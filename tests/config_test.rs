use clap::Parser;
use spar::attribute::InvalidAttributePolicy;
use spar::cli::Args;
use spar::config::{get_config, load_config, parse_config, ConfigFile, Settings, CONFIG_FILES};
use spar::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_no_config_file() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(load_config(temp_dir.path(), &CONFIG_FILES).unwrap(), None);
    assert_eq!(get_config(temp_dir.path()).unwrap(), ConfigFile::default());
}

#[test]
fn test_json_config() {
    let content = r#"{"output_dir": "app", "invalid_attributes": "deny", "force": true}"#;
    let config = parse_config(content).unwrap();
    assert_eq!(config.output_dir, Some(PathBuf::from("app")));
    assert_eq!(
        config.invalid_attributes,
        Some(InvalidAttributePolicy::Deny)
    );
    assert!(config.force);
    assert_eq!(config.templates_dir, None);
}

#[test]
fn test_yaml_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("spar.yml"),
        "templates_dir: ./templates\ninvalid_attributes: ignore\n",
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.templates_dir, Some(PathBuf::from("./templates")));
    assert_eq!(
        config.invalid_attributes,
        Some(InvalidAttributePolicy::Ignore)
    );
    assert!(!config.force);
}

#[test]
fn test_json_file_takes_priority() {
    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("spar.json");
    fs::write(json_path, r#"{"output_dir": "from-json"}"#).unwrap();
    let yaml_path = temp_dir.path().join("spar.yaml");
    fs::write(yaml_path, "output_dir: from-yaml\n").unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.output_dir, Some(PathBuf::from("from-json")));
}

#[test]
fn test_unknown_field_is_rejected() {
    let result = parse_config("output: app\n");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_flags_override_file() {
    let args = Args::try_parse_from([
        "spar",
        "--output-dir",
        "cli-out",
        "--invalid-attributes",
        "ignore",
        "user",
    ])
    .unwrap();
    let file = ConfigFile {
        output_dir: Some(PathBuf::from("file-out")),
        templates_dir: Some(PathBuf::from("file-templates")),
        invalid_attributes: Some(InvalidAttributePolicy::Deny),
        force: true,
    };

    let settings = Settings::resolve(&args, file);

    assert_eq!(settings.output_dir, Some(PathBuf::from("cli-out")));
    assert_eq!(
        settings.templates_dir,
        Some(PathBuf::from("file-templates"))
    );
    assert_eq!(settings.invalid_attributes, InvalidAttributePolicy::Ignore);
    assert!(settings.force);
    assert!(!settings.dry_run);
}

#[test]
fn test_default_policy_is_warn() {
    let args = Args::try_parse_from(["spar", "user"]).unwrap();
    let settings = Settings::resolve(&args, ConfigFile::default());
    assert_eq!(settings.invalid_attributes, InvalidAttributePolicy::Warn);
    assert_eq!(settings.output_dir, None);
}
