use std::fs;

use spar::error::Error;
use spar::stage::{PIPELINE, TARGETS};
use spar::store::{EmbeddedStore, FileSystemStore, TemplateStore, EMBEDDED_TEMPLATES};
use tempfile::TempDir;

#[test]
fn test_embedded_store_covers_every_stage_and_target() {
    let store = EmbeddedStore::new();
    let sources = PIPELINE
        .iter()
        .chain(TARGETS.iter().map(|target| &target.stage));
    for stage in sources {
        assert!(
            store.load(stage.source).is_ok(),
            "missing {}",
            stage.source
        );
    }
    assert_eq!(EMBEDDED_TEMPLATES.len(), PIPELINE.len() + TARGETS.len());
}

#[test]
fn test_embedded_store_unknown_template() {
    let result = EmbeddedStore::new().load("missing.j2");
    match result {
        Err(Error::TemplateNotFound { name }) => assert_eq!(name, "missing.j2"),
        other => panic!("Expected TemplateNotFound, got {other:?}"),
    }
}

#[test]
fn test_file_system_store() {
    let temp_dir = TempDir::new().unwrap();
    let body = "<h1>{{ id }}</h1>";
    fs::write(temp_dir.path().join("show.j2"), body).unwrap();

    let store = FileSystemStore::new(temp_dir.path());
    assert_eq!(store.load("show.j2").unwrap(), body);
}

#[test]
fn test_file_system_store_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path());

    match store.load("new.j2") {
        Err(Error::TemplateLoadError { path, source }) => {
            assert!(path.ends_with("new.j2"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected TemplateLoadError, got {other:?}"),
    }
}
