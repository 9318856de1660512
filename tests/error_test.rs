use std::io;

use spar::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let spar_err: Error = io_err.into();

    match spar_err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::MissingScopeVariable {
        name: "root_path".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Missing required scope variable: `root_path`."
    );

    let err = Error::UnresolvedContextKey {
        stage: "index_for_each".to_string(),
        key: "compiled_index_table_data".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Stage 'index_for_each' requires 'compiled_index_table_data', \
         which has not been computed yet."
    );

    let err = Error::MismatchedContextValue {
        key: "action_fns".to_string(),
        expected: "list",
        found: "text",
    };
    assert_eq!(
        err.to_string(),
        "Context value 'action_fns' has type text, expected list."
    );
}

#[test]
fn test_invalid_attributes_display() {
    let err = Error::InvalidAttributes(vec![
        r#"Invalid attribute notation: ":email""#.to_string(),
        r#"Invalid attribute notation: "age:""#.to_string(),
    ]);
    assert_eq!(
        err.to_string(),
        r#"Invalid attribute notation: ":email"; Invalid attribute notation: "age:""#
    );
}
