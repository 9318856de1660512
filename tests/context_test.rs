use serde_json::json;
use spar::attribute::Attribute;
use spar::context::{ContextValue, GenerationContext};
use spar::error::Error;

#[test]
fn test_first_write_wins() {
    let context = GenerationContext::new()
        .merge_defaults(vec![("id".to_string(), "User".into())])
        .merge_defaults(vec![
            ("id".to_string(), "Account".into()),
            ("model_controller_name".to_string(), "user".into()),
        ]);

    let expected = ContextValue::Text("User".to_string());
    assert_eq!(context.get("id"), Some(&expected));
    assert_eq!(context.len(), 2);
    assert_eq!(
        context.keys().collect::<Vec<_>>(),
        vec!["id", "model_controller_name"]
    );
}

#[test]
fn test_duplicate_key_within_one_batch() {
    let context = GenerationContext::new().merge_defaults(vec![
        ("id".to_string(), "first".into()),
        ("id".to_string(), "second".into()),
    ]);
    assert_eq!(context.require_text("model", "id").unwrap(), "first");
}

#[test]
fn test_subset_exposes_lists_as_sequences() {
    let names = vec!["body".to_string(), "author".to_string()];
    let attributes = vec![Attribute {
        name: "body".to_string(),
        kind: "text".to_string(),
    }];
    let context = GenerationContext::new().merge_defaults(vec![
        ("model_attribute_names".to_string(), names.into()),
        ("model_attributes".to_string(), attributes.into()),
        ("id".to_string(), "Comment".into()),
    ]);

    let needed_keys = ["model_attribute_names", "model_attributes"];
    let values = context.subset("index_table_data", &needed_keys).unwrap();
    assert_eq!(
        values,
        json!({
            "model_attribute_names": ["body", "author"],
            "model_attributes": [{ "name": "body", "type": "text" }],
        })
    );
}

#[test]
fn test_subset_fails_on_missing_key() {
    let context = GenerationContext::new().merge_defaults(vec![("id".to_string(), "User".into())]);

    match context.subset("index_for_each", &["id", "compiled_index_table_data"]) {
        Err(Error::UnresolvedContextKey { stage, key }) => {
            assert_eq!(stage, "index_for_each");
            assert_eq!(key, "compiled_index_table_data");
        }
        other => panic!("Expected UnresolvedContextKey, got {other:?}"),
    }
}

#[test]
fn test_typed_lookups() {
    let names = vec!["body".to_string()];
    let context = GenerationContext::new().merge_defaults(vec![
        ("id".to_string(), "Comment".into()),
        ("model_attribute_names".to_string(), names.into()),
    ]);

    assert_eq!(context.require_text("model", "id").unwrap(), "Comment");
    let listed = context.require_list("new", "model_attribute_names");
    assert_eq!(listed.unwrap(), ["body".to_string()]);

    match context.require_list("new", "id") {
        Err(Error::MismatchedContextValue {
            key,
            expected,
            found,
        }) => {
            assert_eq!(key, "id");
            assert_eq!(expected, "list");
            assert_eq!(found, "text");
        }
        other => panic!("Expected MismatchedContextValue, got {other:?}"),
    }
    match context.require_text("controller", "action_fns") {
        Err(Error::UnresolvedContextKey { stage, key }) => {
            assert_eq!(stage, "controller");
            assert_eq!(key, "action_fns");
        }
        other => panic!("Expected UnresolvedContextKey, got {other:?}"),
    }
}
