//! ADF validator contract tests.

use confluence_babel::{markdown_to_adf, text_to_adf, validate_adf};
use serde_json::json;

#[test]
fn test_generated_trees_always_validate() {
    assert!(validate_adf(&markdown_to_adf("# Title\n\nbody")).is_ok());
    assert!(validate_adf(&markdown_to_adf("")).is_ok());
    assert!(validate_adf(&text_to_adf("plain text")).is_ok());
}

#[test]
fn test_non_object_is_rejected() {
    let err = validate_adf(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(err, "ADF document must be a JSON object");
}

#[test]
fn test_wrong_root_type_is_rejected() {
    let err = validate_adf(&json!({ "type": "paragraph", "content": [] })).unwrap_err();
    assert_eq!(err, "ADF document type must be 'doc', got 'paragraph'");
}

#[test]
fn test_missing_fields_are_rejected() {
    assert!(validate_adf(&json!({ "content": [] })).is_err());
    assert!(validate_adf(&json!({ "type": "doc" })).is_err());
}

#[test]
fn test_non_list_content_is_rejected() {
    let err = validate_adf(&json!({ "type": "doc", "content": {} })).unwrap_err();
    assert_eq!(err, "ADF content must be a list");
}
