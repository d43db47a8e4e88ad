//! ADF structural validation
//!
//! A shape check on the document envelope, not a schema validation: the
//! node must be a JSON object with `type == "doc"` and a `content` array.
//! Validation failure is an expected outcome, so the result is a value,
//! never a panic or a hard fault.

use serde_json::Value;

/// Check the minimal well-formedness of an ADF tree.
pub fn validate_adf(tree: &Value) -> Result<(), String> {
    let obj = tree
        .as_object()
        .ok_or_else(|| "ADF document must be a JSON object".to_string())?;

    match obj.get("type").and_then(Value::as_str) {
        Some("doc") => {}
        Some(other) => return Err(format!("ADF document type must be 'doc', got '{other}'")),
        None => return Err("ADF document is missing the 'type' field".to_string()),
    }

    match obj.get("content") {
        Some(content) if content.is_array() => Ok(()),
        Some(_) => Err("ADF content must be a list".to_string()),
        None => Err("ADF document is missing the 'content' field".to_string()),
    }
}
