//! Node builder: typed constructors for ADF trees
//!
//! Assembles ADF JSON nodes directly, for callers that want structural
//! control without authoring markdown first. The constructors apply the
//! same normalization as the IR (clamped heading levels, floored list
//! starts, rectangular tables) so the output is valid regardless of entry
//! path.

use serde_json::{json, Value};

/// `doc` envelope wrapping a content array.
pub fn create_adf_doc(content: Vec<Value>) -> Value {
    json!({
        "type": "doc",
        "version": 1,
        "content": content,
    })
}

/// Text node. The `marks` key is omitted entirely when there are none.
pub fn create_text(text: &str, marks: Vec<Value>) -> Value {
    if marks.is_empty() {
        json!({ "type": "text", "text": text })
    } else {
        json!({ "type": "text", "text": text, "marks": marks })
    }
}

/// Paragraph holding a single plain text node (empty text gives an empty
/// paragraph).
pub fn create_paragraph(text: &str) -> Value {
    if text.is_empty() {
        create_paragraph_from(Vec::new())
    } else {
        create_paragraph_from(vec![create_text(text, Vec::new())])
    }
}

/// Paragraph from pre-built inline nodes.
pub fn create_paragraph_from(content: Vec<Value>) -> Value {
    json!({ "type": "paragraph", "content": content })
}

/// Heading with the level clamped to 1..=6.
pub fn create_heading(text: &str, level: i64) -> Value {
    json!({
        "type": "heading",
        "attrs": { "level": level.clamp(1, 6) },
        "content": [create_text(text, Vec::new())],
    })
}

fn list_item(text: &str) -> Value {
    json!({ "type": "listItem", "content": [create_paragraph(text)] })
}

pub fn create_bullet_list(items: &[&str]) -> Value {
    let content: Vec<Value> = items.iter().map(|item| list_item(item)).collect();
    json!({ "type": "bulletList", "content": content })
}

/// Ordered list; `start` below 1 is floored to 1 and stored in
/// `attrs.order`.
pub fn create_ordered_list(items: &[&str], start: u64) -> Value {
    let content: Vec<Value> = items.iter().map(|item| list_item(item)).collect();
    json!({
        "type": "orderedList",
        "attrs": { "order": start.max(1) },
        "content": content,
    })
}

/// Code block; `attrs` is omitted when there is no language.
pub fn create_code_block(code: &str, language: Option<&str>) -> Value {
    match language {
        Some(language) => json!({
            "type": "codeBlock",
            "attrs": { "language": language },
            "content": [create_text(code, Vec::new())],
        }),
        None => json!({
            "type": "codeBlock",
            "content": [create_text(code, Vec::new())],
        }),
    }
}

pub fn create_blockquote(text: &str) -> Value {
    json!({ "type": "blockquote", "content": [create_paragraph(text)] })
}

pub fn create_rule() -> Value {
    json!({ "type": "rule" })
}

/// Table from rows of cell text. Rows are normalized to the width of the
/// first row; with `header`, the first row uses `tableHeader` cells.
pub fn create_table(rows: &[Vec<&str>], header: bool) -> Value {
    let width = rows.first().map_or(0, Vec::len);
    let content: Vec<Value> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cell_type = if header && i == 0 {
                "tableHeader"
            } else {
                "tableCell"
            };
            let cells: Vec<Value> = (0..width)
                .map(|col| {
                    let text = row.get(col).copied().unwrap_or("");
                    json!({ "type": cell_type, "content": [create_paragraph(text)] })
                })
                .collect();
            json!({ "type": "tableRow", "content": cells })
        })
        .collect();
    json!({ "type": "table", "content": content })
}

/// Text node carrying a link mark.
pub fn create_link(text: &str, url: &str) -> Value {
    create_text(text, vec![json!({ "type": "link", "attrs": { "href": url } })])
}
