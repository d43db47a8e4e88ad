//! ADF serialization (IR → ADF tree export)
//!
//! Wraps the document in a `doc` envelope and maps each block to one ADF
//! node. Admonition and Expand have no native ADF node and degrade to a
//! blockquote whose text starts with the kind label; the label prefix is
//! what lets the ADF import path restore the admonition (and so the XHTML
//! macro name) on the way back.

use crate::ir::{Block, Document, Mark, Span};
use serde_json::{json, Value};

/// Serialize an IR document to an ADF tree.
pub fn serialize_to_adf(doc: &Document) -> Value {
    let content: Vec<Value> = doc.blocks.iter().map(block_to_adf).collect();
    json!({
        "type": "doc",
        "version": 1,
        "content": content,
    })
}

fn block_to_adf(block: &Block) -> Value {
    match block {
        Block::Heading { level, inline } => json!({
            "type": "heading",
            "attrs": { "level": level },
            "content": spans_to_adf(inline),
        }),
        Block::Paragraph { inline } => paragraph(spans_to_adf(inline)),
        Block::BulletList { items } => json!({
            "type": "bulletList",
            "content": items.iter().map(|item| list_item(item)).collect::<Vec<_>>(),
        }),
        Block::OrderedList { items, start } => json!({
            "type": "orderedList",
            "attrs": { "order": start },
            "content": items.iter().map(|item| list_item(item)).collect::<Vec<_>>(),
        }),
        Block::CodeBlock { code, language } => match language {
            Some(language) => json!({
                "type": "codeBlock",
                "attrs": { "language": language },
                "content": [text_node(code)],
            }),
            None => json!({
                "type": "codeBlock",
                "content": [text_node(code)],
            }),
        },
        Block::Blockquote { inline } => blockquote(spans_to_adf(inline)),
        Block::Admonition { kind, inline } => {
            let mut content = vec![text_node(&format!("{}: ", kind.label()))];
            content.extend(spans_to_adf(inline));
            blockquote(content)
        }
        Block::Expand { summary, inline } => {
            let mut content = Vec::new();
            if !summary.is_empty() {
                content.push(text_node(&format!("{summary}: ")));
            }
            content.extend(spans_to_adf(inline));
            blockquote(content)
        }
        Block::Table { rows, header } => table_to_adf(rows, *header),
        Block::Rule => json!({ "type": "rule" }),
    }
}

fn paragraph(content: Vec<Value>) -> Value {
    json!({ "type": "paragraph", "content": content })
}

fn blockquote(content: Vec<Value>) -> Value {
    json!({ "type": "blockquote", "content": [paragraph(content)] })
}

fn list_item(item: &[Span]) -> Value {
    json!({ "type": "listItem", "content": [paragraph(spans_to_adf(item))] })
}

fn table_to_adf(rows: &[Vec<String>], header: bool) -> Value {
    let content: Vec<Value> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cell_type = if header && i == 0 {
                "tableHeader"
            } else {
                "tableCell"
            };
            let cells: Vec<Value> = row
                .iter()
                .map(|cell| {
                    let inline = if cell.is_empty() {
                        Vec::new()
                    } else {
                        vec![text_node(cell)]
                    };
                    json!({ "type": cell_type, "content": [paragraph(inline)] })
                })
                .collect();
            json!({ "type": "tableRow", "content": cells })
        })
        .collect();
    json!({ "type": "table", "content": content })
}

fn text_node(text: &str) -> Value {
    json!({ "type": "text", "text": text })
}

/// Each span becomes one ADF text node carrying a marks array.
pub fn spans_to_adf(spans: &[Span]) -> Vec<Value> {
    spans
        .iter()
        .map(|span| {
            let marks: Vec<Value> = span.marks.iter().map(mark_to_adf).collect();
            if marks.is_empty() {
                text_node(&span.text)
            } else {
                json!({ "type": "text", "text": span.text, "marks": marks })
            }
        })
        .collect()
}

fn mark_to_adf(mark: &Mark) -> Value {
    match mark {
        Mark::Strong => json!({ "type": "strong" }),
        Mark::Emphasis => json!({ "type": "em" }),
        Mark::Code => json!({ "type": "code" }),
        Mark::Strike => json!({ "type": "strike" }),
        Mark::Link(href) => json!({ "type": "link", "attrs": { "href": href } }),
    }
}
