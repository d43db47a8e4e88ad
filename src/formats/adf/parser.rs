//! ADF parsing (ADF tree → IR import)
//!
//! Walks the JSON node tree into the IR. Unknown or unsupported node types
//! are never silently discarded: their plain-text content is preserved as
//! a paragraph, only the structure is lost. Missing optional fields
//! default (level 1, no language, start 1).

use crate::ir::{AdmonitionKind, Block, Document, Mark, Span};
use serde_json::Value;

/// Convert an ADF tree to an IR document. Lenient: anything that is not a
/// recognized node degrades, nothing raises.
pub fn parse_from_adf(tree: &Value) -> Document {
    let content = match tree.get("content").and_then(Value::as_array) {
        Some(content) => content,
        None => return Document::default(),
    };
    let blocks = content.iter().filter_map(node_to_block).collect();
    Document::new(blocks)
}

/// Plain text of an ADF tree, with light list/quote decorations so the
/// result reads as text. Marks and structure are dropped.
pub fn text_from_adf(tree: &Value) -> String {
    let doc = parse_from_adf(tree);
    let lines: Vec<String> = doc
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::BulletList { items } | Block::OrderedList { items, .. } => Some(
                items
                    .iter()
                    .map(|item| format!("- {}", crate::ir::spans_text(item)))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Block::Blockquote { inline } => Some(format!("> {}", crate::ir::spans_text(inline))),
            Block::Admonition { kind, inline } => Some(format!(
                "{}: {}",
                kind.label(),
                crate::ir::spans_text(inline)
            )),
            Block::Table { rows, .. } => Some(
                rows.iter()
                    .map(|row| row.join(" | "))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            other => other.plain_text(),
        })
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

fn node_type(node: &Value) -> &str {
    node.get("type").and_then(Value::as_str).unwrap_or("")
}

fn node_content(node: &Value) -> &[Value] {
    node.get("content")
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

fn node_to_block(node: &Value) -> Option<Block> {
    match node_type(node) {
        "paragraph" => Some(Block::Paragraph {
            inline: spans_from_nodes(node_content(node)),
        }),
        "heading" => {
            let level = node
                .pointer("/attrs/level")
                .and_then(Value::as_u64)
                .unwrap_or(1);
            Some(Block::heading(
                level.min(u8::MAX as u64) as u8,
                spans_from_nodes(node_content(node)),
            ))
        }
        "bulletList" => Some(Block::BulletList {
            items: node_content(node).iter().map(item_spans).collect(),
        }),
        "orderedList" => {
            let start = node
                .pointer("/attrs/order")
                .and_then(Value::as_u64)
                .unwrap_or(1);
            Some(Block::ordered_list(
                node_content(node).iter().map(item_spans).collect(),
                start,
            ))
        }
        "codeBlock" => Some(Block::CodeBlock {
            code: collect_text(node),
            language: node
                .pointer("/attrs/language")
                .and_then(Value::as_str)
                .map(String::from),
        }),
        "blockquote" => Some(promote_blockquote(flatten_spans(node_content(node)))),
        "rule" => Some(Block::Rule),
        "table" => Some(table_from_adf(node)),
        "text" => Some(Block::Paragraph {
            inline: spans_from_nodes(std::slice::from_ref(node)),
        }),
        _ => {
            // Unsupported node type: structure is lost, text survives.
            let text = collect_text(node);
            if text.is_empty() {
                None
            } else {
                Some(Block::text_paragraph(text))
            }
        }
    }
}

/// Inline spans of a `listItem`, with any nested block content flattened
/// into the run (nesting inside items is a documented limitation).
fn item_spans(item: &Value) -> Vec<Span> {
    flatten_spans(node_content(item))
}

/// Flatten a run of block nodes (typically paragraphs) into one inline
/// run, joining adjacent blocks with a space.
fn flatten_spans(nodes: &[Value]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for node in nodes {
        let inner = if node_type(node) == "paragraph" {
            spans_from_nodes(node_content(node))
        } else {
            spans_from_nodes(std::slice::from_ref(node))
        };
        if !spans.is_empty() && !inner.is_empty() {
            spans.push(Span::plain(" "));
        }
        spans.extend(inner);
    }
    spans
}

/// A blockquote carrying a known admonition label prefix is the lossy ADF
/// image of an admonition; restore it so the macro name survives a full
/// XHTML → ADF → XHTML trip.
fn promote_blockquote(mut spans: Vec<Span>) -> Block {
    if let Some(first) = spans.first() {
        if first.marks.is_empty() {
            if let Some((label, rest)) = first.text.split_once(": ") {
                if let Some(kind) = AdmonitionKind::from_label(label) {
                    let rest = rest.to_string();
                    if rest.is_empty() {
                        spans.remove(0);
                    } else {
                        spans[0] = Span::plain(rest);
                    }
                    return Block::Admonition {
                        kind,
                        inline: spans,
                    };
                }
            }
        }
    }
    Block::Blockquote { inline: spans }
}

fn table_from_adf(node: &Value) -> Block {
    let mut rows = Vec::new();
    let mut header = false;
    for (i, row) in node_content(node).iter().enumerate() {
        if node_type(row) != "tableRow" {
            continue;
        }
        let cells = node_content(row);
        if i == 0 {
            header = cells.iter().any(|cell| node_type(cell) == "tableHeader");
        }
        rows.push(cells.iter().map(collect_text).collect());
    }
    Block::table(rows, header)
}

fn spans_from_nodes(nodes: &[Value]) -> Vec<Span> {
    let mut spans = Vec::new();
    for node in nodes {
        match node_type(node) {
            "text" => {
                let text = node.get("text").and_then(Value::as_str).unwrap_or("");
                spans.push(Span::new(text, marks_from_node(node)));
            }
            "hardBreak" => spans.push(Span::plain("\n")),
            _ => {
                let text = collect_text(node);
                if !text.is_empty() {
                    spans.push(Span::plain(text));
                }
            }
        }
    }
    spans
}

fn marks_from_node(node: &Value) -> Vec<Mark> {
    let marks = match node.get("marks").and_then(Value::as_array) {
        Some(marks) => marks,
        None => return Vec::new(),
    };
    marks
        .iter()
        .filter_map(|mark| match mark.get("type").and_then(Value::as_str)? {
            "strong" => Some(Mark::Strong),
            "em" => Some(Mark::Emphasis),
            "code" => Some(Mark::Code),
            "strike" => Some(Mark::Strike),
            "link" => Some(Mark::Link(
                mark.pointer("/attrs/href")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
            )),
            _ => None,
        })
        .collect()
}

/// All text content beneath a node, in order.
fn collect_text(node: &Value) -> String {
    let mut out = String::new();
    collect_text_into(node, &mut out);
    out
}

fn collect_text_into(node: &Value, out: &mut String) {
    match node_type(node) {
        "text" => {
            if let Some(text) = node.get("text").and_then(Value::as_str) {
                out.push_str(text);
            }
        }
        "hardBreak" => out.push('\n'),
        _ => {
            for child in node_content(node) {
                collect_text_into(child, out);
            }
        }
    }
}
