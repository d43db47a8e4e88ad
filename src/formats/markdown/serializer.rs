//! Markdown serialization (IR → markdown export)
//!
//! Renders the IR to canonical markdown: one blank line between blocks,
//! `-` bullets, sequential `1.` numbering honoring the list start, triple
//! backtick fences with the language tag when present. Total over the full
//! block variant set; there is no failure mode.
//!
//! Admonition and Expand blocks have no native markdown syntax and render
//! as a blockquote whose text starts with the kind label (e.g. `> Info:`),
//! which keeps their text on the reading path.
//!
//! Paragraph text that happens to start with a block marker (`- `, `1. `,
//! `#`, `>`, `|`, a fence, a rule) gets a leading backslash so it re-parses
//! as the same paragraph instead of as that block.

use crate::formats::markdown::parser::opens_block;
use crate::ir::{Block, Document, Mark, Span};

/// Render an IR document to markdown text.
pub fn serialize_from_ir(doc: &Document) -> String {
    let rendered: Vec<String> = doc.blocks.iter().map(render_block).collect();
    rendered.join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, inline } => {
            format!("{} {}", "#".repeat(*level as usize), render_spans(inline))
        }
        Block::Paragraph { inline } => {
            let text = render_spans(inline);
            if opens_block(text.trim_start()) {
                format!("\\{text}")
            } else {
                text
            }
        }
        Block::BulletList { items } => items
            .iter()
            .map(|item| format!("- {}", render_spans(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::OrderedList { items, start } => items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", start + i as u64, render_spans(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::CodeBlock { code, language } => {
            let tag = language.as_deref().unwrap_or("");
            format!("```{tag}\n{code}\n```")
        }
        Block::Blockquote { inline } => format!("> {}", render_spans(inline)),
        Block::Admonition { kind, inline } => {
            format!("> {}: {}", kind.label(), render_spans(inline))
        }
        Block::Expand { summary, inline } => {
            if summary.is_empty() {
                format!("> {}", render_spans(inline))
            } else {
                format!("> {}: {}", summary, render_spans(inline))
            }
        }
        Block::Table { rows, header } => render_table(rows, *header),
        Block::Rule => "---".to_string(),
    }
}

fn render_table(rows: &[Vec<String>], header: bool) -> String {
    let mut lines = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        lines.push(format!("| {} |", row.join(" | ")));
        if header && i == 0 {
            let dashes: Vec<&str> = row.iter().map(|_| "---").collect();
            lines.push(format!("| {} |", dashes.join(" | ")));
        }
    }
    lines.join("\n")
}

fn render_spans(spans: &[Span]) -> String {
    spans.iter().map(render_span).collect()
}

/// Wrap a span's text in the delimiters for its marks, innermost first.
/// Strong wraps outside Emphasis so a dual-marked span renders as
/// `***text***` and re-parses to the same single span.
fn render_span(span: &Span) -> String {
    let mut text = span.text.clone();
    if span.has_mark(&Mark::Code) {
        text = format!("`{text}`");
    }
    if span.has_mark(&Mark::Strike) {
        text = format!("~~{text}~~");
    }
    if span.has_mark(&Mark::Emphasis) {
        text = format!("*{text}*");
    }
    if span.has_mark(&Mark::Strong) {
        text = format!("**{text}**");
    }
    if let Some(href) = span.marks.iter().find_map(|m| match m {
        Mark::Link(href) => Some(href),
        _ => None,
    }) {
        text = format!("[{text}]({href})");
    }
    text
}
