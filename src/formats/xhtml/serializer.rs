//! XHTML serialization (IR → storage markup export)
//!
//! Emits one tag fragment per block. Unlike the markdown/ADF degradation
//! path, Admonition and Expand keep their structure here: they emit the
//! corresponding macro invocation, with the macro name resolved through
//! the shared macro table.

use crate::formats::xhtml::macros;
use crate::ir::{Block, Document, Mark, Span};

/// Serialize an IR document to a storage-format fragment.
pub fn serialize_to_xhtml(doc: &Document) -> String {
    let fragments: Vec<String> = doc.blocks.iter().map(block_to_xhtml).collect();
    fragments.join("\n")
}

/// Wrap a raw fragment in the minimal envelope the storage API accepts as
/// `body.storage.value`: markup passes through, bare text becomes an
/// escaped paragraph.
pub fn wrap_storage(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with('<') {
        text.to_string()
    } else {
        format!("<p>{}</p>", escape(trimmed))
    }
}

fn block_to_xhtml(block: &Block) -> String {
    match block {
        Block::Heading { level, inline } => {
            format!("<h{level}>{}</h{level}>", render_spans(inline))
        }
        Block::Paragraph { inline } => format!("<p>{}</p>", render_spans(inline)),
        Block::BulletList { items } => format!("<ul>{}</ul>", render_items(items)),
        Block::OrderedList { items, start } => {
            if *start > 1 {
                format!("<ol start=\"{start}\">{}</ol>", render_items(items))
            } else {
                format!("<ol>{}</ol>", render_items(items))
            }
        }
        Block::CodeBlock { code, language } => match language {
            Some(language) => code_macro(code, language),
            None => format!("<pre><code>{}</code></pre>", escape(code)),
        },
        Block::Blockquote { inline } => {
            format!("<blockquote><p>{}</p></blockquote>", render_spans(inline))
        }
        Block::Admonition { kind, inline } => {
            let name = macros::admonition_macro_name(*kind);
            format!(
                "<ac:structured-macro ac:name=\"{name}\"><ac:rich-text-body><p>{}</p></ac:rich-text-body></ac:structured-macro>",
                render_spans(inline)
            )
        }
        Block::Expand { summary, inline } => format!(
            "<ac:structured-macro ac:name=\"expand\"><ac:parameter ac:name=\"title\">{}</ac:parameter><ac:rich-text-body><p>{}</p></ac:rich-text-body></ac:structured-macro>",
            escape(summary),
            render_spans(inline)
        ),
        Block::Table { rows, header } => render_table(rows, *header),
        Block::Rule => "<hr />".to_string(),
    }
}

fn code_macro(code: &str, language: &str) -> String {
    // CDATA cannot contain its own terminator; split it across sections.
    let safe = code.replace("]]>", "]]]]><![CDATA[>");
    format!(
        "<ac:structured-macro ac:name=\"code\"><ac:parameter ac:name=\"language\">{}</ac:parameter><ac:plain-text-body><![CDATA[{safe}]]></ac:plain-text-body></ac:structured-macro>",
        escape(language)
    )
}

fn render_items(items: &[Vec<Span>]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", render_spans(item)))
        .collect()
}

fn render_table(rows: &[Vec<String>], header: bool) -> String {
    let mut out = String::from("<table><tbody>");
    for (i, row) in rows.iter().enumerate() {
        let cell_tag = if header && i == 0 { "th" } else { "td" };
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<{cell_tag}>{}</{cell_tag}>", escape(cell)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn render_spans(spans: &[Span]) -> String {
    spans.iter().map(render_span).collect()
}

fn render_span(span: &Span) -> String {
    let mut text = escape(&span.text);
    if span.has_mark(&Mark::Code) {
        text = format!("<code>{text}</code>");
    }
    if span.has_mark(&Mark::Strike) {
        text = format!("<s>{text}</s>");
    }
    if span.has_mark(&Mark::Emphasis) {
        text = format!("<em>{text}</em>");
    }
    if span.has_mark(&Mark::Strong) {
        text = format!("<strong>{text}</strong>");
    }
    if let Some(href) = span.marks.iter().find_map(|m| match m {
        Mark::Link(href) => Some(href),
        _ => None,
    }) {
        text = format!(
            "<a href=\"{}\">{text}</a>",
            html_escape::encode_double_quoted_attribute(href)
        );
    }
    text
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}
