//! XHTML parsing (storage markup → IR import)
//!
//! A lenient tag walk in two stages: a tokenizer turns the markup into a
//! flat stream of open/close/text events, and a cursor-driven walker folds
//! the stream into IR blocks. Storage markup in the wild is a fragment,
//! not a document: namespace prefixes are undeclared, void elements may or
//! may not self-close, and unknown tags are common. The walker therefore
//! never fails; unrecognized structure degrades to its text content.
//!
//! The `ac:` and `ri:` namespace prefixes are stripped during tag parsing
//! (not by preprocessing the source, which would corrupt CDATA content),
//! so the walker matches on bare names like `structured-macro`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::formats::xhtml::macros::{self, MacroMapping};
use crate::ir::{Block, Document, Mark, Span};

/// One event in the flattened tag stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TagEvent {
    Open {
        name: String,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    },
    Close {
        name: String,
    },
    /// Character data, entity-decoded. CDATA sections arrive verbatim.
    Text {
        text: String,
    },
}

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Flatten storage markup into a tag-event stream. Comments, doctypes and
/// processing instructions are skipped; a lone `<` that never closes is
/// kept as text.
pub(crate) fn tokenize(source: &str) -> Vec<TagEvent> {
    let mut events = Vec::new();
    let mut rest = source;
    while !rest.is_empty() {
        match rest.find('<') {
            None => {
                push_text(&mut events, rest);
                break;
            }
            Some(lt) => {
                push_text(&mut events, &rest[..lt]);
                rest = &rest[lt..];
                if let Some(after) = rest.strip_prefix("<![CDATA[") {
                    let end = after.find("]]>").unwrap_or(after.len());
                    events.push(TagEvent::Text {
                        text: after[..end].to_string(),
                    });
                    rest = &after[(end + 3).min(after.len())..];
                } else if rest.starts_with("<!--") {
                    rest = match rest.find("-->") {
                        Some(end) => &rest[end + 3..],
                        None => "",
                    };
                } else if rest.starts_with("<!") || rest.starts_with("<?") {
                    rest = match rest.find('>') {
                        Some(end) => &rest[end + 1..],
                        None => "",
                    };
                } else {
                    match find_tag_end(rest) {
                        Some(end) => {
                            if let Some(event) = parse_tag(&rest[1..end]) {
                                events.push(event);
                            }
                            rest = &rest[end + 1..];
                        }
                        None => {
                            // Unterminated tag: literal text.
                            push_text(&mut events, rest);
                            rest = "";
                        }
                    }
                }
            }
        }
    }
    events
}

fn push_text(events: &mut Vec<TagEvent>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    events.push(TagEvent::Text {
        text: html_escape::decode_html_entities(raw).into_owned(),
    });
}

/// Position of the `>` that closes the tag opened at byte 0, respecting
/// quoted attribute values.
fn find_tag_end(source: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, ch) in source.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '>' => return Some(i),
                _ => {}
            },
        }
    }
    None
}

fn strip_namespace(name: &str) -> &str {
    name.strip_prefix("ac:")
        .or_else(|| name.strip_prefix("ri:"))
        .unwrap_or(name)
}

/// Parse the inside of a tag (between `<` and `>`). Returns None for
/// content that is not a tag at all (e.g. empty).
fn parse_tag(inner: &str) -> Option<TagEvent> {
    let inner = inner.trim();
    if let Some(name) = inner.strip_prefix('/') {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        return Some(TagEvent::Close {
            name: strip_namespace(name).to_ascii_lowercase(),
        });
    }
    let (inner, self_closing) = match inner.strip_suffix('/') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (inner, false),
    };
    let name_end = inner
        .find(|c: char| c.is_whitespace())
        .unwrap_or(inner.len());
    let name = &inner[..name_end];
    if name.is_empty() {
        return None;
    }
    let attrs = ATTR_RE
        .captures_iter(&inner[name_end..])
        .map(|cap| {
            let key = strip_namespace(cap.get(1).map_or("", |m| m.as_str()));
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .map_or("", |m| m.as_str());
            (
                key.to_ascii_lowercase(),
                html_escape::decode_html_entities(value).into_owned(),
            )
        })
        .collect();
    Some(TagEvent::Open {
        name: strip_namespace(name).to_ascii_lowercase(),
        attrs,
        self_closing,
    })
}

type Cursor = std::iter::Peekable<std::vec::IntoIter<TagEvent>>;

/// Parse a storage-format fragment into an IR document. Never fails;
/// unrecognized markup degrades to text.
pub fn parse_from_xhtml(source: &str) -> Document {
    let mut cursor: Cursor = tokenize(source).into_iter().peekable();
    Document::new(parse_blocks(&mut cursor, None))
}

/// Plain text of a storage fragment: tags dropped, entities decoded,
/// whitespace collapsed.
pub fn extract_text(source: &str) -> String {
    let parts: Vec<String> = tokenize(source)
        .into_iter()
        .filter_map(|event| match event {
            TagEvent::Text { text } => Some(text),
            _ => None,
        })
        .collect();
    collapse_ws(&parts.join(" "))
}

fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn attr<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Tags that open a block of their own at the walk level. Everything else
/// (including unknown elements) is transparent and its text joins the
/// surrounding loose run.
fn is_block_tag(name: &str) -> bool {
    matches!(
        name,
        "h1" | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "p"
            | "ul"
            | "ol"
            | "li"
            | "pre"
            | "blockquote"
            | "table"
            | "thead"
            | "tbody"
            | "tr"
            | "th"
            | "td"
            | "hr"
            | "structured-macro"
            | "rich-text-body"
            | "plain-text-body"
            | "parameter"
    )
}

fn parse_blocks(cursor: &mut Cursor, until: Option<&str>) -> Vec<Block> {
    enum Step {
        Loose,
        Block,
        Close(bool),
    }

    let mut blocks = Vec::new();
    loop {
        let step = match cursor.peek() {
            None => break,
            Some(TagEvent::Text { .. }) => Step::Loose,
            Some(TagEvent::Open { name, .. }) => {
                if is_block_tag(name) {
                    Step::Block
                } else {
                    Step::Loose
                }
            }
            Some(TagEvent::Close { name }) => Step::Close(Some(name.as_str()) == until),
        };
        match step {
            Step::Loose => {
                let inline = parse_loose_run(cursor, until);
                if !inline.is_empty() {
                    blocks.push(Block::Paragraph { inline });
                }
            }
            Step::Close(matched) => {
                cursor.next();
                if matched {
                    break;
                }
                // Stray close: skip.
            }
            Step::Block => {
                let Some(TagEvent::Open {
                    name,
                    attrs,
                    self_closing,
                }) = cursor.next()
                else {
                    break;
                };
                match name.as_str() {
                    "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                        let level = name[1..].parse::<u8>().unwrap_or(1);
                        let inline = parse_inline_until(cursor, &name);
                        blocks.push(Block::heading(level, inline));
                    }
                    "p" => {
                        let inline = parse_inline_until(cursor, "p");
                        if !inline.is_empty() {
                            blocks.push(Block::Paragraph { inline });
                        }
                    }
                    "ul" => blocks.push(Block::BulletList {
                        items: parse_list_items(cursor, "ul"),
                    }),
                    "ol" => {
                        let start = attr(&attrs, "start")
                            .and_then(|v| v.parse::<u64>().ok())
                            .unwrap_or(1);
                        blocks.push(Block::ordered_list(parse_list_items(cursor, "ol"), start));
                    }
                    "pre" => blocks.push(parse_pre(cursor)),
                    "blockquote" => blocks.push(Block::Blockquote {
                        inline: parse_inline_until(cursor, "blockquote"),
                    }),
                    "table" => blocks.push(parse_table(cursor)),
                    "hr" => blocks.push(Block::Rule),
                    "structured-macro" => {
                        if let Some(block) = parse_macro(cursor, &attrs, self_closing) {
                            blocks.push(block);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
    blocks
}

/// Inline content sitting directly at the walk level, outside any block
/// element. Runs until the next block tag or the enclosing close; the
/// result becomes an anonymous paragraph.
fn parse_loose_run(cursor: &mut Cursor, until: Option<&str>) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut marks: Vec<(String, Mark)> = Vec::new();
    loop {
        let stop = match cursor.peek() {
            None => true,
            Some(TagEvent::Text { .. }) => false,
            Some(TagEvent::Open { name, .. }) => is_block_tag(name),
            Some(TagEvent::Close { name }) => {
                Some(name.as_str()) == until || is_block_tag(name)
            }
        };
        if stop {
            break;
        }
        match cursor.next() {
            Some(TagEvent::Text { text }) => {
                let active: Vec<Mark> = marks.iter().map(|(_, m)| m.clone()).collect();
                spans.push(Span::new(text, active));
            }
            Some(TagEvent::Open {
                name,
                attrs,
                self_closing,
            }) => {
                if name == "br" {
                    spans.push(Span::plain(" "));
                } else if name == "img" {
                    let src = attr(&attrs, "src").unwrap_or("").to_string();
                    let alt = attr(&attrs, "alt").unwrap_or("image").to_string();
                    spans.push(Span::new(alt, vec![Mark::Link(src)]));
                } else if !self_closing {
                    match inline_mark(&name, &attrs) {
                        Some(mark) => marks.push((name, mark)),
                        None => {
                            if !spans.is_empty() {
                                spans.push(Span::plain(" "));
                            }
                        }
                    }
                }
            }
            Some(TagEvent::Close { name }) => {
                if let Some(pos) = marks.iter().rposition(|(n, _)| *n == name) {
                    marks.remove(pos);
                }
            }
            None => break,
        }
    }
    normalize_spans(spans)
}

/// Inline run up to the closing tag. Formatting tags push marks onto a
/// stack; paragraph and list-item boundaries inside the run become single
/// spaces; anything else is transparent.
fn parse_inline_until(cursor: &mut Cursor, closing: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut marks: Vec<(String, Mark)> = Vec::new();
    while let Some(event) = cursor.next() {
        match event {
            TagEvent::Text { text } => {
                let active: Vec<Mark> = marks.iter().map(|(_, m)| m.clone()).collect();
                spans.push(Span::new(text, active));
            }
            TagEvent::Open {
                name,
                attrs,
                self_closing,
            } => {
                if name == "br" {
                    spans.push(Span::plain(" "));
                    continue;
                }
                if name == "img" {
                    // No image node in the IR: keep a linked alt-text span.
                    let src = attr(&attrs, "src").unwrap_or("").to_string();
                    let alt = attr(&attrs, "alt").unwrap_or("image").to_string();
                    spans.push(Span::new(alt, vec![Mark::Link(src)]));
                    continue;
                }
                if self_closing {
                    continue;
                }
                match inline_mark(&name, &attrs) {
                    Some(mark) => marks.push((name, mark)),
                    None => {
                        if !spans.is_empty() {
                            spans.push(Span::plain(" "));
                        }
                    }
                }
            }
            TagEvent::Close { name } => {
                if name == closing {
                    break;
                }
                if let Some(pos) = marks.iter().rposition(|(n, _)| *n == name) {
                    marks.remove(pos);
                }
            }
        }
    }
    normalize_spans(spans)
}

fn inline_mark(name: &str, attrs: &[(String, String)]) -> Option<Mark> {
    match name {
        "strong" | "b" => Some(Mark::Strong),
        // <u> has no mark of its own and degrades to emphasis.
        "em" | "i" | "u" => Some(Mark::Emphasis),
        "code" => Some(Mark::Code),
        "s" | "del" | "strike" => Some(Mark::Strike),
        "a" => Some(Mark::Link(attr(attrs, "href").unwrap_or("").to_string())),
        _ => None,
    }
}

/// Collapse whitespace inside each span, merge adjacent spans with equal
/// marks, and trim the edges of the run.
fn normalize_spans(spans: Vec<Span>) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::new();
    for span in spans {
        let text = collapse_span_ws(&span.text);
        if text.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.marks == span.marks => last.text.push_str(&text),
            _ => merged.push(Span::new(text, span.marks)),
        }
    }
    if let Some(first) = merged.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = merged.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
    merged.retain(|span| !span.text.is_empty());
    merged
}

/// Whitespace runs become single spaces; edges are preserved as single
/// spaces so word boundaries around formatting tags survive.
fn collapse_span_ws(text: &str) -> String {
    let mut out = String::new();
    let mut in_ws = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    out
}

fn parse_list_items(cursor: &mut Cursor, closing: &str) -> Vec<Vec<Span>> {
    let mut items = Vec::new();
    while let Some(event) = cursor.next() {
        match event {
            TagEvent::Open { name, .. } if name == "li" => {
                items.push(parse_inline_until(cursor, "li"));
            }
            TagEvent::Close { name } if name == closing => break,
            _ => {}
        }
    }
    items
}

fn parse_pre(cursor: &mut Cursor) -> Block {
    let mut code = String::new();
    while let Some(event) = cursor.next() {
        match event {
            TagEvent::Text { text } => code.push_str(&text),
            TagEvent::Close { name } if name == "pre" => break,
            _ => {}
        }
    }
    Block::CodeBlock {
        code: code.trim_matches('\n').to_string(),
        language: None,
    }
}

fn parse_table(cursor: &mut Cursor) -> Block {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut header = false;
    while let Some(event) = cursor.next() {
        match event {
            TagEvent::Open { name, .. } if name == "tr" => {
                let (row, has_th) = parse_row(cursor);
                if rows.is_empty() {
                    header = has_th;
                }
                rows.push(row);
            }
            TagEvent::Close { name } if name == "table" => break,
            _ => {}
        }
    }
    Block::table(rows, header)
}

fn parse_row(cursor: &mut Cursor) -> (Vec<String>, bool) {
    let mut cells = Vec::new();
    let mut has_th = false;
    while let Some(event) = cursor.next() {
        match event {
            TagEvent::Open { name, .. } if name == "th" || name == "td" => {
                has_th |= name == "th";
                cells.push(collapse_ws(&collect_text_until(cursor, &name)));
            }
            TagEvent::Close { name } if name == "tr" => break,
            _ => {}
        }
    }
    (cells, has_th)
}

/// Text content up to the named closing tag, tags dropped.
fn collect_text_until(cursor: &mut Cursor, closing: &str) -> String {
    let mut out = String::new();
    while let Some(event) = cursor.next() {
        match event {
            TagEvent::Text { text } => out.push_str(&text),
            TagEvent::Close { name } if name == closing => break,
            _ => {}
        }
    }
    out
}

/// Capture a `structured-macro` invocation and map it through the macro
/// table. Unrecognized macros degrade to a paragraph of their text.
fn parse_macro(
    cursor: &mut Cursor,
    attrs: &[(String, String)],
    self_closing: bool,
) -> Option<Block> {
    let macro_name = attr(attrs, "name").unwrap_or("").to_string();
    let mut params: Vec<(String, String)> = Vec::new();
    let mut plain_body = String::new();
    let mut rich_body: Vec<Span> = Vec::new();
    let mut loose_text = String::new();

    if !self_closing {
        let mut depth = 0usize;
        while let Some(event) = cursor.next() {
            match event {
                TagEvent::Open { name, attrs, .. } => match name.as_str() {
                    "parameter" => {
                        let key = attr(&attrs, "name").unwrap_or("").to_string();
                        params.push((key, collect_text_until(cursor, "parameter")));
                    }
                    "plain-text-body" => {
                        plain_body = collect_text_until(cursor, "plain-text-body");
                    }
                    "rich-text-body" => {
                        rich_body = parse_inline_until(cursor, "rich-text-body");
                    }
                    "structured-macro" => depth += 1,
                    _ => {}
                },
                TagEvent::Close { name } if name == "structured-macro" => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                TagEvent::Text { text } => loose_text.push_str(&text),
                TagEvent::Close { .. } => {}
            }
        }
    }

    let param = |key: &str| attr(&params, key).map(String::from);
    match macros::lookup(&macro_name) {
        Some(MacroMapping::Code) => Some(Block::CodeBlock {
            code: plain_body.trim_matches('\n').to_string(),
            // The language comes as a parameter or, in the older form,
            // as an attribute on the macro tag itself.
            language: param("language")
                .or_else(|| attr(attrs, "language").map(String::from))
                .filter(|l| !l.is_empty()),
        }),
        Some(MacroMapping::Admonition(kind)) => Some(Block::Admonition {
            kind,
            inline: rich_body,
        }),
        Some(MacroMapping::Expand) => Some(Block::Expand {
            summary: param("title").unwrap_or_default(),
            inline: rich_body,
        }),
        Some(MacroMapping::Status) => {
            let title = param("title").unwrap_or_default();
            if title.is_empty() {
                None
            } else {
                Some(Block::Paragraph {
                    inline: vec![Span::new(title, vec![Mark::Code])],
                })
            }
        }
        Some(MacroMapping::Toc) => Some(Block::text_paragraph("[Table of Contents]")),
        None => {
            let mut text = collapse_ws(&loose_text);
            if text.is_empty() {
                text = collapse_ws(&plain_body);
            }
            if text.is_empty() {
                text = crate::ir::spans_text(&rich_body);
            }
            if text.is_empty() {
                None
            } else {
                Some(Block::text_paragraph(text))
            }
        }
    }
}
