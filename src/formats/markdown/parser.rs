//! Markdown parsing (markdown → IR import)
//!
//! Two-phase parser. Phase 1 splits the source into block-level units using
//! blank-line separation and line-prefix sniffing; phase 2 runs the inline
//! tokenizer over each block's text. Parsing is total: malformed or
//! ambiguous input degrades to paragraph text, it is never rejected.
//!
//! Tie-breaks (deliberate, tested choices):
//! - List-marker detection wins over emphasis/rule detection at line start.
//! - A `---` line directly after a paragraph line (no blank line between)
//!   joins the paragraph text instead of becoming a rule, mirroring the
//!   setext-heading ambiguity.
//! - Fenced code swallows verbatim text up to the closing fence or end of
//!   input, whichever comes first.
//! - Unclosed inline delimiters are literal text; the tokenizer never
//!   produces an unterminated mark.
//! - A backslash escapes the character after it. The serializer leans on
//!   this to keep paragraph text that happens to start with a block
//!   marker (`- `, `1. `, `#`, ...) from re-parsing as that block.

use crate::ir::{Block, Document, Mark, Span};

/// Parse markdown source into an IR document. Never fails.
pub fn parse_to_ir(source: &str) -> Document {
    let lines: Vec<&str> = source.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        if let Some(language) = fence_language(trimmed) {
            let (code, next) = collect_fence(&lines, i + 1);
            blocks.push(Block::CodeBlock { code, language });
            i = next;
            continue;
        }

        if let Some((level, rest)) = heading_prefix(trimmed) {
            blocks.push(Block::heading(level, tokenize_inline(rest)));
            i += 1;
            continue;
        }

        if is_rule_line(trimmed) {
            blocks.push(Block::Rule);
            i += 1;
            continue;
        }

        if trimmed.starts_with('>') {
            let (inline, next) = collect_blockquote(&lines, i);
            blocks.push(Block::Blockquote { inline });
            i = next;
            continue;
        }

        if bullet_item(trimmed).is_some() {
            let (items, next) = collect_list_items(&lines, i, bullet_item);
            blocks.push(Block::BulletList { items });
            i = next;
            continue;
        }

        if let Some((start, _)) = ordered_item(trimmed) {
            let (items, next) = collect_list_items(&lines, i, |l| ordered_item(l).map(|(_, t)| t));
            blocks.push(Block::ordered_list(items, start));
            i = next;
            continue;
        }

        if trimmed.starts_with('|') {
            let (block, next) = collect_table(&lines, i);
            blocks.push(block);
            i = next;
            continue;
        }

        let (inline, next) = collect_paragraph(&lines, i);
        blocks.push(Block::Paragraph { inline });
        i = next;
    }

    Document::new(blocks)
}

/// Returns the info string of an opening fence line, if it is one.
fn fence_language(trimmed: &str) -> Option<Option<String>> {
    let info = trimmed.strip_prefix("```")?;
    let info = info.trim();
    if info.is_empty() {
        Some(None)
    } else {
        Some(Some(info.to_string()))
    }
}

fn is_closing_fence(trimmed: &str) -> bool {
    trimmed
        .strip_prefix("```")
        .is_some_and(|rest| rest.trim().is_empty())
}

/// Collect verbatim lines up to the closing fence or end of input.
fn collect_fence(lines: &[&str], mut i: usize) -> (String, usize) {
    let mut code_lines = Vec::new();
    while i < lines.len() {
        if is_closing_fence(lines[i].trim()) {
            return (code_lines.join("\n"), i + 1);
        }
        code_lines.push(lines[i]);
        i += 1;
    }
    (code_lines.join("\n"), i)
}

/// `# `-style heading prefix: run of hashes followed by a space.
/// Runs longer than six clamp at the IR boundary.
fn heading_prefix(trimmed: &str) -> Option<(u8, &str)> {
    let hashes = trimmed.len() - trimmed.trim_start_matches('#').len();
    if hashes == 0 {
        return None;
    }
    let rest = trimmed[hashes..].strip_prefix(' ')?;
    Some((hashes.min(u8::MAX as usize) as u8, rest.trim()))
}

fn is_rule_line(trimmed: &str) -> bool {
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

fn bullet_item(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

/// `1. `-style list item: digits, a period, a space.
fn ordered_item(trimmed: &str) -> Option<(u64, &str)> {
    let digits = trimmed.len() - trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix(". ")?;
    let start = trimmed[..digits].parse().ok()?;
    Some((start, rest))
}

/// Whether a line would be sniffed as a block opener at a block boundary.
/// The serializer consults this to decide when paragraph text needs a
/// leading escape.
pub(crate) fn opens_block(trimmed: &str) -> bool {
    interrupts_paragraph(trimmed) || is_rule_line(trimmed)
}

/// Whether a line opens a block that interrupts a running paragraph.
/// `---` is deliberately absent here; see the module tie-break notes.
fn interrupts_paragraph(trimmed: &str) -> bool {
    fence_language(trimmed).is_some()
        || heading_prefix(trimmed).is_some()
        || trimmed.starts_with('>')
        || bullet_item(trimmed).is_some()
        || ordered_item(trimmed).is_some()
        || trimmed.starts_with('|')
}

fn collect_paragraph(lines: &[&str], mut i: usize) -> (Vec<Span>, usize) {
    let mut parts = Vec::new();
    while i < lines.len() {
        let trimmed = lines[i].trim();
        if trimmed.is_empty() {
            break;
        }
        if !parts.is_empty() && interrupts_paragraph(trimmed) {
            break;
        }
        parts.push(trimmed);
        i += 1;
    }
    (tokenize_inline(&parts.join(" ")), i)
}

fn collect_blockquote(lines: &[&str], mut i: usize) -> (Vec<Span>, usize) {
    let mut parts = Vec::new();
    while i < lines.len() {
        let trimmed = lines[i].trim();
        if let Some(rest) = trimmed.strip_prefix('>') {
            parts.push(rest.trim());
            i += 1;
        } else {
            break;
        }
    }
    (tokenize_inline(&parts.join(" ")), i)
}

fn collect_list_items<'a, F>(lines: &[&'a str], mut i: usize, item: F) -> (Vec<Vec<Span>>, usize)
where
    F: Fn(&'a str) -> Option<&'a str>,
{
    let mut items = Vec::new();
    while i < lines.len() {
        match item(lines[i].trim()) {
            Some(text) => {
                items.push(tokenize_inline(text.trim()));
                i += 1;
            }
            None => break,
        }
    }
    (items, i)
}

/// Collect consecutive pipe-table lines. A dash separator row after the
/// first row marks it as a header row.
fn collect_table(lines: &[&str], mut i: usize) -> (Block, usize) {
    let mut raw_rows = Vec::new();
    while i < lines.len() {
        let trimmed = lines[i].trim();
        if trimmed.starts_with('|') {
            raw_rows.push(split_table_row(trimmed));
            i += 1;
        } else {
            break;
        }
    }

    let header = raw_rows.len() > 1 && is_separator_row(&raw_rows[1]);
    let rows = raw_rows
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| !(header && *idx == 1))
        .map(|(_, row)| row)
        .collect();
    (Block::table(rows, header), i)
}

fn split_table_row(trimmed: &str) -> Vec<String> {
    trimmed
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let core = cell.trim_matches(':');
            !core.is_empty() && core.chars().all(|c| c == '-')
        })
}

/// Tokenize one block's text into a flat run of marked spans.
pub fn tokenize_inline(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    scan_spans(text, &[], &mut out);
    out
}

fn with_mark(marks: &[Mark], mark: Mark) -> Vec<Mark> {
    let mut next = marks.to_vec();
    if !next.contains(&mark) {
        next.push(mark);
    }
    next
}

fn flush(buf: &mut String, marks: &[Mark], out: &mut Vec<Span>) {
    if !buf.is_empty() {
        out.push(Span::new(std::mem::take(buf), marks.to_vec()));
    }
}

/// Find `delim`-wrapped content at the head of `rest`. Returns the inner
/// text and the remainder after the closing delimiter. Empty inner content
/// does not count; an unmatched opener makes the caller fall through to
/// literal text.
fn delimited<'a>(rest: &'a str, delim: &str) -> Option<(&'a str, &'a str)> {
    let body = rest.strip_prefix(delim)?;
    let end = body.find(delim)?;
    if end == 0 {
        return None;
    }
    Some((&body[..end], &body[end + delim.len()..]))
}

/// Link at the head of `rest`: `[text](url)`.
fn link<'a>(rest: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
    let body = rest.strip_prefix('[')?;
    let text_end = body.find("](")?;
    let after_text = &body[text_end + 2..];
    let url_end = after_text.find(')')?;
    Some((
        &body[..text_end],
        &after_text[..url_end],
        &after_text[url_end + 1..],
    ))
}

/// The inline scanner. Delimiter checks are ordered by precedence: code
/// spans first (their content is never re-tokenized), then the triple
/// delimiters so `***x***` flattens to one span carrying both Strong and
/// Emphasis, then strong, strike, emphasis, links.
fn scan_spans(text: &str, marks: &[Mark], out: &mut Vec<Span>) {
    let mut buf = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('\\') {
            if let Some(ch) = stripped.chars().next() {
                buf.push(ch);
                rest = &stripped[ch.len_utf8()..];
                continue;
            }
        }

        if let Some((inner, tail)) = delimited(rest, "`") {
            flush(&mut buf, marks, out);
            out.push(Span::new(inner, with_mark(marks, Mark::Code)));
            rest = tail;
            continue;
        }

        let mut matched = false;
        for (delim, triple) in [
            ("***", true),
            ("___", true),
            ("**", false),
            ("__", false),
            ("~~", false),
        ] {
            if let Some((inner, tail)) = delimited(rest, delim) {
                flush(&mut buf, marks, out);
                let inner_marks = match (delim, triple) {
                    (_, true) => with_mark(&with_mark(marks, Mark::Strong), Mark::Emphasis),
                    ("~~", _) => with_mark(marks, Mark::Strike),
                    _ => with_mark(marks, Mark::Strong),
                };
                scan_spans(inner, &inner_marks, out);
                rest = tail;
                matched = true;
                break;
            }
        }
        if matched {
            continue;
        }

        if rest.starts_with('*') || rest.starts_with('_') {
            let delim = &rest[..1];
            // An opener followed by a space is not an opener.
            if let Some((inner, tail)) = delimited(rest, delim).filter(|(i, _)| !i.starts_with(' '))
            {
                flush(&mut buf, marks, out);
                scan_spans(inner, &with_mark(marks, Mark::Emphasis), out);
                rest = tail;
                continue;
            }
        }

        if rest.starts_with('[') {
            if let Some((text, url, tail)) = link(rest) {
                flush(&mut buf, marks, out);
                out.push(Span::new(text, with_mark(marks, Mark::Link(url.to_string()))));
                rest = tail;
                continue;
            }
        }

        let ch = rest.chars().next().expect("rest is non-empty");
        buf.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush(&mut buf, marks, out);
}
