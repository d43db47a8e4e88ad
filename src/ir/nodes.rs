//! Core data structures for the Intermediate Representation (IR).
//!
//! The IR is the pivot between every format pair: block nodes containing
//! linear runs of marked spans. It is pure value data with structural
//! equality and no I/O; every conversion builds a fresh tree.

/// The root of a document: an ordered sequence of blocks.
///
/// An empty document (zero blocks) is valid and round-trips to empty
/// output in every format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Document { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Concatenated plain text of the whole document, one line per
    /// block-level text unit. Marks and structure are discarded.
    pub fn plain_text(&self) -> String {
        let parts: Vec<String> = self.blocks.iter().filter_map(Block::plain_text).collect();
        parts.join("\n")
    }
}

/// A block-level node. Closed variant set, exhaustively matched at every
/// codec boundary so adding a block kind is a compile-checked change in
/// each renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, inline: Vec<Span> },
    Paragraph { inline: Vec<Span> },
    BulletList { items: Vec<Vec<Span>> },
    OrderedList { items: Vec<Vec<Span>>, start: u64 },
    CodeBlock { code: String, language: Option<String> },
    Blockquote { inline: Vec<Span> },
    Admonition { kind: AdmonitionKind, inline: Vec<Span> },
    Table { rows: Vec<Vec<String>>, header: bool },
    Rule,
    Expand { summary: String, inline: Vec<Span> },
}

impl Block {
    /// Heading with the level clamped to 1..=6.
    pub fn heading(level: u8, inline: Vec<Span>) -> Block {
        Block::Heading {
            level: level.clamp(1, 6),
            inline,
        }
    }

    pub fn paragraph(inline: Vec<Span>) -> Block {
        Block::Paragraph { inline }
    }

    /// Paragraph holding a single unmarked span.
    pub fn text_paragraph(text: impl Into<String>) -> Block {
        Block::Paragraph {
            inline: vec![Span::plain(text)],
        }
    }

    /// Ordered list with the start floored to 1.
    pub fn ordered_list(items: Vec<Vec<Span>>, start: u64) -> Block {
        Block::OrderedList {
            items,
            start: start.max(1),
        }
    }

    /// Table normalized to a rectangle: short rows are padded with empty
    /// cells, long rows truncated, all to the width of the first row.
    /// Happens here, once, never at render sites.
    pub fn table(rows: Vec<Vec<String>>, header: bool) -> Block {
        let width = rows.first().map_or(0, Vec::len);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Block::Table { rows, header }
    }

    /// Plain text content of this block, or None for text-free blocks.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Heading { inline, .. } => Some(spans_text(inline)),
            Block::Paragraph { inline } => Some(spans_text(inline)),
            Block::BulletList { items } | Block::OrderedList { items, .. } => {
                let lines: Vec<String> = items.iter().map(|i| spans_text(i)).collect();
                Some(lines.join("\n"))
            }
            Block::CodeBlock { code, .. } => Some(code.clone()),
            Block::Blockquote { inline }
            | Block::Admonition { inline, .. }
            | Block::Expand { inline, .. } => Some(spans_text(inline)),
            Block::Table { rows, .. } => {
                let lines: Vec<String> = rows.iter().map(|r| r.join(" ")).collect();
                Some(lines.join("\n"))
            }
            Block::Rule => None,
        }
    }
}

/// A contiguous run of text sharing one set of inline marks.
///
/// Overlapping formatting is always flattened to adjacent spans rather
/// than nested mark trees; this is the normalization that lets three
/// grammars with different nesting rules share one renderer model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub marks: Vec<Mark>,
}

impl Span {
    pub fn new(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Span {
            text: text.into(),
            marks,
        }
    }

    /// Unmarked text.
    pub fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn has_mark(&self, mark: &Mark) -> bool {
        self.marks.contains(mark)
    }
}

/// Inline formatting applied to a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Strong,
    Emphasis,
    Code,
    Strike,
    Link(String),
}

/// Admonition panel kinds, produced only from/for XHTML macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmonitionKind {
    Info,
    Warning,
    Note,
    Tip,
    Panel,
}

impl AdmonitionKind {
    /// Capitalized label used by the lossy markdown/ADF degradation path,
    /// e.g. "Info" for the `info` macro.
    pub fn label(self) -> &'static str {
        match self {
            AdmonitionKind::Info => "Info",
            AdmonitionKind::Warning => "Warning",
            AdmonitionKind::Note => "Note",
            AdmonitionKind::Tip => "Tip",
            AdmonitionKind::Panel => "Panel",
        }
    }

    /// Reverse of [`label`](Self::label), used to re-promote degraded
    /// blockquotes back to admonitions.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Info" => Some(AdmonitionKind::Info),
            "Warning" => Some(AdmonitionKind::Warning),
            "Note" => Some(AdmonitionKind::Note),
            "Tip" => Some(AdmonitionKind::Tip),
            "Panel" => Some(AdmonitionKind::Panel),
            _ => None,
        }
    }
}

/// Concatenated text of a run of spans.
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
