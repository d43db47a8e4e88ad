//! The macro table: storage-format macro names mapped to IR behavior.
//!
//! One fixed, ordered table consulted by both the parser (name → capture
//! rule) and the serializer (block variant → name). Keeping a single
//! shared table instead of switch logic in each direction is what keeps
//! the two directions from drifting as macros are added.

use crate::ir::AdmonitionKind;

/// How a macro's content is captured into the IR, and what the serializer
/// emits for the corresponding block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroMapping {
    /// `plain-text-body` (CDATA) plus a language parameter → `CodeBlock`.
    Code,
    /// `rich-text-body` → `Admonition` of the given kind.
    Admonition(AdmonitionKind),
    /// `title` parameter plus `rich-text-body` → `Expand`.
    Expand,
    /// `title` parameter → inline code span (no IR variant of its own).
    Status,
    /// Bodyless placeholder → a `[Table of Contents]` paragraph.
    Toc,
}

/// The supported macro set, in table order.
pub const MACRO_TABLE: &[(&str, MacroMapping)] = &[
    ("code", MacroMapping::Code),
    ("info", MacroMapping::Admonition(AdmonitionKind::Info)),
    ("warning", MacroMapping::Admonition(AdmonitionKind::Warning)),
    ("note", MacroMapping::Admonition(AdmonitionKind::Note)),
    ("tip", MacroMapping::Admonition(AdmonitionKind::Tip)),
    ("panel", MacroMapping::Admonition(AdmonitionKind::Panel)),
    ("status", MacroMapping::Status),
    ("toc", MacroMapping::Toc),
    ("expand", MacroMapping::Expand),
];

/// Capture rule for a macro name, or None for unrecognized macros (which
/// degrade to a text paragraph).
pub fn lookup(name: &str) -> Option<MacroMapping> {
    MACRO_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, mapping)| *mapping)
}

/// Reverse direction: the macro name for an admonition kind, resolved
/// through the same table the parser uses.
pub fn admonition_macro_name(kind: AdmonitionKind) -> &'static str {
    MACRO_TABLE
        .iter()
        .find_map(|(name, mapping)| match mapping {
            MacroMapping::Admonition(k) if *k == kind => Some(*name),
            _ => None,
        })
        .unwrap_or("info")
}
