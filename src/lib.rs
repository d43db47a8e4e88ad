//! Format interoperability for Confluence wiki content
//!
//!     This crate converts between the three document representations a
//!     Confluence integration has to speak: a markdown dialect (the editing
//!     surface), the ADF JSON node tree (the cloud editor and API payloads),
//!     and the XHTML-based storage format (page bodies at rest).
//!
//! Architecture
//!
//!     Every conversion pivots through a normalized intermediate
//!     representation (./ir/nodes.rs): a flat list of blocks carrying runs
//!     of marked text spans. No format converts directly to another; each
//!     format implements parse (format → IR) and serialize (IR → format),
//!     and any pair composes. The IR normalizes at construction (heading
//!     levels clamped, list starts floored, tables made rectangular), so
//!     serializers never see out-of-range structure.
//!
//!     This is a pure library: no I/O, no network, no shell assumptions.
//!     The HTTP layer that moves these payloads lives elsewhere.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # dialect parser + renderer
//!     │   ├── adf                 # node tree codec + builder + validator
//!     │   └── xhtml               # storage markup codec + macro table + validator
//!     ├── ir                      # Intermediate Representation
//!     └── lib.rs
//!
//! Testing
//!
//!     tests/
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories,
//!     so tests/lib.rs includes them as modules.
//!
//! Lossiness
//!
//!     The three formats are not equally expressive, so round trips are
//!     honest about loss: admonitions survive markdown and ADF only as
//!     labeled blockquotes, nested lists flatten, and unknown ADF nodes or
//!     storage macros degrade to their text content rather than failing.
//!     The degradations are chosen so that text content always survives
//!     and a degrade-then-reimport trip restores structure where the label
//!     convention allows it.

pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;

use serde_json::Value;

use formats::adf::{builder, parser as adf_parser, serializer as adf_serializer};
use formats::markdown::{parser as md_parser, serializer as md_serializer};
use formats::xhtml::{parser as xhtml_parser, serializer as xhtml_serializer};
use ir::Document;

/// Parse markdown into the IR.
pub fn parse_markdown(source: &str) -> Document {
    md_parser::parse_to_ir(source)
}

/// Render the IR as markdown.
pub fn render_markdown(doc: &Document) -> String {
    md_serializer::serialize_from_ir(doc)
}

/// Markdown → ADF node tree.
pub fn markdown_to_adf(source: &str) -> Value {
    adf_serializer::serialize_to_adf(&parse_markdown(source))
}

/// ADF node tree → markdown.
pub fn adf_to_markdown(tree: &Value) -> String {
    render_markdown(&adf_parser::parse_from_adf(tree))
}

/// Plain text → ADF, one paragraph per blank-line-separated chunk. No
/// block syntax is interpreted; this is the path for caller-supplied text
/// that must arrive verbatim.
pub fn text_to_adf(text: &str) -> Value {
    let paragraphs: Vec<Value> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let joined = chunk
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(" ");
            builder::create_paragraph(&joined)
        })
        .collect();
    builder::create_adf_doc(paragraphs)
}

/// ADF node tree → plain text with light list/quote decorations.
pub fn adf_to_text(tree: &Value) -> String {
    adf_parser::text_from_adf(tree)
}

/// Markdown → storage markup.
pub fn markdown_to_xhtml(source: &str) -> String {
    xhtml_serializer::serialize_to_xhtml(&parse_markdown(source))
}

/// Storage markup → markdown.
pub fn xhtml_to_markdown(source: &str) -> String {
    render_markdown(&xhtml_parser::parse_from_xhtml(source))
}

/// Storage markup → ADF node tree.
pub fn xhtml_to_adf(source: &str) -> Value {
    adf_serializer::serialize_to_adf(&xhtml_parser::parse_from_xhtml(source))
}

/// ADF node tree → storage markup.
pub fn adf_to_xhtml(tree: &Value) -> String {
    xhtml_serializer::serialize_to_xhtml(&adf_parser::parse_from_adf(tree))
}

/// Plain text of a storage fragment: tags dropped, entities decoded,
/// whitespace collapsed.
pub fn extract_text_from_xhtml(source: &str) -> String {
    xhtml_parser::extract_text(source)
}

/// Minimal well-formedness check on an ADF tree.
pub fn validate_adf(tree: &Value) -> Result<(), String> {
    formats::adf::validate::validate_adf(tree)
}

/// Tag-balance check on a storage fragment.
pub fn validate_xhtml(source: &str) -> Result<(), String> {
    formats::xhtml::validate::validate_xhtml(source)
}

/// Wrap bare text in the minimal storage envelope; markup passes through.
pub fn wrap_storage(text: &str) -> String {
    xhtml_serializer::wrap_storage(text)
}
