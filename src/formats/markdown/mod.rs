//! Markdown format implementation
//!
//! Bidirectional conversion between the wiki markdown dialect and the IR.
//!
//! # Library Choice
//!
//! The parser and serializer are hand-written. The dialect pins down
//! behaviors a CommonMark engine decides differently: interactive authoring
//! must never be rejected, `---` directly under a paragraph line stays
//! paragraph text instead of becoming a setext heading or rule, `***x***`
//! flattens to a single span carrying both marks, and unclosed delimiters
//! are literal. A two-phase line/inline scanner keeps those rules explicit
//! and testable.
//!
//! # Element Mapping Table
//!
//! | IR Block     | Markdown                      | Notes                              |
//! |--------------|-------------------------------|------------------------------------|
//! | Heading      | `#`..`######`                 | level clamped to 1-6               |
//! | Paragraph    | plain text                    | soft line breaks join with a space |
//! | BulletList   | `- item`                      | `*` accepted on import             |
//! | OrderedList  | `1. item`                     | numbering honors the list start    |
//! | CodeBlock    | triple-backtick fence         | info string → language             |
//! | Blockquote   | `> text`                      | consecutive `>` lines merge        |
//! | Admonition   | `> Label: text`               | lossy; no native admonition syntax |
//! | Expand       | `> Summary: text`             | lossy                              |
//! | Table        | pipe rows + `---` separator   | rectangular by IR construction     |
//! | Rule         | `---`                         | block boundary only                |

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;

/// Markdown format: total parser, total serializer.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Lightweight wiki markup dialect"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_to_ir(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_from_ir(doc))
    }
}
