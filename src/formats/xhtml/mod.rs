//! XHTML storage-format implementation
//!
//! Bidirectional conversion between the IR and the XHTML-based storage
//! markup, including the `<ac:structured-macro>` extension elements.
//!
//! # Library Choice
//!
//! The parser is a hand-written tag walk rather than a full HTML or XML
//! parser: storage markup is a fragment with undeclared `ac:`/`ri:`
//! namespace prefixes, which strict XML parsers reject, and the import
//! contract is lenient degradation rather than DOM fidelity. Entity
//! escaping in both directions goes through `html-escape`.
//!
//! # Element Mapping Table
//!
//! | IR Block     | Storage markup                       | Notes                            |
//! |--------------|--------------------------------------|----------------------------------|
//! | Heading      | `<h1>`..`<h6>`                       | direct                           |
//! | Paragraph    | `<p>`                                | direct                           |
//! | BulletList   | `<ul><li>`                           | direct                           |
//! | OrderedList  | `<ol start="N"><li>`                 | start attr only when > 1         |
//! | CodeBlock    | `code` macro / `<pre><code>`         | macro form carries the language  |
//! | Blockquote   | `<blockquote><p>`                    | direct                           |
//! | Admonition   | `info`/`warning`/`note`/`tip`/`panel` macro | rich-text-body            |
//! | Expand       | `expand` macro                       | `title` parameter is the summary |
//! | Table        | `<table><tbody><tr><th>/<td>`        | `<th>` row ↔ header flag         |
//! | Rule         | `<hr />`                             | direct                           |
//! | Span marks   | `<strong>` `<em>` `<code>` `<s>` `<a href>` | nesting order fixed       |

pub mod macros;
pub mod parser;
pub mod serializer;
pub mod validate;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;

/// XHTML storage format. Parsing never fails; unrecognized markup
/// degrades to its text content.
pub struct XhtmlFormat;

impl Format for XhtmlFormat {
    fn name(&self) -> &str {
        "xhtml"
    }

    fn description(&self) -> &str {
        "XHTML-based wiki storage markup with structured macros"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xhtml", "html"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_from_xhtml(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_xhtml(doc))
    }
}
