//! ADF format implementation
//!
//! Bidirectional conversion between the IR and the ADF JSON node tree,
//! plus the node-builder API for constructing trees directly.
//!
//! # Library Choice
//!
//! The tree is a `serde_json::Value` built with the `json!` macro: ADF is
//! defined as JSON, callers hand the tree straight to an HTTP body, and a
//! dynamic value keeps the lenient import path (unknown node types degrade
//! instead of failing deserialization).
//!
//! # Element Mapping Table
//!
//! | IR Block     | ADF node                       | Notes                               |
//! |--------------|--------------------------------|-------------------------------------|
//! | Heading      | `heading` + `attrs.level`      | level defaults to 1 on import       |
//! | Paragraph    | `paragraph`                    | direct                              |
//! | BulletList   | `bulletList` > `listItem`      | item nesting flattened on import    |
//! | OrderedList  | `orderedList` + `attrs.order`  | order defaults to 1 on import       |
//! | CodeBlock    | `codeBlock` + `attrs.language` | attrs omitted without language      |
//! | Blockquote   | `blockquote`                   | label prefix promotes to Admonition |
//! | Admonition   | `blockquote` (degraded)        | text starts with `Label: `          |
//! | Expand       | `blockquote` (degraded)        | summary becomes the label           |
//! | Table        | `table`/`tableRow`/cells       | `tableHeader` row ↔ header flag     |
//! | Rule         | `rule`                         | direct                              |
//! | Span marks   | `strong` `em` `code` `strike` `link` | link href in `attrs.href`     |

pub mod builder;
pub mod parser;
pub mod serializer;
pub mod validate;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;

/// ADF format. Parses a JSON string into the IR and serializes the IR to
/// pretty-printed ADF JSON.
pub struct AdfFormat;

impl Format for AdfFormat {
    fn name(&self) -> &str {
        "adf"
    }

    fn description(&self) -> &str {
        "Atlassian Document Format JSON node tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["adf", "json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let tree: serde_json::Value = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("invalid ADF JSON: {e}")))?;
        Ok(parser::parse_from_adf(&tree))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let tree = serializer::serialize_to_adf(doc);
        serde_json::to_string_pretty(&tree)
            .map_err(|e| FormatError::SerializationError(format!("ADF JSON encoding failed: {e}")))
    }
}
