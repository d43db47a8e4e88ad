//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement. The trait provides a uniform interface for parsing source
//! text into the IR and serializing the IR back out.

use crate::error::FormatError;
use crate::ir::Document;

/// Trait for document formats
///
/// Implementors provide bidirectional conversion between a string
/// representation and the IR [`Document`]. Formats can support parsing,
/// serialization, or both.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "adf", "xhtml")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Document)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Document → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Document.
    ///
    /// Default implementation returns NotSupported.
    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Document into source text.
    ///
    /// Default implementation returns NotSupported.
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
