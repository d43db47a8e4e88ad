//! Error type shared by every conversion operation.
//!
//! Most of the pipeline is total: markdown and XHTML parsing never fail,
//! and every serializer handles the full block set. What remains fallible
//! is registry lookup, feeding the ADF codec malformed JSON, and asking a
//! format for a direction it does not implement.

use std::fmt;

/// Errors surfaced by format lookup and conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No format registered under the requested name
    FormatNotFound(String),
    /// Source text could not be parsed (in practice: invalid ADF JSON)
    ParseError(String),
    /// Document could not be serialized
    SerializationError(String),
    /// The format does not implement the requested direction
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' is not registered"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
