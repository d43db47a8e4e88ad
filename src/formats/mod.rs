//! Format implementations
//!
//! Each format lives in its own module with its parser and serializer
//! split into separate files, plus whatever format-specific machinery it
//! needs (the ADF node builder, the XHTML macro table).

pub mod adf;
pub mod markdown;
pub mod xhtml;

pub use adf::AdfFormat;
pub use markdown::MarkdownFormat;
pub use xhtml::XhtmlFormat;
