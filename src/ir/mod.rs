//! Intermediate Representation shared by all format conversions.

pub mod nodes;

pub use nodes::{spans_text, AdmonitionKind, Block, Document, Mark, Span};
