//! XHTML storage-format tests
//!
//! Tests for bidirectional storage markup ↔ IR conversion, the macro
//! table behaviors, and the tag-balance validator.

mod convert;
mod macros;
mod validate;
