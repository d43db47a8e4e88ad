//! ADF format tests
//!
//! Tests for the node builder, bidirectional ADF ↔ IR conversion, and the
//! structural validator.

mod builder;
mod validate;
