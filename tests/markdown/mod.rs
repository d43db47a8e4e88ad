//! Markdown format tests
//!
//! Tests for bidirectional markdown ↔ IR conversion.

mod import;
mod roundtrip;
