//! XHTML structural validation
//!
//! A tag-balance check over the same event stream the parser walks. This
//! is deliberately not schema validation: storage markup carries custom
//! elements and undeclared namespaces, so the only structural contract
//! worth enforcing is that non-void tags open and close in order.

use crate::formats::xhtml::parser::{tokenize, TagEvent};

/// Tags that take no closing tag in storage markup.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "col"];

/// Check that tags in a storage fragment are balanced and properly nested.
pub fn validate_xhtml(source: &str) -> Result<(), String> {
    let mut stack: Vec<String> = Vec::new();
    for event in tokenize(source) {
        match event {
            TagEvent::Open {
                name, self_closing, ..
            } => {
                if !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
                    stack.push(name);
                }
            }
            TagEvent::Close { name } => match stack.pop() {
                Some(open) if open == name => {}
                Some(open) => {
                    return Err(format!(
                        "Mismatched closing tag: expected </{open}>, found </{name}>"
                    ));
                }
                None => return Err(format!("Unexpected closing tag </{name}>")),
            },
            TagEvent::Text { .. } => {}
        }
    }
    if stack.is_empty() {
        Ok(())
    } else {
        Err(format!("Unclosed tags: {}", stack.join(", ")))
    }
}
