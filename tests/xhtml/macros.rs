//! Macro table behavior tests: one test per supported macro, plus the
//! degradation path for unrecognized macros.

use confluence_babel::{markdown_to_xhtml, xhtml_to_markdown};
use pretty_assertions::assert_eq;

#[test]
fn test_info_macro_imports_as_labeled_blockquote() {
    let md = xhtml_to_markdown(
        "<ac:structured-macro ac:name=\"info\"><ac:rich-text-body><p>Careful</p></ac:rich-text-body></ac:structured-macro>",
    );
    assert_eq!(md, "> Info: Careful");
}

#[test]
fn test_each_admonition_macro_keeps_its_label() {
    for (name, label) in [
        ("info", "Info"),
        ("warning", "Warning"),
        ("note", "Note"),
        ("tip", "Tip"),
        ("panel", "Panel"),
    ] {
        let storage = format!(
            "<ac:structured-macro ac:name=\"{name}\"><ac:rich-text-body><p>body</p></ac:rich-text-body></ac:structured-macro>"
        );
        assert_eq!(xhtml_to_markdown(&storage), format!("> {label}: body"));
    }
}

#[test]
fn test_admonition_macro_round_trips_through_storage() {
    let storage = "<ac:structured-macro ac:name=\"warning\"><ac:rich-text-body><p>Watch out</p></ac:rich-text-body></ac:structured-macro>";
    let md = xhtml_to_markdown(storage);
    // Markdown parses the labeled blockquote back to plain blockquote
    // text, which is the documented degradation; the storage emitted from
    // that text is a plain blockquote too.
    assert_eq!(md, "> Warning: Watch out");
}

#[test]
fn test_code_macro_language_parameter() {
    let md = xhtml_to_markdown(
        "<ac:structured-macro ac:name=\"code\"><ac:parameter ac:name=\"language\">rust</ac:parameter><ac:plain-text-body><![CDATA[fn main() {}]]></ac:plain-text-body></ac:structured-macro>",
    );
    assert_eq!(md, "```rust\nfn main() {}\n```");
}

#[test]
fn test_code_macro_language_attribute_form() {
    // Older storage markup carries the language as a tag attribute
    // instead of a parameter.
    let md = xhtml_to_markdown(
        "<ac:structured-macro ac:name=\"code\" ac:language=\"python\"><ac:plain-text-body><![CDATA[print(\"hello\")]]></ac:plain-text-body></ac:structured-macro>",
    );
    assert_eq!(md, "```python\nprint(\"hello\")\n```");
}

#[test]
fn test_code_macro_without_language() {
    let md = xhtml_to_markdown(
        "<ac:structured-macro ac:name=\"code\"><ac:plain-text-body><![CDATA[plain code]]></ac:plain-text-body></ac:structured-macro>",
    );
    assert_eq!(md, "```\nplain code\n```");
}

#[test]
fn test_status_macro_becomes_inline_code() {
    let md = xhtml_to_markdown(
        "<ac:structured-macro ac:name=\"status\"><ac:parameter ac:name=\"title\">IN PROGRESS</ac:parameter></ac:structured-macro>",
    );
    assert_eq!(md, "`IN PROGRESS`");
}

#[test]
fn test_toc_macro_becomes_placeholder() {
    let md = xhtml_to_markdown("<ac:structured-macro ac:name=\"toc\" />");
    assert_eq!(md, "[Table of Contents]");
}

#[test]
fn test_expand_macro_keeps_summary() {
    let md = xhtml_to_markdown(
        "<ac:structured-macro ac:name=\"expand\"><ac:parameter ac:name=\"title\">Details</ac:parameter><ac:rich-text-body><p>hidden</p></ac:rich-text-body></ac:structured-macro>",
    );
    assert_eq!(md, "> Details: hidden");
}

#[test]
fn test_expand_round_trips_to_storage() {
    let storage = "<ac:structured-macro ac:name=\"expand\"><ac:parameter ac:name=\"title\">Details</ac:parameter><ac:rich-text-body><p>hidden</p></ac:rich-text-body></ac:structured-macro>";
    let doc = confluence_babel::formats::xhtml::parser::parse_from_xhtml(storage);
    let out = confluence_babel::formats::xhtml::serializer::serialize_to_xhtml(&doc);
    assert_eq!(out, storage);
}

#[test]
fn test_unknown_macro_degrades_to_its_text() {
    let md = xhtml_to_markdown(
        "<ac:structured-macro ac:name=\"jira\"><ac:plain-text-body><![CDATA[PROJ-123]]></ac:plain-text-body></ac:structured-macro>",
    );
    assert_eq!(md, "PROJ-123");
}

#[test]
fn test_markdown_code_block_emits_code_macro() {
    let html = markdown_to_xhtml("```sql\nSELECT 1;\n```");
    assert_eq!(
        html,
        "<ac:structured-macro ac:name=\"code\"><ac:parameter ac:name=\"language\">sql</ac:parameter><ac:plain-text-body><![CDATA[SELECT 1;]]></ac:plain-text-body></ac:structured-macro>"
    );
}
