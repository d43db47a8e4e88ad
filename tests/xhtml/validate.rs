//! XHTML validator contract tests.

use confluence_babel::{markdown_to_xhtml, validate_xhtml};

#[test]
fn test_serializer_output_always_validates() {
    for md in [
        "# Title\n\nHello **world**",
        "- one\n- two\n\n---",
        "```rust\nfn main() {}\n```",
        "> Info: Careful",
        "| A | B |\n| --- | --- |\n| 1 | 2 |",
        "",
    ] {
        let html = markdown_to_xhtml(md);
        assert!(
            validate_xhtml(&html).is_ok(),
            "serialized markup failed validation: {html}"
        );
    }
}

#[test]
fn test_unclosed_tag_lists_the_open_stack() {
    let err = validate_xhtml("<div><p>text").unwrap_err();
    assert_eq!(err, "Unclosed tags: div, p");
}

#[test]
fn test_unexpected_close_is_reported() {
    let err = validate_xhtml("text</strong>").unwrap_err();
    assert_eq!(err, "Unexpected closing tag </strong>");
}

#[test]
fn test_interleaved_tags_are_rejected() {
    let err = validate_xhtml("<strong><em>x</strong></em>").unwrap_err();
    assert!(err.contains("Mismatched closing tag"));
}

#[test]
fn test_namespaced_macro_markup_validates() {
    assert!(validate_xhtml(
        "<ac:structured-macro ac:name=\"info\"><ac:rich-text-body><p>x</p></ac:rich-text-body></ac:structured-macro>"
    )
    .is_ok());
}

#[test]
fn test_void_elements_validate_unclosed() {
    assert!(validate_xhtml("<p>a<br>b</p><hr><img src=\"x.png\">").is_ok());
}
