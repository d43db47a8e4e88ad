//! Conversion tests through storage markup (markdown ↔ XHTML, ADF ↔ XHTML).

use confluence_babel::{
    adf_to_xhtml, extract_text_from_xhtml, markdown_to_xhtml, wrap_storage, xhtml_to_adf,
    xhtml_to_markdown,
};
use pretty_assertions::assert_eq;

#[test]
fn test_markdown_maps_to_storage_tags() {
    let html = markdown_to_xhtml("# Title\n\nHello **world**\n\n- one\n- two");
    assert_eq!(
        html,
        "<h1>Title</h1>\n<p>Hello <strong>world</strong></p>\n<ul><li>one</li><li>two</li></ul>"
    );
}

#[test]
fn test_markdown_round_trip_through_xhtml() {
    let md = "# Title\n\nSome **bold** and *em* and `code`.\n\n- one\n- two\n\n> quoted\n\n---";
    assert_eq!(xhtml_to_markdown(&markdown_to_xhtml(md)), md);
}

#[test]
fn test_code_block_round_trip_keeps_language_and_angle_brackets() {
    let md = "```python\nif a < b:\n    print('ok')\n```";
    let html = markdown_to_xhtml(md);
    assert!(html.contains("ac:name=\"code\""));
    assert!(html.contains("<![CDATA[if a < b:\n    print('ok')]]>"));
    assert_eq!(xhtml_to_markdown(&html), md);
}

#[test]
fn test_ordered_list_start_round_trip() {
    let md = "5. five\n6. six";
    let html = markdown_to_xhtml(md);
    assert!(html.contains("<ol start=\"5\">"));
    assert_eq!(xhtml_to_markdown(&html), md);
}

#[test]
fn test_table_round_trip() {
    let md = "| A | B |\n| --- | --- |\n| 1 | 2 |";
    let html = markdown_to_xhtml(md);
    assert!(html.contains("<th>A</th>"));
    assert!(html.contains("<td>1</td>"));
    assert_eq!(xhtml_to_markdown(&html), md);
}

#[test]
fn test_entities_round_trip() {
    let md = "a < b & c > d";
    let html = markdown_to_xhtml(md);
    assert!(!html.contains("a < b"));
    assert_eq!(xhtml_to_markdown(&html), md);
}

#[test]
fn test_admonition_survives_xhtml_to_adf_and_back() {
    let storage = "<ac:structured-macro ac:name=\"info\"><ac:rich-text-body><p>Careful</p></ac:rich-text-body></ac:structured-macro>";
    let adf = xhtml_to_adf(storage);

    // In ADF the admonition is a labeled blockquote...
    assert_eq!(adf["content"][0]["type"], "blockquote");
    assert_eq!(
        adf["content"][0]["content"][0]["content"][0]["text"],
        "Info: "
    );

    // ...and the label restores the macro on the way back.
    assert_eq!(adf_to_xhtml(&adf), storage);
}

#[test]
fn test_unknown_tags_degrade_to_text() {
    let md = xhtml_to_markdown("<div><span>wrapped</span> text</div>");
    assert_eq!(md, "wrapped text");
}

#[test]
fn test_extract_text_drops_all_markup() {
    let text = extract_text_from_xhtml(
        "<h1>Title</h1><p>Hello <strong>world</strong> &amp; friends</p><!-- note -->",
    );
    assert_eq!(text, "Title Hello world & friends");
}

#[test]
fn test_wrap_storage_contract() {
    assert_eq!(wrap_storage("<p>already markup</p>"), "<p>already markup</p>");
    assert_eq!(wrap_storage("bare text"), "<p>bare text</p>");
    assert_eq!(wrap_storage("a < b"), "<p>a &lt; b</p>");
}
