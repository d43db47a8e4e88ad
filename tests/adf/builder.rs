//! Node builder tests: exact tree shapes for each constructor.

use confluence_babel::formats::adf::builder::*;
use serde_json::json;

#[test]
fn test_doc_envelope_carries_version_one() {
    let doc = create_adf_doc(vec![create_paragraph("Hello world")]);
    assert_eq!(
        doc,
        json!({
            "type": "doc",
            "version": 1,
            "content": [
                { "type": "paragraph", "content": [
                    { "type": "text", "text": "Hello world" }
                ]}
            ]
        })
    );
}

#[test]
fn test_empty_doc_has_empty_content() {
    assert_eq!(create_adf_doc(Vec::new())["content"], json!([]));
}

#[test]
fn test_text_node_omits_marks_key_when_unmarked() {
    assert_eq!(
        create_text("plain", Vec::new()),
        json!({ "type": "text", "text": "plain" })
    );
}

#[test]
fn test_heading_clamps_out_of_range_levels() {
    assert_eq!(create_heading("T", 3)["attrs"]["level"], 3);
    assert_eq!(create_heading("T", 99)["attrs"]["level"], 6);
    assert_eq!(create_heading("T", -2)["attrs"]["level"], 1);
}

#[test]
fn test_bullet_list_wraps_items_in_paragraphs() {
    let list = create_bullet_list(&["one", "two"]);
    assert_eq!(list["type"], "bulletList");
    assert_eq!(list["content"][0]["type"], "listItem");
    assert_eq!(
        list["content"][1]["content"][0]["content"][0]["text"],
        "two"
    );
}

#[test]
fn test_ordered_list_start_floors_to_one() {
    assert_eq!(create_ordered_list(&["a"], 0)["attrs"]["order"], 1);
    assert_eq!(create_ordered_list(&["a"], 7)["attrs"]["order"], 7);
}

#[test]
fn test_code_block_without_language_has_no_attrs() {
    let block = create_code_block("let x = 1;", None);
    assert!(block.get("attrs").is_none());
    assert_eq!(block["content"][0]["text"], "let x = 1;");
}

#[test]
fn test_blockquote_and_rule_shapes() {
    assert_eq!(create_blockquote("q")["type"], "blockquote");
    assert_eq!(create_rule(), json!({ "type": "rule" }));
}

#[test]
fn test_table_pads_ragged_rows() {
    let table = create_table(&[vec!["H1", "H2"], vec!["only"]], true);
    let rows = table["content"].as_array().unwrap();
    assert_eq!(rows[0]["content"][0]["type"], "tableHeader");
    assert_eq!(rows[1]["content"].as_array().unwrap().len(), 2);
}

#[test]
fn test_link_text_node() {
    let link = create_link("Click here", "https://example.com");
    assert_eq!(link["text"], "Click here");
    assert_eq!(link["marks"][0]["attrs"]["href"], "https://example.com");
}
