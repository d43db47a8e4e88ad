//! Round-trip tests: canonical markdown survives parse → render unchanged.

use confluence_babel::{parse_markdown, render_markdown};
use pretty_assertions::assert_eq;

fn assert_stable(md: &str) {
    assert_eq!(render_markdown(&parse_markdown(md)), md);
}

#[test]
fn test_kitchen_sink_round_trip() {
    assert_stable(
        "# Title\n\nSome **bold** and *em* and `code`.\n\n- one\n- two\n\n5. five\n6. six\n\n```rust\nfn main() {}\n```\n\n> quoted text\n\n| A | B |\n| --- | --- |\n| 1 | 2 |\n\n---",
    );
}

#[test]
fn test_ordered_list_start_round_trip() {
    assert_stable("5. five\n6. six");
}

#[test]
fn test_dual_marked_span_round_trip() {
    assert_stable("***x***");
}

#[test]
fn test_labeled_blockquote_round_trip() {
    // The admonition degradation form: stays a labeled blockquote in
    // markdown, so rendering is stable.
    assert_stable("> Info: Careful");
}

#[test]
fn test_link_round_trip() {
    assert_stable("see [docs](https://example.com) here");
}

#[test]
fn test_paragraph_collecting_a_list_marker_stays_a_paragraph() {
    // "*" and "0" join into the paragraph "* 0"; the rendered form must
    // not re-parse as a bullet list.
    let once = render_markdown(&parse_markdown("*\n0"));
    assert_eq!(once, "\\* 0");
    assert_eq!(render_markdown(&parse_markdown(&once)), once);
}

#[test]
fn test_escaped_block_markers_round_trip() {
    assert_stable("\\- not a list");
    assert_stable("\\1. not an item");
    assert_stable("\\---");
}

#[test]
fn test_unclosed_delimiters_round_trip_as_literals() {
    assert_stable("a ** b");
    assert_stable("tick ` tock");
}
