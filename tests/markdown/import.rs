//! Import tests for the markdown format (markdown → IR)

use confluence_babel::format::Format;
use confluence_babel::formats::markdown::MarkdownFormat;
use confluence_babel::ir::{spans_text, Block, Mark, Span};

#[test]
fn test_kitchen_sink_block_sequence() {
    let md = "# Title\n\nIntro paragraph.\n\n- one\n- two\n\n```rust\nfn main() {}\n```\n\n> quoted\n\n---";
    let doc = MarkdownFormat.parse(md).expect("Failed to parse markdown");

    assert_eq!(doc.blocks.len(), 6);
    assert!(matches!(doc.blocks[0], Block::Heading { level: 1, .. }));
    assert!(matches!(doc.blocks[1], Block::Paragraph { .. }));
    assert!(matches!(doc.blocks[2], Block::BulletList { .. }));
    assert!(matches!(doc.blocks[3], Block::CodeBlock { .. }));
    assert!(matches!(doc.blocks[4], Block::Blockquote { .. }));
    assert_eq!(doc.blocks[5], Block::Rule);
}

#[test]
fn test_multiline_paragraph_joins_with_spaces() {
    let doc = MarkdownFormat
        .parse("line one\nline two\nline three")
        .expect("Failed to parse markdown");

    assert_eq!(doc.blocks.len(), 1);
    if let Block::Paragraph { inline } = &doc.blocks[0] {
        assert_eq!(spans_text(inline), "line one line two line three");
    } else {
        panic!("expected paragraph");
    }
}

#[test]
fn test_heading_interrupts_paragraph() {
    let doc = MarkdownFormat
        .parse("text\n# Heading")
        .expect("Failed to parse markdown");

    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(doc.blocks[1], Block::Heading { level: 1, .. }));
}

#[test]
fn test_mixed_inline_marks() {
    let doc = MarkdownFormat
        .parse("plain **bold** *em* `code` ~~strike~~ [link](https://example.com)")
        .expect("Failed to parse markdown");

    if let Block::Paragraph { inline } = &doc.blocks[0] {
        let marked: Vec<&Span> = inline.iter().filter(|s| !s.marks.is_empty()).collect();
        assert_eq!(marked.len(), 5);
        assert!(marked[0].has_mark(&Mark::Strong));
        assert!(marked[1].has_mark(&Mark::Emphasis));
        assert!(marked[2].has_mark(&Mark::Code));
        assert!(marked[3].has_mark(&Mark::Strike));
        assert!(marked[4].has_mark(&Mark::Link("https://example.com".to_string())));
    } else {
        panic!("expected paragraph");
    }
}

#[test]
fn test_triple_delimiter_is_one_dual_marked_span() {
    let doc = MarkdownFormat
        .parse("***both***")
        .expect("Failed to parse markdown");

    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            inline: vec![Span::new("both", vec![Mark::Strong, Mark::Emphasis])],
        }]
    );
}

#[test]
fn test_table_without_separator_has_no_header() {
    let doc = MarkdownFormat
        .parse("| a | b |\n| c | d |")
        .expect("Failed to parse markdown");

    assert_eq!(
        doc.blocks,
        vec![Block::Table {
            rows: vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ],
            header: false,
        }]
    );
}

#[test]
fn test_whitespace_only_input_is_empty() {
    let doc = MarkdownFormat
        .parse("  \n\n   \n")
        .expect("Failed to parse markdown");
    assert!(doc.is_empty());
}
