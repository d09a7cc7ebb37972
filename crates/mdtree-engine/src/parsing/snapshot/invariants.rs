use crate::models::{Block, Document, InlineNode, Row};
use crate::parsing::blocks::kinds::Heading;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are within `1..=6`
/// - A heading's nested blocks never start another heading directly
/// - Paragraphs and lists are never empty
/// - Inline runs contain no empty or adjacent `Text` nodes
/// - Data row cells share the header's alignment at the same position
/// - Definition labels are non-empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    check_blocks(doc.blocks());
    for (label, _) in doc.references().iter() {
        assert!(!label.is_empty(), "empty reference label");
    }
    for (label, _) in doc.footnotes().iter() {
        assert!(!label.is_empty(), "empty footnote label");
    }
}

fn check_blocks(blocks: &[Block]) {
    for block in blocks {
        check_block(block);
    }
}

fn check_block(block: &Block) {
    match block {
        Block::Heading {
            level,
            inline,
            nested,
        } => {
            assert!(
                (1..=Heading::MAX_LEVEL).contains(level),
                "heading level out of range: {level}"
            );
            assert!(
                !nested.iter().any(Block::is_heading),
                "heading {level} directly nests another heading"
            );
            check_inline(inline);
            check_blocks(nested);
        }
        Block::Paragraph { inline } => {
            assert!(!inline.is_empty(), "empty paragraph");
            check_inline(inline);
        }
        Block::CodeBlock { .. } | Block::HorizontalRule => {}
        Block::Blockquote { nested } => check_blocks(nested),
        Block::List { items, .. } => {
            assert!(!items.is_empty(), "list without items");
            for item in items {
                check_inline(&item.inline);
                check_blocks(&item.nested);
            }
        }
        Block::Table { header, rows } => {
            check_row(header);
            for row in rows {
                check_row(row);
                for (i, (cell, head)) in row.cells.iter().zip(&header.cells).enumerate() {
                    assert_eq!(
                        cell.alignment, head.alignment,
                        "column {i} alignment differs from header"
                    );
                }
            }
        }
    }
}

fn check_row(row: &Row) {
    for cell in &row.cells {
        check_inline(&cell.inline);
    }
}

fn check_inline(nodes: &[InlineNode]) {
    let mut prev_text = false;
    for node in nodes {
        let is_text = matches!(node, InlineNode::Text(_));
        assert!(!(prev_text && is_text), "adjacent text nodes in {nodes:?}");
        prev_text = is_text;

        match node {
            InlineNode::Text(s) => assert!(!s.is_empty(), "empty text node"),
            InlineNode::Emphasis { content, .. }
            | InlineNode::Link { content, .. }
            | InlineNode::Image { content, .. } => check_inline(content),
            InlineNode::Code(_) | InlineNode::LineBreak | InlineNode::SoftBreak => {}
        }
    }
}
