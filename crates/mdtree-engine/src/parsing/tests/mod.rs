//! Document-level tests for the parsing module.
//!
//! Uses outline snapshots (see [`crate::parsing::snapshot`]) for readability.
//! Fixture documents (.md) live in `fixtures/`; their outlines are pinned inline.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{
    Alignment, Block, Bullet, Document, InlineNode, LinkTarget, ListKind, MetadataFormat,
    ReferenceDef,
};
use crate::parsing::{parse_document, snapshot};

// Fixture-based snapshot tests

fn fixture(name: &str) -> Document {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(path).unwrap();
    let doc = parse_document(&md);
    snapshot::invariants(&doc);
    doc
}

#[test]
fn fixture_guide() {
    insta::assert_snapshot!(snapshot::outline(&fixture("guide")), @r#"
    Metadata(Yaml) "title: Demo"
    Heading(1) "Guide"
      Paragraph "Intro with **bold**, *it* and `code`.\nSee [docs][d] and ![logo](l.png \"Logo\")."
    Heading(2) "Steps"
      List(Ordered { start: 1 })
        Item "First"
          Paragraph "more detail"
        Item(Completed) "Second"
      Blockquote
        Paragraph "Quoted"
        Blockquote
          Paragraph "deeper"
      HorizontalRule
      Table [Left, Right]
        Header ["Key", "Value"]
        Row ["a", "1"]
      CodeBlock(Indented) "indented code"
    Reference(d) "https://docs.example" "Docs"
    "#);
}

#[test]
fn fixture_footnotes() {
    insta::assert_snapshot!(snapshot::outline(&fixture("footnotes")), @r#"
    Paragraph "Claim[^1] with a [link][r]."
    Footnote(1) "first line\nsecond line\n\nafter a gap"
    Reference(r) "http://override.example"
    "#);
}

/// Definitions inside a blockquote stay scoped to it and are dropped, while
/// indented definitions under a list item are seen by the top-level pre-pass.
#[test]
fn fixture_scoped_definitions() {
    insta::assert_snapshot!(snapshot::outline(&fixture("scoped_definitions")), @r#"
    Blockquote
      Paragraph "quoted"
    List(Unordered { bullet: Asterisk })
      Item "item"
    Paragraph "[x][q] [y][l]"
    Reference(l) "/in-list"
    "#);
}

#[test]
fn fixture_guide_survives_rendering() {
    let doc = fixture("guide");
    let again = parse_document(&doc.render());
    snapshot::invariants(&again);
    assert_eq!(again, doc);
}

// Documented properties

#[test]
fn frontmatter_round_trip() {
    let doc = parse_document("---\nk: v\n---\n\n# H");
    let meta = doc.metadata().unwrap();
    assert_eq!(meta.format, MetadataFormat::Yaml);
    assert_eq!(meta.content, "k: v");
    assert_eq!(doc.blocks().len(), 1);
    assert!(matches!(doc.blocks()[0], Block::Heading { level: 1, .. }));

    let again = parse_document(&doc.render());
    assert_eq!(again.metadata(), doc.metadata());
    assert_eq!(again.blocks().len(), doc.blocks().len());
}

#[test]
fn heading_nesting() {
    let doc = parse_document("# A\n\npara1\n\npara2\n\n## B");
    let [first, second] = doc.blocks() else {
        panic!("expected two blocks, got {:?}", doc.blocks());
    };
    match first {
        Block::Heading { level, nested, .. } => {
            assert_eq!(*level, 1);
            assert_eq!(nested.len(), 2);
            assert!(nested.iter().all(|b| matches!(b, Block::Paragraph { .. })));
        }
        other => panic!("expected heading, got {other:?}"),
    }
    assert!(matches!(second, Block::Heading { level: 2, .. }));
}

#[test]
fn list_idempotence() {
    let doc = parse_document("* a\n* b\n* c");
    let [Block::List { kind, items }] = doc.blocks() else {
        panic!("expected a single list, got {:?}", doc.blocks());
    };
    assert_eq!(
        *kind,
        ListKind::Unordered {
            bullet: Bullet::Asterisk
        }
    );
    assert_eq!(items.len(), 3);

    let rendered = doc.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines, vec!["* a", "* b", "* c"]);
}

#[test]
fn reference_resolution_table() {
    let doc = parse_document("[x][r]\n\n[r]: http://e.com \"T\"");
    assert_eq!(
        doc.blocks(),
        &[Block::paragraph(vec![InlineNode::Link {
            content: vec![InlineNode::text("x")],
            target: LinkTarget::reference("r"),
            title: None,
        }])]
    );
    assert_eq!(doc.references().len(), 1);
    assert_eq!(
        doc.references().get("r"),
        Some(&ReferenceDef::new("http://e.com", Some("T".to_string())))
    );
}

#[test]
fn footnote_continuation() {
    let doc = parse_document("Text[^n]\n\n[^n]: one\n    two\n    three");
    assert_eq!(
        doc.footnotes().get("n").map(String::as_str),
        Some("one\ntwo\nthree")
    );
    assert_eq!(doc.blocks().len(), 1);
}

#[test]
fn table_alignment() {
    let doc = parse_document("| A | B | C |\n|:--|:--:|--:|\n| 1 | 2 | 3 |\n| 4 | 5 | 6 |");
    let [Block::Table { header, rows }] = doc.blocks() else {
        panic!("expected a single table, got {:?}", doc.blocks());
    };
    let expected = vec![Alignment::Left, Alignment::Center, Alignment::Right];
    let aligns = |cells: &[crate::models::Cell]| -> Vec<Alignment> {
        cells.iter().map(|c| c.alignment).collect()
    };
    assert_eq!(aligns(&header.cells), expected);
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(aligns(&row.cells), expected);
    }
}

#[test]
fn unresolved_reference_is_kept() {
    let doc = parse_document("[text][missing-label]");
    assert!(doc.references().is_empty());
    assert_eq!(doc.render(), "[text][missing-label]");
}

#[test]
fn crlf_input_is_normalized() {
    let doc = parse_document("# Title\r\n\r\nBody line\r\nnext\r\n");
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    Heading(1) "Title"
      Paragraph "Body line\nnext"
    "#);
}

#[test]
fn empty_document() {
    let doc = parse_document("");
    assert!(doc.blocks().is_empty());
    assert!(doc.metadata().is_none());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n   \n\t\n").blocks().is_empty());
}

// Termination: malformed and truncated constructs must still parse to
// completion and satisfy the structural invariants.

#[rstest]
#[case::lone_fence("```")]
#[case::fence_mismatch("~~~\n```\ncode")]
#[case::empty_quote(">")]
#[case::quote_with_space("> ")]
#[case::empty_item("* ")]
#[case::bare_hashes("#\n##\n# ")]
#[case::seven_hashes("####### too deep")]
#[case::lone_pipes("|\n|")]
#[case::empty_footnote("[^x]:")]
#[case::unclosed_yaml("---\nk: v")]
#[case::unclosed_toml("+++\nunclosed")]
#[case::only_rule("---")]
#[case::carriage_returns("\r\n\r\n")]
#[case::stacked_bullets("*\n*\n-\n+")]
#[case::deep_quotes("> > > > x\n> > y")]
#[case::dedented_items("    - a\n  - b\n- c")]
#[case::overlong_number("99999999999999999999999. item")]
#[case::largest_start_number("18446744073709551615. a\n1. b")]
#[case::whitespace_indented_code("    \n    \n")]
#[case::unclosed_inline("**a _b `c [d](e")]
fn pathological_input_terminates(#[case] md: &str) {
    let doc = parse_document(md);
    snapshot::invariants(&doc);
    // Rendering a parsed tree never panics either.
    let _ = doc.render();
}

#[test]
fn largest_start_number_survives_rendering() {
    let doc = parse_document("18446744073709551615. a\n1. b");
    let [Block::List { kind, items }] = doc.blocks() else {
        panic!("expected a single list, got {:?}", doc.blocks());
    };
    assert_eq!(*kind, ListKind::Ordered { start: u64::MAX });
    assert_eq!(items.len(), 2);
    assert_eq!(parse_document(&doc.render()), doc);
}

#[test]
fn quoted_frontmatter_is_dropped() {
    let doc = parse_document("> ---\n> k: v\n> ---\n> text");
    assert!(doc.metadata().is_none());
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    Blockquote
      Paragraph "text"
    "#);
}

#[test]
fn seven_hashes_is_a_paragraph() {
    let doc = parse_document("####### too deep");
    assert!(matches!(doc.blocks(), [Block::Paragraph { .. }]));
}

#[test]
fn unclosed_frontmatter_is_content() {
    let doc = parse_document("---\nk: v");
    assert!(doc.metadata().is_none());
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    HorizontalRule
    Paragraph "k: v"
    "#);
}
