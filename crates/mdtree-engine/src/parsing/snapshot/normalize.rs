use crate::models::{Block, CodeBlockKind, Document, ListItem, Row};
use crate::render::render_inline;

const INDENT: &str = "  ";

/// Converts a parsed document into an indented outline for snapshot testing.
///
/// One line per node. Inline content is shown as its canonical rendering,
/// quoted with `Debug` so breaks stay visible. Example:
///
/// ```text
/// Heading(1) "A"
///   Paragraph "para1"
/// List(Unordered { bullet: Asterisk })
///   Item "a"
/// ```
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(meta) = doc.metadata() {
        line(&mut out, 0, &format!("Metadata({:?}) {:?}", meta.format, meta.content));
    }
    outline_blocks(&mut out, 0, doc.blocks());
    for (label, body) in doc.footnotes().iter() {
        line(&mut out, 0, &format!("Footnote({label}) {body:?}"));
    }
    for (label, def) in doc.references().iter() {
        let title = def
            .title
            .as_deref()
            .map(|t| format!(" {t:?}"))
            .unwrap_or_default();
        line(&mut out, 0, &format!("Reference({label}) {:?}{title}", def.url));
    }
    out.trim_end().to_string()
}

fn line(out: &mut String, depth: usize, text: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(text);
    out.push('\n');
}

fn outline_blocks(out: &mut String, depth: usize, blocks: &[Block]) {
    for block in blocks {
        outline_block(out, depth, block);
    }
}

fn outline_block(out: &mut String, depth: usize, block: &Block) {
    match block {
        Block::Heading {
            level,
            inline,
            nested,
        } => {
            line(out, depth, &format!("Heading({level}) {:?}", render_inline(inline)));
            outline_blocks(out, depth + 1, nested);
        }
        Block::Paragraph { inline } => {
            line(out, depth, &format!("Paragraph {:?}", render_inline(inline)));
        }
        Block::CodeBlock {
            kind,
            language,
            content,
        } => {
            let head = match (kind, language) {
                (CodeBlockKind::Fenced, Some(lang)) => format!("CodeBlock(Fenced, {lang})"),
                (kind, _) => format!("CodeBlock({kind:?})"),
            };
            line(out, depth, &format!("{head} {content:?}"));
        }
        Block::Blockquote { nested } => {
            line(out, depth, "Blockquote");
            outline_blocks(out, depth + 1, nested);
        }
        Block::List { kind, items } => {
            line(out, depth, &format!("List({kind:?})"));
            for item in items {
                outline_item(out, depth + 1, item);
            }
        }
        Block::Table { header, rows } => {
            let alignments: Vec<_> = header.cells.iter().map(|c| c.alignment).collect();
            line(out, depth, &format!("Table {alignments:?}"));
            line(out, depth + 1, &format!("Header {}", row_cells(header)));
            for row in rows {
                line(out, depth + 1, &format!("Row {}", row_cells(row)));
            }
        }
        Block::HorizontalRule => line(out, depth, "HorizontalRule"),
    }
}

fn outline_item(out: &mut String, depth: usize, item: &ListItem) {
    let task = item
        .task
        .map(|t| format!("({t:?})"))
        .unwrap_or_default();
    line(out, depth, &format!("Item{task} {:?}", render_inline(&item.inline)));
    outline_blocks(out, depth + 1, &item.nested);
}

fn row_cells(row: &Row) -> String {
    let cells: Vec<String> = row.cells.iter().map(|c| render_inline(&c.inline)).collect();
    format!("{cells:?}")
}
