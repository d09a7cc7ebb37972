use crate::models::{Block, CodeBlockKind, ListItem, ListKind, Row};
use crate::parsing::blocks::kinds::{
    BlockQuote, CodeFence, FenceKind, Heading, IndentedCode, ListMarker, Table, ThematicBreak,
    task_marker,
};

use super::inline::render_inline;

/// Renders a block sequence with canonical spacing.
///
/// Blocks are separated by a blank line, except that a horizontal rule and
/// the block after a heading with nested content follow on the next line.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Block> = None;
    for block in blocks {
        if let Some(prev) = prev {
            out.push_str(separator(prev, block));
        }
        out.push_str(&render_block(block));
        prev = Some(block);
    }
    out
}

fn separator(prev: &Block, next: &Block) -> &'static str {
    if matches!(next, Block::HorizontalRule) || prev.is_section() {
        "\n"
    } else {
        "\n\n"
    }
}

pub fn render_block(block: &Block) -> String {
    match block {
        Block::Heading {
            level,
            inline,
            nested,
        } => {
            let marker = Heading::MARKER.to_string().repeat(usize::from(*level));
            let mut out = format!("{marker} {}", render_inline(inline));
            if !nested.is_empty() {
                out.push_str("\n\n");
                out.push_str(&render_blocks(nested));
            }
            out
        }
        Block::Paragraph { inline } => render_inline(inline),
        Block::CodeBlock {
            kind,
            language,
            content,
        } => render_code_block(*kind, language.as_deref(), content),
        Block::Blockquote { nested } => render_block_quote(nested),
        Block::List { kind, items } => render_list(*kind, items),
        Block::Table { header, rows } => render_table(header, rows),
        Block::HorizontalRule => ThematicBreak::RENDERED.to_string(),
    }
}

fn render_code_block(kind: CodeBlockKind, language: Option<&str>, content: &str) -> String {
    match kind {
        CodeBlockKind::Fenced => {
            let fence = CodeFence::marker(FenceKind::Backticks);
            let language = language.unwrap_or_default();
            if content.is_empty() {
                format!("{fence}{language}\n{fence}")
            } else {
                format!("{fence}{language}\n{content}\n{fence}")
            }
        }
        CodeBlockKind::Indented => prefix_lines(content, IndentedCode::INDENT),
    }
}

fn render_block_quote(nested: &[Block]) -> String {
    let inner = render_blocks(nested);
    if inner.is_empty() {
        return BlockQuote::PREFIX.to_string();
    }
    inner
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                BlockQuote::PREFIX.to_string()
            } else {
                format!("{}{line}", BlockQuote::RENDER_PREFIX)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_list(kind: ListKind, items: &[ListItem]) -> String {
    let continuation = ListMarker::continuation_prefix(0);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = match kind {
                ListKind::Ordered { start } => format!("{}.", start.saturating_add(i as u64)),
                ListKind::Unordered { bullet } => bullet.as_char().to_string(),
            };
            let task = item.task.map(task_marker).unwrap_or_default();
            let mut out = format!("{marker} {task}{}", render_inline(&item.inline));
            if !item.nested.is_empty() {
                out.push('\n');
                out.push_str(&prefix_lines(&render_blocks(&item.nested), &continuation));
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(header: &Row, rows: &[Row]) -> String {
    let separator = format_row(
        header
            .cells
            .iter()
            .map(|c| Table::separator_cell(c.alignment).to_string()),
    );

    let mut lines = vec![render_row(header), separator];
    lines.extend(rows.iter().map(render_row));
    lines.join("\n")
}

fn render_row(row: &Row) -> String {
    format_row(row.cells.iter().map(|c| render_inline(&c.inline)))
}

fn format_row(cells: impl Iterator<Item = String>) -> String {
    let mut out = String::from("|");
    for cell in cells {
        out.push(' ');
        out.push_str(&cell);
        out.push_str(" |");
    }
    out
}

/// Prefixes every non-empty line of `text`.
fn prefix_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
