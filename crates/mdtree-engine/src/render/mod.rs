//! # Rendering
//!
//! [`Document`] back to canonical markup text. Pure and infallible.
//!
//! Output sections, each separated by one blank line and omitted when empty:
//! frontmatter, blocks, footnote definitions, reference definitions.
//! No trailing newline is added.

pub mod blocks;
pub mod inline;

use crate::models::{DefinitionTable, Document, Metadata, ReferenceDef};
use crate::parsing::definitions::FOOTNOTE_INDENT;

pub use blocks::{render_block, render_blocks};
pub use inline::render_inline;

pub fn render_document(doc: &Document) -> String {
    let sections = [
        doc.metadata().map(render_metadata),
        Some(render_blocks(doc.blocks())),
        Some(render_footnotes(doc.footnotes())),
        Some(render_references(doc.references())),
    ];
    sections
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_metadata(metadata: &Metadata) -> String {
    let delim = metadata.format.delimiter();
    if metadata.content.is_empty() {
        format!("{delim}\n{delim}")
    } else {
        format!("{delim}\n{}\n{delim}", metadata.content)
    }
}

fn render_footnotes(footnotes: &DefinitionTable<String>) -> String {
    footnotes
        .iter()
        .map(|(label, body)| {
            let body = body
                .split('\n')
                .enumerate()
                .map(|(i, line)| {
                    if i == 0 || line.is_empty() {
                        line.to_string()
                    } else {
                        format!("{FOOTNOTE_INDENT}{line}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("[^{label}]: {body}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_references(references: &DefinitionTable<ReferenceDef>) -> String {
    references
        .iter()
        .map(|(label, def)| match &def.title {
            Some(title) => format!("[{label}]: {} \"{title}\"", def.url),
            None => format!("[{label}]: {}", def.url),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
