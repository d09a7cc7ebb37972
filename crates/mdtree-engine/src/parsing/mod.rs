//! # Parsing
//!
//! Text in, [`Document`] out. Phases, in order:
//!
//! 1. **`lines`**: split the text into a [`LineBuffer`] with a forward-only cursor
//! 2. **`frontmatter`**: consume a leading `---`/`+++` metadata block
//! 3. **`definitions`**: record and blank `[label]: url` and `[^label]: body` lines
//! 4. **`blocks`**: dispatch block by block until the buffer is exhausted,
//!    calling **`inline`** for leaf text
//!
//! Nothing here can fail: malformed constructs degrade to plain text.

pub mod blocks;
pub mod definitions;
pub mod frontmatter;
pub mod inline;
pub mod lines;
pub mod snapshot;

use crate::models::{Block, Document};

use blocks::BlockParser;
use definitions::extract_definitions;
use frontmatter::extract_frontmatter;
use lines::LineBuffer;

pub use inline::parse_inline;

pub fn parse_document(text: &str) -> Document {
    let mut buf = LineBuffer::new(text);
    let metadata = extract_frontmatter(&mut buf);
    let defs = extract_definitions(&mut buf);
    let blocks = BlockParser::new(&mut buf).parse_blocks();
    log::debug!("parsed {} top-level blocks from {} lines", blocks.len(), buf.len());

    Document::from_parts(blocks, defs.references, defs.footnotes, metadata)
}

/// Parses blockquote contents as a document of their own, keeping only its
/// blocks. Metadata and definitions found inside are scoped to the quote and
/// dropped with it.
pub(crate) fn parse_quoted(text: &str) -> Vec<Block> {
    let doc = parse_document(text);
    if doc.metadata().is_some() || !doc.references().is_empty() || !doc.footnotes().is_empty() {
        log::debug!(
            "dropping metadata, {} references and {} footnotes scoped to a blockquote",
            doc.references().len(),
            doc.footnotes().len()
        );
    }
    doc.into_blocks()
}

#[cfg(test)]
mod tests;
