//! # Block Parsing
//!
//! Line-oriented block segmentation over a [`LineBuffer`](super::lines::LineBuffer).
//!
//! ## Dispatch Order
//!
//! At the cursor, the first non-blank line is classified by trying, in order:
//! horizontal rule, heading, fenced code, indented code, blockquote, list item,
//! table (two-line lookahead), and finally paragraph.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types owning their syntax (Heading, CodeFence, ListMarker...)
//! - **`open`**: `try_open` single-line classification shared by dispatch and
//!   paragraph interruption
//! - **`parser`**: `BlockParser`, which consumes lines and builds `Block`s
//!
//! ## Key Invariants
//!
//! - The cursor never moves backwards; each dispatch consumes at least one line
//! - Headings swallow following blocks until the next heading line of any level
//! - Blockquote and list item contents are re-parsed from fresh line buffers
//! - Fenced code blocks are raw zones: no block/inline parsing inside

pub mod kinds;
pub mod open;
pub mod parser;

pub use open::{BlockOpen, try_open};
pub use parser::BlockParser;
