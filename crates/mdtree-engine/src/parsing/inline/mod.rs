//! # Inline Parsing
//!
//! Cursor-based tokenizer for the text of paragraphs, headings, list items
//! and table cells.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Emphasis, Link)
//! - **`cursor`**: `Cursor` for left-to-right scanning
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Rule Precedence
//!
//! Code span, strong, italic, link, reference link, image, reference image,
//! hard break, soft break, text. Code spans are raw zones:
//! `` `[x](y)` `` parses as a single code span, not a link.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
