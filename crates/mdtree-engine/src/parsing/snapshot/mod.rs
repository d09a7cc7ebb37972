//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed [`Document`](crate::models::Document) to a
//!   stable indented outline for `insta` snapshot testing
//! - **`invariants`**: Structural checks every parse result must satisfy
//!   (heading levels in range, no empty or adjacent text runs, sections never
//!   directly nest headings, table alignments agree across rows)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by outline snapshots of small inputs rather than
//! by a formal grammar. Rendering is pinned by asserting on rendered text.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
