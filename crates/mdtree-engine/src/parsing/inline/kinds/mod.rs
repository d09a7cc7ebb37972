//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `TICK` - raw zone that suppresses other parsing
//! - **`Emphasis`**: strong and italic delimiters
//! - **`Link`**: direct and reference forms for links and images
//!
//! The parser calls into these types; it never hardcodes delimiters.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Link, LinkMatch, LinkMatchTarget};
