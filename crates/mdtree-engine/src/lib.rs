pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{IoError, file_text, read_document, read_source, write_document};
pub use models::*;
pub use parsing::parse_document;
pub use render::render_document;
