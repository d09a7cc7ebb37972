pub mod block;
pub mod definition_table;
pub mod document;
pub mod inline;

pub use block::{
    Alignment, Block, Bullet, Cell, CodeBlockKind, ListItem, ListKind, Row, TaskStatus,
};
pub use definition_table::{DefinitionTable, ReferenceDef};
pub use document::{Document, Metadata, MetadataFormat};
pub use inline::{EmphasisKind, InlineNode, LinkTarget};
