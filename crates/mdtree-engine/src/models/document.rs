use std::fmt;

use super::{
    block::Block,
    definition_table::{DefinitionTable, ReferenceDef},
};

/// Frontmatter dialect, chosen by the delimiter line that opened the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    /// `---`
    Yaml,
    /// `+++`
    Toml,
}

impl MetadataFormat {
    pub const YAML_DELIMITER: &'static str = "---";
    pub const TOML_DELIMITER: &'static str = "+++";

    pub fn from_delimiter(line: &str) -> Option<Self> {
        match line {
            Self::YAML_DELIMITER => Some(MetadataFormat::Yaml),
            Self::TOML_DELIMITER => Some(MetadataFormat::Toml),
            _ => None,
        }
    }

    pub fn delimiter(self) -> &'static str {
        match self {
            MetadataFormat::Yaml => Self::YAML_DELIMITER,
            MetadataFormat::Toml => Self::TOML_DELIMITER,
        }
    }
}

/// Verbatim frontmatter block content (delimiters excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub format: MetadataFormat,
    pub content: String,
}

/// A parsed document.
///
/// Produced wholesale by [`Document::parse`] and read-only afterwards.
/// Consumers wanting a modified tree build a new one with
/// [`Document::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    blocks: Vec<Block>,
    references: DefinitionTable<ReferenceDef>,
    footnotes: DefinitionTable<String>,
    metadata: Option<Metadata>,
}

impl Document {
    pub fn from_parts(
        blocks: Vec<Block>,
        references: DefinitionTable<ReferenceDef>,
        footnotes: DefinitionTable<String>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            blocks,
            references,
            footnotes,
            metadata,
        }
    }

    /// Parse markup text into a document. Never fails.
    pub fn parse(text: &str) -> Self {
        crate::parsing::parse_document(text)
    }

    /// Render back to canonical markup text.
    pub fn render(&self) -> String {
        crate::render::render_document(self)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn references(&self) -> &DefinitionTable<ReferenceDef> {
        &self.references
    }

    pub fn footnotes(&self) -> &DefinitionTable<String> {
        &self.footnotes
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
