use super::inline::InlineNode;

/// A block-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// An ATX heading. `nested` holds every following block up to the next
    /// heading line.
    Heading {
        level: u8,
        inline: Vec<InlineNode>,
        nested: Vec<Block>,
    },
    Paragraph {
        inline: Vec<InlineNode>,
    },
    CodeBlock {
        kind: CodeBlockKind,
        language: Option<String>,
        content: String,
    },
    /// Blockquote contents re-parsed as an independent document.
    Blockquote {
        nested: Vec<Block>,
    },
    List {
        kind: ListKind,
        items: Vec<ListItem>,
    },
    Table {
        header: Row,
        rows: Vec<Row>,
    },
    HorizontalRule,
}

impl Block {
    pub fn paragraph(inline: Vec<InlineNode>) -> Self {
        Block::Paragraph { inline }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Heading with at least one nested block.
    pub fn is_section(&self) -> bool {
        matches!(self, Block::Heading { nested, .. } if !nested.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeBlockKind {
    /// Delimited by ``` or ~~~.
    Fenced,
    /// Recognized by a 4-space prefix.
    Indented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered { start: u64 },
    Unordered { bullet: Bullet },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bullet {
    Asterisk,
    Dash,
    Plus,
}

impl Bullet {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Bullet::Asterisk),
            '-' => Some(Bullet::Dash),
            '+' => Some(Bullet::Plus),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bullet::Asterisk => '*',
            Bullet::Dash => '-',
            Bullet::Plus => '+',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub inline: Vec<InlineNode>,
    /// Blocks parsed from the item's indented continuation lines.
    pub nested: Vec<Block>,
    pub task: Option<TaskStatus>,
}

impl ListItem {
    pub fn new(inline: Vec<InlineNode>) -> Self {
        Self {
            inline,
            nested: Vec::new(),
            task: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub inline: Vec<InlineNode>,
    pub alignment: Alignment,
}
