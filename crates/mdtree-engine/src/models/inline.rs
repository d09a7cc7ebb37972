/// A parsed inline node.
///
/// Emphasis, link text and image alt text own their children, so inline
/// content is a tree rather than a flat run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text outside any construct.
    Text(String),
    /// `**strong**` / `__strong__` or `*italic*` / `_italic_`.
    Emphasis {
        kind: EmphasisKind,
        content: Vec<InlineNode>,
    },
    /// A code span. Raw: nothing inside is tokenized.
    Code(String),
    Link {
        content: Vec<InlineNode>,
        target: LinkTarget,
        title: Option<String>,
    },
    /// An image; `content` is the alt text.
    Image {
        content: Vec<InlineNode>,
        target: LinkTarget,
        title: Option<String>,
    },
    /// Two trailing spaces before a newline.
    LineBreak,
    /// A bare newline.
    SoftBreak,
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Strong,
    Italic,
}

/// Where a link or image points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// `(url)` written inline.
    Direct { url: String },
    /// `[label]` resolved through the document's reference table.
    Reference { label: String },
}

impl LinkTarget {
    pub fn direct(url: impl Into<String>) -> Self {
        LinkTarget::Direct { url: url.into() }
    }

    pub fn reference(label: impl Into<String>) -> Self {
        LinkTarget::Reference {
            label: label.into(),
        }
    }
}
