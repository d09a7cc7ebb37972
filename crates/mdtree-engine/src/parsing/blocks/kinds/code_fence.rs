#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn sig(line: &str) -> Option<FenceKind> {
        if line.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if line.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// Recognizes an opening fence, returning its kind and language tag.
    pub fn open(line: &str) -> Option<(FenceKind, Option<String>)> {
        let kind = Self::sig(line)?;
        let language = line[Self::marker(kind).len()..].trim();
        let language = (!language.is_empty()).then(|| language.to_string());
        Some((kind, language))
    }

    pub fn marker(kind: FenceKind) -> &'static str {
        match kind {
            FenceKind::Backticks => Self::BACKTICKS,
            FenceKind::Tildes => Self::TILDES,
        }
    }

    /// A line closes the fence when it starts with the same marker.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        Self::sig(line) == Some(kind)
    }
}
