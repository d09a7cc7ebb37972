use super::kinds::{
    BlockQuote, CodeFence, FenceKind, Heading, IndentedCode, ListMarker, Marker, ThematicBreak,
};

/// Which block a line opens, decided from that line alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    ThematicBreak,
    Heading { level: u8 },
    FencedCode { kind: FenceKind },
    IndentedCode,
    BlockQuote,
    ListItem { indent: usize, marker: Marker },
}

impl BlockOpen {
    /// Whether this opener ends a paragraph that is being accumulated.
    ///
    /// Indented code does not: an indented line continues the paragraph.
    pub fn interrupts_paragraph(&self) -> bool {
        !matches!(self, BlockOpen::IndentedCode)
    }
}

/// Classifies a line by trying each single-line opener in priority order.
///
/// Tables need a second line of lookahead and paragraphs are the fallback,
/// so neither appears here.
pub fn try_open(line: &str) -> Option<BlockOpen> {
    if ThematicBreak::matches(line) {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some(level) = Heading::level(line) {
        return Some(BlockOpen::Heading { level });
    }
    if let Some(kind) = CodeFence::sig(line) {
        return Some(BlockOpen::FencedCode { kind });
    }
    if IndentedCode::starts(line) {
        return Some(BlockOpen::IndentedCode);
    }
    if BlockQuote::starts(line) {
        return Some(BlockOpen::BlockQuote);
    }
    if let Some(item) = ListMarker::parse(line) {
        return Some(BlockOpen::ListItem {
            indent: item.indent,
            marker: item.marker,
        });
    }
    None
}
