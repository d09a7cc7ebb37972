/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in the
/// dispatcher.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Prefix written in front of every rendered line.
    pub const RENDER_PREFIX: &'static str = "> ";

    pub fn starts(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` and at most one following space.
    ///
    /// Returns `None` when the line is not part of a blockquote. Nested
    /// quotes keep their remaining `>` for the recursive parse.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
