/// Code block recognized purely by its 4-space line prefix.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: &'static str = "    ";

    pub fn starts(line: &str) -> bool {
        line.starts_with(Self::INDENT)
    }

    /// Content of a line inside the block, or `None` if the block ends here.
    ///
    /// Indented lines lose their prefix; unindented blank lines become empty.
    pub fn content(line: &str) -> Option<&str> {
        match line.strip_prefix(Self::INDENT) {
            Some(rest) => Some(rest),
            None if line.trim().is_empty() => Some(""),
            None => None,
        }
    }
}
