use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule: three or more of the same `*`, `-` or `_` alone on a line.
pub struct ThematicBreak;

impl ThematicBreak {
    /// Canonical rendering.
    pub const RENDERED: &'static str = "---";

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^(?:\*{3,}|-{3,}|_{3,})\s*$").expect("Invalid thematic break regex")
        })
    }

    pub fn matches(line: &str) -> bool {
        Self::regex().is_match(line)
    }
}
