use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: 1-6 `#`, required whitespace, text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("Invalid heading regex"))
    }

    /// Returns the level and trimmed text of a heading line.
    pub fn parse_line(line: &str) -> Option<(u8, &str)> {
        let caps = Self::regex().captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        Some((level, text))
    }

    pub fn level(line: &str) -> Option<u8> {
        Self::parse_line(line).map(|(level, _)| level)
    }
}
