use std::sync::OnceLock;

use regex::Regex;

use crate::models::EmphasisKind;

/// Strong (`**`/`__`) and italic (`*`/`_`) emphasis.
///
/// Content may not contain `*` or `_`, so emphasis never nests inside
/// emphasis; it can still nest inside link text and vice versa.
pub struct Emphasis;

impl Emphasis {
    fn strong_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^(?:\*\*([^*_]+)\*\*|__([^*_]+)__)").expect("Invalid strong regex")
        })
    }

    fn italic_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^(?:\*([^*_]+)\*|_([^*_]+)_)").expect("Invalid italic regex")
        })
    }

    /// Matches emphasis of `kind` at the start of `s`, returning the inner
    /// text and the total matched length.
    pub fn match_at(kind: EmphasisKind, s: &str) -> Option<(&str, usize)> {
        let re = match kind {
            EmphasisKind::Strong => Self::strong_regex(),
            EmphasisKind::Italic => Self::italic_regex(),
        };
        let caps = re.captures(s)?;
        let inner = caps.get(1).or_else(|| caps.get(2))?;
        Some((inner.as_str(), caps.get(0)?.len()))
    }

    /// Canonical delimiter for rendering.
    pub fn delimiter(kind: EmphasisKind) -> &'static str {
        match kind {
            EmphasisKind::Strong => "**",
            EmphasisKind::Italic => "*",
        }
    }
}
