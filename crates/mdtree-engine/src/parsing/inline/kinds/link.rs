use std::sync::OnceLock;

use regex::Regex;

/// A link or image recognized at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    pub text: &'a str,
    pub target: LinkMatchTarget<'a>,
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkMatchTarget<'a> {
    Direct { url: &'a str, title: Option<&'a str> },
    /// Empty labels have already been replaced by the link text.
    Reference { label: &'a str },
}

/// Link and image syntax: `[text](url "title")`, `[text][label]`, and the
/// same forms prefixed with `!` for images.
pub struct Link;

impl Link {
    pub const IMAGE_PREFIX: char = '!';

    fn direct_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r#"^\[([^\]]*)\]\(([^\s)]*)(?:\s+"([^"]*)")?\)"#)
                .expect("Invalid direct link regex")
        })
    }

    fn reference_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^\[([^\]]*)\]\[([^\]]*)\]").expect("Invalid reference link regex")
        })
    }

    pub fn match_direct(s: &str) -> Option<LinkMatch<'_>> {
        let caps = Self::direct_regex().captures(s)?;
        Some(LinkMatch {
            text: caps.get(1)?.as_str(),
            target: LinkMatchTarget::Direct {
                url: caps.get(2)?.as_str(),
                title: caps.get(3).map(|m| m.as_str()),
            },
            len: caps.get(0)?.len(),
        })
    }

    pub fn match_reference(s: &str) -> Option<LinkMatch<'_>> {
        let caps = Self::reference_regex().captures(s)?;
        let text = caps.get(1)?.as_str();
        let label = caps.get(2).map_or("", |m| m.as_str());
        Some(LinkMatch {
            text,
            target: LinkMatchTarget::Reference {
                label: if label.is_empty() { text } else { label },
            },
            len: caps.get(0)?.len(),
        })
    }

    /// Image forms are the link forms behind a `!`.
    pub fn match_image(s: &str, reference: bool) -> Option<LinkMatch<'_>> {
        let rest = s.strip_prefix(Self::IMAGE_PREFIX)?;
        let m = if reference {
            Self::match_reference(rest)?
        } else {
            Self::match_direct(rest)?
        };
        Some(LinkMatch {
            len: m.len + Self::IMAGE_PREFIX.len_utf8(),
            ..m
        })
    }
}
