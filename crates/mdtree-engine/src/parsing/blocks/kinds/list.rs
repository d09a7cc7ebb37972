use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Bullet, ListKind, TaskStatus};

fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^( *)([*+-]|\d+\.)\s+(.*)$").expect("Invalid list marker regex")
    })
}

/// The marker that opens a list item: `*`, `-`, `+` or `N.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bullet(Bullet),
    Ordered(u64),
}

impl Marker {
    pub fn list_kind(self) -> ListKind {
        match self {
            Marker::Bullet(bullet) => ListKind::Unordered { bullet },
            Marker::Ordered(start) => ListKind::Ordered { start },
        }
    }
}

/// A recognized list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Leading spaces before the marker.
    pub indent: usize,
    pub marker: Marker,
    /// Item text after the marker and its whitespace.
    pub content: &'a str,
}

impl<'a> ListMarker<'a> {
    /// Extra indentation, relative to the marker, of an item's continuation lines.
    pub const CONTINUATION_INDENT: usize = 2;

    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = marker_regex().captures(line)?;
        let indent = caps.get(1)?.as_str().len();
        let raw = caps.get(2)?.as_str();
        let marker = match raw.strip_suffix('.') {
            // Overlong numbers degrade to plain text rather than failing.
            Some(digits) => Marker::Ordered(digits.parse().ok()?),
            None => Marker::Bullet(raw.chars().next().and_then(Bullet::from_char)?),
        };
        let content = caps.get(3).map_or("", |m| m.as_str());
        Some(Self {
            indent,
            marker,
            content,
        })
    }

    /// Prefix continuation lines of an item with this marker indent must carry.
    pub fn continuation_prefix(indent: usize) -> String {
        " ".repeat(indent + Self::CONTINUATION_INDENT)
    }
}

/// Splits a leading `[x] ` / `[X] ` / `[ ] ` off an item's text.
pub fn split_task(text: &str) -> (Option<TaskStatus>, &str) {
    let status = match text.get(..4) {
        Some("[x] " | "[X] ") => TaskStatus::Completed,
        Some("[ ] ") => TaskStatus::Incomplete,
        _ => return (None, text),
    };
    (Some(status), &text[4..])
}

pub fn task_marker(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "[x] ",
        TaskStatus::Incomplete => "[ ] ",
    }
}
