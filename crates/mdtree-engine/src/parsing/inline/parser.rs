use crate::models::{EmphasisKind, InlineNode, LinkTarget};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, LinkMatch, LinkMatchTarget},
};

/// Characters that may start a construct; plain text runs stop before them.
const TRIGGERS: [char; 6] = ['*', '_', '`', '!', '[', '\n'];

type Rule = fn(&mut Cursor<'_>) -> Option<InlineNode>;

/// Rules in priority order. The first that matches at the cursor wins.
const RULES: [Rule; 10] = [
    try_parse_code_span,
    try_parse_strong,
    try_parse_italic,
    try_parse_link,
    try_parse_reference_link,
    try_parse_image,
    try_parse_reference_image,
    try_parse_line_break,
    try_parse_soft_break,
    try_parse_text,
];

/// Parses a text span into a sequence of [`InlineNode`]s.
///
/// Scans left to right trying [`RULES`] in order. Matching is greedy and never
/// backtracks, so overlapping delimiters resolve by rule order. When nothing
/// matches, one character is emitted as text. Adjacent text nodes are merged.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        let node = match RULES.iter().find_map(|rule| rule(&mut cur)) {
            Some(node) => node,
            None => match cur.bump() {
                Some(c) => InlineNode::Text(c.to_string()),
                None => break,
            },
        };
        push_merged(&mut out, node);
    }
    out
}

fn push_merged(out: &mut Vec<InlineNode>, node: InlineNode) {
    if let InlineNode::Text(next) = &node
        && let Some(InlineNode::Text(prev)) = out.last_mut()
    {
        prev.push_str(next);
        return;
    }
    out.push(node);
}

/// `` `code` `` with no backticks inside. Unclosed spans do not match.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let rest = cur.rest().strip_prefix(CodeSpan::TICK)?;
    let close = rest.find(CodeSpan::TICK)?;
    let inner = &rest[..close];
    cur.bump_n(inner.len() + 2 * CodeSpan::TICK.len_utf8());
    Some(InlineNode::Code(inner.to_string()))
}

fn try_parse_emphasis(cur: &mut Cursor<'_>, kind: EmphasisKind) -> Option<InlineNode> {
    let (inner, len) = Emphasis::match_at(kind, cur.rest())?;
    let content = parse_inline(inner);
    cur.bump_n(len);
    Some(InlineNode::Emphasis { kind, content })
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    try_parse_emphasis(cur, EmphasisKind::Strong)
}

fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    try_parse_emphasis(cur, EmphasisKind::Italic)
}

/// Builds the link/image parts from a match, tokenizing its text recursively.
fn link_parts(m: &LinkMatch<'_>) -> (Vec<InlineNode>, LinkTarget, Option<String>) {
    let content = parse_inline(m.text);
    match &m.target {
        LinkMatchTarget::Direct { url, title } => (
            content,
            LinkTarget::direct(*url),
            title.map(str::to_string),
        ),
        LinkMatchTarget::Reference { label } => (content, LinkTarget::reference(*label), None),
    }
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let m = Link::match_direct(cur.rest())?;
    Some(finish_link(cur, &m))
}

fn try_parse_reference_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let m = Link::match_reference(cur.rest())?;
    Some(finish_link(cur, &m))
}

fn finish_link(cur: &mut Cursor<'_>, m: &LinkMatch<'_>) -> InlineNode {
    let (content, target, title) = link_parts(m);
    cur.bump_n(m.len);
    InlineNode::Link {
        content,
        target,
        title,
    }
}

fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let m = Link::match_image(cur.rest(), false)?;
    Some(finish_image(cur, &m))
}

fn try_parse_reference_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let m = Link::match_image(cur.rest(), true)?;
    Some(finish_image(cur, &m))
}

fn finish_image(cur: &mut Cursor<'_>, m: &LinkMatch<'_>) -> InlineNode {
    let (content, target, title) = link_parts(m);
    cur.bump_n(m.len);
    InlineNode::Image {
        content,
        target,
        title,
    }
}

/// Two or more spaces followed by a newline.
fn try_parse_line_break(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let rest = cur.rest();
    let spaces = rest.len() - rest.trim_start_matches(' ').len();
    if spaces < 2 || rest.as_bytes().get(spaces) != Some(&b'\n') {
        return None;
    }
    cur.bump_n(spaces + 1);
    Some(InlineNode::LineBreak)
}

fn try_parse_soft_break(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with("\n") {
        return None;
    }
    cur.bump_n(1);
    Some(InlineNode::SoftBreak)
}

/// Longest run free of trigger characters.
///
/// Trailing spaces that form a hard break with the following newline are
/// left for [`try_parse_line_break`].
fn try_parse_text(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let rest = cur.rest();
    let end = rest.find(TRIGGERS).unwrap_or(rest.len());
    let mut run = &rest[..end];
    if rest[end..].starts_with('\n') {
        let kept = run.trim_end_matches(' ');
        if run.len() - kept.len() >= 2 {
            run = kept;
        }
    }
    if run.is_empty() {
        return None;
    }
    cur.bump_n(run.len());
    Some(InlineNode::Text(run.to_string()))
}
