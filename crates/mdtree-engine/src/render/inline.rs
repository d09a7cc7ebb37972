use crate::models::{InlineNode, LinkTarget};
use crate::parsing::inline::kinds::{CodeSpan, Emphasis, Link};

/// Renders inline nodes back to markup.
pub fn render_inline(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_inline(&mut out, node);
    }
    out
}

fn write_inline(out: &mut String, node: &InlineNode) {
    match node {
        InlineNode::Text(s) => out.push_str(s),
        InlineNode::Emphasis { kind, content } => {
            let delim = Emphasis::delimiter(*kind);
            out.push_str(delim);
            out.push_str(&render_inline(content));
            out.push_str(delim);
        }
        InlineNode::Code(s) => {
            out.push(CodeSpan::TICK);
            out.push_str(s);
            out.push(CodeSpan::TICK);
        }
        InlineNode::Link {
            content,
            target,
            title,
        } => write_link(out, content, target, title.as_deref()),
        InlineNode::Image {
            content,
            target,
            title,
        } => {
            out.push(Link::IMAGE_PREFIX);
            write_link(out, content, target, title.as_deref());
        }
        InlineNode::LineBreak => out.push_str("  \n"),
        InlineNode::SoftBreak => out.push('\n'),
    }
}

fn write_link(out: &mut String, content: &[InlineNode], target: &LinkTarget, title: Option<&str>) {
    out.push('[');
    out.push_str(&render_inline(content));
    out.push(']');
    match target {
        LinkTarget::Direct { url } => {
            out.push('(');
            out.push_str(url);
            if let Some(title) = title {
                out.push_str(&format!(" \"{title}\""));
            }
            out.push(')');
        }
        LinkTarget::Reference { label } => {
            out.push('[');
            out.push_str(label);
            out.push(']');
        }
    }
}
