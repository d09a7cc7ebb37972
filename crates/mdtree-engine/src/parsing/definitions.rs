use std::sync::OnceLock;

use regex::Regex;

use crate::models::{DefinitionTable, ReferenceDef};

use super::lines::{LineBuffer, is_blank};

/// Footnote continuation lines carry this prefix.
pub const FOOTNOTE_INDENT: &str = "    ";

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*\[([^\]\^][^\]]*)\]:\s*(\S+)(?:\s+"([^"]*)")?\s*$"#)
            .expect("Invalid reference definition regex")
    })
}

fn footnote_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*\[\^([^\]]+)\]:\s*(.*)$").expect("Invalid footnote definition regex")
    })
}

/// Reference and footnote tables collected by [`extract_definitions`].
#[derive(Debug, Default)]
pub struct Definitions {
    pub references: DefinitionTable<ReferenceDef>,
    pub footnotes: DefinitionTable<String>,
}

/// Pre-pass over every line from the cursor onwards.
///
/// Definition lines are recorded and blanked in place so block parsing sees
/// them as blank lines. The cursor itself does not move.
pub fn extract_definitions(buf: &mut LineBuffer) -> Definitions {
    let mut defs = Definitions::default();
    let mut i = buf.pos();

    while i < buf.len() {
        let Some(line) = buf.line(i) else { break };

        if let Some((label, first)) = parse_footnote_start(line) {
            buf.blank_line(i);
            let (body, consumed) = collect_footnote_body(buf, i + 1, first);
            log::trace!("footnote [^{label}] on line {i}, {consumed} continuation lines");
            defs.footnotes.insert(label, body);
            i += 1 + consumed;
            continue;
        }

        if let Some((label, def)) = parse_reference(line) {
            log::trace!("reference [{label}] on line {i}");
            buf.blank_line(i);
            defs.references.insert(label, def);
        }
        i += 1;
    }

    log::debug!(
        "definitions: {} references, {} footnotes",
        defs.references.len(),
        defs.footnotes.len()
    );
    defs
}

/// Matches `[label]: url "title"`.
pub fn parse_reference(line: &str) -> Option<(String, ReferenceDef)> {
    let caps = reference_regex().captures(line)?;
    let label = caps.get(1)?.as_str().to_string();
    let url = caps.get(2)?.as_str();
    let title = caps.get(3).map(|m| m.as_str().to_string());
    Some((label, ReferenceDef::new(url, title)))
}

/// Matches `[^label]: body`, returning the label and first body line.
pub fn parse_footnote_start(line: &str) -> Option<(String, String)> {
    let caps = footnote_regex().captures(line)?;
    let label = caps.get(1)?.as_str().to_string();
    let first = caps.get(2).map_or("", |m| m.as_str().trim_end()).to_string();
    Some((label, first))
}

/// Gathers indented or blank lines starting at `start`, blanking them.
///
/// Returns the joined body and how many lines were taken. Blank lines at the
/// tail of the run are dropped from the body.
fn collect_footnote_body(buf: &mut LineBuffer, start: usize, first: String) -> (String, usize) {
    let mut parts = vec![first];
    let mut i = start;

    while let Some(line) = buf.line(i) {
        if let Some(rest) = line.strip_prefix(FOOTNOTE_INDENT) {
            parts.push(rest.to_string());
        } else if is_blank(line) {
            parts.push(String::new());
        } else {
            break;
        }
        buf.blank_line(i);
        i += 1;
    }

    while parts.len() > 1 && parts.last().is_some_and(|p| is_blank(p)) {
        parts.pop();
    }
    (parts.join("\n"), i - start)
}
