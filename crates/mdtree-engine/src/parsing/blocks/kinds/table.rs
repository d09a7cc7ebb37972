use std::sync::OnceLock;

use regex::Regex;

use crate::models::Alignment;

/// Pipe table syntax.
pub struct Table;

impl Table {
    pub const SEPARATOR: char = '|';

    fn alignment_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^[\s|:-]+$").expect("Invalid table alignment regex"))
    }

    pub fn is_row(line: &str) -> bool {
        line.contains(Self::SEPARATOR)
    }

    /// Splits a row on `|`, trimming cells and dropping empty edge fragments.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = line.split(Self::SEPARATOR).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }

    /// Column alignments from a `|:--|:-:|--:|` row, or `None` if the line
    /// is not an alignment row.
    pub fn parse_alignments(line: &str) -> Option<Vec<Alignment>> {
        if !Self::alignment_regex().is_match(line) {
            return None;
        }
        Some(
            Self::split_cells(line)
                .into_iter()
                .map(Self::cell_alignment)
                .collect(),
        )
    }

    fn cell_alignment(cell: &str) -> Alignment {
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            (true, false) => Alignment::Left,
            (false, false) => Alignment::Default,
        }
    }

    pub fn separator_cell(alignment: Alignment) -> &'static str {
        match alignment {
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
            Alignment::Default => "---",
        }
    }
}
