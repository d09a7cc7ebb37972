use crate::models::{Metadata, MetadataFormat};

use super::lines::LineBuffer;

/// Consumes a leading frontmatter block, if there is a complete one.
///
/// The first line must be exactly `---` or `+++`; the block runs to the next
/// line exactly equal to the same delimiter. Without a closing delimiter the
/// cursor is left untouched and the opening line is ordinary content. Blank
/// lines after the closing delimiter are skipped.
pub fn extract_frontmatter(buf: &mut LineBuffer) -> Option<Metadata> {
    if buf.pos() != 0 {
        return None;
    }
    let format = MetadataFormat::from_delimiter(buf.peek()?)?;
    let delimiter = format.delimiter();

    let close = (1..buf.len()).find(|&i| buf.line(i) == Some(delimiter))?;
    let content = (1..close)
        .filter_map(|i| buf.line(i))
        .collect::<Vec<_>>()
        .join("\n");

    buf.seek(close + 1);
    buf.skip_blank_lines();

    log::debug!("frontmatter: {format:?} block spanning lines 0..={close}");
    Some(Metadata { format, content })
}
