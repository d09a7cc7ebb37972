/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback leaf block when no
/// other block opener matches. A paragraph runs until a blank line or a line
/// that opens an interrupting block (see `BlockOpen::interrupts_paragraph`).
pub struct Paragraph;

impl Paragraph {
    /// Joins accumulated lines into the text handed to the inline tokenizer.
    ///
    /// Trailing whitespace of the final line is dropped; interior trailing
    /// spaces are kept because they encode hard line breaks.
    pub fn join(lines: &[&str]) -> String {
        lines.join("\n").trim_end().to_string()
    }
}
