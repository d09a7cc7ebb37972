/// The document's lines plus a read position shared by every block routine.
///
/// The position only ever moves forward. Lines themselves may be blanked in
/// place (the definition pre-pass does this) but never inserted or removed.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    pos: usize,
}

impl LineBuffer {
    /// Splits `text` on `\n` or `\r\n`. Empty input has no lines.
    pub fn new(text: &str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
                .collect()
        };
        Self { lines, pos: 0 }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// The line under the cursor.
    pub fn peek(&self) -> Option<&str> {
        self.peek_at(0)
    }

    /// The line `offset` lines past the cursor.
    pub fn peek_at(&self, offset: usize) -> Option<&str> {
        self.line(self.pos + offset)
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Consumes and returns the line under the cursor.
    pub fn next_line(&mut self) -> Option<&str> {
        let index = self.pos;
        if index >= self.lines.len() {
            return None;
        }
        self.pos += 1;
        self.line(index)
    }

    /// Advances by `n` lines, clamped to the end of the buffer.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.lines.len());
    }

    /// Moves the cursor forward to `pos`. Never moves it back.
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor moved backwards: {} -> {pos}", self.pos);
        self.pos = pos.max(self.pos).min(self.lines.len());
    }

    pub fn current_is_blank(&self) -> bool {
        self.peek().is_some_and(is_blank)
    }

    /// Advances past blank lines, returning how many were skipped.
    pub fn skip_blank_lines(&mut self) -> usize {
        let start = self.pos;
        while self.current_is_blank() {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Replaces line `index` with an empty line.
    pub fn blank_line(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.clear();
        }
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
