//! Editable buffer behind the error-message text area
//!
//! The cursor is a character index (not a byte offset) so multi-byte input
//! such as pasted stack traces with non-ASCII paths edits correctly.

/// Multi-line text with a caret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorInput {
    text: String,
    /// Caret position in characters, `0..=char_count`
    cursor: usize,
}

impl ErrorInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, caret at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the caret
    fn byte_index(&self) -> usize {
        self.byte_index_of(self.cursor)
    }

    fn byte_index_of(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a pasted block verbatim. Carriage returns are normalised to
    /// `\n` so Windows clipboards don't leave stray `\r` in the payload.
    pub fn insert_str(&mut self, s: &str) {
        let normalised = s.replace("\r\n", "\n").replace('\r', "\n");
        let at = self.byte_index();
        self.text.insert_str(at, &normalised);
        self.cursor += normalised.chars().count();
    }

    /// Delete the character before the caret
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.text.remove(at);
    }

    /// Delete the character under the caret
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index();
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move to the start of the current line
    pub fn move_line_start(&mut self) {
        let (line_start, _) = self.current_line_bounds();
        self.cursor = line_start;
    }

    /// Move to the end of the current line
    pub fn move_line_end(&mut self) {
        let (_, line_end) = self.current_line_bounds();
        self.cursor = line_end;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Char-index bounds `[start, end)` of the line holding the caret
    fn current_line_bounds(&self) -> (usize, usize) {
        let chars: Vec<char> = self.text.chars().collect();
        let start = chars[..self.cursor]
            .iter()
            .rposition(|c| *c == '\n')
            .map_or(0, |i| i + 1);
        let end = chars[self.cursor..]
            .iter()
            .position(|c| *c == '\n')
            .map_or(chars.len(), |i| self.cursor + i);
        (start, end)
    }

    /// Caret as (row, column) in characters, for placing the terminal cursor
    pub fn cursor_position(&self) -> (usize, usize) {
        let before: String = self.text.chars().take(self.cursor).collect();
        let row = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |line| line.chars().count());
        (row, col)
    }
}
