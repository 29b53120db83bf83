//! Single-line editable text buffer with a UTF-8 aware cursor.

/// A line of text plus a cursor position (byte offset, always on a char
/// boundary).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    /// A field pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Column of the cursor in characters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::with_text(text);
    }

    pub fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut field = TextField::with_text("Bb");
        field.move_left();
        field.insert('o');
        assert_eq!(field.text(), "Bob");
        assert_eq!(field.cursor_column(), 2);

        field.backspace();
        assert_eq!(field.text(), "Bb");
        assert_eq!(field.cursor_column(), 1);
    }

    #[test]
    fn multibyte_characters_keep_cursor_on_boundaries() {
        let mut field = TextField::default();
        for ch in "Zoë".chars() {
            field.insert(ch);
        }
        assert_eq!(field.cursor_column(), 3);

        field.move_left();
        field.delete();
        assert_eq!(field.text(), "Zo");

        field.home();
        field.delete();
        field.end();
        field.backspace();
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor_column(), 0);
    }

    #[test]
    fn edits_at_the_edges_are_noops() {
        let mut field = TextField::with_text("x");
        field.delete();
        field.move_right();
        assert_eq!(field.text(), "x");

        field.home();
        field.backspace();
        field.move_left();
        assert_eq!(field.text(), "x");
        assert_eq!(field.cursor_column(), 0);
    }
}
