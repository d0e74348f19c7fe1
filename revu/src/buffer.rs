//! The editable source buffer.
//!
//! Leaf component with no knowledge of the review lifecycle. Holds the code
//! under review as a list of lines plus a cursor, and keeps a pre-highlighted
//! copy of its own display in sync: every mutation re-runs the syntect
//! highlight synchronously, so the render path never highlights.
//!
//! The text round-trips exactly — `set_text(t)` followed by `text()` returns
//! `t` unchanged for any input, including trailing newlines (`split('\n')` /
//! `join("\n")` are inverses).

use ratatui::text::Line;

use crate::highlight;

/// The snippet the buffer starts with, matching the placeholder a first-time
/// user sees before typing their own code.
pub const DEMO_SNIPPET: &str = "function sum() {\n  return 1 + 1\n}";

/// The editable code buffer plus its pre-highlighted display lines.
///
/// Cursor columns are character indices, clamped to the current line length
/// on every vertical move. Mutation happens only through the editing methods
/// below, each of which ends in a re-highlight.
pub struct SourceBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    language: String,
    highlighted: Vec<Line<'static>>,
}

impl SourceBuffer {
    /// Creates an empty buffer highlighting as `language` (a syntect token
    /// such as `"js"` or `"rust"`).
    pub fn new(language: &str) -> Self {
        let mut buffer = Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            language: language.to_owned(),
            highlighted: Vec::new(),
        };
        buffer.rehighlight();
        buffer
    }

    /// Returns the full buffer content.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replaces the content wholesale and moves the cursor to the origin.
    ///
    /// No validation and no size limit — any limit is a policy of the
    /// controller or the service, not the buffer.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_owned).collect();
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.rehighlight();
    }

    /// The pre-highlighted display lines, one per buffer line.
    pub fn highlighted(&self) -> &[Line<'static>] {
        &self.highlighted
    }

    /// Number of lines in the buffer (always at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor position as `(row, col)` in character coordinates.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Inserts a character at the cursor and advances the cursor.
    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_row];
        let byte = char_to_byte(line, self.cursor_col);
        line.insert(byte, c);
        self.cursor_col += 1;
        self.rehighlight();
    }

    /// Splits the current line at the cursor, moving the tail to a new line.
    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let byte = char_to_byte(line, self.cursor_col);
        let tail = line.split_off(byte);
        self.lines.insert(self.cursor_row + 1, tail);
        self.cursor_row += 1;
        self.cursor_col = 0;
        self.rehighlight();
    }

    /// Deletes the character before the cursor; at column 0, joins the
    /// current line onto the previous one.
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let byte = char_to_byte(line, self.cursor_col - 1);
            line.remove(byte);
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            let tail = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].chars().count();
            self.lines[self.cursor_row].push_str(&tail);
        } else {
            return;
        }
        self.rehighlight();
    }

    /// Moves the cursor one column left, wrapping to the previous line end.
    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
        }
    }

    /// Moves the cursor one column right, wrapping to the next line start.
    pub fn move_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    /// Moves the cursor up one row, clamping the column to the line length.
    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        }
    }

    /// Moves the cursor down one row, clamping the column to the line length.
    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        }
    }

    /// Moves the cursor to column 0 of the current line.
    pub fn move_line_start(&mut self) {
        self.cursor_col = 0;
    }

    /// Moves the cursor past the last character of the current line.
    pub fn move_line_end(&mut self) {
        self.cursor_col = self.line_len(self.cursor_row);
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// Recomputes the highlighted display lines from the current content.
    ///
    /// Synchronous and idempotent — called after every mutation so the
    /// display can never show stale highlighting.
    fn rehighlight(&mut self) {
        self.highlighted = highlight::highlight_code(&self.text(), &self.language);
    }
}

/// Converts a character index into a byte offset within `line`.
///
/// A character index equal to the character count maps to `line.len()`
/// (insertion at end of line).
fn char_to_byte(line: &str, char_idx: usize) -> usize {
    line.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_round_trips_exactly() {
        let mut buffer = SourceBuffer::new("js");
        for text in ["", "one line", "a\nb\nc", "trailing\n", "\n\n", DEMO_SNIPPET] {
            buffer.set_text(text);
            assert_eq!(buffer.text(), text, "round trip failed for {text:?}");
        }
    }

    #[test]
    fn set_text_refreshes_highlight_line_count() {
        let mut buffer = SourceBuffer::new("js");
        buffer.set_text("a\nb\nc");
        assert_eq!(buffer.highlighted().len(), 3);
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn insert_char_advances_cursor() {
        let mut buffer = SourceBuffer::new("js");
        buffer.insert_char('a');
        buffer.insert_char('b');
        assert_eq!(buffer.text(), "ab");
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn insert_in_middle_of_line() {
        let mut buffer = SourceBuffer::new("js");
        buffer.set_text("ac");
        buffer.move_right();
        buffer.insert_char('b');
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn newline_splits_line_at_cursor() {
        let mut buffer = SourceBuffer::new("js");
        buffer.set_text("abcd");
        buffer.move_right();
        buffer.move_right();
        buffer.insert_newline();
        assert_eq!(buffer.text(), "ab\ncd");
        assert_eq!(buffer.cursor(), (1, 0));
    }

    #[test]
    fn backspace_joins_lines_at_column_zero() {
        let mut buffer = SourceBuffer::new("js");
        buffer.set_text("ab\ncd");
        buffer.move_down();
        buffer.backspace();
        assert_eq!(buffer.text(), "abcd");
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn backspace_at_origin_is_a_no_op() {
        let mut buffer = SourceBuffer::new("js");
        buffer.set_text("abc");
        buffer.backspace();
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), (0, 0));
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut buffer = SourceBuffer::new("js");
        buffer.set_text("long line here\nab");
        buffer.move_line_end();
        buffer.move_down();
        assert_eq!(buffer.cursor(), (1, 2));
    }

    #[test]
    fn horizontal_moves_wrap_across_lines() {
        let mut buffer = SourceBuffer::new("js");
        buffer.set_text("a\nb");
        buffer.move_right();
        buffer.move_right();
        assert_eq!(buffer.cursor(), (1, 0));
        buffer.move_left();
        assert_eq!(buffer.cursor(), (0, 1));
    }

    #[test]
    fn multibyte_characters_edit_cleanly() {
        let mut buffer = SourceBuffer::new("js");
        buffer.set_text("héllo");
        buffer.move_right();
        buffer.move_right();
        buffer.insert_char('x');
        assert_eq!(buffer.text(), "héxllo");
        buffer.backspace();
        assert_eq!(buffer.text(), "héllo");
    }
}
