use std::ops::Range;

use crate::cursor::Position;
use ropey::Rope;

#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("position {line}:{col} is outside the document")]
    OutOfBounds { line: usize, col: usize },
}

/// In-memory document text plus its saved/unsaved state.
#[derive(Debug, Clone)]
pub struct DocumentBuffer {
    rope: Rope,
    dirty: bool,
    version: usize,
}

impl DocumentBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            dirty: false,
            version: 0,
        }
    }
}

impl Default for DocumentBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

impl DocumentBuffer {
    /// Replace the whole document. Marks the buffer dirty; call
    /// [`mark_clean`](Self::mark_clean) afterwards when the text came from disk.
    pub fn set_content(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.touch();
    }

    pub fn get_content(&self) -> String {
        self.rope.to_string()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Bumped on every content mutation.
    pub fn version(&self) -> usize {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.version += 1;
    }

    pub fn insert_char(&mut self, c: char, line: usize, col: usize) -> Result<(), BufferError> {
        let char_idx = self.char_index(line, col)?;
        self.rope.insert_char(char_idx, c);
        self.touch();
        Ok(())
    }

    pub fn insert_text(&mut self, text: &str, line: usize, col: usize) -> Result<(), BufferError> {
        let char_idx = self.char_index(line, col)?;
        self.rope.insert(char_idx, text);
        self.touch();
        Ok(())
    }

    /// Backspace at `(line, col)`: removes the char before the position, or
    /// joins with the previous line at column 0. Returns where the cursor
    /// should land.
    pub fn delete_char(&mut self, line: usize, col: usize) -> Result<Position, BufferError> {
        let char_idx = self.char_index(line, col)?;
        if col > 0 {
            self.rope.remove(char_idx - 1..char_idx);
            self.touch();
            Ok(Position::new(line, col - 1))
        } else if line > 0 {
            let prev_len = self.line_len(line - 1);
            let break_start = self.rope.line_to_char(line - 1) + prev_len;
            self.rope.remove(break_start..char_idx);
            self.touch();
            Ok(Position::new(line - 1, prev_len))
        } else {
            Ok(Position::new(0, 0))
        }
    }

    /// Text in a byte range, clamped to the document.
    pub fn text_in(&self, range: Range<usize>) -> String {
        let chars = self.char_range(range);
        self.rope.slice(chars).to_string()
    }

    /// Remove a byte range. Returns false when the range is empty.
    pub fn remove_range(&mut self, range: Range<usize>) -> bool {
        let chars = self.char_range(range);
        if chars.is_empty() {
            return false;
        }
        self.rope.remove(chars);
        self.touch();
        true
    }

    fn char_range(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.rope.len_bytes());
        let start = range.start.min(end);
        self.rope.byte_to_char(start)..self.rope.byte_to_char(end)
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of one line without its line break.
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx);
            Some(line.slice(..self.line_len(line_idx)).to_string())
        } else {
            None
        }
    }

    /// Length of a line in chars, excluding the line break.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        if len > 0 && is_line_break(line.char(len - 1)) {
            let last = line.char(len - 1);
            len -= 1;
            if last == '\n' && len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    pub fn line_start_byte(&self, line_idx: usize) -> usize {
        self.rope.line_to_byte(line_idx.min(self.rope.len_lines()))
    }

    /// Map a byte offset (as produced by search) to a line/column position.
    pub fn position_of_byte(&self, byte: usize) -> Position {
        let byte = byte.min(self.rope.len_bytes());
        let char_idx = self.rope.byte_to_char(byte);
        let line = self.rope.char_to_line(char_idx);
        Position::new(line, char_idx - self.rope.line_to_char(line))
    }

    /// Byte offset of `pos`, clamped into the document.
    pub fn byte_of_position(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        let char_idx = self.rope.line_to_char(pos.line) + pos.col;
        self.rope.char_to_byte(char_idx)
    }

    /// Nearest valid position to `pos`.
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        Position::new(line, pos.col.min(self.line_len(line)))
    }

    fn char_index(&self, line: usize, col: usize) -> Result<usize, BufferError> {
        if line >= self.rope.len_lines() || col > self.line_len(line) {
            return Err(BufferError::OutOfBounds { line, col });
        }
        Ok(self.rope.line_to_char(line) + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_clean() {
        let buffer = DocumentBuffer::new();
        assert!(!buffer.is_dirty());
        assert!(buffer.is_empty());
        assert_eq!(buffer.line_count(), 1);
    }

    #[test]
    fn test_set_content_marks_dirty() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("hello\nworld");
        assert!(buffer.is_dirty());
        assert_eq!(buffer.get_content(), "hello\nworld");
        buffer.mark_clean();
        assert!(!buffer.is_dirty());
        buffer.mark_dirty();
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_get_content_is_verbatim() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("trailing\n\n");
        assert_eq!(buffer.get_content(), "trailing\n\n");
    }

    #[test]
    fn test_insert_char() {
        let mut buffer = DocumentBuffer::new();
        buffer.insert_char('a', 0, 0).unwrap();
        assert_eq!(buffer.line(0).unwrap(), "a");
        assert!(buffer.is_dirty());
        assert_eq!(buffer.version(), 1);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut buffer = DocumentBuffer::new();
        assert!(buffer.insert_char('a', 0, 1).is_err());
        assert!(buffer.insert_text("x", 3, 0).is_err());
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_delete_char_within_line() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("abc");
        let pos = buffer.delete_char(0, 2).unwrap();
        assert_eq!(buffer.get_content(), "ac");
        assert_eq!(pos, Position::new(0, 1));
    }

    #[test]
    fn test_delete_char_joins_lines() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("ab\r\ncd");
        let pos = buffer.delete_char(1, 0).unwrap();
        assert_eq!(buffer.get_content(), "abcd");
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn test_delete_at_start_is_noop() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("abc");
        buffer.mark_clean();
        let pos = buffer.delete_char(0, 0).unwrap();
        assert_eq!(pos, Position::new(0, 0));
        assert_eq!(buffer.get_content(), "abc");
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_line_len_excludes_line_break() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("hello\nworld\r\n");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.line_len(0), 5);
        assert_eq!(buffer.line_len(1), 5);
        assert_eq!(buffer.line_len(2), 0);
        assert_eq!(buffer.line(1).unwrap(), "world");
        assert!(buffer.line(3).is_none());
    }

    #[test]
    fn test_byte_position_mapping() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("héllo\nwörld");
        // "héllo\n" is 7 bytes; 'r' sits after "wö" (3 bytes)
        let pos = buffer.position_of_byte(10);
        assert_eq!(pos, Position::new(1, 2));
        assert_eq!(buffer.byte_of_position(pos), 10);
        assert_eq!(buffer.position_of_byte(usize::MAX), Position::new(1, 5));
    }

    #[test]
    fn test_text_in_and_remove_range() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("héllo\nworld");
        buffer.mark_clean();
        assert_eq!(buffer.text_in(1..4), "él");
        assert_eq!(buffer.text_in(0..buffer.len_bytes()), "héllo\nworld");
        assert_eq!(buffer.text_in(8..100), "orld");

        assert!(!buffer.remove_range(3..3));
        assert!(!buffer.is_dirty());
        assert!(buffer.remove_range(0..7));
        assert_eq!(buffer.get_content(), "world");
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_clamp() {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content("ab\nc");
        assert_eq!(buffer.clamp(Position::new(0, 10)), Position::new(0, 2));
        assert_eq!(buffer.clamp(Position::new(9, 9)), Position::new(1, 1));
    }
}
