/// Rope-backed text storage for the open document.
use std::fmt;

use anyhow::{ensure, Result};
use ropey::Rope;

/// Document text. Every offset taken or returned is a char index.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Line count as the status bar reports it. Empty text is one line, and
    /// a trailing newline opens a further, empty line. Only `\n` breaks a
    /// line; a lone `\r` or Unicode separators do not.
    pub fn len_lines(&self) -> usize {
        self.rope.chars().filter(|&c| c == '\n').count() + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    pub fn chars(&self) -> ropey::iter::Chars<'_> {
        self.rope.chars()
    }

    /// Inserts `text` before char `at`.
    ///
    /// # Errors
    ///
    /// Fails when `at` lies past the end of the text.
    pub fn insert(&mut self, at: usize, text: &str) -> Result<()> {
        self.ensure_offset(at)?;
        self.rope.insert(at, text);
        Ok(())
    }

    /// Deletes chars `[start, end)`.
    ///
    /// # Errors
    ///
    /// Fails when `start > end` or `end` lies past the end of the text.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<()> {
        ensure!(start <= end, "reversed range {start}..{end}");
        self.ensure_offset(end)?;
        self.rope.remove(start..end);
        Ok(())
    }

    /// Swaps in entirely new content.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// # Errors
    ///
    /// Fails when `char_idx` lies past the end of the text.
    pub fn char_to_byte(&self, char_idx: usize) -> Result<usize> {
        self.ensure_offset(char_idx)?;
        Ok(self.rope.char_to_byte(char_idx))
    }

    /// # Errors
    ///
    /// Fails when `byte_idx` lies past the end of the text.
    pub fn byte_to_char(&self, byte_idx: usize) -> Result<usize> {
        let len = self.rope.len_bytes();
        ensure!(byte_idx <= len, "byte offset {byte_idx} beyond {len} bytes");
        Ok(self.rope.byte_to_char(byte_idx))
    }

    fn ensure_offset(&self, char_idx: usize) -> Result<()> {
        let len = self.len_chars();
        ensure!(char_idx <= len, "char offset {char_idx} beyond {len} chars");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len_lines(), 1);
    }

    #[test]
    fn test_trailing_newline_adds_line() {
        assert_eq!(TextBuffer::from("a\nb").len_lines(), 2);
        assert_eq!(TextBuffer::from("a\nb\n").len_lines(), 3);
        assert_eq!(TextBuffer::from("a\r\nb").len_lines(), 2);
    }

    #[test]
    fn test_only_newline_breaks_lines() {
        assert_eq!(TextBuffer::from("a\rb").len_lines(), 1);
        assert_eq!(TextBuffer::from("a\rb\u{2028}c\u{85}d").len_lines(), 1);
        assert_eq!(TextBuffer::from("a\rb\nc").len_lines(), 2);
    }

    #[test]
    fn test_edits_use_char_offsets() {
        let mut buf = TextBuffer::from("naïve");
        buf.insert(5, " café").unwrap();
        assert_eq!(buf.to_string(), "naïve café");
        buf.remove(0, 6).unwrap();
        assert_eq!(buf.to_string(), "café");
        assert_eq!(buf.len_chars(), 4);
    }

    #[test]
    fn test_set_text_replaces_everything() {
        let mut buf = TextBuffer::from("old");
        buf.set_text("brand new\ntext");
        assert_eq!(buf.to_string(), "brand new\ntext");
    }

    #[test]
    fn test_rejected_edits_leave_text_alone() {
        let mut buf = TextBuffer::from("hello");
        assert!(buf.insert(6, "x").is_err());
        assert!(buf.remove(4, 9).is_err());
        assert!(buf.remove(3, 2).is_err());
        assert_eq!(buf.to_string(), "hello");
        buf.remove(2, 2).unwrap();
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_offset_conversion() {
        let buf = TextBuffer::from("日本 go");
        assert_eq!(buf.char_to_byte(2).unwrap(), 6);
        assert_eq!(buf.byte_to_char(6).unwrap(), 2);
        assert!(buf.char_to_byte(6).is_err());
        assert!(buf.byte_to_char(10).is_err());
    }
}
