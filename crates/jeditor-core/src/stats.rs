/// Word and line counts shown in the status bar.
use crate::buffer::TextBuffer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub lines: usize,
}

impl TextStats {
    /// Counts words and lines in the buffer.
    pub fn of(buffer: &TextBuffer) -> Self {
        Self {
            words: count_words(buffer.chars()),
            lines: buffer.len_lines(),
        }
    }
}

/// Counts maximal runs of non-whitespace chars.
pub fn count_words(chars: impl IntoIterator<Item = char>) -> usize {
    let mut words = 0;
    let mut in_word = false;
    for c in chars {
        if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            words += 1;
        }
    }
    words
}
