/// Find-next over a text buffer with a remembered match position.
use crate::buffer::TextBuffer;

/// A single search match in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Start char index in the buffer.
    pub start: usize,
    /// End char index in the buffer (exclusive).
    pub end: usize,
}

/// Returns the char index of the first occurrence of `query` at or after
/// `start`.
///
/// Plain, case-sensitive substring search. An empty query matches at `start`
/// as long as `start` does not run past the end of the buffer.
pub fn find_from(buffer: &TextBuffer, query: &str, start: usize) -> Option<usize> {
    let byte_start = buffer.char_to_byte(start).ok()?;
    let text = buffer.to_string();
    let found = text[byte_start..].find(query)?;
    buffer.byte_to_char(byte_start + found).ok()
}

/// Search state that persists between "Find Next" invocations.
///
/// Each call starts one char past the previous match. A miss forgets the
/// previous match, so the following call starts over from the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindSession {
    last_match_start: Option<usize>,
}

impl FindSession {
    /// Creates a session with no previous match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start index of the previous match, if the last call found one.
    pub fn last_match_start(&self) -> Option<usize> {
        self.last_match_start
    }

    /// Forgets the previous match.
    pub fn reset(&mut self) {
        self.last_match_start = None;
    }

    /// Finds the next occurrence of `query` and remembers where it starts.
    pub fn find_next(&mut self, buffer: &TextBuffer, query: &str) -> Option<SearchMatch> {
        let start = self.last_match_start.map_or(0, |i| i + 1);
        match find_from(buffer, query, start) {
            Some(idx) => {
                self.last_match_start = Some(idx);
                Some(SearchMatch {
                    start: idx,
                    end: idx + query.chars().count(),
                })
            }
            None => {
                self.last_match_start = None;
                None
            }
        }
    }
}
