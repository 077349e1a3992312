//! Document model: text buffer, associated file path, and save status.
//!
//! A `Document` starts untitled and empty. Loading or saving ties it to a
//! path and clears the dirty flag; the first mutation after that sets the
//! flag again and reports that the window title must be recomputed. File
//! I/O lives in the `io` submodule.

mod io;

pub use io::SaveStatus;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::buffer::TextBuffer;

/// Save status of a document, derived from its path and dirty flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Never loaded or saved, and not edited since.
    Untitled,
    /// Matches what was last loaded or saved.
    Clean,
    /// Edited since the last load or save.
    Dirty,
}

/// A single document with its buffer and save metadata.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The text buffer.
    pub buffer: TextBuffer,
    /// File the document was loaded from or last saved to.
    file_path: Option<PathBuf>,
    /// Whether the document has been modified since last load or save.
    modified: bool,
}

impl Document {
    /// Creates a new empty, untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffer with `content` loaded from `path` and clears the dirty flag.
    pub fn load(&mut self, content: &str, path: impl Into<PathBuf>) {
        self.buffer.set_text(content);
        self.file_path = Some(path.into());
        self.modified = false;
    }

    /// Resets to an empty, untitled document.
    pub fn reset(&mut self) {
        self.buffer = TextBuffer::new();
        self.file_path = None;
        self.modified = false;
    }

    /// Records a buffer mutation.
    ///
    /// Returns `true` only on the transition into the dirty state, which is
    /// when the window title has to change.
    pub fn edit(&mut self) -> bool {
        if self.modified {
            return false;
        }
        self.modified = true;
        true
    }

    /// Inserts text at a char index. Returns whether the title changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds; the dirty flag is left alone.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> Result<bool> {
        self.buffer.insert(char_idx, text)?;
        Ok(self.edit())
    }

    /// Removes the char range `[start, end)`. Returns whether the title changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid; the dirty flag is left alone.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<bool> {
        self.buffer.remove(start, end)?;
        Ok(self.edit())
    }

    /// Replaces the whole buffer as a user edit. Returns whether the title changed.
    pub fn replace_text(&mut self, text: &str) -> bool {
        self.buffer.set_text(text);
        self.edit()
    }

    /// Marks the buffer as saved to `path`.
    pub(crate) fn mark_saved(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
    }

    /// Returns the current buffer content.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Whether the document has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.modified
    }

    /// Final component of the associated path, if any.
    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    pub fn state(&self) -> DocumentState {
        match (self.modified, &self.file_path) {
            (true, _) => DocumentState::Dirty,
            (false, Some(_)) => DocumentState::Clean,
            (false, None) => DocumentState::Untitled,
        }
    }
}

/// Builds the window title: `app_name`, then ` - <file name>` when the
/// document has a path, then `*` when it is dirty.
pub fn title_for(app_name: &str, doc: &Document) -> String {
    let mut title = app_name.to_string();
    if let Some(name) = doc.file_name() {
        title.push_str(" - ");
        title.push_str(&name);
    }
    if doc.is_dirty() {
        title.push('*');
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled() {
        let doc = Document::new();
        assert!(doc.buffer.is_empty());
        assert!(doc.file_path().is_none());
        assert!(!doc.is_dirty());
        assert_eq!(doc.state(), DocumentState::Untitled);
    }

    #[test]
    fn test_first_edit_signals_once() {
        let mut doc = Document::new();
        doc.load("abc", "/tmp/a.txt");
        assert_eq!(doc.state(), DocumentState::Clean);

        assert!(doc.edit());
        assert!(!doc.edit());
        assert!(!doc.edit());
        assert_eq!(doc.state(), DocumentState::Dirty);
    }

    #[test]
    fn test_load_clears_dirty() {
        let mut doc = Document::new();
        doc.replace_text("scratch");
        assert!(doc.is_dirty());

        doc.load("from disk", "/tmp/b.txt");
        assert!(!doc.is_dirty());
        assert_eq!(doc.text(), "from disk");
        assert_eq!(doc.file_path(), Some(Path::new("/tmp/b.txt")));
    }

    #[test]
    fn test_untitled_edit_goes_dirty() {
        let mut doc = Document::new();
        assert!(doc.insert(0, "x").unwrap());
        assert_eq!(doc.state(), DocumentState::Dirty);
        assert!(doc.file_path().is_none());
    }

    #[test]
    fn test_insert_and_remove_mark_dirty() {
        let mut doc = Document::new();
        doc.load("hello", "/tmp/c.txt");
        assert!(doc.insert(5, " world").unwrap());
        assert!(!doc.remove(0, 6).unwrap());
        assert_eq!(doc.text(), "world");
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_failed_mutation_keeps_clean() {
        let mut doc = Document::new();
        doc.load("hello", "/tmp/d.txt");
        assert!(doc.insert(99, "x").is_err());
        assert!(doc.remove(3, 1).is_err());
        assert!(!doc.is_dirty());
        assert_eq!(doc.text(), "hello");
    }

    #[test]
    fn test_reset_returns_to_untitled() {
        let mut doc = Document::new();
        doc.load("content", "/tmp/e.txt");
        doc.edit();
        doc.reset();
        assert_eq!(doc.state(), DocumentState::Untitled);
        assert!(doc.buffer.is_empty());
    }

    #[test]
    fn test_title_untitled_clean() {
        let doc = Document::new();
        assert_eq!(title_for("JEditor", &doc), "JEditor");
    }

    #[test]
    fn test_title_with_path_and_dirty() {
        let mut doc = Document::new();
        doc.load("", "/home/user/notes.txt");
        assert_eq!(title_for("JEditor", &doc), "JEditor - notes.txt");
        doc.edit();
        assert_eq!(title_for("JEditor", &doc), "JEditor - notes.txt*");
    }

    #[test]
    fn test_title_untitled_dirty() {
        let mut doc = Document::new();
        doc.replace_text("draft");
        assert_eq!(title_for("JEditor", &doc), "JEditor*");
    }

    #[test]
    fn test_file_name() {
        let mut doc = Document::new();
        assert_eq!(doc.file_name(), None);
        doc.load("", "/var/data/report.md");
        assert_eq!(doc.file_name().as_deref(), Some("report.md"));
    }
}
