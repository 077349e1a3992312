//! Events the presentation layer feeds into the editor.
use jeditor_config::FontSettings;

/// A mutation of the text buffer, in char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferEdit {
    Insert { at: usize, text: String },
    Remove { start: usize, end: usize },
    /// Whole-buffer replacement, as reported by widgets that only expose the final text.
    Replace(String),
}

/// Every user action the editor reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    New,
    Edit(BufferEdit),
    OpenRequested,
    SaveRequested,
    SaveAsRequested,
    /// Find the next occurrence of the query.
    FindRequested(String),
    FontChangeRequested(FontSettings),
    AboutRequested,
    Exit,
}

/// What the shell should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}
