//! Headless core of the JEditor text editor.
//!
//! Holds the document state tracker, incremental find, status-bar
//! statistics, and the event dispatcher that drives a window through the
//! [`editor::Presenter`] trait.
pub mod buffer;
pub mod document;
pub mod editor;
pub mod fs;
pub mod search;
pub mod stats;

pub use editor::{BufferEdit, Editor, EditorEvent, MessageKind, Outcome, Presenter, APP_NAME};
