//! Event dispatch tying the document, find session, and font together.
//!
//! The shell turns menu clicks and keystrokes into [`EditorEvent`]s and
//! hands them to [`Editor::handle`] along with its [`Presenter`] and a
//! [`FileSystem`]. All user-visible effects go back out through the presenter.

mod event;
mod presenter;

pub use event::{BufferEdit, EditorEvent, Outcome};
pub use presenter::{MessageKind, Presenter};

use std::path::Path;

use jeditor_config::FontSettings;

use crate::document::{title_for, Document, SaveStatus};
use crate::fs::FileSystem;
use crate::search::FindSession;
use crate::stats::TextStats;

/// Default application name used in window titles.
pub const APP_NAME: &str = "JEditor";

/// Name offered in the save dialog for untitled documents.
const UNTITLED_FILE_NAME: &str = "Untitled.txt";

/// Owns the open document and everything that hangs off it.
#[derive(Debug)]
pub struct Editor {
    app_name: String,
    document: Document,
    find: FindSession,
    font: FontSettings,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(APP_NAME, FontSettings::default())
    }
}

impl Editor {
    /// Creates an editor with an empty, untitled document.
    pub fn new(app_name: impl Into<String>, font: FontSettings) -> Self {
        Self {
            app_name: app_name.into(),
            document: Document::new(),
            find: FindSession::new(),
            font: font.sanitized(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn find_session(&self) -> &FindSession {
        &self.find
    }

    pub fn font(&self) -> &FontSettings {
        &self.font
    }

    /// Current window title.
    pub fn title(&self) -> String {
        title_for(&self.app_name, &self.document)
    }

    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.document.buffer)
    }

    /// Pushes title, text, font and status to a freshly created presenter.
    pub fn sync_view(&self, presenter: &mut dyn Presenter) {
        presenter.set_title(&self.title());
        presenter.render_text(&self.document.text());
        presenter.apply_font(&self.font);
        presenter.refresh_status(self.stats());
    }

    /// Dispatches one event.
    pub fn handle(
        &mut self,
        event: EditorEvent,
        presenter: &mut dyn Presenter,
        fs: &dyn FileSystem,
    ) -> Outcome {
        tracing::debug!(?event, "handling editor event");
        match event {
            EditorEvent::New => self.new_document(presenter),
            EditorEvent::Edit(edit) => self.apply_edit(edit, presenter),
            EditorEvent::OpenRequested => {
                if let Some(path) = presenter.prompt_open_path() {
                    self.open_path(&path, presenter, fs);
                }
            }
            EditorEvent::SaveRequested => self.save(presenter, fs),
            EditorEvent::SaveAsRequested => self.save_as(presenter, fs),
            EditorEvent::FindRequested(query) => self.find_next(&query, presenter),
            EditorEvent::FontChangeRequested(font) => {
                self.font = font.sanitized();
                tracing::info!("Font changed to {}", self.font.describe());
                presenter.apply_font(&self.font);
            }
            EditorEvent::AboutRequested => {
                presenter.show_message(
                    MessageKind::Info,
                    &format!("About {}", self.app_name),
                    &about_text(&self.app_name),
                );
            }
            EditorEvent::Exit => {
                tracing::info!("Exit requested");
                return Outcome::Exit;
            }
        }
        Outcome::Continue
    }

    /// Loads `path` into the editor, reporting read failures to the presenter.
    ///
    /// Returns `true` on success. On failure the current document is untouched.
    pub fn open_path(
        &mut self,
        path: &Path,
        presenter: &mut dyn Presenter,
        fs: &dyn FileSystem,
    ) -> bool {
        match self.document.load_from(fs, path) {
            Ok(()) => {
                tracing::info!("Opened {}", path.display());
                self.find.reset();
                presenter.render_text(&self.document.text());
                presenter.set_title(&self.title());
                presenter.refresh_status(self.stats());
                true
            }
            Err(e) => {
                tracing::error!("Failed to open file: {e}");
                presenter.show_message(
                    MessageKind::Error,
                    "Error",
                    &format!("Error reading file: {}", e.source),
                );
                false
            }
        }
    }

    fn new_document(&mut self, presenter: &mut dyn Presenter) {
        self.document.reset();
        self.find.reset();
        presenter.render_text("");
        presenter.set_title(&self.title());
        presenter.refresh_status(self.stats());
    }

    fn apply_edit(&mut self, edit: BufferEdit, presenter: &mut dyn Presenter) {
        let result = match edit {
            BufferEdit::Insert { at, text } => self.document.insert(at, &text),
            BufferEdit::Remove { start, end } => self.document.remove(start, end),
            BufferEdit::Replace(text) => Ok(self.document.replace_text(&text)),
        };
        match result {
            Ok(title_changed) => {
                if title_changed {
                    presenter.set_title(&self.title());
                }
                presenter.refresh_status(self.stats());
            }
            Err(e) => tracing::warn!("Ignoring out-of-range edit: {e:#}"),
        }
    }

    fn save(&mut self, presenter: &mut dyn Presenter, fs: &dyn FileSystem) {
        match self.document.save(fs) {
            Ok(SaveStatus::Saved) => {
                if let Some(path) = self.document.file_path() {
                    tracing::info!("Saved {}", path.display());
                }
                presenter.set_title(&self.title());
            }
            Ok(SaveStatus::NeedsPath) => self.save_as(presenter, fs),
            Err(e) => report_write_error(&e, presenter),
        }
    }

    fn save_as(&mut self, presenter: &mut dyn Presenter, fs: &dyn FileSystem) {
        let suggested = self
            .document
            .file_name()
            .unwrap_or_else(|| UNTITLED_FILE_NAME.to_string());
        let Some(path) = presenter.prompt_save_path(&suggested) else {
            return;
        };
        match self.document.save_as(fs, &path) {
            Ok(()) => {
                tracing::info!("Saved as {}", path.display());
                presenter.set_title(&self.title());
            }
            Err(e) => report_write_error(&e, presenter),
        }
    }

    fn find_next(&mut self, query: &str, presenter: &mut dyn Presenter) {
        match self.find.find_next(&self.document.buffer, query) {
            Some(m) => presenter.select_range(m.start, m.end),
            None => presenter.show_message(
                MessageKind::Info,
                "Find",
                "No more occurrences found.",
            ),
        }
    }
}

fn report_write_error(e: &crate::fs::FileWriteError, presenter: &mut dyn Presenter) {
    tracing::error!("Failed to save: {e}");
    presenter.show_message(
        MessageKind::Error,
        "Error",
        &format!("Error saving file: {}", e.source),
    );
}

/// Body of the About box.
pub fn about_text(app_name: &str) -> String {
    let authors = env!("CARGO_PKG_AUTHORS").replace(':', ", ");
    format!(
        "{app_name} - Version {}\n\nA simple text editor built with Rust.\nCreated by {authors}",
        env!("CARGO_PKG_VERSION")
    )
}
