//! Window-side state the editor drives through the [`Presenter`] trait.
//!
//! `WindowView` holds what the next frame should show. The egui update loop
//! reads it back when painting the text area, status bar, and dialogs.

use std::path::{Path, PathBuf};

use jeditor_config::FontSettings;
use jeditor_core::stats::TextStats;
use jeditor_core::{MessageKind, Presenter};

use crate::dialogs::MessageDialog;

/// Snapshot of everything the window renders.
#[derive(Debug, Default)]
pub struct WindowView {
    /// Contents of the text area. Kept equal to the document text.
    pub text: String,
    pub title: String,
    /// Char range to highlight on the next frame.
    pub pending_selection: Option<(usize, usize)>,
    pub messages: MessageDialog,
    pub font: FontSettings,
    pub stats: TextStats,
    pub remember_last_folder: bool,
    /// Starting directory for file dialogs.
    pub last_used_folder: Option<PathBuf>,
}

impl WindowView {
    pub fn new(remember_last_folder: bool, start_folder: Option<PathBuf>) -> Self {
        Self {
            remember_last_folder,
            last_used_folder: start_folder,
            ..Default::default()
        }
    }

    /// Falls back to the home directory once the remembered folder is gone.
    fn dialog_directory(&self) -> Option<PathBuf> {
        self.last_used_folder
            .clone()
            .filter(|f| f.is_dir())
            .or_else(dirs::home_dir)
    }

    /// Records the parent of a picked file as the next starting directory.
    pub fn update_last_used_folder(&mut self, file_path: &Path) {
        if !self.remember_last_folder {
            return;
        }
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_used_folder = Some(parent.to_path_buf());
        }
    }
}

impl Presenter for WindowView {
    fn prompt_open_path(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Open");
        if let Some(dir) = self.dialog_directory() {
            dialog = dialog.set_directory(dir);
        }
        let path = dialog.pick_file()?;
        self.update_last_used_folder(&path);
        Some(path)
    }

    fn prompt_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save As")
            .set_file_name(suggested_name);
        if let Some(dir) = self.dialog_directory() {
            dialog = dialog.set_directory(dir);
        }
        let path = dialog.save_file()?;
        self.update_last_used_folder(&path);
        Some(path)
    }

    fn show_message(&mut self, kind: MessageKind, title: &str, text: &str) {
        self.messages.push(kind, title, text);
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn render_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.pending_selection = None;
    }

    fn select_range(&mut self, start: usize, end: usize) {
        self.pending_selection = Some((start, end));
    }

    fn apply_font(&mut self, font: &FontSettings) {
        self.font = font.clone();
    }

    fn refresh_status(&mut self, stats: TextStats) {
        self.stats = stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_clears_pending_selection() {
        let mut view = WindowView::default();
        view.select_range(1, 3);
        view.render_text("fresh");
        assert_eq!(view.text, "fresh");
        assert_eq!(view.pending_selection, None);
    }

    #[test]
    fn test_messages_are_queued() {
        let mut view = WindowView::default();
        view.show_message(MessageKind::Info, "Find", "No more occurrences found.");
        let current = view.messages.current().unwrap();
        assert_eq!(current.title, "Find");
        assert_eq!(current.kind, MessageKind::Info);
    }

    #[test]
    fn test_last_used_folder_tracks_parent() {
        let mut view = WindowView::new(true, None);
        view.update_last_used_folder(Path::new("/tmp/notes/todo.txt"));
        assert_eq!(view.last_used_folder, Some(PathBuf::from("/tmp/notes")));
    }

    #[test]
    fn test_last_used_folder_ignored_when_disabled() {
        let mut view = WindowView::new(false, None);
        view.update_last_used_folder(Path::new("/tmp/notes/todo.txt"));
        assert_eq!(view.last_used_folder, None);
    }

    #[test]
    fn test_dialog_directory_prefers_existing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = WindowView::new(true, Some(dir.path().to_path_buf()));
        assert_eq!(view.dialog_directory(), Some(dir.path().to_path_buf()));

        view.last_used_folder = Some(dir.path().join("gone"));
        assert_eq!(view.dialog_directory(), dirs::home_dir());
    }
}
