//! The window-side collaborator the editor drives.
use std::path::PathBuf;

use jeditor_config::FontSettings;

use crate::stats::TextStats;

/// Severity of a modal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Everything the editor needs from the window it runs in.
///
/// Implementations are expected to be synchronous: prompts block until the
/// user picks a path or cancels.
pub trait Presenter {
    /// Asks for a file to open. `None` means the user cancelled.
    fn prompt_open_path(&mut self) -> Option<PathBuf>;

    /// Asks for a destination to save to. `None` means the user cancelled.
    fn prompt_save_path(&mut self, suggested_name: &str) -> Option<PathBuf>;

    fn show_message(&mut self, kind: MessageKind, title: &str, text: &str);

    fn set_title(&mut self, title: &str);

    /// Replaces the text shown in the text area.
    fn render_text(&mut self, text: &str);

    /// Highlights the char range `[start, end)`.
    fn select_range(&mut self, start: usize, end: usize);

    fn apply_font(&mut self, font: &FontSettings);

    fn refresh_status(&mut self, stats: TextStats);
}
