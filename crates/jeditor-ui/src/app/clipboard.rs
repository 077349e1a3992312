//! Clipboard operations (cut, copy, paste) behind the Edit menu.
//!
//! Keyboard cut/copy/paste is handled by the text area itself; these paths
//! work from the selection recorded on the last frame and keep the document
//! in step through edit events.

use jeditor_core::{BufferEdit, EditorEvent};

use super::App;

/// Byte offset of char `idx`, clamped to the end of `text`.
fn char_to_byte(text: &str, idx: usize) -> usize {
    text.char_indices().nth(idx).map_or(text.len(), |(b, _)| b)
}

impl App {
    /// Text under the current non-empty selection.
    pub(crate) fn selected_text(&self) -> Option<String> {
        let range = self.selection.clone().filter(|r| !r.is_empty())?;
        let text = &self.view.text;
        let (start, end) = (char_to_byte(text, range.start), char_to_byte(text, range.end));
        Some(text[start..end].to_string())
    }

    /// Copies selected text to the system clipboard.
    pub(crate) fn copy(&mut self) {
        let Some(text) = self.selected_text() else {
            return;
        };
        if let Some(ref mut clipboard) = self.clipboard {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!("Failed to copy to clipboard: {e}");
            }
        }
    }

    /// Cuts selected text: copies to clipboard then deletes the selection.
    pub(crate) fn cut(&mut self) {
        self.copy();
        let caret = self.delete_selection();
        self.view.pending_selection = Some((caret, caret));
    }

    /// Pastes clipboard text over the selection.
    pub(crate) fn paste(&mut self) {
        let text = match self.clipboard.as_mut().map(|cb| cb.get_text()) {
            Some(Ok(text)) => text,
            Some(Err(e)) => {
                tracing::warn!("Failed to read clipboard: {e}");
                return;
            }
            None => return,
        };
        self.insert_at_selection(&text);
    }

    /// Replaces the selection (or inserts at the caret) with `text`.
    pub(crate) fn insert_at_selection(&mut self, text: &str) {
        let at = self.delete_selection();
        let byte = char_to_byte(&self.view.text, at);
        self.view.text.insert_str(byte, text);
        self.dispatch(EditorEvent::Edit(BufferEdit::Insert {
            at,
            text: text.to_string(),
        }));
        let caret = at + text.chars().count();
        self.selection = Some(caret..caret);
        self.view.pending_selection = Some((caret, caret));
    }

    /// Removes the selected text and returns the caret position left behind.
    ///
    /// With no selection recorded the caret is taken to be the end of the text.
    fn delete_selection(&mut self) -> usize {
        let len = self.view.text.chars().count();
        let Some(range) = self.selection.clone() else {
            return len;
        };
        let (start, end) = (range.start.min(len), range.end.min(len));
        if start < end {
            let text = &mut self.view.text;
            let (b_start, b_end) = (char_to_byte(text, start), char_to_byte(text, end));
            text.replace_range(b_start..b_end, "");
            self.dispatch(EditorEvent::Edit(BufferEdit::Remove { start, end }));
        }
        self.selection = Some(start..start);
        start
    }
}
