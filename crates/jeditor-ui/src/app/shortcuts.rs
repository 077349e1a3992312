//! Global keyboard shortcut handling.
//!
//! Maps Ctrl+N/O/S/Shift+S/F to the same events the menus produce. Clipboard
//! keys are left to the focused text area.

use eframe::egui;
use jeditor_core::EditorEvent;

use super::App;

impl App {
    /// Handles global keyboard shortcuts.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        let (ctrl, shift, keys) = ctx.input(|i| {
            let ctrl = i.modifiers.ctrl || i.modifiers.command;
            let keys: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Some(*key),
                    _ => None,
                })
                .collect();
            (ctrl, i.modifiers.shift, keys)
        });

        if !ctrl {
            return;
        }
        // Modal windows own the keyboard until dismissed.
        if self.is_dialog_open() {
            return;
        }
        for key in keys {
            if let Some(event) = shortcut_event(key, shift) {
                self.dispatch(event);
            } else if key == egui::Key::F {
                self.open_find_dialog();
            }
        }
    }
}

/// Editor event bound to Ctrl+`key` (with `shift` held or not).
fn shortcut_event(key: egui::Key, shift: bool) -> Option<EditorEvent> {
    match key {
        egui::Key::N => Some(EditorEvent::New),
        egui::Key::O => Some(EditorEvent::OpenRequested),
        egui::Key::S if shift => Some(EditorEvent::SaveAsRequested),
        egui::Key::S => Some(EditorEvent::SaveRequested),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_mapping() {
        assert!(matches!(
            shortcut_event(egui::Key::N, false),
            Some(EditorEvent::New)
        ));
        assert!(matches!(
            shortcut_event(egui::Key::O, false),
            Some(EditorEvent::OpenRequested)
        ));
        assert!(matches!(
            shortcut_event(egui::Key::S, false),
            Some(EditorEvent::SaveRequested)
        ));
        assert!(matches!(
            shortcut_event(egui::Key::S, true),
            Some(EditorEvent::SaveAsRequested)
        ));
        assert!(shortcut_event(egui::Key::F, false).is_none());
        assert!(shortcut_event(egui::Key::Q, false).is_none());
    }
}
