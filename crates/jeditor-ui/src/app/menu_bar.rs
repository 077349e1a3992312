//! Menu bar with the File, Edit, Format, and Help menus.

use eframe::egui;
use jeditor_core::EditorEvent;

use super::App;

impl App {
    pub(crate) fn show_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New                  Ctrl+N").clicked() {
                    self.dispatch(EditorEvent::New);
                    ui.close();
                }
                if ui.button("Open...              Ctrl+O").clicked() {
                    ui.close();
                    self.dispatch(EditorEvent::OpenRequested);
                }
                if ui.button("Save                 Ctrl+S").clicked() {
                    ui.close();
                    self.dispatch(EditorEvent::SaveRequested);
                }
                if ui.button("Save As...     Ctrl+Shift+S").clicked() {
                    ui.close();
                    self.dispatch(EditorEvent::SaveAsRequested);
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    self.dispatch(EditorEvent::Exit);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let has_selection = self.selected_text().is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Cut              Ctrl+X"))
                    .clicked()
                {
                    self.cut();
                    ui.close();
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Copy             Ctrl+C"))
                    .clicked()
                {
                    self.copy();
                    ui.close();
                }
                if ui.button("Paste            Ctrl+V").clicked() {
                    self.paste();
                    ui.close();
                }
                ui.separator();
                if ui.button("Find...          Ctrl+F").clicked() {
                    self.open_find_dialog();
                    ui.close();
                }
            });

            ui.menu_button("Format", |ui| {
                if ui.button("Font...").clicked() {
                    self.open_font_dialog();
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    self.dispatch(EditorEvent::AboutRequested);
                    ui.close();
                }
            });
        });
    }
}
