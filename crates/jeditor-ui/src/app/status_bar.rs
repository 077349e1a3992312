//! Status bar showing word and line counts.

use eframe::egui;

use super::App;

impl App {
    /// Renders the status bar contents.
    pub(crate) fn show_status_bar(&self, ui: &mut egui::Ui) {
        let stats = self.view.stats;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            ui.add(egui::Label::new(format!("Words: {}", stats.words)).selectable(false));
            ui.add(egui::Label::new(format!("Lines: {}", stats.lines)).selectable(false));
        });
    }
}
