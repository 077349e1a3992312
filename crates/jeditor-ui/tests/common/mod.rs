use egui_kittest::Harness;
use jeditor_config::AppConfig;
use jeditor_ui::{App, StartupArgs};

/// Creates a standard test harness with a default-config app at 800x600.
pub fn create_harness() -> Harness<'static, App> {
    Harness::builder()
        .with_size(egui::Vec2::new(800.0, 600.0))
        .build_eframe(|_cc| {
            App::with_config(
                AppConfig::default(),
                std::env::temp_dir().join("jeditor-kittest.json"),
                StartupArgs::default(),
            )
        })
}

pub fn ctrl() -> egui::Modifiers {
    egui::Modifiers {
        ctrl: true,
        ..Default::default()
    }
}
