//! egui front end for the editor: window, menus, dialogs, and status bar.

pub mod app;
pub mod dialogs;

pub use app::{App, StartupArgs};
