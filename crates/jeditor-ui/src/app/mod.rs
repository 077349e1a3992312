//! Top-level application tying together the editor, menus, text area, and status bar.

mod clipboard;
mod menu_bar;
mod shortcuts;
mod status_bar;
mod view;

pub use view::WindowView;

use std::ops::Range;
use std::path::PathBuf;

use eframe::egui;
use egui::text::{CCursor, CCursorRange};

use jeditor_config::AppConfig;
use jeditor_core::fs::StdFileSystem;
use jeditor_core::{BufferEdit, Editor, EditorEvent, Outcome, APP_NAME};

use crate::dialogs::{egui_family, FindDialog, FontDialog};

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// File to open on startup.
    pub file: Option<PathBuf>,
}

/// The main application state.
pub struct App {
    pub editor: Editor,
    pub view: WindowView,
    fs: StdFileSystem,
    pub find_dialog: FindDialog,
    pub font_dialog: FontDialog,
    config: AppConfig,
    config_path: PathBuf,
    clipboard: Option<arboard::Clipboard>,
    /// Char range selected in the text area as of the last frame.
    selection: Option<Range<usize>>,
    last_window_title: String,
    exit_requested: bool,
}

impl App {
    /// Id of the main text area, used to restore its cursor state.
    pub const TEXT_AREA_ID: &'static str = "jeditor_text_area";

    /// Creates an application from an already loaded config.
    ///
    /// `config_path` is where preferences are written back on exit.
    pub fn with_config(config: AppConfig, config_path: PathBuf, args: StartupArgs) -> Self {
        let mut editor = Editor::new(APP_NAME, config.font.clone());
        let mut view = WindowView::new(config.remember_last_folder, config.resolve_work_folder());
        let fs = StdFileSystem;
        editor.sync_view(&mut view);

        if let Some(path) = &args.file {
            if editor.open_path(path, &mut view, &fs) {
                view.update_last_used_folder(path);
            }
        }

        let clipboard = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                None
            }
        };

        Self {
            editor,
            view,
            fs,
            find_dialog: FindDialog::new(),
            font_dialog: FontDialog::new(),
            config,
            config_path,
            clipboard,
            selection: None,
            last_window_title: String::new(),
            exit_requested: false,
        }
    }

    /// Hands one event to the editor and records an exit request.
    pub fn dispatch(&mut self, event: EditorEvent) {
        if self.editor.handle(event, &mut self.view, &self.fs) == Outcome::Exit {
            self.exit_requested = true;
        }
    }

    /// True once File > Exit has been handled.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn open_find_dialog(&mut self) {
        self.find_dialog.open();
    }

    pub fn open_font_dialog(&mut self) {
        self.font_dialog.open(self.editor.font());
    }

    /// Returns true if any dialog is currently open.
    pub(crate) fn is_dialog_open(&self) -> bool {
        self.font_dialog.visible || self.view.messages.is_open()
    }

    /// Sends the window title to the OS only when it changes.
    fn update_window_title(&mut self, ctx: &egui::Context) {
        if self.view.title != self.last_window_title {
            self.last_window_title.clone_from(&self.view.title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.view.title.clone()));
        }
    }

    /// Renders the text area and turns user typing into an edit event.
    fn show_text_area(&mut self, ui: &mut egui::Ui) {
        let id = egui::Id::new(Self::TEXT_AREA_ID);

        if let Some((start, end)) = self.view.pending_selection.take() {
            let mut state = egui::TextEdit::load_state(ui.ctx(), id).unwrap_or_default();
            state.cursor.set_char_range(Some(CCursorRange::two(
                CCursor::new(start),
                CCursor::new(end),
            )));
            state.store(ui.ctx(), id);
            self.selection = Some(start..end);
        }

        let font = &self.view.font;
        let font_id = egui::FontId::new(font.size as f32, egui_family(font));
        let mut text_edit = egui::TextEdit::multiline(&mut self.view.text)
            .id(id)
            .font(font_id)
            .frame(egui::Frame::NONE)
            .desired_width(f32::INFINITY)
            .desired_rows(24)
            .lock_focus(true);
        if font.bold {
            text_edit = text_edit.text_color(ui.visuals().strong_text_color());
        }

        let output = egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| text_edit.show(ui))
            .inner;

        if let Some(range) = output.cursor_range {
            let (a, b) = (range.primary.index, range.secondary.index);
            self.selection = Some(a.min(b)..a.max(b));
        }
        if output.response.changed() {
            let text = self.view.text.clone();
            self.dispatch(EditorEvent::Edit(BufferEdit::Replace(text)));
        }
    }

    /// Shows all dialog windows and dispatches what they return.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(query) = self.find_dialog.show(ctx) {
            self.dispatch(EditorEvent::FindRequested(query));
        }
        if let Some(font) = self.font_dialog.show(ctx) {
            self.dispatch(EditorEvent::FontChangeRequested(font));
        }
        self.view.messages.show(ctx);
    }

    /// Preferences as they should be written back to disk.
    pub fn current_config(&self) -> AppConfig {
        let mut config = self.config.clone();
        config.font = self.editor.font().clone();
        if config.remember_last_folder {
            config.last_used_folder = self
                .view
                .last_used_folder
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        config
    }
}

impl eframe::App for App {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = &ui.ctx().clone();
        self.handle_global_shortcuts(ctx);

        let panel_fill = ctx.style().visuals.panel_fill;
        let extreme_bg = ctx.style().visuals.extreme_bg_color;

        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                self.show_menu_bar(ui);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(extreme_bg)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_text_area(ui);
        });

        self.show_dialogs(ctx);

        // Title last so edits made this frame are reflected.
        self.update_window_title(ctx);

        if self.exit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn on_exit(&mut self) {
        if let Err(e) = self.current_config().save(&self.config_path) {
            tracing::warn!("Failed to save config on exit: {e}");
        }
    }
}
