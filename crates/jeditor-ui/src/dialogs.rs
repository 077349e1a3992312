/// Dialogs for Find, Font selection, and modal messages.
use egui::{Context, FontFamily, Key, RichText, Ui, Window};
use jeditor_config::{FontSettings, FONT_FAMILIES, MAX_FONT_SIZE, MIN_FONT_SIZE};
use jeditor_core::MessageKind;

/// Maps a configured family name to the egui family that renders it.
pub fn egui_family(font: &FontSettings) -> FontFamily {
    if font.is_monospace() {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}

/// State for the non-modal Find dialog.
#[derive(Debug, Default)]
pub struct FindDialog {
    pub visible: bool,
    pub query: String,
    /// When true, the text field requests focus on the next frame.
    focus_requested: bool,
}

impl FindDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.focus_requested = true;
    }

    /// Shows the Find dialog. Returns the query when "Find Next" is triggered.
    pub fn show(&mut self, ctx: &Context) -> Option<String> {
        if !self.visible {
            return None;
        }

        let mut find_next = false;
        let mut open = true;

        Window::new("Find")
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    ui.label("Find what:");
                    let response = ui.text_edit_singleline(&mut self.query);
                    if self.focus_requested {
                        self.focus_requested = false;
                        response.request_focus();
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        // Keep typing in the field so a repeated Enter searches again.
                        self.focus_requested = true;
                        find_next = true;
                    }
                    if ui.button("Find Next").clicked() {
                        find_next = true;
                    }
                });
            });

        if !open {
            self.visible = false;
        }

        find_next.then(|| self.query.clone())
    }
}

/// State for the modal Font dialog.
///
/// Edits a draft copy; the draft is returned only when the user presses OK.
#[derive(Debug, Default)]
pub struct FontDialog {
    pub visible: bool,
    pub draft: FontSettings,
}

impl FontDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog pre-filled with the font currently in use.
    pub fn open(&mut self, current: &FontSettings) {
        self.draft = current.clone();
        self.visible = true;
    }

    /// Shows the Font dialog. Returns the chosen font when OK is pressed.
    pub fn show(&mut self, ctx: &Context) -> Option<FontSettings> {
        if !self.visible {
            return None;
        }

        let mut chosen = None;
        let mut open = true;

        Window::new("Choose Font")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                Self::show_controls(ui, &mut self.draft);
                ui.separator();
                Self::show_preview(ui, &self.draft);
                ui.separator();
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    if ui.button("OK").clicked() {
                        chosen = Some(self.draft.clone());
                        self.visible = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.visible = false;
                    }
                });
            });

        if !open {
            self.visible = false;
        }

        chosen
    }

    /// Renders family, size, and style controls.
    fn show_controls(ui: &mut Ui, draft: &mut FontSettings) {
        egui::ComboBox::from_label("Family")
            .selected_text(draft.family.clone())
            .show_ui(ui, |ui| {
                for family in FONT_FAMILIES {
                    ui.selectable_value(&mut draft.family, family.to_string(), family);
                }
            });
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            ui.add(egui::Slider::new(&mut draft.size, MIN_FONT_SIZE..=MAX_FONT_SIZE).text("Size"));
            ui.checkbox(&mut draft.bold, "Bold");
            ui.checkbox(&mut draft.italic, "Italic");
        });
    }

    fn show_preview(ui: &mut Ui, draft: &FontSettings) {
        ui.label("Preview");
        let mut text = RichText::new("AaBbYyZz")
            .size(draft.size as f32)
            .family(egui_family(draft));
        if draft.bold {
            text = text.strong();
        }
        if draft.italic {
            text = text.italics();
        }
        ui.vertical_centered(|ui| {
            ui.label(text);
        });
    }
}

/// A modal message waiting for acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub text: String,
}

/// Queue of modal messages, shown one at a time.
#[derive(Debug, Default)]
pub struct MessageDialog {
    pending: std::collections::VecDeque<Message>,
}

impl MessageDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: MessageKind, title: &str, text: &str) {
        self.pending.push_back(Message {
            kind,
            title: title.to_string(),
            text: text.to_string(),
        });
    }

    pub fn is_open(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The message currently on screen.
    pub fn current(&self) -> Option<&Message> {
        self.pending.front()
    }

    /// Dismisses the message currently on screen.
    pub fn dismiss(&mut self) {
        self.pending.pop_front();
    }

    /// Shows the front message, if any.
    pub fn show(&mut self, ctx: &Context) {
        let Some(message) = self.pending.front().cloned() else {
            return;
        };

        let mut dismissed = false;
        let mut open = true;

        Window::new(message.title.as_str())
            .id(egui::Id::new("message_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                let text = match message.kind {
                    MessageKind::Error => RichText::new(&message.text).color(ui.visuals().error_fg_color),
                    MessageKind::Info => RichText::new(&message.text),
                };
                ui.label(text);
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || !open {
            self.dismiss();
        }
    }
}
