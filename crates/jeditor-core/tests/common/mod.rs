#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;

use jeditor_config::FontSettings;
use jeditor_core::stats::TextStats;
use jeditor_core::{MessageKind, Presenter};

/// One observable effect the editor asked the window to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    PromptOpen,
    PromptSave(String),
    Message(MessageKind, String, String),
    Title(String),
    Render(String),
    Select(usize, usize),
    Font(FontSettings),
    Status(TextStats),
}

/// Presenter that records every call and answers prompts from a queue.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<Call>,
    pub open_answers: VecDeque<Option<PathBuf>>,
    pub save_answers: VecDeque<Option<PathBuf>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_open(&mut self, path: Option<&str>) {
        self.open_answers.push_back(path.map(PathBuf::from));
    }

    pub fn answer_save(&mut self, path: Option<&str>) {
        self.save_answers.push_back(path.map(PathBuf::from));
    }

    pub fn titles(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Title(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<(MessageKind, &str)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Message(kind, _, text) => Some((*kind, text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<TextStats> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Status(s) => Some(*s),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn prompt_open_path(&mut self) -> Option<PathBuf> {
        self.calls.push(Call::PromptOpen);
        self.open_answers.pop_front().flatten()
    }

    fn prompt_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        self.calls.push(Call::PromptSave(suggested_name.to_string()));
        self.save_answers.pop_front().flatten()
    }

    fn show_message(&mut self, kind: MessageKind, title: &str, text: &str) {
        self.calls
            .push(Call::Message(kind, title.to_string(), text.to_string()));
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(Call::Title(title.to_string()));
    }

    fn render_text(&mut self, text: &str) {
        self.calls.push(Call::Render(text.to_string()));
    }

    fn select_range(&mut self, start: usize, end: usize) {
        self.calls.push(Call::Select(start, end));
    }

    fn apply_font(&mut self, font: &FontSettings) {
        self.calls.push(Call::Font(font.clone()));
    }

    fn refresh_status(&mut self, stats: TextStats) {
        self.calls.push(Call::Status(stats));
    }
}
