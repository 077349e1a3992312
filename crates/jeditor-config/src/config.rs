/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::font::FontSettings;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Font used by the text area.
    pub font: FontSettings,
    pub window_width: f32,
    pub window_height: f32,
    /// Whether to remember the last folder used in open/save dialogs.
    pub remember_last_folder: bool,
    /// Last folder used in an open/save dialog (persisted across sessions).
    pub last_used_folder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font: FontSettings::default(),
            window_width: 800.0,
            window_height: 600.0,
            remember_last_folder: true,
            last_used_folder: String::new(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `jeditor.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("jeditor.json")))
            .unwrap_or_else(|| PathBuf::from("jeditor.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Returns the starting directory for file dialogs.
    ///
    /// `last_used_folder` wins when remembering is enabled and the folder
    /// still exists; otherwise the user's home directory.
    pub fn resolve_work_folder(&self) -> Option<PathBuf> {
        if self.remember_last_folder && !self.last_used_folder.is_empty() {
            let p = PathBuf::from(&self.last_used_folder);
            if p.is_dir() {
                return Some(p);
            }
        }
        dirs::home_dir()
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.font.sanitize();
        if !self.window_width.is_finite() {
            self.window_width = 800.0;
        }
        if !self.window_height.is_finite() {
            self.window_height = 600.0;
        }
        self.window_width = self.window_width.max(400.0);
        self.window_height = self.window_height.max(300.0);
    }
}
