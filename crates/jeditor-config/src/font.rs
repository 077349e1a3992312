/// Font preferences for the text area: family, point size, and style flags.
use serde::{Deserialize, Serialize};

/// Smallest selectable font size.
pub const MIN_FONT_SIZE: u32 = 8;
/// Largest selectable font size.
pub const MAX_FONT_SIZE: u32 = 72;

/// Font families the text area can render.
pub const FONT_FAMILIES: [&str; 2] = ["Monospace", "Proportional"];

/// Font used by the text area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub family: String,
    pub size: u32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: "Monospace".to_string(),
            size: 14,
            bold: false,
            italic: false,
        }
    }
}

impl FontSettings {
    /// Returns true if the family renders every glyph at the same width.
    pub fn is_monospace(&self) -> bool {
        self.family == "Monospace"
    }

    /// Clamps the size into range and resets an unknown family.
    pub fn sanitize(&mut self) {
        self.size = self.size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if !FONT_FAMILIES.contains(&self.family.as_str()) {
            tracing::warn!("Unknown font family '{}', using Monospace", self.family);
            self.family = "Monospace".to_string();
        }
    }

    /// Returns a sanitized copy.
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// Short human-readable description, e.g. `Monospace 14pt Bold`.
    pub fn describe(&self) -> String {
        let mut out = format!("{} {}pt", self.family, self.size);
        match (self.bold, self.italic) {
            (true, true) => out.push_str(" Bold Italic"),
            (true, false) => out.push_str(" Bold"),
            (false, true) => out.push_str(" Italic"),
            (false, false) => {}
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font() {
        let font = FontSettings::default();
        assert_eq!(font.family, "Monospace");
        assert_eq!(font.size, 14);
        assert!(!font.bold);
        assert!(!font.italic);
        assert!(font.is_monospace());
    }

    #[test]
    fn test_sanitize_clamps_size() {
        let mut font = FontSettings {
            size: 2,
            ..Default::default()
        };
        font.sanitize();
        assert_eq!(font.size, MIN_FONT_SIZE);

        font.size = 500;
        font.sanitize();
        assert_eq!(font.size, MAX_FONT_SIZE);

        font.size = 30;
        font.sanitize();
        assert_eq!(font.size, 30);
    }

    #[test]
    fn test_sanitize_resets_unknown_family() {
        let font = FontSettings {
            family: "Comic Sans".to_string(),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(font.family, "Monospace");
    }

    #[test]
    fn test_sanitize_keeps_proportional() {
        let font = FontSettings {
            family: "Proportional".to_string(),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(font.family, "Proportional");
        assert!(!font.is_monospace());
    }

    #[test]
    fn test_describe() {
        let mut font = FontSettings::default();
        assert_eq!(font.describe(), "Monospace 14pt");
        font.bold = true;
        assert_eq!(font.describe(), "Monospace 14pt Bold");
        font.italic = true;
        assert_eq!(font.describe(), "Monospace 14pt Bold Italic");
        font.bold = false;
        assert_eq!(font.describe(), "Monospace 14pt Italic");
    }
}
