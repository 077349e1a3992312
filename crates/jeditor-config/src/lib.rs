pub mod config;
pub mod font;

pub use config::AppConfig;
pub use font::{FontSettings, FONT_FAMILIES, MAX_FONT_SIZE, MIN_FONT_SIZE};
