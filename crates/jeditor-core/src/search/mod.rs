//! Incremental plain-text search.
mod finder;

pub use finder::{find_from, FindSession, SearchMatch};
