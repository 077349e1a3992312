//! File I/O operations for documents.
//!
//! Every operation goes through a [`FileSystem`] and leaves the document
//! untouched when the underlying read or write fails.

use std::path::Path;

use crate::fs::{FileReadError, FileSystem, FileWriteError};

use super::Document;

/// Result of [`Document::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// The buffer was written to the associated path.
    Saved,
    /// The document has no path yet; the caller must pick one and use `save_as`.
    NeedsPath,
}

impl Document {
    /// Opens a document from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn open(fs: &dyn FileSystem, path: &Path) -> Result<Self, FileReadError> {
        let mut doc = Self::new();
        doc.load_from(fs, path)?;
        Ok(doc)
    }

    /// Reads `path` and loads it into this document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read; the document keeps its
    /// previous buffer, path and dirty flag.
    pub fn load_from(&mut self, fs: &dyn FileSystem, path: &Path) -> Result<(), FileReadError> {
        let content = fs.read_text(path)?;
        self.load(&content, path);
        Ok(())
    }

    /// Saves the document to its file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written; the document stays dirty.
    pub fn save(&mut self, fs: &dyn FileSystem) -> Result<SaveStatus, FileWriteError> {
        let Some(path) = self.file_path.clone() else {
            return Ok(SaveStatus::NeedsPath);
        };
        self.save_as(fs, &path)?;
        Ok(SaveStatus::Saved)
    }

    /// Saves the document to a specific path and associates it with that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written; path and dirty flag
    /// are left unchanged.
    pub fn save_as(&mut self, fs: &dyn FileSystem, path: &Path) -> Result<(), FileWriteError> {
        fs.write_text(path, &self.text())?;
        self.mark_saved(path);
        Ok(())
    }
}
