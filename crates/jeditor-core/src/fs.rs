//! Filesystem collaborator used by documents for reading and writing text.
//!
//! Documents never touch `std::fs` directly. They go through [`FileSystem`],
//! so the headless core can run against [`MemoryFileSystem`] and the desktop
//! shell against [`StdFileSystem`].

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reading a file failed. Carries the path and the underlying I/O cause.
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", path.display())]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Writing a file failed. Carries the path and the underlying I/O cause.
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct FileWriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Plain-text file access.
pub trait FileSystem {
    /// Reads the whole file as text.
    ///
    /// # Errors
    ///
    /// Returns [`FileReadError`] if the file is missing, unreadable, or not valid UTF-8.
    fn read_text(&self, path: &Path) -> Result<String, FileReadError>;

    /// Writes `content` verbatim, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`FileWriteError`] if the file cannot be created or written.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), FileWriteError>;
}

/// [`FileSystem`] backed by the real disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_text(&self, path: &Path) -> Result<String, FileReadError> {
        std::fs::read_to_string(path).map_err(|source| FileReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), FileWriteError> {
        std::fs::write(path, content).map_err(|source| FileWriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory [`FileSystem`] for headless use.
///
/// Paths added with [`deny`](Self::deny) fail every read and write with
/// `PermissionDenied`.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<HashMap<PathBuf, String>>,
    denied: RefCell<HashSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a file, overwriting any previous content.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), content.into());
    }

    /// Returns the content stored at `path`.
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Makes every access to `path` fail.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.denied.borrow_mut().insert(path.into());
    }

    /// Lifts a previous [`deny`](Self::deny).
    pub fn allow(&self, path: &Path) {
        self.denied.borrow_mut().remove(path);
    }

    fn is_denied(&self, path: &Path) -> bool {
        self.denied.borrow().contains(path)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_text(&self, path: &Path) -> Result<String, FileReadError> {
        let fail = |kind: io::ErrorKind, msg: &str| FileReadError {
            path: path.to_path_buf(),
            source: io::Error::new(kind, msg.to_string()),
        };
        if self.is_denied(path) {
            return Err(fail(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        self.get(path)
            .ok_or_else(|| fail(io::ErrorKind::NotFound, "no such file"))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), FileWriteError> {
        if self.is_denied(path) {
            return Err(FileWriteError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        self.insert(path, content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        StdFileSystem.write_text(&path, "line one\nline two").unwrap();
        assert_eq!(StdFileSystem.read_text(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_std_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = StdFileSystem.read_text(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_std_read_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.dat");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let err = StdFileSystem.read_text(&path).unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_std_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("a.txt");
        let err = StdFileSystem.write_text(&path, "x").unwrap_err();
        assert_eq!(err.path, path);
    }

    #[test]
    fn test_memory_round_trip() {
        let fs = MemoryFileSystem::new();
        fs.write_text(Path::new("/notes.txt"), "hi").unwrap();
        assert_eq!(fs.read_text(Path::new("/notes.txt")).unwrap(), "hi");
    }

    #[test]
    fn test_memory_deny_and_allow() {
        let fs = MemoryFileSystem::new();
        fs.insert("/locked.txt", "secret");
        fs.deny("/locked.txt");
        assert!(fs.read_text(Path::new("/locked.txt")).is_err());
        assert!(fs.write_text(Path::new("/locked.txt"), "x").is_err());
        assert_eq!(fs.get(Path::new("/locked.txt")).as_deref(), Some("secret"));

        fs.allow(Path::new("/locked.txt"));
        assert_eq!(fs.read_text(Path::new("/locked.txt")).unwrap(), "secret");
    }

    #[test]
    fn test_error_display_includes_path_and_cause() {
        let fs = MemoryFileSystem::new();
        let err = fs.read_text(Path::new("/gone.txt")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/gone.txt"));
        assert!(msg.contains("no such file"));
    }
}
