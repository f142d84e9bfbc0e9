//! The file-system capability trait.

use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::FsError;

/// File-system primitives used by the store layers above.
///
/// Paths are absolute `std::path` paths and data is raw bytes. No
/// namespace semantics, no encoding - that all lives in higher layers.
///
/// `create_dir` creates exactly one directory level; callers that need a
/// chain materialize it prefix by prefix. Implementations may fail the
/// call if the parent is missing and are not required to tolerate the
/// directory already existing - callers check `is_dir` first.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn FileSystem>`.
pub trait FileSystem: Send + Sync {
    /// The current user's home directory.
    fn home_dir(&mut self) -> Result<PathBuf, FsError>;

    /// Whether `path` exists and is a directory.
    ///
    /// Returns `Ok(false)` both for missing entries and for entries that
    /// exist but are not directories.
    fn is_dir(&mut self, path: &Path) -> Result<bool, FsError>;

    /// Create a single directory level. The parent must already exist.
    fn create_dir(&mut self, path: &Path) -> Result<(), FsError>;

    /// Read the full contents of a file.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The file does not exist (not an error condition).
    /// * `Ok(Some(bytes))` - The file's contents.
    /// * `Err(FsError)` - An I/O error occurred.
    fn read(&mut self, path: &Path) -> Result<Option<Bytes>, FsError>;

    /// Write `data` as the full contents of a file, replacing anything
    /// already there. No fsync or atomic-rename guarantee.
    fn write(&mut self, path: &Path, data: Bytes) -> Result<(), FsError>;

    /// List the immediate entries of a directory.
    ///
    /// Returns base names only, in whatever order the underlying
    /// enumeration produces them.
    fn read_dir(&mut self, path: &Path) -> Result<Vec<String>, FsError>;
}

// Blanket implementations for references and boxes

impl<T: FileSystem + ?Sized> FileSystem for &mut T {
    fn home_dir(&mut self) -> Result<PathBuf, FsError> {
        (*self).home_dir()
    }

    fn is_dir(&mut self, path: &Path) -> Result<bool, FsError> {
        (*self).is_dir(path)
    }

    fn create_dir(&mut self, path: &Path) -> Result<(), FsError> {
        (*self).create_dir(path)
    }

    fn read(&mut self, path: &Path) -> Result<Option<Bytes>, FsError> {
        (*self).read(path)
    }

    fn write(&mut self, path: &Path, data: Bytes) -> Result<(), FsError> {
        (*self).write(path, data)
    }

    fn read_dir(&mut self, path: &Path) -> Result<Vec<String>, FsError> {
        (*self).read_dir(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Box<T> {
    fn home_dir(&mut self) -> Result<PathBuf, FsError> {
        self.as_mut().home_dir()
    }

    fn is_dir(&mut self, path: &Path) -> Result<bool, FsError> {
        self.as_mut().is_dir(path)
    }

    fn create_dir(&mut self, path: &Path) -> Result<(), FsError> {
        self.as_mut().create_dir(path)
    }

    fn read(&mut self, path: &Path) -> Result<Option<Bytes>, FsError> {
        self.as_mut().read(path)
    }

    fn write(&mut self, path: &Path, data: Bytes) -> Result<(), FsError> {
        self.as_mut().write(path, data)
    }

    fn read_dir(&mut self, path: &Path) -> Result<Vec<String>, FsError> {
        self.as_mut().read_dir(path)
    }
}
