//! In-memory file system for tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::{FileSystem, FsError};

/// An in-memory file system.
///
/// Holds files as a path-to-bytes map and directories as a path set, with
/// a fixed home directory at `/home/mem`. It enforces the same contracts
/// as the disk implementation - `create_dir` requires the parent to exist
/// and refuses to create more than one level - so store logic exercised
/// against it cannot cheat on directory materialization.
///
/// # Example
///
/// ```rust
/// use dotstash_fs::{FileSystem, MemFs};
/// use bytes::Bytes;
///
/// let mut fs = MemFs::new();
/// let home = fs.home_dir().unwrap();
///
/// fs.write(&home.join("greeting"), Bytes::from_static(b"hello")).unwrap();
/// assert_eq!(
///     fs.read(&home.join("greeting")).unwrap(),
///     Some(Bytes::from_static(b"hello")),
/// );
/// ```
pub struct MemFs {
    home: PathBuf,
    files: HashMap<PathBuf, Bytes>,
    dirs: HashSet<PathBuf>,
}

impl MemFs {
    /// A fresh in-memory file system containing only the home directory.
    pub fn new() -> Self {
        let home = PathBuf::from("/home/mem");
        let mut dirs = HashSet::new();
        dirs.insert(home.clone());
        Self {
            home,
            files: HashMap::new(),
            dirs,
        }
    }

    /// The number of `create_dir` calls that have succeeded.
    ///
    /// Lets tests assert that repeated resolution performs no redundant
    /// directory creation.
    pub fn dirs_created(&self) -> usize {
        // Home is seeded, not created.
        self.dirs.len() - 1
    }

    fn not_found(path: &Path) -> FsError {
        FsError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file or directory: {}", path.display()),
        ))
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MemFs {
    fn home_dir(&mut self) -> Result<PathBuf, FsError> {
        Ok(self.home.clone())
    }

    fn is_dir(&mut self, path: &Path) -> Result<bool, FsError> {
        Ok(self.dirs.contains(path))
    }

    fn create_dir(&mut self, path: &Path) -> Result<(), FsError> {
        if self.files.contains_key(path) {
            return Err(FsError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        if self.dirs.contains(path) {
            return Err(FsError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("directory exists: {}", path.display()),
            )));
        }
        match path.parent() {
            Some(parent) if self.dirs.contains(parent) => {
                self.dirs.insert(path.to_path_buf());
                Ok(())
            }
            _ => Err(Self::not_found(path)),
        }
    }

    fn read(&mut self, path: &Path) -> Result<Option<Bytes>, FsError> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, data: Bytes) -> Result<(), FsError> {
        if self.dirs.contains(path) {
            return Err(FsError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("is a directory: {}", path.display()),
            )));
        }
        match path.parent() {
            Some(parent) if self.dirs.contains(parent) => {
                self.files.insert(path.to_path_buf(), data);
                Ok(())
            }
            _ => Err(Self::not_found(path)),
        }
    }

    fn read_dir(&mut self, path: &Path) -> Result<Vec<String>, FsError> {
        if !self.dirs.contains(path) {
            return Err(Self::not_found(path));
        }

        let children = self
            .files
            .keys()
            .chain(self.dirs.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_exists_from_the_start() {
        let mut fs = MemFs::new();
        let home = fs.home_dir().unwrap();
        assert!(fs.is_dir(&home).unwrap());
        assert_eq!(fs.dirs_created(), 0);
    }

    #[test]
    fn create_dir_requires_parent() {
        let mut fs = MemFs::new();
        let home = fs.home_dir().unwrap();

        assert!(fs.create_dir(&home.join("a/b")).is_err());
        fs.create_dir(&home.join("a")).unwrap();
        fs.create_dir(&home.join("a/b")).unwrap();
        assert!(fs.is_dir(&home.join("a/b")).unwrap());
        assert_eq!(fs.dirs_created(), 2);
    }

    #[test]
    fn create_dir_twice_fails() {
        let mut fs = MemFs::new();
        let home = fs.home_dir().unwrap();

        fs.create_dir(&home.join("a")).unwrap();
        assert!(fs.create_dir(&home.join("a")).is_err());
    }

    #[test]
    fn create_dir_over_file_reports_collision() {
        let mut fs = MemFs::new();
        let home = fs.home_dir().unwrap();

        fs.write(&home.join("taken"), Bytes::from_static(b"file"))
            .unwrap();
        let err = fs.create_dir(&home.join("taken")).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
    }

    #[test]
    fn write_requires_parent_dir() {
        let mut fs = MemFs::new();
        let home = fs.home_dir().unwrap();

        assert!(fs
            .write(&home.join("missing/file"), Bytes::from_static(b"x"))
            .is_err());
    }

    #[test]
    fn read_missing_is_none() {
        let mut fs = MemFs::new();
        let home = fs.home_dir().unwrap();
        assert_eq!(fs.read(&home.join("absent")).unwrap(), None);
    }

    #[test]
    fn read_dir_lists_immediate_children_only() {
        let mut fs = MemFs::new();
        let home = fs.home_dir().unwrap();

        fs.create_dir(&home.join("sub")).unwrap();
        fs.write(&home.join("top"), Bytes::from_static(b"1")).unwrap();
        fs.write(&home.join("sub/inner"), Bytes::from_static(b"2"))
            .unwrap();

        let mut names = fs.read_dir(&home).unwrap();
        names.sort();
        assert_eq!(names, vec!["sub".to_string(), "top".to_string()]);
    }

    #[test]
    fn read_dir_of_missing_dir_fails() {
        let mut fs = MemFs::new();
        let home = fs.home_dir().unwrap();
        assert!(fs.read_dir(&home.join("nowhere")).is_err());
    }
}
