//! Real file system backed by `std::fs`.

use std::path::{Path, PathBuf};
use std::{fs, io};

use bytes::Bytes;

use crate::{FileSystem, FsError};

/// The real file system.
///
/// By default the home directory is discovered through the platform
/// (`dirs::home_dir()`). Tests pin it to a temporary directory with
/// [`DiskFs::with_home`].
pub struct DiskFs {
    home: Option<PathBuf>,
}

impl DiskFs {
    /// A disk file system using the platform home directory.
    pub fn new() -> Self {
        Self { home: None }
    }

    /// A disk file system with a fixed home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }
}

impl Default for DiskFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for DiskFs {
    fn home_dir(&mut self) -> Result<PathBuf, FsError> {
        match &self.home {
            Some(home) => Ok(home.clone()),
            None => dirs::home_dir().ok_or(FsError::HomeNotFound),
        }
    }

    fn is_dir(&mut self, path: &Path) -> Result<bool, FsError> {
        match fs::metadata(path) {
            Ok(attr) => Ok(attr.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn create_dir(&mut self, path: &Path) -> Result<(), FsError> {
        log::debug!("Creating directory {}...", path.display());
        fs::create_dir(path).map_err(|e| {
            // A plain file sitting where the directory should go is the
            // interesting collision; report it distinctly.
            if e.kind() == io::ErrorKind::AlreadyExists && path.is_file() {
                FsError::NotADirectory {
                    path: path.to_path_buf(),
                }
            } else {
                e.into()
            }
        })
    }

    fn read(&mut self, path: &Path) -> Result<Option<Bytes>, FsError> {
        log::debug!("Reading {}...", path.display());
        match fs::read(path) {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, path: &Path, data: Bytes) -> Result<(), FsError> {
        log::debug!("Writing {}...", path.display());
        fs::write(path, &data)?;
        Ok(())
    }

    fn read_dir(&mut self, path: &Path) -> Result<Vec<String>, FsError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
