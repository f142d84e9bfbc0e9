//! Error type for the file-system capability layer.
//!
//! Errors at this level are transport-focused. No semantic errors like
//! "namespace not set" or "record malformed" - those belong in higher layers.

use std::path::PathBuf;

/// Errors from the file-system capability.
#[derive(Debug)]
pub enum FsError {
    /// An underlying I/O operation failed.
    ///
    /// Permission denied, disk full, broken enumeration, etc.
    Io(std::io::Error),

    /// An entry exists at `path` but is not a directory.
    ///
    /// Raised where a directory is required, e.g. when a file name
    /// collides with a directory level being created.
    NotADirectory {
        /// The offending on-disk path.
        path: PathBuf,
    },

    /// The platform reports no home directory for the current user.
    HomeNotFound,
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::Io(e) => write!(f, "i/o error: {}", e),
            FsError::NotADirectory { path } => {
                write!(f, "not a directory: {}", path.display())
            }
            FsError::HomeNotFound => write!(f, "home directory not found"),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(e: std::io::Error) -> Self {
        FsError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_works() {
        let e = FsError::HomeNotFound;
        assert_eq!(format!("{}", e), "home directory not found");

        let e = FsError::NotADirectory {
            path: PathBuf::from("/tmp/collision"),
        };
        assert!(format!("{}", e).contains("/tmp/collision"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let fs_err: FsError = io_err.into();
        assert!(matches!(fs_err, FsError::Io(_)));
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error;

        let fs_err = FsError::Io(std::io::Error::other("boom"));
        assert!(fs_err.source().is_some());
        assert!(FsError::HomeNotFound.source().is_none());
    }
}
