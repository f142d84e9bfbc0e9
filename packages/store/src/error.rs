//! Error taxonomy for store operations.

use std::path::PathBuf;

use dotstash_codec::CodecError;
use dotstash_fs::FsError;

use crate::PathError;

/// Errors surfaced by [`Stash`](crate::Stash) operations.
///
/// No retries, no partial recovery: every failure propagates
/// synchronously to the immediate caller.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Resolution was attempted before a namespace was assigned.
    ///
    /// A programmer error rather than a recoverable I/O condition;
    /// callers should treat it as a precondition violation.
    #[error("namespace not set")]
    NamespaceNotSet,

    /// A read targeted a file that does not exist.
    #[error("no file at {}", path.display())]
    NotFound { path: PathBuf },

    /// A file-system primitive failed.
    #[error("{0}")]
    Fs(#[from] FsError),

    /// A value could not be encoded, or bytes could not be decoded.
    #[error("{0}")]
    Codec(#[from] CodecError),

    /// A relative path failed validation.
    #[error("{0}")]
    Path(#[from] PathError),
}
