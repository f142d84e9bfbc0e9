//! Project-scoped persistence under the home directory.
//!
//! dotstash stores a CLI tool's data at `<home>/.<namespace>/`, where the
//! namespace is a normalized project identifier (whitespace to hyphens,
//! lowercased). Every operation resolves its relative path first,
//! creating missing directory levels one at a time, then reads or writes
//! the file as a whole:
//!
//! - JSON-encoded records through a serde codec
//! - separator-joined text lists (default separator `\n`)
//! - directory listings
//!
//! # Example
//!
//! ```rust
//! use dotstash_store::{rel_path, Stash};
//! use dotstash_fs::MemFs;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Session {
//!     token: String,
//! }
//!
//! let mut stash = Stash::with_fs(MemFs::new());
//! stash.set_namespace("My Tool");
//!
//! let session = Session { token: "abc123".to_string() };
//! stash.save_record(&session, &rel_path!("auth/session.json")).unwrap();
//!
//! let loaded: Session = stash.load_record(&rel_path!("auth/session.json")).unwrap();
//! assert_eq!(loaded, session);
//! ```

mod error;
mod namespace;
mod path;
mod stash;

pub use error::Error;
pub use namespace::Namespace;
pub use path::{PathError, RelativePath};
pub use stash::Stash;

// Re-export the capability layers for convenience
pub use dotstash_codec::{Codec, CodecError, JsonCodec};
pub use dotstash_fs::{DiskFs, FileSystem, FsError, MemFs};
