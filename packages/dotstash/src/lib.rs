//! dotstash: a persistence helper for command-line tools.
//!
//! dotstash gives a CLI tool a storage root at `~/.<namespace>/` and
//! reads/writes whole files there: JSON-encoded records, newline-joined
//! text lists, and directory listings. Directories along a relative path
//! are created on demand, so callers never touch `std::fs` themselves.
//!
//! The stack has three layers, each usable on its own:
//! - [`dotstash_fs`] - file-system primitives behind an object-safe
//!   capability trait, with disk and in-memory implementations.
//! - [`dotstash_codec`] - the `encode(T) -> bytes` / `decode(bytes) -> T`
//!   capability, JSON by default.
//! - [`dotstash_store`] - the [`Stash`] handle tying both together under
//!   a normalized namespace.
//!
//! # Example
//!
//! ```rust
//! use dotstash::{rel_path, MemFs, Stash};
//!
//! let mut stash = Stash::with_fs(MemFs::new());
//! stash.set_namespace("My Tool");
//! assert_eq!(stash.namespace(), "my-tool");
//!
//! stash.save_text(&["first run"], &rel_path!("logs/history.txt")).unwrap();
//! assert_eq!(
//!     stash.load_text(&rel_path!("logs/history.txt")).unwrap(),
//!     vec!["first run"],
//! );
//! ```

pub use dotstash_codec::{Codec, CodecError, JsonCodec};
pub use dotstash_fs::{Bytes, DiskFs, FileSystem, FsError, MemFs};
pub use dotstash_store::{rel_path, Error, Namespace, PathError, RelativePath, Stash};
