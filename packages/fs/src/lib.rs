//! File-system capability for the dotstash stack.
//!
//! This is the narrow waist of the stack. Everything at this level is
//! absolute paths and raw bytes - no namespace resolution, no record
//! semantics, no format interpretation. Higher layers decide *where*
//! things live and *what* the bytes mean; this layer only touches disk.
//!
//! Two implementations ship with the crate:
//! - [`DiskFs`] - the real file system, with the home directory discovered
//!   through the platform or pinned for tests.
//! - [`MemFs`] - an in-memory double enforcing the same contracts, for
//!   exercising store logic without touching disk.
//!
//! # Example
//!
//! ```rust
//! use dotstash_fs::{FileSystem, MemFs};
//! use bytes::Bytes;
//!
//! fn touch(fs: &mut dyn FileSystem) {
//!     let home = fs.home_dir().unwrap();
//!     fs.create_dir(&home.join("scratch")).unwrap();
//!     fs.write(&home.join("scratch/note"), Bytes::from_static(b"hi")).unwrap();
//! }
//!
//! touch(&mut MemFs::new());
//! ```

pub use bytes::Bytes;

mod disk;
mod error;
mod mem;
mod traits;

pub use disk::DiskFs;
pub use error::FsError;
pub use mem::MemFs;
pub use traits::FileSystem;
