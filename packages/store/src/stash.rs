//! The store handle: namespace resolution, record and text persistence.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use dotstash_codec::{Codec, JsonCodec};
use dotstash_fs::{DiskFs, FileSystem};

use crate::{Error, Namespace, RelativePath};

/// A handle to a project-scoped store under the home directory.
///
/// All data lives at `<home>/.<namespace>/<relative-path>`. Every
/// operation resolves its location first, materializing any missing
/// directory levels on the way, then delegates to the file-system
/// capability and - for records - to the codec.
///
/// The namespace is held by the handle rather than by process-wide
/// state: construct a `Stash`, assign the namespace once, and pass the
/// handle around. Operations before assignment fail with
/// [`Error::NamespaceNotSet`].
///
/// Everything is synchronous and single-writer; writes are whole-buffer
/// overwrites with no atomicity guarantee.
///
/// # Example
///
/// ```rust
/// use dotstash_store::{rel_path, Stash};
/// use dotstash_fs::MemFs;
///
/// let mut stash = Stash::with_fs(MemFs::new());
/// stash.set_namespace("My Project");
///
/// stash.save_record(&vec![1, 2, 3], &rel_path!("data/values.json")).unwrap();
/// let values: Vec<u32> = stash.load_record(&rel_path!("data/values.json")).unwrap();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub struct Stash<F: FileSystem = DiskFs, C: Codec = JsonCodec> {
    fs: F,
    codec: C,
    namespace: Namespace,
}

impl Stash {
    /// A stash over the real file system, encoding records as JSON.
    ///
    /// The namespace starts out unset.
    pub fn new() -> Self {
        Self::with_parts(DiskFs::new(), JsonCodec)
    }
}

impl Default for Stash {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> Stash<F, JsonCodec> {
    /// A JSON stash over the given file system.
    pub fn with_fs(fs: F) -> Self {
        Self::with_parts(fs, JsonCodec)
    }
}

impl<F: FileSystem, C: Codec> Stash<F, C> {
    /// A stash over the given file system and codec.
    pub fn with_parts(fs: F, codec: C) -> Self {
        Self {
            fs,
            codec,
            namespace: Namespace::default(),
        }
    }

    /// Assign (or reassign) the namespace. See [`Namespace::set`] for the
    /// normalization rule.
    pub fn set_namespace(&mut self, raw: &str) {
        self.namespace.set(raw);
    }

    /// The current normalized namespace, empty if unset.
    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    /// Resolve a relative path to its absolute on-disk location.
    ///
    /// Guarantees the namespace root and every intermediate directory of
    /// `rel` exist before returning. The final segment is treated as the
    /// file name and is not created. Idempotent: resolving the same path
    /// twice performs no redundant creation and returns the same
    /// location.
    pub fn resolve(&mut self, rel: &RelativePath) -> Result<PathBuf, Error> {
        let root = self.namespace_root()?;
        self.materialize(&root, rel.dir_segments())?;
        Ok(join_segments(root, rel.segments()))
    }

    /// Like [`resolve`](Self::resolve), but materializes every segment -
    /// including the final one - as a directory.
    fn resolve_dir(&mut self, rel: &RelativePath) -> Result<PathBuf, Error> {
        let root = self.namespace_root()?;
        self.materialize(&root, rel.segments())?;
        Ok(join_segments(root, rel.segments()))
    }

    /// `<home>/.<namespace>`, created if missing.
    fn namespace_root(&mut self) -> Result<PathBuf, Error> {
        if !self.namespace.is_set() {
            return Err(Error::NamespaceNotSet);
        }

        let root = self.fs.home_dir()?.join(self.namespace.root_dir_name());
        if !self.fs.is_dir(&root)? {
            log::debug!("Creating namespace root {}...", root.display());
            self.fs.create_dir(&root)?;
        }
        Ok(root)
    }

    /// Create the directory chain top-down, one level per call.
    ///
    /// Each cumulative prefix gets its own existence check and, when
    /// missing, a single-level `create_dir` - never a recursive create.
    fn materialize(&mut self, root: &Path, segments: &[String]) -> Result<(), Error> {
        let mut prefix = root.to_path_buf();
        for segment in segments {
            prefix.push(segment);
            if !self.fs.is_dir(&prefix)? {
                log::debug!("Creating directory {}...", prefix.display());
                self.fs.create_dir(&prefix)?;
            }
        }
        Ok(())
    }

    /// Serialize `value` with the codec and write it at `at`,
    /// overwriting any existing content in full.
    pub fn save_record<T: Serialize>(
        &mut self,
        value: &T,
        at: &RelativePath,
    ) -> Result<(), Error> {
        let location = self.resolve(at)?;
        let bytes = self.codec.encode(value)?;
        log::debug!("Writing record {}...", location.display());
        self.fs.write(&location, bytes)?;
        Ok(())
    }

    /// Read the file at `from` and decode it with the codec.
    ///
    /// Does not create the file: a missing file is [`Error::NotFound`].
    pub fn load_record<T: DeserializeOwned>(&mut self, from: &RelativePath) -> Result<T, Error> {
        let location = self.resolve(from)?;
        log::debug!("Reading record {}...", location.display());
        let bytes = self
            .fs
            .read(&location)?
            .ok_or(Error::NotFound { path: location })?;
        Ok(self.codec.decode(&bytes)?)
    }

    /// Join `lines` with newlines and write the UTF-8 bytes at `at`.
    pub fn save_text<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        at: &RelativePath,
    ) -> Result<(), Error> {
        self.save_text_with(lines, at, "\n")
    }

    /// Join `lines` with `separator` and write the UTF-8 bytes at `at`,
    /// overwriting any existing content in full.
    pub fn save_text_with<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        at: &RelativePath,
        separator: &str,
    ) -> Result<(), Error> {
        let location = self.resolve(at)?;
        let joined = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(separator);
        log::debug!("Writing text {}...", location.display());
        self.fs.write(&location, joined.into_bytes().into())?;
        Ok(())
    }

    /// Read the file at `from` and split it on newlines.
    pub fn load_text(&mut self, from: &RelativePath) -> Result<Vec<String>, Error> {
        self.load_text_with(from, "\n")
    }

    /// Read the file at `from` and split it on `separator`.
    ///
    /// A missing file is [`Error::NotFound`]. Content that is not valid
    /// UTF-8 loads as an empty list. A single trailing empty element is
    /// dropped, so content written with or without a trailing separator
    /// loads identically.
    pub fn load_text_with(
        &mut self,
        from: &RelativePath,
        separator: &str,
    ) -> Result<Vec<String>, Error> {
        let location = self.resolve(from)?;
        log::debug!("Reading text {}...", location.display());
        let bytes = self
            .fs
            .read(&location)?
            .ok_or(Error::NotFound { path: location })?;

        let Ok(text) = std::str::from_utf8(&bytes) else {
            return Ok(Vec::new());
        };

        let mut lines: Vec<String> = text.split(separator).map(str::to_string).collect();
        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        Ok(lines)
    }

    /// List the immediate entries at `at`, resolved as a directory.
    ///
    /// The directory chain - including the final segment - is created if
    /// absent. Returns base names only, order unspecified.
    pub fn list_dir(&mut self, at: &RelativePath) -> Result<Vec<String>, Error> {
        let location = self.resolve_dir(at)?;
        log::debug!("Listing {}...", location.display());
        Ok(self.fs.read_dir(&location)?)
    }
}

fn join_segments(root: PathBuf, segments: &[String]) -> PathBuf {
    segments.iter().fold(root, |path, segment| path.join(segment))
}
