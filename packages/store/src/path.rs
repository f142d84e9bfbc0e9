//! Relative path type for locations under the namespace root.

use std::fmt;

/// Errors related to relative-path parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path segment would escape or alias the namespace root.
    InvalidSegment { segment: String, position: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidSegment { segment, position } => {
                write!(
                    f,
                    "invalid path segment '{}' at position {}",
                    segment, position
                )
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A file location relative to the namespace root.
///
/// Segments are separated by `/`; the final segment is the file name and
/// every preceding segment is a directory name. Segments are otherwise
/// arbitrary file names - `notes/2024/todo.json` is three segments.
///
/// `.` and `..` segments are rejected at parse time, so a parsed path can
/// never reach above the namespace root.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    /// Parse a path string.
    ///
    /// # Path Syntax
    ///
    /// - Segments are separated by `/`
    /// - Empty segments are ignored (normalizes `//` and trailing `/`)
    /// - `.` and `..` segments are rejected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotstash_store::RelativePath;
    ///
    /// let path = RelativePath::parse("notes/2024/todo.json").unwrap();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.file_name(), Some("todo.json"));
    ///
    /// // Trailing slashes are normalized
    /// assert_eq!(
    ///     RelativePath::parse("a/b/").unwrap(),
    ///     RelativePath::parse("a/b").unwrap(),
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let segments: Vec<String> = s
            .split('/')
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .collect();

        for (i, segment) in segments.iter().enumerate() {
            if segment == "." || segment == ".." {
                return Err(PathError::InvalidSegment {
                    segment: segment.clone(),
                    position: i,
                });
            }
        }

        Ok(RelativePath { segments })
    }

    /// Check if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// All segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment - the file name.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// All segments but the last - the directory chain to materialize.
    pub fn dir_segments(&self) -> &[String] {
        match self.segments.len() {
            0 => &[],
            n => &self.segments[..n - 1],
        }
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &RelativePath) -> RelativePath {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        RelativePath { segments }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl std::str::FromStr for RelativePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Macro for creating relative paths from literals.
///
/// # Example
///
/// ```rust
/// use dotstash_store::rel_path;
///
/// let p = rel_path!("notes/todo.txt");
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! rel_path {
    ($s:expr) => {
        $crate::RelativePath::parse($s).expect("invalid path literal")
    };
}
