//! Namespace configuration - the project identifier naming the storage root.

use std::fmt;

/// The project identifier that names the hidden storage folder.
///
/// Starts out unset; assigned (or reassigned) through
/// [`Namespace::set`]. The raw value is normalized on assignment so the
/// on-disk folder name is stable and shell-friendly: every whitespace
/// character becomes a hyphen and the result is lowercased.
///
/// # Example
///
/// ```rust
/// use dotstash_store::Namespace;
///
/// let mut ns = Namespace::default();
/// assert!(!ns.is_set());
///
/// ns.set("My Project");
/// assert_eq!(ns.as_str(), "my-project");
/// assert_eq!(ns.root_dir_name(), ".my-project");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Namespace {
    normalized: String,
}

impl Namespace {
    /// A namespace normalized from a raw identifier.
    pub fn new(raw: &str) -> Self {
        let mut ns = Self::default();
        ns.set(raw);
        ns
    }

    /// Assign the namespace, normalizing the raw value.
    ///
    /// No validation beyond normalization; an empty value is legal but
    /// unusable for resolution.
    pub fn set(&mut self, raw: &str) {
        self.normalized = raw
            .chars()
            .map(|c| if c.is_whitespace() { '-' } else { c })
            .collect::<String>()
            .to_lowercase();
    }

    /// The current normalized value.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Whether a non-empty namespace has been assigned.
    pub fn is_set(&self) -> bool {
        !self.normalized.is_empty()
    }

    /// The hidden folder name under the home directory.
    pub fn root_dir_name(&self) -> String {
        format!(".{}", self.normalized)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}
