//! Validated absolute paths for the virtual filesystem

use crate::error::{Error, Result};
use crate::segments::Segments;

/// An absolute, slash-delimited path inside the virtual filesystem.
///
/// A `VirtualPath` is validated once at construction: it must start with
/// `/` and contain no empty segments, so repeated (`/a//b`) or trailing
/// (`/a/`) separators are rejected up front. Code holding a `VirtualPath`
/// never has to re-check its shape.
///
/// # Examples
///
/// ```
/// use revfs_path::VirtualPath;
///
/// let path = VirtualPath::parse("/v1/dir/file").unwrap();
/// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["v1", "dir", "file"]);
///
/// assert!(VirtualPath::parse("relative").is_err());
/// assert!(VirtualPath::parse("/a//b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    inner: String,
}

impl VirtualPath {
    /// Parse a raw path string into a validated `VirtualPath`.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::Empty);
        }
        if !raw.starts_with('/') {
            return Err(Error::NotAbsolute {
                path: raw.to_string(),
            });
        }
        if raw != "/" && raw[1..].split('/').any(str::is_empty) {
            return Err(Error::EmptySegment {
                path: raw.to_string(),
            });
        }
        Ok(Self {
            inner: raw.to_string(),
        })
    }

    /// The filesystem root, `/`.
    pub fn root() -> Self {
        Self { inner: "/".into() }
    }

    /// Whether this path is the filesystem root.
    pub fn is_root(&self) -> bool {
        self.inner == "/"
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Iterate over the slash-delimited segments of this path.
    ///
    /// The iterator is cheap to clone, so branching code can peek ahead
    /// without losing its place. The root path yields no segments.
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.inner)
    }

    /// The last segment of the path, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|s| !s.is_empty())
    }

    /// Construct from a tail already known to satisfy the path invariants.
    ///
    /// Used by [`Segments::remainder`] consumers; the tail of a validated
    /// path is itself a valid path.
    pub(crate) fn from_validated(tail: &str) -> Self {
        debug_assert!(Self::parse(tail).is_ok());
        Self {
            inner: tail.to_string(),
        }
    }
}

impl std::fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::str::FromStr for VirtualPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for VirtualPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}
