//! Lazy iteration over path segments
//!
//! The resolver consumes a path one segment at a time and then needs the
//! unconsumed tail as a path of its own. `Segments` supports both: it is a
//! plain `Iterator` over `&str` segments, and [`Segments::remainder`]
//! rebuilds the tail at any point without re-scanning the string.

use crate::virtual_path::VirtualPath;

/// Iterator over the slash-delimited segments of a [`VirtualPath`].
///
/// Created by [`VirtualPath::segments`]. Cloning the iterator snapshots
/// its position.
///
/// # Examples
///
/// ```
/// use revfs_path::VirtualPath;
///
/// let path = VirtualPath::parse("/repo/v1/file").unwrap();
/// let mut segments = path.segments();
/// assert_eq!(segments.next(), Some("repo"));
/// assert_eq!(segments.next(), Some("v1"));
/// assert_eq!(segments.remainder().as_str(), "/file");
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    /// Unconsumed tail: either empty or an absolute sub-path.
    rest: &'a str,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(path: &'a str) -> Self {
        // The root path "/" has no segments.
        let rest = if path == "/" { "" } else { path };
        Self { rest }
    }

    /// The unconsumed tail as an absolute path.
    ///
    /// Returns `/` once all segments have been consumed, which is what
    /// makes `"/<revision>"` resolve to an internal path of `/`.
    pub fn remainder(&self) -> VirtualPath {
        if self.rest.is_empty() {
            VirtualPath::root()
        } else {
            VirtualPath::from_validated(self.rest)
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let body = &self.rest[1..];
        match body.find('/') {
            Some(idx) => {
                self.rest = &body[idx..];
                Some(&body[..idx])
            }
            None => {
                self.rest = "";
                Some(body)
            }
        }
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
