//! Path decomposition
//!
//! Maps a raw filesystem path to the logical coordinates the object store
//! understands. Pure apart from the mode argument: no I/O, no shared
//! state, one fresh [`ResolvedLocation`] per call.

use revfs_path::VirtualPath;
use revfs_store::ResolvedLocation;

use crate::error::Result;
use crate::mode::RepoCountMode;

/// Decompose a raw path into a [`ResolvedLocation`].
///
/// The mode decides the shape of the path:
///
/// - `Single`: `/<revision>[/<internal...>]`
/// - `Multi`: `/<repository>[/<revision>[/<internal...>]]`
///
/// `/` resolves to the filesystem root in either mode. A bare
/// `/<repository>` in `Multi` mode is a repository-root request — no
/// revision, no internal path. Any malformed path (empty, relative,
/// repeated or trailing separators) fails before any field of the output
/// is populated.
///
/// # Examples
///
/// ```
/// use revfs_core::{RepoCountMode, decompose};
///
/// let location = decompose("/v1/dir/file", RepoCountMode::Single).unwrap();
/// assert_eq!(location.revision.as_deref(), Some("v1"));
/// assert_eq!(location.internal.as_ref().unwrap().as_str(), "/dir/file");
///
/// let location = decompose("/backup", RepoCountMode::Multi).unwrap();
/// assert_eq!(location.repository.as_deref(), Some("backup"));
/// assert_eq!(location.revision, None);
/// ```
pub fn decompose(raw: &str, mode: RepoCountMode) -> Result<ResolvedLocation> {
    let path = VirtualPath::parse(raw)?;
    if path.is_root() {
        return Ok(ResolvedLocation::filesystem_root());
    }

    let mut segments = path.segments();
    let location = match mode {
        RepoCountMode::Single => {
            let revision = segments.next().ok_or(revfs_path::Error::Empty)?;
            ResolvedLocation::single(revision, segments.remainder())
        }
        RepoCountMode::Multi => {
            let repository = segments.next().ok_or(revfs_path::Error::Empty)?;
            match segments.next() {
                None => ResolvedLocation::repository_root(repository),
                Some(revision) => {
                    ResolvedLocation::multi(repository, revision, segments.remainder())
                }
            }
        }
    };
    tracing::debug!(%location, path = raw, %mode, "Decomposed path");
    Ok(location)
}
