//! Object store trait

use crate::error::Result;
use crate::location::ResolvedLocation;
use crate::stats::FileStats;

/// Trait for revision-aware storage backends.
///
/// Implementations answer lookups for already-resolved locations; they
/// never see raw filesystem paths. A repository-root location (revision
/// absent) is a request about the repository itself: its children are the
/// repository's revision names.
pub trait ObjectStore: Send + Sync {
    /// Stats for the entry at a resolved location.
    fn file_stats(&self, location: &ResolvedLocation) -> Result<FileStats>;

    /// Sorted child names of the directory at a resolved location.
    fn children(&self, location: &ResolvedLocation) -> Result<Vec<String>>;
}
