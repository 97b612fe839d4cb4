//! Resolved filesystem locations

use revfs_path::VirtualPath;

/// The logical coordinates of a virtual filesystem path: which repository,
/// which revision of it, and which path inside that revision's tree.
///
/// Produced fresh by each resolution, handed to exactly one
/// [`ObjectStore`](crate::ObjectStore) call, then dropped. Field shapes:
///
/// - `repository` is `Some` only in multi-repository mode (never for the
///   filesystem root);
/// - `revision` is `None` for the filesystem root and for a
///   repository-root request;
/// - `internal` is `None` only for a repository-root request, where no
///   revision exists to resolve it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// Repository name, in multi-repository mode.
    pub repository: Option<String>,

    /// Revision identifier within the repository.
    pub revision: Option<String>,

    /// Path inside the revision's tree.
    pub internal: Option<VirtualPath>,
}

impl ResolvedLocation {
    /// The filesystem root, `/`, in either mode.
    pub fn filesystem_root() -> Self {
        Self {
            repository: None,
            revision: None,
            internal: Some(VirtualPath::root()),
        }
    }

    /// A location inside a revision of the sole repository (single mode).
    pub fn single(revision: impl Into<String>, internal: VirtualPath) -> Self {
        Self {
            repository: None,
            revision: Some(revision.into()),
            internal: Some(internal),
        }
    }

    /// A repository-root request: list the repository's revisions.
    pub fn repository_root(repository: impl Into<String>) -> Self {
        Self {
            repository: Some(repository.into()),
            revision: None,
            internal: None,
        }
    }

    /// A location inside a revision of a named repository (multi mode).
    pub fn multi(
        repository: impl Into<String>,
        revision: impl Into<String>,
        internal: VirtualPath,
    ) -> Self {
        Self {
            repository: Some(repository.into()),
            revision: Some(revision.into()),
            internal: Some(internal),
        }
    }

    /// Whether this location is the filesystem root.
    pub fn is_filesystem_root(&self) -> bool {
        self.repository.is_none() && self.revision.is_none()
    }

    /// Whether this location is a repository-root request.
    pub fn is_repository_root(&self) -> bool {
        self.repository.is_some() && self.revision.is_none()
    }
}

impl std::fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.repository.as_deref().unwrap_or("-"),
            self.revision.as_deref().unwrap_or("-"),
            self.internal.as_ref().map(VirtualPath::as_str).unwrap_or("-"),
        )
    }
}
