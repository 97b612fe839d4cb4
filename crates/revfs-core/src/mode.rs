//! Repository-count mode

use serde::{Deserialize, Serialize};

/// How many repositories a mount serves.
///
/// Fixed when the dispatcher is constructed and immutable afterwards; the
/// resolver receives it as a plain value on every call, so concurrent
/// resolutions share nothing.
///
/// The mode decides what the first path segment means: in `Single` mode it
/// is a revision, in `Multi` mode it is a repository name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoCountMode {
    /// One repository; revisions sit directly under the mount root.
    Single,
    /// Several repositories, each a directory under the mount root.
    Multi,
}

impl RepoCountMode {
    /// Derive the mode from a repository count, the way the original
    /// mount tooling did: one repository collapses to `Single`.
    pub fn from_count(count: usize) -> Self {
        if count == 1 { Self::Single } else { Self::Multi }
    }
}

impl std::fmt::Display for RepoCountMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multi => write!(f, "multi"),
        }
    }
}
