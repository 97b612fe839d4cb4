//! File stats returned to the filesystem layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of entry inside a revision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
    Symlink,
}

/// Metadata for one entry of a revision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Entry name (last path segment; `/` for a tree root).
    pub name: String,

    pub kind: FileKind,

    /// Size in bytes; zero for directories.
    pub size: u64,

    /// Modification time recorded in the snapshot.
    pub modified: DateTime<Utc>,
}

impl FileStats {
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }
}
