//! In-memory reference store
//!
//! Holds fully materialized revision trees in nested maps. Used by the
//! dispatch and integration tests as the storage collaborator, and as the
//! behavioral reference for real backends: lookups here define what a
//! resolved location means.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use revfs_path::VirtualPath;

use crate::error::{Error, Result};
use crate::location::ResolvedLocation;
use crate::stats::{FileKind, FileStats};
use crate::store::ObjectStore;

/// One revision's tree: files keyed by path, symlinks keyed by path.
///
/// Directories are implicit; any path that prefixes a stored entry is a
/// directory. Keys are absolute virtual paths (`/dir/file`).
#[derive(Debug, Clone)]
pub struct RevisionTree {
    files: BTreeMap<String, u64>,
    /// Symlink path -> link target, stored as the snapshot recorded it.
    symlinks: BTreeMap<String, String>,
    modified: DateTime<Utc>,
}

impl RevisionTree {
    pub fn new(modified: DateTime<Utc>) -> Self {
        Self {
            files: BTreeMap::new(),
            symlinks: BTreeMap::new(),
            modified,
        }
    }

    /// Add a file to the tree. Builder-style, for fixtures.
    pub fn with_file(mut self, path: &str, size: u64) -> Self {
        self.files.insert(path.to_string(), size);
        self
    }

    /// Add a symlink to the tree. Its size is the target's length, the
    /// way link inodes report it.
    pub fn with_symlink(mut self, path: &str, target: &str) -> Self {
        self.symlinks.insert(path.to_string(), target.to_string());
        self
    }

    fn leaf_paths(&self) -> impl Iterator<Item = &String> {
        self.files.keys().chain(self.symlinks.keys())
    }

    fn contains_dir(&self, path: &str) -> bool {
        if path == "/" {
            return true;
        }
        let prefix = format!("{path}/");
        self.leaf_paths().any(|k| k.starts_with(&prefix))
    }

    fn stats(&self, internal: &VirtualPath) -> Result<FileStats> {
        let path = internal.as_str();
        let name = internal.file_name().unwrap_or("/").to_string();
        if let Some(size) = self.files.get(path) {
            return Ok(FileStats {
                name,
                kind: FileKind::File,
                size: *size,
                modified: self.modified,
            });
        }
        if let Some(target) = self.symlinks.get(path) {
            return Ok(FileStats {
                name,
                kind: FileKind::Symlink,
                size: target.len() as u64,
                modified: self.modified,
            });
        }
        if self.contains_dir(path) {
            return Ok(dir_stats(&name, self.modified));
        }
        Err(Error::not_found(path))
    }

    fn children(&self, internal: &VirtualPath) -> Result<Vec<String>> {
        let path = internal.as_str();
        if self.files.contains_key(path) || self.symlinks.contains_key(path) {
            return Err(Error::NotADirectory {
                path: path.to_string(),
            });
        }
        if !self.contains_dir(path) {
            return Err(Error::not_found(path));
        }
        let prefix = if internal.is_root() {
            "/".to_string()
        } else {
            format!("{path}/")
        };
        let names: BTreeSet<&str> = self
            .leaf_paths()
            .filter_map(|k| k.strip_prefix(&prefix))
            .map(|tail| tail.split('/').next().unwrap_or(tail))
            .collect();
        Ok(names.into_iter().map(str::to_string).collect())
    }
}

type RevisionMap = BTreeMap<String, RevisionTree>;

#[derive(Debug)]
enum Layout {
    /// One anonymous repository; revisions sit at the filesystem root.
    Single(RevisionMap),
    /// Named repositories, each with its own revisions.
    Multi(BTreeMap<String, RevisionMap>),
}

/// Revision-aware store backed by in-memory snapshot maps.
#[derive(Debug)]
pub struct MemoryStore {
    layout: Layout,
}

impl MemoryStore {
    /// A store for one repository's revisions (single-repository mode).
    pub fn single(revisions: RevisionMap) -> Self {
        Self {
            layout: Layout::Single(revisions),
        }
    }

    /// A store for several named repositories (multi-repository mode).
    pub fn multi(repositories: BTreeMap<String, RevisionMap>) -> Self {
        Self {
            layout: Layout::Multi(repositories),
        }
    }

    fn revisions_of(&self, repository: Option<&str>) -> Result<&RevisionMap> {
        match (&self.layout, repository) {
            (Layout::Single(revisions), None) => Ok(revisions),
            (Layout::Multi(repositories), Some(name)) => {
                repositories.get(name).ok_or_else(|| Error::UnknownRepository {
                    name: name.to_string(),
                })
            }
            // A location shape the layout cannot answer: a named repository
            // against a single-repository store, or vice versa.
            (Layout::Single(_), Some(name)) => Err(Error::UnknownRepository {
                name: name.to_string(),
            }),
            (Layout::Multi(_), None) => Err(Error::not_found("/")),
        }
    }

    fn tree(&self, repository: Option<&str>, revision: &str) -> Result<&RevisionTree> {
        self.revisions_of(repository)?
            .get(revision)
            .ok_or_else(|| Error::UnknownRevision {
                repository: repository.unwrap_or("-").to_string(),
                revision: revision.to_string(),
            })
    }
}

impl ObjectStore for MemoryStore {
    fn file_stats(&self, location: &ResolvedLocation) -> Result<FileStats> {
        if location.is_filesystem_root() {
            return Ok(dir_stats("/", DateTime::UNIX_EPOCH));
        }
        if location.is_repository_root() {
            let name = location.repository.as_deref().unwrap_or("-");
            self.revisions_of(location.repository.as_deref())?;
            return Ok(dir_stats(name, DateTime::UNIX_EPOCH));
        }
        let revision = location.revision.as_deref().unwrap_or("-");
        let tree = self.tree(location.repository.as_deref(), revision)?;
        match &location.internal {
            // A revision directory itself, or a path inside it.
            Some(internal) => tree.stats(internal),
            None => Ok(dir_stats(revision, tree.modified)),
        }
    }

    fn children(&self, location: &ResolvedLocation) -> Result<Vec<String>> {
        if location.is_filesystem_root() {
            return Ok(match &self.layout {
                Layout::Single(revisions) => revisions.keys().cloned().collect(),
                Layout::Multi(repositories) => repositories.keys().cloned().collect(),
            });
        }
        if location.is_repository_root() {
            let revisions = self.revisions_of(location.repository.as_deref())?;
            return Ok(revisions.keys().cloned().collect());
        }
        let revision = location.revision.as_deref().unwrap_or("-");
        let tree = self.tree(location.repository.as_deref(), revision)?;
        match &location.internal {
            Some(internal) => tree.children(internal),
            None => tree.children(&VirtualPath::root()),
        }
    }
}

fn dir_stats(name: &str, modified: DateTime<Utc>) -> FileStats {
    FileStats {
        name: name.to_string(),
        kind: FileKind::Directory,
        size: 0,
        modified,
    }
}
