//! Filesystem-facing dispatch
//!
//! The dispatcher is the only piece of state in this crate, and all of it
//! is written at construction: the repository-count mode, the registry,
//! and the store handle. Every operation resolves its path fresh and
//! hands the resulting location to the store exactly once; the location
//! is dropped when the operation returns, whatever the store answered.

use revfs_store::{FileStats, ObjectStore};

use crate::config::MountConfig;
use crate::error::{Error, Result};
use crate::mode::RepoCountMode;
use crate::registry::{RepositoryRegistry, RepositorySpec};
use crate::resolver::decompose;

/// Routes filesystem operations through path resolution to an object
/// store.
///
/// Construction replaces the original mount-time `init` calls: it
/// registers the repositories and fixes the mode for the life of the
/// value. `Dispatcher` is `Send + Sync` when its store is; concurrent
/// operations share only immutable state.
#[derive(Debug)]
pub struct Dispatcher<S: ObjectStore> {
    mode: RepoCountMode,
    registry: RepositoryRegistry,
    store: S,
}

impl<S: ObjectStore> Dispatcher<S> {
    /// Mount a single repository. The first path segment of every
    /// operation names a revision.
    pub fn single(spec: RepositorySpec, store: S) -> Result<Self> {
        Self::build(RepoCountMode::Single, vec![spec], store)
    }

    /// Mount several repositories. The first path segment names a
    /// repository, the second a revision.
    pub fn multi(specs: Vec<RepositorySpec>, store: S) -> Result<Self> {
        Self::build(RepoCountMode::Multi, specs, store)
    }

    /// Mount from a configuration file's contents; one repository selects
    /// single mode, several select multi mode.
    pub fn from_config(config: &MountConfig, store: S) -> Result<Self> {
        Self::build(config.mode(), config.repositories.clone(), store)
    }

    fn build(mode: RepoCountMode, specs: Vec<RepositorySpec>, store: S) -> Result<Self> {
        if specs.is_empty() {
            return Err(Error::NoRepositories);
        }
        let mut registry = RepositoryRegistry::new();
        for spec in specs {
            registry.register(spec)?;
        }
        tracing::debug!(%mode, repositories = registry.len(), "Mounted dispatcher");
        Ok(Self {
            mode,
            registry,
            store,
        })
    }

    /// The mode fixed at construction.
    pub fn mode(&self) -> RepoCountMode {
        self.mode
    }

    /// The repositories registered at construction.
    pub fn repositories(&self) -> &RepositoryRegistry {
        &self.registry
    }

    /// Stats for the entry at `path`.
    ///
    /// Resolution failures return before the store is consulted; store
    /// errors pass through unchanged.
    pub fn get_file(&self, path: &str) -> Result<FileStats> {
        let location = decompose(path, self.mode)?;
        let stats = self.store.file_stats(&location)?;
        tracing::debug!(path, %location, "Served file stats");
        Ok(stats)
    }

    /// Sorted child names of the directory at `path`.
    pub fn get_children(&self, path: &str) -> Result<Vec<String>> {
        let location = decompose(path, self.mode)?;
        let children = self.store.children(&location)?;
        tracing::debug!(path, %location, count = children.len(), "Served listing");
        Ok(children)
    }
}
