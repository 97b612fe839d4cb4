//! Shared test fixtures for the revfs workspace.
//!
//! Builds populated [`MemoryStore`]s and matching repository specs so
//! crate test suites don't each hand-roll the same snapshot maps. This is
//! a dev-dependency only — never published.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use revfs_core::{Dispatcher, RepositorySpec};
use revfs_store::{MemoryStore, RevisionTree};

/// Builder for a [`MemoryStore`] plus the specs that would have been
/// registered for it.
///
/// ```
/// use revfs_test_utils::StoreFixture;
///
/// let dispatcher = StoreFixture::new()
///     .with_revision("backup", "2024-01-01", &[("/file", 7)])
///     .single_dispatcher();
/// assert!(dispatcher.get_file("/2024-01-01/file").is_ok());
/// ```
#[derive(Debug, Default)]
pub struct StoreFixture {
    repositories: BTreeMap<String, BTreeMap<String, RevisionTree>>,
}

impl StoreFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a revision with the given `(path, size)` files. Revisions get
    /// distinct, increasing timestamps in insertion order.
    pub fn with_revision(mut self, repository: &str, revision: &str, files: &[(&str, u64)]) -> Self {
        let revisions = self.repositories.entry(repository.to_string()).or_default();
        let modified: DateTime<Utc> = DateTime::UNIX_EPOCH + Duration::days(revisions.len() as i64);
        let tree = files
            .iter()
            .fold(RevisionTree::new(modified), |tree, (path, size)| {
                tree.with_file(path, *size)
            });
        revisions.insert(revision.to_string(), tree);
        self
    }

    /// Specs matching the repositories added so far, in name order.
    pub fn specs(&self) -> Vec<RepositorySpec> {
        self.repositories
            .keys()
            .map(|name| RepositorySpec::new(name, format!("/srv/archives/{name}")))
            .collect()
    }

    /// Build a single-repository store. Panics unless exactly one
    /// repository was added.
    pub fn single_store(self) -> (MemoryStore, RepositorySpec) {
        let specs = self.specs();
        assert_eq!(
            specs.len(),
            1,
            "single_store needs exactly one repository, got {}",
            specs.len()
        );
        let revisions = self.repositories.into_values().next().unwrap();
        (MemoryStore::single(revisions), specs.into_iter().next().unwrap())
    }

    /// Build a multi-repository store.
    pub fn multi_store(self) -> (MemoryStore, Vec<RepositorySpec>) {
        let specs = self.specs();
        (MemoryStore::multi(self.repositories), specs)
    }

    /// A dispatcher mounted in single mode over this fixture.
    pub fn single_dispatcher(self) -> Dispatcher<MemoryStore> {
        let (store, spec) = self.single_store();
        Dispatcher::single(spec, store).unwrap()
    }

    /// A dispatcher mounted in multi mode over this fixture.
    pub fn multi_dispatcher(self) -> Dispatcher<MemoryStore> {
        let (store, specs) = self.multi_store();
        Dispatcher::multi(specs, store).unwrap()
    }
}
