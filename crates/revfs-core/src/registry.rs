//! Repository registration
//!
//! Repositories are registered once, when the mount is constructed, and
//! the registry is read-only afterwards. Resolution itself never consults
//! it — path decomposition is pure string work — but the dispatcher keeps
//! it so callers can enumerate what was mounted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What a repository registration carries: a mount-visible name and the
/// backing source the object store reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySpec {
    /// Name the repository appears under in multi-repository mode.
    pub name: String,

    /// Location of the backing archive or repository.
    pub source: PathBuf,
}

impl RepositorySpec {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// The set of repositories registered at mount time.
#[derive(Debug, Clone, Default)]
pub struct RepositoryRegistry {
    specs: Vec<RepositorySpec>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repository. Names must be unique.
    pub fn register(&mut self, spec: RepositorySpec) -> Result<()> {
        if self.specs.iter().any(|s| s.name == spec.name) {
            return Err(Error::DuplicateRepository { name: spec.name });
        }
        self.specs.push(spec);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Registered specs, in registration order.
    pub fn specs(&self) -> &[RepositorySpec] {
        &self.specs
    }

    /// Look up a spec by repository name.
    pub fn get(&self, name: &str) -> Option<&RepositorySpec> {
        self.specs.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = RepositoryRegistry::new();
        registry
            .register(RepositorySpec::new("backup", "/srv/backup"))
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("backup").map(|s| s.source.clone()),
            Some(PathBuf::from("/srv/backup"))
        );
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = RepositoryRegistry::new();
        registry
            .register(RepositorySpec::new("backup", "/srv/a"))
            .unwrap();
        let err = registry
            .register(RepositorySpec::new("backup", "/srv/b"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateRepository { .. }));
        assert_eq!(registry.len(), 1);
    }
}
