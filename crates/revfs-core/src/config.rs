//! Mount configuration loading

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mode::RepoCountMode;
use crate::registry::RepositorySpec;

/// Mount configuration: the repositories a mount serves.
///
/// Format is detected from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
///
/// ```toml
/// [[repositories]]
/// name = "backup"
/// source = "/srv/archives/backup"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MountConfig {
    #[serde(default)]
    pub repositories: Vec<RepositorySpec>,
}

impl MountConfig {
    /// Load a mount configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Mode implied by the repository count.
    pub fn mode(&self) -> RepoCountMode {
        RepoCountMode::from_count(self.repositories.len())
    }
}
