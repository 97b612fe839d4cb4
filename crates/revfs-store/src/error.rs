//! Error types for revfs-store

/// Result type for revfs-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during object store lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("not found: {path}")]
    NotFound { path: String },

    #[error("not a directory: {path}")]
    NotADirectory { path: String },

    #[error("unknown repository: {name}")]
    UnknownRepository { name: String },

    #[error("unknown revision {revision} in repository {repository}")]
    UnknownRevision {
        repository: String,
        revision: String,
    },
}

impl Error {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }
}
