//! Error types for revfs-core

use std::path::PathBuf;

/// Result type for revfs-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in revfs-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dispatcher needs at least one repository
    #[error("no repositories registered")]
    NoRepositories,

    /// Repository names must be unique within a mount
    #[error("repository registered twice: {name}")]
    DuplicateRepository { name: String },

    /// Mount configuration could not be parsed
    #[error("failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// Mount configuration has an unrecognized extension
    #[error("unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    // Transparent wrappers for underlying crate errors
    /// Invalid path from revfs-path
    #[error(transparent)]
    Path(#[from] revfs_path::Error),

    /// Lookup error from revfs-store
    #[error(transparent)]
    Store(#[from] revfs_store::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a path-resolution failure, as opposed to a
    /// store lookup failure.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}
