//! Error types for revfs-path

/// Result type for revfs-path operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing a virtual path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("empty path")]
    Empty,

    #[error("path is not absolute: {path}")]
    NotAbsolute { path: String },

    #[error("empty segment in path: {path}")]
    EmptySegment { path: String },
}
