//! Virtual path handling for revfs
//!
//! Provides the validated absolute-path type used throughout the
//! filesystem layer and a restartable iterator over its segments.

pub mod error;
pub mod segments;
pub mod virtual_path;

pub use error::{Error, Result};
pub use segments::Segments;
pub use virtual_path::VirtualPath;
