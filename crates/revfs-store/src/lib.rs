//! Object store seam for revfs
//!
//! Defines the resolved-location triple produced by path decomposition,
//! the stats types returned to the filesystem layer, and the
//! [`ObjectStore`] trait that revision-aware backends implement.
//! [`MemoryStore`] is the in-memory reference backend used by tests.

pub mod error;
pub mod location;
pub mod memory;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
pub use location::ResolvedLocation;
pub use memory::{MemoryStore, RevisionTree};
pub use stats::{FileKind, FileStats};
pub use store::ObjectStore;
