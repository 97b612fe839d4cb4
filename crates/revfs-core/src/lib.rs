//! Path resolution and dispatch for revfs
//!
//! This crate maps raw filesystem paths to logical coordinates of a
//! revision-backed virtual filesystem and routes the resulting lookups to
//! an [`ObjectStore`](revfs_store::ObjectStore):
//!
//! - **Resolver**: pure decomposition of a path into
//!   (repository, revision, internal path), driven by the repository-count
//!   mode fixed at mount time
//! - **Dispatcher**: the filesystem-facing surface — construction registers
//!   repositories, `get_file`/`get_children` resolve and delegate
//! - **Registry/config**: repository specs registered at startup, loadable
//!   from a mount configuration file
//!
//! # Architecture
//!
//! ```text
//!    filesystem driver
//!           |
//!      revfs-core
//!           |
//!     +-----+------+
//!     |            |
//! revfs-path  revfs-store
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod mode;
pub mod registry;
pub mod resolver;

pub use config::MountConfig;
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use mode::RepoCountMode;
pub use registry::{RepositoryRegistry, RepositorySpec};
pub use resolver::decompose;
