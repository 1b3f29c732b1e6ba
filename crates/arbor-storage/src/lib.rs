//! Arbor Storage Layer
//!
//! File-based persistence for durable application state. Session and
//! settings files are small JSON documents; every write replaces the
//! whole file atomically so a concurrent reader never observes a
//! partial document.

mod error;
mod file;
mod location;

pub use error::StorageError;
pub use file::{read_json, write_json_atomic};
pub use location::{ensure_dir, resolve_data_dir, SYNC_DIR_ENV};

pub type Result<T> = std::result::Result<T, StorageError>;
