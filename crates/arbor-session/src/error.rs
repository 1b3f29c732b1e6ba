//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] arbor_storage::StorageError),

    #[error("No storage location available for the session file")]
    NoStorageLocation,
}
