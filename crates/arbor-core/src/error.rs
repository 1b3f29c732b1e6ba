//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] arbor_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] arbor_session::SessionError),

    #[error("Configuration error: {0}")]
    Config(String),
}
