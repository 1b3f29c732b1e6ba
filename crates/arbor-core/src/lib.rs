//! Arbor Core
//!
//! Central coordination layer for the Arbor outliner. Owns the pieces
//! the host shell wires together at startup: configuration, persistent
//! settings, and the session coordinator.

mod config;
mod error;
mod outliner;
mod settings;

pub use config::Config;
pub use error::CoreError;
pub use outliner::Outliner;
pub use settings::Settings;

// Re-export core components
pub use arbor_navigation::{Location, NavigateOutcome, ZoomHistory};
pub use arbor_session::{
    DocumentModel, RestoreQueues, SessionCoordinator, SessionError, SessionState, SessionStore,
    SettingsStore, TabHost, TabReadySignal, TabRestore, TabSnapshot,
};
pub use arbor_storage::StorageError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
