//! Arbor Session Management
//!
//! Per PRD:
//! - Closing the app snapshots every tab's editor state (zoom focus,
//!   collapsed nodes, font size, pin flag) plus the focused node and the
//!   active tab into one JSON file.
//! - Launch replays the snapshot: focus and flags immediately, then one
//!   tab at a time, pacing creation so each window drains its restore
//!   queue entries before the next one appears.
//! - Restoration runs at most once per process and must never block
//!   startup; every failure degrades to a fresh session.

mod coordinator;
mod error;
mod host;
mod replay;
mod snapshot;
mod store;

pub use coordinator::SessionCoordinator;
pub use error::SessionError;
pub use host::{DocumentModel, SettingsStore, TabHost};
pub use replay::{fallback_deadlines, RestoreQueues, TabReadySignal, TabRestore};
pub use snapshot::{SessionState, TabSnapshot, DEFAULT_FONT_SIZE};
pub use store::{SessionStore, SESSION_FILE_NAME};

pub type Result<T> = std::result::Result<T, SessionError>;
