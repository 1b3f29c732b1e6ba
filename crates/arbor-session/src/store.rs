//! Session file persistence
//!
//! One JSON document holds the whole session. Writes replace the file
//! atomically; the pretty, stably-ordered encoding keeps sync diffs
//! readable.

use std::path::{Path, PathBuf};

use crate::snapshot::SessionState;
use crate::{Result, SessionError};

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    /// Store in the resolved durable-storage directory (synced dir when
    /// available, local data dir otherwise).
    pub fn resolve_default() -> Result<Self> {
        let dir = arbor_storage::resolve_data_dir().ok_or(SessionError::NoStorageLocation)?;
        arbor_storage::ensure_dir(&dir)?;
        Ok(Self::in_dir(&dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, state: &SessionState) -> Result<()> {
        arbor_storage::write_json_atomic(&self.path, state)?;
        Ok(())
    }

    /// `Ok(None)` when no session has ever been saved.
    pub fn load(&self) -> Result<Option<SessionState>> {
        Ok(arbor_storage::read_json(&self.path)?)
    }
}
