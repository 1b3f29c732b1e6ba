//! Persistent settings
//!
//! A small JSON file of boolean preferences, cached in memory and
//! rewritten atomically on every change. A file that cannot be read
//! falls back to defaults; a file that cannot be written keeps the
//! in-memory value for the rest of the run.

use std::path::PathBuf;
use std::sync::Arc;

use arbor_session::SettingsStore;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SettingsData {
    #[serde(default = "default_true")]
    restore_previous_session: bool,
    #[serde(default = "default_true")]
    autocomplete_enabled: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            restore_previous_session: true,
            autocomplete_enabled: true,
        }
    }
}

pub struct Settings {
    path: PathBuf,
    data: Arc<RwLock<SettingsData>>,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load(path: PathBuf) -> Self {
        let data = match arbor_storage::read_json::<SettingsData>(&path) {
            Ok(Some(data)) => data,
            Ok(None) => SettingsData::default(),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Failed to read settings, using defaults");
                SettingsData::default()
            }
        };

        Self {
            path,
            data: Arc::new(RwLock::new(data)),
        }
    }

    pub fn set_restore_previous_session(&self, enabled: bool) {
        self.data.write().restore_previous_session = enabled;
        self.persist();
    }

    fn persist(&self) {
        let data = self.data.read().clone();
        if let Err(e) = arbor_storage::write_json_atomic(&self.path, &data) {
            tracing::warn!(error = %e, path = %self.path.display(), "Failed to write settings");
        }
    }
}

impl SettingsStore for Settings {
    fn restore_previous_session(&self) -> bool {
        self.data.read().restore_previous_session
    }

    fn autocomplete_enabled(&self) -> bool {
        self.data.read().autocomplete_enabled
    }

    fn set_autocomplete_enabled(&self, enabled: bool) {
        self.data.write().autocomplete_enabled = enabled;
        self.persist();
    }
}

impl Clone for Settings {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            data: Arc::clone(&self.data),
        }
    }
}
