//! Main application state container
//!
//! The host shell constructs one `Outliner` at startup and passes it
//! by reference to whatever needs session access. Restoration state
//! lives in the coordinator, never in a process global.

use arbor_session::{DocumentModel, SessionCoordinator, SessionStore, TabHost};

use crate::config::Config;
use crate::settings::Settings;
use crate::Result;

pub struct Outliner {
    config: Config,
    settings: Settings,
    session_coordinator: SessionCoordinator,
}

impl Outliner {
    /// Build the application core. Ensures the data directory exists
    /// so the first save does not fail on a missing parent.
    pub fn new(config: Config) -> Result<Self> {
        arbor_storage::ensure_dir(&config.data_dir)?;

        let settings = Settings::load(config.settings_path());
        let session_coordinator = SessionCoordinator::new(SessionStore::new(config.session_path()));

        tracing::info!(data_dir = %config.data_dir.display(), "Outliner initialized");

        Ok(Self {
            config,
            settings,
            session_coordinator,
        })
    }

    /// Replay the previous session (at most once per process), or reset
    /// to a fresh outline when the preference is off.
    pub async fn restore_on_launch(&self, doc: &impl DocumentModel, host: &impl TabHost) {
        self.session_coordinator
            .restore_session_if_needed(doc, host, &self.settings)
            .await;
    }

    /// Snapshot the current editor state and persist it.
    pub fn save_session_now(&self, doc: &impl DocumentModel, host: &impl TabHost) {
        self.session_coordinator
            .save_current(doc, host, &self.settings);
    }

    pub fn session_coordinator(&self) -> &SessionCoordinator {
        &self.session_coordinator
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Outliner {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            settings: self.settings.clone(),
            session_coordinator: self.session_coordinator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_session::{RestoreQueues, TabReadySignal, TabSnapshot};
    use parking_lot::Mutex;
    use uuid::Uuid;

    struct StubDocument {
        focused: Mutex<Option<Uuid>>,
    }

    impl DocumentModel for StubDocument {
        fn focused_node(&self) -> Option<Uuid> {
            *self.focused.lock()
        }

        fn set_focused_node(&self, id: Option<Uuid>) {
            *self.focused.lock() = id;
        }

        fn node_exists(&self, _id: Uuid) -> bool {
            true
        }

        fn collapse_all(&self) {}

        fn root_first_child(&self) -> Option<Uuid> {
            None
        }
    }

    struct StubHost {
        restored: Mutex<Option<RestoreQueues>>,
    }

    impl TabHost for StubHost {
        fn current_tab_states(&self) -> Vec<TabSnapshot> {
            vec![TabSnapshot {
                font_size: 14.0,
                ..TabSnapshot::default()
            }]
        }

        fn active_tab_index(&self) -> usize {
            0
        }

        fn begin_restore(&self, queues: RestoreQueues, ready: TabReadySignal) {
            ready.tab_ready(0);
            *self.restored.lock() = Some(queues);
        }

        fn request_new_tab(&self) {}

        fn select_active_tab(&self) {}
    }

    #[tokio::test]
    async fn test_save_then_restore_across_instances() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::new(tmp.path().join("data"));

        let doc = StubDocument {
            focused: Mutex::new(Some(Uuid::new_v4())),
        };
        let host = StubHost {
            restored: Mutex::new(None),
        };

        let outliner = Outliner::new(config.clone()).unwrap();
        outliner.save_session_now(&doc, &host);

        // A second instance of the core, as after an app restart.
        let relaunched = Outliner::new(config).unwrap();
        relaunched.restore_on_launch(&doc, &host).await;

        let queues = host.restored.lock().take().unwrap();
        assert_eq!(queues.remaining(), 1);
        assert!(relaunched.session_coordinator().has_restored());
        assert_eq!(
            relaunched.session_coordinator().restored_zoom_id(0),
            None
        );
    }
}
