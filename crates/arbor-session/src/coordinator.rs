//! Session coordinator
//!
//! Owns saving and replaying sessions. Constructed explicitly by
//! whatever owns application startup and passed by reference; the
//! one-shot restore latch is an ordinary field, not a process global.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::host::{DocumentModel, SettingsStore, TabHost};
use crate::replay::{self, RestoreQueues, TabReadySignal};
use crate::snapshot::{SessionState, TabSnapshot};
use crate::store::SessionStore;

pub struct SessionCoordinator {
    store: SessionStore,
    /// The loaded session, retained for per-tab queries while the
    /// windowing subsystem rebuilds tabs. Cleared by the host once it
    /// is done.
    pending: Arc<RwLock<Option<SessionState>>>,
    /// One-shot latch: restoration runs at most once per process.
    has_restored: Arc<RwLock<bool>>,
}

impl SessionCoordinator {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            pending: Arc::new(RwLock::new(None)),
            has_restored: Arc::new(RwLock::new(false)),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Persist a session snapshot. Failures are logged and swallowed;
    /// a session that cannot be written simply is not persisted.
    pub fn save_session(
        &self,
        tabs: Vec<TabSnapshot>,
        active_tab_index: usize,
        autocomplete_enabled: bool,
        focused_node_id: Option<Uuid>,
    ) {
        let state = SessionState::new(tabs, active_tab_index, autocomplete_enabled, focused_node_id);

        match self.store.save(&state) {
            Ok(()) => {
                tracing::info!(
                    tab_count = state.tab_count(),
                    active_tab = state.active_tab_index,
                    "Saved session"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save session");
            }
        }
    }

    /// Gather the current snapshot from the collaborators and persist it.
    pub fn save_current(
        &self,
        doc: &impl DocumentModel,
        host: &impl TabHost,
        settings: &impl SettingsStore,
    ) {
        self.save_session(
            host.current_tab_states(),
            host.active_tab_index(),
            settings.autocomplete_enabled(),
            doc.focused_node(),
        );
    }

    /// Load the persisted session, degrading every failure to "nothing
    /// to restore".
    pub fn load_saved_session(&self) -> Option<SessionState> {
        match self.store.load() {
            Ok(Some(state)) => Some(state),
            Ok(None) => {
                tracing::debug!("No saved session file");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved session");
                None
            }
        }
    }

    /// Replay the persisted session once per process lifetime.
    ///
    /// With the restore preference off this instead resets the outline
    /// to a fresh state (collapse everything, focus the first root
    /// child) without touching the session file. The reset is not
    /// gated by the latch: it is idempotent and re-runs on every call
    /// while the preference stays off.
    pub async fn restore_session_if_needed(
        &self,
        doc: &impl DocumentModel,
        host: &impl TabHost,
        settings: &impl SettingsStore,
    ) {
        if !settings.restore_previous_session() {
            doc.collapse_all();
            doc.set_focused_node(doc.root_first_child());
            tracing::debug!("Session restore disabled, starting from a fresh outline");
            return;
        }

        {
            let mut restored = self.has_restored.write();
            if *restored {
                return;
            }
            // Latch before any fallible work so re-entry is a no-op
            // even when this attempt fails partway.
            *restored = true;
        }

        let Some(state) = self.load_saved_session() else {
            return;
        };

        if let Some(id) = state.focused_node_id {
            if doc.node_exists(id) {
                doc.set_focused_node(Some(id));
            } else {
                tracing::warn!(node = %id, "Saved focus target no longer exists, skipping");
            }
        }
        settings.set_autocomplete_enabled(state.autocomplete_enabled);

        let tab_count = state.tab_count();
        tracing::info!(
            tab_count,
            active_tab = state.clamped_active_index(),
            "Restoring session"
        );

        *self.pending.write() = Some(state.clone());

        if tab_count == 0 {
            return;
        }

        let (signal, ready) = TabReadySignal::channel();
        host.begin_restore(RestoreQueues::from_state(&state), signal);

        if tab_count > 1 {
            replay::drive_tab_replay(host, tab_count, ready).await;
        }
    }

    /// Zoom target saved for the tab at `tab_index`. Idempotent,
    /// re-readable; `None` when out of range or nothing is pending.
    pub fn restored_zoom_id(&self, tab_index: usize) -> Option<Uuid> {
        self.pending
            .read()
            .as_ref()
            .and_then(|state| state.tabs.get(tab_index))
            .and_then(|tab| tab.zoomed_node_id)
    }

    /// Collapsed-node set saved for the tab at `tab_index`. Empty when
    /// out of range or nothing is pending.
    pub fn restored_collapsed_ids(&self, tab_index: usize) -> BTreeSet<Uuid> {
        self.pending
            .read()
            .as_ref()
            .and_then(|state| state.tabs.get(tab_index))
            .map(|tab| tab.collapsed_node_ids.clone())
            .unwrap_or_default()
    }

    pub fn has_pending_restore(&self) -> bool {
        self.pending.read().is_some()
    }

    /// Drop the retained session once the windowing subsystem signals
    /// it is done reading.
    pub fn clear_pending_restore(&self) {
        *self.pending.write() = None;
    }

    pub fn has_restored(&self) -> bool {
        *self.has_restored.read()
    }
}

impl Clone for SessionCoordinator {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            pending: Arc::clone(&self.pending),
            has_restored: Arc::clone(&self.has_restored),
        }
    }
}
