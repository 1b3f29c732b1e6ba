//! Collaborator interfaces
//!
//! The session core neither owns the outline tree nor creates OS
//! windows; it talks to both through these traits. Implementations live
//! in the host application and are expected to use interior mutability
//! (all methods take `&self` so handles can be shared with the replay
//! driver).

use uuid::Uuid;

use crate::replay::{RestoreQueues, TabReadySignal};
use crate::snapshot::TabSnapshot;

/// The live outline document.
pub trait DocumentModel: Send + Sync {
    fn focused_node(&self) -> Option<Uuid>;

    fn set_focused_node(&self, id: Option<Uuid>);

    /// Whether `id` still names a node in the tree. Saved sessions can
    /// reference nodes deleted since the snapshot.
    fn node_exists(&self, id: Uuid) -> bool;

    fn collapse_all(&self);

    fn root_first_child(&self) -> Option<Uuid>;
}

/// The windowing/tabbing subsystem.
pub trait TabHost: Send + Sync {
    /// Snapshot of every open tab, in display order.
    fn current_tab_states(&self) -> Vec<TabSnapshot>;

    fn active_tab_index(&self) -> usize;

    /// Take ownership of the restore queues. The host pops one entry
    /// from each queue as it finishes constructing each tab (first
    /// entry to the first tab, FIFO), and calls
    /// [`TabReadySignal::tab_ready`] once that tab is fully built and
    /// its entries are applied — including index 0 for the tab that
    /// already exists at launch.
    fn begin_restore(&self, queues: RestoreQueues, ready: TabReadySignal);

    /// Trigger creation of one new tab. Completion is reported through
    /// the ready signal, not the return.
    fn request_new_tab(&self);

    /// Select the tab at the pending active index.
    fn select_active_tab(&self);
}

/// Persistent boolean preferences.
pub trait SettingsStore: Send + Sync {
    /// Defaults to true.
    fn restore_previous_session(&self) -> bool;

    /// Defaults to true.
    fn autocomplete_enabled(&self) -> bool;

    fn set_autocomplete_enabled(&self, enabled: bool);
}
