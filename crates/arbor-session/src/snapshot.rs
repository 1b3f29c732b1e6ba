//! Session snapshot data structures

use std::collections::BTreeSet;

use arbor_navigation::Location;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Font size a tab falls back to when the snapshot predates the field.
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_true() -> bool {
    true
}

/// Serializable per-tab editor state.
///
/// Collapsed ids are kept in a `BTreeSet` so the serialized file is
/// deterministically ordered and diffs cleanly across sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSnapshot {
    /// Node the tab is zoomed onto; absent means the home view.
    #[serde(default)]
    pub zoomed_node_id: Option<Uuid>,
    #[serde(default)]
    pub collapsed_node_ids: BTreeSet<Uuid>,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub always_on_top: bool,
}

impl TabSnapshot {
    /// The tab's carousel location.
    pub fn location(&self) -> Location {
        Location::from_node(self.zoomed_node_id)
    }

    /// Snapshot of a freshly opened tab at the given location.
    pub fn at_location(location: Location) -> Self {
        Self {
            zoomed_node_id: location.node(),
            ..Self::default()
        }
    }
}

impl Default for TabSnapshot {
    fn default() -> Self {
        Self {
            zoomed_node_id: None,
            collapsed_node_ids: BTreeSet::new(),
            font_size: DEFAULT_FONT_SIZE,
            always_on_top: false,
        }
    }
}

/// The full persisted session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub focused_node_id: Option<Uuid>,
    /// Authoritative tab list, in display order.
    pub tabs: Vec<TabSnapshot>,
    pub active_tab_index: usize,
    #[serde(default = "default_true")]
    pub autocomplete_enabled: bool,
    pub saved_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(
        tabs: Vec<TabSnapshot>,
        active_tab_index: usize,
        autocomplete_enabled: bool,
        focused_node_id: Option<Uuid>,
    ) -> Self {
        Self {
            focused_node_id,
            tabs,
            active_tab_index,
            autocomplete_enabled,
            saved_at: Utc::now(),
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Active tab index forced into range. A file edited or synced from
    /// another device can carry an index past the tab list.
    pub fn clamped_active_index(&self) -> usize {
        if self.tabs.is_empty() {
            0
        } else {
            self.active_tab_index.min(self.tabs.len() - 1)
        }
    }
}
