//! Multi-tab replay protocol
//!
//! Restoring a multi-tab session means recreating tabs one at a time
//! while the windowing subsystem drains per-tab queues. Tab creation is
//! a side effect whose completion this code cannot observe directly, so
//! the host acknowledges each finished tab through [`TabReadySignal`];
//! the driver only advances on that signal, bounded by a timeout so a
//! lost acknowledgment degrades to fixed pacing instead of stalling
//! startup.

use std::collections::{BTreeSet, VecDeque};
use std::time::Duration;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::host::TabHost;
use crate::snapshot::{SessionState, DEFAULT_FONT_SIZE};

/// Upper bound on waiting for the launch tab to settle, and for the
/// last tab before selecting the active one.
pub(crate) const FIRST_TAB_GRACE: Duration = Duration::from_millis(500);

/// Upper bound on waiting between subsequent tab creations.
pub(crate) const TAB_STAGGER: Duration = Duration::from_millis(300);

/// One tab's worth of restore state, popped from the queues in lockstep.
#[derive(Debug, Clone, PartialEq)]
pub struct TabRestore {
    pub zoomed_node_id: Option<Uuid>,
    pub collapsed_node_ids: BTreeSet<Uuid>,
    pub font_size: f32,
    pub always_on_top: bool,
}

/// Four parallel FIFO queues, one entry per saved tab in saved order,
/// plus the tab index to select once every tab exists. Handed to the
/// windowing subsystem at the start of restoration; it drains one entry
/// from each queue per tab it constructs.
#[derive(Debug, Default)]
pub struct RestoreQueues {
    pub zoom: VecDeque<Option<Uuid>>,
    pub collapsed: VecDeque<BTreeSet<Uuid>>,
    pub font_size: VecDeque<f32>,
    pub always_on_top: VecDeque<bool>,
    pub active_tab_index: usize,
}

impl RestoreQueues {
    pub fn from_state(state: &SessionState) -> Self {
        let mut queues = Self {
            active_tab_index: state.clamped_active_index(),
            ..Self::default()
        };

        for tab in &state.tabs {
            queues.zoom.push_back(tab.zoomed_node_id);
            queues.collapsed.push_back(tab.collapsed_node_ids.clone());
            queues.font_size.push_back(tab.font_size);
            queues.always_on_top.push_back(tab.always_on_top);
        }

        queues
    }

    /// Pop the next tab's entries from all four queues at once, keeping
    /// them in lockstep.
    pub fn next_tab(&mut self) -> Option<TabRestore> {
        let zoomed_node_id = self.zoom.pop_front()?;

        Some(TabRestore {
            zoomed_node_id,
            collapsed_node_ids: self.collapsed.pop_front().unwrap_or_default(),
            font_size: self.font_size.pop_front().unwrap_or(DEFAULT_FONT_SIZE),
            always_on_top: self.always_on_top.pop_front().unwrap_or_default(),
        })
    }

    /// Tabs not yet drained.
    pub fn remaining(&self) -> usize {
        self.zoom.len()
    }
}

/// Handle through which the windowing subsystem reports that a tab is
/// fully constructed and has drained its queue entries.
#[derive(Debug, Clone)]
pub struct TabReadySignal {
    tx: mpsc::UnboundedSender<usize>,
}

pub(crate) type TabReadyReceiver = mpsc::UnboundedReceiver<usize>;

impl TabReadySignal {
    pub(crate) fn channel() -> (Self, TabReadyReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Report tab `index` ready. Safe to call after restoration has
    /// finished; late signals are dropped.
    pub fn tab_ready(&self, index: usize) {
        let _ = self.tx.send(index);
    }
}

/// Worst-case fire times of the replay triggers for a `tab_count`-tab
/// session, relative to the start of replay: one entry per created tab,
/// then the final active-tab selection. Empty when nothing needs
/// replaying. These are the deadlines the driver falls back to when no
/// acknowledgment arrives.
pub fn fallback_deadlines(tab_count: usize) -> Vec<Duration> {
    if tab_count <= 1 {
        return Vec::new();
    }

    let mut deadlines = Vec::with_capacity(tab_count);
    let mut last = FIRST_TAB_GRACE;
    for index in 1..tab_count {
        if index > 1 {
            last += TAB_STAGGER;
        }
        deadlines.push(last);
    }

    // Selection runs one full grace period after the last creation
    // trigger, strictly after that tab is built.
    deadlines.push(last + FIRST_TAB_GRACE);

    deadlines
}

/// Create the remaining `tab_count - 1` tabs one at a time, advancing
/// on each tab's ready signal (or its deadline), then select the active
/// tab. The first tab is assumed to already exist.
pub(crate) async fn drive_tab_replay<H: TabHost + ?Sized>(
    host: &H,
    tab_count: usize,
    mut ready: TabReadyReceiver,
) {
    // The launch tab must drain its queue entry before a second tab
    // exists to read a queue head.
    wait_for_tab(&mut ready, 0, FIRST_TAB_GRACE).await;

    for index in 1..tab_count {
        host.request_new_tab();

        let bound = if index + 1 == tab_count {
            FIRST_TAB_GRACE
        } else {
            TAB_STAGGER
        };
        wait_for_tab(&mut ready, index, bound).await;
    }

    host.select_active_tab();
}

/// Wait until the host reports tab `index` (or any later tab) ready, or
/// until `bound` elapses.
async fn wait_for_tab(ready: &mut TabReadyReceiver, index: usize, bound: Duration) {
    let deadline = tokio::time::Instant::now() + bound;

    loop {
        match tokio::time::timeout_at(deadline, ready.recv()).await {
            Ok(Some(acked)) if acked >= index => {
                tracing::trace!(tab = acked, "Tab ready");
                return;
            }
            Ok(Some(acked)) => {
                tracing::debug!(tab = acked, expected = index, "Stale tab ready signal");
            }
            Ok(None) => {
                // Signal handle dropped; fall back to fixed pacing.
                tokio::time::sleep_until(deadline).await;
                return;
            }
            Err(_) => {
                tracing::debug!(
                    tab = index,
                    bound_ms = bound.as_millis() as u64,
                    "No tab ready signal, proceeding on schedule"
                );
                return;
            }
        }
    }
}
