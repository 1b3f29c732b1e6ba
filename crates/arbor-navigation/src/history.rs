//! Zoom history stack
//!
//! Per PRD: the carousel shows the zoom trail as a row of cards. The
//! stack always holds at least one entry (the view the tab opened on)
//! and the cursor always points inside it.

use crate::location::Location;

/// Result of [`ZoomHistory::navigate_or_push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// The location was already in the history; the cursor moved to it.
    Existing,
    /// The location was appended as a new entry.
    Pushed,
}

/// Ordered, branch-truncating navigation stack with a cursor.
///
/// Mutated only through its own operations; the carousel UI reads
/// `entries`/`current_index` to lay out cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomHistory {
    entries: Vec<Location>,
    current: usize,
}

impl ZoomHistory {
    pub fn new() -> Self {
        Self {
            entries: vec![Location::Home],
            current: 0,
        }
    }

    /// Zoom to a new location.
    ///
    /// If the cursor sits before the head, the forward branch is
    /// discarded first. Pushing the location already at the head is a
    /// no-op, so no two consecutive entries are ever equal.
    pub fn push(&mut self, location: Location) {
        if self.current + 1 < self.entries.len() {
            tracing::debug!(
                discarded = self.entries.len() - self.current - 1,
                "Truncating forward zoom branch"
            );
            self.entries.truncate(self.current + 1);
        }

        if self.entries.last() == Some(&location) {
            return;
        }

        self.entries.push(location);
        self.current = self.entries.len() - 1;

        tracing::trace!(depth = self.entries.len(), "Pushed zoom location");
    }

    /// Step the cursor back one card. Entries are kept; only the cursor
    /// moves, so the forward branch stays reachable.
    pub fn pop(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jump the cursor to an arbitrary card. Out-of-range indices are
    /// ignored (the carousel can race a removal).
    pub fn navigate_to(&mut self, index: usize) {
        if index < self.entries.len() {
            self.current = index;
        }
    }

    /// Jump to the first card.
    pub fn go_home(&mut self) {
        self.current = 0;
    }

    /// Remove the card at `index`. At least one entry must remain, so
    /// removal from a single-entry history fails. Returns whether the
    /// entry was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.entries.len() <= 1 || index >= self.entries.len() {
            return false;
        }

        self.entries.remove(index);

        if self.current >= self.entries.len() {
            self.current = self.entries.len() - 1;
        } else if index < self.current {
            // Keep the cursor on the same logical card.
            self.current -= 1;
        }

        true
    }

    /// Reset to the initial single-home state. Called on session end.
    pub fn clear(&mut self) {
        self.entries = vec![Location::Home];
        self.current = 0;
    }

    /// Reconcile an externally-driven zoom change (double-tap, outline
    /// click) with the stack: move to the location if we already track
    /// it, otherwise push it.
    pub fn sync_with_zoom(&mut self, location: Location) {
        if self.current() == location {
            return;
        }

        if let Some(index) = self.entries.iter().position(|e| *e == location) {
            self.current = index;
        } else {
            self.push(location);
        }
    }

    /// Whether `location` is anywhere in the history.
    pub fn contains(&self, location: Location) -> bool {
        self.entries.contains(&location)
    }

    /// Move to `location` if it is already a card, otherwise push it.
    pub fn navigate_or_push(&mut self, location: Location) -> NavigateOutcome {
        if let Some(index) = self.entries.iter().position(|e| *e == location) {
            self.current = index;
            NavigateOutcome::Existing
        } else {
            self.push(location);
            NavigateOutcome::Pushed
        }
    }

    pub fn current(&self) -> Location {
        self.entries[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // The stack is never empty; kept for iterator-style callers.
        false
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }
}

impl Default for ZoomHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn zoomed() -> Location {
        Location::Zoomed(Uuid::new_v4())
    }

    fn assert_invariants(history: &ZoomHistory) {
        assert!(history.len() >= 1);
        assert!(history.current_index() < history.len());
    }

    #[test]
    fn test_starts_at_home() {
        let history = ZoomHistory::new();
        assert_eq!(history.current(), Location::Home);
        assert_eq!(history.len(), 1);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_push_pop_scenario() {
        let mut history = ZoomHistory::new();
        let (a, b, c) = (zoomed(), zoomed(), zoomed());

        history.push(a);
        assert_eq!(history.entries(), &[Location::Home, a]);
        assert_eq!(history.current_index(), 1);

        history.push(b);
        assert_eq!(history.entries(), &[Location::Home, a, b]);
        assert_eq!(history.current_index(), 2);

        history.pop();
        assert_eq!(history.current_index(), 1);
        assert!(history.can_go_forward());

        // Zooming from the middle discards the forward branch.
        history.push(c);
        assert_eq!(history.entries(), &[Location::Home, a, c]);
        assert_eq!(history.current_index(), 2);
        assert_invariants(&history);
    }

    #[test]
    fn test_push_duplicate_is_noop() {
        let mut history = ZoomHistory::new();
        let a = zoomed();

        history.push(a);
        let before = history.clone();
        history.push(a);
        assert_eq!(history, before);
    }

    #[test]
    fn test_push_home_on_home_is_noop() {
        let mut history = ZoomHistory::new();
        history.push(Location::Home);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
    }

    #[test]
    fn test_home_can_reappear_after_zoom() {
        let mut history = ZoomHistory::new();
        let a = zoomed();

        history.push(a);
        history.push(Location::Home);
        assert_eq!(history.entries(), &[Location::Home, a, Location::Home]);
        assert_eq!(history.current_index(), 2);
    }

    #[test]
    fn test_pop_at_start_is_noop() {
        let mut history = ZoomHistory::new();
        history.pop();
        assert_eq!(history.current_index(), 0);
    }

    #[test]
    fn test_navigate_to_out_of_range_ignored() {
        let mut history = ZoomHistory::new();
        history.push(zoomed());

        history.navigate_to(0);
        assert_eq!(history.current_index(), 0);
        history.navigate_to(5);
        assert_eq!(history.current_index(), 0);
    }

    #[test]
    fn test_go_home() {
        let mut history = ZoomHistory::new();
        history.push(zoomed());
        history.push(zoomed());

        history.go_home();
        assert_eq!(history.current_index(), 0);
        // The forward entries are still there.
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_remove_refuses_last_entry() {
        let mut history = ZoomHistory::new();
        assert!(!history.remove(0));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut history = ZoomHistory::new();
        history.push(zoomed());
        assert!(!history.remove(2));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_remove_below_cursor_decrements() {
        let mut history = ZoomHistory::new();
        let (a, b) = (zoomed(), zoomed());
        history.push(a);
        history.push(b);
        assert_eq!(history.current_index(), 2);

        assert!(history.remove(0));
        // Cursor still points at b.
        assert_eq!(history.current_index(), 1);
        assert_eq!(history.current(), b);
        assert_invariants(&history);
    }

    #[test]
    fn test_remove_above_cursor_leaves_cursor() {
        let mut history = ZoomHistory::new();
        let (a, b) = (zoomed(), zoomed());
        history.push(a);
        history.push(b);
        history.navigate_to(0);

        assert!(history.remove(2));
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.current(), Location::Home);
    }

    #[test]
    fn test_remove_at_cursor_clamps() {
        let mut history = ZoomHistory::new();
        let (a, b) = (zoomed(), zoomed());
        history.push(a);
        history.push(b);

        // Cursor on the last entry; removing it clamps back.
        assert!(history.remove(2));
        assert_eq!(history.current_index(), 1);
        assert_eq!(history.current(), a);
        assert_invariants(&history);
    }

    #[test]
    fn test_clear_resets() {
        let mut history = ZoomHistory::new();
        history.push(zoomed());
        history.push(zoomed());

        history.clear();
        assert_eq!(history.entries(), &[Location::Home]);
        assert_eq!(history.current_index(), 0);
    }

    #[test]
    fn test_sync_with_zoom_current_is_noop() {
        let mut history = ZoomHistory::new();
        let a = zoomed();
        history.push(a);

        let before = history.clone();
        history.sync_with_zoom(a);
        assert_eq!(history, before);
    }

    #[test]
    fn test_sync_with_zoom_moves_to_existing() {
        let mut history = ZoomHistory::new();
        let (a, b) = (zoomed(), zoomed());
        history.push(a);
        history.push(b);

        history.sync_with_zoom(Location::Home);
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_sync_with_zoom_pushes_unknown() {
        let mut history = ZoomHistory::new();
        let (a, b) = (zoomed(), zoomed());
        history.push(a);

        history.sync_with_zoom(b);
        assert_eq!(history.entries(), &[Location::Home, a, b]);
        assert_eq!(history.current_index(), 2);
    }

    #[test]
    fn test_navigate_or_push() {
        let mut history = ZoomHistory::new();
        let (a, b) = (zoomed(), zoomed());
        history.push(a);

        assert_eq!(
            history.navigate_or_push(Location::Home),
            NavigateOutcome::Existing
        );
        assert_eq!(history.current_index(), 0);

        assert_eq!(history.navigate_or_push(b), NavigateOutcome::Pushed);
        // Push from index 0 truncated the old branch.
        assert_eq!(history.entries(), &[Location::Home, b]);
        assert_eq!(history.current_index(), 1);
    }

    #[test]
    fn test_contains() {
        let mut history = ZoomHistory::new();
        let (a, b) = (zoomed(), zoomed());
        history.push(a);

        assert!(history.contains(Location::Home));
        assert!(history.contains(a));
        assert!(!history.contains(b));
    }

    #[test]
    fn test_invariants_hold_across_mixed_ops() {
        let mut history = ZoomHistory::new();
        let locations: Vec<Location> = (0..4).map(|_| zoomed()).collect();

        for (i, loc) in locations.iter().enumerate() {
            history.push(*loc);
            assert_invariants(&history);
            if i % 2 == 0 {
                history.pop();
                assert_invariants(&history);
            }
        }

        history.remove(1);
        assert_invariants(&history);
        history.navigate_to(0);
        assert_invariants(&history);
        history.remove(1);
        assert_invariants(&history);
        history.pop();
        assert_invariants(&history);
    }
}
