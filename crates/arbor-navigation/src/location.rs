//! Carousel location
//!
//! A card in the carousel is either the unzoomed home view or a zoom
//! onto one outline node. Making home its own variant (rather than an
//! absent node id) rules out "two homes in a row" structurally.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "node")]
pub enum Location {
    /// The root/unzoomed view of the outline.
    Home,
    /// Zoomed onto a single outline node.
    Zoomed(Uuid),
}

impl Location {
    /// Build a location from an optional node id, mapping `None` to home.
    pub fn from_node(id: Option<Uuid>) -> Self {
        match id {
            Some(id) => Location::Zoomed(id),
            None => Location::Home,
        }
    }

    /// The zoomed node id, if any.
    pub fn node(&self) -> Option<Uuid> {
        match self {
            Location::Home => None,
            Location::Zoomed(id) => Some(*id),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Location::Home)
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::Home
    }
}
