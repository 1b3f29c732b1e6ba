//! Arbor Zoom Navigation
//!
//! Navigation history for the zoom carousel. Each tab keeps an ordered
//! stack of the locations it has zoomed into, with a cursor the carousel
//! moves back and forth. Zooming in from a point earlier than the head
//! discards the forward branch, like browser history.

mod history;
mod location;

pub use history::{NavigateOutcome, ZoomHistory};
pub use location::Location;
