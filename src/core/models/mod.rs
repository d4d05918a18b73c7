//! Domain models for streamorder
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Stream`] - A monitored topic supplied by the stream backend
//! - [`OrderMapping`] - User-chosen manual positions
//! - [`Rect`] - Vertical bounds of a rendered list item

mod geometry;
mod order;
mod stream;

pub use geometry::{Half, Rect, insertion_index, slot_among};
pub use order::OrderMapping;
pub use stream::{Stream, StreamId, UpdateFrequency, parse_timestamp};
