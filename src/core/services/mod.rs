//! Ordering and scheduling services
//!
//! Pure logic that operates on domain models. Persistence is reached only
//! through the [`OrderStore`](crate::core::ports::OrderStore) port.
//!
//! - [`reconcile`] - Validate a stored manual order against live streams
//! - [`sorter`] - Manual and recency sorting
//! - [`drag`] - Drag-and-drop state machine
//! - [`reorder`] - Apply a drop and persist the new order
//! - [`scheduler`] - Next-refresh countdowns

pub mod drag;
pub mod reconcile;
pub mod reorder;
pub mod scheduler;
pub mod sorter;

pub use drag::{DragEvent, DragProgress, DragSession, DragState, PendingDrop, transition};
pub use reconcile::{Reconciliation, reconcile_mapping};
pub use reorder::{ReorderCommitter, ReorderError, reorder};
pub use scheduler::{
    Countdown, CountdownBoard, NextUpdate, OVERDUE_TEXT, UNRESOLVED_TEXT, countdown,
    countdown_text, format_remaining, next_update_for, next_update_instant,
};
pub use sorter::{SortDirection, SortEngine, SortMode, compare_streams, sort_streams};
