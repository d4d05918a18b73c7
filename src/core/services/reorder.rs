//! Reorder commit
//!
//! Applies a finished drag to the displayed order and stores the result as
//! the new manual order.

use crate::core::models::{OrderMapping, StreamId};
use crate::core::ports::OrderStore;

/// A drop that cannot be applied to the current order
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    /// The dragged stream is not in the order
    #[error("stream {0} is not in the current order")]
    UnknownSource(StreamId),

    /// The insertion index is past the end of the order
    #[error("insertion index {index} is outside 0..={len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the order
        len: usize,
    },
}

/// Move `source` so it lands at `insertion_index`
///
/// `insertion_index` is expressed against `current` *before* removal, as
/// produced by a drag session. When the source sat before the insertion
/// point, removing it shifts later slots left by one.
pub fn reorder(
    current: &[StreamId],
    source: StreamId,
    insertion_index: usize,
) -> Result<Vec<StreamId>, ReorderError> {
    let from = current
        .iter()
        .position(|id| *id == source)
        .ok_or(ReorderError::UnknownSource(source))?;
    if insertion_index > current.len() {
        return Err(ReorderError::IndexOutOfRange {
            index: insertion_index,
            len: current.len(),
        });
    }

    let mut next = current.to_vec();
    next.remove(from);
    let target = if from < insertion_index { insertion_index - 1 } else { insertion_index };
    next.insert(target, source);
    Ok(next)
}

/// Commits drops and persists the resulting manual order
#[derive(Debug)]
pub struct ReorderCommitter<'a, S: OrderStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: OrderStore + ?Sized> ReorderCommitter<'a, S> {
    /// Create a committer writing to `store`
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Apply a drop and save the new order
    ///
    /// An invalid drop is logged and leaves both the order and the store
    /// untouched; `current` is returned unchanged.
    pub fn commit(
        &self,
        current: &[StreamId],
        source: StreamId,
        insertion_index: usize,
    ) -> Vec<StreamId> {
        match reorder(current, source, insertion_index) {
            Ok(next) => {
                self.store.save(&OrderMapping::from_order(&next));
                log::debug!("Moved stream {source} to slot {insertion_index}");
                next
            },
            Err(err) => {
                log::warn!("Ignoring reorder: {err}");
                current.to_vec()
            },
        }
    }
}
