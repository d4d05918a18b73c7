//! Order store port
//!
//! Defines the interface for persisting the manual stream order.

use std::collections::HashSet;

use crate::core::models::{OrderMapping, StreamId};
use crate::core::services::reconcile::reconcile_mapping;

/// Persistence for the manual order mapping
///
/// Every operation is best effort: a missing, unreadable or malformed
/// mapping loads as empty, and a failed save leaves callers unaffected.
/// Implementations log failures instead of returning them.
pub trait OrderStore {
    /// Load the persisted mapping (empty when absent or unreadable)
    fn load(&self) -> OrderMapping;

    /// Overwrite the persisted mapping
    fn save(&self, mapping: &OrderMapping);

    /// Forget the persisted mapping
    fn clear(&self) {
        self.save(&OrderMapping::new());
    }

    /// Ids that are always dropped from a loaded mapping
    ///
    /// Empty unless the implementation was configured otherwise.
    fn excluded_ids(&self) -> HashSet<StreamId> {
        HashSet::new()
    }

    /// Load the mapping and reconcile it with the live stream set
    ///
    /// The returned mapping only holds ids from `live`. When reconciliation
    /// changes the mapping, the stored copy is updated to match.
    fn reconcile(&self, live: &HashSet<StreamId>) -> OrderMapping {
        let result = reconcile_mapping(self.load(), live, &self.excluded_ids());
        if result.discarded() {
            self.clear();
        } else if result.changed() {
            self.save(&result.mapping);
        }
        result.mapping
    }
}
