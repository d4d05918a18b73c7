//! Order reconciliation
//!
//! Checks a persisted manual order against the live stream set. A mapping
//! that mentions any stream which no longer exists is discarded as a whole.

use std::collections::HashSet;

use crate::core::models::{OrderMapping, StreamId};

/// Result of reconciling a stored mapping with the live id set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Effective mapping; empty when discarded
    pub mapping: OrderMapping,
    /// Number of entries dropped because their id is excluded
    pub excluded: usize,
    /// First stale id found, if the mapping was discarded
    pub stale: Option<StreamId>,
}

impl Reconciliation {
    /// Whether the stored mapping was thrown away
    #[must_use]
    pub const fn discarded(&self) -> bool {
        self.stale.is_some()
    }

    /// Whether the effective mapping differs from what was stored
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.excluded > 0 || self.stale.is_some()
    }
}

/// Reconcile `stored` against `live`
///
/// Excluded ids are filtered out first and never count as stale. Any other
/// id missing from `live` empties the whole mapping.
#[must_use]
pub fn reconcile_mapping(
    mut stored: OrderMapping,
    live: &HashSet<StreamId>,
    excluded: &HashSet<StreamId>,
) -> Reconciliation {
    let excluded_count = stored.exclude(excluded);

    if let Some(stale) = stored.first_stale(live) {
        log::debug!(
            "Discarding manual order of {} entries: stream {stale} is no longer live",
            stored.len()
        );
        return Reconciliation {
            mapping: OrderMapping::new(),
            excluded: excluded_count,
            stale: Some(stale),
        };
    }

    if excluded_count > 0 {
        log::debug!("Dropped {excluded_count} excluded id(s) from manual order");
    }

    Reconciliation {
        mapping: stored,
        excluded: excluded_count,
        stale: None,
    }
}
