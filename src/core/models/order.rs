//! Manual order mapping
//!
//! Maps stream ids to user-chosen positions. Positions only need to be
//! comparable; they are not required to be contiguous or start at zero.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::StreamId;

/// Persisted manual positions, encoded on disk as `{ "<id>": position }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderMapping {
    positions: BTreeMap<StreamId, i64>,
}

impl OrderMapping {
    /// Create an empty mapping
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: BTreeMap::new(),
        }
    }

    /// Build a mapping where each id's position is its index in `order`
    ///
    /// A repeated id keeps the position of its first occurrence.
    #[must_use]
    pub fn from_order(order: &[StreamId]) -> Self {
        let mut positions = BTreeMap::new();
        for (index, id) in order.iter().enumerate() {
            let position = i64::try_from(index).unwrap_or(i64::MAX);
            positions.entry(*id).or_insert(position);
        }
        Self { positions }
    }

    /// Stored position of a stream, if any
    #[must_use]
    pub fn position(&self, id: StreamId) -> Option<i64> {
        self.positions.get(&id).copied()
    }

    /// Set the position of a stream
    pub fn insert(&mut self, id: StreamId, position: i64) {
        self.positions.insert(id, position);
    }

    /// Remove a stream, returning its previous position
    pub fn remove(&mut self, id: StreamId) -> Option<i64> {
        self.positions.remove(&id)
    }

    /// Whether the mapping has a position for `id`
    #[must_use]
    pub fn contains(&self, id: StreamId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Ids with a stored position, in ascending id order
    pub fn ids(&self) -> impl Iterator<Item = StreamId> + '_ {
        self.positions.keys().copied()
    }

    /// `(id, position)` pairs, in ascending id order
    pub fn entries(&self) -> impl Iterator<Item = (StreamId, i64)> + '_ {
        self.positions.iter().map(|(id, pos)| (*id, *pos))
    }

    /// Ids sorted by stored position (ties broken by id)
    #[must_use]
    pub fn ordered_ids(&self) -> Vec<StreamId> {
        let mut entries: Vec<(StreamId, i64)> = self.entries().collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        entries.into_iter().map(|(id, _)| id).collect()
    }

    /// Drop every id contained in `excluded`, returning how many were dropped
    pub fn exclude(&mut self, excluded: &HashSet<StreamId>) -> usize {
        let before = self.positions.len();
        self.positions.retain(|id, _| !excluded.contains(id));
        before - self.positions.len()
    }

    /// First id that is not part of `live`, if any
    #[must_use]
    pub fn first_stale(&self, live: &HashSet<StreamId>) -> Option<StreamId> {
        self.ids().find(|id| !live.contains(id))
    }

    /// Number of stored positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no positions are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(StreamId, i64)> for OrderMapping {
    fn from_iter<I: IntoIterator<Item = (StreamId, i64)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
