//! Stream sorting
//!
//! Produces the displayed order of streams. Two modes exist:
//!
//! - `manual`: the user's stored positions first, most recently updated
//!   streams first among those without (or sharing) a position
//! - `last_updated`: update recency in the requested direction, stored
//!   position as tie-break
//!
//! Every comparison ends with the stream id, so the order is total and does
//! not depend on sort stability.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{OrderMapping, Stream, StreamId};
use crate::core::ports::OrderStore;

/// Primary sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// User-defined positions
    #[default]
    Manual,
    /// Time of the latest summary
    LastUpdated,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::LastUpdated => write!(f, "last_updated"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "manual" | "custom" => Ok(Self::Manual),
            "last_updated" | "lastupdated" | "updated" | "recent" => Ok(Self::LastUpdated),
            _ => Err(format!("Invalid sort mode: {s}. Use: manual, last_updated")),
        }
    }
}

/// Direction for the `last_updated` mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Oldest first
    #[serde(rename = "asc")]
    Ascending,
    /// Newest first
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" | "oldest" => Ok(Self::Ascending),
            "desc" | "descending" | "newest" => Ok(Self::Descending),
            _ => Err(format!("Invalid sort direction: {s}. Use: asc, desc")),
        }
    }
}

/// Missing update times sort as the earliest representable instant
fn updated_at(stream: &Stream) -> DateTime<Utc> {
    stream.last_updated.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Stored positions ascending, streams without a position last
fn by_position(mapping: &OrderMapping, a: &Stream, b: &Stream) -> Ordering {
    match (mapping.position(a.id), mapping.position(b.id)) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Full comparator for a mode and direction
#[must_use]
pub fn compare_streams(
    mapping: &OrderMapping,
    mode: SortMode,
    direction: SortDirection,
    a: &Stream,
    b: &Stream,
) -> Ordering {
    let primary = match mode {
        SortMode::Manual => {
            by_position(mapping, a, b).then_with(|| updated_at(b).cmp(&updated_at(a)))
        },
        SortMode::LastUpdated => {
            let recency = match direction {
                SortDirection::Ascending => updated_at(a).cmp(&updated_at(b)),
                SortDirection::Descending => updated_at(b).cmp(&updated_at(a)),
            };
            recency.then_with(|| by_position(mapping, a, b))
        },
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Sort `streams` for display
///
/// Pure function of its inputs. Streams repeating an id already seen are
/// dropped, so the result is always a permutation of the distinct ids.
#[must_use]
pub fn sort_streams(
    streams: &[Stream],
    mapping: &OrderMapping,
    mode: SortMode,
    direction: SortDirection,
) -> Vec<Stream> {
    let mut seen = HashSet::with_capacity(streams.len());
    let mut sorted: Vec<Stream> =
        streams.iter().filter(|s| seen.insert(s.id)).cloned().collect();
    sorted.sort_by(|a, b| compare_streams(mapping, mode, direction, a, b));
    sorted
}

/// Sorts live stream sets using a reconciled manual order
#[derive(Debug)]
pub struct SortEngine<'a, S: OrderStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: OrderStore + ?Sized> SortEngine<'a, S> {
    /// Create an engine reading manual positions from `store`
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Reconciled mapping for the given live streams
    #[must_use]
    pub fn mapping_for(&self, streams: &[Stream]) -> OrderMapping {
        let live: HashSet<StreamId> = streams.iter().map(|s| s.id).collect();
        self.store.reconcile(&live)
    }

    /// Displayed order of `streams`
    #[must_use]
    pub fn order(&self, streams: &[Stream], mode: SortMode, direction: SortDirection) -> Vec<Stream> {
        let mapping = self.mapping_for(streams);
        sort_streams(streams, &mapping, mode, direction)
    }

    /// Displayed order of `streams`, as ids
    #[must_use]
    pub fn order_ids(
        &self,
        streams: &[Stream],
        mode: SortMode,
        direction: SortDirection,
    ) -> Vec<StreamId> {
        self.order(streams, mode, direction).into_iter().map(|s| s.id).collect()
    }
}
