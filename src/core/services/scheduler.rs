//! Refresh countdowns
//!
//! Works out when each stream is next expected to refresh and how long is
//! left until then. Everything here is a pure function of the clock value
//! passed in, so callers may recompute on every tick.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::core::models::{Stream, StreamId, UpdateFrequency};

/// Text rendered for a countdown that cannot be computed
pub const UNRESOLVED_TEXT: &str = "unresolved";

/// Text rendered once the expected refresh time has passed
pub const OVERDUE_TEXT: &str = "overdue";

/// Expected time of a stream's next refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "at")]
pub enum NextUpdate {
    /// Refresh expected at this instant
    At(DateTime<Utc>),
    /// Missing update history or frequency
    Unresolved,
}

/// Time left until a stream's next refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Refresh still ahead
    Remaining(TimeDelta),
    /// Refresh time reached or passed
    Overdue,
    /// Cannot be computed
    Unresolved,
}

/// Next refresh instant: `last_updated` plus one frequency interval
#[must_use]
pub fn next_update_instant(
    last_updated: Option<DateTime<Utc>>,
    frequency: Option<UpdateFrequency>,
) -> NextUpdate {
    match (last_updated, frequency) {
        (Some(at), Some(frequency)) => {
            at.checked_add_signed(frequency.interval()).map_or(NextUpdate::Unresolved, NextUpdate::At)
        },
        _ => NextUpdate::Unresolved,
    }
}

/// Next refresh instant of a stream
#[must_use]
pub fn next_update_for(stream: &Stream) -> NextUpdate {
    next_update_instant(stream.last_updated, stream.update_frequency)
}

/// Countdown from `now` to `next`
#[must_use]
pub fn countdown(now: DateTime<Utc>, next: NextUpdate) -> Countdown {
    match next {
        NextUpdate::Unresolved => Countdown::Unresolved,
        NextUpdate::At(at) if at <= now => Countdown::Overdue,
        NextUpdate::At(at) => Countdown::Remaining(at - now),
    }
}

/// Rendered countdown from `now` to `next`
#[must_use]
pub fn countdown_text(now: DateTime<Utc>, next: NextUpdate) -> String {
    countdown(now, next).to_string()
}

/// Format a positive duration as `{h}h {m}m {s}s`
///
/// Leading zero units are left out; seconds are always shown. Sub-second
/// remainders are truncated.
#[must_use]
pub fn format_remaining(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remaining(remaining) => write!(f, "{}", format_remaining(*remaining)),
            Self::Overdue => write!(f, "{OVERDUE_TEXT}"),
            Self::Unresolved => write!(f, "{UNRESOLVED_TEXT}"),
        }
    }
}

/// Countdowns for the streams currently on screen
///
/// Holds only what a countdown needs. Streams dropped by [`sync`] stop being
/// recomputed immediately; nothing keeps running for them. The board has no
/// timer of its own; whoever owns the clock calls [`tick`].
///
/// [`sync`]: CountdownBoard::sync
/// [`tick`]: CountdownBoard::tick
#[derive(Debug, Clone, Default)]
pub struct CountdownBoard {
    entries: BTreeMap<StreamId, NextUpdate>,
}

impl CountdownBoard {
    /// Create an empty board
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Track exactly the given displayed streams
    pub fn sync(&mut self, displayed: &[Stream]) {
        self.entries = displayed.iter().map(|s| (s.id, next_update_for(s))).collect();
    }

    /// Stop tracking a stream
    pub fn untrack(&mut self, id: StreamId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Whether a stream is tracked
    #[must_use]
    pub fn is_tracked(&self, id: StreamId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of tracked streams
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Countdown of one tracked stream
    #[must_use]
    pub fn countdown_for(&self, id: StreamId, now: DateTime<Utc>) -> Option<Countdown> {
        self.entries.get(&id).map(|next| countdown(now, *next))
    }

    /// Recompute every tracked countdown at `now`
    #[must_use]
    pub fn tick(&self, now: DateTime<Utc>) -> BTreeMap<StreamId, Countdown> {
        self.entries.iter().map(|(id, next)| (*id, countdown(now, *next))).collect()
    }
}
