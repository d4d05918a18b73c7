//! Stream model
//!
//! A stream is a monitored topic with a recurring summary-update cycle.
//! Streams are owned by the stream backend; this crate only reads them.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a stream, as assigned by the stream backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamId(pub u64);

impl std::fmt::Display for StreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StreamId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid stream id: {s}. Expected a non-negative integer"))
    }
}

impl From<u64> for StreamId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// How often a stream expects a fresh summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateFrequency {
    /// Every hour
    Hourly,
    /// Every day
    Daily,
    /// Every week
    Weekly,
}

impl UpdateFrequency {
    /// Time between two expected refreshes
    #[must_use]
    pub fn interval(self) -> TimeDelta {
        match self {
            Self::Hourly => TimeDelta::hours(1),
            Self::Daily => TimeDelta::days(1),
            Self::Weekly => TimeDelta::weeks(1),
        }
    }
}

impl std::fmt::Display for UpdateFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hourly => write!(f, "hourly"),
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
        }
    }
}

impl std::str::FromStr for UpdateFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(format!("Invalid update frequency: {s}. Use: hourly, daily, weekly")),
        }
    }
}

/// A monitored stream as supplied by the stream backend
///
/// Only the attributes that influence ordering and scheduling are modelled.
/// Anything else in the backend payload is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    /// Unique stable identifier
    pub id: StreamId,

    /// Display query string
    #[serde(default)]
    pub query: String,

    /// Refresh cadence; `None` when missing or not recognized
    #[serde(default, deserialize_with = "lenient_frequency")]
    pub update_frequency: Option<UpdateFrequency>,

    /// When the stream last received a summary
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Stream {
    /// Create a stream with no frequency and no update history
    #[must_use]
    pub fn new(id: u64, query: impl Into<String>) -> Self {
        Self {
            id: StreamId(id),
            query: query.into(),
            update_frequency: None,
            last_updated: None,
        }
    }

    /// Set the update frequency
    #[must_use]
    pub fn with_frequency(mut self, frequency: UpdateFrequency) -> Self {
        self.update_frequency = Some(frequency);
        self
    }

    /// Set the last update instant
    #[must_use]
    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }
}

/// Parse a backend timestamp
///
/// Accepts RFC 3339 as well as the offset-less ISO form the backend emits
/// (`2024-05-01T10:00:00.123456`), which is read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// String payload of a backend field; any other JSON type counts as absent
fn lenient_string<'de, D>(deserializer: D, field: &str) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(other) => {
            log::debug!("Ignoring non-string {field}: {other}");
            Ok(None)
        },
        None => Ok(None),
    }
}

fn lenient_frequency<'de, D>(deserializer: D) -> Result<Option<UpdateFrequency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient_string(deserializer, "update_frequency")?;
    Ok(raw.and_then(|s| match s.parse() {
        Ok(frequency) => Some(frequency),
        Err(err) => {
            log::debug!("{err}");
            None
        },
    }))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient_string(deserializer, "last_updated")?;
    Ok(raw.and_then(|s| {
        let parsed = parse_timestamp(&s);
        if parsed.is_none() {
            log::debug!("Ignoring unparseable timestamp: {s}");
        }
        parsed
    }))
}
