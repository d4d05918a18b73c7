//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::core::models::{OrderMapping, Stream};
use crate::core::services::{Countdown, OVERDUE_TEXT, UNRESOLVED_TEXT, countdown, next_update_for};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One displayed stream
#[derive(Debug, Serialize)]
pub struct StreamRow {
    /// Display position (0-based)
    pub index: usize,
    /// Stream id
    pub id: u64,
    /// Query text
    pub query: String,
    /// Update frequency, if recognized
    pub frequency: Option<String>,
    /// Last update (RFC 3339)
    pub last_updated: Option<String>,
    /// Rendered countdown
    pub countdown: String,
}

impl StreamRow {
    /// Build a row for `stream` at display `index`
    #[must_use]
    pub fn new(index: usize, stream: &Stream, now: DateTime<Utc>) -> Self {
        Self {
            index,
            id: stream.id.0,
            query: stream.query.clone(),
            frequency: stream.update_frequency.map(|f| f.to_string()),
            last_updated: stream.last_updated.map(|t| t.to_rfc3339()),
            countdown: countdown(now, next_update_for(stream)).to_string(),
        }
    }
}

/// Result of an order listing
#[derive(Debug, Serialize)]
pub struct OrderResult {
    /// Sort mode used
    pub mode: String,
    /// Sort direction used
    pub direction: String,
    /// Streams in display order
    pub streams: Vec<StreamRow>,
}

impl OrderResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.streams.is_empty() {
            println!("No streams.");
            return;
        }

        println!("Streams ({}, {}):\n", self.mode, self.direction);
        for row in &self.streams {
            println!(
                "  {:>3}. [{}] {}",
                row.index + 1,
                row.id,
                row.query.bold()
            );
            println!(
                "       {} | next update: {}",
                row.frequency.as_deref().unwrap_or("no frequency"),
                colorize_countdown(&row.countdown)
            );
        }
    }
}

/// Result of a countdown tick
#[derive(Debug, Serialize)]
pub struct CountdownResult {
    /// Clock value used (RFC 3339)
    pub now: String,
    /// `(id, countdown)` per displayed stream
    pub countdowns: Vec<CountdownRow>,
}

/// One countdown line
#[derive(Debug, Serialize)]
pub struct CountdownRow {
    /// Stream id
    pub id: u64,
    /// Rendered countdown
    pub countdown: String,
}

impl CountdownRow {
    /// Build a row from a computed countdown
    #[must_use]
    pub fn new(id: u64, countdown: Countdown) -> Self {
        Self {
            id,
            countdown: countdown.to_string(),
        }
    }
}

impl CountdownResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for row in &self.countdowns {
                    println!("  [{}] {}", row.id, colorize_countdown(&row.countdown));
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Persisted manual order
#[derive(Debug, Serialize)]
pub struct MappingResult {
    /// `(id, position)` ordered by position
    pub positions: Vec<(u64, i64)>,
}

impl MappingResult {
    /// Build from a mapping
    #[must_use]
    pub fn from_mapping(mapping: &OrderMapping) -> Self {
        let positions = mapping
            .ordered_ids()
            .into_iter()
            .filter_map(|id| mapping.position(id).map(|pos| (id.0, pos)))
            .collect();
        Self { positions }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.positions.is_empty() {
                    println!("No manual order stored.");
                    return;
                }
                println!("Manual order:\n");
                for (id, position) in &self.positions {
                    println!("  {position:>4}  stream {id}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    println!("{}", self.message);
                } else {
                    println!("{}", self.message.yellow());
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn colorize_countdown(text: &str) -> String {
    match text {
        OVERDUE_TEXT => text.red().to_string(),
        UNRESOLVED_TEXT => text.dimmed().to_string(),
        _ => text.green().to_string(),
    }
}
