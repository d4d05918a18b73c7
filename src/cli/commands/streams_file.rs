//! Reading stream lists exported by the stream backend

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;

use streamorder::core::models::Stream;
use streamorder::output::{OrderResult, StreamRow};

/// Load a JSON array of streams from `path`, or stdin when `path` is `-`
pub fn load_streams(path: &Path) -> anyhow::Result<Vec<Stream>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read streams from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read streams from {}", path.display()))?
    };
    serde_json::from_str(&content).context("Stream list must be a JSON array of streams")
}

/// Build an order listing for already sorted streams
pub fn order_result(sorted: &[Stream], mode: &str, direction: &str) -> OrderResult {
    let now = Utc::now();
    OrderResult {
        mode: mode.to_string(),
        direction: direction.to_string(),
        streams: sorted.iter().enumerate().map(|(i, s)| StreamRow::new(i, s, now)).collect(),
    }
}
