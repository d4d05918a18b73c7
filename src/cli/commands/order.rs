//! Order command - show streams in display order

use std::path::Path;

use super::streams_file::{load_streams, order_result};
use streamorder::config::Config;
use streamorder::core::services::{SortDirection, SortEngine, SortMode};
use streamorder::output::OutputMode;

/// Print the displayed order of the streams in `streams_path`
pub fn order(
    streams_path: &Path,
    mode: Option<SortMode>,
    direction: Option<SortDirection>,
    config: &Config,
    output: OutputMode,
) -> anyhow::Result<()> {
    let streams = load_streams(streams_path)?;
    let mode = mode.unwrap_or(config.order.mode);
    let direction = direction.unwrap_or(config.order.direction);

    let store = config.order_store();
    let sorted = SortEngine::new(&store).order(&streams, mode, direction);

    order_result(&sorted, &mode.to_string(), &direction.to_string()).render(output);
    Ok(())
}
