//! Move command - reposition a stream in the manual order

use std::path::Path;

use super::streams_file::{load_streams, order_result};
use streamorder::config::Config;
use streamorder::core::models::{Stream, StreamId};
use streamorder::core::services::{ReorderCommitter, SortEngine, SortMode, reorder};
use streamorder::output::{OperationResult, OutputMode};

/// Move `id` to insertion slot `index` of the current manual order
pub fn move_stream(
    streams_path: &Path,
    id: StreamId,
    index: usize,
    config: &Config,
    output: OutputMode,
) -> anyhow::Result<()> {
    let streams = load_streams(streams_path)?;
    let store = config.order_store();
    let direction = config.order.direction;

    let current = SortEngine::new(&store).order_ids(&streams, SortMode::Manual, direction);
    if let Err(err) = reorder(&current, id, index) {
        OperationResult {
            success: false,
            message: format!("Cannot move: {err}"),
        }
        .render(output);
        return Ok(());
    }

    let next = ReorderCommitter::new(&store).commit(&current, id, index);

    let sorted = reorder_streams(&streams, &next);
    order_result(&sorted, &SortMode::Manual.to_string(), &direction.to_string()).render(output);
    Ok(())
}

/// Streams arranged in the order of `ids`
pub fn reorder_streams(streams: &[Stream], ids: &[StreamId]) -> Vec<Stream> {
    ids.iter()
        .filter_map(|id| streams.iter().find(|s| s.id == *id).cloned())
        .collect()
}
