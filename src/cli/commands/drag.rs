//! Drag command - simulate a drag gesture and drop

use std::path::Path;

use super::move_stream::reorder_streams;
use super::streams_file::{load_streams, order_result};
use streamorder::config::Config;
use streamorder::core::models::{Rect, StreamId};
use streamorder::core::services::{DragSession, ReorderCommitter, SortEngine, SortMode};
use streamorder::output::{OperationResult, OutputMode};

/// Drag `id` over a list of rows `row_height` tall and drop at `pointer_y`
pub fn drag(
    streams_path: &Path,
    id: StreamId,
    pointer_y: f64,
    row_height: f64,
    config: &Config,
    output: OutputMode,
) -> anyhow::Result<()> {
    if !row_height.is_finite() || row_height <= 0.0 {
        anyhow::bail!("Row height must be a positive number, got {row_height}");
    }

    let streams = load_streams(streams_path)?;
    let store = config.order_store();
    let direction = config.order.direction;
    let order = SortEngine::new(&store).order_ids(&streams, SortMode::Manual, direction);

    let rects: Vec<Rect> = (0..order.len())
        .scan(0.0, |top, _| {
            let rect = Rect::new(*top, row_height);
            *top += row_height;
            Some(rect)
        })
        .collect();

    let mut session = DragSession::new();
    if !session.start(id, &order) {
        OperationResult {
            success: false,
            message: format!("Stream {id} is not displayed"),
        }
        .render(output);
        return Ok(());
    }

    // The pointer reaches the row first, then the event bubbles to the list
    let frame = 1;
    if let Some((row, rect)) = rects.iter().enumerate().find(|(_, r)| r.contains_y(pointer_y)) {
        session.hover_item(order[row], pointer_y, *rect, frame, &order);
    }
    session.hover_container(pointer_y, rects, frame, &order);

    let Some(drop) = session.end() else {
        OperationResult {
            success: false,
            message: "Nothing to drop".to_string(),
        }
        .render(output);
        return Ok(());
    };

    log::debug!("Dropping stream {} at slot {}", drop.source, drop.insertion_index);
    let next = ReorderCommitter::new(&store).commit(&order, drop.source, drop.insertion_index);
    let sorted = reorder_streams(&streams, &next);
    order_result(&sorted, &SortMode::Manual.to_string(), &direction.to_string()).render(output);
    Ok(())
}
