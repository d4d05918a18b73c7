//! Countdown command - print time until each stream's next refresh

use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::Utc;

use super::streams_file::load_streams;
use streamorder::config::Config;
use streamorder::core::services::{CountdownBoard, SortEngine};
use streamorder::output::{CountdownResult, CountdownRow, OutputMode};

/// Print countdowns for the displayed streams, once per second for `ticks`
pub fn countdown(
    streams_path: &Path,
    ticks: u32,
    config: &Config,
    output: OutputMode,
) -> anyhow::Result<()> {
    let streams = load_streams(streams_path)?;
    let store = config.order_store();
    let displayed = SortEngine::new(&store).order(&streams, config.order.mode, config.order.direction);
    let order: Vec<_> = displayed.iter().map(|s| s.id).collect();

    let mut board = CountdownBoard::new();
    board.sync(&displayed);

    for tick in 0..ticks.max(1) {
        if tick > 0 {
            thread::sleep(Duration::from_secs(1));
        }
        let now = Utc::now();
        let values = board.tick(now);
        let countdowns = order
            .iter()
            .filter_map(|id| values.get(id).map(|c| CountdownRow::new(id.0, *c)))
            .collect();
        CountdownResult {
            now: now.to_rfc3339(),
            countdowns,
        }
        .render(output);
    }
    Ok(())
}
