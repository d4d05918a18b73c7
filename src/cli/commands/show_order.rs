//! Show-order command - print the stored manual order

use streamorder::config::Config;
use streamorder::core::ports::OrderStore;
use streamorder::output::{MappingResult, OutputMode};

/// Print the persisted manual order
pub fn show_order(config: &Config, output: OutputMode) -> anyhow::Result<()> {
    let store = config.order_store();
    MappingResult::from_mapping(&store.load()).render(output);
    Ok(())
}
