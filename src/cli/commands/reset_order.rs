//! Reset-order command - forget the stored manual order

use streamorder::config::Config;
use streamorder::core::ports::OrderStore;
use streamorder::output::{OperationResult, OutputMode};

/// Clear the persisted manual order
pub fn reset_order(config: &Config, output: OutputMode) -> anyhow::Result<()> {
    let store = config.order_store();
    store.clear();
    OperationResult {
        success: true,
        message: "Manual order cleared.".to_string(),
    }
    .render(output);
    Ok(())
}
