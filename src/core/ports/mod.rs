//! Port traits (interfaces) for external dependencies
//!
//! The ordering logic depends only on these traits. Concrete storage lives
//! in the `adapters` module, and tests substitute in-memory fakes.

mod kv_store;
mod order_store;

pub use kv_store::{KeyValueStore, StoreError};
pub use order_store::OrderStore;
