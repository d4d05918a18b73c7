//! Adapter implementations for port traits
//!
//! Concrete storage behind the core's ports:
//!
//! - `json_file` - JSON file key-value store (local-storage equivalent)
//! - `memory` - In-memory key-value store
//! - `kv_order_store` - Manual order persisted under one fixed key

mod json_file;
mod kv_order_store;
mod memory;

pub use json_file::JsonFileStore;
pub use kv_order_store::{KvOrderStore, ORDER_KEY};
pub use memory::MemoryStore;
