//! Key-value store port
//!
//! Defines the interface for the local string store that holds persisted
//! dashboard state (the browser's local storage, or a file on disk).

use std::path::PathBuf;

/// Failure reading or writing the local key-value store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The backing data or a stored value is not valid JSON
    #[error("malformed data for key '{key}': {source}")]
    Malformed {
        /// Key whose value failed to decode (or `*` for the whole store)
        key: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Local string key-value store
///
/// Implementations are synchronous and local; callers decide how to degrade
/// when an operation fails.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
