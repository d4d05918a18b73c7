//! Order store on top of a key-value store
//!
//! The mapping is saved as JSON under a single fixed key. Read and write
//! failures are logged and swallowed; a bad value simply loads as empty.

use std::collections::HashSet;

use crate::core::models::{OrderMapping, StreamId};
use crate::core::ports::{KeyValueStore, OrderStore};

/// Key holding the manual stream order
pub const ORDER_KEY: &str = "streamOrder";

/// [`OrderStore`] persisting through any [`KeyValueStore`]
#[derive(Debug)]
pub struct KvOrderStore<K> {
    kv: K,
    excluded: HashSet<StreamId>,
}

impl<K: KeyValueStore> KvOrderStore<K> {
    /// Create a store with an empty exclusion set
    #[must_use]
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            excluded: HashSet::new(),
        }
    }

    /// Ids to drop from every loaded mapping
    #[must_use]
    pub fn with_excluded(mut self, excluded: impl IntoIterator<Item = StreamId>) -> Self {
        self.excluded = excluded.into_iter().collect();
        self
    }

    /// Underlying key-value store
    #[must_use]
    pub const fn kv(&self) -> &K {
        &self.kv
    }
}

impl<K: KeyValueStore> OrderStore for KvOrderStore<K> {
    fn load(&self) -> OrderMapping {
        match self.kv.get(ORDER_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("Ignoring malformed stream order: {err}");
                OrderMapping::new()
            }),
            Ok(None) => OrderMapping::new(),
            Err(err) => {
                log::warn!("Could not read stream order: {err}");
                OrderMapping::new()
            },
        }
    }

    fn save(&self, mapping: &OrderMapping) {
        let raw = match serde_json::to_string(mapping) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Could not encode stream order: {err}");
                return;
            },
        };
        if let Err(err) = self.kv.set(ORDER_KEY, &raw) {
            log::warn!("Could not save stream order: {err}");
        }
    }

    fn clear(&self) {
        if let Err(err) = self.kv.remove(ORDER_KEY) {
            log::warn!("Could not clear stream order: {err}");
        }
    }

    fn excluded_ids(&self) -> HashSet<StreamId> {
        self.excluded.clone()
    }
}
