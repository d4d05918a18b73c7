//! Tests for persisted state on disk

use std::collections::HashSet;
use std::fs;

use tempfile::TempDir;

use streamorder::adapters::{JsonFileStore, KvOrderStore, ORDER_KEY};
use streamorder::core::models::{OrderMapping, StreamId};
use streamorder::core::ports::{KeyValueStore, OrderStore, StoreError};
use streamorder::core::services::{ReorderCommitter, SortDirection, SortEngine, SortMode};

use crate::common::{ids, order_of, stream};

fn file_store(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("nested").join("state.json"))
}

// =============================================================================
// JSON FILE STORE
// =============================================================================

#[test]
fn test_missing_file_has_no_keys() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    assert_eq!(store.get(ORDER_KEY).unwrap(), None);
    store.remove(ORDER_KEY).unwrap();
    assert!(!store.path().exists());
}

#[test]
fn test_set_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    store.set("theme", "dark").unwrap();
    store.set(ORDER_KEY, r#"{"1":0}"#).unwrap();

    assert!(store.path().exists());
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(ORDER_KEY).unwrap().as_deref(), Some(r#"{"1":0}"#));
}

#[test]
fn test_remove_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    store.set("theme", "dark").unwrap();
    store.set(ORDER_KEY, "{}").unwrap();
    store.remove(ORDER_KEY).unwrap();

    assert_eq!(store.get(ORDER_KEY).unwrap(), None);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "not json at all").unwrap();
    let store = JsonFileStore::new(&path);

    assert!(matches!(store.get(ORDER_KEY), Err(StoreError::Malformed { .. })));
}

#[test]
fn test_set_replaces_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "[1, 2").unwrap();
    let store = JsonFileStore::new(&path);

    store.set(ORDER_KEY, "{}").unwrap();
    assert_eq!(store.get(ORDER_KEY).unwrap().as_deref(), Some("{}"));
}

// =============================================================================
// ORDER STORE OVER A FILE
// =============================================================================

#[test]
fn test_order_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let order = ids(&[3, 1, 2]);

    KvOrderStore::new(file_store(&dir)).save(&OrderMapping::from_order(&order));

    let reopened = KvOrderStore::new(file_store(&dir));
    assert_eq!(reopened.load().ordered_ids(), order);
}

#[test]
fn test_malformed_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{{{").unwrap();

    let store = KvOrderStore::new(JsonFileStore::new(&path));
    assert!(store.load().is_empty());
}

#[test]
fn test_unwritable_location_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    // A regular file where a directory is expected
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let store = KvOrderStore::new(JsonFileStore::new(blocker.join("state.json")));

    store.save(&OrderMapping::from_order(&ids(&[1, 2])));
    assert!(store.load().is_empty());
}

#[test]
fn test_drag_commit_then_reload_order() {
    let dir = TempDir::new().unwrap();
    let streams = vec![stream(1, Some(30)), stream(2, Some(20)), stream(3, Some(10))];

    let store = KvOrderStore::new(file_store(&dir));
    let engine = SortEngine::new(&store);
    let current = engine.order_ids(&streams, SortMode::Manual, SortDirection::Descending);
    assert_eq!(current, ids(&[1, 2, 3]));

    let next = ReorderCommitter::new(&store).commit(&current, StreamId(3), 0);
    assert_eq!(next, ids(&[3, 1, 2]));

    let reopened = KvOrderStore::new(file_store(&dir));
    let sorted = SortEngine::new(&reopened).order(&streams, SortMode::Manual, SortDirection::Descending);
    assert_eq!(order_of(&sorted), vec![3, 1, 2]);
}

#[test]
fn test_deleted_stream_discards_file_order() {
    let dir = TempDir::new().unwrap();
    let store = KvOrderStore::new(file_store(&dir));
    store.save(&OrderMapping::from_order(&ids(&[2, 1, 3])));

    let live: HashSet<StreamId> = ids(&[1, 2]).into_iter().collect();
    assert!(store.reconcile(&live).is_empty());
    assert_eq!(store.kv().get(ORDER_KEY).unwrap(), None);
}
