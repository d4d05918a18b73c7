//! Tests for configuration loading and saving

use std::fs;

use streamorder::config::{Config, ConfigError};
use streamorder::core::models::{OrderMapping, StreamId};
use streamorder::core::ports::OrderStore;
use streamorder::core::services::{SortDirection, SortMode};
use tempfile::TempDir;

use crate::common::ids;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[storage]
path = "state/order.json"

[order]
excluded_ids = [13]
mode = "last_updated"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.order.mode, SortMode::LastUpdated);
    assert_eq!(config.order.direction, SortDirection::Descending);
    assert_eq!(config.order.excluded_ids, vec![StreamId(13)]);
    assert!(config.state_path().ends_with("state/order.json"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[order\nmode = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_unknown_mode_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[order]\nmode = \"alphabetical\"\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    let mut config = Config::default();
    config.storage.path = Some(dir.path().join("state.json"));
    config.order.excluded_ids = vec![StreamId(5)];
    config.order.direction = SortDirection::Ascending;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_order_store_applies_exclusions() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.storage.path = Some(dir.path().join("state.json"));
    config.order.excluded_ids = vec![StreamId(9)];

    let store = config.order_store();
    assert!(store.excluded_ids().contains(&StreamId(9)));

    store.save(&OrderMapping::from_order(&ids(&[9, 1])));
    let live = ids(&[1]).into_iter().collect();
    assert_eq!(store.reconcile(&live).ordered_ids(), ids(&[1]));
}
