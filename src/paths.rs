//! Centralized path definitions for streamorder
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.streamorder/
//! ├── config.toml               # User preferences (sort defaults, exclusions)
//! └── state.json                # Local key-value store (manual order)
//! ```

use std::path::PathBuf;

/// Global directory name
const GLOBAL_DIR: &str = ".streamorder";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Local key-value store filename
const STATE_FILE: &str = "state.json";

/// Get the global streamorder directory.
///
/// Returns `~/.streamorder/`.
#[must_use]
pub fn global_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.streamorder/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default key-value store path.
///
/// Returns `~/.streamorder/state.json`.
#[must_use]
pub fn default_state_file() -> PathBuf {
    global_dir().join(STATE_FILE)
}
