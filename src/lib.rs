//! streamorder - ordering, drag-and-drop reordering and refresh countdowns
//! for a dashboard of monitored topic streams
//!
//! The stream backend supplies plain stream lists; this library decides the
//! order they are shown in, tracks drag gestures that rearrange them,
//! persists the user's manual order, and computes how long each stream has
//! until its next expected refresh.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
