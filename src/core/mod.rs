//! Core ordering logic for streamorder
//!
//! This module contains pure logic with no I/O dependencies.
//! Persistence is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Stream, OrderMapping, Rect)
//! - `services/` - Sorting, drag sessions, reorder commits, countdowns
//! - `ports/` - Trait definitions for storage

pub mod models;
pub mod ports;
pub mod services;
