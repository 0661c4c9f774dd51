//! Infrastructure layer for Chatterbox.
//!
//! Contains implementations of the port traits defined in `chatterbox-core`:
//! the in-memory and SQLite response stores, the Google translate gateway,
//! the system clock and random source, and the TOML config loader.

pub mod config;
pub mod memory;
pub mod sqlite;
pub mod store;
pub mod system;
pub mod translate;
