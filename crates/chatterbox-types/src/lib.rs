//! Shared domain types for Chatterbox.
//!
//! This crate contains the types passed between the resolver, the response
//! store and the HTTP layer: learned chat entries, the outcomes of teach and
//! delete operations, configuration, and the error enums.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
