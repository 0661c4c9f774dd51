//! HTTP/REST API layer for Chatterbox.
//!
//! Axum-based JSON API with CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
