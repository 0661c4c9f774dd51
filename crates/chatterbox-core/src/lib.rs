//! Reply resolution and port trait definitions for Chatterbox.
//!
//! This crate defines the "ports" (store, translator, clock and randomness
//! traits) that the infrastructure layer implements, the pattern detectors,
//! and `ChatService`, which ties them together. It depends only on
//! `chatterbox-types` -- never on `chatterbox-infra` or any IO crate.

pub mod chat;
pub mod detect;
pub mod repository;
pub mod service;
pub mod translate;
