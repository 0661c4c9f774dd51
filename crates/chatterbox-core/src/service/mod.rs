//! Ambient system dependencies.
//!
//! The wall clock and the random source are read through traits so the
//! date/time detector and reply selection can be driven deterministically.
//! The system-backed adapters live in chatterbox-infra.

pub mod clock;
pub mod random;
