//! Special-case detectors tried before the learned response store.
//!
//! Each detector is a pure function of the normalized input (plus an
//! injected clock or random source) and returns `None` when the input is
//! not for it. "Not applicable" is ordinary control flow, not an error.

pub mod arithmetic;
pub mod choice;
pub mod datetime;
