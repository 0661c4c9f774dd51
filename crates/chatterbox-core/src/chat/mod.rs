//! Chat orchestration: reply resolution plus teach and delete operations.

pub mod service;
