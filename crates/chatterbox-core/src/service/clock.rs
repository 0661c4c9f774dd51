//! Clock trait for reading the current time.
//!
//! Defined in chatterbox-core so the date/time detector never reads the
//! system clock directly. The `SystemClock` adapter lives in chatterbox-infra.

use chrono::{DateTime, FixedOffset};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current time in the server's local offset.
    fn now(&self) -> DateTime<FixedOffset>;
}
