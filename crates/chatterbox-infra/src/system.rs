//! System-backed clock and random source.
//!
//! Implements the `Clock` and `RandomSource` traits from `chatterbox-core`
//! using the host's local time (chrono) and the thread-local RNG (rand).

use chrono::{DateTime, FixedOffset, Local};
use rand::Rng;

use chatterbox_core::service::clock::Clock;
use chatterbox_core::service::random::RandomSource;

/// Wall clock in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Uniform indices from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len.max(1))
    }
}
