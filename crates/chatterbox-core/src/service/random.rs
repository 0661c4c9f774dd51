//! Random source trait for uniform selection.
//!
//! Used to pick one of two choice options and one of several learned replies.
//! The `ThreadRandom` adapter lives in chatterbox-infra.

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. `len` is always at least 1.
    fn index(&self, len: usize) -> usize;
}

/// Pick one element of `items` uniformly. Returns None for an empty slice.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    // Clamp so a misbehaving source cannot index out of bounds.
    let idx = rng.index(items.len()).min(items.len() - 1);
    items.get(idx)
}
