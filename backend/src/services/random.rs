//! Injectable randomness for quiz selection.

use rand::Rng;

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Thread-local RNG from the `rand` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let source = ThreadRandom;
        for len in 1..50 {
            assert!(source.pick_index(len) < len);
        }
    }

    #[test]
    fn test_thread_random_single_candidate() {
        assert_eq!(ThreadRandom.pick_index(1), 0);
    }
}
