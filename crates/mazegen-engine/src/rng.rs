//! Random sources for maze generation.
//!
//! Generation only ever asks one question of its randomness: "give me a
//! uniform integer in `[0, n)`" for `n <= 4`. [`RandomSource`] is that
//! capability. Every [`rand::RngCore`] implements it, so a seeded
//! [`rand_pcg::Pcg64`] (see [`seeded`]) or `rand::thread_rng()` plugs straight
//! in; [`ScriptedSource`] replays a fixed list of draws for tests.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;

// ---------------------------------------------------------------------------
// RandomSource
// ---------------------------------------------------------------------------

/// A supply of uniformly distributed integers.
pub trait RandomSource {
    /// A uniform integer in `[0, bound)`. `bound` must be positive.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_below called with an empty range");
        self.gen_range(0..bound)
    }
}

/// The reproducible default source: PCG-64 seeded from `seed`.
pub fn seeded(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

// ---------------------------------------------------------------------------
// ScriptedSource
// ---------------------------------------------------------------------------

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested bound, so any script
/// is valid for any bound. An empty script always yields `0`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A source that always picks the first remaining candidate.
    pub fn first() -> Self {
        Self::new(Vec::new())
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % bound
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = seeded(12345);
        let mut b = seeded(12345);
        for bound in (1..=4).cycle().take(200) {
            assert_eq!(a.next_below(bound), b.next_below(bound));
        }
    }

    #[test]
    fn seeded_draws_stay_in_range() {
        let mut rng = seeded(7);
        for bound in 1..=4 {
            for _ in 0..500 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn seeded_draws_cover_every_value() {
        let mut rng = seeded(99);
        let mut seen = [false; 4];
        for _ in 0..400 {
            seen[rng.next_below(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn scripted_source_cycles_and_wraps() {
        let mut s = ScriptedSource::new(vec![3, 1, 6]);
        assert_eq!(s.next_below(4), 3);
        assert_eq!(s.next_below(4), 1);
        assert_eq!(s.next_below(4), 2); // 6 % 4
        assert_eq!(s.next_below(2), 1); // cycled back to 3
        assert_eq!(s.draws(), 4);
    }

    #[test]
    fn first_source_always_zero() {
        let mut s = ScriptedSource::first();
        for bound in 1..=4 {
            assert_eq!(s.next_below(bound), 0);
        }
    }
}
