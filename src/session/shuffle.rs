//! Working-set shuffling
//!
//! The session takes any `Shuffler`, so tests can pass a seeded RNG or a
//! plain closure instead of the entropy-seeded default.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Reorders a working set in place
pub trait Shuffler {
    fn shuffle(&mut self, words: &mut [String]);
}

/// Fisher–Yates shuffle driven by a `rand` generator
#[derive(Clone, Debug)]
pub struct RngShuffler<R> {
    rng: R,
}

impl RngShuffler<StdRng> {
    /// Seeded from OS entropy; sessions are not reproducible
    pub fn from_entropy() -> Self {
        RngShuffler::new(StdRng::from_entropy())
    }

    /// Fixed seed, for tests and reproducible runs
    pub fn seeded(seed: u64) -> Self {
        RngShuffler::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngShuffler<R> {
    pub fn new(rng: R) -> Self {
        RngShuffler { rng }
    }
}

impl<R: Rng> Shuffler for RngShuffler<R> {
    fn shuffle(&mut self, words: &mut [String]) {
        SliceRandom::shuffle(words, &mut self.rng);
    }
}

impl<F> Shuffler for F
where
    F: FnMut(&mut [String]),
{
    fn shuffle(&mut self, words: &mut [String]) {
        self(words)
    }
}
