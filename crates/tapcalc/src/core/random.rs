//! Uniform sources for the `rand` operation
//!
//! The brain never reaches for a global generator; it asks the source it
//! was built with. Every replay draws again, so a `rand` entry yields a
//! fresh sample on each evaluation unless the source is fixed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::fmt::Debug;

/// Supplies uniform samples in [0, 1)
pub trait RandomSource: Debug {
    /// Draws the next sample
    fn next_unit(&self) -> f64;
}

/// Thread-local generator from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always returns the same value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        self.0
    }
}

/// Reproducible stream from a seed
#[derive(Debug)]
pub struct SeededRandom {
    rng: RefCell<ChaCha8Rng>,
}

impl SeededRandom {
    /// Creates a stream starting at `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.rng.borrow_mut().gen::<f64>()
    }
}
