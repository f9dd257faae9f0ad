//! # Random Sources
//!
//! The evolution loop draws all of its randomness through the [`RandomSource`]
//! trait, which exposes exactly the two primitives the operators need: a
//! uniform integer below a bound and a boolean that is true with probability
//! `1/denominator`.
//!
//! [`RandomNumberGenerator`] implements the trait over the `rand` crate's
//! `StdRng`. Seeding it with [`RandomNumberGenerator::from_seed`] makes a whole
//! run reproducible, since selection consumes no randomness and reproduction
//! consumes it in a fixed order.
//!
//! ## Example
//!
//! ```rust
//! use genmeal::rng::{RandomNumberGenerator, RandomSource};
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let index = rng.next_int_in_range(10);
//! assert!(index < 10);
//!
//! // A denominator of 1 is always true.
//! assert!(rng.next_bool(1));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A sequential stream of random decisions.
///
/// Implementations must be deterministic for a given seed so that runs can be
/// replayed.
pub trait RandomSource {
    /// Returns an integer uniformly drawn from `[0, n)`.
    ///
    /// `n` must be non-zero.
    fn next_int_in_range(&mut self, n: usize) -> usize;

    /// Returns `true` with probability `1/denominator`.
    ///
    /// `denominator` must be non-zero.
    fn next_bool(&mut self, denominator: u32) -> bool;
}

/// A wrapper around the `rand` crate's `StdRng` implementing [`RandomSource`].
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for RandomNumberGenerator {
    fn next_int_in_range(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    fn next_bool(&mut self, denominator: u32) -> bool {
        self.rng.gen_ratio(1, denominator)
    }
}
