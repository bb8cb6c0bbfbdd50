//! Random number generation for target selection and miss draws.
//!
//! ## Key Features
//!
//! - **Pluggable**: actors and the selector only see the `RandomSource` trait
//! - **Unseeded by default**: `GameRng::from_entropy` for real games
//! - **Forkable**: every actor gets its own independent stream
//! - **Scriptable**: `SequenceRng` replays fixed draws in tests
//!
//! ```
//! use pong_tag::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut actor_rng = rng.fork();
//!
//! assert!(rng.below(10) < 10);
//! assert!(actor_rng.below(10) < 10);
//! ```

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the two random decisions a player makes each turn.
pub trait RandomSource: Send + 'static {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: u32) -> u32;

    /// `true` with the given probability.
    ///
    /// Probabilities at or above 1.0 always hit and at or below 0.0 never
    /// do, so tests can force outcomes without consuming draws.
    fn chance(&mut self, probability: f64) -> bool;

    /// Independent stream for another actor.
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

/// ChaCha8-backed random source.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn below(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }

    fn chance(&mut self, probability: f64) -> bool {
        if probability >= 1.0 {
            true
        } else if probability <= 0.0 {
            false
        } else {
            self.inner.gen_bool(probability)
        }
    }

    /// Each fork produces a different but deterministic sequence.
    fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }
}

/// Replays a fixed cycle of draws.
///
/// `below(bound)` returns the next value modulo `bound`; `chance(p)` maps
/// the next value onto `[0, 1)` by dividing by `scale`. Forks share the
/// script but keep their own cursor.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Arc<[u32]>,
    cursor: usize,
    scale: u32,
}

impl SequenceRng {
    /// Cycle through `values`. Must not be empty.
    ///
    /// ```
    /// use pong_tag::core::{RandomSource, SequenceRng};
    ///
    /// let mut rng = SequenceRng::new([3, 7]);
    /// assert_eq!(rng.below(5), 3);
    /// assert_eq!(rng.below(5), 2);
    /// assert_eq!(rng.below(5), 3);
    /// ```
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let values: Arc<[u32]> = values.into_iter().collect();
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self {
            values,
            cursor: 0,
            scale: 100,
        }
    }

    /// Treat values as fractions of `scale` when answering `chance`.
    #[must_use]
    pub fn with_scale(mut self, scale: u32) -> Self {
        assert!(scale > 0, "scale must be positive");
        self.scale = scale;
        self
    }

    fn next(&mut self) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl RandomSource for SequenceRng {
    fn below(&mut self, bound: u32) -> u32 {
        self.next() % bound
    }

    fn chance(&mut self, probability: f64) -> bool {
        if probability >= 1.0 {
            return true;
        }
        if probability <= 0.0 {
            return false;
        }
        f64::from(self.next()) / f64::from(self.scale) < probability
    }

    fn fork(&mut self) -> Self {
        Self {
            values: Arc::clone(&self.values),
            cursor: 0,
            scale: self.scale,
        }
    }
}
