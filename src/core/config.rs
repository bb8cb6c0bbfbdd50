//! Game configuration.
//!
//! End users always play with the compile-time defaults below; the builder
//! methods exist so tests can force deterministic scenarios (a miss
//! probability of 1.0, a low threshold, and so on).

use crate::targeting::TargetPolicy;

use super::error::{GameError, Result};

/// Minimum number of players before a game may start.
pub const MIN_PLAYERS: usize = 2;

/// Score at which a player loses.
pub const MAX_POINTS: u32 = 11;

/// Probability that any non-opening shot is a miss.
pub const MISS_PROBABILITY: f64 = 0.1;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Score that ends the game for whoever reaches it.
    pub threshold: u32,

    /// Chance that a forwarded shot is a `Miss`.
    pub miss_probability: f64,

    /// Minimum roster size.
    pub min_players: usize,

    /// How the coordinator picks the target of the opening serve.
    pub opening: TargetPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            threshold: MAX_POINTS,
            miss_probability: MISS_PROBABILITY,
            min_players: MIN_PLAYERS,
            opening: TargetPolicy::Weighted,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the losing score.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the miss probability.
    #[must_use]
    pub fn with_miss_probability(mut self, probability: f64) -> Self {
        self.miss_probability = probability;
        self
    }

    /// Set the opening-shot policy.
    #[must_use]
    pub fn with_opening_policy(mut self, policy: TargetPolicy) -> Self {
        self.opening = policy;
        self
    }

    /// Reject values the actors cannot play with.
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(GameError::InvalidConfig("threshold must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.miss_probability) {
            return Err(GameError::InvalidConfig(format!(
                "miss probability {} is outside [0, 1]",
                self.miss_probability
            )));
        }
        if self.min_players < MIN_PLAYERS {
            return Err(GameError::InvalidConfig(format!(
                "minimum player count cannot be below {MIN_PLAYERS}"
            )));
        }
        Ok(())
    }
}
