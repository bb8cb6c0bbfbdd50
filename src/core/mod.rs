//! Core game types: players, roster, shots, RNG, configuration, errors.
//!
//! Everything here is independent of how the actors are scheduled.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod roster;
pub mod shot;

pub use config::{GameConfig, MAX_POINTS, MIN_PLAYERS, MISS_PROBABILITY};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, SequenceRng};
pub use roster::Roster;
pub use shot::{Shot, ShotKind};
