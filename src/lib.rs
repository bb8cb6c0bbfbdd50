//! # pong-tag
//!
//! A multi-player elimination game. Players keep shooting at each other;
//! a missed shot costs the *shooter* a point, and the first player to reach
//! the threshold loses.
//!
//! ## Design Principles
//!
//! 1. **One actor per player**: every player runs on its own thread and
//!    only talks to the others through its mailbox.
//!
//! 2. **Single token**: exactly one shot is in flight. Mailboxes are
//!    rendezvous channels, so a hand-off completes only when the receiver
//!    takes the shot. Scores need no lock because only the token holder
//!    touches them.
//!
//! 3. **Stop exactly once**: a broadcast `TerminationSignal` is closed by
//!    whichever actor sees the losing score first; every actor observes it
//!    and exits.
//!
//! 4. **Pluggable randomness**: target and miss draws go through
//!    `RandomSource`, so tests can script or seed them.
//!
//! ## Modules
//!
//! - `core`: players, roster, shots, RNG, configuration, errors
//! - `targeting`: weighted (and uniform) target selection
//! - `actors`: player actor, shared court wiring, termination signal
//! - `game`: coordinator, events and observers, final report
//! - `console`: interactive roster and server collection

pub mod actors;
pub mod console;
pub mod core;
pub mod game;
pub mod targeting;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, Player, PlayerId, RandomSource, Result, Roster, SequenceRng,
    Shot, ShotKind, MAX_POINTS, MIN_PLAYERS, MISS_PROBABILITY,
};

pub use crate::targeting::{pick_weighted_target, target_weights, TargetPolicy};

pub use crate::actors::TerminationSignal;

pub use crate::game::{
    ConsoleObserver, EventLog, FinalScore, Game, GameEvent, GameObserver, GameOutcome,
    NullObserver, RunningGame,
};

pub use crate::console::Console;
