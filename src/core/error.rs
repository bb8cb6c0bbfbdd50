//! Error types for roster construction and game startup.
//!
//! Once the actors are running there are no recoverable failures: every
//! variant here is raised either before the first shot is served or while
//! joining actor threads at the end of a game.

use thiserror::Error;

/// Errors raised while setting up or tearing down a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// Fewer players than the configured minimum.
    #[error("need at least {required} players, got {found}")]
    NotEnoughPlayers { found: usize, required: usize },

    /// More players than a `PlayerId` can address.
    #[error("at most {max} players supported, got {found}")]
    TooManyPlayers { found: usize, max: usize },

    /// A player name was empty after trimming.
    #[error("player name cannot be empty")]
    EmptyName,

    /// Two players share a name (compared case-insensitively).
    #[error("player name `{0}` is already taken")]
    DuplicateName(String),

    /// A name did not match anyone on the roster.
    #[error("no player named `{0}`")]
    UnknownPlayer(String),

    /// Threshold or probability out of range.
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    /// The OS refused to start an actor thread.
    #[error("failed to spawn player actor")]
    Spawn(#[from] std::io::Error),

    /// An actor thread panicked before it could be joined.
    #[error("actor for player `{0}` panicked")]
    ActorPanicked(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::NotEnoughPlayers { found: 1, required: 2 };
        assert_eq!(err.to_string(), "need at least 2 players, got 1");

        let err = GameError::DuplicateName("Ann".to_string());
        assert_eq!(err.to_string(), "player name `Ann` is already taken");
    }

    #[test]
    fn test_io_error_converts_to_spawn() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no threads");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Spawn(_)));
    }
}
