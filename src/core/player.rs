//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 255 players. Identity is
//! positional: two players with the same name and score are still distinct
//! because they occupy different roster slots.
//!
//! ## Player
//!
//! Immutable name plus a score that only the actor holding the shot token
//! ever mutates.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`. The coordinator uses it for the mailbox map.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::sync::atomic::{AtomicU32, Ordering};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Largest number of players a roster can hold.
    pub const MAX_PLAYERS: usize = u8::MAX as usize;

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use pong_tag::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant in the game.
///
/// The score is an atomic so the roster can be shared across actor threads,
/// but every access uses `Relaxed` ordering: the single shot token handed
/// over rendezvous channels already orders every write before the next
/// read.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: AtomicU32,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            score: AtomicU32::new(0),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.load(Ordering::Relaxed)
    }

    /// Add one point and return the new score.
    ///
    /// Must only be called by the actor currently holding the shot token.
    pub(crate) fn add_point(&self) -> u32 {
        self.score.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player. Read-only once built.
///
/// ## Example
///
/// ```
/// use pong_tag::core::{PlayerId, PlayerMap};
///
/// let doubled: PlayerMap<usize> = PlayerMap::new(3, |p| p.index() * 2);
/// assert_eq!(doubled[PlayerId::new(2)], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= PlayerId::MAX_PLAYERS, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}
