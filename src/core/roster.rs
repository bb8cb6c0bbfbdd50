//! The ordered, fixed set of players taking part in a game.

use std::ops::Index;

use super::error::{GameError, Result};
use super::player::{Player, PlayerId};

/// Compare two player names, ignoring case for every Unicode letter.
///
/// ```
/// use pong_tag::core::roster::names_match;
///
/// assert!(names_match("Ölaf", "ölaf"));
/// assert!(!names_match("Ann", "Anne"));
/// ```
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Ordered sequence of players, fixed at game start.
///
/// Order only matters for reporting and as the tie-break of the target
/// selector's fallback. A roster always holds at least two players with
/// unique, non-empty names.
#[derive(Debug)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from player names.
    ///
    /// Names are trimmed. Empty names, case-insensitive duplicates and
    /// fewer than `min_players` entries are rejected.
    ///
    /// ```
    /// use pong_tag::core::Roster;
    ///
    /// let roster = Roster::new(["Ann", "Bob"], 2).unwrap();
    /// assert_eq!(roster.len(), 2);
    /// assert!(Roster::new(["Ann"], 2).is_err());
    /// ```
    pub fn new<I, S>(names: I, min_players: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players: Vec<Player> = Vec::new();

        for name in names {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                return Err(GameError::EmptyName);
            }
            if players.iter().any(|p| names_match(p.name(), &name)) {
                return Err(GameError::DuplicateName(name));
            }
            if players.len() == PlayerId::MAX_PLAYERS {
                return Err(GameError::TooManyPlayers {
                    found: players.len() + 1,
                    max: PlayerId::MAX_PLAYERS,
                });
            }
            players.push(Player::new(PlayerId::new(players.len() as u8), name));
        }

        let required = min_players.max(2);
        if players.len() < required {
            return Err(GameError::NotEnoughPlayers {
                found: players.len(),
                required,
            });
        }

        Ok(Self { players })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check whether the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Iterate over players in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over all player IDs in roster order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// Look up a player by name, ignoring surrounding whitespace and case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        let name = name.trim();
        self.players
            .iter()
            .find(|p| names_match(p.name(), name))
            .map(Player::id)
    }

    /// Like `find`, but reports unknown names as an error.
    pub fn require(&self, name: &str) -> Result<PlayerId> {
        self.find(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.trim().to_string()))
    }

    /// First player, in roster order, whose score reached `threshold`.
    #[must_use]
    pub fn first_at_or_above(&self, threshold: u32) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.score() >= threshold)
            .map(Player::id)
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigns_ids_in_order() {
        let roster = Roster::new(["Ann", "Bob", "Cid"], 2).unwrap();
        let names: Vec<_> = roster.iter().map(|p| (p.id(), p.name().to_string())).collect();

        assert_eq!(
            names,
            vec![
                (PlayerId::new(0), "Ann".to_string()),
                (PlayerId::new(1), "Bob".to_string()),
                (PlayerId::new(2), "Cid".to_string()),
            ]
        );
    }

    #[test]
    fn test_trims_names() {
        let roster = Roster::new(["  Ann ", "Bob"], 2).unwrap();
        assert_eq!(roster[PlayerId::new(0)].name(), "Ann");
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = Roster::new(["Ann", "   "], 2).unwrap_err();
        assert!(matches!(err, GameError::EmptyName));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let err = Roster::new(["Ann", "ann"], 2).unwrap_err();
        assert!(matches!(err, GameError::DuplicateName(name) if name == "ann"));

        let err = Roster::new(["Émile", "émile"], 2).unwrap_err();
        assert!(matches!(err, GameError::DuplicateName(name) if name == "émile"));
    }

    #[test]
    fn test_rejects_too_few_players() {
        let err = Roster::new(["Ann"], 2).unwrap_err();
        assert!(matches!(err, GameError::NotEnoughPlayers { found: 1, required: 2 }));
    }

    #[test]
    fn test_minimum_never_below_two() {
        let err = Roster::new(["Ann"], 1).unwrap_err();
        assert!(matches!(err, GameError::NotEnoughPlayers { required: 2, .. }));
    }

    #[test]
    fn test_rejects_too_many_players() {
        let names: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
        let err = Roster::new(names, 2).unwrap_err();
        assert!(matches!(err, GameError::TooManyPlayers { found: 256, max: 255 }));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let roster = Roster::new(["Ann", "Bob"], 2).unwrap();

        assert_eq!(roster.find("BOB"), Some(PlayerId::new(1)));
        assert_eq!(roster.find(" ann "), Some(PlayerId::new(0)));
        assert_eq!(roster.find("Cid"), None);

        let roster = Roster::new(["Ölaf", "Bob"], 2).unwrap();
        assert_eq!(roster.find("ölaf"), Some(PlayerId::new(0)));
        assert_eq!(roster.find("ÖLAF"), Some(PlayerId::new(0)));
        assert!(matches!(roster.require("Cid"), Err(GameError::UnknownPlayer(_))));
    }

    #[test]
    fn test_first_at_or_above() {
        let roster = Roster::new(["Ann", "Bob", "Cid"], 2).unwrap();
        assert_eq!(roster.first_at_or_above(1), None);

        roster[PlayerId::new(2)].add_point();
        roster[PlayerId::new(1)].add_point();
        assert_eq!(roster.first_at_or_above(1), Some(PlayerId::new(1)));
    }
}
