//! Final results of a game.

use std::fmt;

use serde::Serialize;

use crate::core::Roster;

/// One player's score when the game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinalScore {
    pub name: String,
    pub score: u32,
}

/// Snapshot of the roster once every actor has stopped.
///
/// `Display` renders the end-of-game report: the loser line (if anyone
/// reached the threshold) followed by everyone else's score in roster
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    /// First player in roster order at or above the threshold.
    pub loser: Option<String>,
    pub threshold: u32,
    /// Every player's score, in roster order.
    pub scores: Vec<FinalScore>,
    /// Shots received over the whole game.
    pub hops: u64,
}

impl GameOutcome {
    /// Snapshot `roster`.
    ///
    /// Only call this once the actors have been joined, otherwise scores
    /// may still be moving.
    #[must_use]
    pub fn from_roster(roster: &Roster, threshold: u32, hops: u64) -> Self {
        let loser = roster
            .first_at_or_above(threshold)
            .map(|id| roster[id].name().to_string());
        let scores = roster
            .iter()
            .map(|p| FinalScore {
                name: p.name().to_string(),
                score: p.score(),
            })
            .collect();

        Self {
            loser,
            threshold,
            scores,
            hops,
        }
    }

    /// Final score of the named player.
    #[must_use]
    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.scores.iter().find(|s| s.name == name).map(|s| s.score)
    }

    /// Everyone except the loser, in roster order.
    pub fn survivors(&self) -> impl Iterator<Item = &FinalScore> {
        self.scores
            .iter()
            .filter(move |s| self.loser.as_deref() != Some(s.name.as_str()))
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loser) = &self.loser {
            writeln!(f, "Player {loser} reached {} points and lost!", self.threshold)?;
        }
        writeln!(f, "Final scores:")?;
        for FinalScore { name, score } in self.survivors() {
            writeln!(f, "Player {name}: {score}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn roster(scores: &[(&str, u32)]) -> Roster {
        let roster = Roster::new(scores.iter().map(|(n, _)| *n), 2).unwrap();
        for (i, (_, score)) in scores.iter().enumerate() {
            for _ in 0..*score {
                roster[PlayerId::new(i as u8)].add_point();
            }
        }
        roster
    }

    #[test]
    fn test_report_with_loser() {
        let outcome = GameOutcome::from_roster(&roster(&[("Ann", 2), ("Bob", 11), ("Cid", 7)]), 11, 40);

        assert_eq!(outcome.loser.as_deref(), Some("Bob"));
        assert_eq!(
            outcome.to_string(),
            "Player Bob reached 11 points and lost!\nFinal scores:\nPlayer Ann: 2\nPlayer Cid: 7\n"
        );
    }

    #[test]
    fn test_report_without_loser() {
        let outcome = GameOutcome::from_roster(&roster(&[("Ann", 1), ("Bob", 0)]), 11, 3);

        assert_eq!(outcome.loser, None);
        assert_eq!(outcome.to_string(), "Final scores:\nPlayer Ann: 1\nPlayer Bob: 0\n");
    }

    #[test]
    fn test_first_in_roster_order_is_loser() {
        let outcome = GameOutcome::from_roster(&roster(&[("Ann", 3), ("Bob", 4)]), 3, 0);
        assert_eq!(outcome.loser.as_deref(), Some("Ann"));
        assert_eq!(outcome.survivors().count(), 1);
    }

    #[test]
    fn test_score_lookup() {
        let outcome = GameOutcome::from_roster(&roster(&[("Ann", 3), ("Bob", 4)]), 11, 0);
        assert_eq!(outcome.score_of("Bob"), Some(4));
        assert_eq!(outcome.score_of("Cid"), None);
    }

    #[test]
    fn test_outcome_json() {
        let outcome = GameOutcome::from_roster(&roster(&[("Ann", 1), ("Bob", 0)]), 1, 5);
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["loser"], "Ann");
        assert_eq!(json["scores"][1]["name"], "Bob");
        assert_eq!(json["hops"], 5);
    }
}
