//! Weighted and uniform target selection.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, RandomSource, Roster};

/// How a shooter picks the next recipient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPolicy {
    /// Biased toward lower scores (`pick_weighted_target`).
    #[default]
    Weighted,
    /// Every other player equally likely.
    Uniform,
}

impl TargetPolicy {
    /// Pick a player other than `exclude` according to this policy.
    pub fn pick<R: RandomSource + ?Sized>(self, roster: &Roster, exclude: PlayerId, rng: &mut R) -> PlayerId {
        match self {
            TargetPolicy::Weighted => pick_weighted_target(roster, exclude, rng),
            TargetPolicy::Uniform => pick_uniform_target(roster, exclude, rng),
        }
    }
}

/// Weight of every eligible target, in roster order.
///
/// `w(p) = max_score - p.score + 1`, where `max_score` is taken over the
/// eligible players only. Every weight is at least 1.
#[must_use]
pub fn target_weights(roster: &Roster, exclude: PlayerId) -> Vec<(PlayerId, u32)> {
    let max_score = roster
        .iter()
        .filter(|p| p.id() != exclude)
        .map(|p| p.score())
        .max()
        .unwrap_or(0);

    roster
        .iter()
        .filter(|p| p.id() != exclude)
        .map(|p| (p.id(), max_score - p.score() + 1))
        .collect()
}

/// Select a player other than `exclude`, favoring low scores.
///
/// Draws a uniform integer below the total weight and walks the eligible
/// players accumulating weight. Falls back to the last eligible player.
///
/// # Panics
///
/// If the roster has no eligible player. `Roster` guarantees at least two
/// players, so this only happens if `exclude` is not on the roster and the
/// roster is somehow empty.
pub fn pick_weighted_target<R: RandomSource + ?Sized>(roster: &Roster, exclude: PlayerId, rng: &mut R) -> PlayerId {
    let weights = target_weights(roster, exclude);
    assert!(!weights.is_empty(), "no eligible target");

    if let [(only, _)] = weights.as_slice() {
        return *only;
    }

    let total: u32 = weights.iter().map(|(_, w)| w).sum();
    let mut draw = rng.below(total);

    for &(player, weight) in &weights {
        if draw < weight {
            return player;
        }
        draw -= weight;
    }

    weights[weights.len() - 1].0
}

/// Select a player other than `exclude` uniformly at random.
pub fn pick_uniform_target<R: RandomSource + ?Sized>(roster: &Roster, exclude: PlayerId, rng: &mut R) -> PlayerId {
    let eligible: Vec<PlayerId> = roster.ids().filter(|&id| id != exclude).collect();
    assert!(!eligible.is_empty(), "no eligible target");

    eligible[rng.below(eligible.len() as u32) as usize]
}
