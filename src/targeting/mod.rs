//! Target selection.
//!
//! Shooters never target themselves. The weighted policy gangs up on the
//! underdog: the lower a player's score relative to the other eligible
//! players, the more likely they are to receive the next shot.

mod selector;

pub use selector::{pick_uniform_target, pick_weighted_target, target_weights, TargetPolicy};
