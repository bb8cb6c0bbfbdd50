//! Concurrency: one thread per player, rendezvous mailboxes, and a
//! broadcast termination signal.
//!
//! Exactly one shot is in flight at any time. Every hand-off goes through a
//! zero-capacity channel, so the sender only continues once the receiver
//! has taken the shot. That serialization is what lets scores live in the
//! shared roster without a lock: only the actor currently holding the shot
//! reads or writes any score.

pub mod court;
pub mod player_actor;
pub mod signal;

pub use court::Court;
pub use player_actor::{ActorExit, PlayerActor, Turn};
pub use signal::TerminationSignal;
