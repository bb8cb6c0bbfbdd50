//! Game coordination: start the actors, serve, wait, report.

mod coordinator;
mod events;
mod report;

pub use coordinator::{Game, RunningGame};
pub use events::{ConsoleObserver, EventLog, GameEvent, GameObserver, NullObserver};
pub use report::{FinalScore, GameOutcome};
