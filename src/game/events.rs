//! Observable game events and the observers that consume them.
//!
//! Actors emit a `GameEvent` for every miss, and the actor that closes the
//! termination signal emits the game-over; the coordinator emits the serve.
//! Observers are called from actor threads, so they must be `Send + Sync`
//! and should return quickly.

use std::fmt;
use std::io::Write;

use parking_lot::Mutex;
use serde::Serialize;

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The opening shot was served.
    Served { server: String, target: String },
    /// A shot missed and the shooter's score went up.
    Missed {
        shooter: String,
        target: String,
        score: u32,
    },
    /// A player reached the threshold.
    GameOver { loser: String, threshold: u32 },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Served { server, target } => {
                write!(f, "Player {server} served to player {target}")
            }
            GameEvent::Missed {
                shooter,
                target,
                score,
            } => write!(
                f,
                "Player {shooter} shot at player {target} and missed, and increased its score to {score}"
            ),
            GameEvent::GameOver { loser, threshold } => {
                write!(f, "Player {loser} reached {threshold} points and lost!")
            }
        }
    }
}

/// Receives game events as they happen.
pub trait GameObserver: Send + Sync {
    fn on_event(&self, event: &GameEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&self, _event: &GameEvent) {}
}

/// Prints miss lines to stdout.
///
/// Serve and game-over are left to the final report.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn on_event(&self, event: &GameEvent) {
        if let GameEvent::Missed { .. } = event {
            let mut out = std::io::stdout().lock();
            // A closed stdout should not take an actor down with it.
            let _ = writeln!(out, "{event}");
        }
    }
}

/// Records every event in order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<GameEvent>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().clone()
    }

    /// Only the miss events.
    #[must_use]
    pub fn misses(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, GameEvent::Missed { .. }))
            .cloned()
            .collect()
    }
}

impl GameObserver for EventLog {
    fn on_event(&self, event: &GameEvent) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_line_format() {
        let event = GameEvent::Missed {
            shooter: "Ann".into(),
            target: "Bob".into(),
            score: 4,
        };

        assert_eq!(
            event.to_string(),
            "Player Ann shot at player Bob and missed, and increased its score to 4"
        );
    }

    #[test]
    fn test_game_over_line_format() {
        let event = GameEvent::GameOver {
            loser: "Ann".into(),
            threshold: 11,
        };
        assert_eq!(event.to_string(), "Player Ann reached 11 points and lost!");
    }

    #[test]
    fn test_event_log_records_in_order() {
        let log = EventLog::new();
        log.on_event(&GameEvent::Served {
            server: "Ann".into(),
            target: "Bob".into(),
        });
        log.on_event(&GameEvent::Missed {
            shooter: "Bob".into(),
            target: "Ann".into(),
            score: 1,
        });

        assert_eq!(log.events().len(), 2);
        assert_eq!(log.misses().len(), 1);
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = GameEvent::GameOver {
            loser: "Ann".into(),
            threshold: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"game_over","loser":"Ann","threshold":3}"#);
    }
}
