//! One-shot broadcast used to stop every actor exactly once.
//!
//! The signal wraps a zero-capacity channel on which nothing is ever sent.
//! Closing drops the only sender, which disconnects the channel: every
//! receiver blocked on it wakes up, and every later `recv` returns
//! immediately. Actors race this receiver against their mailbox in a
//! `select!`.

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use parking_lot::Mutex;

/// Uninhabited payload: the channel only ever reports disconnection.
#[derive(Debug)]
pub enum Never {}

/// Write-once `open -> closed` flag with broadcast wake-up.
#[derive(Debug)]
pub struct TerminationSignal {
    closer: Mutex<Option<Sender<Never>>>,
    watcher: Receiver<Never>,
}

impl Default for TerminationSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminationSignal {
    /// Create an open signal.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::bounded(0);
        Self {
            closer: Mutex::new(Some(tx)),
            watcher: rx,
        }
    }

    /// Close the signal.
    ///
    /// Returns `true` for the caller that actually closed it; every later
    /// call is a no-op returning `false`.
    pub fn close(&self) -> bool {
        self.closer.lock().take().is_some()
    }

    /// Non-blocking check.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.watcher.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Block until the signal is closed.
    pub fn wait(&self) {
        // Nothing is ever sent, so recv only returns once disconnected.
        let _ = self.watcher.recv();
    }

    /// Block until the signal is closed or `timeout` elapses.
    ///
    /// Returns whether the signal is closed.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        matches!(
            self.watcher.recv_timeout(timeout),
            Err(RecvTimeoutError::Disconnected)
        )
    }

    /// Receiver to use as a `select!` arm. Ready once closed.
    #[must_use]
    pub fn receiver(&self) -> &Receiver<Never> {
        &self.watcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_open() {
        let signal = TerminationSignal::new();
        assert!(!signal.is_closed());
        assert!(!signal.wait_timeout(Duration::from_millis(10)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let signal = TerminationSignal::new();

        assert!(signal.close());
        assert!(!signal.close());
        assert!(!signal.close());
        assert!(signal.is_closed());
    }

    #[test]
    fn test_observe_after_close_is_immediate() {
        let signal = TerminationSignal::new();
        signal.close();

        signal.wait();
        assert!(signal.wait_timeout(Duration::from_secs(0)));
    }

    #[test]
    fn test_close_wakes_all_waiters() {
        let signal = Arc::new(TerminationSignal::new());

        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let signal = Arc::clone(&signal);
                thread::spawn(move || signal.wait_timeout(Duration::from_secs(5)))
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        signal.close();

        for waiter in waiters {
            assert!(waiter.join().unwrap());
        }
    }

    #[test]
    fn test_only_one_racer_wins_close() {
        let signal = Arc::new(TerminationSignal::new());

        let racers: Vec<_> = (0..8)
            .map(|_| {
                let signal = Arc::clone(&signal);
                thread::spawn(move || signal.close())
            })
            .collect();

        let winners = racers
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();
        assert_eq!(winners, 1);
    }
}
