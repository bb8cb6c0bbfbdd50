//! State shared by every actor in a game.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{select, Receiver, Sender};

use crate::core::{PlayerId, PlayerMap, Roster, Shot};
use crate::game::GameObserver;

use super::signal::TerminationSignal;

/// Create one rendezvous mailbox per player.
///
/// Capacity zero means a send completes only when the receiving actor takes
/// the shot, so at most one shot is ever in flight.
pub(crate) fn mailboxes(player_count: usize) -> (PlayerMap<Sender<Shot>>, Vec<Receiver<Shot>>) {
    let mut inboxes = Vec::with_capacity(player_count);
    let senders = PlayerMap::new(player_count, |_| {
        let (tx, rx) = crossbeam_channel::bounded(0);
        inboxes.push(rx);
        tx
    });
    (senders, inboxes)
}

/// Read-only wiring shared by the coordinator and all actors.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct Court {
    pub(crate) roster: Arc<Roster>,
    pub(crate) mailboxes: Arc<PlayerMap<Sender<Shot>>>,
    pub(crate) signal: Arc<TerminationSignal>,
    pub(crate) observer: Arc<dyn GameObserver>,
    hops: Arc<AtomicU64>,
}

impl Court {
    pub(crate) fn new(
        roster: Arc<Roster>,
        mailboxes: PlayerMap<Sender<Shot>>,
        observer: Arc<dyn GameObserver>,
    ) -> Self {
        Self {
            roster,
            mailboxes: Arc::new(mailboxes),
            signal: Arc::new(TerminationSignal::new()),
            observer,
            hops: Arc::new(AtomicU64::new(0)),
        }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn signal(&self) -> &TerminationSignal {
        &self.signal
    }

    /// Shots received by actors so far.
    #[must_use]
    pub fn hops(&self) -> u64 {
        self.hops.load(Ordering::Relaxed)
    }

    pub(crate) fn record_hop(&self) {
        self.hops.fetch_add(1, Ordering::Relaxed);
    }

    /// Hand `shot` to `target`, blocking until its actor takes it.
    ///
    /// Gives up and returns `false` if the game ends first or the target's
    /// actor is gone.
    pub(crate) fn deliver(&self, target: PlayerId, shot: Shot) -> bool {
        select! {
            send(self.mailboxes[target], shot) -> sent => sent.is_ok(),
            recv(self.signal.receiver()) -> _ => false,
        }
    }
}

impl std::fmt::Debug for Court {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Court")
            .field("players", &self.roster.len())
            .field("closed", &self.signal.is_closed())
            .field("hops", &self.hops())
            .finish()
    }
}
