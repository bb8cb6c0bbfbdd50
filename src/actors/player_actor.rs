//! Per-player actor: wait for a shot, score misses, pass the token on.

use crossbeam_channel::{select, Receiver};
use tracing::{debug, info};

use crate::core::{PlayerId, RandomSource, Shot, ShotKind};
use crate::game::GameEvent;
use crate::targeting::pick_weighted_target;

use super::court::Court;

/// Outcome of handling one received shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Pass a new shot to `target`.
    Forward { target: PlayerId, shot: Shot },
    /// A miss pushed the shooter to the threshold; the signal is closed.
    GameOver,
    /// The signal was already closed; the shot is dropped untouched.
    Abandoned,
}

/// Why an actor's loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorExit {
    /// This actor detected the losing score.
    EndedGame,
    /// The game was ended elsewhere.
    Stopped,
}

/// One player's half of the game loop.
///
/// Owns the receiving end of its mailbox and its own random stream. Holds
/// the token only while handling a shot.
pub struct PlayerActor<R> {
    me: PlayerId,
    inbox: Receiver<Shot>,
    court: Court,
    rng: R,
    threshold: u32,
    miss_probability: f64,
}

impl<R: RandomSource> PlayerActor<R> {
    pub(crate) fn new(
        me: PlayerId,
        inbox: Receiver<Shot>,
        court: Court,
        rng: R,
        threshold: u32,
        miss_probability: f64,
    ) -> Self {
        Self {
            me,
            inbox,
            court,
            rng,
            threshold,
            miss_probability,
        }
    }

    /// Run until the game ends.
    pub fn run(mut self) -> ActorExit {
        let name = self.court.roster[self.me].name().to_string();
        debug!(player = %name, "actor started");

        let exit = loop {
            let received = select! {
                recv(self.court.signal.receiver()) -> _ => None,
                recv(self.inbox) -> msg => msg.ok(),
            };
            let Some(shot) = received else {
                break ActorExit::Stopped;
            };

            match self.handle(shot) {
                Turn::Forward { target, shot } => {
                    if !self.court.deliver(target, shot) {
                        break ActorExit::Stopped;
                    }
                }
                Turn::GameOver => break ActorExit::EndedGame,
                Turn::Abandoned => break ActorExit::Stopped,
            }
        };

        debug!(player = %name, ?exit, "actor finished");
        exit
    }

    /// Process one received shot.
    ///
    /// A miss charges a point to the shot's source, never to the receiver.
    pub fn handle(&mut self, shot: Shot) -> Turn {
        // Both select arms can be ready at once; a closed game wins.
        if self.court.signal.is_closed() {
            return Turn::Abandoned;
        }
        self.court.record_hop();

        let roster = &self.court.roster;
        let me = &roster[self.me];

        if shot.is_miss() {
            let shooter = &roster[shot.source];
            let score = shooter.add_point();

            info!(shooter = shooter.name(), target = me.name(), score, "missed");
            self.court.observer.on_event(&GameEvent::Missed {
                shooter: shooter.name().to_string(),
                target: me.name().to_string(),
                score,
            });

            if score >= self.threshold {
                if self.court.signal.close() {
                    info!(loser = shooter.name(), threshold = self.threshold, "game over");
                    self.court.observer.on_event(&GameEvent::GameOver {
                        loser: shooter.name().to_string(),
                        threshold: self.threshold,
                    });
                }
                return Turn::GameOver;
            }
        }

        let target = pick_weighted_target(roster, self.me, &mut self.rng);
        let kind = if self.rng.chance(self.miss_probability) {
            ShotKind::Miss
        } else {
            ShotKind::Shoot
        };
        debug!(
            shooter = me.name(),
            target = roster[target].name(),
            ?kind,
            "shot"
        );

        Turn::Forward {
            target,
            shot: Shot::new(self.me, kind),
        }
    }
}
