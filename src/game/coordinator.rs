//! Builds the court, launches one actor thread per player, serves the
//! opening shot and waits for the game to end.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::actors::court::{mailboxes, Court};
use crate::actors::{ActorExit, PlayerActor, TerminationSignal};
use crate::core::{GameConfig, GameError, GameRng, PlayerId, RandomSource, Result, Roster, Shot};

use super::events::{GameEvent, GameObserver, NullObserver};
use super::report::GameOutcome;

/// A configured game that has not started yet.
///
/// ```no_run
/// use pong_tag::core::{GameConfig, Roster};
/// use pong_tag::game::Game;
///
/// let roster = Roster::new(["Ann", "Bob", "Cid"], 2).unwrap();
/// let game = Game::new(GameConfig::default(), roster).unwrap();
/// let server = game.roster().require("ann").unwrap();
///
/// let outcome = game.play(server).unwrap();
/// print!("{outcome}");
/// ```
pub struct Game<R = GameRng> {
    config: GameConfig,
    roster: Arc<Roster>,
    rng: R,
    observer: Arc<dyn GameObserver>,
}

impl Game<GameRng> {
    /// Create a game with an entropy-seeded RNG and no observer.
    pub fn new(config: GameConfig, roster: Roster) -> Result<Self> {
        config.validate()?;
        if roster.len() < config.min_players {
            return Err(GameError::NotEnoughPlayers {
                found: roster.len(),
                required: config.min_players,
            });
        }

        Ok(Self {
            config,
            roster: Arc::new(roster),
            rng: GameRng::from_entropy(),
            observer: Arc::new(NullObserver),
        })
    }
}

impl<R: RandomSource> Game<R> {
    /// Replace the random source. Each actor gets a fork of it.
    #[must_use]
    pub fn with_rng<S: RandomSource>(self, rng: S) -> Game<S> {
        Game {
            config: self.config,
            roster: self.roster,
            rng,
            observer: self.observer,
        }
    }

    /// Receive game events.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn GameObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn roster(&self) -> &Arc<Roster> {
        &self.roster
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Launch the actors and serve the opening shot from `server`.
    ///
    /// Returns once the first target has taken the serve.
    pub fn start(mut self, server: PlayerId) -> Result<RunningGame> {
        if server.index() >= self.roster.len() {
            return Err(GameError::UnknownPlayer(server.to_string()));
        }

        let (senders, inboxes) = mailboxes(self.roster.len());
        let court = Court::new(Arc::clone(&self.roster), senders, Arc::clone(&self.observer));
        let mut running = RunningGame {
            court: court.clone(),
            actors: Vec::with_capacity(self.roster.len()),
            threshold: self.config.threshold,
        };

        for (id, inbox) in self.roster.ids().zip(inboxes) {
            let actor = PlayerActor::new(
                id,
                inbox,
                court.clone(),
                self.rng.fork(),
                self.config.threshold,
                self.config.miss_probability,
            );
            let guard = CloseOnPanic(Arc::clone(&court.signal));
            let handle = thread::Builder::new()
                .name(format!("player-{}", id.index()))
                .spawn(move || {
                    let _guard = guard;
                    actor.run()
                })?;
            running.actors.push((id, handle));
        }

        let target = self.config.opening.pick(&self.roster, server, &mut self.rng);
        let server_name = self.roster[server].name();
        let target_name = self.roster[target].name();
        info!(
            players = self.roster.len(),
            server = server_name,
            target = target_name,
            "serving"
        );
        self.observer.on_event(&GameEvent::Served {
            server: server_name.to_string(),
            target: target_name.to_string(),
        });

        if !court.deliver(target, Shot::serve(server)) {
            warn!("game ended before the serve was taken");
        }

        Ok(running)
    }

    /// Start the game and block until someone loses.
    pub fn play(self, server: PlayerId) -> Result<GameOutcome> {
        self.start(server)?.wait()
    }
}

/// Closes the signal if an actor thread unwinds, so nobody waits forever.
struct CloseOnPanic(Arc<TerminationSignal>);

impl Drop for CloseOnPanic {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.close();
        }
    }
}

/// Handle to a game in progress.
///
/// Dropping it closes the termination signal so the actor threads exit.
pub struct RunningGame {
    court: Court,
    actors: Vec<(PlayerId, JoinHandle<ActorExit>)>,
    threshold: u32,
}

impl RunningGame {
    #[must_use]
    pub fn roster(&self) -> &Roster {
        self.court.roster()
    }

    #[must_use]
    pub fn signal(&self) -> &TerminationSignal {
        self.court.signal()
    }

    /// Shots received by actors so far.
    #[must_use]
    pub fn hops(&self) -> u64 {
        self.court.hops()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.court.signal().is_closed()
    }

    /// Wait up to `timeout` for the game to end on its own.
    ///
    /// Returns whether it has ended.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        self.court.signal().wait_timeout(timeout)
    }

    /// Block until the game ends, then join every actor.
    pub fn wait(self) -> Result<GameOutcome> {
        self.court.signal().wait();
        self.join()
    }

    /// End the game now, abandoning any shot in flight.
    pub fn stop(self) -> Result<GameOutcome> {
        if self.court.signal().close() {
            info!(hops = self.hops(), "game stopped externally");
        }
        self.join()
    }

    fn join(mut self) -> Result<GameOutcome> {
        let mut failure = None;

        for (id, handle) in std::mem::take(&mut self.actors) {
            match handle.join() {
                Ok(exit) => debug!(player = %id, ?exit, "actor joined"),
                Err(_) => {
                    let name = self.court.roster()[id].name().to_string();
                    warn!(player = %name, "actor panicked");
                    failure.get_or_insert(GameError::ActorPanicked(name));
                }
            }
        }

        if let Some(err) = failure {
            return Err(err);
        }

        let outcome = GameOutcome::from_roster(self.court.roster(), self.threshold, self.hops());
        info!(loser = ?outcome.loser, hops = outcome.hops, "game finished");
        Ok(outcome)
    }
}

impl Drop for RunningGame {
    fn drop(&mut self) {
        self.court.signal().close();
    }
}
