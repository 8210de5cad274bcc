//! One player's run of one game.
//!
//! A `GameSession` wraps an engine with the bookkeeping every game
//! screen needs:
//!
//! - Elapsed time, advanced by the caller's clock and frozen at game end
//! - Move history as a persistent vector, so snapshots clone in O(1)
//! - Restart with a fresh random stream
//! - Viewport-driven regeneration
//! - At-most-once leaderboard submission with failures swallowed

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameKind, GameRng, Viewport, ViewportConfig};
use crate::leaderboard::{LeaderboardSink, ScoreSubmission};
use crate::rules::{Engine, FinalScore, GameStatus, MoveOutcome};

/// An applied move, in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord<M> {
    /// Position in this game's history, starting at 0.
    pub sequence: u32,
    pub mv: M,
    /// Session clock when the move was made.
    pub elapsed_secs: u64,
}

/// Sequence number for the move after `len` recorded ones. Saturates.
fn sequence_number(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// What `submit_if_finished` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmitStatus {
    /// Game still running.
    InProgress,
    /// Finished without a leaderboard score.
    NoScore,
    /// An attempt was already made for this game.
    AlreadyAttempted,
    Submitted,
    /// The sink failed. Logged, not retried.
    Failed,
}

/// Engine plus session state.
#[derive(Clone, Debug)]
pub struct GameSession<E: Engine<Rng = GameRng>> {
    engine: E,
    config: E::Config,
    rng: GameRng,
    elapsed_secs: u64,
    submission_attempted: bool,
    history: Vector<MoveRecord<E::Move>>,
    games_started: u32,
}

impl<E: Engine<Rng = GameRng>> GameSession<E> {
    /// Start a session; every game draws from a fork of `seed`'s stream.
    pub fn new(config: E::Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    pub fn with_rng(config: E::Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        let engine = E::generate(config.clone(), rng.fork())?;
        log::debug!("session: started {} (seed {})", engine.kind(), rng.seed());
        Ok(Self {
            engine,
            config,
            rng,
            elapsed_secs: 0,
            submission_attempted: false,
            history: Vector::new(),
            games_started: 1,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &E::Config {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.engine.kind()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn submission_attempted(&self) -> bool {
        self.submission_attempted
    }

    /// Applied moves of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord<E::Move>> {
        &self.history
    }

    /// Games generated by this session, restarts included.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Forward a move to the engine. Only applied moves enter the history.
    pub fn apply(&mut self, mv: E::Move) -> MoveOutcome {
        let outcome = self.engine.apply_move(mv.clone());
        if outcome.is_applied() {
            self.history.push_back(MoveRecord {
                sequence: sequence_number(self.history.len()),
                mv,
                elapsed_secs: self.elapsed_secs,
            });
        } else {
            log::trace!("session: {} move ignored", self.engine.kind());
        }
        outcome
    }

    /// Advance the session clock. Time stops once the game ends.
    pub fn advance_clock(&mut self, secs: u64) {
        if !self.engine.is_terminal() {
            self.elapsed_secs = self.elapsed_secs.saturating_add(secs);
        }
    }

    /// Throw the current game away and deal a new one from the same config.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.engine = E::generate(self.config.clone(), self.rng.fork())?;
        self.elapsed_secs = 0;
        self.submission_attempted = false;
        self.history = Vector::new();
        self.games_started += 1;
        log::debug!(
            "session: restarted {} (game {})",
            self.engine.kind(),
            self.games_started
        );
        Ok(())
    }

    /// Leaderboard score of the current game at the current clock.
    #[must_use]
    pub fn final_score(&self) -> Option<FinalScore> {
        self.engine.final_score(self.elapsed_secs)
    }

    /// Submit the finished game's score once.
    ///
    /// Sink errors are logged and swallowed; the attempt still counts, so
    /// a failed submission is never retried for this game.
    pub fn submit_if_finished<S>(&mut self, username: &str, sink: &mut S) -> SubmitStatus
    where
        S: LeaderboardSink + ?Sized,
    {
        if !self.engine.is_terminal() {
            return SubmitStatus::InProgress;
        }
        if self.submission_attempted {
            return SubmitStatus::AlreadyAttempted;
        }
        let Some(final_score) = self.final_score() else {
            return SubmitStatus::NoScore;
        };

        let submission =
            ScoreSubmission::new(self.engine.kind(), username, &final_score, self.elapsed_secs);
        self.submission_attempted = true;

        match sink.submit_score(&submission) {
            Ok(()) => {
                log::info!(
                    "session: submitted {} score {} for {}",
                    submission.game,
                    submission.score,
                    submission.username
                );
                SubmitStatus::Submitted
            }
            Err(error) => {
                log::warn!("session: score submission failed: {}", error);
                SubmitStatus::Failed
            }
        }
    }
}

impl<E> GameSession<E>
where
    E: Engine<Rng = GameRng>,
    E::Config: ViewportConfig + PartialEq,
{
    /// Start a session sized for `viewport`.
    pub fn for_viewport(viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        Self::new(E::Config::for_viewport(viewport), seed)
    }

    /// Re-derive the config from a new viewport.
    ///
    /// Starts a new game only when the derived config differs; returns
    /// whether it did.
    pub fn resize(&mut self, viewport: Viewport) -> Result<bool, ConfigError> {
        let config = E::Config::for_viewport(viewport);
        if config == self.config {
            return Ok(false);
        }
        log::debug!("session: viewport {}px resizes {}", viewport.width_px, self.engine.kind());
        self.config = config;
        self.restart()?;
        Ok(true)
    }
}
