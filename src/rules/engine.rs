//! The capability shared by every game engine.
//!
//! Games implement `Engine` to define:
//! - How a fresh board is generated from a config and a random source
//! - How a move modifies state
//! - Win/loss conditions and the score reported to the leaderboard
//!
//! Sessions and input adapters call into `Engine` but never interpret
//! game-specific state directly.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameKind, RandomSource};

/// Lifecycle status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or Lost. No further moves are accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Whether a move changed the game.
///
/// Illegal moves are silently rejected rather than raised as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    Applied,
    Ignored,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }

    pub(crate) fn from_applied(applied: bool) -> Self {
        if applied {
            MoveOutcome::Applied
        } else {
            MoveOutcome::Ignored
        }
    }
}

/// Score of a finished game, ready for the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalScore {
    pub score: u64,
    /// Game-specific extra fields (`boardSize`, `highestTile`, `totalQuestions`).
    pub extra: Vec<(&'static str, u64)>,
}

impl FinalScore {
    #[must_use]
    pub fn new(score: u64) -> Self {
        Self {
            score,
            extra: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extra(mut self, key: &'static str, value: u64) -> Self {
        self.extra.push((key, value));
        self
    }
}

/// Engine trait.
///
/// ## Implementation Notes
///
/// - `generate`: the only fallible entry point; rejects unsupported sizes
/// - `apply_move`: must be deterministic given the random source
/// - `apply_move` on a terminal game returns `Ignored`
/// - `final_score`: `None` when the game has nothing to submit
pub trait Engine: Sized {
    /// Generation parameters.
    type Config: Clone;
    /// Abstract player intent.
    type Move: Clone;
    /// Random source driving generation and spawns.
    type Rng: RandomSource;

    /// Build a fresh game.
    fn generate(config: Self::Config, rng: Self::Rng) -> Result<Self, ConfigError>;

    /// Which game this is.
    fn kind(&self) -> GameKind;

    /// Apply a move. Illegal moves leave the state untouched.
    fn apply_move(&mut self, mv: Self::Move) -> MoveOutcome;

    /// Current lifecycle status.
    fn status(&self) -> GameStatus;

    /// Running in-game score.
    fn score(&self) -> u64;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Score to submit once the game is finished.
    ///
    /// Default: nothing to submit.
    fn final_score(&self, _elapsed_secs: u64) -> Option<FinalScore> {
        None
    }
}
