//! # mindquest-engines
//!
//! Deterministic state engines for a collection of casual games: Tetris,
//! 2048, Minesweeper, Sudoku, memory match and a multiple-choice quiz.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: Engines never render, schedule timers or touch
//!    the network. Gravity ticks and settle delays arrive as explicit moves.
//!
//! 2. **Deterministic**: All randomness flows through `RandomSource`. A
//!    seeded `GameRng` or a `ScriptedRng` reproduces any game exactly.
//!
//! 3. **Moves Never Fail**: An illegal move is `MoveOutcome::Ignored`,
//!    not an error. Only configuration can be rejected.
//!
//! ## Modules
//!
//! - `core`: RNG, grid, viewport sizing, configuration errors
//! - `rules`: `Engine` trait shared by every game
//! - `games`: the six engines
//! - `input`: keyboard and swipe adapter
//! - `leaderboard`: score submission records and sink trait
//! - `session`: restart, clock, history and once-only submission

pub mod core;
pub mod games;
pub mod input;
pub mod leaderboard;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameKind, GameRng, GameRngState, Grid, RandomSource, ScriptedRng, SizeTier,
    Viewport, ViewportConfig,
};

pub use crate::rules::{Engine, FinalScore, GameStatus, MoveOutcome};

pub use crate::games::game2048::{Direction, Game2048, Game2048Config};
pub use crate::games::memory::{Memory, MemoryConfig, MemoryMove, ShufflePolicy};
pub use crate::games::minesweeper::{Minesweeper, MinesweeperConfig, MinesweeperMove};
pub use crate::games::quiz::{Question, Quiz, QuizConfig, QuizMove};
pub use crate::games::sudoku::{CheckResult, Sudoku, SudokuConfig, SudokuMove};
pub use crate::games::tetris::{Tetris, TetrisConfig, TetrisMove};

pub use crate::input::{Gesture, InputMap, Key, Swipe};

pub use crate::leaderboard::{LeaderboardSink, ScoreSubmission, SubmitError};

pub use crate::session::{GameSession, MoveRecord, SubmitStatus};
