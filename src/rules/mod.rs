//! Engine trait for game implementations.
//!
//! Games implement `Engine` to define:
//! - Board generation
//! - How moves modify state
//! - Win/loss conditions
//!
//! Sessions call into `Engine` but never interpret game-specific
//! concepts directly.

pub mod engine;

pub use engine::{Engine, FinalScore, GameStatus, MoveOutcome};
