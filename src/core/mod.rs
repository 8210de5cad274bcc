//! Core engine types: grids, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every game.
//! Nothing here knows about a particular game's rules.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{
    GameKind, SizeTier, Viewport, ViewportConfig, BOARD_BREAKPOINT_PX, MEMORY_BREAKPOINT_PX,
};
pub use error::ConfigError;
pub use grid::Grid;
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
