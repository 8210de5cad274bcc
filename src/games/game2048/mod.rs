//! 2048: slide and merge power-of-two tiles on an NxN grid.
//!
//! Every direction reduces to `slide_left` via mirroring and transposition.
//! A move that leaves every value in place is a no-op: no tile spawns and
//! no turn is consumed. The game is lost once the grid is full with no
//! equal neighbours; there is no win state.

mod game;
mod slide;

pub use game::{is_stuck, slide, Direction, Game2048, Game2048Config};
pub use slide::{slide_left, Tile};
