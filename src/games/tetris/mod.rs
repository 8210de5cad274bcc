//! Tetris: a 20x10 falling-piece board.
//!
//! - Seven fixed tetrominoes, picked uniformly at random
//! - Left/right shifts and clockwise rotation, rejected on collision
//!   (no wall kicks)
//! - Soft drop / gravity tick locks the piece when blocked, clears full
//!   rows and spawns the next piece
//! - Score `lines * 100 * 2^(lines - 1)` per lock; the drop interval speeds
//!   up by 100ms every 1000 points, floored at 100ms

mod game;
mod piece;

pub use game::{
    drop_interval_ms, line_clear_score, ActivePiece, Tetris, TetrisConfig, TetrisMove, COLS, ROWS,
};
pub use piece::{Color, Shape, Tetromino};
