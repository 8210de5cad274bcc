//! Game implementations.
//!
//! Each game is an independent engine behind the shared `Engine` trait.
//! None of them knows about the others.

pub mod game2048;
pub mod memory;
pub mod minesweeper;
pub mod quiz;
pub mod sudoku;
pub mod tetris;
