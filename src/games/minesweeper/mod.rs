//! Minesweeper on a square board.
//!
//! Mines are placed uniformly without replacement at generation, covering
//! `floor(size² × 0.2)` cells. Revealing a zero cell uncovers its whole
//! connected zero region plus the numbered border. Revealing a mine
//! uncovers every mine and loses; uncovering every safe cell wins.

mod game;

pub use game::{mine_count, Cell, Minesweeper, MinesweeperConfig, MinesweeperMove};
