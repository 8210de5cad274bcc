//! Latin-square Sudoku.
//!
//! The solution is the cyclic square `((i + j) mod N) + 1`. Generation
//! keeps each cell as a given with probability one half and blanks the
//! rest. A `Check` compares every player cell to that solution.

mod game;

pub use game::{latin_square, CheckResult, Sudoku, SudokuCell, SudokuConfig, SudokuMove};
