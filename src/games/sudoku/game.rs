use serde::{Deserialize, Serialize};

use crate::core::{
    ConfigError, GameKind, GameRng, Grid, RandomSource, SizeTier, Viewport, ViewportConfig,
    BOARD_BREAKPOINT_PX,
};
use crate::rules::{Engine, FinalScore, GameStatus, MoveOutcome};

const POINTS_PER_SIZE: u64 = 1000;
const POINTS_PER_SECOND: u64 = 5;
const FIXED_PROBABILITY: f64 = 0.5;

/// Cyclic Latin square: `((row + col) mod size) + 1`.
#[must_use]
pub fn latin_square(size: usize) -> Grid<u8> {
    Grid::from_fn(size, size, |row, col| ((row + col) % size + 1) as u8)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SudokuCell {
    pub value: Option<u8>,
    /// Given at generation; never editable.
    pub is_fixed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckResult {
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SudokuMove {
    Set { row: usize, col: usize, value: u8 },
    Clear { row: usize, col: usize },
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuConfig {
    pub size: usize,
}

impl Default for SudokuConfig {
    fn default() -> Self {
        Self { size: 8 }
    }
}

impl SudokuConfig {
    pub const MIN_SIZE: usize = 2;
    pub const MAX_SIZE: usize = 9;

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange {
                game: "Sudoku",
                size: self.size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        Ok(())
    }
}

impl ViewportConfig for SudokuConfig {
    fn for_viewport(viewport: Viewport) -> Self {
        let size = match viewport.tier(BOARD_BREAKPOINT_PX) {
            SizeTier::Narrow => 4,
            SizeTier::Wide => 8,
        };
        Self { size }
    }
}

/// Sudoku game state.
///
/// Givens are consistent with the stored solution and nothing else; there
/// is no uniqueness guarantee and rows may repeat values once filled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sudoku {
    board: Grid<SudokuCell>,
    solution: Grid<u8>,
    status: GameStatus,
    last_check: Option<CheckResult>,
}

impl Sudoku {
    /// Fix each cell independently with probability one half, row-major.
    pub fn generate_with<R: RandomSource>(
        config: SudokuConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mask = Grid::from_fn(config.size, config.size, |_, _| rng.chance(FIXED_PROBABILITY));
        let game = Self::from_mask(&mask)?;
        log::debug!(
            "sudoku: new {0}x{0} board with {1} givens",
            config.size,
            mask.iter().filter(|&&fixed| fixed).count()
        );
        Ok(game)
    }

    /// Build a board whose givens are exactly the `true` cells of `mask`.
    pub fn from_mask(mask: &Grid<bool>) -> Result<Self, ConfigError> {
        if mask.rows() != mask.cols() {
            return Err(ConfigError::NotSquare {
                rows: mask.rows(),
                cols: mask.cols(),
            });
        }
        let size = mask.rows();
        SudokuConfig { size }.validate()?;

        let solution = latin_square(size);
        let board = Grid::from_fn(size, size, |row, col| {
            let is_fixed = mask[(row, col)];
            SudokuCell {
                value: is_fixed.then_some(solution[(row, col)]),
                is_fixed,
            }
        });

        Ok(Self {
            board,
            solution,
            status: GameStatus::InProgress,
            last_check: None,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Grid<SudokuCell> {
        &self.board
    }

    #[must_use]
    pub fn solution(&self) -> &Grid<u8> {
        &self.solution
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.rows()
    }

    /// Result of the most recent check since the last edit.
    #[must_use]
    pub fn last_check(&self) -> Option<CheckResult> {
        self.last_check
    }

    fn editable(&self, row: usize, col: usize) -> bool {
        !self.is_terminal() && self.board.get(row, col).is_some_and(|c| !c.is_fixed)
    }

    /// Write `value` into a non-fixed cell. Values outside `1..=size` are ignored.
    pub fn set_value(&mut self, row: usize, col: usize, value: u8) -> MoveOutcome {
        let in_range = (1..=self.size()).contains(&usize::from(value));
        if !in_range || !self.editable(row, col) {
            return MoveOutcome::Ignored;
        }
        self.write(row, col, Some(value))
    }

    pub fn clear_value(&mut self, row: usize, col: usize) -> MoveOutcome {
        if !self.editable(row, col) {
            return MoveOutcome::Ignored;
        }
        self.write(row, col, None)
    }

    fn write(&mut self, row: usize, col: usize, value: Option<u8>) -> MoveOutcome {
        let cell = &mut self.board[(row, col)];
        if cell.value == value {
            return MoveOutcome::Ignored;
        }
        cell.value = value;
        self.last_check = None;
        MoveOutcome::Applied
    }

    /// Compare every non-fixed cell to the solution. `Correct` wins the game.
    pub fn check(&mut self) -> CheckResult {
        let correct = self
            .board
            .iter()
            .zip(self.solution.iter())
            .all(|(cell, &expected)| cell.is_fixed || cell.value == Some(expected));

        let result = if correct {
            CheckResult::Correct
        } else {
            CheckResult::Incorrect
        };
        if correct && !self.is_terminal() {
            log::info!("sudoku: solved {0}x{0} board", self.size());
            self.status = GameStatus::Won;
        }
        self.last_check = Some(result);
        result
    }
}

impl Engine for Sudoku {
    type Config = SudokuConfig;
    type Move = SudokuMove;
    type Rng = GameRng;

    fn generate(config: SudokuConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        Self::generate_with(config, &mut rng)
    }

    fn kind(&self) -> GameKind {
        GameKind::Sudoku
    }

    fn apply_move(&mut self, mv: SudokuMove) -> MoveOutcome {
        match mv {
            SudokuMove::Set { row, col, value } => self.set_value(row, col, value),
            SudokuMove::Clear { row, col } => self.clear_value(row, col),
            SudokuMove::Check if self.is_terminal() => MoveOutcome::Ignored,
            SudokuMove::Check => {
                self.check();
                MoveOutcome::Applied
            }
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    /// Progress: player-filled cells.
    fn score(&self) -> u64 {
        self.board
            .iter()
            .filter(|c| !c.is_fixed && c.value.is_some())
            .count() as u64
    }

    fn final_score(&self, elapsed_secs: u64) -> Option<FinalScore> {
        if self.status != GameStatus::Won {
            return None;
        }
        let size = self.size() as u64;
        let score = (size * POINTS_PER_SIZE)
            .saturating_sub(elapsed_secs.saturating_mul(POINTS_PER_SECOND));
        Some(FinalScore::new(score).with_extra("boardSize", size))
    }
}
