//! Mine placement, flood reveal and flagging.

use serde::{Deserialize, Serialize};

use crate::core::{
    ConfigError, GameKind, GameRng, Grid, RandomSource, SizeTier, Viewport, ViewportConfig,
    BOARD_BREAKPOINT_PX,
};
use crate::rules::{Engine, FinalScore, GameStatus, MoveOutcome};

/// Points per board cell before the time deduction.
const POINTS_PER_CELL: u64 = 100;
/// Points lost per elapsed second.
const POINTS_PER_SECOND: u64 = 10;

/// `floor(size² × 0.2)`, never covering the whole board.
#[must_use]
pub fn mine_count(size: usize) -> usize {
    let total = size * size;
    (total / 5).min(total.saturating_sub(1))
}

/// One square of the minefield.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Mines among the up-to-8 neighbours. Fixed at generation.
    pub adjacent_mines: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinesweeperMove {
    Reveal { row: usize, col: usize },
    ToggleFlag { row: usize, col: usize },
}

/// Board edge length. Narrow viewports get 4x4, wide ones 8x8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinesweeperConfig {
    pub size: usize,
}

impl Default for MinesweeperConfig {
    fn default() -> Self {
        Self { size: 8 }
    }
}

impl MinesweeperConfig {
    pub const MIN_SIZE: usize = 2;
    pub const MAX_SIZE: usize = 32;

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange {
                game: "Minesweeper",
                size: self.size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        Ok(())
    }
}

impl ViewportConfig for MinesweeperConfig {
    fn for_viewport(viewport: Viewport) -> Self {
        let size = match viewport.tier(BOARD_BREAKPOINT_PX) {
            SizeTier::Narrow => 4,
            SizeTier::Wide => 8,
        };
        Self { size }
    }
}

/// Minesweeper game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minesweeper {
    board: Grid<Cell>,
    mine_count: usize,
    flags_placed: usize,
    status: GameStatus,
}

impl Minesweeper {
    /// Place mines uniformly at random without replacement.
    ///
    /// A partial Fisher-Yates over the cell indices: draw `i` picks among
    /// the `total - i` cells not yet mined, so exactly one sample is drawn
    /// per mine whatever the source returns.
    pub fn generate_with<R: RandomSource>(
        config: MinesweeperConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let total = config.size * config.size;
        let wanted = mine_count(config.size);
        let mut cells: Vec<usize> = (0..total).collect();
        for i in 0..wanted {
            let j = i + rng.below(total - i);
            cells.swap(i, j);
        }
        let mut mines = vec![false; total];
        for &idx in &cells[..wanted] {
            mines[idx] = true;
        }

        log::debug!("minesweeper: new {0}x{0} board with {1} mines", config.size, wanted);
        Ok(Self::build(config.size, &mines))
    }

    /// Build a board with mines at exactly the given positions.
    pub fn from_mines(size: usize, positions: &[(usize, usize)]) -> Result<Self, ConfigError> {
        MinesweeperConfig { size }.validate()?;

        let mut mines = vec![false; size * size];
        for &(row, col) in positions {
            if row >= size || col >= size {
                return Err(ConfigError::MineOutOfBounds { row, col, size });
            }
            mines[row * size + col] = true;
        }
        Ok(Self::build(size, &mines))
    }

    fn build(size: usize, mines: &[bool]) -> Self {
        let mut board = Grid::from_fn(size, size, |row, col| Cell {
            has_mine: mines[row * size + col],
            ..Cell::default()
        });

        for row in 0..size {
            for col in 0..size {
                if board[(row, col)].has_mine {
                    continue;
                }
                let count = board
                    .neighbours(row, col)
                    .filter(|&pos| board[pos].has_mine)
                    .count();
                board[(row, col)].adjacent_mines = count as u8;
            }
        }

        Self {
            board,
            mine_count: mines.iter().filter(|&&m| m).count(),
            flags_placed: 0,
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Grid<Cell> {
        &self.board
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.rows()
    }

    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    #[must_use]
    pub fn flags_placed(&self) -> usize {
        self.flags_placed
    }

    /// Mines minus flags. Negative when over-flagged.
    #[must_use]
    pub fn mines_remaining(&self) -> i64 {
        self.mine_count as i64 - self.flags_placed as i64
    }

    /// Safe cells uncovered so far.
    #[must_use]
    pub fn revealed_safe_cells(&self) -> usize {
        self.board
            .iter()
            .filter(|c| c.revealed && !c.has_mine)
            .count()
    }

    /// Uncover a cell. A mine loses the game; a zero cell flood-reveals.
    pub fn reveal(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.is_terminal() {
            return MoveOutcome::Ignored;
        }
        match self.board.get(row, col) {
            Some(cell) if !cell.revealed && !cell.flagged => {}
            _ => return MoveOutcome::Ignored,
        }

        if self.board[(row, col)].has_mine {
            for cell in self.board.iter_mut().filter(|c| c.has_mine) {
                cell.revealed = true;
            }
            log::info!("minesweeper: mine hit at ({}, {})", row, col);
            self.status = GameStatus::Lost;
            return MoveOutcome::Applied;
        }

        self.flood_reveal(row, col);

        if self.board.iter().all(|c| c.has_mine || c.revealed) {
            log::info!("minesweeper: board cleared");
            self.status = GameStatus::Won;
        }
        MoveOutcome::Applied
    }

    /// Explicit-stack flood fill. Each cell is revealed at most once.
    fn flood_reveal(&mut self, row: usize, col: usize) {
        let mut stack = vec![(row, col)];
        while let Some(pos) = stack.pop() {
            let cell = &mut self.board[pos];
            if cell.revealed || cell.flagged {
                continue;
            }
            cell.revealed = true;
            if cell.adjacent_mines != 0 || cell.has_mine {
                continue;
            }

            let board = &self.board;
            stack.extend(
                board
                    .neighbours(pos.0, pos.1)
                    .filter(|&n| !board[n].revealed && !board[n].flagged),
            );
        }
    }

    /// Flip the flag on a covered cell.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.is_terminal() {
            return MoveOutcome::Ignored;
        }
        let Some(cell) = self.board.get_mut(row, col) else {
            return MoveOutcome::Ignored;
        };
        if cell.revealed {
            return MoveOutcome::Ignored;
        }

        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flags_placed += 1;
        } else {
            self.flags_placed -= 1;
        }
        MoveOutcome::Applied
    }
}

impl Engine for Minesweeper {
    type Config = MinesweeperConfig;
    type Move = MinesweeperMove;
    type Rng = GameRng;

    fn generate(config: MinesweeperConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        Self::generate_with(config, &mut rng)
    }

    fn kind(&self) -> GameKind {
        GameKind::Minesweeper
    }

    fn apply_move(&mut self, mv: MinesweeperMove) -> MoveOutcome {
        match mv {
            MinesweeperMove::Reveal { row, col } => self.reveal(row, col),
            MinesweeperMove::ToggleFlag { row, col } => self.toggle_flag(row, col),
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    /// Progress: safe cells revealed.
    fn score(&self) -> u64 {
        self.revealed_safe_cells() as u64
    }

    /// `max(0, size² × 100 − seconds × 10)` on a win.
    fn final_score(&self, elapsed_secs: u64) -> Option<FinalScore> {
        if self.status != GameStatus::Won {
            return None;
        }
        let size = self.size() as u64;
        let score = (size * size * POINTS_PER_CELL)
            .saturating_sub(elapsed_secs.saturating_mul(POINTS_PER_SECOND));
        Some(FinalScore::new(score).with_extra("boardSize", size))
    }
}
