//! Falling-piece engine.

use serde::{Deserialize, Serialize};

use super::piece::{Color, Shape, Tetromino};
use crate::core::{ConfigError, GameKind, GameRng, Grid, RandomSource, Viewport, ViewportConfig};
use crate::rules::{Engine, FinalScore, GameStatus, MoveOutcome};

/// Standard playfield height.
pub const ROWS: usize = 20;
/// Standard playfield width.
pub const COLS: usize = 10;

const POINTS_PER_LINE: u64 = 100;
const BASE_DROP_INTERVAL_MS: u64 = 1000;
const MIN_DROP_INTERVAL_MS: u64 = 100;
const SPEEDUP_STEP_MS: u64 = 100;
const POINTS_PER_SPEEDUP: u64 = 1000;

/// Points for clearing `lines` rows in one lock.
///
/// `lines * 100 * 2^(lines - 1)`: 100, 400, 1200, 3200.
#[must_use]
pub fn line_clear_score(lines: u32) -> u64 {
    if lines == 0 {
        return 0;
    }
    u64::from(lines) * POINTS_PER_LINE * (1u64 << (lines - 1))
}

/// Gravity interval for a given score. Never increases as score grows.
#[must_use]
pub fn drop_interval_ms(score: u64) -> u64 {
    let speedup = (score / POINTS_PER_SPEEDUP).saturating_mul(SPEEDUP_STEP_MS);
    BASE_DROP_INTERVAL_MS
        .saturating_sub(speedup)
        .max(MIN_DROP_INTERVAL_MS)
}

/// Player intents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TetrisMove {
    Left,
    Right,
    Rotate,
    /// One row down; locks the piece when blocked. Same as a gravity tick.
    SoftDrop,
}

/// Playfield dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TetrisConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for TetrisConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl TetrisConfig {
    pub const MIN_SIZE: usize = 4;
    pub const MAX_ROWS: usize = 40;
    pub const MAX_COLS: usize = 20;

    /// Reject playfields too small for a tetromino or absurdly large.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_SIZE..=Self::MAX_ROWS).contains(&self.rows) {
            return Err(ConfigError::SizeOutOfRange {
                game: "Tetris",
                size: self.rows,
                min: Self::MIN_SIZE,
                max: Self::MAX_ROWS,
            });
        }
        if !(Self::MIN_SIZE..=Self::MAX_COLS).contains(&self.cols) {
            return Err(ConfigError::SizeOutOfRange {
                game: "Tetris",
                size: self.cols,
                min: Self::MIN_SIZE,
                max: Self::MAX_COLS,
            });
        }
        Ok(())
    }
}

impl ViewportConfig for TetrisConfig {
    fn for_viewport(_viewport: Viewport) -> Self {
        Self::default()
    }
}

/// The falling piece and its top-left position.
///
/// `y` may be negative only in principle; spawned pieces start at row 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePiece {
    pub kind: Tetromino,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Horizontally centred at the top row.
    #[must_use]
    pub fn spawn(kind: Tetromino, cols: usize) -> Self {
        let shape = kind.shape();
        let x = (cols / 2) as i32 - shape.width().div_ceil(2) as i32;
        Self { kind, shape, x, y: 0 }
    }

    /// Absolute `(row, col)` of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c)| (self.y + r as i32, self.x + c as i32))
    }

    fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..self.clone()
        }
    }
}

/// Tetris game state.
#[derive(Clone, Debug)]
pub struct Tetris<R = GameRng> {
    board: Grid<Option<Color>>,
    active: ActivePiece,
    score: u64,
    lines_cleared: u64,
    pieces_locked: u64,
    last_clear: u32,
    drop_interval_ms: u64,
    status: GameStatus,
    rng: R,
}

impl<R: RandomSource> Tetris<R> {
    /// Start from a pre-filled board (fixtures, puzzles).
    pub fn with_board(board: Grid<Option<Color>>, rng: R) -> Result<Self, ConfigError> {
        TetrisConfig {
            rows: board.rows(),
            cols: board.cols(),
        }
        .validate()?;

        let cols = board.cols();
        let mut game = Self {
            board,
            active: ActivePiece::spawn(Tetromino::O, cols),
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            last_clear: 0,
            drop_interval_ms: BASE_DROP_INTERVAL_MS,
            status: GameStatus::InProgress,
            rng,
        };
        game.spawn();
        Ok(game)
    }

    /// Locked cells, without the active piece.
    #[must_use]
    pub fn board(&self) -> &Grid<Option<Color>> {
        &self.board
    }

    #[must_use]
    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    #[must_use]
    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    #[must_use]
    pub fn pieces_locked(&self) -> u64 {
        self.pieces_locked
    }

    /// Rows cleared by the most recent lock.
    #[must_use]
    pub fn last_clear(&self) -> u32 {
        self.last_clear
    }

    /// Current gravity interval for the presentation timer.
    #[must_use]
    pub fn drop_interval_ms(&self) -> u64 {
        self.drop_interval_ms
    }

    /// Board with the active piece composed on top.
    #[must_use]
    pub fn render(&self) -> Grid<Option<Color>> {
        let mut view = self.board.clone();
        let color = self.active.kind.color();
        for (row, col) in self.active.cells() {
            if row >= 0 && col >= 0 {
                if let Some(cell) = view.get_mut(row as usize, col as usize) {
                    *cell = Some(color);
                }
            }
        }
        view
    }

    /// Gravity step. Identical to a soft drop.
    pub fn tick(&mut self) -> MoveOutcome {
        self.apply_move(TetrisMove::SoftDrop)
    }

    /// Check whether a candidate placement is illegal.
    ///
    /// Cells outside the side walls or at/below the floor collide; cells
    /// above the top are free; on-board cells collide when occupied.
    #[must_use]
    pub fn collides(&self, piece: &ActivePiece) -> bool {
        let rows = self.board.rows() as i32;
        let cols = self.board.cols() as i32;
        piece.cells().any(|(row, col)| {
            if col < 0 || col >= cols || row >= rows {
                return true;
            }
            row >= 0 && self.board[(row as usize, col as usize)].is_some()
        })
    }

    fn spawn(&mut self) {
        let kind = Tetromino::ALL[self.rng.below(Tetromino::ALL.len())];
        self.active = ActivePiece::spawn(kind, self.board.cols());
        if self.collides(&self.active) {
            log::info!("tetris: spawn blocked, game over at score {}", self.score);
            self.status = GameStatus::Lost;
        }
    }

    fn try_place(&mut self, candidate: ActivePiece) -> MoveOutcome {
        if self.collides(&candidate) {
            return MoveOutcome::Ignored;
        }
        self.active = candidate;
        MoveOutcome::Applied
    }

    fn step_down(&mut self) -> MoveOutcome {
        let candidate = self.active.shifted(0, 1);
        if !self.collides(&candidate) {
            self.active = candidate;
        } else {
            self.lock();
        }
        MoveOutcome::Applied
    }

    fn lock(&mut self) {
        if self.active.cells().any(|(row, _)| row < 0) {
            log::info!("tetris: piece locked above the top, game over at score {}", self.score);
            self.status = GameStatus::Lost;
            return;
        }

        let color = self.active.kind.color();
        let cells: Vec<_> = self.active.cells().collect();
        for (row, col) in cells {
            self.board[(row as usize, col as usize)] = Some(color);
        }
        self.pieces_locked += 1;

        let cleared = self.clear_full_rows();
        self.last_clear = cleared;
        if cleared > 0 {
            self.lines_cleared += u64::from(cleared);
            self.score += line_clear_score(cleared);
            self.drop_interval_ms = drop_interval_ms(self.score);
            log::debug!(
                "tetris: cleared {} rows, score {}, interval {}ms",
                cleared,
                self.score,
                self.drop_interval_ms
            );
        }

        self.spawn();
    }

    fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for row in 0..self.board.rows() {
            if self.board.row(row).iter().all(Option::is_some) {
                self.board.collapse_row(row, None);
                cleared += 1;
            }
        }
        cleared
    }
}

impl<R: RandomSource> Engine for Tetris<R> {
    type Config = TetrisConfig;
    type Move = TetrisMove;
    type Rng = R;

    fn generate(config: TetrisConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!("tetris: new {}x{} game", config.rows, config.cols);
        Self::with_board(Grid::new(config.rows, config.cols, None), rng)
    }

    fn kind(&self) -> GameKind {
        GameKind::Tetris
    }

    fn apply_move(&mut self, mv: TetrisMove) -> MoveOutcome {
        if self.is_terminal() {
            return MoveOutcome::Ignored;
        }
        match mv {
            TetrisMove::Left => self.try_place(self.active.shifted(-1, 0)),
            TetrisMove::Right => self.try_place(self.active.shifted(1, 0)),
            TetrisMove::Rotate => self.try_place(self.active.rotated()),
            TetrisMove::SoftDrop => self.step_down(),
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn final_score(&self, _elapsed_secs: u64) -> Option<FinalScore> {
        (self.status == GameStatus::Lost && self.score > 0).then(|| FinalScore::new(self.score))
    }
}
