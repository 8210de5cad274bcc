//! Sliding-tile engine.

use serde::{Deserialize, Serialize};

use super::slide::{slide_left, Tile};
use crate::core::{
    ConfigError, GameKind, GameRng, Grid, RandomSource, SizeTier, Viewport, ViewportConfig,
    BOARD_BREAKPOINT_PX,
};
use crate::rules::{Engine, FinalScore, GameStatus, MoveOutcome};

/// Probability that a spawned tile is a 2 rather than a 4.
const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Tiles placed on a fresh grid.
const INITIAL_TILES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Grid size. Narrow viewports get 4x4, wide ones 5x5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game2048Config {
    pub size: usize,
}

impl Default for Game2048Config {
    fn default() -> Self {
        Self { size: 4 }
    }
}

impl Game2048Config {
    pub const MIN_SIZE: usize = 2;
    pub const MAX_SIZE: usize = 8;

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange {
                game: "2048",
                size: self.size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        Ok(())
    }
}

impl ViewportConfig for Game2048Config {
    fn for_viewport(viewport: Viewport) -> Self {
        let size = match viewport.tier_exclusive(BOARD_BREAKPOINT_PX) {
            SizeTier::Narrow => 4,
            SizeTier::Wide => 5,
        };
        Self { size }
    }
}

/// True when no cell is empty and no horizontal or vertical neighbours can merge.
#[must_use]
pub fn is_stuck(grid: &Grid<Tile>) -> bool {
    for ((row, col), tile) in grid.enumerate() {
        if tile.is_empty() {
            return false;
        }
        let mergeable = |t: &Tile| tile.merged_with(*t).is_some();
        if grid.get(row + 1, col).is_some_and(mergeable) || grid.get(row, col + 1).is_some_and(mergeable) {
            return false;
        }
    }
    true
}

fn slide_rows(grid: &mut Grid<Tile>) {
    for row in 0..grid.rows() {
        let slid = slide_left(grid.row(row));
        grid.row_mut(row).copy_from_slice(&slid);
    }
}

/// The grid `direction` would produce, before any spawn.
#[must_use]
pub fn slide(grid: &Grid<Tile>, direction: Direction) -> Grid<Tile> {
    match direction {
        Direction::Left => {
            let mut out = grid.clone();
            slide_rows(&mut out);
            out
        }
        Direction::Right => {
            let mut out = grid.clone();
            out.mirror();
            slide_rows(&mut out);
            out.mirror();
            out
        }
        Direction::Up => slide(&grid.transpose(), Direction::Left).transpose(),
        Direction::Down => slide(&grid.transpose(), Direction::Right).transpose(),
    }
}

fn same_values(a: &Grid<Tile>, b: &Grid<Tile>) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.value == y.value)
}

/// 2048 game state.
#[derive(Clone, Debug)]
pub struct Game2048<R = GameRng> {
    grid: Grid<Tile>,
    score: u64,
    turns: u64,
    status: GameStatus,
    rng: R,
}

impl<R: RandomSource> Game2048<R> {
    /// Start from an explicit grid. No tiles are spawned.
    pub fn from_grid(grid: Grid<Tile>, rng: R) -> Result<Self, ConfigError> {
        if grid.rows() != grid.cols() {
            return Err(ConfigError::NotSquare {
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        Game2048Config { size: grid.rows() }.validate()?;
        if let Some(bad) = grid
            .iter()
            .find(|t| t.value != 0 && !t.value.is_power_of_two())
        {
            return Err(ConfigError::InvalidTile(bad.value));
        }

        let status = if is_stuck(&grid) {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        let mut game = Self {
            grid,
            score: 0,
            turns: 0,
            status,
            rng,
        };
        game.score = game.tile_sum();
        Ok(game)
    }

    /// Start from rows of raw values.
    pub fn from_values(rows: Vec<Vec<u32>>, rng: R) -> Result<Self, ConfigError> {
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(Tile::new).collect())
            .collect();
        Self::from_grid(Grid::from_rows(rows)?, rng)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<Tile> {
        &self.grid
    }

    /// Tile values as nested rows.
    #[must_use]
    pub fn values(&self) -> Vec<Vec<u32>> {
        self.grid
            .iter_rows()
            .map(|row| row.iter().map(|t| t.value).collect())
            .collect()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.rows()
    }

    /// Moves that changed the grid.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.grid.iter().map(|t| t.value).max().unwrap_or(0)
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Drop the cosmetic merge markers. Returns whether any were set.
    pub fn clear_merge_flags(&mut self) -> bool {
        let mut cleared = false;
        for tile in self.grid.iter_mut() {
            cleared |= tile.just_merged;
            tile.just_merged = false;
        }
        cleared
    }

    fn tile_sum(&self) -> u64 {
        self.grid.iter().map(|t| u64::from(t.value)).sum()
    }

    /// Place a 2 (90%) or 4 at a uniformly chosen empty cell.
    fn spawn_tile(&mut self) -> bool {
        let empties: Vec<(usize, usize)> = self
            .grid
            .enumerate()
            .filter(|(_, t)| t.is_empty())
            .map(|(pos, _)| pos)
            .collect();
        if empties.is_empty() {
            return false;
        }

        let pos = empties[self.rng.below(empties.len())];
        let value = if self.rng.chance(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };
        self.grid[pos] = Tile::new(value);
        true
    }
}

impl<R: RandomSource> Engine for Game2048<R> {
    type Config = Game2048Config;
    type Move = Direction;
    type Rng = R;

    fn generate(config: Game2048Config, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self::from_grid(Grid::new(config.size, config.size, Tile::EMPTY), rng)?;
        for _ in 0..INITIAL_TILES {
            game.spawn_tile();
        }
        game.score = game.tile_sum();
        log::debug!("2048: new {0}x{0} game", config.size);
        Ok(game)
    }

    fn kind(&self) -> GameKind {
        GameKind::Game2048
    }

    fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_terminal() {
            return MoveOutcome::Ignored;
        }

        let mut start = self.grid.clone();
        for tile in start.iter_mut() {
            tile.just_merged = false;
        }
        let candidate = slide(&start, direction);
        if same_values(&candidate, &self.grid) {
            return MoveOutcome::Ignored;
        }

        self.grid = candidate;
        self.spawn_tile();
        self.turns += 1;
        self.score = self.tile_sum();

        if is_stuck(&self.grid) {
            log::info!("2048: no moves left after {} turns, score {}", self.turns, self.score);
            self.status = GameStatus::Lost;
        }
        MoveOutcome::Applied
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn final_score(&self, _elapsed_secs: u64) -> Option<FinalScore> {
        (self.status == GameStatus::Lost && self.score > 0).then(|| {
            FinalScore::new(self.score).with_extra("highestTile", u64::from(self.max_tile()))
        })
    }
}
