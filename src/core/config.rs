//! Shared configuration types.
//!
//! Board dimensions are picked from an external viewport-width signal at
//! generation time:
//! - `Viewport`: the pixel width reported by the presentation layer
//! - `SizeTier`: narrow or wide, relative to a per-game threshold
//! - `ViewportConfig`: implemented by engine configs that derive their size
//!   from the viewport
//!
//! Engines never read the viewport mid-game. A tier change is handled by
//! the session as a full regeneration.

use serde::{Deserialize, Serialize};

/// Width threshold for Minesweeper, Sudoku and 2048.
pub const BOARD_BREAKPOINT_PX: u32 = 600;

/// Width threshold for Memory.
pub const MEMORY_BREAKPOINT_PX: u32 = 768;

/// Identifies a game for logging and leaderboard submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Tetris,
    Game2048,
    Minesweeper,
    Sudoku,
    Memory,
    Quiz,
}

impl GameKind {
    /// Every game, in home-screen order.
    pub const ALL: [GameKind; 6] = [
        GameKind::Memory,
        GameKind::Tetris,
        GameKind::Game2048,
        GameKind::Sudoku,
        GameKind::Minesweeper,
        GameKind::Quiz,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::Tetris => "Tetris",
            GameKind::Game2048 => "2048",
            GameKind::Minesweeper => "Minesweeper",
            GameKind::Sudoku => "Sudoku",
            GameKind::Memory => "Memory",
            GameKind::Quiz => "Quiz",
        }
    }

    /// Key the leaderboard service files scores under.
    #[must_use]
    pub const fn leaderboard_key(self) -> &'static str {
        match self {
            GameKind::Game2048 => "Twogame",
            other => other.name(),
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Narrow or wide layout relative to some breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    Narrow,
    Wide,
}

/// Viewport width reported by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: u32,
}

impl Viewport {
    /// Create a viewport signal.
    #[must_use]
    pub const fn new(width_px: u32) -> Self {
        Self { width_px }
    }

    /// Narrow when strictly below `breakpoint`.
    #[must_use]
    pub const fn tier(self, breakpoint: u32) -> SizeTier {
        if self.width_px < breakpoint {
            SizeTier::Narrow
        } else {
            SizeTier::Wide
        }
    }

    /// Wide only when strictly above `breakpoint`.
    ///
    /// 2048 treats a width exactly at the breakpoint as narrow while the
    /// other games treat it as wide.
    #[must_use]
    pub const fn tier_exclusive(self, breakpoint: u32) -> SizeTier {
        if self.width_px > breakpoint {
            SizeTier::Wide
        } else {
            SizeTier::Narrow
        }
    }
}

/// Engine configuration derivable from the viewport.
pub trait ViewportConfig: Sized {
    /// The configuration a fresh game would use at this width.
    fn for_viewport(viewport: Viewport) -> Self;
}
