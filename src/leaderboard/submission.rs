//! Wire records exchanged with the leaderboard service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::GameKind;
use crate::rules::FinalScore;

/// Name recorded when the player never set one.
pub const ANONYMOUS: &str = "Anonymous";

/// One finished game, as posted to the leaderboard.
///
/// Serialises flat: game-specific extras such as `boardSize` sit beside
/// the common fields rather than under a nested key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub game: String,
    pub username: String,
    pub score: u64,
    /// Elapsed seconds.
    pub time: u64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, u64>,
}

impl ScoreSubmission {
    #[must_use]
    pub fn new(kind: GameKind, username: &str, final_score: &FinalScore, time: u64) -> Self {
        let username = match username.trim() {
            "" => ANONYMOUS.to_string(),
            name => name.to_string(),
        };
        Self {
            game: kind.leaderboard_key().to_string(),
            username,
            score: final_score.score,
            time,
            extra: final_score
                .extra
                .iter()
                .map(|&(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

/// A ranked row returned by the leaderboard service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u64,
    pub time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_tile: Option<u64>,
}

impl LeaderboardEntry {
    /// Value for the game-specific column, if the game has one.
    #[must_use]
    pub fn detail(&self, kind: GameKind) -> Option<String> {
        match kind {
            GameKind::Game2048 => self.highest_tile.map(|tile| tile.to_string()),
            GameKind::Sudoku | GameKind::Minesweeper => {
                self.board_size.map(|size| format!("{size}x{size}"))
            }
            GameKind::Quiz => self
                .total_questions
                .map(|total| format!("{}/{}", self.score, total)),
            GameKind::Tetris | GameKind::Memory => None,
        }
    }
}

/// Header for the game-specific leaderboard column.
#[must_use]
pub fn detail_header(kind: GameKind) -> Option<&'static str> {
    match kind {
        GameKind::Game2048 => Some("Highest Tile"),
        GameKind::Sudoku | GameKind::Minesweeper => Some("Board Size"),
        GameKind::Quiz => Some("Questions"),
        GameKind::Tetris | GameKind::Memory => None,
    }
}

/// `MM:SS`, minutes unbounded.
#[must_use]
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
