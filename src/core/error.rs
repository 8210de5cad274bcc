//! Configuration errors reported at generation time.
//!
//! Moves never error: an illegal move is a no-op reported as
//! `MoveOutcome::Ignored`. Only asking for a board the engines cannot
//! build is surfaced to the caller.

/// A generation request the engine cannot satisfy.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{game} board size {size} outside supported range {min}..={max}")]
    SizeOutOfRange {
        game: &'static str,
        size: usize,
        min: usize,
        max: usize,
    },
    #[error("memory deck needs between {min} and {max} pairs, got {requested}")]
    PairCount {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error("grid rows have differing lengths")]
    RaggedGrid,
    #[error("grid must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("tile value {0} is not zero or a power of two")]
    InvalidTile(u32),
    #[error("mine position ({row}, {col}) outside a {size}x{size} board")]
    MineOutOfBounds { row: usize, col: usize, size: usize },
    #[error("quiz needs at least one question")]
    EmptyQuiz,
    #[error("question {question} answer {answer} out of range for {options} options")]
    InvalidAnswer {
        question: usize,
        answer: usize,
        options: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::SizeOutOfRange {
            game: "Minesweeper",
            size: 40,
            min: 2,
            max: 32,
        };
        assert_eq!(
            err.to_string(),
            "Minesweeper board size 40 outside supported range 2..=32"
        );

        let err = ConfigError::InvalidAnswer {
            question: 1,
            answer: 4,
            options: 4,
        };
        assert_eq!(
            err.to_string(),
            "question 1 answer 4 out of range for 4 options"
        );
    }
}
