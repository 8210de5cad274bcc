//! Multiple-choice quiz over a caller-supplied question set.
//!
//! Answers may be changed freely until `Submit`, which grades every
//! question at once and ends the game.

mod game;

pub use game::{Feedback, Question, Quiz, QuizConfig, QuizMove, Rating};
