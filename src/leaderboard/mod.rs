//! Leaderboard boundary.
//!
//! The crate never talks to the network. A finished session builds a
//! `ScoreSubmission` from its engine's final score and hands it to a
//! caller-supplied `LeaderboardSink`.

mod sink;
mod submission;

pub use sink::{LeaderboardSink, NullSink, RecordingSink, SubmitError};
pub use submission::{
    detail_header, format_time, LeaderboardEntry, ScoreSubmission, ANONYMOUS,
};
