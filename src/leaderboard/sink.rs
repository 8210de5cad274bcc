//! Where finished scores go.

use super::submission::ScoreSubmission;

/// Failure reported by a leaderboard backend.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("leaderboard unreachable: {0}")]
    Unavailable(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Destination for finished-game scores.
///
/// Implemented by the transport layer. Sessions call it at most once per
/// finished game and never retry.
pub trait LeaderboardSink {
    fn submit_score(&mut self, submission: &ScoreSubmission) -> Result<(), SubmitError>;
}

impl<F> LeaderboardSink for F
where
    F: FnMut(&ScoreSubmission) -> Result<(), SubmitError>,
{
    fn submit_score(&mut self, submission: &ScoreSubmission) -> Result<(), SubmitError> {
        self(submission)
    }
}

/// Discards every submission.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl LeaderboardSink for NullSink {
    fn submit_score(&mut self, _submission: &ScoreSubmission) -> Result<(), SubmitError> {
        Ok(())
    }
}

/// Keeps accepted submissions in memory, optionally failing every call.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    accepted: Vec<ScoreSubmission>,
    attempts: usize,
    failure: Option<SubmitError>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: SubmitError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn accepted(&self) -> &[ScoreSubmission] {
        &self.accepted
    }

    /// Calls received, successful or not.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl LeaderboardSink for RecordingSink {
    fn submit_score(&mut self, submission: &ScoreSubmission) -> Result<(), SubmitError> {
        self.attempts += 1;
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.accepted.push(submission.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameKind;
    use crate::rules::FinalScore;

    fn submission() -> ScoreSubmission {
        ScoreSubmission::new(GameKind::Sudoku, "bo", &FinalScore::new(10), 4)
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        sink.submit_score(&submission()).unwrap();
        assert_eq!(sink.attempts(), 1);
        assert_eq!(sink.accepted(), &[submission()]);
    }

    #[test]
    fn test_failing_sink_counts_attempts() {
        let mut sink = RecordingSink::failing(SubmitError::Unavailable("offline".into()));
        let err = sink.submit_score(&submission()).unwrap_err();
        assert_eq!(err.to_string(), "leaderboard unreachable: offline");
        assert_eq!(sink.attempts(), 1);
        assert!(sink.accepted().is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        let mut sink = |s: &ScoreSubmission| {
            seen.push(s.score);
            Ok::<(), SubmitError>(())
        };
        sink.submit_score(&submission()).unwrap();
        assert_eq!(seen, vec![10]);
    }
}
