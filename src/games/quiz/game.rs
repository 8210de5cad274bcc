use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameKind, GameRng};
use crate::rules::{Engine, FinalScore, GameStatus, MoveOutcome};

/// One multiple-choice question. `answer` indexes `options`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: usize,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    #[must_use]
    pub fn expected_option(&self) -> &str {
        self.options.get(self.answer).map_or("", String::as_str)
    }
}

/// Grading of a single question after submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Incorrect { expected: usize },
    Unanswered { expected: usize },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }

    /// Player-facing message for `question`.
    #[must_use]
    pub fn message(self, question: &Question) -> String {
        match self {
            Feedback::Correct => format!("✓ Correct! {}", question.explanation),
            Feedback::Incorrect { .. } => format!(
                "✗ Incorrect. The correct answer is: {}. {}",
                question.expected_option(),
                question.explanation
            ),
            Feedback::Unanswered { .. } => format!(
                "✗ You didn't select an answer. The correct answer is: {}. {}",
                question.expected_option(),
                question.explanation
            ),
        }
    }
}

/// Result band by percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Great,
    Good,
    KeepLearning,
}

impl Rating {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Rating::Excellent,
            70..=89 => Rating::Great,
            50..=69 => Rating::Good,
            _ => Rating::KeepLearning,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rating::Excellent => "Excellent! You're a grammar superstar!",
            Rating::Great => "Great job! You know your grammar well!",
            Rating::Good => "Good effort! Keep practicing!",
            Rating::KeepLearning => "Keep learning! You'll get better with practice!",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizMove {
    Select { question: usize, option: usize },
    Submit,
}

/// Question set supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub questions: Vec<Question>,
}

impl QuizConfig {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.questions.is_empty() {
            return Err(ConfigError::EmptyQuiz);
        }
        for (index, question) in self.questions.iter().enumerate() {
            if question.answer >= question.options.len() {
                return Err(ConfigError::InvalidAnswer {
                    question: index,
                    answer: question.answer,
                    options: question.options.len(),
                });
            }
        }
        Ok(())
    }
}

/// Quiz state: answers are freely changed until submission grades them all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    questions: Vec<Question>,
    answers: Vec<Option<usize>>,
    feedback: Vec<Feedback>,
    correct: u64,
    status: GameStatus,
}

impl Quiz {
    pub fn new(config: QuizConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let answers = vec![None; config.questions.len()];
        log::debug!("quiz: loaded {} questions", config.questions.len());
        Ok(Self {
            questions: config.questions,
            answers,
            feedback: Vec::new(),
            correct: 0,
            status: GameStatus::InProgress,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    /// Per-question grading; empty until submitted.
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn select(&mut self, question: usize, option: usize) -> MoveOutcome {
        if self.is_terminal() {
            return MoveOutcome::Ignored;
        }
        let Some(q) = self.questions.get(question) else {
            return MoveOutcome::Ignored;
        };
        if option >= q.options.len() || self.answers[question] == Some(option) {
            return MoveOutcome::Ignored;
        }
        self.answers[question] = Some(option);
        MoveOutcome::Applied
    }

    /// Grade every question and finish the quiz.
    pub fn submit(&mut self) -> MoveOutcome {
        if self.is_terminal() {
            return MoveOutcome::Ignored;
        }

        self.feedback = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| match answer {
                Some(chosen) if *chosen == question.answer => Feedback::Correct,
                Some(_) => Feedback::Incorrect {
                    expected: question.answer,
                },
                None => Feedback::Unanswered {
                    expected: question.answer,
                },
            })
            .collect();
        self.correct = self.feedback.iter().filter(|f| f.is_correct()).count() as u64;
        self.status = GameStatus::Won;

        log::info!(
            "quiz: submitted with {}/{} correct",
            self.correct,
            self.questions.len()
        );
        MoveOutcome::Applied
    }

    /// Correct answers as a rounded percentage of all questions.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        let total = self.questions.len() as u64;
        if total == 0 {
            return 0;
        }
        ((self.correct * 200 + total) / (total * 2)) as u32
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::from_percentage(self.percentage())
    }
}

impl Engine for Quiz {
    type Config = QuizConfig;
    type Move = QuizMove;
    type Rng = GameRng;

    /// Questions come from the caller, so the random stream is unused.
    fn generate(config: QuizConfig, _rng: GameRng) -> Result<Self, ConfigError> {
        Self::new(config)
    }

    fn kind(&self) -> GameKind {
        GameKind::Quiz
    }

    fn apply_move(&mut self, mv: QuizMove) -> MoveOutcome {
        match mv {
            QuizMove::Select { question, option } => self.select(question, option),
            QuizMove::Submit => self.submit(),
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u64 {
        self.correct
    }

    fn final_score(&self, _elapsed_secs: u64) -> Option<FinalScore> {
        if self.status != GameStatus::Won {
            return None;
        }
        Some(FinalScore::new(self.correct).with_extra("totalQuestions", self.questions.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: usize) -> Question {
        Question {
            prompt: "Pick the verb".into(),
            options: vec!["run".into(), "blue".into(), "table".into()],
            answer,
            explanation: "Verbs describe actions.".into(),
        }
    }

    fn quiz(n: usize) -> Quiz {
        Quiz::new(QuizConfig::new((0..n).map(|_| question(0)).collect())).unwrap()
    }

    #[test]
    fn test_grading_feedback() {
        let mut quiz = quiz(3);
        quiz.select(0, 0);
        quiz.select(1, 2);

        assert!(quiz.submit().is_applied());
        assert_eq!(
            quiz.feedback(),
            &[
                Feedback::Correct,
                Feedback::Incorrect { expected: 0 },
                Feedback::Unanswered { expected: 0 },
            ]
        );
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.status(), GameStatus::Won);
    }

    #[test]
    fn test_answers_change_until_submit() {
        let mut quiz = quiz(1);
        assert!(quiz.select(0, 1).is_applied());
        assert_eq!(quiz.select(0, 1), MoveOutcome::Ignored);
        assert!(quiz.select(0, 0).is_applied());
        assert_eq!(quiz.answer(0), Some(0));

        quiz.submit();
        assert_eq!(quiz.select(0, 2), MoveOutcome::Ignored);
        assert_eq!(quiz.submit(), MoveOutcome::Ignored);
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut quiz = quiz(2);
        assert_eq!(quiz.select(2, 0), MoveOutcome::Ignored);
        assert_eq!(quiz.select(0, 3), MoveOutcome::Ignored);
    }

    #[test]
    fn test_percentage_and_rating() {
        let mut quiz = quiz(3);
        quiz.select(0, 0);
        quiz.select(1, 0);
        quiz.submit();
        assert_eq!(quiz.percentage(), 67);
        assert_eq!(quiz.rating(), Rating::Good);

        assert_eq!(Rating::from_percentage(90), Rating::Excellent);
        assert_eq!(Rating::from_percentage(70), Rating::Great);
        assert_eq!(Rating::from_percentage(49), Rating::KeepLearning);
    }

    #[test]
    fn test_feedback_messages() {
        let q = question(0);
        assert_eq!(Feedback::Correct.message(&q), "✓ Correct! Verbs describe actions.");
        assert_eq!(
            Feedback::Incorrect { expected: 0 }.message(&q),
            "✗ Incorrect. The correct answer is: run. Verbs describe actions."
        );
    }

    #[test]
    fn test_final_score_reports_total() {
        let mut quiz = quiz(4);
        assert!(quiz.final_score(0).is_none());
        quiz.select(3, 0);
        quiz.submit();

        let score = quiz.final_score(42).unwrap();
        assert_eq!(score.score, 1);
        assert_eq!(score.extra, vec![("totalQuestions", 4)]);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(Quiz::new(QuizConfig::default()), Err(ConfigError::EmptyQuiz));
        let bad = QuizConfig::default().with_question(question(3));
        assert_eq!(
            bad.validate(),
            Err(ConfigError::InvalidAnswer {
                question: 0,
                answer: 3,
                options: 3
            })
        );
    }

    #[test]
    fn test_question_json_shape() {
        let json = r#"{"question":"Q","options":["a","b"],"answer":1}"#;
        let parsed: Question = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.prompt, "Q");
        assert_eq!(parsed.expected_option(), "b");
        assert!(parsed.explanation.is_empty());
    }
}
