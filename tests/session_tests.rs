//! Sessions end to end: input, play, clock, leaderboard.

use mindquest_engines::core::Viewport;
use mindquest_engines::games::game2048::{Direction, Game2048, Game2048Config};
use mindquest_engines::games::quiz::{Question, Quiz, QuizConfig, QuizMove};
use mindquest_engines::games::sudoku::{Sudoku, SudokuConfig, SudokuMove};
use mindquest_engines::games::tetris::{Tetris, TetrisConfig, TetrisMove};
use mindquest_engines::input::{InputMap, Swipe};
use mindquest_engines::leaderboard::{
    LeaderboardSink, NullSink, RecordingSink, ScoreSubmission, SubmitError,
};
use mindquest_engines::rules::{Engine, GameStatus};
use mindquest_engines::session::{GameSession, SubmitStatus};

fn questions() -> QuizConfig {
    let q = |answer| Question {
        prompt: "Which word is a noun?".into(),
        options: vec!["quickly".into(), "apple".into(), "run".into()],
        answer,
        explanation: String::new(),
    };
    QuizConfig::new(vec![q(1), q(1), q(1), q(1)])
}

/// Key names and swipes drive a 2048 session to the end; the loss is
/// submitted under the service's 2048 key with the highest tile.
#[test]
fn test_2048_session_from_input() {
    let config = Game2048Config::default().with_size(2);
    let mut session: GameSession<Game2048> = GameSession::new(config, 99).unwrap();
    let keys = ["ArrowLeft", "ArrowUp", "ArrowRight", "ArrowDown"];

    'play: for _ in 0..10_000 {
        for key in keys {
            let mv = Direction::from_key_name(key).unwrap();
            session.apply(mv);
            session.advance_clock(1);
            if session.status().is_terminal() {
                break 'play;
            }
        }
    }
    assert_eq!(session.status(), GameStatus::Lost);
    assert!(Direction::from_swipe(Swipe::new(1, 1, 10)).is_none());

    let mut sink = RecordingSink::new();
    assert_eq!(session.submit_if_finished("ada", &mut sink), SubmitStatus::Submitted);
    let sent = &sink.accepted()[0];
    assert_eq!(sent.game, "Twogame");
    assert_eq!(sent.score, session.engine().score());
    assert_eq!(sent.extra["highestTile"], u64::from(session.engine().max_tile()));
    assert_eq!(sent.time, session.elapsed_secs());
    assert_eq!(session.history().len() as u64, session.engine().turns());
}

/// A Tetris session that never clears a line has nothing to submit.
#[test]
fn test_tetris_session_zero_score() {
    let mut session: GameSession<Tetris> = GameSession::new(TetrisConfig::default(), 5).unwrap();
    let tap = TetrisMove::from_swipe(Swipe::new(0, 0, 100)).unwrap();
    assert_eq!(tap, TetrisMove::Rotate);

    for _ in 0..10_000 {
        if session.status().is_terminal() {
            break;
        }
        session.apply(TetrisMove::SoftDrop);
    }
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.submit_if_finished("", &mut NullSink), SubmitStatus::NoScore);
}

/// Quiz submission reports the question count and the session clock.
#[test]
fn test_quiz_session_submission() {
    let mut session: GameSession<Quiz> = GameSession::new(questions(), 0).unwrap();
    session.advance_clock(42);
    session.apply(QuizMove::Select { question: 0, option: 1 });
    session.apply(QuizMove::Select { question: 1, option: 1 });
    session.apply(QuizMove::Select { question: 2, option: 0 });
    session.apply(QuizMove::Submit);

    let mut received = Vec::new();
    let mut sink = |s: &ScoreSubmission| {
        received.push(s.clone());
        Ok::<(), SubmitError>(())
    };
    assert_eq!(session.submit_if_finished("kit", &mut sink), SubmitStatus::Submitted);

    let json = serde_json::to_value(&received[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "game": "Quiz",
            "username": "kit",
            "score": 2,
            "time": 42,
            "totalQuestions": 4,
        })
    );
    assert_eq!(session.engine().percentage(), 50);
}

/// Restarting a quiz clears answers and allows a second submission.
#[test]
fn test_quiz_restart_allows_new_submission() {
    let mut session: GameSession<Quiz> = GameSession::new(questions(), 0).unwrap();
    session.apply(QuizMove::Submit);
    let mut sink = RecordingSink::new();
    session.submit_if_finished("a", &mut sink);

    session.restart().unwrap();
    assert_eq!(session.engine().answer(0), None);
    session.apply(QuizMove::Submit);
    assert_eq!(session.submit_if_finished("a", &mut sink), SubmitStatus::Submitted);
    assert_eq!(sink.attempts(), 2);
}

/// Sudoku time penalty uses the clock frozen at the winning check.
#[test]
fn test_sudoku_session_time_penalty() {
    let mut session: GameSession<Sudoku> =
        GameSession::for_viewport(Viewport::new(375), 13).unwrap();
    assert_eq!(session.config(), &SudokuConfig { size: 4 });

    session.advance_clock(60);
    let solution = session.engine().solution().clone();
    for ((row, col), &value) in solution.enumerate() {
        session.apply(SudokuMove::Set { row, col, value });
    }
    session.apply(SudokuMove::Check);
    session.advance_clock(1_000);

    assert_eq!(session.status(), GameStatus::Won);
    let mut sink = RecordingSink::new();
    session.submit_if_finished("b", &mut sink);
    let sent = &sink.accepted()[0];
    assert_eq!(sent.score, 4000 - 300);
    assert_eq!(sent.time, 60);
    assert_eq!(sent.extra["boardSize"], 4);
}

/// A failing sink is tried once and the game state is untouched.
#[test]
fn test_failing_sink_is_swallowed() {
    let mut session: GameSession<Quiz> = GameSession::new(questions(), 0).unwrap();
    session.apply(QuizMove::Submit);

    let mut sink = RecordingSink::failing(SubmitError::Unavailable("timeout".into()));
    let dyn_sink: &mut dyn LeaderboardSink = &mut sink;
    assert_eq!(session.submit_if_finished("a", dyn_sink), SubmitStatus::Failed);
    assert_eq!(session.submit_if_finished("a", dyn_sink), SubmitStatus::AlreadyAttempted);
    assert_eq!(sink.attempts(), 1);
    assert_eq!(session.status(), GameStatus::Won);
}
