//! Minesweeper generation and flood-reveal properties.

use std::collections::{HashSet, VecDeque};

use mindquest_engines::core::{GameRng, Grid, ScriptedRng};
use mindquest_engines::games::minesweeper::{
    mine_count, Cell, Minesweeper, MinesweeperConfig, MinesweeperMove,
};
use mindquest_engines::rules::{Engine, GameStatus, MoveOutcome};
use proptest::prelude::*;

fn mined_neighbours(board: &Grid<Cell>, row: usize, col: usize) -> usize {
    let mut count = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row as i64 + dr, col as i64 + dc);
            if r < 0 || c < 0 || r >= board.rows() as i64 || c >= board.cols() as i64 {
                continue;
            }
            if board[(r as usize, c as usize)].has_mine {
                count += 1;
            }
        }
    }
    count
}

/// Cells a reveal at `start` should uncover, by breadth-first search.
fn expected_region(board: &Grid<Cell>, start: (usize, usize)) -> HashSet<(usize, usize)> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        if !seen.insert(pos) {
            continue;
        }
        if board[pos].adjacent_mines == 0 {
            queue.extend(board.neighbours(pos.0, pos.1));
        }
    }
    seen
}

fn revealed(game: &Minesweeper) -> HashSet<(usize, usize)> {
    game.board()
        .enumerate()
        .filter(|(_, c)| c.revealed)
        .map(|(pos, _)| pos)
        .collect()
}

/// A wall of mines seals off the top-right corner; revealing the
/// bottom-left corner floods everything else.
///
/// ```text
/// . . . . . * . .
/// . . . . . * . .
/// . . . . . * . .
/// . . . . . * * *
/// . . . . . . . .      (rows 4-7 clear)
/// ```
#[test]
fn test_fixture_flood_from_corner() {
    let mines = [(0, 5), (1, 5), (2, 5), (3, 5), (3, 6), (3, 7)];
    let pocket = [(0, 6), (0, 7), (1, 6), (1, 7), (2, 6), (2, 7)];
    let mut game = Minesweeper::from_mines(8, &mines).unwrap();

    assert!(game.apply_move(MinesweeperMove::Reveal { row: 7, col: 0 }).is_applied());

    let open = revealed(&game);
    assert_eq!(open.len(), 64 - mines.len() - pocket.len());
    for pos in mines.iter().chain(pocket.iter()) {
        assert!(!open.contains(pos), "{pos:?} should stay covered");
    }
    assert_eq!(game.board()[(4, 6)].adjacent_mines, 3);
    assert_eq!(game.board()[(1, 4)].adjacent_mines, 3);
    assert_eq!(game.board()[(4, 4)].adjacent_mines, 1);
    assert_eq!(game.board()[(0, 7)].adjacent_mines, 0);
    assert_eq!(game.status(), GameStatus::InProgress);

    // Opening the pocket finishes the board.
    assert!(game.reveal(0, 7).is_applied());
    assert_eq!(revealed(&game).len(), 64 - mines.len());
    assert_eq!(game.status(), GameStatus::Won);
}

/// Mine count follows the 20% density for the viewport sizes.
#[test]
fn test_viewport_board_mine_counts() {
    let narrow = Minesweeper::generate(MinesweeperConfig { size: 4 }, GameRng::new(3)).unwrap();
    let wide = Minesweeper::generate(MinesweeperConfig { size: 8 }, GameRng::new(3)).unwrap();
    assert_eq!(narrow.mine_count(), 3);
    assert_eq!(wide.mine_count(), 12);
}

/// Each draw picks among the cells not yet mined.
#[test]
fn test_scripted_placement_draws_once_per_mine() {
    // 4x4 wants 3 mines. Draw 0 takes cell 0 of 16, draw 1 the fifth of
    // the remaining 15 (cell 5), draw 2 the last of 14 (cell 15).
    let mut rng = ScriptedRng::new([0.0, 4.5 / 15.0, 13.5 / 14.0]);
    let game = Minesweeper::generate_with(MinesweeperConfig { size: 4 }, &mut rng).unwrap();

    let mines: Vec<_> = game
        .board()
        .enumerate()
        .filter(|(_, c)| c.has_mine)
        .map(|(pos, _)| pos)
        .collect();
    assert_eq!(mines, vec![(0, 0), (1, 1), (3, 3)]);
    assert_eq!(rng.consumed(), 3);
}

/// A source stuck on one value still yields a full, distinct mine set.
#[test]
fn test_constant_source_terminates() {
    let mut rng = ScriptedRng::new([0.0]);
    let game = Minesweeper::generate_with(MinesweeperConfig { size: 4 }, &mut rng).unwrap();

    let mines: Vec<_> = game
        .board()
        .enumerate()
        .filter(|(_, c)| c.has_mine)
        .map(|(pos, _)| pos)
        .collect();
    assert_eq!(mines, vec![(0, 0), (0, 1), (0, 2)]);
    assert_eq!(game.mine_count(), mine_count(4));
    assert_eq!(rng.consumed(), 3);
}

/// Over-flagging drives the remaining counter negative.
#[test]
fn test_mines_remaining_can_go_negative() {
    let mut game = Minesweeper::from_mines(3, &[(0, 0)]).unwrap();
    game.toggle_flag(1, 1);
    game.toggle_flag(2, 2);
    assert_eq!(game.mines_remaining(), -1);
}

/// Engine state survives a JSON round trip.
#[test]
fn test_state_serializes() {
    let mut game = Minesweeper::generate(MinesweeperConfig::default(), GameRng::new(8)).unwrap();
    game.toggle_flag(0, 0);
    let json = serde_json::to_string(&game).unwrap();
    let back: Minesweeper = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game);
}

proptest! {
    #[test]
    fn adjacency_matches_neighbourhood(seed in any::<u64>(), size in 2usize..=16) {
        let game = Minesweeper::generate(MinesweeperConfig { size }, GameRng::new(seed)).unwrap();

        let mines = game.board().iter().filter(|c| c.has_mine).count();
        prop_assert_eq!(mines, mine_count(size));

        for ((row, col), cell) in game.board().enumerate() {
            if !cell.has_mine {
                prop_assert_eq!(
                    usize::from(cell.adjacent_mines),
                    mined_neighbours(game.board(), row, col)
                );
            }
        }
    }

    #[test]
    fn flood_reveals_exact_region(
        seed in any::<u64>(),
        size in 2usize..=16,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut game = Minesweeper::generate(MinesweeperConfig { size }, GameRng::new(seed)).unwrap();
        let safe: Vec<_> = game
            .board()
            .enumerate()
            .filter(|(_, c)| !c.has_mine)
            .map(|(pos, _)| pos)
            .collect();
        let start = safe[pick.index(safe.len())];
        let expected = expected_region(game.board(), start);

        prop_assert!(game.reveal(start.0, start.1).is_applied());
        prop_assert_eq!(revealed(&game), expected);
        prop_assert!(game.board().iter().all(|c| !(c.revealed && c.has_mine)));

        // Revealing again is a no-op.
        prop_assert_eq!(game.reveal(start.0, start.1), MoveOutcome::Ignored);
    }
}
