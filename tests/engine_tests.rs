//! GameEngine integration tests: full games and property checks.

use std::collections::HashSet;

use multitoe::core::{Cell, EngineError, GameRng, Mark, Position};
use multitoe::game::GameEngine;
use multitoe::rules::GameStatus;
use proptest::prelude::*;

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_two_player_row_win() {
    let mut engine = GameEngine::new(2, false).unwrap();
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0)];

    for &(r, c) in &moves {
        assert_eq!(engine.apply_move(r, c), Ok(GameStatus::InProgress));
    }
    assert_eq!(engine.apply_move(0, 2), Ok(GameStatus::Won(Mark::X)));
    assert_eq!(engine.move_count(), 5);
}

#[test]
fn test_three_player_draw() {
    let mut engine = GameEngine::new(3, false).unwrap();
    // Snake through the board: X O Y X / O X Y O / Y X O Y / X Y O X
    let moves = [
        (0, 0), (0, 1), (0, 2), (0, 3),
        (1, 3), (1, 2), (1, 1), (1, 0),
        (2, 0), (2, 1), (2, 2), (2, 3),
        (3, 3), (3, 2), (3, 1), (3, 0),
    ];

    let (last, rest) = moves.split_last().unwrap();
    for &(r, c) in rest {
        assert_eq!(engine.apply_move(r, c), Ok(GameStatus::InProgress));
    }
    assert_eq!(engine.apply_move(last.0, last.1), Ok(GameStatus::Draw));
    assert_eq!(engine.move_count(), 16);
    assert_eq!(engine.check_winner(), None);
    assert!(engine.legal_moves().is_empty());
}

#[test]
fn test_terminal_game_is_frozen() {
    let mut engine = GameEngine::new(2, false).unwrap();
    for &(r, c) in &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
        engine.apply_move(r, c).unwrap();
    }

    let board = engine.board().clone();
    for &(r, c) in &[(2, 2), (0, 0), (9, 9)] {
        assert_eq!(
            engine.apply_move(r, c),
            Err(EngineError::GameOver(GameStatus::Won(Mark::X)))
        );
    }
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_anti_diagonal_game() {
    let mut engine = GameEngine::new(2, false).unwrap();
    for &(r, c) in &[(0, 2), (0, 0), (1, 1), (0, 1)] {
        engine.apply_move(r, c).unwrap();
    }
    assert_eq!(engine.apply_move(2, 0), Ok(GameStatus::Won(Mark::X)));
}

#[test]
fn test_no_legal_move_after_draw() {
    let mut engine = GameEngine::new(2, true).unwrap();
    for &(r, c) in &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0), (2, 1), (1, 2), (2, 2)] {
        engine.apply_move(r, c).unwrap();
    }

    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(
        engine.pick_computer_move(&mut GameRng::new(5)),
        Err(EngineError::NoLegalMove)
    );
}

#[test]
fn test_computer_pick_reaches_every_cell() {
    let engine = GameEngine::new(2, true).unwrap();
    let picks: HashSet<Position> = (0..200)
        .map(|seed| engine.pick_computer_move(&mut GameRng::new(seed)).unwrap())
        .collect();

    assert_eq!(picks.len(), 9);
    assert_eq!(picks, engine.legal_moves().into_iter().collect());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Random games respect legality, turn order and terminal rules.
    #[test]
    fn prop_random_games_keep_invariants(players in 2usize..=4, seed in any::<u64>()) {
        let mut engine = GameEngine::new(players, false).unwrap();
        let mut rng = GameRng::new(seed);
        let side = players + 1;

        while !engine.status().is_terminal() {
            for r in 0..=side {
                for c in 0..=side {
                    let open = engine.board().get(Position::new(r, c)) == Some(Cell::Empty);
                    prop_assert_eq!(engine.is_legal_move(r, c), open);
                }
            }

            let turn = engine.turn();
            let count = engine.move_count();
            let pos = engine.pick_computer_move(&mut rng).unwrap();
            prop_assert!(engine.is_legal_move(pos.row, pos.col));

            let status = engine.apply_move(pos.row, pos.col).unwrap();
            prop_assert_eq!(engine.move_count(), count + 1);
            match status {
                GameStatus::InProgress => {
                    prop_assert_eq!(engine.turn().index(), (turn.index() + 1) % players);
                }
                GameStatus::Won(mark) => {
                    prop_assert_eq!(mark, engine.roster()[turn]);
                    prop_assert_eq!(engine.check_winner(), Some(mark));
                }
                GameStatus::Draw => {
                    prop_assert!(engine.board().is_full());
                    prop_assert_eq!(engine.check_winner(), None);
                }
            }
        }

        let board = engine.board().clone();
        prop_assert!(matches!(engine.apply_move(0, 0), Err(EngineError::GameOver(_))));
        prop_assert_eq!(engine.board(), &board);
    }

    /// Illegal moves never change the engine.
    #[test]
    fn prop_illegal_moves_are_rejected(row in 0usize..8, col in 0usize..8, seed in any::<u64>()) {
        let mut engine = GameEngine::new(3, true).unwrap();
        let mut rng = GameRng::new(seed);
        for _ in 0..5 {
            let pos = engine.pick_computer_move(&mut rng).unwrap();
            engine.apply_move(pos.row, pos.col).unwrap();
        }

        if !engine.is_legal_move(row, col) {
            let board = engine.board().clone();
            let turn = engine.turn();
            prop_assert!(matches!(engine.apply_move(row, col), Err(EngineError::IllegalMove(_))));
            prop_assert_eq!(engine.board(), &board);
            prop_assert_eq!(engine.turn(), turn);
            prop_assert_eq!(engine.move_count(), 5);
        }
    }
}
