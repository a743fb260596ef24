//! Property-based tests for board rules and search.

use proptest::prelude::*;
use strictly_minimax::rules::{LINES, is_full, is_terminal, is_winner};
use strictly_minimax::{
    Board, ENGINE_WIN, Engine, Mark, Move, NEUTRAL, OPPONENT_WIN, Scoring, Square, search,
};

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::O), Just(Mark::X)]
}

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::O)),
        Just(Square::Occupied(Mark::X)),
    ]
}

/// Any assignment of squares, reachable in play or not.
fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(arb_square()).prop_map(|squares| {
        let mut board = Board::new();
        for (at, square) in Move::ALL.into_iter().zip(squares) {
            board.set(at, square);
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_complete_line_wins(board in arb_board(), line in 0usize..8, mark in arb_mark()) {
        let mut board = board;
        for i in LINES[line] {
            board.set(Move::ALL[i], Square::Occupied(mark));
        }
        prop_assert!(is_winner(&board, mark));
        prop_assert!(is_terminal(&board));
    }

    #[test]
    fn prop_full_iff_no_empty_square(board in arb_board()) {
        let has_empty = board.squares().contains(&Square::Empty);
        prop_assert_eq!(is_full(&board), !has_empty);
    }

    #[test]
    fn prop_rules_ignore_identity(board in arb_board()) {
        let copy = board;
        prop_assert_eq!(is_terminal(&board), is_terminal(&copy));
        prop_assert_eq!(is_winner(&board, Mark::O), is_winner(&copy, Mark::O));
    }

    #[test]
    fn prop_depth_zero_is_neutral_on_live_boards(
        board in arb_board(),
        maximizing in any::<bool>(),
    ) {
        prop_assume!(!is_terminal(&board));
        let outcome = search(board, maximizing, 0).unwrap();
        prop_assert_eq!(outcome.value(), NEUTRAL);
        prop_assert_eq!(outcome.chosen_move(), None);
        prop_assert_eq!(outcome.stats().nodes_visited, 1);
    }

    #[test]
    fn prop_search_is_idempotent(
        board in arb_board(),
        maximizing in any::<bool>(),
        depth in 0u32..4,
    ) {
        let first = search(board, maximizing, depth).unwrap();
        let second = search(board, maximizing, depth).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_values_stay_in_range(
        board in arb_board(),
        maximizing in any::<bool>(),
        depth in 0u32..4,
    ) {
        let bonus = search(board, maximizing, depth).unwrap();
        prop_assert!((-1..=2).contains(&bonus.value()));

        let plain = Engine::with_scoring(Scoring::Plain)
            .search(board, maximizing, depth)
            .unwrap();
        prop_assert!((-1..=1).contains(&plain.value()));
    }

    #[test]
    fn prop_chosen_move_targets_an_empty_square(
        board in arb_board(),
        maximizing in any::<bool>(),
        depth in 1u32..4,
    ) {
        prop_assume!(!is_terminal(&board));
        let outcome = search(board, maximizing, depth).unwrap();
        let chosen = outcome.chosen_move().unwrap();
        prop_assert!(board.is_empty(chosen));
        let child = outcome.chosen().unwrap();
        prop_assert_eq!(
            child.board().get(chosen),
            Square::Occupied(Mark::for_side(maximizing))
        );
    }
}

proptest! {
    // Full-lookahead searches filter for late-game boards.
    #![proptest_config(ProptestConfig {
        cases: 64,
        max_global_rejects: 4096,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_full_lookahead_matches_unlimited_depth(
        board in arb_board(),
        maximizing in any::<bool>(),
    ) {
        let empty = board.empty_squares().count();
        prop_assume!(empty <= 5);
        prop_assume!(!is_terminal(&board));

        let full = search(board, maximizing, empty as u32).unwrap();
        prop_assert!([-1, 0, 1, 2].contains(&full.value()));

        let unlimited = search(board, maximizing, 9).unwrap();
        prop_assert_eq!(full.value(), unlimited.value());
        prop_assert_eq!(full.chosen_move(), unlimited.chosen_move());

        let plain = Engine::with_scoring(Scoring::Plain)
            .search(board, maximizing, empty as u32)
            .unwrap();
        prop_assert!([-1, 0, 1].contains(&plain.value()));
    }

    #[test]
    fn prop_full_lookahead_takes_an_immediate_win(
        board in arb_board(),
        maximizing in any::<bool>(),
    ) {
        let empty = board.empty_squares().count();
        prop_assume!(empty <= 5);
        prop_assume!(!is_terminal(&board));

        let mark = Mark::for_side(maximizing);
        let can_win_now = board
            .empty_squares()
            .any(|at| is_winner(&board.place(at, mark), mark));
        prop_assume!(can_win_now);

        let outcome = search(board, maximizing, empty as u32).unwrap();
        if maximizing {
            prop_assert!(outcome.value() >= ENGINE_WIN);
        } else {
            prop_assert_eq!(outcome.value(), OPPONENT_WIN);
        }
    }
}
