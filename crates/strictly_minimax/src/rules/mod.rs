//! Board rules for tic-tac-toe.
//!
//! Pure predicates over a [`Board`]. They never mutate their input and
//! depend only on the squares, so structurally equal boards always give
//! the same answers.

pub mod draw;
pub mod trap;
pub mod win;

pub use draw::is_full;
pub use trap::is_trap_pattern;
pub use win::{LINES, is_winner, winner};

use crate::{Board, Mark};
use tracing::instrument;

/// True if either side has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    is_winner(board, Mark::O) || is_winner(board, Mark::X) || is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_terminal() {
        assert!(!is_terminal(&Board::new()));
    }

    #[test]
    fn test_win_is_terminal() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_full_board_is_terminal() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_partial_board_not_terminal() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert!(!is_terminal(&board));
    }
}
