//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning lines as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `mark` holds all three squares of any line.
#[instrument(level = "trace", skip(board))]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    let squares = board.squares();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(mark)))
}

/// Returns the mark holding a complete line, if any.
///
/// When both marks hold a line (unreachable in play), `O` is reported.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::O, Mark::X]
        .into_iter()
        .find(|&mark| is_winner(board, mark))
}
