//! Trap-pattern detection.
//!
//! The trap is a corner-and-center shape: the engine (`O`) holds the
//! center and three corners, the opponent holds the remaining corner, and
//! every edge midpoint is empty. Any of the four rotations counts. The
//! shape only affects scoring; it has no bearing on legality or on
//! whether the game is over.

use crate::{Board, Mark, Move, Square};
use tracing::instrument;

const CORNERS: [usize; 4] = [0, 2, 8, 6];
const CENTER: usize = 4;
const EDGES: [usize; 4] = [1, 5, 7, 3];

/// Rotates a coordinate a quarter turn clockwise.
fn rotate(at: Move) -> Move {
    Move::ALL[at.col() * 3 + (2 - at.row())]
}

/// Checks for the trap shape in any of the four rotations.
#[instrument(level = "trace", skip(board))]
pub fn is_trap_pattern(board: &Board) -> bool {
    let squares = board.squares();
    let engine = Square::Occupied(Mark::O);

    if squares[CENTER] != engine || EDGES.iter().any(|&i| squares[i] != Square::Empty) {
        return false;
    }

    // Start with the opponent in the bottom-right corner and turn the
    // shape through each rotation.
    let mut opponent_corner = Move::ALL[8];
    for _ in 0..4 {
        let opponent_index = opponent_corner.index();
        let holds = CORNERS.iter().all(|&i| {
            if i == opponent_index {
                squares[i] == Square::Occupied(Mark::X)
            } else {
                squares[i] == engine
            }
        });
        if holds {
            return true;
        }
        opponent_corner = rotate(opponent_corner);
    }
    false
}
