//! Search-time snapshots of the board.

use crate::{Board, Mark, Move};
use serde::{Deserialize, Serialize};

/// A board snapshot plus the move that produced it.
///
/// The board is owned by the node. Only the root lacks a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    board: Board,
    last_move: Option<Move>,
}

impl Node {
    /// Creates the root node for a search.
    pub fn root(board: Board) -> Self {
        Self {
            board,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this node, `None` at the root.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// One child per empty square, in row-major scan order, each with
    /// `mark` placed on its own copy of the board.
    pub fn children(&self, mark: Mark) -> Vec<Node> {
        self.board
            .empty_squares()
            .map(|at| Node {
                board: self.board.place(at, mark),
                last_move: Some(at),
            })
            .collect()
    }
}
