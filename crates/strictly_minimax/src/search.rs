//! Exhaustive minimax search.
//!
//! Depth-first and full-width: every legal move is explored, with no
//! pruning and no memory between calls. Children are scanned in row-major
//! order and a later child only replaces the current best on a strict
//! improvement, so among equally good moves the first one scanned wins.

use crate::error::{SearchError, SearchErrorKind};
use crate::node::Node;
use crate::scoring::{ClassicEvaluator, Evaluator, Score, Scoring};
use crate::{Board, Mark, Move};
use tracing::{debug, info, instrument, trace};

/// Work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes_visited: u64,
    /// Terminal or cut-off nodes that were valued.
    pub evaluations: u64,
}

/// Result of a search: the root's value and the child that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    value: Score,
    chosen: Option<Node>,
    stats: SearchStats,
}

impl SearchOutcome {
    /// Minimax value of the root position.
    pub fn value(&self) -> Score {
        self.value
    }

    /// The chosen child, absent when the root was terminal or cut off.
    pub fn chosen(&self) -> Option<&Node> {
        self.chosen.as_ref()
    }

    /// The move leading to the chosen child.
    pub fn chosen_move(&self) -> Option<Move> {
        self.chosen.and_then(|node| node.last_move())
    }

    /// Work counters for this search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Minimax engine over a pluggable evaluator.
#[derive(Debug, Clone, Default)]
pub struct Engine<E = ClassicEvaluator> {
    evaluator: E,
}

impl Engine<ClassicEvaluator> {
    /// Creates an engine with standard rules and the given scoring policy.
    pub fn with_scoring(scoring: Scoring) -> Self {
        Self::new(ClassicEvaluator::new(scoring))
    }
}

impl<E: Evaluator> Engine<E> {
    /// Creates an engine around an evaluator.
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Searches `board` with the given side to move.
    ///
    /// `maximizing` selects the engine (`O`) to move; otherwise the
    /// opponent (`X`) moves. A `depth_limit` of zero values the board as
    /// it stands without generating any child.
    ///
    /// # Errors
    ///
    /// Returns [`SearchErrorKind::InvariantViolation`] if a node that is
    /// neither terminal nor cut off has no empty square.
    #[instrument(skip(self, board), fields(empty = board.empty_squares().count()))]
    pub fn search(
        &self,
        board: Board,
        maximizing: bool,
        depth_limit: u32,
    ) -> Result<SearchOutcome, SearchError> {
        let mut stats = SearchStats::default();
        let root = Node::root(board);
        let (value, chosen) = self.minimax(&root, maximizing, depth_limit, &mut stats)?;

        info!(
            value,
            chosen = ?chosen.and_then(|n| n.last_move()),
            nodes = stats.nodes_visited,
            evaluations = stats.evaluations,
            "Search complete"
        );

        Ok(SearchOutcome {
            value,
            chosen,
            stats,
        })
    }

    fn minimax(
        &self,
        node: &Node,
        maximizing: bool,
        depth_limit: u32,
        stats: &mut SearchStats,
    ) -> Result<(Score, Option<Node>), SearchError> {
        stats.nodes_visited += 1;

        if depth_limit == 0 || self.evaluator.is_terminal(node.board()) {
            stats.evaluations += 1;
            let value = self.evaluator.value(node.board());
            trace!(value, depth_limit, "Leaf");
            return Ok((value, None));
        }

        let mark = Mark::for_side(maximizing);
        let mut best: Option<(Score, Node)> = None;

        for child in node.children(mark) {
            let (value, _) = self.minimax(&child, !maximizing, depth_limit - 1, stats)?;
            let improves = match best {
                None => true,
                Some((best_value, _)) if maximizing => value > best_value,
                Some((best_value, _)) => value < best_value,
            };
            if improves {
                best = Some((value, child));
            }
        }

        match best {
            Some((value, child)) => {
                debug!(
                    value,
                    maximizing,
                    chosen = ?child.last_move(),
                    "Best child"
                );
                Ok((value, Some(child)))
            }
            None => Err(SearchError::new(SearchErrorKind::InvariantViolation {
                board: *node.board(),
            })),
        }
    }
}

/// Searches with standard rules and the default scoring policy.
///
/// See [`Engine::search`].
pub fn search(
    board: Board,
    maximizing: bool,
    depth_limit: u32,
) -> Result<SearchOutcome, SearchError> {
    Engine::<ClassicEvaluator>::default().search(board, maximizing, depth_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ENGINE_WIN, NEUTRAL, OPPONENT_WIN};

    #[test]
    fn test_depth_zero_is_a_cutoff() {
        let outcome = search(Board::new(), true, 0).unwrap();
        assert_eq!(outcome.value(), NEUTRAL);
        assert_eq!(outcome.chosen_move(), None);
        assert_eq!(outcome.stats().nodes_visited, 1);
        assert_eq!(outcome.stats().evaluations, 1);
    }

    #[test]
    fn test_terminal_root_is_valued_without_children() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let outcome = search(board, true, 9).unwrap();
        assert_eq!(outcome.value(), OPPONENT_WIN);
        assert!(outcome.chosen().is_none());
        assert_eq!(outcome.stats().nodes_visited, 1);
    }

    #[test]
    fn test_depth_one_takes_immediate_win() {
        let board: Board = "OO./XX./...".parse().unwrap();
        let outcome = search(board, true, 1).unwrap();
        assert_eq!(outcome.value(), ENGINE_WIN);
        assert_eq!(outcome.chosen_move(), Move::new(0, 2).ok());
        // Root plus one leaf per empty square.
        assert_eq!(outcome.stats().nodes_visited, 6);
    }

    #[test]
    fn test_minimizer_blocks_or_wins() {
        // Blocking at (0, 2) only draws; (1, 2) wins outright.
        let board: Board = "OO./XX./O..".parse().unwrap();
        let outcome = search(board, false, 9).unwrap();
        assert_eq!(outcome.value(), OPPONENT_WIN);
        assert_eq!(outcome.chosen_move(), Move::new(1, 2).ok());
    }

    #[test]
    fn test_chosen_child_carries_the_mark() {
        let board: Board = "OO./XX./...".parse().unwrap();
        let outcome = search(board, true, 3).unwrap();
        let child = outcome.chosen().unwrap();
        assert_eq!(child.board().count(Mark::O), 3);
        assert_eq!(child.board().count(Mark::X), 2);
    }
}
