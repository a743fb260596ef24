//! Search error types.

use crate::Board;
use derive_more::{Display, Error};
use tracing::instrument;

/// Kinds of search failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SearchErrorKind {
    /// A node was neither terminal nor cut off, yet had no legal child.
    ///
    /// Only reachable when the evaluator misreports a finished board.
    #[display("Invariant violation: non-terminal node has no children\n{}", board)]
    InvariantViolation {
        /// The offending position.
        board: Board,
    },
}

/// Search error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Search error: {} at {}:{}", kind, file, line)]
pub struct SearchError {
    /// What went wrong.
    pub kind: SearchErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SearchError {
    /// Creates a new search error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: SearchErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &SearchErrorKind {
        &self.kind
    }
}
