//! Tic-tac-toe rules and an exhaustive minimax engine.
//!
//! The crate is pure: no I/O, no global state, no suspension points. A
//! driver owns the real game, hands the engine a [`Board`] value, and
//! applies the move it gets back.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, search};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let board: Board = "OO./XX./...".parse()?;
//! let outcome = search(board, true, 9)?;
//! assert_eq!(outcome.value(), 1);
//! assert_eq!(outcome.chosen_move(), Some(Move::new(0, 2)?));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod node;
pub mod rules;
mod scoring;
mod search;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, BoardParseError, Mark, Move, MoveError, Square};

// Crate-level exports - Search
pub use error::{SearchError, SearchErrorKind};
pub use node::Node;
pub use scoring::{
    ClassicEvaluator, ENGINE_WIN, Evaluator, NEUTRAL, OPPONENT_WIN, Score, Scoring, TRAP_WIN,
};
pub use search::{Engine, SearchOutcome, SearchStats, search};
