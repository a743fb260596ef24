//! Driver for the strictly_minimax engine.
//!
//! Holds the canonical board, reads the human's moves, asks the engine for
//! its own, and reports the result. The engine itself never sees anything
//! but a [`strictly_minimax::Board`] value.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod players;
mod report;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, Difficulty, GameConfig};

// Crate-level exports - Players
pub use players::{EnginePlayer, HumanPlayer, Player};

// Crate-level exports - Session
pub use report::write_analysis;
pub use session::{GameOutcome, Session};
