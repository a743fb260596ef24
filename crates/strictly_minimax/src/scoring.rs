//! Position values and the scoring policy.

use crate::rules::{is_terminal, is_trap_pattern, is_winner};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Signed value of a position from the engine's point of view.
pub type Score = i32;

/// Engine won through the trap shape.
pub const TRAP_WIN: Score = 2;
/// Engine won.
pub const ENGINE_WIN: Score = 1;
/// Tie, or a position cut off before the game ended.
pub const NEUTRAL: Score = 0;
/// Opponent won.
pub const OPPONENT_WIN: Score = -1;

/// How winning positions are valued.
///
/// `TrapBonus` rewards an engine win in the trap shape above an ordinary
/// win, which departs from vanilla minimax. `Plain` keeps values in
/// `{-1, 0, 1}`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Scoring {
    /// Trap-shape wins score [`TRAP_WIN`].
    #[default]
    TrapBonus,
    /// Vanilla minimax values.
    Plain,
}

impl Scoring {
    /// Values a board under this policy.
    ///
    /// Defined for every board, not only finished ones: positions reached
    /// through a depth cutoff without a winner are [`NEUTRAL`].
    #[instrument(level = "trace", skip(board))]
    pub fn value(self, board: &Board) -> Score {
        if is_winner(board, Mark::O) {
            if self == Scoring::TrapBonus && is_trap_pattern(board) {
                TRAP_WIN
            } else {
                ENGINE_WIN
            }
        } else if is_winner(board, Mark::X) {
            OPPONENT_WIN
        } else {
            NEUTRAL
        }
    }
}

/// Decides when a position stops the search and what it is worth.
///
/// The search engine asks nothing else of the board rules.
pub trait Evaluator {
    /// True if the position admits no further play.
    fn is_terminal(&self, board: &Board) -> bool;

    /// Value of the position from the maximizing side's view.
    fn value(&self, board: &Board) -> Score;
}

/// Standard tic-tac-toe rules with a configurable scoring policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicEvaluator {
    scoring: Scoring,
}

impl ClassicEvaluator {
    /// Creates an evaluator using the given scoring policy.
    pub fn new(scoring: Scoring) -> Self {
        Self { scoring }
    }
}

impl Evaluator for ClassicEvaluator {
    fn is_terminal(&self, board: &Board) -> bool {
        is_terminal(board)
    }

    fn value(&self, board: &Board) -> Score {
        self.scoring.value(board)
    }
}
