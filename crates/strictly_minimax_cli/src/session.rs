//! A single game between a human (`X`) and the engine (`O`).

use crate::players::Player;
use anyhow::Result;
use std::io::Write;
use strictly_minimax::rules::{is_full, is_winner};
use strictly_minimax::{Board, Mark, Move, MoveError};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameOutcome {
    /// A mark completed a line.
    #[display("{} Won!", _0)]
    Won(Mark),
    /// The board filled with no winner.
    #[display("Tie!")]
    Tie,
}

/// Owns the canonical board and the round counter.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    round: u32,
    human_first: bool,
}

impl Session {
    /// Creates a session on an empty board.
    pub fn new(human_first: bool) -> Self {
        Self {
            board: Board::new(),
            round: 0,
            human_first,
        }
    }

    /// Returns the canonical board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Mark to move in the given (1-based) round.
    pub fn mark_for_round(&self, round: u32) -> Mark {
        let odd = round % 2 == 1;
        if odd == self.human_first { Mark::X } else { Mark::O }
    }

    /// Returns the outcome if the game is over.
    ///
    /// `X` is reported before `O` should both hold a line.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(mark) = [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| is_winner(&self.board, mark))
        {
            Some(GameOutcome::Won(mark))
        } else if is_full(&self.board) {
            Some(GameOutcome::Tie)
        } else {
            None
        }
    }

    /// Validates and applies a move to the canonical board.
    #[instrument(skip(self))]
    pub fn apply(&mut self, at: Move, mark: Mark) -> Result<(), MoveError> {
        self.board = self.board.try_place(at, mark)?;
        Ok(())
    }

    /// Plays until the game ends, printing the board every round.
    #[instrument(skip_all, fields(x = %human.name(), o = %engine.name()))]
    pub fn play<W: Write>(
        &mut self,
        human: &mut dyn Player,
        engine: &mut dyn Player,
        out: &mut W,
    ) -> Result<GameOutcome> {
        info!("Starting game");

        loop {
            self.round += 1;
            writeln!(out, "{}\n", self.board)?;

            if let Some(outcome) = self.outcome() {
                writeln!(out, "{}", outcome)?;
                info!(%outcome, rounds = self.round, "Game over");
                return Ok(outcome);
            }

            let mark = self.mark_for_round(self.round);
            let at = match mark {
                Mark::X => human.choose_move(&self.board)?,
                Mark::O => engine.choose_move(&self.board)?,
            };
            self.apply(at, mark)?;
            debug!(round = self.round, %mark, %at, "Move applied");
        }
    }
}
