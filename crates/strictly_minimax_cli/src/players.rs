//! Player trait and implementations.

use anyhow::{Result, anyhow, bail};
use derive_new::new;
use std::io::{BufRead, Write};
use strictly_minimax::{Board, Engine, Mark, Move, MoveError};
use tracing::{debug, info, instrument};

/// Trait for anything that can pick the next move.
pub trait Player {
    /// Chooses a legal move on `board`.
    fn choose_move(&mut self, board: &Board) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Human player reading `row col` lines from an input stream.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over the given streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn read_candidate(&mut self, board: &Board) -> Result<Option<Result<Move, MoveError>>> {
        write!(self.output, "Your move: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let candidate = line
            .trim()
            .parse::<Move>()
            .and_then(|at| board.try_place(at, Mark::X).map(|_| at));
        Ok(Some(candidate))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        loop {
            match self.read_candidate(board)? {
                None => bail!("Input closed before a move was made"),
                Some(Ok(at)) => {
                    debug!(%at, "Human chose move");
                    return Ok(at);
                }
                Some(Err(e)) => {
                    debug!(error = %e, "Rejected human move");
                    writeln!(self.output, "Invalid move.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Engine player searching as the maximizing side.
#[derive(new)]
pub struct EnginePlayer {
    name: String,
    engine: Engine,
    depth: u32,
}

impl Player for EnginePlayer {
    #[instrument(skip(self, board), fields(player = %self.name, depth = self.depth))]
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        let outcome = self.engine.search(*board, true, self.depth)?;
        let at = outcome
            .chosen_move()
            .ok_or_else(|| anyhow!("Engine was asked to move on a finished board"))?;
        info!(%at, value = outcome.value(), "Engine chose move");
        Ok(at)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_minimax::Scoring;

    #[test]
    fn test_human_retries_until_legal() {
        let board: Board = "X../.../...".parse().unwrap();
        let input = Cursor::new("5 5\nfoo\n0 0\n1 1\n");
        let mut output = Vec::new();
        let mut human = HumanPlayer::new("human", input, &mut output);

        let at = human.choose_move(&board).unwrap();
        assert_eq!(at, Move::new(1, 1).unwrap());

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid move.").count(), 3);
        assert_eq!(text.matches("Your move: ").count(), 4);
    }

    #[test]
    fn test_human_input_closed_is_an_error() {
        let mut human = HumanPlayer::new("human", Cursor::new(""), Vec::new());
        assert!(human.choose_move(&Board::new()).is_err());
    }

    #[test]
    fn test_engine_takes_the_win() {
        let board: Board = "OO./XX./...".parse().unwrap();
        let mut engine = EnginePlayer::new(
            "engine".to_string(),
            Engine::with_scoring(Scoring::Plain),
            9,
        );
        assert_eq!(engine.choose_move(&board).unwrap(), Move::new(0, 2).unwrap());
    }

    #[test]
    fn test_engine_on_finished_board_is_an_error() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let mut engine = EnginePlayer::new("engine".to_string(), Engine::default(), 9);
        assert!(engine.choose_move(&board).is_err());
    }
}
