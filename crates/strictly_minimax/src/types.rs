//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark placed on the board.
///
/// `O` is the engine's own mark (the maximizing side) and `X` belongs to the
/// opponent (the minimizing side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Engine mark, maximizing.
    #[display("O")]
    O,
    /// Opponent mark, minimizing.
    #[display("X")]
    X,
}

impl Mark {
    /// Returns the mark placed by the side with the given search polarity.
    pub fn for_side(maximizing: bool) -> Self {
        if maximizing { Mark::O } else { Mark::X }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Mark::O) => 'O',
            Square::Occupied(Mark::X) => 'X',
        }
    }
}

/// A cell coordinate on the board, `row` and `col` both in `0..3`.
///
/// Serialized as a `(row, col)` pair; deserialization goes through
/// [`Move::new`] and rejects coordinates off the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
#[display("({}, {})", row, col)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine moves in row-major scan order.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    /// Creates a move, rejecting coordinates outside the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= 3 || col >= 3 {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row of the move.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of the move.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl TryFrom<(usize, usize)> for Move {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Move::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(at: Move) -> Self {
        (at.row, at.col)
    }
}

/// Error that can occur when building or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Move ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target square already holds a mark.
    #[display("Square {} is already occupied", at)]
    SquareOccupied {
        /// The occupied square.
        at: Move,
    },

    /// Input could not be read as a pair of coordinates.
    #[display("Cannot read a move from {:?}", input)]
    Unparsable {
        /// The offending input.
        input: String,
    },
}

impl FromStr for Move {
    type Err = MoveError;

    /// Parses `"row col"`, two whitespace separated integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || MoveError::Unparsable {
            input: s.to_string(),
        };
        let mut parts = s.split_whitespace();
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(unparsable());
        };
        let row = row.parse::<usize>().map_err(|_| unparsable())?;
        let col = col.parse::<usize>().map_err(|_| unparsable())?;
        Move::new(row, col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every copy is independent, so search can
/// branch on a board without touching the caller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given move's coordinates.
    pub fn get(&self, at: Move) -> Square {
        self.squares[at.index()]
    }

    /// Sets the square at the given coordinates.
    pub fn set(&mut self, at: Move, square: Square) {
        self.squares[at.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, at: Move) -> bool {
        self.get(at) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty squares in row-major scan order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|at| self.is_empty(*at))
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns a copy of this board with `mark` placed at `at`.
    ///
    /// Does not check emptiness; see [`Board::try_place`].
    pub fn place(&self, at: Move, mark: Mark) -> Board {
        let mut next = *self;
        next.set(at, Square::Occupied(mark));
        next
    }

    /// Returns a copy with `mark` placed at `at`, rejecting occupied squares.
    #[instrument(skip(self))]
    pub fn try_place(&self, at: Move, mark: Mark) -> Result<Board, MoveError> {
        if !self.is_empty(at) {
            return Err(MoveError::SquareOccupied { at });
        }
        Ok(self.place(at, mark))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let line: String = (0..3)
                .map(|col| self.squares[row * 3 + col].symbol())
                .collect();
            if row < 2 {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Input did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", found)]
    WrongLength {
        /// Number of squares found.
        found: usize,
    },

    /// A character other than `O`, `X`, `.` or `_`.
    #[display("Invalid square {:?} at index {}", found, index)]
    InvalidSquare {
        /// The offending character.
        found: char,
        /// Index among the squares read so far.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses rows of `O`, `X` and `.`/`_`, e.g. `"OO./XX./..."`.
    ///
    /// Row separators (`/`) and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut found = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let square = match ch.to_ascii_uppercase() {
                'O' => Square::Occupied(Mark::O),
                'X' => Square::Occupied(Mark::X),
                '.' | '_' => Square::Empty,
                _ => return Err(BoardParseError::InvalidSquare { found: ch, index: found }),
            };
            if found < 9 {
                squares[found] = square;
            }
            found += 1;
        }
        if found != 9 {
            return Err(BoardParseError::WrongLength { found });
        }
        Ok(Self { squares })
    }
}
