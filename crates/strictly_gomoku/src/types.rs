//! Core domain types for N×N gomoku.

use crate::action::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is at the given history step.
    ///
    /// X makes the even steps, O the odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Board dimensions and the run length needed to win.
///
/// Invariant: `1 <= run_length <= size`. Deserialization goes through
/// [`WinRule::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RuleParams")]
pub struct WinRule {
    size: usize,
    run_length: usize,
}

impl WinRule {
    /// Validates and creates a rule.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] for a zero size and
    /// [`GameError::InvalidRunLength`] unless `1 <= run_length <= size`.
    #[instrument]
    pub fn new(size: usize, run_length: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize { size });
        }
        if run_length == 0 || run_length > size {
            return Err(GameError::InvalidRunLength { run_length, size });
        }
        Ok(Self { size, run_length })
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Consecutive marks needed to win.
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }
}

#[derive(Deserialize)]
struct RuleParams {
    size: usize,
    run_length: usize,
}

impl TryFrom<RuleParams> for WinRule {
    type Error = GameError;

    fn try_from(params: RuleParams) -> Result<Self, Self::Error> {
        Self::new(params.size, params.run_length)
    }
}

/// Square board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardSquares")]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

#[derive(Deserialize)]
struct BoardSquares {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<BoardSquares> for Board {
    type Error = GameError;

    fn try_from(BoardSquares { size, squares }: BoardSquares) -> Result<Self, Self::Error> {
        let expected = size * size;
        if squares.len() != expected {
            return Err(GameError::SquareCount {
                size,
                expected,
                squares: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }
}

impl Board {
    /// Creates an empty board with `size` cells per side.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at the given row and column.
    pub fn at(&self, row: usize, col: usize) -> Option<Square> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.get(row * self.size + col)
    }

    /// Sets the square at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfRange`] if `index` is not on the board.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), GameError> {
        let cells = self.squares.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(GameError::CellOutOfRange { index, cells })?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Off-board indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.squares.chunks(self.size.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for square in row {
                match square {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}
