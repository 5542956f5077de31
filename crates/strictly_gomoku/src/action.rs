//! First-class move and error types.
//!
//! A move records which cell was filled at a history step. The row and
//! column are derived once at construction so renderers never redo the
//! index arithmetic.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A committed move: the cell filled at one history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    cell_index: usize,
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a move for `cell_index` on a board with `size` cells per side.
    #[instrument]
    pub fn new(cell_index: usize, size: usize) -> Self {
        let size = size.max(1);
        Self {
            cell_index,
            row: cell_index / size,
            col: cell_index % size,
        }
    }

    /// Row-major index of the filled cell.
    pub fn cell_index(&self) -> usize {
        self.cell_index
    }

    /// Zero-based row, counted from the top.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column, counted from the left.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Caller contract violations.
///
/// Clicking a filled cell or moving after the game ended are not errors;
/// the engine ignores those.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Cell index outside `0..size²`.
    #[display("Cell {index} is out of range for a board of {cells} cells")]
    CellOutOfRange {
        /// Requested cell.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// Step outside the retained history.
    #[display("Step {step} is out of range for a history of {len} steps")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length.
        len: usize,
    },

    /// Board size must be at least one.
    #[display("Board size {size} is invalid (must be at least 1)")]
    InvalidSize {
        /// Requested size.
        size: usize,
    },

    /// Run length must lie in `1..=size`.
    #[display("Run length {run_length} is invalid for a board of size {size}")]
    InvalidRunLength {
        /// Requested run length.
        run_length: usize,
        /// Board size it was checked against.
        size: usize,
    },

    /// A board must hold exactly `size²` squares.
    #[display("Board of size {size} needs {expected} squares, got {squares}")]
    SquareCount {
        /// Cells per side.
        size: usize,
        /// Required number of squares.
        expected: usize,
        /// Number of squares supplied.
        squares: usize,
    },
}
