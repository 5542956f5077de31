//! Win detection for an N×N board with a configurable run length.
//!
//! Every maximal straight line of each orientation is walked cell by cell
//! with explicit row and column bounds, so a scan can never wrap from the
//! end of one row into the next.

use super::super::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Line direction. Declaration order is the order families are checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Orientation {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// "/" diagonal, walked from its top-right end down and to the left.
    AscendingDiagonal,
    /// "\" diagonal, walked from its top-left end down and to the right.
    DescendingDiagonal,
}

impl Orientation {
    /// Row and column step between consecutive cells of a line.
    fn delta(self) -> (usize, isize) {
        match self {
            Orientation::Row => (0, 1),
            Orientation::Column => (1, 0),
            Orientation::AscendingDiagonal => (1, -1),
            Orientation::DescendingDiagonal => (1, 1),
        }
    }

    /// Distance in row-major index between consecutive cells of a line.
    fn stride(self, size: usize) -> usize {
        match self {
            Orientation::Row => 1,
            Orientation::Column => size,
            Orientation::AscendingDiagonal => size - 1,
            Orientation::DescendingDiagonal => size + 1,
        }
    }

    /// Start cells of every maximal line, in increasing row-major index.
    fn starts(self, size: usize) -> Vec<(usize, usize)> {
        match self {
            Orientation::Row => (0..size).map(|r| (r, 0)).collect(),
            Orientation::Column => (0..size).map(|c| (0, c)).collect(),
            Orientation::AscendingDiagonal => (0..size)
                .map(|c| (0, c))
                .chain((1..size).map(|r| (r, size - 1)))
                .collect(),
            Orientation::DescendingDiagonal => (0..size)
                .map(|c| (0, c))
                .chain((1..size).map(|r| (r, 0)))
                .collect(),
        }
    }

    /// Number of cells in the line starting at `(row, col)`.
    fn line_len(self, size: usize, (row, col): (usize, usize)) -> usize {
        match self {
            Orientation::Row => size - col,
            Orientation::Column => size - row,
            Orientation::AscendingDiagonal => (col + 1).min(size - row),
            Orientation::DescendingDiagonal => (size - col).min(size - row),
        }
    }
}

/// A run of identical marks long enough to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    /// Owner of the run.
    pub player: Player,
    /// Row-major index of the first cell in scan order.
    pub start: usize,
    /// Direction the run extends in from `start`.
    pub orientation: Orientation,
    /// Number of cells in the run.
    pub length: usize,
}

impl Run {
    /// Indices of the run's cells, in scan order.
    pub fn cells(&self, size: usize) -> Vec<usize> {
        let stride = self.orientation.stride(size);
        (0..self.length).map(|k| self.start + k * stride).collect()
    }
}

/// Verdict on a board plus the cells to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// Win, draw, or still in progress.
    pub status: GameStatus,
    /// Cells of the winning run; empty unless `status` is `Won`.
    pub winning_cells: Vec<usize>,
}

impl WinResult {
    /// Returns true if `index` belongs to the winning run.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_cells.contains(&index)
    }
}

/// Finds the first winning run on the board.
///
/// Families are checked rows, columns, "/" then "\", each family's lines
/// in increasing start index, each line scanned from its start. Lines
/// shorter than `run_length` are skipped.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_run(board: &Board, run_length: usize) -> Option<Run> {
    let size = board.size();
    if run_length == 0 || run_length > size {
        return None;
    }

    for orientation in Orientation::iter() {
        for start in orientation.starts(size) {
            if orientation.line_len(size, start) < run_length {
                continue;
            }
            if let Some(run) = scan_line(board, orientation, start, run_length) {
                return Some(run);
            }
        }
    }

    None
}

/// Walks one line and returns the first run of `run_length` equal marks.
fn scan_line(
    board: &Board,
    orientation: Orientation,
    (mut row, mut col): (usize, usize),
    run_length: usize,
) -> Option<Run> {
    let size = board.size();
    let (d_row, d_col) = orientation.delta();
    let mut current: Option<(Player, usize, usize)> = None;

    loop {
        let index = row * size + col;
        current = match (board.get(index)?, current) {
            (Square::Occupied(p), Some((owner, start, len))) if p == owner => Some((p, start, len + 1)),
            (Square::Occupied(p), _) => Some((p, index, 1)),
            (Square::Empty, _) => None,
        };

        if let Some((player, start, length)) = current {
            if length == run_length {
                return Some(Run {
                    player,
                    start,
                    orientation,
                    length,
                });
            }
        }

        let next_row = row + d_row;
        let next_col = match col.checked_add_signed(d_col) {
            Some(c) => c,
            None => return None,
        };
        if next_row >= size || next_col >= size {
            return None;
        }
        row = next_row;
        col = next_col;
    }
}

/// Computes the verdict for a board.
///
/// Pure and deterministic; `O(size²)`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn detect(board: &Board, run_length: usize) -> WinResult {
    if let Some(run) = find_run(board, run_length) {
        return WinResult {
            status: GameStatus::Won(run.player),
            winning_cells: run.cells(board.size()),
        };
    }

    let status = if super::draw::is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };
    WinResult {
        status,
        winning_cells: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(size: usize, marks: &str) -> Board {
        let mut board = Board::new(size);
        for (i, ch) in marks.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let square = match ch {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board.set(i, square).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let result = detect(&Board::new(3), 3);
        assert_eq!(result.status, GameStatus::InProgress);
        assert!(result.winning_cells.is_empty());
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(3, "XXX OO. ...");
        let result = detect(&board, 3);
        assert_eq!(result.status, GameStatus::Won(Player::X));
        assert_eq!(result.winning_cells, vec![0, 1, 2]);
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(4, ".O.. .O.. .O.. X.XX");
        let result = detect(&board, 3);
        assert_eq!(result.status, GameStatus::Won(Player::O));
        assert_eq!(result.winning_cells, vec![1, 5, 9]);
    }

    #[test]
    fn test_winner_ascending_diagonal() {
        let board = board_from(3, "..O .O. O..");
        let result = detect(&board, 3);
        assert_eq!(result.status, GameStatus::Won(Player::O));
        assert_eq!(result.winning_cells, vec![2, 4, 6]);
    }

    #[test]
    fn test_winner_descending_diagonal_off_main() {
        let board = board_from(5, "..... X.... .X... ..X.. .....");
        let result = detect(&board, 3);
        assert_eq!(result.status, GameStatus::Won(Player::X));
        assert_eq!(result.winning_cells, vec![5, 11, 17]);
    }

    #[test]
    fn test_run_in_middle_of_long_row() {
        let board = board_from(6, "OXXXXO ...... ...... ...... ...... ......");
        let result = detect(&board, 4);
        assert_eq!(result.winning_cells, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_row_wraparound_is_not_a_run() {
        // Cells 2, 3, 4 are contiguous in memory but span two rows.
        let board = board_from(3, "..X XX. ...");
        assert_eq!(detect(&board, 3).status, GameStatus::InProgress);
    }

    #[test]
    fn test_diagonal_wraparound_is_not_a_run() {
        // 0, 3, 6 are spaced size - 1 apart, yet 0 and 3 share row 0.
        let board = board_from(4, "X..X ..X. .... ....");
        assert_eq!(detect(&board, 3).status, GameStatus::InProgress);
    }

    #[test]
    fn test_rows_win_over_columns() {
        let board = board_from(3, "XXX X.. X..");
        assert_eq!(detect(&board, 3).winning_cells, vec![0, 1, 2]);
    }

    #[test]
    fn test_columns_win_over_ascending_diagonals() {
        let board = board_from(3, "..X .XX X.X");
        assert_eq!(detect(&board, 3).winning_cells, vec![2, 5, 8]);
    }

    #[test]
    fn test_ascending_diagonals_win_over_descending() {
        let board = board_from(3, "X.X .X. X.X");
        assert_eq!(detect(&board, 3).winning_cells, vec![2, 4, 6]);
    }

    #[test]
    fn test_upper_row_wins_over_lower_row() {
        let board = board_from(4, ".... XXX. .... .XXX");
        assert_eq!(detect(&board, 3).winning_cells, vec![4, 5, 6]);
    }

    #[test]
    fn test_lower_start_wins_within_diagonal_family() {
        let board = board_from(4, ".X.. X.X. .X.X ..X.");
        assert_eq!(detect(&board, 3).winning_cells, vec![1, 6, 11]);
    }

    #[test]
    fn test_first_run_in_long_row() {
        let board = board_from(7, "XXXXXXX ....... ....... ....... ....... ....... .......");
        let result = detect(&board, 5);
        assert_eq!(result.status, GameStatus::Won(Player::X));
        assert_eq!(result.winning_cells, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_run_length_one() {
        let board = board_from(3, "... .O. ...");
        let result = detect(&board, 1);
        assert_eq!(result.status, GameStatus::Won(Player::O));
        assert_eq!(result.winning_cells, vec![4]);
    }

    #[test]
    fn test_single_cell_board() {
        assert_eq!(detect(&Board::new(1), 1).status, GameStatus::InProgress);
        let board = board_from(1, "X");
        assert_eq!(detect(&board, 1).winning_cells, vec![0]);
    }

    #[test]
    fn test_draw() {
        let board = board_from(3, "XOX OXO OXO");
        let result = detect(&board, 3);
        assert_eq!(result.status, GameStatus::Draw);
        assert!(result.winning_cells.is_empty());
    }

    #[test]
    fn test_starts_are_increasing() {
        for orientation in Orientation::iter() {
            let indices: Vec<usize> = orientation
                .starts(5)
                .into_iter()
                .map(|(r, c)| r * 5 + c)
                .collect();
            assert!(indices.windows(2).all(|w| w[0] < w[1]), "{orientation:?}");
        }
    }
}
