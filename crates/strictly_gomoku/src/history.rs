//! Linear move history with truncate-on-write.

use super::action::Move;
use super::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Board state at one step, paired with the move that produced it.
///
/// Step 0 is the empty board and carries no move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Move>,
}

impl Snapshot {
    /// Snapshot of an empty board.
    pub fn empty(size: usize) -> Self {
        Self {
            board: Board::new(size),
            last_move: None,
        }
    }

    pub(crate) fn after(board: Board, last_move: Move) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }
}

/// Ordered snapshots; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new(size: usize) -> Self {
        Self {
            snapshots: vec![Snapshot::empty(size)],
        }
    }

    /// Number of retained snapshots (at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no snapshots are retained.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every snapshot after `step`, then appends `snapshot`.
    ///
    /// Returns the index of the appended snapshot.
    pub(crate) fn branch(&mut self, step: usize, snapshot: Snapshot) -> usize {
        self.snapshots.truncate(step + 1);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    fn step(board: &Board, cell: usize, player: Player) -> Snapshot {
        let mut next = board.clone();
        next.set(cell, Square::Occupied(player)).unwrap();
        Snapshot::after(next, Move::new(cell, board.size()))
    }

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new(3);
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        let first = history.get(0).unwrap();
        assert_eq!(first.board().occupied(), 0);
        assert_eq!(first.last_move(), &None);
    }

    #[test]
    fn test_branch_discards_future() {
        let mut history = History::new(3);
        let s1 = step(history.get(0).unwrap().board(), 0, Player::X);
        history.branch(0, s1.clone());
        let s2 = step(s1.board(), 1, Player::O);
        history.branch(1, s2);
        assert_eq!(history.len(), 3);

        let alt = step(s1.board(), 8, Player::O);
        let index = history.branch(1, alt.clone());
        assert_eq!(index, 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(2), Some(&alt));
    }
}
