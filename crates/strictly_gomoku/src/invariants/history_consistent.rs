//! History consistency: each snapshot adds exactly one mark.

use super::super::history::Snapshot;
use super::super::{Engine, Square};
use super::Invariant;

/// Invariant: snapshot 0 is empty and every later snapshot differs from its
/// predecessor only in the cell named by its move, which was empty before.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    /// Checks a raw snapshot sequence.
    pub fn holds_for(snapshots: &[Snapshot]) -> bool {
        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.last_move().is_some() || first.board().occupied() != 0 {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(mv) = *pair[1].last_move() else {
                return false;
            };
            let changed: Vec<usize> = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(i, _)| i)
                .collect();
            changed == [mv.cell_index()] && before.get(mv.cell_index()) == Some(Square::Empty)
        })
    }
}

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(game: &Engine) -> bool {
        Self::holds_for(game.history().snapshots())
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly the cell named by its move"
    }
}
