//! Alternating turn invariant: marks follow X, O, X, O, ... by step.

use super::super::{Engine, Player, Square};
use super::Invariant;

/// Invariant: the mark placed at step `n` belongs to the player whose turn
/// it was at step `n - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(game: &Engine) -> bool {
        let snapshots = game.history().snapshots();
        snapshots.iter().enumerate().skip(1).all(|(step, snapshot)| {
            let Some(mv) = *snapshot.last_move() else {
                return false;
            };
            snapshot.board().get(mv.cell_index()) == Some(Square::Occupied(Player::for_step(step - 1)))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
