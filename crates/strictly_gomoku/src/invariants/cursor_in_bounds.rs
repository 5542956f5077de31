//! Cursor invariant.

use super::super::Engine;
use super::Invariant;

/// Invariant: the cursor addresses a retained snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<Engine> for CursorInBoundsInvariant {
    fn holds(game: &Engine) -> bool {
        game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor lies within the retained history"
    }
}
