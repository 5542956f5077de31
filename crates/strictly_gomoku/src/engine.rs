//! Game state engine: history, cursor, and derived turn.
//!
//! The engine never caches a verdict. Every query re-runs the win detector
//! on the snapshot under the cursor, and the player to move is a function
//! of the cursor's parity, so rewinding restores both for free.

use super::action::{GameError, Move};
use super::history::{History, Snapshot};
use super::rules::{WinResult, detect};
use super::types::{Board, Player, Square, WinRule};
use tracing::{debug, info, instrument};

/// What the renderer needs for the step under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    /// Board at the cursor.
    pub board: &'a Board,
    /// Verdict for that board.
    pub win_result: WinResult,
    /// Move that produced the board; `None` at step 0.
    pub last_move: Option<Move>,
    /// Cursor position.
    pub step_number: usize,
    /// Number of retained snapshots, including any beyond the cursor.
    pub history_length: usize,
    /// Player who would place the next mark.
    pub next_player: Player,
}

/// One game session.
#[derive(Debug, Clone)]
pub struct Engine {
    rule: WinRule,
    history: History,
    step_number: usize,
}

impl Engine {
    /// Starts a game with only the empty board in history.
    #[instrument]
    pub fn new(rule: WinRule) -> Self {
        info!(size = rule.size(), run_length = rule.run_length(), "New game");
        Self {
            rule,
            history: History::new(rule.size()),
            step_number: 0,
        }
    }

    /// Board size and run length for this session.
    pub fn rule(&self) -> WinRule {
        self.rule
    }

    /// Full retained history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Cursor position.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Player who would place the next mark at the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Moves of every retained step after the empty board, oldest first.
    ///
    /// Includes steps beyond the cursor until a new move discards them.
    pub fn moves(&self) -> impl Iterator<Item = (usize, Move)> + '_ {
        self.history
            .snapshots()
            .iter()
            .enumerate()
            .filter_map(|(step, snapshot)| snapshot.last_move().map(|mv| (step, mv)))
    }

    fn current(&self) -> &Snapshot {
        // step_number < history.len() is maintained by every mutator.
        &self.history.snapshots()[self.step_number]
    }

    /// Places the current player's mark at `cell`.
    ///
    /// Filling an occupied cell or moving after the game ended is ignored.
    /// Otherwise every step after the cursor is discarded and the new
    /// snapshot becomes the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfRange`] if `cell` is not on the board.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn commit_move(&mut self, cell: usize) -> Result<(), GameError> {
        let cells = self.rule.cell_count();
        if cell >= cells {
            return Err(GameError::CellOutOfRange { index: cell, cells });
        }

        let current = self.current();
        if !current.board().is_empty(cell) {
            debug!(cell, "Ignoring move on occupied cell");
            return Ok(());
        }
        if detect(current.board(), self.rule.run_length()).status.is_over() {
            debug!(cell, "Ignoring move after game over");
            return Ok(());
        }

        let player = self.next_player();
        let mut board = current.board().clone();
        board.set(cell, Square::Occupied(player))?;
        let snapshot = Snapshot::after(board, Move::new(cell, self.rule.size()));

        let discarded = self.history.len() - self.step_number - 1;
        self.step_number = self.history.branch(self.step_number, snapshot);
        debug!(cell, %player, discarded, step = self.step_number, "Move committed");

        #[cfg(debug_assertions)]
        {
            use super::invariants::{EngineInvariants, InvariantSet};
            if let Err(violations) = EngineInvariants::check_all(self) {
                panic!("Engine invariants violated after commit: {violations:?}");
            }
        }

        Ok(())
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] unless `step < history length`.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if step >= len {
            return Err(GameError::StepOutOfRange { step, len });
        }
        self.step_number = step;
        debug!(step, "Cursor moved");
        Ok(())
    }

    /// Snapshot under the cursor with a freshly computed verdict.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn current_view(&self) -> View<'_> {
        let current = self.current();
        View {
            board: current.board(),
            win_result: detect(current.board(), self.rule.run_length()),
            last_move: *current.last_move(),
            step_number: self.step_number,
            history_length: self.history.len(),
            next_player: self.next_player(),
        }
    }
}
