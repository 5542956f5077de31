//! Strictly Gomoku - N×N gomoku game logic.
//!
//! Two players alternately mark cells on a square board; the first to
//! occupy `run_length` consecutive cells in a row, column or diagonal wins.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection ([`detect`])
//! - **Engine**: move history with a time-travel cursor ([`Engine`])
//! - **Invariants**: properties checked after every committed move
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{Engine, GameStatus, Player, WinRule};
//!
//! # fn main() -> Result<(), strictly_gomoku::GameError> {
//! let mut game = Engine::new(WinRule::new(3, 3)?);
//! for cell in [0, 3, 1, 4, 2] {
//!     game.commit_move(cell)?;
//! }
//! let view = game.current_view();
//! assert_eq!(view.win_result.status, GameStatus::Won(Player::X));
//! assert_eq!(view.win_result.winning_cells, vec![0, 1, 2]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
pub mod invariants;
mod rules;
mod types;

pub use action::{GameError, Move};
pub use engine::{Engine, View};
pub use history::{History, Snapshot};
pub use rules::{Orientation, Run, WinResult, detect, find_run, is_full};
pub use types::{Board, GameStatus, Player, Square, WinRule};
