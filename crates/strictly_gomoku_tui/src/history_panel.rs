//! Move list and status text derived from the engine.

use derive_new::new;
use strictly_gomoku::{Engine, GameStatus, View};
use tracing::instrument;

/// Order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Toggles between ascending and descending.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the toggle action, naming the order it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Z-A",
            Self::Descending => "Sort A-Z",
        }
    }
}

/// One "go to" entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MoveEntry {
    /// History step the entry jumps to.
    pub step: usize,
    /// Text shown in the list.
    pub label: String,
    /// True for the step under the cursor.
    pub current: bool,
}

/// Builds the move list for every retained step.
#[instrument(skip(engine), fields(len = engine.history().len()))]
pub fn entries(engine: &Engine, order: SortOrder) -> Vec<MoveEntry> {
    let cursor = engine.step_number();
    let mut list: Vec<MoveEntry> = std::iter::once(MoveEntry::new(0, "Go to game start".to_string(), cursor == 0))
        .chain(engine.moves().map(|(step, mv)| {
            MoveEntry::new(
                step,
                format!("Go to move #{} ({}, {})", step, mv.row(), mv.col()),
                cursor == step,
            )
        }))
        .collect();

    if order == SortOrder::Descending {
        list.reverse();
    }
    list
}

/// One-line game status for the view under the cursor.
pub fn status_line(view: &View<'_>) -> String {
    match view.win_result.status {
        GameStatus::Won(player) => format!("The winner is: {}!", player),
        GameStatus::Draw => "The winner is: Draw!".to_string(),
        GameStatus::InProgress => match view.last_move {
            Some(mv) => format!("Last step: ({}, {}); Next player: {}", mv.row(), mv.col(), view.next_player),
            None => format!("Start the game! Next player: {}", view.next_player),
        },
    }
}
