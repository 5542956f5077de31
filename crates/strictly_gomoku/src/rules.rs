//! Game rules: winning runs and full boards.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{Orientation, Run, WinResult, detect, find_run};
