//! Application state and key handling.

use crate::config::{RUN_LENGTH_CHOICES, SIZE_CHOICES, SetupConfig};
use crate::history_panel::SortOrder;
use crate::input::{Cursor, cell_index, move_cursor};
use anyhow::Result;
use crossterm::event::KeyCode;
use std::ops::RangeInclusive;
use strictly_gomoku::{Engine, WinRule};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep processing events.
    Continue,
    /// Leave the application.
    Quit,
}

/// Setup field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    /// Board size selector.
    #[default]
    Size,
    /// Run length selector.
    RunLength,
}

impl SetupField {
    /// Switches focus to the other field.
    pub fn toggle(self) -> Self {
        match self {
            Self::Size => Self::RunLength,
            Self::RunLength => Self::Size,
        }
    }
}

/// Board size and run length being chosen before a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    /// Selected board size.
    pub size: usize,
    /// Selected run length.
    pub run_length: usize,
    /// Focused field.
    pub field: SetupField,
}

impl SetupForm {
    /// Creates a form preloaded from configuration, clamped to the offered
    /// choices.
    pub fn new(config: SetupConfig) -> Self {
        Self {
            size: config.size().clamp(*SIZE_CHOICES.start(), *SIZE_CHOICES.end()),
            run_length: config
                .run_length()
                .clamp(*RUN_LENGTH_CHOICES.start(), *RUN_LENGTH_CHOICES.end()),
            field: SetupField::default(),
        }
    }

    fn step(value: usize, choices: &RangeInclusive<usize>, up: bool) -> usize {
        let value = if up { value.saturating_add(1) } else { value.saturating_sub(1) };
        value.clamp(*choices.start(), *choices.end())
    }

    /// Changes the focused value by one choice.
    pub fn adjust(&mut self, up: bool) {
        match self.field {
            SetupField::Size => self.size = Self::step(self.size, &SIZE_CHOICES, up),
            SetupField::RunLength => self.run_length = Self::step(self.run_length, &RUN_LENGTH_CHOICES, up),
        }
    }

    /// Current selection as configuration.
    pub fn config(&self) -> SetupConfig {
        SetupConfig::new(self.size, self.run_length)
    }
}

/// A game in progress plus its presentation state.
#[derive(Debug, Clone)]
pub struct Table {
    /// The game session.
    pub engine: Engine,
    /// Highlighted cell.
    pub cursor: Cursor,
    /// Move list order.
    pub order: SortOrder,
}

impl Table {
    /// Starts a game and centers the cursor.
    pub fn new(rule: WinRule) -> Self {
        let mid = rule.size() / 2;
        Self {
            engine: Engine::new(rule),
            cursor: (mid, mid),
            order: SortOrder::default(),
        }
    }
}

/// Which screen is shown.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Choosing parameters.
    Setup(SetupForm),
    /// Playing.
    Playing(Table),
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    screen: Screen,
    status_message: Option<String>,
    last_setup: SetupConfig,
}

impl App {
    /// Creates the application, optionally going straight to the board.
    #[instrument]
    pub fn new(config: SetupConfig, skip_setup: bool) -> Result<Self> {
        let screen = if skip_setup {
            Screen::Playing(Table::new(config.rule()?))
        } else {
            Screen::Setup(SetupForm::new(config))
        };
        Ok(Self {
            screen,
            status_message: None,
            last_setup: config,
        })
    }

    /// Gets the current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Gets the transient status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Control> {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            info!("Quit requested");
            return Ok(Control::Quit);
        }
        self.status_message = None;

        match &mut self.screen {
            Screen::Setup(form) => {
                match key {
                    KeyCode::Up | KeyCode::Down | KeyCode::Tab => form.field = form.field.toggle(),
                    KeyCode::Left => form.adjust(false),
                    KeyCode::Right => form.adjust(true),
                    KeyCode::Enter => {
                        let config = form.config();
                        self.start(config);
                    }
                    _ => {}
                }
                Ok(Control::Continue)
            }
            Screen::Playing(table) => {
                let size = table.engine.rule().size();
                match key {
                    KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                        table.cursor = move_cursor(table.cursor, size, key);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let cell = cell_index(table.cursor, size);
                        let before = table.engine.history().len();
                        let step = table.engine.step_number();
                        table.engine.commit_move(cell)?;
                        if table.engine.step_number() == step && table.engine.history().len() == before {
                            let message = if table.engine.current_view().win_result.status.is_over() {
                                "The game is over. Rewind or press n for a new game."
                            } else {
                                "That cell is already taken."
                            };
                            self.status_message = Some(message.to_string());
                        }
                    }
                    KeyCode::Backspace | KeyCode::Char('u') => {
                        let step = table.engine.step_number();
                        if step > 0 {
                            table.engine.jump_to(step - 1)?;
                        }
                    }
                    KeyCode::Char('r') => {
                        let step = table.engine.step_number();
                        if step + 1 < table.engine.history().len() {
                            table.engine.jump_to(step + 1)?;
                        }
                    }
                    KeyCode::Home => table.engine.jump_to(0)?,
                    KeyCode::End => {
                        let last = table.engine.history().len() - 1;
                        table.engine.jump_to(last)?;
                    }
                    KeyCode::Char('s') => table.order = table.order.toggle(),
                    KeyCode::Char('n') => {
                        debug!("Returning to setup");
                        self.screen = Screen::Setup(SetupForm::new(self.last_setup));
                    }
                    _ => {}
                }
                Ok(Control::Continue)
            }
        }
    }

    fn start(&mut self, config: SetupConfig) {
        match config.rule() {
            Ok(rule) => {
                info!(size = rule.size(), run_length = rule.run_length(), "Starting game");
                self.last_setup = config;
                self.screen = Screen::Playing(Table::new(rule));
            }
            Err(_) if config.run_length() > config.size() => {
                self.status_message = Some(format!(
                    "Cells need to win ({}) cannot exceed board size ({}).",
                    config.run_length(),
                    config.size()
                ));
            }
            Err(err) => self.status_message = Some(err.message),
        }
    }
}
