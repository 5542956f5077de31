//! Strictly Gomoku - terminal front end

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod history_panel;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, Control};
use cli::Cli;
use config::SetupConfig;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;
    info!("Starting Strictly Gomoku");

    let config = load_config(&cli)?;
    let app = App::new(config, cli.skip_setup)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "Application error");
    }
    res
}

/// Sends logs to a file; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<SetupConfig> {
    let base = match &cli.config {
        Some(path) => SetupConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => SetupConfig::default(),
    };
    Ok(base.with_overrides(cli.size, cli.run_length))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code)? == Control::Quit {
                return Ok(());
            }
        }
    }
}
