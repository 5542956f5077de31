//! Command-line interface for strictly_gomoku.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Gomoku - N×N gomoku in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_gomoku")]
#[command(about = "Play N×N gomoku with time-travel history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (cells per side)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Consecutive marks needed to win
    #[arg(short, long)]
    pub run_length: Option<usize>,

    /// Path to a TOML file with `size` and `run_length` defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long, default_value = "strictly_gomoku.log")]
    pub log_file: PathBuf,

    /// Start playing immediately instead of showing the setup screen
    #[arg(long)]
    pub skip_setup: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["strictly_gomoku", "--size", "15", "-r", "5", "--skip-setup"]);
        assert_eq!(cli.size, Some(15));
        assert_eq!(cli.run_length, Some(5));
        assert!(cli.skip_setup);
        assert_eq!(cli.log_file, PathBuf::from("strictly_gomoku.log"));
    }
}
