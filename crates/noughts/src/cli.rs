//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player noughts and crosses in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses with session tallies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file [default: noughts.toml, used only if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Write logs here instead of the configured log file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play a sequence of moves without a UI and print the result
    Replay {
        /// Board indices (0-8) in play order; `r` resets the match
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        moves: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
