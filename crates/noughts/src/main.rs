//! Noughts - two-player noughts and crosses.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Command, Settings, replay, tui};
use noughts_engine::MatchEngine;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play { log_file: None }) {
        Command::Play { log_file } => {
            let settings = match log_file {
                Some(path) => settings.with_log_file(path),
                None => settings,
            };
            init_file_tracing(&settings)?;
            tui::run(settings)
        }
        Command::Replay { moves, json } => {
            init_stderr_tracing(&settings);
            run_replay(&moves, json)
        }
    }
}

/// Plays `moves` headlessly and prints the report.
#[instrument(skip(moves))]
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    let mut engine = MatchEngine::new();
    let report = replay(&mut engine, moves);
    info!(steps = report.steps.len(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Logs to a file so output does not tear the terminal UI.
fn init_file_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Logs to stderr, keeping stdout for the report.
fn init_stderr_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
