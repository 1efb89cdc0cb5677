//! Noughts - terminal front end for the noughts engine.
//!
//! - **Settings**: optional TOML file with presentation and logging options
//! - **Replay**: headless play of a move list, as text or JSON
//! - **TUI**: interactive ratatui board with flash messages and tallies

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod replay;
mod settings;

pub mod tui;

pub use cli::{Cli, Command};
pub use replay::{ReplayReport, ReplayStep, StepResult, replay};
pub use settings::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
