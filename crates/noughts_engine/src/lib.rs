//! Noughts engine - pure match logic for noughts and crosses.
//!
//! The crate is split the same way the game is:
//!
//! - **Board**: nine cells with bounds-checked access ([`Board`]).
//! - **Rules**: pure win/draw evaluation over a board ([`rules`]).
//! - **Match engine**: turn order, terminal state and session tallies
//!   ([`MatchEngine`]).
//!
//! # Example
//!
//! ```
//! use noughts_engine::{MatchEngine, Mark, MoveOutcome};
//!
//! let mut engine = MatchEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.play_move(index).unwrap();
//! }
//! let outcome = engine.play_move(2).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Won { winner: Mark::X, .. }));
//! assert_eq!(engine.tally().x_wins(), &1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod outcome;
mod position;
mod tally;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, BOARD_SIZE};
pub use engine::MatchEngine;
pub use error::MoveError;
pub use outcome::{MoveOutcome, Outcome, WinLine};
pub use position::Position;
pub use tally::Tally;
pub use types::{Cell, Mark};
