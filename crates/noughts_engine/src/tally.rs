//! Cumulative results across the matches of a session.

use super::outcome::Outcome;
use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Win and draw counts. Survives match resets; cleared only with a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Matches won by X.
    x_wins: u32,
    /// Matches won by O.
    o_wins: u32,
    /// Drawn matches.
    draws: u32,
}

impl Tally {
    /// Counts one finished match.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Wins for a given sign.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total finished matches.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} | O {} | Draws {}", self.x_wins, self.o_wins, self.draws)
    }
}
