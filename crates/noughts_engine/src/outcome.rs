//! Match results and per-move outcomes.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [Position; 3]);

impl WinLine {
    /// Positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// True if `pos` lies on the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A sign completed a line.
    Winner(Mark),
    /// The board filled with no line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} Wins!", mark),
            Outcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// What an accepted move did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The match goes on.
    Continue {
        /// Sign that was just placed.
        placed: Mark,
        /// Sign to move next.
        next: Mark,
    },
    /// The move completed a line.
    Won {
        /// Sign that won.
        winner: Mark,
        /// The completed line, for highlighting.
        line: WinLine,
    },
    /// The move filled the board without a line.
    Draw,
}

impl MoveOutcome {
    /// The winning line, if the move won.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            MoveOutcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}
