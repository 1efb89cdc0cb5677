//! Headless play: feed a list of moves through the engine and report.

use noughts_engine::{Board, Cell, Mark, MatchEngine, MoveOutcome, Outcome, Tally};
use serde::Serialize;
use tracing::{debug, instrument};

/// Tokens that reset the match instead of playing a move.
const RESET_TOKENS: [&str; 2] = ["r", "reset"];

/// What happened to one input token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResult {
    /// The move was played.
    Accepted {
        /// Sign that moved.
        sign: Mark,
        /// Effect on the match.
        outcome: MoveOutcome,
    },
    /// The engine refused the move; nothing changed.
    Rejected {
        /// Why it was refused.
        reason: String,
    },
    /// The match was reset.
    Reset,
}

/// One input token and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// Token as given.
    pub input: String,
    /// Result of applying it.
    pub result: StepResult,
}

/// Full record of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Every token in order.
    pub steps: Vec<ReplayStep>,
    /// Final board.
    pub board: [Cell; 9],
    /// Result of the last match, if it finished.
    pub outcome: Option<Outcome>,
    /// Session tallies.
    pub tally: Tally,
}

/// Plays `moves` on `engine`. Rejected moves are recorded and skipped.
#[instrument(skip(engine, moves))]
pub fn replay<S: AsRef<str>>(engine: &mut MatchEngine, moves: &[S]) -> ReplayReport {
    let steps = moves
        .iter()
        .map(|token| {
            let input = token.as_ref().trim().to_string();
            let result = if RESET_TOKENS.contains(&input.to_lowercase().as_str()) {
                engine.reset();
                StepResult::Reset
            } else {
                let sign = engine.current_turn();
                match engine.play_input(&input) {
                    Ok(outcome) => StepResult::Accepted { sign, outcome },
                    Err(e) => StepResult::Rejected {
                        reason: e.to_string(),
                    },
                }
            };
            debug!(input = %input, ?result, "Replay step");
            ReplayStep { input, result }
        })
        .collect();

    ReplayReport {
        steps,
        board: engine.snapshot(),
        outcome: engine.outcome(),
        tally: *engine.tally(),
    }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            match &step.result {
                StepResult::Accepted { sign, outcome } => match outcome {
                    MoveOutcome::Continue { .. } => writeln!(f, "{} -> {}", sign, step.input)?,
                    MoveOutcome::Won { winner, line } => {
                        let indices = line.indices();
                        writeln!(f, "{} -> {}: {} Wins! {:?}", sign, step.input, winner, indices)?
                    }
                    MoveOutcome::Draw => writeln!(f, "{} -> {}: It's a Draw!", sign, step.input)?,
                },
                StepResult::Rejected { reason } => {
                    writeln!(f, "{}: rejected ({})", step.input, reason)?
                }
                StepResult::Reset => writeln!(f, "Board Reset!")?,
            }
        }

        let mut board = Board::new();
        for (index, cell) in self.board.iter().enumerate() {
            board.set(index, *cell);
        }
        writeln!(f, "\n{}\n", board)?;
        match self.outcome {
            Some(outcome) => writeln!(f, "{}", outcome)?,
            None => writeln!(f, "In progress")?,
        }
        write!(f, "{}", self.tally)
    }
}
