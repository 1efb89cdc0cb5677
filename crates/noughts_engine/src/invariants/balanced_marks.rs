//! Balanced marks: signs alternate, so their counts never drift apart.

use super::Invariant;
use crate::{Mark, MatchEngine};

/// Invariant: X and O counts differ by at most one.
pub struct BalancedMarks;

impl Invariant<MatchEngine> for BalancedMarks {
    fn holds(engine: &MatchEngine) -> bool {
        let board = engine.board();
        board.count(Mark::X).abs_diff(board.count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}
