//! Marks on the board track the turn counter exactly.

use super::Invariant;
use crate::MatchEngine;

/// Invariant: one mark per accepted move.
///
/// While in progress the board holds `turn_counter - 1` marks; a terminal
/// move does not advance the counter, so a finished board holds
/// `turn_counter` marks.
pub struct MarksMatchTurns;

impl Invariant<MatchEngine> for MarksMatchTurns {
    fn holds(engine: &MatchEngine) -> bool {
        let filled = engine.board().filled() as u32;
        let turn = engine.turn_counter();
        if engine.is_over() {
            filled == turn
        } else {
            filled + 1 == turn
        }
    }

    fn description() -> &'static str {
        "Marks on the board match the moves played"
    }
}
