//! Recorded outcome agrees with the board.

use super::Invariant;
use crate::rules::{is_full, winning_line};
use crate::{MatchEngine, Outcome};

/// Invariant: the outcome is set iff the board is terminal, and it names the
/// right result.
pub struct OutcomeConsistent;

impl Invariant<MatchEngine> for OutcomeConsistent {
    fn holds(engine: &MatchEngine) -> bool {
        let board = engine.board();
        let line = winning_line(board);
        match engine.outcome() {
            None => line.is_none() && !is_full(board) && engine.winning_line().is_none(),
            Some(Outcome::Winner(mark)) => {
                line.map(|(winner, l)| (winner, Some(l))) == Some((mark, engine.winning_line()))
            }
            Some(Outcome::Draw) => {
                line.is_none() && is_full(board) && engine.winning_line().is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    #[test]
    fn test_holds_after_win() {
        let mut engine = MatchEngine::new();
        for index in [0usize, 3, 1, 4, 2] {
            engine.play_move(index).unwrap();
        }
        assert!(OutcomeConsistent::holds(&engine));
    }

    #[test]
    fn test_detects_unrecorded_line() {
        let mut engine = MatchEngine::new();
        for index in [2usize, 4, 6] {
            engine.board_mut().set(index, Cell::Marked(Mark::O));
        }
        assert!(!OutcomeConsistent::holds(&engine));
    }
}
