//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). They hold no state, so the
//! engine, the invariants and the tests all evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{winning_line, LINES};

use super::{Board, Outcome, WinLine};
use tracing::instrument;

/// Evaluates the board: a win (with its line), a draw, or nothing yet.
///
/// Lines are scanned in [`LINES`] order; the first uniformly marked line
/// wins.
#[instrument(skip(board))]
pub fn check_outcome(board: &Board) -> Option<(Outcome, Option<WinLine>)> {
    if let Some((winner, line)) = winning_line(board) {
        return Some((Outcome::Winner(winner), Some(line)));
    }
    if is_full(board) {
        return Some((Outcome::Draw, None));
    }
    None
}
