//! Move rejection reasons.

use super::position::Position;

/// Why a move was refused.
///
/// Every variant is recoverable: the engine is unchanged and keeps
/// accepting moves (or a reset) afterwards.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The match is over; reset before playing again.
    #[display("Game is already over")]
    GameOver,

    /// The target is not an integer in 0-8. Carries the rejected input.
    #[display("Invalid index {:?} (must be 0-8)", _0)]
    InvalidIndex(String),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}
