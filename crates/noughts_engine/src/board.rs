//! Board storage: nine cells in row-major order.

use super::position::Position;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// 3x3 board.
///
/// Pure storage. The fixed-size array keeps the length at exactly nine;
/// rules and turn order live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns the cell at a raw index, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes a cell at a raw index. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, cell: Cell) {
        match self.cells.get_mut(index) {
            Some(slot) => *slot = cell,
            None => trace!(index, "Ignoring write outside the board"),
        }
    }

    /// Places a mark at a position.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.index()] = Cell::Marked(mark);
    }

    /// Owned copy of every cell.
    pub fn snapshot(&self) -> [Cell; BOARD_SIZE] {
        self.cells
    }

    /// Borrowed view of every cell.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// True when the position holds no mark.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// True when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| c.mark() == Some(mark))
            .count()
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index)?,
                    Cell::Marked(mark) => write!(f, "{}", mark.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut board = Board::new();
        board.set(9, Cell::Marked(Mark::X));
        board.set(usize::MAX, Cell::Marked(Mark::O));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cell_out_of_range_is_none() {
        let board = Board::new();
        assert_eq!(board.cell(8), Some(Cell::Empty));
        assert_eq!(board.cell(9), None);
    }

    #[test]
    fn test_snapshot_is_decoupled() {
        let mut board = Board::new();
        board.set(4, Cell::Marked(Mark::X));
        let snapshot = board.snapshot();
        board.set(0, Cell::Marked(Mark::O));
        assert_eq!(snapshot[0], Cell::Empty);
        assert_eq!(snapshot[4], Cell::Marked(Mark::X));
    }

    #[test]
    fn test_reset_clears() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::O);
        board.reset();
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.place(Position::Center, Mark::O);
        assert_eq!(board.to_string(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}
