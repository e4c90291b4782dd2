//! Redraw notifications for presentation hosts.

use nonet_board::Board;
use nonet_core::{Digit, Position};

/// An immutable copy of the grid taken after an accepted mutation.
///
/// The snapshot carries the full grid for hosts that redraw everything, plus
/// the delta of the triggering mutation for hosts that support incremental
/// redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    cells: [[Option<Digit>; 9]; 9],
    delta: (Position, Option<Digit>),
}

impl BoardSnapshot {
    /// Captures the current grid state along with the mutation delta.
    #[must_use]
    pub fn capture(board: &Board, delta: (Position, Option<Digit>)) -> Self {
        let mut cells = [[None; 9]; 9];
        for pos in Position::ALL {
            cells[usize::from(pos.row())][usize::from(pos.col())] =
                board.cell(pos).as_digit();
        }
        Self { cells, delta }
    }

    /// Returns the digit at the given position at capture time.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Returns the full grid, row-major, for whole-board redraw.
    #[must_use]
    pub fn rows(&self) -> &[[Option<Digit>; 9]; 9] {
        &self.cells
    }

    /// Returns the cell changed by the triggering mutation and its new value
    /// (`None` for a clear).
    #[must_use]
    pub fn delta(&self) -> (Position, Option<Digit>) {
        self.delta
    }
}

/// Callback interface a presentation host implements to be told when the
/// board changed.
///
/// Called by [`Session`](crate::Session) after every accepted mutation,
/// never after a rejected one.
pub trait BoardObserver {
    /// The board changed; redraw from `snapshot`.
    fn board_changed(&mut self, snapshot: &BoardSnapshot);
}

/// No-op observer for hosts that poll the board instead.
impl BoardObserver for () {
    fn board_changed(&mut self, _snapshot: &BoardSnapshot) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_reflects_board() {
        let mut board = Board::starter();
        board.place(2, 3, 1).unwrap();
        let pos = Position::new(2, 3);
        let snapshot = BoardSnapshot::capture(&board, (pos, Some(Digit::D1)));

        assert_eq!(snapshot.value_at(pos), Some(Digit::D1));
        assert_eq!(snapshot.value_at(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(snapshot.value_at(Position::new(5, 5)), None);
        assert_eq!(snapshot.delta(), (pos, Some(Digit::D1)));
        assert_eq!(snapshot.rows()[2][3], Some(Digit::D1));
    }

    #[test]
    fn test_snapshot_is_detached_from_board() {
        let mut board = Board::new();
        board.place(0, 0, 9).unwrap();
        let snapshot = BoardSnapshot::capture(&board, (Position::new(0, 0), Some(Digit::D9)));

        board.clear(0, 0).unwrap();
        assert_eq!(snapshot.value_at(Position::new(0, 0)), Some(Digit::D9));
    }
}
