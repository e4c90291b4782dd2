//! The 9×9 board and its mutation rules.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use nonet_core::{Digit, DigitSet, Position};

use crate::{
    cell::CellState,
    error::{ClearError, ClueError, OutOfBounds, ParseBoardError, PlaceError},
};

/// A 9×9 Sudoku board with enforced placement legality.
///
/// The board is the single source of truth for the grid: after every
/// mutation, each filled cell's digit is unique within its row, column, and
/// 3×3 box, and a rejected mutation leaves the grid unchanged. Because the
/// invariant is maintained incrementally, a fully filled board is
/// automatically a legal solution and [`Board::is_complete`] needs no
/// re-validation pass.
///
/// Coordinates arriving from a presentation layer are untrusted `u8`s; the
/// raw-coordinate operations ([`place`], [`clear`], [`value_at`],
/// [`is_valid_move`]) range-check them and report failures as error values.
/// Typed accessors like [`cell`] take a [`Position`] and cannot fail.
///
/// [`place`]: Board::place
/// [`clear`]: Board::clear
/// [`value_at`]: Board::value_at
/// [`is_valid_move`]: Board::is_valid_move
/// [`cell`]: Board::cell
///
/// # Examples
///
/// ```
/// use nonet_board::{Board, PlaceError};
///
/// let mut board = Board::new();
/// board.place(0, 0, 5).unwrap();
/// assert_eq!(board.value_at(0, 0).unwrap().map(u8::from), Some(5));
///
/// // Same row: rejected, grid unchanged.
/// assert_eq!(board.place(0, 1, 5), Err(PlaceError::ConflictsWithPeer));
/// assert_eq!(board.value_at(0, 1).unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with no clues.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [CellState::Empty; 81],
        }
    }

    /// Creates a board pre-seeded with the given clues.
    ///
    /// Clues are `((row, col), value)` with raw coordinates and values; they
    /// are validated as a set before any cell is written.
    ///
    /// # Errors
    ///
    /// Returns [`ClueError::OutOfBounds`] or [`ClueError::InvalidDigit`] for
    /// a malformed clue, [`ClueError::DuplicateCell`] if two clues target the
    /// same cell, and [`ClueError::Conflict`] if the clue set violates
    /// row/column/box uniqueness.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_board::Board;
    ///
    /// let board = Board::with_clues([((0, 0), 5), ((4, 4), 7)]).unwrap();
    /// assert!(board.cell(nonet_core::Position::new(0, 0)).is_clue());
    /// ```
    pub fn with_clues(
        clues: impl IntoIterator<Item = ((u8, u8), u8)>,
    ) -> Result<Self, ClueError> {
        let mut board = Self::new();
        for ((row, col), value) in clues {
            let pos = Position::try_new(row, col).ok_or(ClueError::OutOfBounds { row, col })?;
            let digit = Digit::new(value).ok_or(ClueError::InvalidDigit { value })?;
            if board.cell(pos).is_filled() {
                return Err(ClueError::DuplicateCell { row, col });
            }
            if board.conflicts_with_peer(pos, digit) {
                return Err(ClueError::Conflict { row, col });
            }
            board.cells[pos.cell_index()] = CellState::Clue(digit);
        }
        Ok(board)
    }

    /// Creates the fixed three-clue starter layout: 5 at (0, 0), 7 at
    /// (4, 4), and 9 at (8, 8).
    #[must_use]
    pub fn starter() -> Self {
        Self::with_clues([((0, 0), 5), ((4, 4), 7), ((8, 8), 9)])
            .expect("starter clues are legal")
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.cell_index()]
    }

    /// Returns the digit at the given raw coordinate, or `None` for an empty
    /// cell.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `row` or `col` is 9 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_board::Board;
    ///
    /// let board = Board::starter();
    /// assert_eq!(board.value_at(4, 4).unwrap().map(u8::from), Some(7));
    /// assert_eq!(board.value_at(4, 5).unwrap(), None);
    /// assert!(board.value_at(9, 0).is_err());
    /// assert!(board.value_at(0, 9).is_err());
    /// ```
    pub fn value_at(&self, row: u8, col: u8) -> Result<Option<Digit>, OutOfBounds> {
        let pos = Position::try_new(row, col).ok_or(OutOfBounds { row, col })?;
        Ok(self.cell(pos).as_digit())
    }

    fn conflicts_with_peer(&self, pos: Position, digit: Digit) -> bool {
        pos.peers()
            .into_iter()
            .any(|peer| self.cell(peer).as_digit() == Some(digit))
    }

    /// Returns `true` iff placing `value` at `(row, col)` would be accepted:
    /// the coordinate and value are in range, the cell is empty, and no peer
    /// holds the digit.
    ///
    /// Pure query; never mutates the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_board::Board;
    ///
    /// let board = Board::starter();
    /// assert!(board.is_valid_move(0, 1, 3));
    /// assert!(!board.is_valid_move(0, 1, 5)); // 5 is a clue in the same row
    /// assert!(!board.is_valid_move(0, 0, 3)); // occupied
    /// assert!(!board.is_valid_move(9, 0, 3)); // out of range
    /// ```
    #[must_use]
    pub fn is_valid_move(&self, row: u8, col: u8, value: u8) -> bool {
        let (Some(pos), Some(digit)) = (Position::try_new(row, col), Digit::new(value)) else {
            return false;
        };
        self.cell(pos).is_empty() && !self.conflicts_with_peer(pos, digit)
    }

    /// Places `value` at `(row, col)` as a player entry.
    ///
    /// The placement is validated first; on rejection the grid is left
    /// unchanged. This and [`Board::clear`] are the only mutators.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] or [`PlaceError::InvalidDigit`]
    /// for malformed input, [`PlaceError::CellOccupied`] if the cell already
    /// holds a digit, and [`PlaceError::ConflictsWithPeer`] if another cell
    /// in the same row, column, or box holds `value`.
    pub fn place(&mut self, row: u8, col: u8, value: u8) -> Result<(), PlaceError> {
        let pos = Position::try_new(row, col).ok_or(PlaceError::OutOfBounds { row, col })?;
        let digit = Digit::new(value).ok_or(PlaceError::InvalidDigit { value })?;
        if self.cell(pos).is_filled() {
            return Err(PlaceError::CellOccupied);
        }
        if self.conflicts_with_peer(pos, digit) {
            return Err(PlaceError::ConflictsWithPeer);
        }
        self.cells[pos.cell_index()] = CellState::Entry(digit);
        Ok(())
    }

    /// Empties the entry cell at `(row, col)`.
    ///
    /// Clearing an already-empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ClearError::OutOfBounds`] for a malformed coordinate and
    /// [`ClearError::CellIsClue`] if the cell is a construction-time clue.
    pub fn clear(&mut self, row: u8, col: u8) -> Result<(), ClearError> {
        let pos = Position::try_new(row, col).ok_or(ClearError::OutOfBounds { row, col })?;
        if self.cell(pos).is_clue() {
            return Err(ClearError::CellIsClue);
        }
        self.cells[pos.cell_index()] = CellState::Empty;
        Ok(())
    }

    /// Returns `true` iff every cell is filled.
    ///
    /// Since legality is enforced on every mutation, a complete board is
    /// necessarily a legal solution.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_filled())
    }

    /// Returns the digits that [`Board::place`] would currently accept at
    /// the given position.
    ///
    /// For a filled cell the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_board::Board;
    /// use nonet_core::{Digit, Position};
    ///
    /// let board = Board::starter();
    /// let candidates = board.candidates_at(Position::new(0, 1));
    /// assert!(!candidates.contains(Digit::D5)); // clue in the same row
    /// assert!(candidates.contains(Digit::D3));
    /// ```
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        if self.cell(pos).is_filled() {
            return DigitSet::EMPTY;
        }
        let mut candidates = DigitSet::FULL;
        for peer in pos.peers() {
            if let Some(digit) = self.cell(peer).as_digit() {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Returns how many cells currently hold each digit.
    ///
    /// Index 0 counts occurrences of digit 1, index 8 of digit 9. Clues and
    /// entries both count. Useful for keypad-style presentation layers that
    /// grey out exhausted digits.
    #[must_use]
    pub fn digit_counts(&self) -> [usize; 9] {
        let mut counts = [0; 9];
        for cell in &self.cells {
            if let Some(digit) = cell.as_digit() {
                counts[usize::from(digit.value()) - 1] += 1;
            }
        }
        counts
    }

    /// Returns the number of filled cells (clues and entries).
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Returns an iterator over the positions of the construction-time clues.
    pub fn clue_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.cell(*pos).is_clue())
    }
}

/// Renders the board as 81 characters in row-major order, `'1'`-`'9'` for
/// filled cells and `'.'` for empty ones.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell.as_digit() {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Parses an 81-character row-major grid string, `'1'`-`'9'` or `'.'` per
/// cell. Every parsed digit becomes a clue, and the resulting grid is
/// validated for row/column/box uniqueness.
///
/// # Examples
///
/// ```
/// use nonet_board::Board;
///
/// let text = format!("5{}", ".".repeat(80));
/// let board: Board = text.parse().unwrap();
/// assert_eq!(board.value_at(0, 0).unwrap().map(u8::from), Some(5));
/// assert_eq!(board.to_string(), text);
/// ```
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseBoardError::BadLength { len });
        }
        let mut clues = Vec::new();
        for (index, ch) in s.chars().enumerate() {
            let pos = Position::ALL[index];
            match ch {
                '.' => {}
                '1'..='9' => {
                    let value = u8::try_from(ch.to_digit(10).expect("ascii digit"))
                        .expect("digit fits in u8");
                    clues.push(((pos.row(), pos.col()), value));
                }
                _ => return Err(ParseBoardError::BadChar { index, ch }),
            }
        }
        Self::with_clues(clues).map_err(ParseBoardError::IllegalGrid)
    }
}

#[cfg(test)]
mod tests {
    use nonet_core::Digit;
    use proptest::prelude::*;

    use super::*;

    fn digit_at(board: &Board, row: u8, col: u8) -> Option<u8> {
        board.value_at(row, col).unwrap().map(u8::from)
    }

    #[test]
    fn test_place_on_empty_board() {
        let mut board = Board::new();
        board.place(0, 0, 5).unwrap();
        assert_eq!(digit_at(&board, 0, 0), Some(5));
        assert!(board.cell(Position::new(0, 0)).is_entry());
    }

    #[test]
    fn test_place_rejects_row_conflict() {
        let mut board = Board::new();
        board.place(0, 0, 5).unwrap();
        assert_eq!(board.place(0, 1, 5), Err(PlaceError::ConflictsWithPeer));
        assert_eq!(digit_at(&board, 0, 1), None);
    }

    #[test]
    fn test_place_accepts_unrelated_cell() {
        let mut board = Board::new();
        board.place(0, 0, 5).unwrap();
        // Different row, column, and box.
        board.place(3, 3, 5).unwrap();
        assert_eq!(digit_at(&board, 3, 3), Some(5));
    }

    #[test]
    fn test_place_rejects_box_conflict() {
        let mut board = Board::new();
        board.place(1, 1, 7).unwrap();
        assert_eq!(board.place(2, 2, 7), Err(PlaceError::ConflictsWithPeer));
    }

    #[test]
    fn test_place_rejects_column_conflict() {
        let mut board = Board::new();
        board.place(0, 4, 2).unwrap();
        assert_eq!(board.place(8, 4, 2), Err(PlaceError::ConflictsWithPeer));
    }

    #[test]
    fn test_place_on_occupied_cell_keeps_old_value() {
        let mut board = Board::new();
        board.place(0, 0, 5).unwrap();
        assert_eq!(board.place(0, 0, 6), Err(PlaceError::CellOccupied));
        assert_eq!(digit_at(&board, 0, 0), Some(5));
    }

    #[test]
    fn test_place_validates_input_ranges() {
        let mut board = Board::new();
        assert_eq!(
            board.place(9, 0, 1),
            Err(PlaceError::OutOfBounds { row: 9, col: 0 })
        );
        assert_eq!(
            board.place(0, 9, 1),
            Err(PlaceError::OutOfBounds { row: 0, col: 9 })
        );
        assert_eq!(board.place(0, 0, 0), Err(PlaceError::InvalidDigit { value: 0 }));
        assert_eq!(
            board.place(0, 0, 10),
            Err(PlaceError::InvalidDigit { value: 10 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut board = Board::new();
        board.place(0, 0, 5).unwrap();
        let snapshot = board.clone();
        for _ in 0..3 {
            assert!(board.place(0, 1, 5).is_err());
            assert!(board.place(0, 0, 6).is_err());
            assert!(board.place(42, 42, 42).is_err());
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_value_at_bounds() {
        let board = Board::new();
        assert_eq!(board.value_at(9, 0), Err(OutOfBounds { row: 9, col: 0 }));
        assert_eq!(board.value_at(0, 9), Err(OutOfBounds { row: 0, col: 9 }));
        assert_eq!(
            board.value_at(u8::MAX, 0),
            Err(OutOfBounds { row: u8::MAX, col: 0 })
        );
        assert_eq!(board.value_at(8, 8), Ok(None));
    }

    #[test]
    fn test_clear_round_trip() {
        let mut board = Board::new();
        board.place(4, 4, 7).unwrap();
        let before = Board::new();
        board.clear(4, 4).unwrap();
        assert_eq!(board, before);

        // Clearing an already-empty cell is a no-op.
        board.clear(4, 4).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_protects_clues() {
        let mut board = Board::starter();
        assert_eq!(board.clear(0, 0), Err(ClearError::CellIsClue));
        assert_eq!(digit_at(&board, 0, 0), Some(5));
        assert_eq!(
            board.clear(9, 9),
            Err(ClearError::OutOfBounds { row: 9, col: 9 })
        );
    }

    #[test]
    fn test_with_clues_validation() {
        assert_eq!(
            Board::with_clues([((9, 0), 1)]),
            Err(ClueError::OutOfBounds { row: 9, col: 0 })
        );
        assert_eq!(
            Board::with_clues([((0, 0), 0)]),
            Err(ClueError::InvalidDigit { value: 0 })
        );
        assert_eq!(
            Board::with_clues([((0, 0), 1), ((0, 0), 2)]),
            Err(ClueError::DuplicateCell { row: 0, col: 0 })
        );
        // Same column.
        assert_eq!(
            Board::with_clues([((0, 0), 1), ((5, 0), 1)]),
            Err(ClueError::Conflict { row: 5, col: 0 })
        );
    }

    #[test]
    fn test_starter_layout() {
        let board = Board::starter();
        assert_eq!(digit_at(&board, 0, 0), Some(5));
        assert_eq!(digit_at(&board, 4, 4), Some(7));
        assert_eq!(digit_at(&board, 8, 8), Some(9));
        assert_eq!(board.filled_count(), 3);
        assert_eq!(board.clue_positions().count(), 3);
    }

    #[test]
    fn test_is_valid_move_matches_place() {
        let mut board = Board::starter();
        for row in 0..9 {
            for col in 0..9 {
                for value in 1..=9 {
                    let expected = board.is_valid_move(row, col, value);
                    let accepted = board.clone().place(row, col, value).is_ok();
                    assert_eq!(expected, accepted, "({row}, {col}) <- {value}");
                }
            }
        }
        board.place(0, 1, 3).unwrap();
        assert!(!board.is_valid_move(0, 1, 3));
    }

    #[test]
    fn test_successful_place_excludes_digit_from_peers() {
        let mut board = Board::new();
        board.place(4, 4, 7).unwrap();
        let pos = Position::new(4, 4);
        for peer in pos.peers() {
            assert_ne!(board.cell(peer).as_digit(), Some(Digit::D7));
            assert!(!board.is_valid_move(peer.row(), peer.col(), 7));
        }
    }

    #[test]
    fn test_candidates_at_reflects_peers() {
        let board = Board::starter();
        let candidates = board.candidates_at(Position::new(0, 1));
        assert!(!candidates.contains(Digit::D5));
        assert_eq!(candidates.len(), 8);

        // A filled cell has no candidates.
        assert!(board.candidates_at(Position::new(0, 0)).is_empty());

        // An untouched region sees everything.
        assert_eq!(board.candidates_at(Position::new(6, 2)), DigitSet::FULL);
    }

    #[test]
    fn test_digit_counts() {
        let mut board = Board::starter();
        assert_eq!(board.digit_counts()[4], 1); // one 5 (the clue)
        board.place(3, 3, 5).unwrap();
        board.place(6, 6, 5).unwrap();
        assert_eq!(board.digit_counts()[4], 3);
        assert_eq!(board.digit_counts()[0], 0);
    }

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_is_complete() {
        let mut board = Board::new();
        assert!(!board.is_complete());

        let solved: Board = SOLVED.parse().expect("legal solved grid");
        assert!(solved.is_complete());

        // Rebuild the same solution move by move; only the final placement
        // completes the board.
        let values: Vec<u8> = SOLVED.bytes().map(|b| b - b'0').collect();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert!(!board.is_complete());
            board.place(pos.row(), pos.col(), values[i]).unwrap();
        }
        assert!(board.is_complete());
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let solved: Board = SOLVED.parse().unwrap();
        assert_eq!(solved.to_string(), SOLVED);

        let sparse = format!("5...{}", ".".repeat(77));
        let board: Board = sparse.parse().unwrap();
        assert_eq!(board.to_string(), sparse);
        assert!(board.cell(Position::new(0, 0)).is_clue());
    }

    fn grid_invariant_holds(board: &Board) -> bool {
        Position::ALL.into_iter().all(|pos| {
            board.cell(pos).as_digit().is_none_or(|digit| {
                pos.peers()
                    .into_iter()
                    .all(|peer| board.cell(peer).as_digit() != Some(digit))
            })
        })
    }

    proptest! {
        #[test]
        fn prop_random_move_sequence_preserves_invariant(
            moves in prop::collection::vec((0u8..12, 0u8..12, 0u8..12), 0..120),
        ) {
            let mut board = Board::starter();
            for (row, col, value) in moves {
                let before = board.clone();
                match board.place(row, col, value) {
                    Ok(()) => {
                        prop_assert_eq!(
                            board.value_at(row, col).unwrap().map(u8::from),
                            Some(value)
                        );
                    }
                    Err(_) => prop_assert_eq!(&board, &before),
                }
                prop_assert!(grid_invariant_holds(&board));
            }
        }

        #[test]
        fn prop_place_clear_round_trip(row in 0u8..9, col in 0u8..9, value in 1u8..=9) {
            let mut board = Board::new();
            let before = board.clone();
            board.place(row, col, value).unwrap();
            board.clear(row, col).unwrap();
            prop_assert_eq!(board, before);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(ParseBoardError::BadLength { len: 3 })
        );
        let bad_char = format!("x{}", ".".repeat(80));
        assert_eq!(
            bad_char.parse::<Board>(),
            Err(ParseBoardError::BadChar { index: 0, ch: 'x' })
        );
        // Two 1s in the first row.
        let conflict = format!("1.1{}", ".".repeat(78));
        assert_eq!(
            conflict.parse::<Board>(),
            Err(ParseBoardError::IllegalGrid(ClueError::Conflict {
                row: 0,
                col: 2
            }))
        );
    }
}
