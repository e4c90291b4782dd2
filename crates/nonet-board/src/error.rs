//! Error types for board construction and mutation.
//!
//! Every error here is a plain value returned to the immediate caller; none
//! of them is fatal. A rejected operation leaves the board unchanged, so the
//! caller can report the reason and let the user try a different cell.

/// A coordinate outside the 9×9 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("coordinate ({row}, {col}) is outside the 9x9 board")]
pub struct OutOfBounds {
    /// The offending row index.
    pub row: u8,
    /// The offending column index.
    pub col: u8,
}

/// Reasons a placement request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The target coordinate is outside the board.
    #[display("coordinate ({row}, {col}) is outside the 9x9 board")]
    OutOfBounds {
        /// The offending row index.
        row: u8,
        /// The offending column index.
        col: u8,
    },
    /// The value is not a digit in the range 1-9.
    #[display("value {value} is not a digit in 1-9")]
    InvalidDigit {
        /// The offending value.
        value: u8,
    },
    /// The target cell already holds a digit.
    #[display("cell is already occupied")]
    CellOccupied,
    /// Another cell in the same row, column, or box holds the digit.
    #[display("digit already present in row, column, or box")]
    ConflictsWithPeer,
}

/// Reasons a clear request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClearError {
    /// The target coordinate is outside the board.
    #[display("coordinate ({row}, {col}) is outside the 9x9 board")]
    OutOfBounds {
        /// The offending row index.
        row: u8,
        /// The offending column index.
        col: u8,
    },
    /// The target cell is a construction-time clue.
    #[display("cell is a clue and cannot be cleared")]
    CellIsClue,
}

/// Reasons a clue set is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClueError {
    /// A clue coordinate is outside the board.
    #[display("clue coordinate ({row}, {col}) is outside the 9x9 board")]
    OutOfBounds {
        /// The offending row index.
        row: u8,
        /// The offending column index.
        col: u8,
    },
    /// A clue value is not a digit in the range 1-9.
    #[display("clue value {value} is not a digit in 1-9")]
    InvalidDigit {
        /// The offending value.
        value: u8,
    },
    /// Two clues target the same cell.
    #[display("duplicate clue at ({row}, {col})")]
    DuplicateCell {
        /// The row index targeted twice.
        row: u8,
        /// The column index targeted twice.
        col: u8,
    },
    /// The clue set violates row/column/box uniqueness.
    #[display("clue at ({row}, {col}) conflicts with another clue")]
    Conflict {
        /// The row index of the conflicting clue.
        row: u8,
        /// The column index of the conflicting clue.
        col: u8,
    },
}

/// Errors from parsing an 81-character board string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The string is not exactly 81 characters long.
    #[display("expected 81 characters, got {len}")]
    BadLength {
        /// The actual character count.
        len: usize,
    },
    /// A character is neither a digit `1`-`9` nor `.`.
    #[display("invalid character {ch:?} at index {index}")]
    BadChar {
        /// The byte index of the character.
        index: usize,
        /// The offending character.
        ch: char,
    },
    /// The parsed digits violate row/column/box uniqueness.
    #[display("grid is not a legal board: {_0}")]
    IllegalGrid(ClueError),
}
