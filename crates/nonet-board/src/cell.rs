//! Per-cell state with clue provenance.

use nonet_core::Digit;

/// The state of a single board cell.
///
/// A filled cell remembers where its digit came from: [`Clue`] digits were
/// part of the puzzle at construction time and are immutable for the life of
/// the board, while [`Entry`] digits were placed through [`Board::place`] and
/// may be cleared again.
///
/// [`Clue`]: CellState::Clue
/// [`Entry`]: CellState::Entry
/// [`Board::place`]: crate::Board::place
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// The cell holds no digit.
    #[default]
    Empty,
    /// A digit pre-filled at construction; not editable.
    Clue(Digit),
    /// A digit placed during play; removable via `clear`.
    Entry(Digit),
}

impl CellState {
    /// Returns the digit in the cell, regardless of provenance, or `None`
    /// for an empty cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_board::CellState;
    /// use nonet_core::Digit;
    ///
    /// assert_eq!(CellState::Empty.as_digit(), None);
    /// assert_eq!(CellState::Clue(Digit::D4).as_digit(), Some(Digit::D4));
    /// assert_eq!(CellState::Entry(Digit::D4).as_digit(), Some(Digit::D4));
    /// ```
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Empty => None,
            Self::Clue(digit) | Self::Entry(digit) => Some(digit),
        }
    }

    /// Returns `true` if the cell holds a digit of either provenance.
    #[must_use]
    pub const fn is_filled(self) -> bool {
        !matches!(self, Self::Empty)
    }
}
