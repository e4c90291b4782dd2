//! The Nonet board model: grid state and placement legality.
//!
//! This crate owns the 9×9 grid and is the single source of truth for the
//! Sudoku placement rules. Cells carry provenance ([`CellState::Clue`] for
//! pre-filled digits, [`CellState::Entry`] for player input), every mutation
//! is validated before it is applied, and a rejected mutation leaves the grid
//! untouched.
//!
//! # Examples
//!
//! ```
//! use nonet_board::{Board, PlaceError};
//!
//! let mut board = Board::new();
//! board.place(0, 0, 5).unwrap();
//!
//! // 5 is now taken in row 0
//! assert_eq!(board.place(0, 1, 5), Err(PlaceError::ConflictsWithPeer));
//!
//! // ...but fine in an unrelated row, column, and box
//! board.place(3, 3, 5).unwrap();
//! ```

pub mod board;
pub mod cell;
pub mod error;

pub use self::{
    board::Board,
    cell::CellState,
    error::{ClearError, ClueError, OutOfBounds, ParseBoardError, PlaceError},
};
