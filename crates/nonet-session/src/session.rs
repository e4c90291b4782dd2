//! The game session driving one board.

use log::{debug, info};
use nonet_board::{Board, ClearError, ClueError, PlaceError};
use nonet_core::Position;

use crate::observer::{BoardObserver, BoardSnapshot};

/// A game session: exclusive owner of one [`Board`].
///
/// The session is the single mutation entry point exposed to the
/// presentation layer. It validates nothing itself; it forwards requests to
/// the board, logs the outcome, and notifies its observer with a fresh
/// [`BoardSnapshot`] whenever the grid actually changed.
///
/// # Examples
///
/// ```
/// use nonet_session::Session;
///
/// let mut session = Session::starter();
/// session.request_placement(0, 1, 3).unwrap();
/// assert_eq!(session.board().value_at(0, 1).unwrap().map(u8::from), Some(3));
///
/// // The clue at (0, 0) stays protected.
/// session.request_clear(0, 0).unwrap_err();
/// ```
#[derive(Debug)]
pub struct Session<O = ()> {
    board: Board,
    observer: O,
}

impl Session<()> {
    /// Creates a session over an empty board, with no observer.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a session over the fixed three-clue starter board.
    #[must_use]
    pub fn starter() -> Self {
        Self::from_board(Board::starter())
    }

    /// Creates a session over a board pre-seeded with the given clues.
    ///
    /// # Errors
    ///
    /// Returns [`ClueError`] if the clue set is malformed or self-conflicting.
    pub fn with_clues(
        clues: impl IntoIterator<Item = ((u8, u8), u8)>,
    ) -> Result<Self, ClueError> {
        Ok(Self::from_board(Board::with_clues(clues)?))
    }

    /// Creates a session that takes ownership of an existing board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            observer: (),
        }
    }
}

impl Default for Session<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: BoardObserver> Session<O> {
    /// Creates a session over an empty board with the given observer.
    #[must_use]
    pub fn with_observer(observer: O) -> Self {
        Session::new().observe(observer)
    }

    /// Requests placement of `value` at `(row, col)`.
    ///
    /// On success the observer is notified with a snapshot whose delta is
    /// the placed cell.
    ///
    /// # Errors
    ///
    /// Returns the board's [`PlaceError`] on rejection; the grid and the
    /// observer are untouched.
    pub fn request_placement(&mut self, row: u8, col: u8, value: u8) -> Result<(), PlaceError> {
        if let Err(reason) = self.board.place(row, col, value) {
            debug!("placement of {value} at ({row}, {col}) rejected: {reason}");
            return Err(reason);
        }
        debug!("placed {value} at ({row}, {col})");
        self.notify(Position::new(row, col));
        if self.board.is_complete() {
            info!("board complete");
        }
        Ok(())
    }

    /// Requests clearing of the cell at `(row, col)`.
    ///
    /// The observer is notified only if the cell actually changed; clearing
    /// an already-empty cell succeeds silently.
    ///
    /// # Errors
    ///
    /// Returns the board's [`ClearError`] on rejection; the grid and the
    /// observer are untouched.
    pub fn request_clear(&mut self, row: u8, col: u8) -> Result<(), ClearError> {
        let had_digit = self
            .board
            .value_at(row, col)
            .map_err(|oob| ClearError::OutOfBounds {
                row: oob.row,
                col: oob.col,
            })?
            .is_some();
        if let Err(reason) = self.board.clear(row, col) {
            debug!("clear of ({row}, {col}) rejected: {reason}");
            return Err(reason);
        }
        if had_digit {
            debug!("cleared ({row}, {col})");
            self.notify(Position::new(row, col));
        }
        Ok(())
    }

    fn notify(&mut self, pos: Position) {
        let delta = (pos, self.board.cell(pos).as_digit());
        let snapshot = BoardSnapshot::capture(&self.board, delta);
        self.observer.board_changed(&snapshot);
    }
}

impl<O> Session<O> {
    /// Replaces the observer, keeping the board.
    pub fn observe<P: BoardObserver>(self, observer: P) -> Session<P> {
        Session {
            board: self.board,
            observer,
        }
    }

    /// Returns a read-only reference to the board, for full redraw.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a reference to the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns `true` iff every cell on the board is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    /// Consumes the session, ending the game and releasing the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
