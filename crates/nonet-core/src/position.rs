//! Board position (row, col) coordinate type.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are both in the range 0-8, with `(0, 0)` in the top-left
/// corner and rows growing downward (row-major board order). The constructor
/// enforces the range, so a `Position` always names a real cell.
///
/// # Examples
///
/// ```
/// use nonet_core::Position;
///
/// let pos = Position::new(2, 7);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 2); // top-right box
///
/// // Range-checked construction for untrusted coordinates
/// assert!(Position::try_new(9, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 81);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater. Use [`Position::try_new`]
    /// for coordinates that may be out of range.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from untrusted coordinates, returning `None` if
    /// either index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::Position;
    ///
    /// assert_eq!(Position::try_new(0, 8), Some(Position::new(0, 8)));
    /// assert_eq!(Position::try_new(0, 9), None);
    /// assert_eq!(Position::try_new(9, 0), None);
    /// ```
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of this position in row-major board order (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this position,
    /// numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the top-left position of the 3×3 box containing this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::Position;
    ///
    /// assert_eq!(Position::new(4, 7).box_origin(), Position::new(3, 6));
    /// ```
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: (self.row / 3) * 3,
            col: (self.col / 3) * 3,
        }
    }

    /// Returns the 20 distinct peer cells of this position.
    ///
    /// Peers are all cells sharing a row, column, or box with this position,
    /// excluding the position itself. The four box cells that also share the
    /// row or column are reported once.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::Position;
    ///
    /// let peers = Position::new(0, 0).peers();
    /// assert!(peers.contains(&Position::new(0, 8))); // same row
    /// assert!(peers.contains(&Position::new(8, 0))); // same column
    /// assert!(peers.contains(&Position::new(2, 2))); // same box
    /// assert!(!peers.contains(&Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn peers(self) -> [Self; 20] {
        let mut peers = [Self { row: 0, col: 0 }; 20];
        let mut n = 0;
        for i in 0..9 {
            if i != self.col {
                peers[n] = Self {
                    row: self.row,
                    col: i,
                };
                n += 1;
            }
            if i != self.row {
                peers[n] = Self {
                    row: i,
                    col: self.col,
                };
                n += 1;
            }
        }
        let origin = self.box_origin();
        for row in origin.row..origin.row + 3 {
            for col in origin.col..origin.col + 3 {
                // Row- and column-aligned box cells were already collected above.
                if row != self.row && col != self.col {
                    peers[n] = Self { row, col };
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_covers_board_in_row_major_order() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.cell_index(), i);
        }
    }

    #[test]
    fn test_try_new_boundaries() {
        assert!(Position::try_new(8, 8).is_some());
        assert_eq!(Position::try_new(9, 0), None);
        assert_eq!(Position::try_new(0, 9), None);
        assert_eq!(Position::try_new(u8::MAX, 0), None);
    }

    #[test]
    fn test_box_index_layout() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_peers_of_corner() {
        let peers = Position::new(0, 0).peers();
        let unique: HashSet<_> = peers.iter().copied().collect();
        assert_eq!(unique.len(), 20);
        assert!(!unique.contains(&Position::new(0, 0)));
        assert!(unique.contains(&Position::new(0, 5)));
        assert!(unique.contains(&Position::new(7, 0)));
        assert!(unique.contains(&Position::new(1, 1)));
        // Outside row, column, and box.
        assert!(!unique.contains(&Position::new(3, 3)));
    }

    proptest! {
        #[test]
        fn prop_peers_are_distinct_and_symmetric(row in 0u8..9, col in 0u8..9) {
            let pos = Position::new(row, col);
            let peers = pos.peers();
            let unique: HashSet<_> = peers.iter().copied().collect();
            prop_assert_eq!(unique.len(), 20);
            prop_assert!(!unique.contains(&pos));
            for peer in peers {
                prop_assert!(
                    peer.row() == pos.row()
                        || peer.col() == pos.col()
                        || peer.box_index() == pos.box_index()
                );
                // Peer relation is symmetric.
                prop_assert!(peer.peers().contains(&pos));
            }
        }
    }
}
