//! Board position addressing.

use std::fmt::{self, Display};

/// A (row, column) coordinate on the 9×9 board, both axes 0-8.
///
/// Row 0 is the topmost row, column 0 the leftmost column. Positions
/// are plain values; the board itself is indexed by them.
///
/// # Examples
///
/// ```
/// use gridnine_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.block_origin(), Position::new(3, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
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

    /// Returns the top-left position of the 3×3 block containing this
    /// position.
    ///
    /// Integer division by 3 snaps both axes to the block grid, which
    /// partitions the board into nine non-overlapping blocks.
    #[must_use]
    pub const fn block_origin(self) -> Self {
        Self {
            row: 3 * (self.row / 3),
            col: 3 * (self.col / 3),
        }
    }

    /// Returns the linear row-major index of this position (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self::new(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
