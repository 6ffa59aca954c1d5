//! Peer scopes for elimination.

use gridnine_core::Position;

/// A peer scope: the row, column, or 3×3 block containing a cell.
///
/// The three elimination rules share one loop shape and differ only in
/// which nine positions they scan; `House` is that parameterization.
///
/// # Examples
///
/// ```
/// use gridnine_core::Position;
/// use gridnine_solver::House;
///
/// let peers: Vec<_> = House::Block.positions(Position::new(4, 4)).collect();
/// assert_eq!(peers.len(), 9);
/// assert!(peers.contains(&Position::new(3, 3)));
/// assert!(peers.contains(&Position::new(5, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// The row containing the cell.
    Row,
    /// The column containing the cell.
    Column,
    /// The 3×3 block containing the cell.
    Block,
}

impl House {
    /// All scopes, in the order the engine applies them.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Block];

    /// Returns the nine positions of this scope around `origin`,
    /// including `origin` itself.
    ///
    /// Scanning the origin is harmless: an open cell contributes no
    /// fixed value, and elimination is only ever applied to open cells.
    pub fn positions(self, origin: Position) -> impl Iterator<Item = Position> {
        let base = origin.block_origin();
        (0..9u8).map(move |i| match self {
            Self::Row => Position::new(origin.row(), i),
            Self::Column => Position::new(i, origin.col()),
            Self::Block => Position::new(base.row() + i / 3, base.col() + i % 3),
        })
    }
}
