//! The 9×9 board and its text rendering.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::{cell::Cell, position::Position};

/// The owned 9×9 board of 81 [`Cell`]s, addressed by [`Position`].
///
/// A fresh grid is all-open; the loader fixes the given digits at
/// construction time and the solver mutates the rest in place.
///
/// # Examples
///
/// ```
/// use gridnine_core::{Cell, Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// assert_eq!(grid.open_count(), 81);
///
/// grid[Position::new(0, 0)] = Cell::Fixed(Digit::D5);
/// assert_eq!(grid.open_count(), 80);
/// assert!(!grid.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid([Cell; 81]);

impl Grid {
    /// Creates a grid with all 81 cells open and all candidates live.
    #[must_use]
    pub const fn new() -> Self {
        Self([Cell::open(); 81])
    }

    /// Returns `true` if every cell has a fixed digit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|cell| !cell.is_open())
    }

    /// Returns the number of cells without a fixed digit.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_open()).count()
    }

    /// Returns an iterator over all cells with their positions, in
    /// row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        Position::all().map(|pos| (pos, &self[pos]))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.0[pos.cell_index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.0[pos.cell_index()]
    }
}

/// Console rendering: one line per row, cells as their digit or `x`,
/// `||` after columns 3 and 6, and a line of `=` after rows 3 and 6.
///
/// ```text
/// 5 3 x || x 7 x || x x x
/// 6 x x || 1 9 5 || x x x
/// x 9 8 || x x x || x 6 x
/// =======================
/// ...
/// ```
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                match self[Position::new(row, col)].value() {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "x")?,
                }
                if col < 8 {
                    write!(f, " ")?;
                    if col == 2 || col == 5 {
                        write!(f, "|| ")?;
                    }
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "=======================")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit;

    #[test]
    fn test_new_grid_is_all_open() {
        let grid = Grid::new();
        assert_eq!(grid.open_count(), 81);
        assert!(!grid.is_solved());
        for (_, cell) in grid.cells() {
            assert_eq!(*cell, Cell::open());
        }
    }

    #[test]
    fn test_indexing() {
        let mut grid = Grid::new();
        let pos = Position::new(3, 7);
        grid[pos] = Cell::Fixed(Digit::D4);
        assert_eq!(grid[pos].value(), Some(Digit::D4));
        assert!(grid[Position::new(3, 6)].is_open());
    }

    #[test]
    fn test_display_layout() {
        let mut grid = Grid::new();
        grid[Position::new(0, 0)] = Cell::Fixed(Digit::D5);
        grid[Position::new(0, 4)] = Cell::Fixed(Digit::D7);
        grid[Position::new(8, 8)] = Cell::Fixed(Digit::D9);

        let text = grid.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11); // 9 rows + 2 separators
        assert_eq!(lines[0], "5 x x || x 7 x || x x x");
        assert_eq!(lines[3], "=======================");
        assert_eq!(lines[7], "=======================");
        assert_eq!(lines[10], "x x x || x x x || x x 9");
    }
}
