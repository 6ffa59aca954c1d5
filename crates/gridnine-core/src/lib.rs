//! Core data structures for the gridnine solver.
//!
//! This crate provides the data model shared by the solver and the
//! command-line frontend:
//!
//! - [`digit`]: type-safe representation of puzzle digits 1-9
//! - [`digit_set`]: candidate sets of digits for a single cell
//! - [`position`]: (row, column) addressing of the 9×9 board
//! - [`cell`]: a single cell, either fixed to a digit or open with
//!   remaining candidates
//! - [`grid`]: the owned 9×9 board with its text rendering
//! - [`parse`]: the comma-separated grid loader and its errors
//!
//! # Examples
//!
//! ```
//! use gridnine_core::{Grid, Position};
//!
//! let grid: Grid = "\
//! 5,3,x,x,7,x,x,x,x
//! 6,x,x,1,9,5,x,x,x
//! x,9,8,x,x,x,x,6,x
//! 8,x,x,x,6,x,x,x,3
//! 4,x,x,8,x,3,x,x,1
//! 7,x,x,x,2,x,x,x,6
//! x,6,x,x,x,x,2,8,x
//! x,x,x,4,1,9,x,x,5
//! x,x,x,x,8,x,x,7,9"
//!     .parse()?;
//!
//! assert_eq!(grid.open_count(), 51);
//! assert!(grid[Position::new(0, 2)].is_open());
//! # Ok::<(), gridnine_core::ParseGridError>(())
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod parse;
pub mod position;

pub use self::{
    cell::Cell, digit::Digit, digit_set::DigitSet, grid::Grid, parse::ParseGridError,
    position::Position,
};
