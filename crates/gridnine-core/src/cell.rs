//! A single board cell.

use crate::{digit::Digit, digit_set::DigitSet};

/// One cell of the board: either fixed to a digit or open with a set
/// of remaining candidates.
///
/// The two states are mutually exclusive by construction. A fixed cell
/// has no candidate set to maintain, and a cell only ever moves from
/// [`Open`](Self::Open) to [`Fixed`](Self::Fixed), never back.
///
/// # Examples
///
/// ```
/// use gridnine_core::{Cell, Digit, DigitSet};
///
/// let cell = Cell::open();
/// assert!(cell.is_open());
/// assert_eq!(cell.candidates(), Some(DigitSet::FULL));
///
/// let cell = Cell::Fixed(Digit::D7);
/// assert_eq!(cell.value(), Some(Digit::D7));
/// assert_eq!(cell.candidates(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A cell with a known digit.
    Fixed(Digit),
    /// A cell whose digit is unknown; the set holds the digits not yet
    /// ruled out.
    Open(DigitSet),
}

impl Cell {
    /// Creates an open cell with all nine candidates live.
    #[must_use]
    pub const fn open() -> Self {
        Self::Open(DigitSet::FULL)
    }

    /// Returns the fixed digit, or `None` if the cell is open.
    #[must_use]
    pub const fn value(self) -> Option<Digit> {
        match self {
            Self::Fixed(digit) => Some(digit),
            Self::Open(_) => None,
        }
    }

    /// Returns the candidate set, or `None` if the cell is fixed.
    #[must_use]
    pub const fn candidates(self) -> Option<DigitSet> {
        match self {
            Self::Fixed(_) => None,
            Self::Open(set) => Some(set),
        }
    }

    /// Returns `true` if the cell has no fixed digit yet.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::open()
    }
}
