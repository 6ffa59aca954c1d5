//! Candidate digit sets for a single cell.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// A set of digits 1-9, stored as a 9-bit mask in a `u16`.
///
/// Bits 0-8 represent digits 1-9 respectively. This is the candidate
/// set of an open cell: the digits not yet ruled out for it.
///
/// # Examples
///
/// ```
/// use gridnine_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// assert!(candidates.remove(Digit::D5));
/// assert!(!candidates.remove(Digit::D5)); // already gone
///
/// assert_eq!(candidates.len(), 8);
/// assert!(!candidates.contains(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const FULL_MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(FULL_MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.index()) != 0
    }

    /// Inserts `digit` into the set. Returns `true` if it was not
    /// already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let old = self.0;
        self.0 |= 1 << digit.index();
        self.0 != old
    }

    /// Removes `digit` from the set. Returns `true` if it was present.
    ///
    /// Removal is idempotent; the return value lets callers distinguish
    /// an actual shrink from a no-op.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let old = self.0;
        self.0 &= !(1 << digit.index());
        self.0 != old
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set has exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridnine_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D4]);
    /// assert_eq!(set.as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            Some(Digit::from_index(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// Returns `true` if `self` is a subset of `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns an iterator over the digits in the set, in ascending
    /// order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
