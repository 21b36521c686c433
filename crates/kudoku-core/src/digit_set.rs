//! A set of digits 1-9, backed by a 9-bit mask.

use std::fmt;

use crate::digit::Digit;

/// A set of digits 1-9.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing cheap copies and fast set operations. This is
/// the representation behind per-cell candidate tracking in the solver.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set. Returns `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let present = self.contains(digit);
        self.bits &= !Self::bit(digit);
        present
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole digit if the set has exactly one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use kudoku_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D4]);
    /// assert_eq!(set.single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::FULL.single(), None);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn single(self) -> Option<Digit> {
        if self.len() == 1 {
            Some(Digit::from_value(self.bits.trailing_zeros() as u8 + 1))
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
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

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use crate::digit::Digit::*;

    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        set.insert(D1);
        set.insert(D9);
        assert_eq!(set.len(), 2);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));

        assert!(set.remove(D1));
        assert!(!set.remove(D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_single() {
        assert_eq!(DigitSet::from_iter([D4]).single(), Some(D4));
        assert_eq!(DigitSet::from_iter([D4, D7]).single(), None);
        assert_eq!(DigitSet::EMPTY.single(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_debug_lists_digits() {
        let set = DigitSet::from_iter([D2, D8]);
        assert_eq!(format!("{set:?}"), "{2, 8}");
    }
}
