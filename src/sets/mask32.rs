use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::sets::VisitorSet;

/// A set of vertex indices in `0..32`, packed into a single `u32`.
///
/// Bit `i` set means vertex `i` is a member.
///
/// # Examples
///
/// ```
/// use bitmask_dag::sets::{Mask32, VisitorSet};
///
/// let mut mask = Mask32::EMPTY;
/// assert!(!mask.get(3));
///
/// mask.set(3);
/// assert!(mask.get(3));
/// assert_eq!(mask.bits(), 0b1000);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mask32(u32);

impl Mask32 {
    /// Number of vertices a mask can address.
    pub const WIDTH: usize = u32::BITS as usize;

    pub const EMPTY: Mask32 = Mask32(0);

    pub const fn from_bits(bits: u32) -> Self {
        Mask32(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The mask holding only vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Mask32::WIDTH`.
    pub fn single(index: usize) -> Self {
        assert!(index < Self::WIDTH);
        Mask32(1u32 << index)
    }

    /// The mask of every vertex in `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if `n > Mask32::WIDTH`.
    ///
    /// # Examples
    /// ```
    /// use bitmask_dag::sets::Mask32;
    ///
    /// assert_eq!(Mask32::below(3).bits(), 0b111);
    /// assert_eq!(Mask32::below(32).bits(), u32::MAX);
    /// assert!(Mask32::below(0).is_empty());
    /// ```
    pub fn below(n: usize) -> Self {
        assert!(n <= Self::WIDTH);
        match n {
            Self::WIDTH => Mask32(u32::MAX),
            n => Mask32((1u32 << n) - 1),
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn union(self, other: Mask32) -> Self {
        Mask32(self.0 | other.0)
    }

    pub const fn intersection(self, other: Mask32) -> Self {
        Mask32(self.0 & other.0)
    }

    /// Members of `self` that are not in `other`.
    pub const fn difference(self, other: Mask32) -> Self {
        Mask32(self.0 & !other.0)
    }

    /// `self` with vertex `index` removed.
    pub fn without(self, index: usize) -> Self {
        self.difference(Self::single(index))
    }

    pub const fn is_subset(self, other: Mask32) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns `true` if no member is at or beyond `n`.
    ///
    /// # Examples
    /// ```
    /// use bitmask_dag::sets::Mask32;
    ///
    /// assert!(Mask32::from_bits(0b011).fits_within(2));
    /// assert!(!Mask32::from_bits(0b100).fits_within(2));
    /// ```
    pub fn fits_within(self, n: usize) -> bool {
        n >= Self::WIDTH || self.0 >> n == 0
    }

    /// Lowest member, if any.
    pub const fn first(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Iterates over the members in increasing order.
    ///
    /// # Examples
    /// ```
    /// use bitmask_dag::sets::Mask32;
    ///
    /// let members: Vec<usize> = Mask32::from_bits(0b1010_0001).iter().collect();
    /// assert_eq!(members, vec![0, 5, 7]);
    /// ```
    pub fn iter(self) -> Iter {
        Iter { remaining: self.0 }
    }
}

impl VisitorSet for Mask32 {
    /// Returns `true` if vertex `index` is a member.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Mask32::WIDTH`.
    fn get(&self, index: usize) -> bool {
        assert!(index < Self::WIDTH);
        self.0 & (1u32 << index) != 0
    }

    /// # Panics
    ///
    /// Panics if `index >= Mask32::WIDTH`.
    fn set(&mut self, index: usize) {
        assert!(index < Self::WIDTH);
        self.0 |= 1u32 << index
    }

    /// # Panics
    ///
    /// Panics if `index >= Mask32::WIDTH`.
    fn unset(&mut self, index: usize) {
        assert!(index < Self::WIDTH);
        self.0 &= !(1u32 << index)
    }
}

impl BitOr for Mask32 {
    type Output = Mask32;

    fn bitor(self, rhs: Mask32) -> Mask32 {
        self.union(rhs)
    }
}

impl BitOrAssign for Mask32 {
    fn bitor_assign(&mut self, rhs: Mask32) {
        self.0 |= rhs.0
    }
}

impl From<u32> for Mask32 {
    fn from(bits: u32) -> Self {
        Mask32(bits)
    }
}

impl From<Mask32> for u32 {
    fn from(mask: Mask32) -> Self {
        mask.0
    }
}

impl IntoIterator for Mask32 {
    type Item = usize;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for Mask32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask32({:#b})", self.0)
    }
}

impl fmt::Binary for Mask32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Iterator over the members of a [`Mask32`], lowest first.
#[derive(Debug, Clone)]
pub struct Iter {
    remaining: u32,
}

impl Iterator for Iter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        // clear lowest set bit
        self.remaining &= self.remaining - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
