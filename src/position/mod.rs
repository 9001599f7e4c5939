//! Index-based handles into an [`OrderedSet`](crate::ordered_set::OrderedSet).
//!
//! A handle is nothing more than a storage index, so arithmetic on handles is index arithmetic
//! and `end() - begin() == len()`. Handles do not borrow the set. They follow the invalidation
//! rules of a `Vec` index: inserting or erasing at index `i` shifts every handle at or after `i`,
//! and `clear` invalidates all of them. Using a stale handle never corrupts the set, but it may
//! refer to a different element or trip a bounds assertion.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Forward handle. `begin()` is index 0, `end()` is index `len()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Position(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub fn next(self) -> Self {
        self + 1
    }

    /// # Panics
    /// When stepping back from index 0.
    #[inline]
    pub fn prev(self) -> Self {
        self - 1
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl Add<usize> for Position {
    type Output = Position;

    #[inline]
    fn add(self, offset: usize) -> Position {
        Position(self.0 + offset)
    }
}

impl AddAssign<usize> for Position {
    #[inline]
    fn add_assign(&mut self, offset: usize) {
        self.0 += offset;
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    #[inline]
    fn sub(self, offset: usize) -> Position {
        assert!(offset <= self.0, "position {} moved back by {}", self.0, offset);
        Position(self.0 - offset)
    }
}

impl SubAssign<usize> for Position {
    #[inline]
    fn sub_assign(&mut self, offset: usize) {
        *self = *self - offset;
    }
}

impl Sub for Position {
    type Output = isize;

    #[inline]
    fn sub(self, other: Position) -> isize {
        self.0 as isize - other.0 as isize
    }
}

/// Mirror handle walking from the last element towards the first.
///
/// Like a C++ reverse iterator it wraps the forward position one past the element it refers to:
/// `rbegin()` wraps `end()` and refers to index `len() - 1`, `rend()` wraps `begin()` and refers
/// to nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReversePosition(Position);

impl ReversePosition {
    #[inline]
    pub const fn new(base: Position) -> Self {
        ReversePosition(base)
    }

    #[inline]
    pub const fn base(self) -> Position {
        self.0
    }

    /// Storage index of the referenced element, or `None` for `rend()`.
    #[inline]
    pub fn index(self) -> Option<usize> {
        self.0.index().checked_sub(1)
    }

    /// # Panics
    /// When advancing past `rend()`.
    #[inline]
    pub fn next(self) -> Self {
        self + 1
    }

    #[inline]
    pub fn prev(self) -> Self {
        self - 1
    }
}

impl PartialOrd for ReversePosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReversePosition {
    // further along the reverse walk means a lower base index
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl Add<usize> for ReversePosition {
    type Output = ReversePosition;

    #[inline]
    fn add(self, offset: usize) -> ReversePosition {
        let remaining = self.0.index();
        assert!(
            offset <= remaining,
            "reverse position advanced by {} with {} steps left before rend()",
            offset,
            remaining
        );
        ReversePosition(Position(remaining - offset))
    }
}

impl AddAssign<usize> for ReversePosition {
    #[inline]
    fn add_assign(&mut self, offset: usize) {
        *self = *self + offset;
    }
}

impl Sub<usize> for ReversePosition {
    type Output = ReversePosition;

    #[inline]
    fn sub(self, offset: usize) -> ReversePosition {
        ReversePosition(self.0 + offset)
    }
}

impl SubAssign<usize> for ReversePosition {
    #[inline]
    fn sub_assign(&mut self, offset: usize) {
        *self = *self - offset;
    }
}

impl Sub for ReversePosition {
    type Output = isize;

    #[inline]
    fn sub(self, other: ReversePosition) -> isize {
        other.0 - self.0
    }
}
