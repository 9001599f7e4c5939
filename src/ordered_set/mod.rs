//! A duplicate-free set kept sorted in a single `Vec`.
//!
//! Lookups and bound queries are binary searches, O(log n). Inserting or erasing shifts the tail
//! of the vector, O(n). In return, elements are addressable by index in O(1) and iteration walks
//! contiguous memory. Where positional access is not needed, `BTreeSet` is the better choice.
//!
//! Positions handed out by the set are plain indices (see [`crate::position`]); they are
//! invalidated by any insert or erase at or before them, exactly like `Vec` indices.
//!
//! Misuse of positions (dereferencing `end()`, erasing past the end, reversed ranges) and
//! out-of-range indexing panic. A comparator that is not a strict weak ordering is not detected;
//! the set's contents are then unspecified, though memory-safe.

use std::fmt;
use std::ops::Index;
use std::slice::Iter;
use std::vec::IntoIter;

use compare::{natural, Compare, Natural};
use crate::position::{Position, ReversePosition};

pub struct OrderedSet<T, C = Natural<T>> {
    elements: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for OrderedSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> OrderedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for OrderedSet<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_vec_with_comparator(v, natural())
    }
}

impl<T, C: Compare<T>> OrderedSet<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self { elements: Vec::with_capacity(capacity), cmp }
    }

    /// Sorts `v` in place. Of several equivalent elements, the one appearing first in `v` is
    /// kept.
    pub fn from_vec_with_comparator(mut v: Vec<T>, cmp: C) -> Self {
        v.sort_by(|a, b| cmp.compare(a, b));
        v.dedup_by(|later, earlier| cmp.compares_eq(later, earlier));
        Self { elements: v, cmp }
    }

    pub fn key_comp(&self) -> &C {
        &self.cmp
    }

    /// Same strategy as [`key_comp`](Self::key_comp): a set's keys are its values.
    pub fn value_comp(&self) -> &C {
        &self.cmp
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// The first position whose element is not ordered before `key`.
    pub fn lower_bound(&self, key: &T) -> Position {
        let index = self.elements.partition_point(|element| self.cmp.compares_lt(element, key));
        Position::new(index)
    }

    /// The first position whose element is ordered after `key`.
    pub fn upper_bound(&self, key: &T) -> Position {
        let index = self.elements.partition_point(|element| !self.cmp.compares_lt(key, element));
        Position::new(index)
    }

    /// `(lower_bound(key), upper_bound(key))`, at most one element apart.
    pub fn equal_range(&self, key: &T) -> (Position, Position) {
        let lower = self.lower_bound(key);
        match self.elements.get(lower.index()) {
            Some(element) if !self.cmp.compares_lt(key, element) => (lower, lower.next()),
            _ => (lower, lower),
        }
    }

    /// `Ok` with the index of the element equivalent to `key`, or `Err` with the index where
    /// `key` would have to be inserted to keep the set sorted.
    pub fn position_of(&self, key: &T) -> Result<usize, usize> {
        let index = self.lower_bound(key).index();
        match self.elements.get(index) {
            Some(element) if !self.cmp.compares_lt(key, element) => Ok(index),
            _ => Err(index),
        }
    }

    /// The position of the element equivalent to `key`, or `end()`.
    pub fn find(&self, key: &T) -> Position {
        match self.position_of(key) {
            Ok(index) => Position::new(index),
            Err(_) => self.end(),
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_ok()
    }

    pub fn count(&self, key: &T) -> usize {
        self.contains(key) as usize
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// # Panics
    /// If `index >= len()`.
    pub fn element_at(&self, index: usize) -> &T {
        let len = self.elements.len();
        assert!(index < len, "index {} out of range for set of length {}", index, len);
        &self.elements[index]
    }

    pub fn at(&self, pos: Position) -> Option<&T> {
        self.elements.get(pos.index())
    }

    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn begin(&self) -> Position {
        Position::new(0)
    }

    pub fn end(&self) -> Position {
        Position::new(self.elements.len())
    }

    pub fn rbegin(&self) -> ReversePosition {
        ReversePosition::new(self.end())
    }

    pub fn rend(&self) -> ReversePosition {
        ReversePosition::new(self.begin())
    }

    /// Inserts `value` unless an equivalent element is already present, in which case the set
    /// is left untouched and `value` is dropped. Returns the position of the element equivalent
    /// to `value` and whether an insertion took place.
    pub fn insert(&mut self, value: T) -> (Position, bool) {
        match self.position_of(&value) {
            Ok(index) => (Position::new(index), false),
            Err(index) => {
                self.elements.insert(index, value);
                (Position::new(index), true)
            }
        }
    }

    /// Like [`insert`](Self::insert), using `hint` as a guess for the insertion point. A hint
    /// that is exactly right costs at most two comparisons instead of a binary search; any other
    /// hint, including one past `end()`, is ignored.
    pub fn insert_hint(&mut self, hint: Position, value: T) -> Position {
        let index = hint.index();
        let len = self.elements.len();
        let fits = index <= len
            && (index == 0 || self.cmp.compares_lt(&self.elements[index - 1], &value))
            && (index == len || self.cmp.compares_lt(&value, &self.elements[index]));
        if fits {
            self.elements.insert(index, value);
            return hint;
        }

        log::trace!("insert hint {} missed in set of length {}", index, len);
        self.insert(value).0
    }

    /// Inserts every value not already present. The outcome is the same as inserting the values
    /// one at a time: an element already in the set wins over an equivalent incoming one, and
    /// among equivalent incoming values the earliest wins.
    ///
    /// All comparisons happen before the set is touched, so a panicking comparator leaves the
    /// set as it was.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut batch: Vec<T> = values.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        let cmp = &self.cmp;
        batch.sort_by(|a, b| cmp.compare(a, b));
        batch.dedup_by(|later, earlier| cmp.compares_eq(later, earlier));

        if self.elements.is_empty() {
            self.elements = batch;
            return;
        }

        // pair each new value with its insertion index, skipping those already resident
        let existing_len = self.elements.len();
        let mut plan = Vec::with_capacity(batch.len());
        let mut index = 0;
        for value in batch {
            while index < existing_len && cmp.compares_lt(&self.elements[index], &value) {
                index += 1;
            }
            if index < existing_len && !cmp.compares_lt(&value, &self.elements[index]) {
                continue;
            }
            plan.push((index, value));
        }
        if plan.is_empty() {
            return;
        }

        let added = plan.len();
        let mut merged = Vec::with_capacity(existing_len + added);
        let mut existing = std::mem::take(&mut self.elements).into_iter();
        let mut copied = 0;
        for (index, value) in plan {
            merged.extend(existing.by_ref().take(index - copied));
            copied = index;
            merged.push(value);
        }
        merged.extend(existing);
        log::trace!(
            "merged {} new values into {} elements, now {}",
            added,
            existing_len,
            merged.len()
        );
        self.elements = merged;
    }

    /// Removes the element equivalent to `key`, returning how many were removed (0 or 1).
    pub fn erase(&mut self, key: &T) -> usize {
        self.take(key).is_some() as usize
    }

    pub fn take(&mut self, key: &T) -> Option<T> {
        match self.position_of(key) {
            Ok(index) => Some(self.elements.remove(index)),
            Err(_) => None,
        }
    }

    /// Removes the element at `pos` and returns the position of its successor, which is `pos`
    /// itself after the shift.
    ///
    /// # Panics
    /// If `pos` is not in `[begin(), end())`.
    pub fn erase_at(&mut self, pos: Position) -> Position {
        let len = self.elements.len();
        assert!(pos.index() < len, "erase at position {} in set of length {}", pos.index(), len);
        self.elements.remove(pos.index());
        pos
    }

    /// Removes the elements in `[first, last)` and returns `first`, which now refers to the
    /// element formerly at `last`. An empty range is a no-op.
    ///
    /// # Panics
    /// If `first > last` or `last > end()`.
    pub fn erase_range(&mut self, first: Position, last: Position) -> Position {
        self.check_range(first, last);
        if first != last {
            log::trace!("erasing [{}, {})", first.index(), last.index());
            self.elements.drain(first.index()..last.index());
        }
        first
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.elements.retain(f);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }

    /// # Panics
    /// If `first > last` or `last > end()`.
    pub fn iter_range(&self, first: Position, last: Position) -> Iter<'_, T> {
        self.check_range(first, last);
        self.elements[first.index()..last.index()].iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    fn check_range(&self, first: Position, last: Position) {
        let len = self.elements.len();
        assert!(
            first <= last && last.index() <= len,
            "invalid range [{}, {}) for set of length {}",
            first.index(),
            last.index(),
            len
        );
    }
}

impl<T: Clone, C: Clone> Clone for OrderedSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            cmp: self.cmp.clone(),
        }
    }

    // reuses the existing allocation
    fn clone_from(&mut self, source: &Self) {
        self.elements.clone_from(&source.elements);
        self.cmp = source.cmp.clone();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for OrderedSet<T, C> {}

impl<T, C: Compare<T>> Index<usize> for OrderedSet<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.element_at(index)
    }
}

impl<T, C: Compare<T>> Index<Position> for OrderedSet<T, C> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        self.element_at(pos.index())
    }
}

impl<T, C: Compare<T>> Index<ReversePosition> for OrderedSet<T, C> {
    type Output = T;

    fn index(&self, pos: ReversePosition) -> &T {
        match pos.index() {
            Some(index) => self.element_at(index),
            None => panic!("dereferenced rend()"),
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T, C: Compare<T> + Default> std::iter::FromIterator<T> for OrderedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.elements.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.elements.iter()
    }
}
