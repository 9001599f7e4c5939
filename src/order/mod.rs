//! Ordering strategies for [`OrderedSet`](crate::ordered_set::OrderedSet).
//!
//! Any [`compare::Compare`] works as a strategy: [`Natural`] for ascending `Ord` order,
//! [`Greater`] for descending order, closures returning `Ordering`, and the combinators of the
//! `compare` crate. [`by`] adapts a `less`-style predicate, which must be a strict weak
//! ordering; two values are equivalent when neither is less than the other.

use std::cmp::Ordering;
use std::fmt;

use compare::{natural, Compare, Natural, Rev};

/// Descending order of `T: Ord`.
pub type Greater<T> = Rev<Natural<T>>;

pub fn greater<T: Ord + ?Sized>() -> Greater<T> {
    natural().rev()
}

/// Adapts a `less`-style closure into a [`Compare`] strategy.
#[derive(Clone, Copy)]
pub struct Predicate<F>(F);

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Compare<T> for Predicate<F> {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        if (self.0)(l, r) {
            Ordering::Less
        } else if (self.0)(r, l) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    fn compares_lt(&self, l: &T, r: &T) -> bool {
        (self.0)(l, r)
    }

    #[inline]
    fn compares_gt(&self, l: &T, r: &T) -> bool {
        (self.0)(r, l)
    }

    #[inline]
    fn compares_eq(&self, l: &T, r: &T) -> bool {
        !(self.0)(l, r) && !(self.0)(r, l)
    }
}

pub fn by<T: ?Sized, F: Fn(&T, &T) -> bool>(less: F) -> Predicate<F> {
    Predicate(less)
}

#[cfg(test)]
mod tests;
