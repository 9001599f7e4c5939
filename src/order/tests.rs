use std::cmp::Ordering;

use compare::{natural, Compare, Natural};

use crate::order::{by, greater, Greater};

#[test]
fn natural_is_ascending() {
    let cmp = Natural::<i32>::default();
    assert!(cmp.compares_lt(&1, &2));
    assert!(!cmp.compares_lt(&2, &2));
    assert!(!cmp.compares_lt(&2, &1));
}

#[test]
fn greater_is_descending() {
    let cmp = Greater::<i32>::default();
    assert!(!cmp.compares_lt(&1, &2));
    assert!(!cmp.compares_lt(&2, &2));
    assert!(cmp.compares_lt(&2, &1));
    assert!(cmp.compares_eq(&3, &3));
    assert_eq!(Ordering::Greater, cmp.compare(&3, &4));
    assert_eq!(Ordering::Less, greater().compare(&4, &3));
}

#[test]
fn predicate_strategy() {
    // orders by length only, so equal-length strings are equivalent
    let cmp = by(|a: &str, b: &str| a.len() < b.len());
    assert!(cmp.compares_lt("a", "bb"));
    assert!(cmp.compares_gt("bb", "a"));
    assert!(cmp.compares_eq("ab", "cd"));
    assert!(!cmp.compares_eq("ab", "c"));
    assert_eq!(Ordering::Less, cmp.compare("a", "bb"));
    assert_eq!(Ordering::Equal, cmp.compare("ab", "cd"));
    assert_eq!(Ordering::Greater, cmp.compare("abc", "d"));
    assert_eq!("Predicate", format!("{:?}", cmp));
}

#[test]
fn predicate_reverses() {
    let cmp = Compare::<u8>::rev(by(|a: &u8, b: &u8| a < b));
    assert!(cmp.compares_lt(&9, &1));
    assert!(!cmp.compares_lt(&1, &9));
}

#[test]
fn unsized_natural() {
    let cmp = natural::<str>();
    assert!(cmp.compares_lt("apple", "banana"));
    assert_eq!("Natural", format!("{:?}", cmp));
}
