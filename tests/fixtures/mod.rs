use std::collections::BTreeSet;

use ordvec::{Compare, OrderedSet};

pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Asserts that the set is strictly ordered under its own comparator.
pub fn assert_strictly_ordered<T, C>(set: &OrderedSet<T, C>)
    where
        T: std::fmt::Debug,
        C: Compare<T>,
{
    for pair in set.as_slice().windows(2) {
        assert!(
            set.key_comp().compares_lt(&pair[0], &pair[1]),
            "{:?} out of order in {:?}",
            pair,
            set
        );
    }
}

/// Asserts that the set holds exactly the reference model's elements, in the same order.
#[allow(dead_code)]
pub fn assert_matches<T>(model: &BTreeSet<T>, set: &OrderedSet<T>)
    where
        T: Ord + std::fmt::Debug,
{
    assert_eq!(model.len(), set.len());
    assert!(model.iter().eq(set.iter()), "model {:?} != set {:?}", model, set);
}
