//! A sorted, duplicate-free set stored in a single `Vec`, combining the bound queries of an
//! ordered set with O(1) indexed access.

pub mod order;
pub mod ordered_set;
pub mod position;

pub use compare::{Compare, Natural};
pub use order::{by, greater, Greater};
pub use ordered_set::OrderedSet;
pub use position::{Position, ReversePosition};
