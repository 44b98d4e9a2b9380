mod cmp;
mod fmt;
mod inherent;
mod iter;

#[cfg(test)]
mod proptests;
#[cfg(feature = "serde")]
mod serde;

use crate::Interval;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

pub use self::iter::{IntoIter, Iter};

/// An ordered set of indices stored as disjoint intervals.
///
/// Mutations only record what changed; the intervals are sorted and merged
/// the next time the set is observed. Observers therefore take `&mut self`.
///
/// # Examples
///
/// ```rust
/// use index_intervals::{Interval, IntervalSet};
///
/// let mut set = IntervalSet::new();
/// set.add(Interval::new(100, 100));
/// set.add(Interval::new(150, 100));
/// set.remove(Interval::new(120, 10));
///
/// assert_eq!(set.ranges(), [Interval::new(100, 20), Interval::new(130, 120)]);
/// assert!(set.contains(135));
/// assert!(!set.contains(125));
/// ```
#[derive(Clone)]
pub struct IntervalSet {
    entries: Vec<Interval>,
    /// `false` while `entries` may be unsorted, overlapping or touching.
    sorted: bool,
}
