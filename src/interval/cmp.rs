use core::cmp::Ordering;

use super::Interval;

/// Intervals are ordered by location, then by their (wrapping) upper bound.
///
/// Two intervals with the same location and the same upper bound have the
/// same size, so this order agrees with `Eq`.
impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.location.cmp(&other.location).then_with(|| self.end().cmp(&other.end()))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
