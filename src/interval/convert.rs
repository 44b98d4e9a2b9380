use core::ops::{Range, RangeInclusive};

use super::Interval;

impl From<Range<usize>> for Interval {
    /// Converts `start..end`, swapping reversed bounds.
    fn from(range: Range<usize>) -> Interval {
        Interval::from_exclusive(range.start, range.end)
    }
}

impl From<RangeInclusive<usize>> for Interval {
    /// Converts `start..=end`, swapping reversed bounds.
    fn from(range: RangeInclusive<usize>) -> Interval {
        let (start, end) = range.into_inner();
        Interval::from_inclusive(start, end)
    }
}

impl From<Interval> for Range<usize> {
    /// Converts to `start..end`.
    ///
    /// The upper bound of an overflowing interval wraps, clear the overflow
    /// first to get a meaningful range.
    fn from(interval: Interval) -> Range<usize> {
        interval.start()..interval.end()
    }
}
