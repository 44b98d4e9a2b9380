use crate::{Interval, IntervalSet};

/// Two sets are equal when they cover the same indices, however they were
/// built and whether or not they were observed since.
impl PartialEq for IntervalSet {
    fn eq(&self, other: &Self) -> bool {
        *self.normalized() == *other.normalized()
    }
}

impl Eq for IntervalSet {}

impl IntervalSet {
    /// Returns `true` if every index of `interval` is in the set.
    ///
    /// An empty `interval` is never contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::from(vec![Interval::new(0, 5), Interval::new(5, 5)]);
    /// assert!(set.contains_interval(&Interval::new(2, 6)));
    /// assert!(!set.contains_interval(&Interval::new(8, 6)));
    /// ```
    pub fn contains_interval(&mut self, interval: &Interval) -> bool {
        self.iter().any(|entry| entry.contains_interval(interval))
    }

    /// Returns `true` if some index of `interval` is in the set.
    pub fn intersects(&mut self, interval: &Interval) -> bool {
        self.iter().any(|entry| entry.intersects(interval))
    }
}
