use core::iter::{Copied, FusedIterator};
use core::slice;

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(feature = "std")]
use std::vec;

use crate::{Interval, IntervalSet};

/// An iterator over the intervals of an `IntervalSet`, in ascending order.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: Copied<slice::Iter<'a, Interval>>,
}

/// An owning iterator over the intervals of an `IntervalSet`, in ascending
/// order.
#[derive(Clone)]
pub struct IntoIter {
    inner: vec::IntoIter<Interval>,
}

impl Iterator for Iter<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Interval> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl Iterator for IntoIter {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Interval> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntervalSet {
    /// Iterator over the sorted, merged intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::{Interval, IntervalSet};
    ///
    /// let mut set: IntervalSet = (0..10).step_by(2).map(|i| Interval::new(i, 2)).collect();
    /// set.add(Interval::new(20, 1));
    ///
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(Interval::new(0, 10)));
    /// assert_eq!(iter.next(), Some(Interval::new(20, 1)));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&mut self) -> Iter<'_> {
        self.normalize();
        Iter { inner: self.entries.iter().copied() }
    }
}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = IntoIter;

    fn into_iter(mut self) -> IntoIter {
        self.normalize();
        IntoIter { inner: self.entries.into_iter() }
    }
}

impl<'a> IntoIterator for &'a mut IntervalSet {
    type Item = Interval;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
