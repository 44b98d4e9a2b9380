use core::cmp;
use core::mem;

use crate::{Interval, IntervalSet};

#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, vec::Vec};
#[cfg(feature = "std")]
use std::borrow::Cow;

impl IntervalSet {
    /// Creates an empty `IntervalSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> IntervalSet {
        IntervalSet { entries: Vec::new(), sorted: true }
    }

    /// Returns `interval` with its overflow cleared.
    ///
    /// Every mutator admits its argument through this function: the part of
    /// the interval that wraps past `usize::MAX` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::{Interval, IntervalSet};
    ///
    /// let validated = IntervalSet::validate(Interval::new(Interval::MAX - 1, 10));
    /// assert_eq!(validated, Interval::new(Interval::MAX - 1, 1));
    /// ```
    pub fn validate(interval: Interval) -> Interval {
        let mut result = interval;
        result.clear_overflow();
        result
    }

    /// Adds every index of `interval` to the set.
    ///
    /// Overlapping and touching intervals are merged the next time the set is
    /// observed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(Interval::new(0, 10));
    /// set.add(Interval::new(10, 10));
    /// assert_eq!(set.ranges(), [Interval::new(0, 20)]);
    /// ```
    pub fn add(&mut self, interval: Interval) {
        let interval = Self::validate(interval);
        if interval.is_empty() {
            return;
        }

        self.entries.push(interval);
        self.sorted = false;
    }

    /// Removes every index of `interval` from the set.
    ///
    /// Intervals partly covered are trimmed, an interval with the removed
    /// indices strictly inside it is split in two. Nothing is shifted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::from(vec![Interval::new(100, 100)]);
    /// set.remove(Interval::new(125, 50));
    /// assert_eq!(set.ranges(), [Interval::new(100, 25), Interval::new(175, 25)]);
    /// ```
    pub fn remove(&mut self, interval: Interval) {
        let removal = Self::validate(interval);
        if removal.is_empty() {
            return;
        }

        self.normalize();

        // sorted and disjoint: the entries hit by one contiguous removal are contiguous too
        let first = self.entries.partition_point(|entry| entry.end() <= removal.start());
        let count = self.entries[first..].partition_point(|entry| entry.start() < removal.end());
        let hit = first..first + count;

        let remainders: Vec<Interval> = self.entries[hit.clone()]
            .iter()
            .flat_map(|entry| cut(entry, &removal))
            .filter(|part| !part.is_empty())
            .collect();
        self.entries.splice(hit, remainders);
        self.sorted = false;
    }

    /// Opens a gap of `interval.size` indices at `interval.location`.
    ///
    /// An interval containing the location grows by the gap size; intervals
    /// located above it move up by the gap size. Intervals pushed past
    /// `usize::MAX` are dropped, intervals pushed partly past it are
    /// truncated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::from(vec![Interval::new(1, 2), Interval::new(4, 8)]);
    /// set.insert(Interval::new(1, 3));
    /// assert_eq!(set.ranges(), [Interval::new(1, 5), Interval::new(7, 8)]);
    /// ```
    pub fn insert(&mut self, interval: Interval) {
        let gap = Self::validate(interval);
        if gap.is_empty() {
            return;
        }

        self.normalize();

        self.entries = mem::take(&mut self.entries)
            .into_iter()
            .filter_map(|mut entry| {
                if entry.contains(gap.location) {
                    entry.size = entry.size.saturating_add(gap.size);
                } else if entry.location > gap.location {
                    entry.location = entry.location.checked_add(gap.size)?;
                }
                entry.clear_overflow();
                (!entry.is_empty()).then_some(entry)
            })
            .collect();
        self.sorted = false;
    }

    /// Deletes the indices of `interval` and closes the gap.
    ///
    /// Covered parts of intervals disappear and everything above the erased
    /// indices moves down by `interval.size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::from(vec![Interval::new(100, 350), Interval::new(500, 100)]);
    /// set.erase(Interval::new(200, 100));
    /// assert_eq!(set.ranges(), [Interval::new(100, 250), Interval::new(400, 100)]);
    /// ```
    pub fn erase(&mut self, interval: Interval) {
        let erasure = Self::validate(interval);
        if erasure.is_empty() {
            return;
        }

        // Each entry only depends on the erased window, the order does not matter.
        self.entries = mem::take(&mut self.entries)
            .into_iter()
            .flat_map(|entry| {
                let [low, mut high] = cut(&entry, &erasure);
                // never underflows: the high part starts at or above erasure.end()
                high.location -= erasure.size;
                [low, high].into_iter().filter(|part| !part.is_empty())
            })
            .collect();
        self.sorted = false;
    }

    /// Removes every interval.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.sorted = true;
    }

    /// Returns the number of disjoint intervals in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(Interval::new(0, 2));
    /// set.add(Interval::new(1, 2));
    /// set.add(Interval::new(10, 2));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn len(&mut self) -> usize {
        self.normalize();
        self.entries.len()
    }

    /// Returns `true` if the set contains no index.
    pub fn is_empty(&mut self) -> bool {
        self.normalize();
        self.entries.is_empty()
    }

    /// Returns `true` if `index` is in one of the intervals.
    pub fn contains(&mut self, index: usize) -> bool {
        self.normalize();
        self.entries.binary_search_by(|entry| cmp_index_interval(index, entry).reverse()).is_ok()
    }

    /// Returns a copy of the sorted, merged intervals.
    pub fn ranges(&mut self) -> Vec<Interval> {
        self.normalize();
        self.entries.clone()
    }

    /// Returns the entries in normalized form without touching `self`.
    pub(crate) fn normalized(&self) -> Cow<'_, [Interval]> {
        if self.sorted {
            Cow::Borrowed(self.entries.as_slice())
        } else {
            let mut entries = self.entries.clone();
            coalesce(&mut entries);
            Cow::Owned(entries)
        }
    }

    /// Sorts and merges the entries if the set changed since the last call.
    pub(super) fn normalize(&mut self) {
        if !self.sorted {
            coalesce(&mut self.entries);
            self.sorted = true;
        }
    }
}

/// Sorts the entries and merges every entry that overlaps or touches its
/// predecessor into it.
fn coalesce(entries: &mut Vec<Interval>) {
    entries.sort_unstable();
    entries.dedup_by(|current, previous| {
        let merged = previous.merge_with(current);
        if merged.is_empty() {
            false
        } else {
            *previous = merged;
            true
        }
    });
}

/// Splits `entry` around `window`: the part below the window and the part
/// above it. Either part may be empty.
fn cut(entry: &Interval, window: &Interval) -> [Interval; 2] {
    let mut low = *entry;
    low.set_end(cmp::min(entry.end(), window.start()));

    let mut high = *entry;
    high.set_start(cmp::max(entry.start(), window.end()));

    [low, high]
}

fn cmp_index_interval(index: usize, interval: &Interval) -> cmp::Ordering {
    if index < interval.start() {
        cmp::Ordering::Less
    } else if index >= interval.end() {
        cmp::Ordering::Greater
    } else {
        cmp::Ordering::Equal
    }
}

impl Default for IntervalSet {
    fn default() -> IntervalSet {
        IntervalSet::new()
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> IntervalSet {
        intervals.into_iter().collect()
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iterator: I) -> IntervalSet {
        let mut set = IntervalSet::new();
        set.extend(iterator);
        set
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iterator: I) {
        for interval in iterator {
            self.add(interval);
        }
    }
}
