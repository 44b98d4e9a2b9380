use core::cmp;
use core::mem;

use super::Interval;

impl Interval {
    /// Creates an interval from the inclusive bounds `[lower, upper]`.
    ///
    /// The bounds are swapped when `upper < lower`. The size is computed as
    /// `upper - lower + 1` with wrapping arithmetic, so `[0, MAX]` yields an
    /// empty interval; use [`Interval::FULL`] for the whole domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// assert_eq!(Interval::from_inclusive(3, 5), Interval::new(3, 3));
    /// assert_eq!(Interval::from_inclusive(5, 3), Interval::new(3, 3));
    /// assert_eq!(Interval::from_inclusive(0, Interval::MAX - 1), Interval::FULL);
    /// ```
    pub fn from_inclusive(mut lower: usize, mut upper: usize) -> Interval {
        if upper < lower {
            mem::swap(&mut lower, &mut upper);
        }
        Interval::new(lower, upper.wrapping_sub(lower).wrapping_add(1))
    }

    /// Creates an interval from the exclusive bounds `[min, max)`.
    ///
    /// The bounds are swapped when `max < min`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// assert_eq!(Interval::from_exclusive(3, 5), Interval::new(3, 2));
    /// assert_eq!(Interval::from_exclusive(5, 3), Interval::new(3, 2));
    /// assert!(Interval::from_exclusive(7, 7).is_empty());
    /// ```
    pub fn from_exclusive(mut min: usize, mut max: usize) -> Interval {
        if max < min {
            mem::swap(&mut min, &mut max);
        }
        Interval::new(min, max - min)
    }

    /// Returns the first index of the interval, its location.
    #[inline]
    pub const fn start(&self) -> usize {
        self.location
    }

    /// Returns the exclusive upper bound, `location + size`.
    ///
    /// The sum wraps; the result is below [`start`](Interval::start) exactly
    /// when the interval [`overflows`](Interval::overflows).
    #[inline]
    pub const fn end(&self) -> usize {
        self.location.wrapping_add(self.size)
    }

    /// Moves the lower bound to `value` and keeps the current upper bound.
    ///
    /// When `value` lies above the current upper bound the interval collapses
    /// to the empty interval at `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// let mut iv = Interval::new(10, 10);
    /// iv.set_start(15);
    /// assert_eq!(iv, Interval::new(15, 5));
    ///
    /// iv.set_start(30);
    /// assert_eq!(iv, Interval::new(30, 0));
    /// ```
    pub fn set_start(&mut self, value: usize) {
        let end = self.end();
        if value > end {
            *self = Interval::new(value, 0);
        } else {
            *self = Interval::new(value, end - value);
        }
    }

    /// Moves the upper bound to `value` and keeps the current lower bound.
    ///
    /// When `value` lies below the current lower bound the interval collapses
    /// to the empty interval at `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// let mut iv = Interval::new(10, 10);
    /// iv.set_end(12);
    /// assert_eq!(iv, Interval::new(10, 2));
    ///
    /// iv.set_end(3);
    /// assert_eq!(iv, Interval::new(3, 0));
    /// ```
    pub fn set_end(&mut self, value: usize) {
        if value < self.location {
            *self = Interval::new(value, 0);
        } else {
            self.size = value - self.location;
        }
    }

    /// Returns `true` if `location + size` wraps past [`usize::MAX`].
    #[inline]
    pub const fn overflows(&self) -> bool {
        self.end() < self.location
    }

    /// Returns `true` if the interval covers no index.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if `index` lies within the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// assert!(Interval::new(0, 100).contains(99));
    /// assert!(!Interval::new(0, 100).contains(100));
    /// assert!(!Interval::new(0, 0).contains(0));
    /// ```
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.location && index - self.location < self.size
    }

    /// Returns `true` if every index of `other` lies within this interval.
    ///
    /// An empty `other` is never contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// let iv = Interval::new(0, 100);
    /// assert!(iv.contains_interval(&Interval::new(0, 100)));
    /// assert!(!iv.contains_interval(&Interval::new(0, 101)));
    /// assert!(!iv.contains_interval(&Interval::new(3, 0)));
    /// ```
    pub fn contains_interval(&self, other: &Interval) -> bool {
        !other.is_empty()
            && self.contains(other.location)
            && self.contains(other.end().wrapping_sub(1))
    }

    /// Returns `true` if `other` ends exactly where this interval starts.
    #[inline]
    pub fn is_high_adjacent_to(&self, other: &Interval) -> bool {
        other.end() == self.location
    }

    /// Returns `true` if `other` starts exactly where this interval ends.
    #[inline]
    pub fn is_low_adjacent_to(&self, other: &Interval) -> bool {
        other.location == self.end()
    }

    /// Returns `true` if `other` touches this interval on either side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// assert!(Interval::new(1, 1).is_adjacent_to(&Interval::new(0, 1)));
    /// assert!(Interval::new(1, 1).is_adjacent_to(&Interval::new(2, 1)));
    /// assert!(!Interval::new(1, 1).is_adjacent_to(&Interval::new(3, 1)));
    /// ```
    #[inline]
    pub fn is_adjacent_to(&self, other: &Interval) -> bool {
        self.is_high_adjacent_to(other) || self.is_low_adjacent_to(other)
    }

    /// Returns `true` if the two intervals share at least one index.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        !self.intersection_with(other).is_empty()
    }

    /// Returns the indices shared by both intervals.
    ///
    /// The result is empty when the intervals do not overlap. It is
    /// [`Interval::EMPTY`] unless one interval is empty and starts inside the
    /// other, in which case that empty interval is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// let a = Interval::new(100, 10);
    /// let b = Interval::new(0, 101);
    /// assert_eq!(a.intersection_with(&b), Interval::new(100, 1));
    /// assert_eq!(b.intersection_with(&a), Interval::new(100, 1));
    /// assert_eq!(Interval::new(100, 100).intersection_with(&Interval::new(0, 100)), Interval::EMPTY);
    /// ```
    pub fn intersection_with(&self, other: &Interval) -> Interval {
        let self_end = self.end();
        let other_end = other.end();
        let min_end = cmp::min(self_end, other_end);

        if other.location <= self.location && self.location < other_end {
            Interval::new(self.location, min_end.wrapping_sub(self.location))
        } else if self.location <= other.location && other.location < self_end {
            Interval::new(other.location, min_end.wrapping_sub(other.location))
        } else {
            Interval::EMPTY
        }
    }

    /// Returns the smallest interval spanning both intervals, gap included.
    ///
    /// This is a bounding union, see [`merge_with`](Interval::merge_with) for
    /// the union that refuses to bridge a gap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// let a = Interval::new(0, 1);
    /// let b = Interval::new(10, 1);
    /// assert_eq!(a.union_with(&b), Interval::new(0, 11));
    /// ```
    pub fn union_with(&self, other: &Interval) -> Interval {
        let location = cmp::min(self.location, other.location);
        let end = cmp::max(self.end(), other.end());
        Interval::new(location, end.wrapping_sub(location))
    }

    /// Returns the union of both intervals if they intersect or touch, or
    /// [`Interval::EMPTY`] otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// assert_eq!(Interval::new(0, 1).merge_with(&Interval::new(1, 1)), Interval::new(0, 2));
    /// assert_eq!(Interval::new(0, 1).merge_with(&Interval::new(2, 1)), Interval::EMPTY);
    /// ```
    pub fn merge_with(&self, other: &Interval) -> Interval {
        if self.intersects(other) || self.is_adjacent_to(other) {
            self.union_with(other)
        } else {
            Interval::EMPTY
        }
    }

    /// Truncates an overflowing interval so that it ends at [`usize::MAX`] and
    /// returns the part that wrapped around, relocated to start at zero.
    ///
    /// An interval that does not overflow is left untouched and
    /// [`Interval::EMPTY`] is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use index_intervals::Interval;
    ///
    /// let mut iv = Interval::new(3, Interval::MAX);
    /// assert!(iv.overflows());
    ///
    /// let remainder = iv.clear_overflow();
    /// assert_eq!(remainder, Interval::new(0, 3));
    /// assert_eq!(iv, Interval::new(3, Interval::MAX - 3));
    /// assert!(!iv.overflows());
    /// ```
    pub fn clear_overflow(&mut self) -> Interval {
        if !self.overflows() {
            return Interval::EMPTY;
        }

        // `end` is the wrapped sum; one more accounts for the step from MAX to 0.
        let over = self.end().wrapping_add(1);
        self.size -= over;
        Interval::new(0, over)
    }
}
