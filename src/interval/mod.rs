mod cmp;
mod convert;
mod fmt;
mod inherent;

#[cfg(test)]
pub(crate) mod arbitrary;
#[cfg(test)]
mod proptests;
#[cfg(feature = "serde")]
mod serde;

pub use self::fmt::ParseIntervalError;

/// A half-open interval of indices, `[location, location + size)`.
///
/// The upper bound is computed with wrapping arithmetic, so an interval whose
/// `location + size` passes [`usize::MAX`] is representable: it
/// [`overflows`](Interval::overflows). Every operation has a defined result
/// for such intervals; [`IntervalSet`](crate::IntervalSet) only stores
/// intervals that have been truncated with
/// [`clear_overflow`](Interval::clear_overflow).
///
/// # Examples
///
/// ```rust
/// use index_intervals::Interval;
///
/// let iv = Interval::new(10, 5);
/// assert_eq!(iv.start(), 10);
/// assert_eq!(iv.end(), 15);
/// assert!(iv.contains(14));
/// assert!(!iv.contains(15));
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// The first index in the interval.
    pub location: usize,
    /// The number of indices in the interval.
    pub size: usize,
}

impl Interval {
    /// The largest representable index, `usize::MAX`.
    pub const MAX: usize = usize::MAX;

    /// The smallest representable index, `0`.
    pub const LOWEST: usize = usize::MIN;

    /// The interval spanning the whole domain, `{0, MAX}`.
    pub const FULL: Interval = Interval::new(Self::LOWEST, Self::MAX);

    /// The empty interval at location zero.
    ///
    /// Combinators return it when they have no meaningful result.
    pub const EMPTY: Interval = Interval::new(0, 0);

    /// Creates an interval starting at `location` and covering `size` indices.
    ///
    /// No validation takes place, `location + size` may overflow.
    #[inline]
    pub const fn new(location: usize, size: usize) -> Interval {
        Interval { location, size }
    }
}
