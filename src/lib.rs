//! Compact sets of non-negative integer positions, stored as sorted, disjoint,
//! maximally merged half-open intervals.
//!
//! An [`Interval`] is the range `[location, location + size)` over the whole
//! `usize` domain. The sum may wrap past [`usize::MAX`]; such an interval
//! [`overflows`](Interval::overflows) and can be truncated back into the
//! domain with [`clear_overflow`](Interval::clear_overflow).
//!
//! An [`IntervalSet`] keeps a collection of intervals under three kinds of
//! edits:
//!
//! - [`add`](IntervalSet::add) / [`remove`](IntervalSet::remove): plain set
//!   union and difference,
//! - [`insert`](IntervalSet::insert) / [`erase`](IntervalSet::erase): open or
//!   close a gap of positions and shift everything above it, the way a text
//!   buffer moves its selections when characters are typed or deleted.
//!
//! ```rust
//! use index_intervals::{Interval, IntervalSet};
//!
//! let mut set: IntervalSet = [
//!     Interval::from_inclusive(1, 2),
//!     Interval::from_inclusive(4, 10),
//!     Interval::from_inclusive(11, 11),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(set.ranges(), [Interval::new(1, 2), Interval::new(4, 8)]);
//!
//! set.insert(Interval::new(0, 100));
//! assert_eq!(set.ranges(), [Interval::new(101, 2), Interval::new(104, 8)]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(variant_size_differences)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod interval;
mod set;

pub use interval::{Interval, ParseIntervalError};
pub use set::{IntervalSet, IntoIter, Iter};
