use proptest::prelude::*;

use crate::Interval;

/// Indices near either end of the domain, where wrapping bugs live.
fn edge_index() -> impl Strategy<Value = usize> {
    prop_oneof![
        0..16usize,
        (Interval::MAX - 16)..=Interval::MAX,
        Just(Interval::MAX / 2),
    ]
}

fn index() -> impl Strategy<Value = usize> {
    prop_oneof![
        3 => 0..1024usize,
        1 => edge_index(),
        1 => any::<usize>(),
    ]
}

impl Interval {
    /// Any interval, overflowing ones included.
    pub fn arbitrary() -> impl Strategy<Value = Interval> {
        (index(), index()).prop_map(|(location, size)| Interval::new(location, size))
    }

    /// Intervals that do not overflow, the shape `IntervalSet` stores.
    pub fn arbitrary_validated() -> impl Strategy<Value = Interval> {
        Self::arbitrary().prop_map(|mut interval| {
            interval.clear_overflow();
            interval
        })
    }

    /// Small intervals in a narrow window, so that set operations collide often.
    pub fn arbitrary_small() -> impl Strategy<Value = Interval> {
        (0..256usize, 0..32usize).prop_map(|(location, size)| Interval::new(location, size))
    }
}
