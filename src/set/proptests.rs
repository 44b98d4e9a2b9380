#[cfg(test)]
mod test {
    use crate::{Interval, IntervalSet};
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Add(Interval),
        Remove(Interval),
        Insert(Interval),
        Erase(Interval),
    }

    impl Op {
        fn arbitrary<S>(interval: fn() -> S) -> impl Strategy<Value = Op>
        where
            S: Strategy<Value = Interval>,
        {
            prop_oneof![
                3 => interval().prop_map(Op::Add),
                2 => interval().prop_map(Op::Remove),
                1 => interval().prop_map(Op::Insert),
                1 => interval().prop_map(Op::Erase),
            ]
        }

        fn apply(self, set: &mut IntervalSet) {
            match self {
                Op::Add(interval) => set.add(interval),
                Op::Remove(interval) => set.remove(interval),
                Op::Insert(interval) => set.insert(interval),
                Op::Erase(interval) => set.erase(interval),
            }
        }

        /// The same edit on one flag per index.
        fn apply_to_model(self, model: &mut Vec<bool>) {
            match self {
                Op::Add(iv) => {
                    grow(model, iv.end());
                    model[iv.start()..iv.end()].iter_mut().for_each(|bit| *bit = true);
                }
                Op::Remove(iv) => {
                    grow(model, iv.end());
                    model[iv.start()..iv.end()].iter_mut().for_each(|bit| *bit = false);
                }
                Op::Insert(iv) => {
                    grow(model, iv.start() + 1);
                    let fill = model[iv.start()];
                    model.splice(iv.start()..iv.start(), core::iter::repeat(fill).take(iv.size));
                }
                Op::Erase(iv) => {
                    grow(model, iv.end());
                    model.drain(iv.start()..iv.end());
                }
            }
        }
    }

    fn grow(model: &mut Vec<bool>, len: usize) {
        if model.len() < len {
            model.resize(len, false);
        }
    }

    fn to_model(set: &mut IntervalSet) -> Vec<bool> {
        let mut model = Vec::new();
        for iv in set.iter() {
            grow(&mut model, iv.end());
            model[iv.start()..iv.end()].iter_mut().for_each(|bit| *bit = true);
        }
        model
    }

    fn trimmed(mut model: Vec<bool>) -> Vec<bool> {
        while model.last() == Some(&false) {
            model.pop();
        }
        model
    }

    fn assert_normalized(set: &mut IntervalSet) -> Result<(), TestCaseError> {
        let ranges = set.ranges();
        for interval in &ranges {
            prop_assert!(!interval.is_empty(), "{:?} holds an empty interval", ranges);
            prop_assert!(!interval.overflows(), "{:?} holds an overflowing interval", ranges);
        }
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].end() < pair[1].start(), "{:?} is not sorted and merged", ranges);
        }
        prop_assert_eq!(set.len(), ranges.len());
        prop_assert_eq!(set.is_empty(), ranges.is_empty());
        Ok(())
    }

    proptest! {
        #[test]
        fn stays_normalized(
            ops in vec(Op::arbitrary(Interval::arbitrary), 0..32)
        ) {
            let mut set = IntervalSet::new();
            for op in ops {
                op.apply(&mut set);
                assert_normalized(&mut set)?;
            }
        }

        #[test]
        fn agrees_with_a_flag_per_index(
            ops in vec(Op::arbitrary(Interval::arbitrary_small), 0..16)
        ) {
            let mut set = IntervalSet::new();
            let mut model = Vec::new();
            for op in ops {
                op.apply(&mut set);
                op.apply_to_model(&mut model);
                prop_assert_eq!(trimmed(to_model(&mut set)), trimmed(model.clone()), "after {:?}", op);
            }
        }

        #[test]
        fn add_is_order_independent(
            intervals in vec(Interval::arbitrary(), 0..32)
        ) {
            let forward = IntervalSet::from(intervals.clone());
            let backward: IntervalSet = intervals.into_iter().rev().collect();
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn removed_indices_are_gone(
            intervals in vec(Interval::arbitrary_validated(), 0..16),
            removal in Interval::arbitrary_validated()
        ) {
            prop_assume!(!removal.is_empty());
            let mut set = IntervalSet::from(intervals);
            set.add(removal);
            set.remove(removal);
            prop_assert!(!set.contains(removal.start()));
            prop_assert!(!set.contains(removal.end() - 1));
            prop_assert!(!set.intersects(&removal));
        }

        #[test]
        fn erase_undoes_insert(
            intervals in vec(Interval::arbitrary_small(), 0..16),
            gap in Interval::arbitrary_small()
        ) {
            let mut set = IntervalSet::from(intervals);
            let before = set.clone();
            set.insert(gap);
            set.erase(gap);
            prop_assert_eq!(set, before);
        }

        #[test]
        fn erase_before_normalization_agrees_with_model(
            intervals in vec(Interval::arbitrary_small(), 0..16),
            erasures in vec(Interval::arbitrary_small(), 1..8)
        ) {
            let mut model = Vec::new();
            for &interval in &intervals {
                Op::Add(interval).apply_to_model(&mut model);
            }
            let mut set = IntervalSet::from(intervals);
            for erasure in erasures {
                set.erase(erasure);
                Op::Erase(erasure).apply_to_model(&mut model);
            }
            assert_normalized(&mut set)?;
            prop_assert_eq!(trimmed(to_model(&mut set)), trimmed(model));
        }

        #[test]
        fn erase_inside_shrinks_by_erased_size(
            location in 0..256usize,
            below in 1..16usize,
            size in 1..16usize,
            above in 1..16usize
        ) {
            let interval = Interval::new(location, below + size + above);
            let erased = Interval::new(location + below, size);

            let mut set = IntervalSet::from(vec![interval]);
            set.erase(erased);
            prop_assert_eq!(set.ranges(), vec![Interval::new(location, below + above)]);
        }
    }
}
