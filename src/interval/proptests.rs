#[cfg(test)]
mod test {
    use core::cmp::Ordering;

    use proptest::prelude::*;

    use crate::Interval;

    // Properties of the interval algebra that must hold over the whole domain,
    // including intervals whose upper bound wraps past usize::MAX.

    proptest! {
        #[test]
        fn clear_overflow_is_continuous(original in Interval::arbitrary()) {
            let mut truncated = original;
            let remainder = truncated.clear_overflow();

            prop_assert_eq!(remainder.location, 0);
            prop_assert!(!remainder.overflows());
            prop_assert!(!truncated.overflows());
            prop_assert_eq!(truncated.location, original.location);
            prop_assert_eq!(remainder.size + truncated.size, original.size);
            prop_assert_eq!(original.overflows(), !remainder.is_empty());
        }

        #[test]
        fn clear_overflow_is_idempotent(original in Interval::arbitrary()) {
            let mut truncated = original;
            truncated.clear_overflow();

            let mut again = truncated;
            prop_assert_eq!(again.clear_overflow(), Interval::EMPTY);
            prop_assert_eq!(again, truncated);
        }

        #[test]
        fn intersects_iff_intersection_is_not_empty(
            a in Interval::arbitrary(),
            b in Interval::arbitrary()
        ) {
            prop_assert_eq!(a.intersects(&b), !a.intersection_with(&b).is_empty());
        }

        #[test]
        fn intersection_is_commutative(
            a in Interval::arbitrary_validated(),
            b in Interval::arbitrary_validated()
        ) {
            prop_assert_eq!(a.intersection_with(&b), b.intersection_with(&a));
        }

        #[test]
        fn intersection_is_contained_in_both(
            a in Interval::arbitrary_validated(),
            b in Interval::arbitrary_validated()
        ) {
            let both = a.intersection_with(&b);
            if !both.is_empty() {
                prop_assert!(a.contains_interval(&both));
                prop_assert!(b.contains_interval(&both));
            }
        }

        #[test]
        fn merge_succeeds_iff_intersecting_or_adjacent(
            a in Interval::arbitrary(),
            b in Interval::arbitrary()
        ) {
            prop_assume!(!a.union_with(&b).is_empty());
            prop_assert_eq!(
                a.merge_with(&b).is_empty(),
                !(a.intersects(&b) || a.is_adjacent_to(&b))
            );
        }

        #[test]
        fn union_spans_both(
            a in Interval::arbitrary_validated(),
            b in Interval::arbitrary_validated()
        ) {
            let union = a.union_with(&b);
            prop_assert_eq!(union.start(), a.start().min(b.start()));
            prop_assert_eq!(union.end(), a.end().max(b.end()));
        }

        #[test]
        fn inclusive_bounds_are_order_independent(a in any::<usize>(), b in any::<usize>()) {
            prop_assert_eq!(Interval::from_inclusive(a, b), Interval::from_inclusive(b, a));
            prop_assert_eq!(Interval::from_exclusive(a, b), Interval::from_exclusive(b, a));
        }

        #[test]
        fn ordering_is_total(
            a in Interval::arbitrary(),
            b in Interval::arbitrary()
        ) {
            let holds = [a < b, a == b, b < a];
            prop_assert_eq!(holds.iter().filter(|&&x| x).count(), 1);
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn ordering_is_transitive(
            a in Interval::arbitrary_small(),
            b in Interval::arbitrary_small(),
            c in Interval::arbitrary_small()
        ) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
            if a < b && b < c {
                prop_assert!(a < c);
            }
        }

        #[test]
        fn text_round_trip(interval in Interval::arbitrary()) {
            let text = interval.to_string();
            prop_assert_eq!(text.parse::<Interval>(), Ok(interval));
        }
    }
}
