//! Property-based tests for the arithmetic engine
//!
//! These pin the algebraic laws the engine promises: commutative addition,
//! the difference/sub alias, lossless wrapping, and the fold law behind
//! sum and average.

#[cfg(test)]
mod property_tests {
    use corekit_math::{Dynamic, Number, Numeric, Summable};
    use proptest::prelude::*;

    proptest! {
        // Property: addition commutes for every kind
        #[test]
        fn prop_addition_commutes_i32(a in -100_000i32..100_000, b in -100_000i32..100_000) {
            prop_assert_eq!(<i32 as Numeric>::add(a, b), <i32 as Numeric>::add(b, a));
        }

        #[test]
        fn prop_addition_commutes_f64(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(<f64 as Numeric>::add(a, b), <f64 as Numeric>::add(b, a));
        }

        #[test]
        fn prop_addition_commutes_dynamic(a in -100_000i64..100_000, b in -1e6f64..1e6) {
            let (x, y) = (Dynamic::Int(a), Dynamic::Float(b));
            prop_assert_eq!(<Dynamic as Numeric>::add(x, y), <Dynamic as Numeric>::add(y, x));
        }

        // Property: difference is exactly sub
        #[test]
        fn prop_difference_aliases_sub(a in -100_000i32..100_000, b in -100_000i32..100_000) {
            prop_assert_eq!(
                <i32 as Numeric>::difference(a, b),
                <i32 as Numeric>::sub(a, b)
            );
        }

        #[test]
        fn prop_difference_aliases_sub_f64(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(
                <f64 as Numeric>::difference(a, b),
                <f64 as Numeric>::sub(a, b)
            );
        }

        // Property: wrap then unwrap returns the original exactly
        #[test]
        fn prop_wrap_round_trip_i32(v in any::<i32>()) {
            prop_assert_eq!(Number::new(v).get(), v);
        }

        #[test]
        fn prop_wrap_round_trip_f64(v in any::<f64>().prop_filter("NaN never compares equal", |v| !v.is_nan())) {
            prop_assert_eq!(Number::new(v).get(), v);
        }

        #[test]
        fn prop_wrap_round_trip_i64(v in any::<i64>()) {
            prop_assert_eq!(Number::new(v).get(), v);
        }

        // Property: sum is the fold by addition, average the sum over the count
        #[test]
        fn prop_sum_is_fold(data in prop::collection::vec(-10_000i32..10_000, 0..64)) {
            let values = Summable::from(data.clone());
            let folded = data.iter().fold(0i32, |acc, &x| acc + x);
            prop_assert_eq!(values.sum(), folded);
        }

        #[test]
        fn prop_average_divides_sum_by_count(data in prop::collection::vec(-10_000i32..10_000, 1..64)) {
            let values = Summable::from(data.clone());
            prop_assert_eq!(values.average(), values.sum() / data.len() as i32);
        }
    }
}
