//! Property-based tests for OptionalBox combinators

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use optional_box::OptionalBox;
use proptest::prelude::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn prop_get_or_compute_supplier_count(value: Option<String>, fallback: String) {
        let calls = Cell::new(0);
        let result = OptionalBox::new(value.clone()).get_or_compute(|| {
            calls.set(calls.get() + 1);
            fallback.clone()
        });

        match value {
            Some(v) => {
                prop_assert_eq!(result, v);
                prop_assert_eq!(calls.get(), 0);
            }
            None => {
                prop_assert_eq!(result, fallback);
                prop_assert_eq!(calls.get(), 1);
            }
        }
    }

    #[test]
    fn prop_filter_or_else_callback_iff_rejected(value: Option<i32>, keep: bool) {
        let predicate_calls = Cell::new(0);
        let rejected = Cell::new(0);

        let result = OptionalBox::new(value).filter_or_else(
            |_| {
                predicate_calls.set(predicate_calls.get() + 1);
                keep
            },
            |_| rejected.set(rejected.get() + 1),
        );

        let expected_predicate_calls = usize::from(value.is_some());
        let expected_rejections = usize::from(value.is_some() && !keep);
        prop_assert_eq!(predicate_calls.get(), expected_predicate_calls);
        prop_assert_eq!(rejected.get(), expected_rejections);
        prop_assert_eq!(result.into_inner(), value.filter(|_| keep));
    }

    #[test]
    fn prop_map_partial_or_else_callback_iff_emptied(value: Option<i32>, produce: bool) {
        let mapper_calls = Cell::new(0);
        let emptied = Cell::new(0);

        let result = OptionalBox::new(value).map_partial_or_else(
            |x| {
                mapper_calls.set(mapper_calls.get() + 1);
                produce.then(|| i64::from(*x))
            },
            |_| emptied.set(emptied.get() + 1),
        );

        prop_assert_eq!(mapper_calls.get(), usize::from(value.is_some()));
        prop_assert_eq!(emptied.get(), usize::from(value.is_some() && !produce));
        prop_assert_eq!(result.is_present(), value.is_some() && produce);
    }

    #[test]
    fn prop_for_each_runs_once_when_present(value: Option<u8>) {
        let calls = Cell::new(0);
        let b = OptionalBox::new(value);
        prop_assert_eq!(b.for_each(|_| calls.set(calls.get() + 1)), b);
        prop_assert_eq!(calls.get(), usize::from(value.is_some()));
    }

    #[test]
    fn prop_equal_values_equal_boxes(value: Option<String>) {
        let a = OptionalBox::new(value.clone());
        let b = OptionalBox::new(value);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_present_never_equals_absent(value: i32) {
        prop_assert_ne!(OptionalBox::of(value), OptionalBox::absent());
    }

    #[test]
    fn prop_display_distinguishes_states(value: i32) {
        let present = OptionalBox::of(value).to_string();
        let absent = OptionalBox::<i32>::absent().to_string();
        prop_assert!(present.contains(&value.to_string()));
        prop_assert_ne!(present, absent);
    }

    #[test]
    fn prop_iter_is_repeatable(value: Option<i32>) {
        let b = OptionalBox::new(value);
        let first: Vec<i32> = b.iter().copied().collect();
        let second: Vec<i32> = b.iter().copied().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), usize::from(value.is_some()));
    }
}
