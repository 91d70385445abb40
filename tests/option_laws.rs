//! Property-based tests for `Option`.
//!
//! 1. **Safe extraction**: `try_get` agrees with the population state
//! 2. **Functor**: identity and composition for `map`
//! 3. **Monad**: left identity, right identity and associativity for `bind`
//! 4. **Conversion**: `to_result(e).to_option()` round trips
//! 5. **Equality / hash / ordering**: consistent, `None` first

use functional_sum::{Option, none, some};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn option_of<T: std::fmt::Debug + Clone>(
    element: impl Strategy<Value = T>,
) -> impl Strategy<Value = Option<T>> {
    proptest::option::of(element).prop_map(Option::from_std)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn halve(value: i32) -> Option<i32> {
    if value % 2 == 0 { some(value / 2) } else { none() }
}

fn shrink(value: i32) -> Option<i32> {
    value.checked_sub(7).filter(|result| *result > -1000).into()
}

proptest! {
    // =========================================================================
    // Safe extraction
    // =========================================================================

    #[test]
    fn prop_try_get_on_some_returns_value(value in any::<i32>()) {
        prop_assert_eq!(some(value).try_get(), (true, value));
    }

    #[test]
    fn prop_try_get_agrees_with_is_some(option in option_of(any::<i64>())) {
        let expected = option.is_some();
        let (populated, value) = option.try_get();
        prop_assert_eq!(populated, expected);
        if !populated {
            prop_assert_eq!(value, 0);
        }
    }

    #[test]
    fn prop_is_some_and_is_none_are_complementary(option in option_of(any::<u8>())) {
        prop_assert_ne!(option.is_some(), option.is_none());
    }

    #[test]
    fn prop_unwrap_or_is_fallback_only_when_empty(
        option in option_of(any::<i32>()),
        fallback in any::<i32>()
    ) {
        let expected = match option {
            Option::Some(value) => value,
            Option::None => fallback,
        };
        prop_assert_eq!(option.unwrap_or(fallback), expected);
    }

    // =========================================================================
    // Functor laws
    // =========================================================================

    #[test]
    fn prop_map_identity(option in option_of(any::<i32>())) {
        prop_assert_eq!(option.map(|value| value), option);
    }

    #[test]
    fn prop_map_composition(option in option_of(any::<i32>())) {
        let first = |value: i32| value.wrapping_add(3);
        let second = |value: i32| value.wrapping_mul(5);
        prop_assert_eq!(
            option.map(first).map(second),
            option.map(|value| second(first(value)))
        );
    }

    #[test]
    fn prop_map_applies_function(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_sub(1);
        prop_assert_eq!(some(value).map(function).unwrap(), function(value));
    }

    #[test]
    fn prop_map_never_called_on_none(_seed in any::<u8>()) {
        let calls = Cell::new(0_u32);
        let _ = none::<i32>().map(|value| {
            calls.set(calls.get() + 1);
            value
        });
        prop_assert_eq!(calls.get(), 0);
    }

    // =========================================================================
    // Monad laws
    // =========================================================================

    #[test]
    fn prop_bind_left_identity(value in any::<i32>()) {
        prop_assert_eq!(some(value).bind(halve), halve(value));
    }

    #[test]
    fn prop_bind_right_identity(option in option_of(any::<i32>())) {
        prop_assert_eq!(option.bind(some), option);
    }

    #[test]
    fn prop_bind_associativity(option in option_of(any::<i32>())) {
        prop_assert_eq!(
            option.bind(halve).bind(shrink),
            option.bind(|value| halve(value).bind(shrink))
        );
    }

    // =========================================================================
    // Filter and zip
    // =========================================================================

    #[test]
    fn prop_filter_keeps_value_iff_predicate_holds(value in any::<i32>(), threshold in any::<i32>()) {
        let filtered = some(value).filter(|candidate| *candidate > threshold);
        prop_assert_eq!(filtered.is_some(), value > threshold);
    }

    #[test]
    fn prop_zip_with_populated_iff_both_populated(
        left in option_of(any::<i16>()),
        right in option_of(any::<i16>())
    ) {
        let zipped = left.zip_with(right, |a, b| i32::from(a) + i32::from(b));
        prop_assert_eq!(zipped.is_some(), left.is_some() && right.is_some());
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    #[test]
    fn prop_to_result_to_option_round_trip(
        option in option_of(any::<i32>()),
        error in ".*"
    ) {
        prop_assert_eq!(option.to_result(error).to_option(), option);
    }

    #[test]
    fn prop_std_round_trip(option in option_of(any::<u32>())) {
        prop_assert_eq!(Option::from_std(option.into_std()), option);
    }

    #[test]
    fn prop_iterates_zero_or_one_element(option in option_of(any::<u32>())) {
        let collected: Vec<u32> = option.into_iter().collect();
        prop_assert_eq!(collected.len(), usize::from(option.is_some()));
    }

    // =========================================================================
    // Equality, hashing and ordering
    // =========================================================================

    #[test]
    fn prop_equal_values_hash_equally(
        left in option_of(0_u8..4),
        right in option_of(0_u8..4)
    ) {
        if left == right {
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }
    }

    #[test]
    fn prop_none_orders_first(value in any::<i32>()) {
        prop_assert!(none::<i32>() < some(value));
    }

    #[test]
    fn prop_ordering_delegates_to_payload(left in any::<i32>(), right in any::<i32>()) {
        prop_assert_eq!(some(left).cmp(&some(right)), left.cmp(&right));
    }
}
