//! Property-based tests for the `OneOf` unions.
//!
//! 1. **Permutation round trip**: permuting and permuting back is the identity
//! 2. **Split**: the remainder holds the same payload, re-tagged
//! 3. **Extension** preserves the alternative and its payload
//! 4. **Embedding** then splitting recovers the value
//! 5. **Equality / hash** consistency

use functional_sum::{OneOf2, OneOf3, OneOf4, Union};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

type Three = OneOf3<i32, String, bool>;
type Four = OneOf4<u8, char, i64, String>;

fn three() -> impl Strategy<Value = Three> {
    prop_oneof![
        any::<i32>().prop_map(OneOf3::First),
        "[a-z]{0,6}".prop_map(OneOf3::Second),
        any::<bool>().prop_map(OneOf3::Third),
    ]
}

fn four() -> impl Strategy<Value = Four> {
    prop_oneof![
        any::<u8>().prop_map(OneOf4::First),
        any::<char>().prop_map(OneOf4::Second),
        any::<i64>().prop_map(OneOf4::Third),
        "[a-z]{0,6}".prop_map(OneOf4::Fourth),
    ]
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    // =========================================================================
    // Permutation
    // =========================================================================

    #[test]
    fn prop_two_way_swap_round_trip(value in any::<i32>(), left in any::<bool>()) {
        let original: OneOf2<i32, char> = if left { OneOf2::First(value) } else { OneOf2::Second('x') };
        let swapped: OneOf2<char, i32> = original.permute();
        prop_assert_eq!(swapped.permute::<OneOf2<i32, char>, _, _>(), original);
    }

    #[test]
    fn prop_three_way_rotation_round_trip(value in three()) {
        let rotated: OneOf3<bool, i32, String> = value.clone().permute();
        let restored: Three = rotated.permute();
        prop_assert_eq!(restored, value);
    }

    #[test]
    fn prop_three_way_permutations_keep_type(value in three()) {
        let type_name = value.type_name();
        let reordered: OneOf3<String, bool, i32> = value.clone().permute();
        prop_assert_eq!(reordered.type_name(), type_name);
        let swapped: OneOf3<i32, bool, String> = value.permute();
        prop_assert_eq!(swapped.type_name(), type_name);
    }

    #[test]
    fn prop_four_way_reverse_round_trip(value in four()) {
        let reversed: OneOf4<String, i64, char, u8> = value.clone().permute();
        prop_assert_eq!(reversed.position(), 5 - value.position());
        let restored: Four = reversed.permute();
        prop_assert_eq!(restored, value);
    }

    // =========================================================================
    // Split
    // =========================================================================

    #[test]
    fn prop_split_remainder_keeps_payload(text in "[a-z]{1,6}") {
        let value: Three = OneOf3::new(text.clone());
        let remainder = value.split::<i32, _>().unwrap_err();
        prop_assert_eq!(remainder, OneOf2::<String, bool>::First(text));
    }

    #[test]
    fn prop_split_succeeds_iff_alternative_matches(value in three()) {
        let was_bool = value.is::<bool, _>();
        prop_assert_eq!(value.split::<bool, _>().is_ok(), was_bool);
    }

    // =========================================================================
    // Extension and embedding
    // =========================================================================

    #[test]
    fn prop_extend_with_preserves_alternative(value in three()) {
        let extended = value.clone().extend_with::<char>();
        prop_assert_eq!(extended.position(), value.position());
        prop_assert!(!extended.is::<char, _>());
    }

    #[test]
    fn prop_embed_then_split_recovers_value(number in any::<i32>()) {
        let value: OneOf2<i32, bool> = OneOf2::new(number);
        let embedded: OneOf4<char, bool, String, i32> = value.embed();
        prop_assert_eq!(embedded.split::<i32, _>().ok(), Some(number));
    }

    // =========================================================================
    // Equality and hashing
    // =========================================================================

    #[test]
    fn prop_equal_values_hash_equally(left in four(), right in four()) {
        if left == right {
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }
        prop_assert_eq!(hash_of(&left), hash_of(&left.clone()));
    }

    #[test]
    fn prop_display_uses_variant_format(value in three()) {
        let rendered = value.to_string();
        prop_assert!(rendered.starts_with("Variant("));
        prop_assert!(rendered.ends_with(')'));
    }
}
