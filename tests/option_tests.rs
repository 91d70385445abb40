//! Integration tests for `Option` and its combinators.

use functional_sum::prelude::*;
use rstest::rstest;
use std::cell::RefCell;
use std::collections::HashMap;

// =============================================================================
// Construction and extraction
// =============================================================================

#[rstest]
fn test_default_is_none() {
    let option: Option<String> = Option::default();
    assert!(option.is_none());
}

#[rstest]
fn test_try_get_on_none_returns_default() {
    assert_eq!(none::<String>().try_get(), (false, String::new()));
}

#[rstest]
fn test_unwrap_or_else_is_lazy() {
    let calls = RefCell::new(0);
    let value = some(3).unwrap_or_else(|| {
        *calls.borrow_mut() += 1;
        0
    });
    assert_eq!(value, 3);
    assert_eq!(*calls.borrow(), 0);
}

#[rstest]
fn test_unwrap_on_none_raises_wrong_unwrap() {
    let caught = catch(|| none::<u64>().unwrap()).unwrap_error();
    assert!(caught.is_wrong_unwrap());
    let error = caught.downcast_ref::<WrongUnwrapError>().unwrap();
    assert_eq!(error.expected, "u64");
    assert_eq!(error.found, "None");
}

#[rstest]
fn test_expect_on_none_carries_message() {
    let caught = catch(|| none::<u64>().expect("user id is required")).unwrap_error();
    assert_eq!(caught.message(), "user id is required");
}

#[rstest]
fn test_non_throwing_forms_never_raise() {
    let empty: Option<i32> = none();
    assert!(catch(move || empty.try_unwrap().is_err()).unwrap());
    assert_eq!(catch(move || empty.unwrap_or_default()).unwrap(), 0);
}

// =============================================================================
// Pipelines
// =============================================================================

fn parse_age(text: &str) -> Option<u8> {
    parse::<u8>(text).filter(|age| (1..=130).contains(age))
}

#[rstest]
#[case("42", some(42))]
#[case("0", none())]
#[case("old", none())]
#[case("300", none())]
fn test_parse_filter_pipeline(#[case] text: &str, #[case] expected: Option<u8>) {
    assert_eq!(parse_age(text), expected);
}

#[rstest]
fn test_lookup_bind_chain() {
    let users = HashMap::from([(1_u32, "ada"), (2, "grace")]);
    let emails = HashMap::from([("ada", "ada@example.org")]);

    let email_of = |id: u32| lookup(&users, &id).bind(|name| lookup(&emails, name));

    assert_eq!(email_of(1), some(&"ada@example.org"));
    assert_eq!(email_of(2), none());
    assert_eq!(email_of(3), none());
}

#[rstest]
fn test_zip_then_flatten_tuple() {
    let zipped = some(1).zip(some("two")).zip(some(3.0));
    assert_eq!(zipped.map(flatten3), some((1, "two", 3.0)));
}

#[rstest]
fn test_side_effects_follow_state() {
    let log = RefCell::new(Vec::new());
    for option in [some(1), none()] {
        let _ = option
            .if_some(|value| log.borrow_mut().push(format!("some {value}")))
            .if_none(|| log.borrow_mut().push(String::from("none")));
    }
    assert_eq!(*log.borrow(), vec!["some 1", "none"]);
}

#[rstest]
fn test_bind_with_threads_context() {
    let limits = HashMap::from([("small", 10), ("large", 1000)]);
    let within = some(50).bind_with(&limits, |limits, value| {
        lookup(limits, "large").filter(|limit| value < **limit).map(|_| value)
    });
    assert_eq!(within, some(50));
}

// =============================================================================
// Formatting and iteration
// =============================================================================

#[rstest]
#[case(some(5), "Some(5)")]
#[case(none(), "None")]
fn test_display(#[case] option: Option<i32>, #[case] expected: &str) {
    assert_eq!(option.to_string(), expected);
}

#[rstest]
fn test_iterates_as_zero_or_one_element() {
    let total: i32 = [some(1), none(), some(5)].iter().flat_map(|option| option.iter()).sum();
    assert_eq!(total, 6);
    assert_eq!(some(2).iter().len(), 1);
    assert_eq!(none::<i32>().into_iter().count(), 0);
}

#[rstest]
fn test_sort_places_none_first() {
    let mut values = vec![some(3), none(), some(1)];
    values.sort();
    assert_eq!(values, vec![none(), some(1), some(3)]);
}
