#![cfg(feature = "compose")]
//! Tests for the `query!` macro (comprehension syntax over `Option` and
//! `Result`).
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind operation (flat_map)
//! - `let pattern = expression;` - Pure let binding
//! - `where guard;` - Continue only when the guard holds (`Option` only)
//! - `expression` - Final expression (must be an `Option` or `Result`)

#![allow(clippy::unwrap_used)]

use functional_sum::{Option, Result, error, lookup, none, ok, parse, query, some};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Option Tests
// =============================================================================

mod option_tests {
    use super::*;

    #[test]
    fn option_basic_bind_chain() {
        let result = query! {
            x <= some(5);
            y <= some(10);
            some(x + y)
        };
        assert_eq!(result, some(15));
    }

    #[test]
    fn option_with_let_binding() {
        let result = query! {
            x <= some(5);
            y <= some(10);
            let z = x + y;
            some(z * 2)
        };
        assert_eq!(result, some(30));
    }

    #[test]
    fn option_short_circuit_on_none() {
        let result: Option<i32> = query! {
            x <= some(5);
            y <= none::<i32>();
            some(x + y)
        };
        assert_eq!(result, none());
    }

    #[test]
    fn option_short_circuit_skips_later_steps() {
        let calls = Cell::new(0);
        let counter = &calls;
        let result: Option<i32> = query! {
            x <= none::<i32>();
            _ <= {
                counter.set(counter.get() + 1);
                some(())
            };
            some(x)
        };
        assert_eq!(result, none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn option_guard_passes() {
        let result: Option<u32> = query! {
            value <= parse::<u32>("12");
            where value % 2 == 0;
            some(value / 2)
        };
        assert_eq!(result, some(6));
    }

    #[test]
    fn option_guard_rejects() {
        let result: Option<u32> = query! {
            value <= parse::<u32>("13");
            where value % 2 == 0;
            some(value / 2)
        };
        assert_eq!(result, none());
    }

    #[test]
    fn option_tuple_pattern() {
        let result = query! {
            (left, right) <= some((3, 4));
            let (sum, product) = (left + right, left * right);
            some(sum * 10 + product)
        };
        assert_eq!(result, some(82));
    }

    #[test]
    fn option_wildcard_bind() {
        let result = query! {
            _ <= some("ignored");
            x <= some(1);
            some(x + 1)
        };
        assert_eq!(result, some(2));
    }

    #[test]
    fn option_lookup_chain() {
        let parents = &BTreeMap::from([("carol", "bob"), ("bob", "alice")]);
        let grandparent = |name: &str| {
            query! {
                parent <= lookup(parents, name);
                ancestor <= lookup(parents, *parent);
                some(*ancestor)
            }
        };
        assert_eq!(grandparent("carol"), some("alice"));
        assert_eq!(grandparent("bob"), none());
    }
}

// =============================================================================
// Result Tests
// =============================================================================

mod result_tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum FormError {
        Required(&'static str),
        NotANumber(&'static str),
    }

    impl fmt::Display for FormError {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Required(field) => write!(formatter, "{field} is required"),
                Self::NotANumber(field) => write!(formatter, "{field} must be a number"),
            }
        }
    }

    fn field(
        form: &BTreeMap<&'static str, &'static str>,
        name: &'static str,
    ) -> Result<u32, FormError> {
        lookup(form, name)
            .to_result(FormError::Required(name))
            .bind(|text| parse::<u32>(text).to_result(FormError::NotANumber(name)))
    }

    #[test]
    fn result_basic_bind_chain() {
        let result: Result<i32, String> = query! {
            x <= ok(5);
            y <= ok(10);
            ok(x + y)
        };
        assert_eq!(result, ok(15));
    }

    #[test]
    fn result_short_circuit_keeps_first_error() {
        let result: Result<i32, String> = query! {
            x <= ok::<i32, String>(5);
            y <= error::<i32, String>(String::from("first"));
            _ <= error::<i32, String>(String::from("second"));
            ok(x + y)
        };
        assert_eq!(result, error(String::from("first")));
    }

    #[test]
    fn result_form_validation() {
        let form = &BTreeMap::from([("width", "40"), ("height", "25")]);
        let area = query! {
            width <= field(form, "width");
            height <= field(form, "height");
            let area = width * height;
            ok(area)
        };
        assert_eq!(area, ok(1000));
    }

    #[test]
    fn result_form_validation_reports_missing_field() {
        let form = &BTreeMap::from([("width", "40")]);
        let area: Result<u32, FormError> = query! {
            width <= field(form, "width");
            height <= field(form, "height");
            ok(width * height)
        };
        assert_eq!(area, error(FormError::Required("height")));
        assert_eq!(area.unwrap_error().to_string(), "height is required");
    }

    #[test]
    fn result_form_validation_reports_bad_number() {
        let form = &BTreeMap::from([("width", "wide"), ("height", "25")]);
        let area: Result<u32, FormError> = query! {
            width <= field(form, "width");
            height <= field(form, "height");
            ok(width * height)
        };
        assert_eq!(area, error(FormError::NotANumber("width")));
    }
}
