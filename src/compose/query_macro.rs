//! `query!` macro: comprehension syntax over `Option` and `Result`.
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the value of an `Option` or `Result`
//!   (`flat_map`). An empty state ends the query.
//! - `let pattern = expression;` is a plain binding.
//! - `where guard;` continues only when `guard` holds; otherwise the query
//!   evaluates to the default value of its type (`None` for `Option`).
//! - The final expression must already be an `Option` or `Result`.
//!
//! `<=` stands in for `<-`, which is not a valid macro token.
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::{Option, parse, query, some};
//!
//! let total: Option<u32> = query! {
//!     width <= parse::<u32>("3");
//!     height <= parse::<u32>("4");
//!     let area = width * height;
//!     where area < 100;
//!     some(area)
//! };
//! assert_eq!(total, some(12));
//!
//! let rejected: Option<u32> = query! {
//!     width <= parse::<u32>("30");
//!     where width < 10;
//!     some(width)
//! };
//! assert_eq!(rejected, Option::None);
//! ```
//!
//! `where` needs a `Default` result type, so it is not available in
//! `Result` queries:
//!
//! ```compile_fail
//! use functional_sum::{Result, ok, query};
//!
//! let checked: Result<i32, String> = query! {
//!     value <= ok::<i32, String>(5);
//!     where value > 0;
//!     ok(value)
//! };
//! ```

/// Comprehension over `Option` and `Result`.
///
/// Expands `pattern <= monad; rest` into
/// `Monad::flat_map(monad, move |pattern| query!(rest))`.
///
/// # Examples
///
/// ```rust
/// use functional_sum::{Result, error, ok, query};
///
/// fn divide(numerator: i32, denominator: i32) -> Result<i32, String> {
///     if denominator == 0 { error(String::from("division by zero")) } else { ok(numerator / denominator) }
/// }
///
/// let result: Result<i32, String> = query! {
///     half <= divide(10, 2);
///     (quotient, remainder) <= ok((half / 2, half % 2));
///     _ <= divide(1, 1);
///     ok(quotient + remainder)
/// };
/// assert_eq!(result, ok(3));
///
/// let failed: Result<i32, String> = query! {
///     value <= divide(1, 0);
///     ok(value + 1)
/// };
/// assert_eq!(failed, error(String::from("division by zero")));
/// ```
#[macro_export]
macro_rules! query {
    // =========================================================================
    // Let binding: let pattern = expression; rest
    // =========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::query!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::query!($($rest)+)
        }
    };

    // =========================================================================
    // Guard: where condition; rest
    // =========================================================================

    (where $guard:expr ; $($rest:tt)+) => {
        if $guard {
            $crate::query!($($rest)+)
        } else {
            ::core::default::Default::default()
        }
    };

    // =========================================================================
    // Bind: pattern <= monad; rest
    // =========================================================================

    (_ <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |_| {
            $crate::query!($($rest)+)
        })
    };

    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |$pattern| {
            $crate::query!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |($($pattern)*)| {
            $crate::query!($($rest)+)
        })
    };

    // =========================================================================
    // Terminal
    // =========================================================================

    ($result:expr) => {
        $result
    };
}

#[cfg(test)]
mod tests {
    use crate::monads::{Option, Result};

    #[test]
    fn option_bind_chain() {
        let result = query! {
            x <= Option::Some(5);
            y <= Option::Some(10);
            Option::Some(x + y)
        };
        assert_eq!(result, Option::Some(15));
    }

    #[test]
    fn option_short_circuit() {
        let result: Option<i32> = query! {
            x <= Option::Some(5);
            y <= Option::<i32>::None;
            Option::Some(x + y)
        };
        assert_eq!(result, Option::None);
    }

    #[test]
    fn let_tuple_binding() {
        let result = query! {
            let (a, b) = (2, 3);
            x <= Option::Some(a * b);
            Option::Some(x)
        };
        assert_eq!(result, Option::Some(6));
    }

    #[test]
    fn guard_filters_option() {
        let keep = |limit: i32| -> Option<i32> {
            query! {
                x <= Option::Some(7);
                where x < limit;
                Option::Some(x)
            }
        };
        assert_eq!(keep(10), Option::Some(7));
        assert_eq!(keep(5), Option::None);
    }

    #[test]
    fn result_keeps_first_error() {
        let result: Result<i32, &str> = query! {
            x <= Result::Ok(1);
            _ <= Result::<i32, &str>::Error("first");
            _ <= Result::<i32, &str>::Error("second");
            Result::Ok(x)
        };
        assert_eq!(result, Result::Error("first"));
    }

    #[test]
    fn single_expression() {
        let result: Option<i32> = query! { Option::Some(42) };
        assert_eq!(result, Option::Some(42));
    }
}
