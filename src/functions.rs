//! Free functions: smart constructors, panic capture and small adapters.
//!
//! The smart constructors (`some`, `none`, `ok`, `error`, `variant`) read
//! better than the qualified variants at call sites where the target type is
//! already known:
//!
//! ```rust
//! use functional_sum::{Option, Result, error, none, ok, some};
//!
//! fn find(id: u32) -> Option<&'static str> {
//!     if id == 1 { some("root") } else { none() }
//! }
//!
//! fn check(id: u32) -> Result<u32, String> {
//!     if id > 0 { ok(id) } else { error(String::from("zero id")) }
//! }
//!
//! assert_eq!(find(1), some("root"));
//! assert_eq!(check(0), error(String::from("zero id")));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::panic::{UnwindSafe, catch_unwind};
use std::str::FromStr;

use crate::error::CaughtPanic;
use crate::monads::{Option, Result, Variant};
use crate::unit::Unit;

// =============================================================================
// Smart Constructors
// =============================================================================

/// Builds a populated [`Option`].
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// Builds an empty [`Option`].
#[inline]
pub const fn none<T>() -> Option<T> {
    Option::None
}

/// Builds `Some(Unit)`.
#[inline]
pub const fn some_unit() -> Option<Unit> {
    Option::Some(Unit)
}

/// Builds a successful [`Result`].
#[inline]
pub const fn ok<S, E>(value: S) -> Result<S, E> {
    Result::Ok(value)
}

/// Builds `Ok(Unit)`.
#[inline]
pub const fn ok_unit<E>() -> Result<Unit, E> {
    Result::Ok(Unit)
}

/// Builds a failed [`Result`].
#[inline]
pub const fn error<S, E>(error: E) -> Result<S, E> {
    Result::Error(error)
}

/// Builds `Error(Unit)`.
#[inline]
pub const fn error_unit<S>() -> Result<S, Unit> {
    Result::Error(Unit)
}

/// Wraps a value for promotion into a `OneOf` union.
#[inline]
pub const fn variant<T>(value: T) -> Variant<T> {
    Variant(value)
}

// =============================================================================
// Panic Capture
// =============================================================================

/// Runs `function`, turning a panic into an `Error`.
///
/// Panics of any payload type are captured, including wrong unwraps and
/// errors re-raised with [`Result::unwrap_or_raise`]. The panic hook still
/// runs before the panic is captured.
///
/// # Examples
///
/// ```rust
/// use functional_sum::{Option, Result, catch};
///
/// assert_eq!(catch(|| 2 + 2).unwrap(), 4);
///
/// let caught = catch(|| Option::<i32>::None.unwrap()).unwrap_error();
/// assert!(caught.is_wrong_unwrap());
/// ```
pub fn catch<T, F>(function: F) -> Result<T, CaughtPanic>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match catch_unwind(function) {
        Ok(value) => Result::Ok(value),
        Err(payload) => {
            let caught = CaughtPanic::new(payload);
            log::debug!("captured panic: {}", caught.message());
            Result::Error(caught)
        }
    }
}

/// Runs `action` for its effect, turning a panic into an `Error`.
///
/// # Examples
///
/// ```rust
/// use functional_sum::{Result, Unit, catch_unit};
///
/// assert_eq!(catch_unit(|| {}).unwrap(), Unit);
/// assert!(catch_unit(|| panic!("nope")).is_error());
/// ```
pub fn catch_unit<F>(action: F) -> Result<Unit, CaughtPanic>
where
    F: FnOnce() + UnwindSafe,
{
    catch(|| {
        action();
        Unit
    })
}

// =============================================================================
// Adapters
// =============================================================================

/// Parses `text`, discarding the parse error.
///
/// # Examples
///
/// ```rust
/// use functional_sum::{Option, parse};
///
/// assert_eq!(parse::<u16>("8080"), Option::Some(8080));
/// assert_eq!(parse::<u16>("port"), Option::None);
/// ```
#[inline]
pub fn parse<T: FromStr>(text: &str) -> Option<T> {
    match text.parse() {
        Ok(value) => Option::Some(value),
        Err(_) => Option::None,
    }
}

/// A keyed container that can be probed without inserting.
pub trait Lookup<Q: ?Sized> {
    /// The stored value type.
    type Value;

    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, Q, S> Lookup<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key).into()
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key).into()
    }
}

/// Looks `key` up in a map.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use functional_sum::{Option, lookup};
///
/// let ports = HashMap::from([("http", 80), ("https", 443)]);
/// assert_eq!(lookup(&ports, "https"), Option::Some(&443));
/// assert_eq!(lookup(&ports, "gopher"), Option::None);
/// ```
#[inline]
pub fn lookup<'a, M, Q>(map: &'a M, key: &Q) -> Option<&'a M::Value>
where
    M: Lookup<Q>,
    Q: ?Sized,
{
    map.lookup(key)
}

// =============================================================================
// Tuple Flattening
// =============================================================================

/// Flattens the left-nested triple produced by two `zip` calls.
///
/// # Examples
///
/// ```rust
/// use functional_sum::{flatten3, some};
///
/// let zipped = some(1).zip(some('b')).zip(some("c"));
/// assert_eq!(zipped.map(flatten3), some((1, 'b', "c")));
/// ```
#[inline]
pub fn flatten3<T1, T2, T3>(((first, second), third): ((T1, T2), T3)) -> (T1, T2, T3) {
    (first, second, third)
}

/// Flattens a right-nested triple.
#[inline]
pub fn flatten3_right<T1, T2, T3>((first, (second, third)): (T1, (T2, T3))) -> (T1, T2, T3) {
    (first, second, third)
}

/// Flattens the left-nested quadruple produced by three `zip` calls.
#[inline]
pub fn flatten4<T1, T2, T3, T4>(
    (((first, second), third), fourth): (((T1, T2), T3), T4),
) -> (T1, T2, T3, T4) {
    (first, second, third, fourth)
}

/// Flattens a right-nested quadruple.
#[inline]
pub fn flatten4_right<T1, T2, T3, T4>(
    (first, (second, (third, fourth))): (T1, (T2, (T3, T4))),
) -> (T1, T2, T3, T4) {
    (first, second, third, fourth)
}

/// Flattens a quadruple whose first two elements are paired.
///
/// # Examples
///
/// ```rust
/// use functional_sum::flatten4_pair_first;
///
/// assert_eq!(flatten4_pair_first((('a', 'b'), 'c', 'd')), ('a', 'b', 'c', 'd'));
/// ```
#[inline]
pub fn flatten4_pair_first<T1, T2, T3, T4>(
    ((first, second), third, fourth): ((T1, T2), T3, T4),
) -> (T1, T2, T3, T4) {
    (first, second, third, fourth)
}

/// Flattens a quadruple whose middle two elements are paired.
#[inline]
pub fn flatten4_pair_middle<T1, T2, T3, T4>(
    (first, (second, third), fourth): (T1, (T2, T3), T4),
) -> (T1, T2, T3, T4) {
    (first, second, third, fourth)
}

/// Flattens a quadruple whose last two elements are paired.
#[inline]
pub fn flatten4_pair_last<T1, T2, T3, T4>(
    (first, second, (third, fourth)): (T1, T2, (T3, T4)),
) -> (T1, T2, T3, T4) {
    (first, second, third, fourth)
}

/// Flattens a quadruple whose first three elements are grouped.
#[inline]
pub fn flatten4_triple_first<T1, T2, T3, T4>(
    ((first, second, third), fourth): ((T1, T2, T3), T4),
) -> (T1, T2, T3, T4) {
    (first, second, third, fourth)
}

/// Flattens a quadruple whose last three elements are grouped.
#[inline]
pub fn flatten4_triple_last<T1, T2, T3, T4>(
    (first, (second, third, fourth)): (T1, (T2, T3, T4)),
) -> (T1, T2, T3, T4) {
    (first, second, third, fourth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WrongUnwrapError;
    use rstest::rstest;

    #[rstest]
    fn smart_constructors_build_expected_states() {
        assert!(some(1).is_some());
        assert!(none::<i32>().is_none());
        assert_eq!(some_unit(), Option::Some(Unit));
        assert!(ok::<_, ()>(1).is_success());
        assert!(error::<i32, _>("e").is_error());
        assert_eq!(ok_unit::<String>(), Result::Ok(Unit));
        assert_eq!(error_unit::<i32>(), Result::Error(Unit));
        assert_eq!(variant(3), Variant(3));
    }

    #[rstest]
    fn catch_returns_value_without_panic() {
        assert_eq!(catch(|| "fine").unwrap(), "fine");
    }

    #[rstest]
    fn catch_converts_string_panic() {
        let caught = catch(|| -> i32 { panic!("broken {}", 7) }).unwrap_error();
        assert_eq!(caught.message(), "broken 7");
        assert!(!caught.is_wrong_unwrap());
    }

    #[rstest]
    fn catch_preserves_wrong_unwrap_payload() {
        let caught = catch(|| Result::<i32, &str>::Error("e").unwrap()).unwrap_error();
        let error = caught.downcast_ref::<WrongUnwrapError>().unwrap();
        assert_eq!(error.expected, "i32");
        assert_eq!(error.found, "Error");
    }

    #[rstest]
    fn catch_unit_reports_success_as_unit() {
        assert_eq!(catch_unit(|| ()).unwrap(), Unit);
    }

    #[rstest]
    #[case("42", Option::Some(42))]
    #[case("-1", Option::None)]
    #[case("", Option::None)]
    fn parse_unsigned(#[case] text: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse::<u32>(text), expected);
    }

    #[rstest]
    fn lookup_works_for_ordered_maps() {
        let map = BTreeMap::from([(String::from("a"), 1)]);
        assert_eq!(lookup(&map, "a"), Option::Some(&1));
        assert_eq!(lookup(&map, "b"), Option::None);
    }

    #[rstest]
    fn flatten_helpers_preserve_order() {
        assert_eq!(flatten3_right((1, (2, 3))), (1, 2, 3));
        assert_eq!(flatten4((((1, 2), 3), 4)), (1, 2, 3, 4));
        assert_eq!(flatten4_right((1, (2, (3, 4)))), (1, 2, 3, 4));
        assert_eq!(flatten4_pair_first(((1, 2), 3, 4)), (1, 2, 3, 4));
        assert_eq!(flatten4_pair_middle((1, (2, 3), 4)), (1, 2, 3, 4));
        assert_eq!(flatten4_pair_last((1, 2, (3, 4))), (1, 2, 3, 4));
        assert_eq!(flatten4_triple_first(((1, 2, 3), 4)), (1, 2, 3, 4));
        assert_eq!(flatten4_triple_last((1, (2, 3, 4))), (1, 2, 3, 4));
    }
}
