//! Placeholder types: the single-valued [`Unit`] and the empty [`Absurd`].
//!
//! `Unit` carries no information. It is used as the payload of
//! "success with nothing to report" (`Result<Unit, E>`) or "present, but
//! nothing to hold" (`Option<Unit>`).
//!
//! `Absurd` has no values at all, so a `Result<S, Absurd>` can never be an
//! error.
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::{Result, Unit};
//!
//! fn touch() -> Result<Unit, String> {
//!     Result::Ok(Unit)
//! }
//!
//! assert_eq!(touch(), Result::Ok(Unit));
//! assert_eq!(Unit.to_string(), "Unit");
//! ```

use std::fmt;

/// A type with exactly one value.
///
/// All `Unit` values are equal, compare equal and hash identically.
/// It is zero-sized.
///
/// # Examples
///
/// ```rust
/// use functional_sum::Unit;
///
/// assert_eq!(Unit, Unit::default());
/// assert_eq!(std::mem::size_of::<Unit>(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

static_assertions::assert_eq_size!(Unit, ());

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Unit")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

/// A type with no values.
///
/// No `Absurd` can ever be constructed, so code holding one is unreachable.
/// [`Absurd::absurd`] turns that fact into a value of any type.
///
/// # Examples
///
/// ```rust
/// use functional_sum::{Absurd, Result};
///
/// let infallible: Result<i32, Absurd> = Result::Ok(3);
/// assert_eq!(infallible.into_success(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Absurd {}

impl Absurd {
    /// Eliminates an impossible value into any type.
    #[inline]
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

impl fmt::Display for Absurd {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for Absurd {}
