//! Result type - either a success value or an error value.
//!
//! This module provides the crate's `Result<S, E>`: `Ok(S)` for success and
//! `Error(E)` for failure. There is no third, default state: `Result` does
//! not implement `Default`, so every value is built from one of the two
//! variants.
//!
//! ```compile_fail
//! use functional_sum::Result;
//!
//! let nothing: Result<i32, String> = Default::default();
//! ```
//!
//! The combinators (`map`, `bind`, `fold`, `cast`, `flatten`, ...) live in
//! [`crate::extensions`].
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::{Result, error, ok};
//!
//! let parsed: Result<i32, String> = ok(42);
//! assert!(parsed.is_success());
//!
//! let failed: Result<i32, String> = error("not a number".to_string());
//! assert!(failed.is_error());
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use crate::error::WrongUnwrapError;

/// Either a success (`Ok`) or an error (`Error`).
///
/// Exactly one of [`is_success`](Result::is_success) and
/// [`is_error`](Result::is_error) holds.
///
/// # Examples
///
/// ```rust
/// use functional_sum::Result;
///
/// let success: Result<i32, &str> = Result::Ok(1);
/// let failure: Result<i32, &str> = Result::Error("boom");
///
/// assert_eq!(success.unwrap(), 1);
/// assert_eq!(failure.unwrap_error(), "boom");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<S, E> {
    /// A success value.
    Ok(S),
    /// An error value.
    Error(E),
}

impl<S, E> Result<S, E> {
    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Error` value.
    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.is_success()
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts `&Result<S, E>` into `Result<&S, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&S, &E> {
        match self {
            Self::Ok(success) => Result::Ok(success),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Converts `&mut Result<S, E>` into `Result<&mut S, &mut E>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Result<&mut S, &mut E> {
        match self {
            Self::Ok(success) => Result::Ok(success),
            Self::Error(error) => Result::Error(error),
        }
    }

    // =========================================================================
    // Success Extraction
    // =========================================================================

    /// Extracts the success value without panicking.
    ///
    /// Returns `(true, success)` for `Ok` and `(false, S::default())` for
    /// `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Result;
    ///
    /// assert_eq!(Result::<i32, &str>::Ok(3).try_get_success(), (true, 3));
    /// assert_eq!(Result::<i32, &str>::Error("e").try_get_success(), (false, 0));
    /// ```
    #[inline]
    pub fn try_get_success(self) -> (bool, S)
    where
        S: Default,
    {
        match self {
            Self::Ok(success) => (true, success),
            Self::Error(_) => (false, S::default()),
        }
    }

    /// Extracts the success value, reporting an `Error` as a wrong unwrap.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongUnwrapError`] if this is an `Error` value.
    #[inline]
    pub fn try_unwrap(self) -> core::result::Result<S, WrongUnwrapError> {
        match self {
            Self::Ok(success) => Ok(success),
            Self::Error(_) => Err(WrongUnwrapError::new(type_name::<S>(), "Error")),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Raises a [`WrongUnwrapError`] if this is an `Error` value.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> S {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }

    /// Returns the success value, panicking with `message` on `Error`.
    ///
    /// # Panics
    ///
    /// Raises a [`WrongUnwrapError`] carrying `message` if this is an `Error`
    /// value.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: impl Into<Cow<'static, str>>) -> S {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => error.with_message(message).raise(),
        }
    }

    /// Returns the success value or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: S) -> S {
        match self {
            Self::Ok(success) => success,
            Self::Error(_) => fallback,
        }
    }

    /// Returns the success value or computes one with `supplier`.
    ///
    /// `supplier` only runs on `Error`.
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> S
    where
        F: FnOnce() -> S,
    {
        match self {
            Self::Ok(success) => success,
            Self::Error(_) => supplier(),
        }
    }

    /// Returns the success value or `S::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> S
    where
        S: Default,
    {
        match self {
            Self::Ok(success) => success,
            Self::Error(_) => S::default(),
        }
    }

    // =========================================================================
    // Error Extraction
    // =========================================================================

    /// Extracts the error value without panicking.
    ///
    /// Returns `(true, error)` for `Error` and `(false, E::default())` for
    /// `Ok`.
    #[inline]
    pub fn try_get_error(self) -> (bool, E)
    where
        E: Default,
    {
        match self {
            Self::Ok(_) => (false, E::default()),
            Self::Error(error) => (true, error),
        }
    }

    /// Extracts the error value, reporting an `Ok` as a wrong unwrap.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongUnwrapError`] if this is an `Ok` value.
    #[inline]
    pub fn try_unwrap_error(self) -> core::result::Result<E, WrongUnwrapError> {
        match self {
            Self::Ok(_) => Err(WrongUnwrapError::new(type_name::<E>(), "Ok")),
            Self::Error(error) => Ok(error),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Raises a [`WrongUnwrapError`] if this is an `Ok` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self.try_unwrap_error() {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }

    /// Returns the error value, panicking with `message` on `Ok`.
    ///
    /// # Panics
    ///
    /// Raises a [`WrongUnwrapError`] carrying `message` if this is an `Ok`
    /// value.
    #[inline]
    #[track_caller]
    pub fn expect_error(self, message: impl Into<Cow<'static, str>>) -> E {
        match self.try_unwrap_error() {
            Ok(value) => value,
            Err(error) => error.with_message(message).raise(),
        }
    }

    /// Returns the error value or `fallback`.
    #[inline]
    pub fn unwrap_error_or(self, fallback: E) -> E {
        match self {
            Self::Ok(_) => fallback,
            Self::Error(error) => error,
        }
    }

    /// Returns the error value or computes one with `supplier`.
    #[inline]
    pub fn unwrap_error_or_else<F>(self, supplier: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Ok(_) => supplier(),
            Self::Error(error) => error,
        }
    }

    /// Returns the error value or `E::default()`.
    #[inline]
    pub fn unwrap_error_or_default(self) -> E
    where
        E: Default,
    {
        match self {
            Self::Ok(_) => E::default(),
            Self::Error(error) => error,
        }
    }

    // =========================================================================
    // Standard Library Interop
    // =========================================================================

    /// Converts a standard library result.
    #[inline]
    pub fn from_std(result: core::result::Result<S, E>) -> Self {
        match result {
            Ok(success) => Self::Ok(success),
            Err(error) => Self::Error(error),
        }
    }

    /// Converts into a standard library result, enabling `?`.
    #[inline]
    pub fn into_std(self) -> core::result::Result<S, E> {
        match self {
            Self::Ok(success) => Ok(success),
            Self::Error(error) => Err(error),
        }
    }
}

impl<S: fmt::Display, E: fmt::Display> fmt::Display for Result<S, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(success) => write!(formatter, "Ok({success})"),
            Self::Error(error) => write!(formatter, "Error({error})"),
        }
    }
}

impl<S, E> From<core::result::Result<S, E>> for Result<S, E> {
    #[inline]
    fn from(result: core::result::Result<S, E>) -> Self {
        Self::from_std(result)
    }
}

impl<S, E> From<Result<S, E>> for core::result::Result<S, E> {
    #[inline]
    fn from(result: Result<S, E>) -> Self {
        result.into_std()
    }
}
