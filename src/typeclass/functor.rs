//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: `Some` stays `Some`, `Error` stays `Error`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::Option;
//! use functional_sum::typeclass::Functor;
//!
//! let some_value: Option<i32> = Option::Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Option::Some("5".to_string()));
//!
//! let none_value: Option<i32> = Option::None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), Option::None);
//! ```

use super::higher::TypeConstructor;
use crate::monads::{Option, Result};

/// A type class for types that can have a function mapped over their
/// contents.
///
/// # Examples
///
/// ```rust
/// use functional_sum::Result;
/// use functional_sum::typeclass::Functor;
///
/// let parsed: Result<i32, String> = Result::Ok(5);
/// assert_eq!(parsed.fmap(|n| n * 2), Result::Ok(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    /// use functional_sum::typeclass::Functor;
    ///
    /// assert_eq!(Option::Some(5).fmap(|n| n * 2), Option::Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    /// use functional_sum::typeclass::Functor;
    ///
    /// assert_eq!(Option::Some(1).replace("x"), Option::Some("x"));
    /// assert_eq!(Option::<i32>::None.replace("x"), Option::None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<S, E> Implementation
// =============================================================================

impl<S, E: Clone> Functor for Result<S, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(S) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&S) -> B,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Error(error) => Result::Error(error.clone()),
        }
    }
}
