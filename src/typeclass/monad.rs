//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, where each step may
//! depend on the value produced by the previous one and may itself end the
//! chain (`None`, `Error`).
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::{Option, parse};
//! use functional_sum::typeclass::Monad;
//!
//! fn positive(value: i32) -> Option<i32> {
//!     if value > 0 { Option::Some(value) } else { Option::None }
//! }
//!
//! assert_eq!(parse::<i32>("42").flat_map(positive), Option::Some(42));
//! assert_eq!(parse::<i32>("-1").flat_map(positive), Option::None);
//! ```

use super::applicative::Applicative;
use crate::monads::{Option, Result};

/// A type class for applicatives whose computations can be chained.
pub trait Monad: Applicative {
    /// Chains a computation that depends on the contained value.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    /// use functional_sum::typeclass::Monad;
    ///
    /// assert_eq!(Option::Some(1).then(Option::Some("next")), Option::Some("next"));
    /// assert_eq!(Option::<i32>::None.then(Option::Some("next")), Option::None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.bind(function)
    }
}

// =============================================================================
// Result<S, E> Implementation
// =============================================================================

impl<S, E: Clone> Monad for Result<S, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(S) -> Result<B, E>,
    {
        self.bind(function)
    }
}
