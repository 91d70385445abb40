//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with the ability to lift a plain value
//! (`pure`) and to combine several containers whose values do not depend on
//! each other (`map2`, `map3`, `product`, `apply`).
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::Option;
//! use functional_sum::typeclass::Applicative;
//!
//! let lifted: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(lifted, Option::Some(42));
//!
//! let sum = Option::Some(1).map2(Option::Some(2), |x, y| x + y);
//! assert_eq!(sum, Option::Some(3));
//! ```

use super::functor::Functor;
use crate::monads::{Option, Result};

/// A type class for functors that can lift values and combine independent
/// containers.
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Result;
    /// use functional_sum::typeclass::Applicative;
    ///
    /// let lifted: Result<&str, String> = <Result<(), String>>::pure("ready");
    /// assert_eq!(lifted, Result::Ok("ready"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    /// use functional_sum::typeclass::Applicative;
    ///
    /// let total = Option::Some(1).map3(Option::Some(2), Option::Some(3), |a, b, c| a + b + c);
    /// assert_eq!(total, Option::Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two containers, keeping the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two containers, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a contained function to a contained value.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Option::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Option::Some(b), Option::Some(c)) => Option::Some(function(a, b, c)),
            _ => Option::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.zip_with(other, |function, value| function(value))
    }
}

// =============================================================================
// Result<S, E> Implementation
// =============================================================================

impl<S, E: Clone> Applicative for Result<S, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Result::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(S, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(S, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(a), Result::Ok(b), Result::Ok(c)) => Result::Ok(function(a, b, c)),
            (Self::Error(error), _, _)
            | (_, Result::Error(error), _)
            | (_, _, Result::Error(error)) => Result::Error(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        S: FnOnce(B) -> Output,
    {
        self.zip_with(other, |function, value| function(value))
    }
}
