//! Bifunctor type class - mapping over two type parameters.
//!
//! A `Bifunctor` generalizes `Functor` to types with two parameters, such as
//! `Result<S, E>` and `OneOf2<T1, T2>`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Type Parameter Order for Result
//!
//! `Result<S, E>` is implemented as `Bifunctor<E, S>`:
//! - `first`: transforms the error type (E)
//! - `second`: transforms the success type (S), like [`Result::map`]
//!
//! `first` is how an error is transformed without touching the success
//! value:
//!
//! ```rust
//! use functional_sum::Result;
//! use functional_sum::typeclass::Bifunctor;
//!
//! let failure: Result<i32, &str> = Result::Error("timeout");
//! let described = failure.first(|message| format!("request failed: {message}"));
//! assert_eq!(described, Result::Error(String::from("request failed: timeout")));
//! ```

use crate::monads::{OneOf2, Result};

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// # Examples
///
/// ```rust
/// use functional_sum::OneOf2;
/// use functional_sum::typeclass::Bifunctor;
///
/// let value: OneOf2<i32, String> = OneOf2::First(42);
/// let mapped = value.bimap(|x| x * 2, |s: String| s.len());
/// assert_eq!(mapped, OneOf2::First(84));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    type Target<C, D>;

    /// Applies two functions to both type parameters.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Applies a function to a reference of the first type parameter.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, |b| b.clone())
    }

    /// Applies a function to a reference of the second type parameter.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(|a| a.clone(), function)
    }
}

// =============================================================================
// Result<S, E> Implementation
// =============================================================================

impl<S, E> Bifunctor<E, S> for Result<S, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(S) -> D,
    {
        match self {
            Self::Ok(value) => Result::Ok(second_function(value)),
            Self::Error(error) => Result::Error(first_function(error)),
        }
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Result<D, E>
    where
        G: FnOnce(S) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&S) -> D,
    {
        match self {
            Self::Ok(value) => Result::Ok(second_function(value)),
            Self::Error(error) => Result::Error(first_function(error)),
        }
    }
}

// =============================================================================
// OneOf2<T1, T2> Implementation
// =============================================================================

impl<T1, T2> Bifunctor<T1, T2> for OneOf2<T1, T2> {
    type Target<C, D> = OneOf2<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> OneOf2<C, D>
    where
        F: FnOnce(T1) -> C,
        G: FnOnce(T2) -> D,
    {
        self.fold(
            |value| OneOf2::First(first_function(value)),
            |value| OneOf2::Second(second_function(value)),
        )
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> OneOf2<C, D>
    where
        F: FnOnce(&T1) -> C,
        G: FnOnce(&T2) -> D,
    {
        match self {
            Self::First(value) => OneOf2::First(first_function(value)),
            Self::Second(value) => OneOf2::Second(second_function(value)),
        }
    }
}
