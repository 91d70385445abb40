//! Foldable type class - reducing a structure to a summary value.
//!
//! `Option` and `Result` fold as sequences of zero or one element: `Some`
//! and `Ok` contribute their value, `None` and `Error` contribute nothing.
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::{Option, Result};
//! use functional_sum::typeclass::Foldable;
//!
//! assert_eq!(Option::Some(5).fold_left(10, |accumulator, x| accumulator + x), 15);
//! assert_eq!(Option::<i32>::None.fold_left(10, |accumulator, x| accumulator + x), 10);
//!
//! let failure: Result<i32, &str> = Result::Error("e");
//! assert_eq!(failure.to_list(), Vec::<i32>::new());
//! ```

use super::higher::TypeConstructor;
use crate::monads::{Option, Result};

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure holds no element.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Option::None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Option::Some(element)
            } else {
                Option::None
            }
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(element) => function(init, element),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(element) => function(element, init),
            Self::None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Result<S, E> Implementation
// =============================================================================

impl<S, E> Foldable for Result<S, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, S) -> B,
    {
        match self {
            Self::Ok(element) => function(init, element),
            Self::Error(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(S, B) -> B,
    {
        match self {
            Self::Ok(element) => function(element, init),
            Self::Error(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_error()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Option::Some(3), 1, false)]
    #[case(Option::None, 0, true)]
    fn option_length_and_emptiness(
        #[case] value: Option<i32>,
        #[case] length: usize,
        #[case] empty: bool,
    ) {
        assert_eq!(Foldable::length(&value), length);
        assert_eq!(Foldable::is_empty(&value), empty);
    }

    #[rstest]
    fn option_find_and_exists() {
        assert_eq!(Option::Some(4).find(|x| x % 2 == 0), Option::Some(4));
        assert_eq!(Option::Some(3).find(|x| x % 2 == 0), Option::None);
        assert!(Option::Some(3).exists(|x| *x == 3));
        assert!(Option::<i32>::None.for_all(|_| false));
    }

    #[rstest]
    fn result_fold_right_ignores_error() {
        let failure: Result<i32, &str> = Result::Error("e");
        assert_eq!(failure.fold_right(1, |x, accumulator| x * accumulator), 1);
        let success: Result<i32, &str> = Result::Ok(6);
        assert_eq!(success.fold_right(2, |x, accumulator| x * accumulator), 12);
    }

    #[rstest]
    fn result_to_list() {
        let success: Result<&str, ()> = Result::Ok("only");
        assert_eq!(success.to_list(), vec!["only"]);
    }
}
