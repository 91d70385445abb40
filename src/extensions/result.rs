//! Combinators for [`Result`].

use std::any::type_name;
use std::fmt;

use crate::error::WrongUnwrapError;
use crate::monads::{Option, Result};
use crate::unit::Absurd;

impl<S, E> Result<S, E> {
    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the success value; errors pass through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Result, error, ok};
    ///
    /// let success: Result<i32, &str> = ok(2);
    /// assert_eq!(success.map(|value| value + 1), ok(3));
    ///
    /// let failure: Result<i32, &str> = error("bad");
    /// assert_eq!(failure.map(|value| value + 1), error("bad"));
    /// ```
    #[inline]
    pub fn map<S2, F>(self, function: F) -> Result<S2, E>
    where
        F: FnOnce(S) -> S2,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// [`map`](Result::map) with a context value passed to `function`.
    #[inline]
    pub fn map_with<C, S2, F>(self, context: C, function: F) -> Result<S2, E>
    where
        F: FnOnce(C, S) -> S2,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(context, value)),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Chains a fallible computation.
    ///
    /// The first error is absorbing: later functions never run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Result, error, ok};
    ///
    /// let chained: Result<i32, &str> = ok(1)
    ///     .bind(|_| error("e"))
    ///     .bind(|value: i32| ok(value + 1));
    /// assert_eq!(chained, error("e"));
    /// ```
    #[inline]
    pub fn bind<S2, F>(self, function: F) -> Result<S2, E>
    where
        F: FnOnce(S) -> Result<S2, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// [`bind`](Result::bind) with a context value passed to `function`.
    #[inline]
    pub fn bind_with<C, S2, F>(self, context: C, function: F) -> Result<S2, E>
    where
        F: FnOnce(C, S) -> Result<S2, E>,
    {
        match self {
            Self::Ok(value) => function(context, value),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Widens the success type through `Into`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Result, ok};
    ///
    /// let narrow: Result<u8, String> = ok(7);
    /// let wide: Result<u64, String> = narrow.cast();
    /// assert_eq!(wide, ok(7));
    /// ```
    #[inline]
    pub fn cast<S2>(self) -> Result<S2, E>
    where
        S: Into<S2>,
    {
        self.map(Into::into)
    }

    /// Widens the error type through `Into`.
    #[inline]
    pub fn cast_error<E2>(self) -> Result<S, E2>
    where
        E: Into<E2>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(error.into()),
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Reduces both states to one value.
    ///
    /// Exactly one of `on_ok` and `on_error` runs. This is also how errors
    /// are transformed:
    ///
    /// ```rust
    /// use functional_sum::{Result, error, ok};
    ///
    /// let failure: Result<i32, &str> = error("boom");
    /// let relabeled: Result<i32, String> =
    ///     failure.fold(ok, |message| error(message.to_uppercase()));
    /// assert_eq!(relabeled, error(String::from("BOOM")));
    /// ```
    #[inline]
    pub fn fold<R, O, F>(self, on_ok: O, on_error: F) -> R
    where
        O: FnOnce(S) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Error(error) => on_error(error),
        }
    }

    /// [`fold`](Result::fold) with a context value passed to the branch that
    /// runs.
    #[inline]
    pub fn fold_with<C, R, O, F>(self, context: C, on_ok: O, on_error: F) -> R
    where
        O: FnOnce(C, S) -> R,
        F: FnOnce(C, E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(context, value),
            Self::Error(error) => on_error(context, error),
        }
    }

    /// Runs exactly one of `on_ok` and `on_error` for its effect.
    #[inline]
    pub fn switch<O, F>(self, on_ok: O, on_error: F)
    where
        O: FnOnce(S),
        F: FnOnce(E),
    {
        self.fold(on_ok, on_error);
    }

    /// [`switch`](Result::switch) with a context value passed to the branch
    /// that runs.
    #[inline]
    pub fn switch_with<C, O, F>(self, context: C, on_ok: O, on_error: F)
    where
        O: FnOnce(C, S),
        F: FnOnce(C, E),
    {
        self.fold_with(context, on_ok, on_error);
    }

    /// Runs `action` on the success value, then returns the result unchanged.
    #[inline]
    pub fn if_ok<A>(self, action: A) -> Self
    where
        A: FnOnce(&S),
    {
        if let Self::Ok(value) = &self {
            action(value);
        }
        self
    }

    /// [`if_ok`](Result::if_ok) with a context value passed to `action`.
    #[inline]
    pub fn if_ok_with<C, A>(self, context: C, action: A) -> Self
    where
        A: FnOnce(C, &S),
    {
        if let Self::Ok(value) = &self {
            action(context, value);
        }
        self
    }

    /// Runs `action` on the error value, then returns the result unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Result, error};
    ///
    /// let mut reported = Vec::new();
    /// let failure: Result<i32, &str> = error("disk full");
    /// let _ = failure.if_error(|message| reported.push(message.to_string()));
    /// assert_eq!(reported, vec!["disk full"]);
    /// ```
    #[inline]
    pub fn if_error<A>(self, action: A) -> Self
    where
        A: FnOnce(&E),
    {
        if let Self::Error(error) = &self {
            action(error);
        }
        self
    }

    /// [`if_error`](Result::if_error) with a context value passed to
    /// `action`.
    #[inline]
    pub fn if_error_with<C, A>(self, context: C, action: A) -> Self
    where
        A: FnOnce(C, &E),
    {
        if let Self::Error(error) = &self {
            action(context, error);
        }
        self
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Combines two successes with `combiner`.
    ///
    /// Left-biased: when both sides failed, the error of `self` is kept.
    /// `combiner` never runs unless both sides succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Result, error, ok};
    ///
    /// let left: Result<i32, &str> = error("left");
    /// let right: Result<i32, &str> = error("right");
    /// assert_eq!(left.zip_with(right, |a, b| a + b), error("left"));
    /// ```
    #[inline]
    pub fn zip_with<S2, R, F>(self, other: Result<S2, E>, combiner: F) -> Result<R, E>
    where
        F: FnOnce(S, S2) -> R,
    {
        match (self, other) {
            (Self::Ok(left), Result::Ok(right)) => Result::Ok(combiner(left, right)),
            (Self::Error(error), _) | (Self::Ok(_), Result::Error(error)) => Result::Error(error),
        }
    }

    /// [`zip_with`](Self::zip_with) with a context value passed to the
    /// combiner.
    #[inline]
    pub fn zip_with_context<S2, C, R, F>(
        self,
        other: Result<S2, E>,
        context: C,
        combiner: F,
    ) -> Result<R, E>
    where
        F: FnOnce(C, S, S2) -> R,
    {
        match (self, other) {
            (Self::Ok(left), Result::Ok(right)) => Result::Ok(combiner(context, left, right)),
            (Self::Error(error), _) | (Self::Ok(_), Result::Error(error)) => Result::Error(error),
        }
    }

    /// Pairs two successes, keeping the first error.
    #[inline]
    pub fn zip<S2>(self, other: Result<S2, E>) -> Result<(S, S2), E> {
        self.zip_with(other, |left, right| (left, right))
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Keeps the success value and discards the error.
    #[inline]
    pub fn to_option(self) -> Option<S> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Error(_) => Option::None,
        }
    }

    /// Keeps the error value and discards the success.
    #[inline]
    pub fn to_error_option(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Error(error) => Option::Some(error),
        }
    }

    /// Returns the success value, or re-raises the stored error as a panic.
    ///
    /// The panic payload is the error value itself, so it can be recovered
    /// with [`catch`](crate::catch) and
    /// [`CaughtPanic::downcast_ref`](crate::CaughtPanic::downcast_ref).
    ///
    /// # Panics
    ///
    /// Panics with the error as payload if the result is an `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Result, catch, error};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Timeout;
    ///
    /// let caught = catch(|| {
    ///     let failure: Result<i32, Timeout> = error(Timeout);
    ///     failure.unwrap_or_raise()
    /// })
    /// .unwrap_error();
    /// assert_eq!(caught.downcast_ref::<Timeout>(), Some(&Timeout));
    /// ```
    #[track_caller]
    pub fn unwrap_or_raise(self) -> S
    where
        E: Send + 'static,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => {
                log::debug!("re-raising error of type `{}`", type_name::<E>());
                std::panic::panic_any(error)
            }
        }
    }

    /// Returns the success value, or raises a wrong unwrap whose message is
    /// the stored error.
    ///
    /// # Panics
    ///
    /// Raises a [`WrongUnwrapError`] if the result is an `Error`.
    #[track_caller]
    pub fn unwrap_or_report(self) -> S
    where
        E: fmt::Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => WrongUnwrapError::new(type_name::<S>(), "Error")
                .with_message(error.to_string())
                .raise(),
        }
    }
}

impl<S, E> Result<Result<S, E>, E> {
    /// Removes one level of nesting when both levels share an error type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Result, error, ok};
    ///
    /// let nested: Result<Result<i32, &str>, &str> = ok(error("inner"));
    /// assert_eq!(nested.flatten(), error("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Result<S, E> {
        match self {
            Self::Ok(inner) => inner,
            Self::Error(error) => Result::Error(error),
        }
    }
}

impl<S, E1, E2> Result<Result<S, E1>, E2> {
    /// Removes one level of nesting, converting the inner error into the
    /// outer error type.
    #[inline]
    pub fn flatten_into(self) -> Result<S, E2>
    where
        E1: Into<E2>,
    {
        match self {
            Self::Ok(inner) => inner.cast_error(),
            Self::Error(error) => Result::Error(error),
        }
    }
}

impl<S> Result<S, Absurd> {
    /// Extracts the success value of a result that cannot fail.
    #[inline]
    pub fn into_success(self) -> S {
        match self {
            Self::Ok(value) => value,
            Self::Error(impossible) => impossible.absurd(),
        }
    }
}
