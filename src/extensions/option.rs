//! Combinators for [`Option`].

use crate::monads::{Option, Result};

impl<T> Option<T> {
    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the value, if any.
    ///
    /// `function` runs at most once, and never on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Option, some};
    ///
    /// assert_eq!(some(2).map(|value| value * 10), some(20));
    /// assert_eq!(Option::<i32>::None.map(|value| value * 10), Option::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// [`map`](Option::map) with a context value passed to `function`.
    #[inline]
    pub fn map_with<C, U, F>(self, context: C, function: F) -> Option<U>
    where
        F: FnOnce(C, T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(context, value)),
            Self::None => Option::None,
        }
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// Returns `function(value)` when populated; `None` is absorbing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Option, none, some};
    ///
    /// fn half(value: i32) -> Option<i32> {
    ///     if value % 2 == 0 { some(value / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).bind(half).bind(half), some(2));
    /// assert_eq!(some(6).bind(half).bind(half), none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// [`bind`](Option::bind) with a context value passed to `function`.
    #[inline]
    pub fn bind_with<C, U, F>(self, context: C, function: F) -> Option<U>
    where
        F: FnOnce(C, T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(context, value),
            Self::None => Option::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{none, some};
    ///
    /// assert_eq!(some(5).filter(|value| *value > 10), none());
    /// assert_eq!(some(5).filter(|value| *value > 0), some(5));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// [`filter`](Option::filter) with a context value passed to `predicate`.
    #[inline]
    pub fn filter_with<C, P>(self, context: C, predicate: P) -> Self
    where
        P: FnOnce(C, &T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(context, &value) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if populated and `predicate` holds for the value.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if empty or `predicate` holds for the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Option, some};
    ///
    /// assert!(Option::<i32>::None.all(|value| *value > 0));
    /// assert!(!some(-1).all(|value| *value > 0));
    /// ```
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    /// [`any`](Self::any) with a context value passed to the predicate.
    #[inline]
    pub fn any_with<C, P>(&self, context: C, predicate: P) -> bool
    where
        P: FnOnce(C, &T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(context, value),
            Self::None => false,
        }
    }

    /// [`all`](Self::all) with a context value passed to the predicate.
    #[inline]
    pub fn all_with<C, P>(&self, context: C, predicate: P) -> bool
    where
        P: FnOnce(C, &T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(context, value),
            Self::None => true,
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Reduces both states to one value.
    ///
    /// Exactly one of `on_some` and `on_none` runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Option, some};
    ///
    /// let describe = |option: Option<i32>| {
    ///     option.fold(|value| format!("got {value}"), || String::from("nothing"))
    /// };
    /// assert_eq!(describe(some(3)), "got 3");
    /// assert_eq!(describe(Option::None), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// [`fold`](Option::fold) with a context value passed to the branch that
    /// runs.
    #[inline]
    pub fn fold_with<C, R, S, N>(self, context: C, on_some: S, on_none: N) -> R
    where
        S: FnOnce(C, T) -> R,
        N: FnOnce(C) -> R,
    {
        match self {
            Self::Some(value) => on_some(context, value),
            Self::None => on_none(context),
        }
    }

    /// Runs exactly one of `on_some` and `on_none` for its effect.
    #[inline]
    pub fn switch<S, N>(self, on_some: S, on_none: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        self.fold(on_some, on_none);
    }

    /// [`switch`](Option::switch) with a context value passed to the branch
    /// that runs.
    #[inline]
    pub fn switch_with<C, S, N>(self, context: C, on_some: S, on_none: N)
    where
        S: FnOnce(C, T),
        N: FnOnce(C),
    {
        self.fold_with(context, on_some, on_none);
    }

    /// Runs `action` on the value if populated, then returns the option
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::some;
    ///
    /// let mut seen = Vec::new();
    /// let option = some(1).if_some(|value| seen.push(*value));
    /// assert_eq!(option, some(1));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn if_some<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// [`if_some`](Option::if_some) with a context value passed to `action`.
    #[inline]
    pub fn if_some_with<C, A>(self, context: C, action: A) -> Self
    where
        A: FnOnce(C, &T),
    {
        if let Self::Some(value) = &self {
            action(context, value);
        }
        self
    }

    /// Runs `action` if empty, then returns the option unchanged.
    #[inline]
    pub fn if_none<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    /// [`if_none`](Option::if_none) with a context value passed to `action`.
    #[inline]
    pub fn if_none_with<C, A>(self, context: C, action: A) -> Self
    where
        A: FnOnce(C),
    {
        if self.is_none() {
            action(context);
        }
        self
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Combines two populated options with `combiner`.
    ///
    /// `combiner` never runs unless both sides are populated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Option, none, some};
    ///
    /// assert_eq!(some(1).zip_with(some(2), |left, right| left + right), some(3));
    /// assert_eq!(none::<i32>().zip_with(some(2), |left, right| left + right), none());
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Option<U>, combiner: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Some(left), Option::Some(right)) => Option::Some(combiner(left, right)),
            _ => Option::None,
        }
    }

    /// Pairs two populated options.
    #[inline]
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a [`Result`], using `error` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Option, Result, some};
    ///
    /// assert_eq!(some(1).to_result("missing"), Result::Ok(1));
    /// assert_eq!(Option::<i32>::None.to_result("missing"), Result::Error("missing"));
    /// ```
    #[inline]
    pub fn to_result<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Error(error),
        }
    }

    /// Converts into a [`Result`], computing the error lazily.
    #[inline]
    pub fn to_result_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Error(error()),
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{Option, some};
    ///
    /// assert_eq!(some(some(1)).flatten(), some(1));
    /// assert_eq!(some(Option::<i32>::None).flatten(), Option::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
        }
    }
}
