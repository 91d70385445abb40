//! Option type - a value that may or may not be present.
//!
//! This module provides the crate's `Option<T>`: either `Some(T)`, holding
//! exactly one value, or `None`, holding nothing. It is the data model only;
//! the combinators (`map`, `bind`, `filter`, `zip_with`, `fold`, ...) live in
//! [`crate::extensions`].
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::{Option, none, some};
//!
//! let port: Option<u16> = some(8080);
//! assert!(port.is_some());
//! assert_eq!(port.unwrap_or(80), 8080);
//!
//! let missing: Option<u16> = none();
//! assert_eq!(missing.unwrap_or(80), 80);
//!
//! // None orders before every Some
//! assert!(missing < port);
//! ```

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::WrongUnwrapError;

/// A value that may be absent.
///
/// Exactly one of [`is_some`](Option::is_some) and
/// [`is_none`](Option::is_none) holds. Equality, ordering and hashing
/// delegate to `T`, with `None` equal only to `None` and ordered before every
/// `Some`.
///
/// # Examples
///
/// ```rust
/// use functional_sum::Option;
///
/// let present = Option::Some(5);
/// let absent: Option<i32> = Option::None;
///
/// assert_eq!(present.unwrap(), 5);
/// assert_eq!(absent.unwrap_or_default(), 0);
/// assert_ne!(present, absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Option<T> {
    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if the option holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    ///
    /// assert!(Option::Some(1).is_some());
    /// assert!(!Option::<i32>::None.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the option is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    ///
    /// assert!(Option::<i32>::None.is_none());
    /// assert!(!Option::Some(1).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts `&Option<T>` into `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Converts `&mut Option<T>` into `Option<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    // =========================================================================
    // Safe Extraction
    // =========================================================================

    /// Extracts the value without panicking.
    ///
    /// Returns `(true, value)` when populated and `(false, T::default())`
    /// when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    ///
    /// assert_eq!(Option::Some(7).try_get(), (true, 7));
    /// assert_eq!(Option::<i32>::None.try_get(), (false, 0));
    /// ```
    #[inline]
    pub fn try_get(self) -> (bool, T)
    where
        T: Default,
    {
        match self {
            Self::Some(value) => (true, value),
            Self::None => (false, T::default()),
        }
    }

    /// Extracts the value, reporting an empty option as an error.
    ///
    /// This is the checked primitive behind [`unwrap`](Option::unwrap) and
    /// [`expect`](Option::expect); it never panics and composes with `?`.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongUnwrapError`] if the option is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    ///
    /// assert_eq!(Option::Some(7).try_unwrap(), Ok(7));
    /// assert!(Option::<i32>::None.try_unwrap().is_err());
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> core::result::Result<T, WrongUnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(WrongUnwrapError::new(type_name::<T>(), "None")),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Raises a [`WrongUnwrapError`] if the option is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    ///
    /// assert_eq!(Option::Some("value").unwrap(), "value");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }

    /// Returns the contained value, panicking with `message` if empty.
    ///
    /// # Panics
    ///
    /// Raises a [`WrongUnwrapError`] carrying `message` if the option is
    /// `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: impl Into<Cow<'static, str>>) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => error.with_message(message).raise(),
        }
    }

    /// Returns the contained value or `fallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    ///
    /// assert_eq!(Option::Some(1).unwrap_or(9), 1);
    /// assert_eq!(Option::None.unwrap_or(9), 9);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the contained value or computes one with `supplier`.
    ///
    /// `supplier` only runs when the option is empty.
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Returns an iterator over zero or one reference.
    ///
    /// The option is not consumed, so it can be enumerated again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::Option;
    ///
    /// let value = Option::Some(3);
    /// assert_eq!(value.iter().count(), 1);
    /// assert_eq!(value.iter().copied().sum::<i32>(), 3);
    /// assert_eq!(Option::<i32>::None.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_std(),
        }
    }

    // =========================================================================
    // Standard Library Interop
    // =========================================================================

    /// Converts a standard library option.
    ///
    /// This is the only way an absent standard value becomes `None`.
    #[inline]
    pub fn from_std(option: core::option::Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Converts into a standard library option.
    #[inline]
    pub fn into_std(self) -> core::option::Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Option<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    #[inline]
    fn from(option: core::option::Option<T>) -> Self {
        Self::from_std(option)
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.into_std()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`Option`], created by [`Option::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::option::Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> core::option::Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, core::option::Option<usize>) {
        let length = usize::from(self.inner.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> core::option::Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over an [`Option`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: core::option::Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> core::option::Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, core::option::Option<usize>) {
        let length = usize::from(self.inner.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> core::option::Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_std(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
