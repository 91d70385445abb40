//! Closed discriminated unions of two, three and four alternatives.
//!
//! This module provides [`OneOf2`], [`OneOf3`] and [`OneOf4`]. Each is an
//! enum with one variant per type parameter (`First`, `Second`, `Third`,
//! `Fourth`), so exactly one alternative is populated and an unknown tag is
//! unrepresentable.
//!
//! # Type-directed access
//!
//! Besides positional construction and matching, every union can be built
//! from, and unwrapped into, one of its alternative *types*. The
//! [`Member<T, At>`] trait ties an alternative type `T` to its position `At`
//! ([`At1`] to [`At4`]); the compiler infers the position, so callers write
//! `_` for it:
//!
//! ```rust
//! use functional_sum::OneOf3;
//!
//! let value: OneOf3<i32, String, bool> = OneOf3::new(String::from("three"));
//! assert!(value.is::<String, _>());
//! assert_eq!(value.unwrap::<String, _>(), "three");
//! ```
//!
//! Type-directed access needs the alternatives to be distinct types. When two
//! type parameters are the same, the position cannot be inferred and the
//! program is rejected at compile time:
//!
//! ```compile_fail
//! use functional_sum::OneOf2;
//!
//! let ambiguous: OneOf2<i32, i32> = OneOf2::new(1);
//! ```
//!
//! Positional variants (`OneOf2::First(1)`) still work for such unions.
//!
//! # Conversions
//!
//! - [`extend_with`](OneOf2::extend_with) injects into a larger union whose
//!   added alternatives are never populated.
//! - [`permute`](OneOf3::permute) re-tags into any reordering of the same
//!   alternatives. Every permutation of every arity goes through this one
//!   operation; the target positions are resolved by the compiler.
//! - [`embed`](OneOf3::embed) re-tags into any union that lists every
//!   alternative type.
//!
//! ```rust
//! use functional_sum::OneOf3;
//!
//! let original: OneOf3<u8, char, bool> = OneOf3::new('x');
//! let rotated: OneOf3<bool, u8, char> = original.permute();
//! assert_eq!(rotated, OneOf3::Third('x'));
//!
//! let restored: OneOf3<u8, char, bool> = rotated.permute();
//! assert_eq!(restored, original);
//! ```

mod member;

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use crate::error::WrongUnwrapError;
use crate::monads::Option;

// =============================================================================
// Positions
// =============================================================================

/// Position marker for the first alternative.
#[derive(Debug)]
pub enum At1 {}

/// Position marker for the second alternative.
#[derive(Debug)]
pub enum At2 {}

/// Position marker for the third alternative.
#[derive(Debug)]
pub enum At3 {}

/// Position marker for the fourth alternative.
#[derive(Debug)]
pub enum At4 {}

// =============================================================================
// Traits
// =============================================================================

/// Relates a union to one of its alternative types.
///
/// `At` is the position of `T` inside the union. Implementations exist for
/// every position of [`OneOf2`], [`OneOf3`] and [`OneOf4`]; the position is
/// inferred from `T` whenever the alternative types are distinct.
///
/// `Remainder` is what is left when the alternative is *not* `T`: the union
/// of the other alternatives, in their original order (for a two-way union
/// it is simply the other type).
pub trait Member<T, At>: Sized {
    /// The union of the remaining alternatives.
    type Remainder;

    /// Builds the union holding `value` at position `At`.
    fn inject(value: T) -> Self;

    /// Takes the `T` alternative out, or returns the remainder.
    ///
    /// # Errors
    ///
    /// Returns the remainder union when another alternative is populated.
    fn project(self) -> core::result::Result<T, Self::Remainder>;

    /// Borrows the `T` alternative if it is populated.
    fn project_ref(&self) -> Option<&T>;
}

/// Common structure shared by every arity of `OneOf`.
pub trait Union: Sized {
    /// The number of alternatives.
    const ARITY: usize;

    /// The 1-based position of the populated alternative.
    fn position(&self) -> usize;

    /// The type name of the populated alternative.
    fn type_name(&self) -> &'static str;
}

// =============================================================================
// Variant
// =============================================================================

/// A value on its way into a union.
///
/// `Variant` does not know which union it will end up in; the target is
/// chosen at the conversion site.
///
/// # Examples
///
/// ```rust
/// use functional_sum::{OneOf2, variant};
///
/// let union: OneOf2<i32, &str> = variant("text").into_one_of();
/// assert_eq!(union, OneOf2::Second("text"));
/// assert_eq!(variant(5).to_string(), "Variant(5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant<T>(pub T);

impl<T> Variant<T> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Promotes the value into any union that lists `T`.
    #[inline]
    pub fn into_one_of<U, At>(self) -> U
    where
        U: Member<T, At>,
    {
        U::inject(self.0)
    }
}

impl<T: fmt::Display> fmt::Display for Variant<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Variant({})", self.0)
    }
}

// =============================================================================
// Union Definitions
// =============================================================================

macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $name:ident<$($type:ident => $variant:ident = $position:literal),+>
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub enum $name<$($type),+> {
                $(
                    #[doc = concat!("The `", stringify!($type), "` alternative.")]
                    $variant($type),
                )+
            }

            impl<$($type),+> Union for $name<$($type),+> {
                const ARITY: usize = [$($position),+].len();

                #[inline]
                fn position(&self) -> usize {
                    match self {
                        $(Self::$variant(_) => $position,)+
                    }
                }

                #[inline]
                fn type_name(&self) -> &'static str {
                    match self {
                        $(Self::$variant(_) => type_name::<$type>(),)+
                    }
                }
            }

            impl<$($type),+> $name<$($type),+> {
                // =============================================================
                // Construction
                // =============================================================

                /// Builds the union holding `value` in the alternative of
                /// type `T`.
                #[inline]
                pub fn new<T, At>(value: T) -> Self
                where
                    Self: Member<T, At>,
                {
                    <Self as Member<T, At>>::inject(value)
                }

                /// Builds the union from a [`Variant`].
                #[inline]
                pub fn from_variant<T, At>(variant: Variant<T>) -> Self
                where
                    Self: Member<T, At>,
                {
                    Self::new(variant.0)
                }

                // =============================================================
                // Queries
                // =============================================================

                /// Returns `true` if the populated alternative is `T`.
                #[inline]
                pub fn is<T, At>(&self) -> bool
                where
                    Self: Member<T, At>,
                {
                    <Self as Member<T, At>>::project_ref(self).is_some()
                }

                /// Borrows the payload if the populated alternative is `T`.
                #[inline]
                pub fn get<T, At>(&self) -> Option<&T>
                where
                    Self: Member<T, At>,
                {
                    <Self as Member<T, At>>::project_ref(self)
                }

                // =============================================================
                // Extraction
                // =============================================================

                /// Splits off the `T` alternative.
                ///
                /// Returns `Ok(value)` if the union held a `T`, otherwise
                /// `Err(remainder)` with the populated payload re-tagged in
                /// the union of the other alternatives.
                ///
                /// # Errors
                ///
                /// Returns the remainder when another alternative is populated.
                #[inline]
                pub fn split<T, At>(
                    self,
                ) -> core::result::Result<T, <Self as Member<T, At>>::Remainder>
                where
                    Self: Member<T, At>,
                {
                    <Self as Member<T, At>>::project(self)
                }

                /// Extracts the `T` alternative, reporting any other as a
                /// wrong unwrap.
                ///
                /// # Errors
                ///
                /// Returns a [`WrongUnwrapError`] naming `T` and the
                /// populated alternative's type.
                #[inline]
                pub fn try_unwrap<T, At>(self) -> core::result::Result<T, WrongUnwrapError>
                where
                    Self: Member<T, At>,
                {
                    let found = Union::type_name(&self);
                    <Self as Member<T, At>>::project(self)
                        .map_err(|_| WrongUnwrapError::new(type_name::<T>(), found))
                }

                /// Extracts the `T` alternative without panicking.
                ///
                /// Returns `(true, value)` if the union held a `T`, otherwise
                /// `(false, T::default())`.
                #[inline]
                pub fn try_get<T, At>(self) -> (bool, T)
                where
                    Self: Member<T, At>,
                    T: Default,
                {
                    match <Self as Member<T, At>>::project(self) {
                        Ok(value) => (true, value),
                        Err(_) => (false, T::default()),
                    }
                }

                /// Returns the `T` alternative.
                ///
                /// # Panics
                ///
                /// Raises a [`WrongUnwrapError`] if another alternative is
                /// populated.
                #[inline]
                #[track_caller]
                pub fn unwrap<T, At>(self) -> T
                where
                    Self: Member<T, At>,
                {
                    match self.try_unwrap::<T, At>() {
                        Ok(value) => value,
                        Err(error) => error.raise(),
                    }
                }

                /// Returns the `T` alternative, panicking with `message`
                /// otherwise.
                ///
                /// # Panics
                ///
                /// Raises a [`WrongUnwrapError`] carrying `message` if
                /// another alternative is populated.
                #[inline]
                #[track_caller]
                pub fn expect<T, At>(self, message: impl Into<Cow<'static, str>>) -> T
                where
                    Self: Member<T, At>,
                {
                    match self.try_unwrap::<T, At>() {
                        Ok(value) => value,
                        Err(error) => error.with_message(message).raise(),
                    }
                }

                /// Returns the `T` alternative or `fallback`.
                #[inline]
                pub fn unwrap_or<T, At>(self, fallback: T) -> T
                where
                    Self: Member<T, At>,
                {
                    <Self as Member<T, At>>::project(self).unwrap_or(fallback)
                }

                /// Returns the `T` alternative or computes one with
                /// `supplier`.
                #[inline]
                pub fn unwrap_or_else<T, At, F>(self, supplier: F) -> T
                where
                    Self: Member<T, At>,
                    F: FnOnce() -> T,
                {
                    <Self as Member<T, At>>::project(self).unwrap_or_else(|_| supplier())
                }

                /// Returns the `T` alternative or `T::default()`.
                #[inline]
                pub fn unwrap_or_default<T, At>(self) -> T
                where
                    Self: Member<T, At>,
                    T: Default,
                {
                    <Self as Member<T, At>>::project(self).unwrap_or_default()
                }

                // =============================================================
                // Re-tagging
                // =============================================================

                /// Re-tags the value into any union that lists every
                /// alternative type of this one.
                ///
                /// The payload is moved, never transformed.
                #[inline]
                pub fn embed<U, $([<$type At>]),+>(self) -> U
                where
                    $(U: Member<$type, [<$type At>]>,)+
                {
                    match self {
                        $(Self::$variant(value) => {
                            <U as Member<$type, [<$type At>]>>::inject(value)
                        })+
                    }
                }

                /// Re-tags the value into a reordering of the same
                /// alternatives.
                ///
                /// The target order is given by the result type; each
                /// position is resolved at compile time.
                #[inline]
                pub fn permute<U, $([<$type At>]),+>(self) -> U
                where
                    U: Union,
                    $(U: Member<$type, [<$type At>]>,)+
                {
                    const {
                        assert!(
                            U::ARITY == Self::ARITY,
                            "permute requires a union of the same arity"
                        );
                    }
                    self.embed::<U, $([<$type At>]),+>()
                }
            }

            impl<$($type: fmt::Display),+> fmt::Display for $name<$($type),+> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        $(Self::$variant(value) => write!(formatter, "Variant({value})"),)+
                    }
                }
            }
        }
    };
}

one_of! {
    /// A value of exactly one of two types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::OneOf2;
    ///
    /// let value: OneOf2<i32, String> = OneOf2::new(7_i32);
    /// assert_eq!(value.to_string(), "Variant(7)");
    ///
    /// let swapped: OneOf2<String, i32> = value.permute();
    /// assert_eq!(swapped, OneOf2::Second(7));
    /// ```
    OneOf2<T1 => First = 1, T2 => Second = 2>
}

one_of! {
    /// A value of exactly one of three types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::OneOf3;
    ///
    /// let value: OneOf3<i32, String, bool> = OneOf3::new(true);
    /// match value.split::<i32, _>() {
    ///     Ok(number) => panic!("unexpected {number}"),
    ///     Err(rest) => assert!(rest.unwrap::<bool, _>()),
    /// }
    /// ```
    OneOf3<T1 => First = 1, T2 => Second = 2, T3 => Third = 3>
}

one_of! {
    /// A value of exactly one of four types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::OneOf4;
    ///
    /// let value: OneOf4<u8, i64, char, &str> = OneOf4::new('q');
    /// assert_eq!(value.get::<char, _>().into_std(), Some(&'q'));
    /// ```
    OneOf4<T1 => First = 1, T2 => Second = 2, T3 => Third = 3, T4 => Fourth = 4>
}

static_assertions::assert_impl_all!(OneOf4<u8, String, Vec<u8>, ()>: Send, Sync, Clone);

// =============================================================================
// Extension
// =============================================================================

impl<T1, T2> OneOf2<T1, T2> {
    /// Injects into a three-way union; the `T3` alternative stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::{OneOf2, OneOf3};
    ///
    /// let value: OneOf2<i32, char> = OneOf2::Second('c');
    /// let extended: OneOf3<i32, char, bool> = value.extend_with::<bool>();
    /// assert_eq!(extended, OneOf3::Second('c'));
    /// ```
    #[inline]
    pub fn extend_with<T3>(self) -> OneOf3<T1, T2, T3> {
        match self {
            Self::First(value) => OneOf3::First(value),
            Self::Second(value) => OneOf3::Second(value),
        }
    }

    /// Injects into a four-way union; `T3` and `T4` stay empty.
    #[inline]
    pub fn extend_with_pair<T3, T4>(self) -> OneOf4<T1, T2, T3, T4> {
        match self {
            Self::First(value) => OneOf4::First(value),
            Self::Second(value) => OneOf4::Second(value),
        }
    }
}

impl<T1, T2, T3> OneOf3<T1, T2, T3> {
    /// Injects into a four-way union; the `T4` alternative stays empty.
    #[inline]
    pub fn extend_with<T4>(self) -> OneOf4<T1, T2, T3, T4> {
        match self {
            Self::First(value) => OneOf4::First(value),
            Self::Second(value) => OneOf4::Second(value),
            Self::Third(value) => OneOf4::Third(value),
        }
    }
}
