//! # functional-sum
//!
//! Sum types for application code that models "a value or its absence",
//! "success or failure" and "one of several fixed alternatives" without
//! relying on panics for normal control flow.
//!
//! ## Overview
//!
//! - **[`Option<T>`]**: `Some(T)` or `None`.
//! - **[`Result<S, E>`]**: `Ok(S)` or `Error(E)`.
//! - **[`OneOf2`], [`OneOf3`], [`OneOf4`]**: closed unions of two to four
//!   alternatives, with type-directed construction and extraction,
//!   extension to larger unions and permutation of alternatives.
//! - **[`Unit`]** and **[`Absurd`]**: the single-valued and the empty type.
//! - **Combinators** ([`extensions`]): `map`, `bind`, `filter`, `fold`,
//!   `switch`, `zip_with` and friends, each with a context-threading `_with`
//!   form.
//! - **[`catch`]**: converts a panic into a [`Result`].
//!
//! Every throwing extraction (`unwrap`, `expect`) is a thin wrapper over a
//! non-throwing one (`try_unwrap`, `try_get`, `unwrap_or`); a failed
//! extraction raises a [`WrongUnwrapError`].
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor`, `Applicative`, `Monad`, `Foldable` and
//!   `Bifunctor` instances (default)
//! - `compose`: the [`query!`] comprehension macro (default)
//! - `serde`: `Serialize` / `Deserialize` for every sum type
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functional_sum::prelude::*;
//!
//! fn port(text: &str) -> Result<u16, String> {
//!     parse::<u16>(text)
//!         .filter(|port| *port != 0)
//!         .to_result_else(|| format!("invalid port `{text}`"))
//! }
//!
//! assert_eq!(port("8080"), ok(8080));
//! assert_eq!(port("0"), error(String::from("invalid port `0`")));
//!
//! let endpoint: OneOf2<u16, String> = OneOf2::new(String::from("/tmp/socket"));
//! let described = endpoint.fold(|port| format!("tcp {port}"), |path| format!("unix {path}"));
//! assert_eq!(described, "unix /tmp/socket");
//! ```
//!
//! Note that this crate's `Option` and `Result` shadow the standard ones
//! when imported. Conversions to and from the standard types are available
//! through `From` and the `from_std` / `into_std` methods.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sum types, the smart constructors and, when enabled, the
/// type classes and the comprehension macro.
///
/// # Usage
///
/// ```rust
/// use functional_sum::prelude::*;
///
/// let value: Option<i32> = some(1);
/// assert_eq!(value.map(|n| n + 1), some(2));
/// ```
pub mod prelude {
    pub use crate::error::{CaughtPanic, WrongUnwrapError};
    pub use crate::functions::*;
    pub use crate::monads::{At1, At2, At3, At4, Member, OneOf2, OneOf3, OneOf4, Option, Result, Union, Variant};
    pub use crate::unit::{Absurd, Unit};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::query;
}

pub mod error;
pub mod extensions;
pub mod functions;
pub mod monads;
pub mod unit;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

pub use error::{CaughtPanic, WrongUnwrapError};
pub use functions::{
    Lookup, catch, catch_unit, error, error_unit, flatten3, flatten3_right, flatten4,
    flatten4_pair_first, flatten4_pair_last, flatten4_pair_middle, flatten4_right,
    flatten4_triple_first, flatten4_triple_last, lookup, none, ok, ok_unit, parse, some,
    some_unit, variant,
};
pub use monads::{At1, At2, At3, At4, Member, OneOf2, OneOf3, OneOf4, Option, Result, Union, Variant};
pub use unit::{Absurd, Unit};

static_assertions::assert_impl_all!(Option<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Result<String, WrongUnwrapError>: Send, Sync, Clone);
static_assertions::assert_impl_all!(CaughtPanic: Send);
static_assertions::assert_not_impl_any!(Result<i32, String>: Default);
