//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` as a type constructor directly.
//! [`TypeConstructor`] names the type a container is applied to (`Inner`) and
//! the same container applied to another type (`WithType<B>`), which is
//! enough to state `Functor`, `Applicative` and `Monad` once for every sum
//! type.
//!
//! # Example
//!
//! ```rust
//! use functional_sum::Option;
//! use functional_sum::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int = Option::Some(42);
//! let none_string: Option<String> = empty_like(&some_int);
//! assert_eq!(none_string, Option::None);
//! ```

use crate::monads::{Option, Result};

/// A type constructor applied to some type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    ///
    /// For `Option<i32>` this is `i32`; for `Result<i32, E>` it is the
    /// success type `i32`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Result<i32, E>`, `WithType<String>` is `Result<String, E>`: the
    /// error type is fixed.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<S, E> TypeConstructor for Result<S, E> {
    type Inner = S;
    type WithType<B> = Result<B, E>;
}
