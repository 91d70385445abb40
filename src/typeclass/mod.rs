//! Type class traits for the sum types.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//! - [`Foldable`]: Treating a sum type as a sequence of zero or one element
//! - [`Bifunctor`]: Mapping over both sides of `Result` and `OneOf2`
//!
//! The instances delegate to the inherent combinators (`fmap` is `map`,
//! `flat_map` is `bind`, `map2` is `zip_with`), so the two spellings always
//! agree. The traits are what generic code is written against:
//!
//! ```rust
//! use functional_sum::{Option, Result};
//! use functional_sum::typeclass::Functor;
//!
//! fn describe<F>(container: F) -> F::WithType<String>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Option::Some(1)), Option::Some(String::from("#1")));
//! let failure: Result<i32, ()> = Result::Error(());
//! assert_eq!(describe(failure), Result::Error(()));
//! ```

mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
