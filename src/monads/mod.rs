//! The sum types: [`Option`], [`Result`] and the `OneOf` unions.
//!
//! Each type here carries its data model, state queries, the extraction
//! family and standard trait implementations. Combinators are added in
//! [`crate::extensions`], type class instances in [`crate::typeclass`].

pub mod one_of;
mod option;
mod result;

pub use one_of::{At1, At2, At3, At4, Member, OneOf2, OneOf3, OneOf4, Union, Variant};
pub use option::{IntoIter, Iter, Option};
pub use result::Result;
