//! Comprehension syntax.
//!
//! - [`query!`](crate::query): chains `Option` and `Result` computations with
//!   `pattern <= monad;` bindings, `let` bindings and `where` guards.
//!
//! The macro expands to [`Monad::flat_map`](crate::typeclass::Monad::flat_map)
//! calls, so it needs the `typeclass` feature.
//!
//! # Example
//!
//! ```
//! use functional_sum::{Option, lookup, parse, query};
//! use std::collections::HashMap;
//!
//! let settings = HashMap::from([("port", "8080"), ("host", "localhost")]);
//!
//! let port: Option<u16> = query! {
//!     text <= lookup(&settings, "port");
//!     port <= parse::<u16>(text);
//!     where port != 0;
//!     Option::Some(port)
//! };
//! assert_eq!(port, Option::Some(8080));
//! ```

mod query_macro;
