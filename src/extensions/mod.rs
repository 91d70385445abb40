//! Combinators over [`Option`](crate::Option), [`Result`](crate::Result) and
//! the `OneOf` unions.
//!
//! The sum types themselves only carry construction, state queries and the
//! extraction family. Everything that transforms or consumes a value lives
//! here, as additional inherent methods grouped by type:
//!
//! - [`option`]: `map`, `bind`, `filter`, `any`, `all`, `fold`, `switch`,
//!   `if_some`, `if_none`, `zip`, `zip_with`, `to_result`, `flatten`.
//! - [`result`]: `map`, `bind`, `fold`, `switch`, `if_ok`, `if_error`,
//!   `cast`, `cast_error`, `flatten`, `flatten_into`, `unwrap_or_raise`,
//!   `unwrap_or_report`, `to_option`, `zip`, `zip_with`.
//! - [`one_of`]: `fold` and `switch` with one branch per alternative.
//!
//! Every callback-taking combinator has a `_with` form that threads a context
//! value into the callback. A `fn` item plus a context avoids capturing
//! state in a closure:
//!
//! ```rust
//! use functional_sum::{Option, some};
//!
//! fn scale(factor: i32, value: i32) -> i32 {
//!     factor * value
//! }
//!
//! assert_eq!(some(4).map_with(3, scale), some(12));
//! ```
//!
//! Callbacks run at most once and only on the state they apply to. A panic
//! raised by a callback is not intercepted; use [`catch`](crate::catch) to
//! turn it into a value.

pub mod one_of;
pub mod option;
pub mod result;
