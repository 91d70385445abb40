//! Error types raised by the sum types.
//!
//! This module provides the two failure kinds the library knows about:
//!
//! - [`WrongUnwrapError`]: extraction was attempted against a state that does
//!   not hold the requested value (an empty `Option`, the wrong side of a
//!   `Result`, or the wrong alternative of a `OneOf`).
//! - [`CaughtPanic`]: a panic converted into a value by
//!   [`catch`](crate::catch).
//!
//! The panicking unwrap family raises `WrongUnwrapError` as a typed panic
//! payload, so it can be told apart from other panics by downcasting.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// The failure raised when a sum type is unwrapped in the wrong state.
///
/// `expected` is the name of the requested type, `found` describes what was
/// actually stored. A caller-supplied `message` (from `expect`) replaces the
/// generated description when present.
///
/// # Examples
///
/// ```rust
/// use functional_sum::WrongUnwrapError;
///
/// let error = WrongUnwrapError::new("i32", "None");
/// assert_eq!(
///     format!("{}", error),
///     "wrong unwrap: expected a value of type `i32`, found `None`"
/// );
///
/// let error = error.with_message("the id must be present");
/// assert_eq!(format!("{}", error), "the id must be present");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongUnwrapError {
    /// The name of the type the caller asked for.
    pub expected: &'static str,
    /// A description of the state actually found.
    pub found: &'static str,
    /// An optional message supplied by the caller.
    pub message: Option<Cow<'static, str>>,
}

impl WrongUnwrapError {
    /// Creates an error without a caller-supplied message.
    #[inline]
    pub const fn new(expected: &'static str, found: &'static str) -> Self {
        Self {
            expected,
            found,
            message: None,
        }
    }

    /// Replaces the generated description with `message`.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Raises this error as a panic.
    ///
    /// The panic payload is the `WrongUnwrapError` itself, so
    /// `std::panic::catch_unwind` callers (and [`catch`](crate::catch)) can
    /// downcast it.
    ///
    /// # Panics
    ///
    /// Always.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        log::debug!("raising wrong unwrap: {self}");
        std::panic::panic_any(self)
    }
}

impl fmt::Display for WrongUnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => formatter.write_str(message),
            None => write!(
                formatter,
                "wrong unwrap: expected a value of type `{}`, found `{}`",
                self.expected, self.found
            ),
        }
    }
}

impl std::error::Error for WrongUnwrapError {}

/// A panic captured by [`catch`](crate::catch).
///
/// Holds the original panic payload. String payloads (from `panic!`) and
/// [`WrongUnwrapError`] payloads are rendered by [`CaughtPanic::message`];
/// anything else can be inspected through [`CaughtPanic::downcast_ref`].
pub struct CaughtPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    /// Wraps a payload returned by `std::panic::catch_unwind`.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns a human readable description of the panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_sum::catch;
    ///
    /// let caught = catch(|| -> i32 { panic!("boom") }).unwrap_error();
    /// assert_eq!(caught.message(), "boom");
    /// ```
    pub fn message(&self) -> Cow<'_, str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Cow::Borrowed(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Cow::Borrowed(message.as_str())
        } else if let Some(error) = self.payload.downcast_ref::<WrongUnwrapError>() {
            Cow::Owned(error.to_string())
        } else {
            Cow::Borrowed("panic with a non-string payload")
        }
    }

    /// Returns `true` if the panic was a wrong unwrap.
    #[inline]
    pub fn is_wrong_unwrap(&self) -> bool {
        self.payload.is::<WrongUnwrapError>()
    }

    /// Returns the payload as `T` if it has that type.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Consumes the wrapper and returns the raw payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the original payload.
    ///
    /// # Panics
    ///
    /// Always.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "caught panic: {}", self.message())
    }
}

impl std::error::Error for CaughtPanic {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_wrong_unwrap_error_display() {
        let error = WrongUnwrapError::new("alloc::string::String", "Error");
        assert_eq!(
            format!("{error}"),
            "wrong unwrap: expected a value of type `alloc::string::String`, found `Error`"
        );
    }

    #[rstest]
    fn test_wrong_unwrap_error_custom_message() {
        let error = WrongUnwrapError::new("i32", "None").with_message(String::from("no port"));
        assert_eq!(format!("{error}"), "no port");
        assert_eq!(error.expected, "i32");
    }

    #[rstest]
    fn test_wrong_unwrap_error_equality() {
        let first = WrongUnwrapError::new("i32", "None");
        let second = WrongUnwrapError::new("i32", "None");
        let third = WrongUnwrapError::new("u8", "None");
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[rstest]
    fn test_wrong_unwrap_error_source() {
        use std::error::Error;

        let error = WrongUnwrapError::new("i32", "None");
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_raise_panics_with_typed_payload() {
        let payload = std::panic::catch_unwind(|| {
            WrongUnwrapError::new("i32", "None").raise();
        })
        .unwrap_err();

        let error = payload.downcast_ref::<WrongUnwrapError>().unwrap();
        assert_eq!(error.found, "None");
    }

    #[rstest]
    #[case(Box::new("static str") as Box<dyn Any + Send>, "static str")]
    #[case(Box::new(String::from("owned")) as Box<dyn Any + Send>, "owned")]
    #[case(Box::new(42_u8) as Box<dyn Any + Send>, "panic with a non-string payload")]
    fn test_caught_panic_message(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        let caught = CaughtPanic::new(payload);
        assert_eq!(caught.message(), expected);
    }

    #[rstest]
    fn test_caught_panic_recognizes_wrong_unwrap() {
        let caught = CaughtPanic::new(Box::new(WrongUnwrapError::new("i32", "None")));
        assert!(caught.is_wrong_unwrap());
        assert!(caught.message().contains("`i32`"));
        assert_eq!(caught.downcast_ref::<WrongUnwrapError>().unwrap().found, "None");
    }

    #[rstest]
    fn test_caught_panic_display() {
        let caught = CaughtPanic::new(Box::new("boom"));
        assert_eq!(format!("{caught}"), "caught panic: boom");
        assert!(format!("{caught:?}").contains("CaughtPanic"));
    }
}
