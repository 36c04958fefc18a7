//! Error type for extracting a value from an absent box.

use std::fmt;

/// Error returned by [`OptionalBox::require`](crate::OptionalBox::require)
/// and [`OptionalBox::require_with`](crate::OptionalBox::require_with) when
/// the box holds no value.
///
/// # Examples
///
/// ```rust
/// use optional_box::{AbsentError, OptionalBox};
///
/// let err = OptionalBox::<i32>::absent().require().unwrap_err();
/// assert_eq!(err, AbsentError::new());
/// assert_eq!(err.to_string(), "value was absent");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsentError {
    message: Option<String>,
}

impl AbsentError {
    /// Create an error without a message.
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Create an error naming what was missing.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The attached message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for AbsentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "value was absent: {}", msg),
            None => f.write_str("value was absent"),
        }
    }
}

impl std::error::Error for AbsentError {}
