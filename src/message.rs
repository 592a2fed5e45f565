//! This module holds the message an empty [`AggregateError`] describes
//! itself with. The message is shared by the whole process, so a program
//! can pick its own wording once at startup instead of special-casing
//! empty aggregates everywhere they get printed.
//!
//! [`AggregateError`]: crate::AggregateError

use std::borrow::Cow;
use std::sync::{PoisonError, RwLock};

/// The message used when no other message has been set.
pub const DEFAULT_NO_ERRORS_MESSAGE: &str = "(no errors)";

static NO_ERRORS_MESSAGE: RwLock<Cow<'static, str>> =
    RwLock::new(Cow::Borrowed(DEFAULT_NO_ERRORS_MESSAGE));

/// Returns the message that empty aggregates are currently described with.
pub fn no_errors_message() -> String {
    // Nothing can panic while the lock is held, but a poisoned lock
    // still holds a valid message, so just use it.
    let message = NO_ERRORS_MESSAGE.read()
        .unwrap_or_else(PoisonError::into_inner);
    message.to_string()
}

/// Replaces the message that empty aggregates are described with.
/// Takes effect for every description made after this returns,
/// in every thread.
///
/// ```
/// use multierror::{AggregateError, set_no_errors_message, reset_no_errors_message};
///
/// set_no_errors_message("all good");
/// assert_eq!(AggregateError::<anyhow::Error>::new().to_string(), "all good");
/// reset_no_errors_message();
/// ```
pub fn set_no_errors_message<T: Into<Cow<'static, str>>>(message: T) {
    let mut current = NO_ERRORS_MESSAGE.write()
        .unwrap_or_else(PoisonError::into_inner);
    *current = message.into();
}

/// Sets the message back to [`DEFAULT_NO_ERRORS_MESSAGE`].
pub fn reset_no_errors_message() {
    set_no_errors_message(DEFAULT_NO_ERRORS_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Overriding the message is tested in tests/no_errors_message.rs,
    // which runs as its own process. Doing it here would race with the
    // unit tests that expect the default message.
    #[test]
    fn default_message() {
        assert_eq!(DEFAULT_NO_ERRORS_MESSAGE, "(no errors)");
        assert_eq!(no_errors_message(), DEFAULT_NO_ERRORS_MESSAGE);
    }
}
