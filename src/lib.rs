//! This crate lets you wrap multiple errors into one error.
//! Use it for loops that don't bail on the first error, but want to
//! return all of the encountered errors to the caller.
//!
//! The crate does these things:
//!     1. Collects errors in order into an [`AggregateError`]
//!     2. Describes the collected errors with one line, based on
//!        how many there are
//!     3. Turns an empty aggregate into "no error" ([`AggregateError::resolve`])
//!
//! ```
//! use anyhow::{anyhow, Result};
//! use multierror::AggregateError;
//!
//! fn remove_all(files: &[&str]) -> Result<()> {
//!     let mut errors = AggregateError::new();
//!     for file in files {
//!         if file.starts_with('/') {
//!             errors.push(anyhow!("refusing to remove absolute path {file}"));
//!         }
//!     }
//!     errors.into_result()?;
//!     Ok(())
//! }
//!
//! assert!(remove_all(&["a", "b"]).is_ok());
//! let err = remove_all(&["/a", "b", "/c", "/d"]).unwrap_err();
//! assert_eq!(err.to_string(), "refusing to remove absolute path /a (and 2 other errors)");
//! ```

mod aggregate;
mod message;

pub use aggregate::AggregateError;
pub use message::{
    DEFAULT_NO_ERRORS_MESSAGE,
    no_errors_message,
    reset_no_errors_message,
    set_no_errors_message,
};
