use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::ops::{Deref, DerefMut};
use std::{slice, vec};

use crate::message;

/// An ordered list of errors that is itself an error.
///
/// Use this in loops that should not stop at the first failure:
/// push every error that comes up, and hand the aggregate back
/// to the caller at the end. The errors keep the order they were
/// pushed in, and the same error may be pushed more than once.
///
/// The aggregate describes itself with the message of its first
/// error, followed by how many other errors there are. An empty
/// aggregate uses the process-wide message from
/// [`no_errors_message`](crate::no_errors_message).
///
/// There is no locking inside. Pushing from several threads at once
/// needs a lock around the aggregate, e.g. a `Mutex<AggregateError>`.
///
/// ```
/// use anyhow::anyhow;
/// use multierror::AggregateError;
///
/// let mut errors = AggregateError::new();
/// errors.push(anyhow!("add errors to an AggregateError by pushing"));
/// assert_eq!(errors.to_string(), "add errors to an AggregateError by pushing");
///
/// errors.push(anyhow!("the message notes how many errors there are"));
/// assert_eq!(
///     errors.to_string(),
///     "add errors to an AggregateError by pushing (and 1 other error)",
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateError<E = anyhow::Error> {
    errors: Vec<E>,
}

impl<E> AggregateError<E> {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        AggregateError {
            errors: Vec::new(),
        }
    }
    pub fn with_capacity(capacity: usize) -> Self {
        AggregateError {
            errors: Vec::with_capacity(capacity),
        }
    }

    /// Appends an error to the end of the list.
    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[E] {
        self.errors.as_slice()
    }
    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }

    /// Returns None if there are no errors in the aggregate,
    /// and the aggregate itself otherwise.
    /// This saves the caller from checking the length before
    /// returning the aggregate as an error.
    ///
    /// ```
    /// use anyhow::anyhow;
    /// use multierror::AggregateError;
    ///
    /// fn check_all(items: &[i32]) -> Option<AggregateError> {
    ///     let mut errors = AggregateError::new();
    ///     for item in items {
    ///         if *item < 0 {
    ///             errors.push(anyhow!("negative item: {item}"));
    ///         }
    ///     }
    ///     errors.resolve()
    /// }
    ///
    /// assert!(check_all(&[1, 2, 3]).is_none());
    /// assert_eq!(check_all(&[1, -2, -3]).unwrap().len(), 2);
    /// ```
    pub fn resolve(self) -> Option<Self> {
        match self.errors.len() {
            0 => None,
            _ => Some(self),
        }
    }
    /// Same as [`resolve`](Self::resolve), but borrows the aggregate.
    pub fn as_error(&self) -> Option<&Self> {
        match self.errors.len() {
            0 => None,
            _ => Some(self),
        }
    }

    /// Ok if there are no errors, otherwise Err with the aggregate.
    /// Handy at the end of a function that returns a Result:
    ///
    /// ```
    /// use anyhow::anyhow;
    /// use multierror::AggregateError;
    ///
    /// fn run(steps: &[&str]) -> anyhow::Result<()> {
    ///     let mut errors = AggregateError::new();
    ///     for step in steps {
    ///         if step.is_empty() {
    ///             errors.push(anyhow!("empty step"));
    ///         }
    ///     }
    ///     errors.into_result()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(run(&["a", "b"]).is_ok());
    /// assert_eq!(run(&["a", "", ""]).unwrap_err().to_string(), "empty step (and 1 other error)");
    /// ```
    pub fn into_result(self) -> Result<(), Self> {
        self.into_result_with(())
    }
    /// Same as [`into_result`](Self::into_result), except the provided
    /// value is returned on success.
    pub fn into_result_with<T>(self, value: T) -> Result<T, Self> {
        match self.resolve() {
            None => Ok(value),
            Some(errors) => Err(errors),
        }
    }
}

impl<E> Default for AggregateError<E> {
    fn default() -> Self {
        AggregateError::new()
    }
}

// Normal form:
//     0 errors -> the no errors message.
//     1 error -> the message of that error, untouched.
//     2 errors -> "<first> (and 1 other error)".
//     n errors -> "<first> (and <n - 1> other errors)".
// Alternate form ({:#}) adds a line for every error after the normal
// form, when there is more than one error.
impl<E: Display> Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = match self.errors.first() {
            None => {
                return f.write_str(&message::no_errors_message());
            },
            Some(x) => x,
        };
        write!(f, "{first}")?;

        match self.errors.len() {
            1 => return Ok(()),
            2 => write!(f, " (and 1 other error)")?,
            n => write!(f, " (and {} other errors)", n - 1)?,
        }

        if f.alternate() {
            for error in &self.errors {
                write!(f, "\n    - {error}")?;
            }
        }
        Ok(())
    }
}

// Display + Debug instead of Error, so that anyhow::Error (which does not
// implement Error itself) can be aggregated.
impl<E: Display + Debug> Error for AggregateError<E> {
}

impl<E> Deref for AggregateError<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.errors
    }
}
impl<E> DerefMut for AggregateError<E> {
    fn deref_mut(&mut self) -> &mut [E] {
        &mut self.errors
    }
}

impl<E> From<Vec<E>> for AggregateError<E> {
    fn from(errors: Vec<E>) -> Self {
        AggregateError {
            errors,
        }
    }
}
impl<E, const N: usize> From<[E; N]> for AggregateError<E> {
    fn from(errors: [E; N]) -> Self {
        AggregateError {
            errors: Vec::from(errors),
        }
    }
}
impl<E> From<AggregateError<E>> for Vec<E> {
    fn from(aggregate: AggregateError<E>) -> Self {
        aggregate.errors
    }
}

impl<E> FromIterator<E> for AggregateError<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        AggregateError {
            errors: iter.into_iter().collect(),
        }
    }
}
impl<E> Extend<E> for AggregateError<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for error in iter {
            self.push(error);
        }
    }
}

impl<E> IntoIterator for AggregateError<E> {
    type Item = E;
    type IntoIter = vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
impl<'a, E> IntoIterator for &'a AggregateError<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
impl<'a, E> IntoIterator for &'a mut AggregateError<E> {
    type Item = &'a mut E;
    type IntoIter = slice::IterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter_mut()
    }
}
