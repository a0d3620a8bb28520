//! Signal raised when a value is taken from a faulted outcome.

use thiserror::Error;

/// Error raised when `unwrap` or `expect` is invoked on a faulted outcome.
///
/// This marks a programmer-contract violation: the caller extracted a value
/// without ruling the fault branch out first. The outcome types raise it as
/// a panic payload; it is never returned and never produced by constructing
/// a faulted outcome.
///
/// # Examples
///
/// ```rust
/// use outcome::NoValueError;
///
/// assert_eq!(
///     NoValueError.to_string(),
///     "attempted to access a value where the outcome holds an error",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempted to access a value where the outcome holds an error")]
pub struct NoValueError;
