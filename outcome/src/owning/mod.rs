//! Owning outcome variant: stores its payload and moves by value.

use std::fmt;

use crate::repr::Branch;
use crate::{Fault, NoValueError, Sentinel};

/// A value that is either a successful payload or a typed fault.
///
/// `Outcome` owns its payload: success values move in through
/// [`Outcome::ok`] and move back out through [`Outcome::match_with`],
/// [`Outcome::unwrap`] or [`Outcome::into_result`]. Which branch is active
/// is fixed at construction and never changes, and no accessor exposes the
/// inactive side.
///
/// Two outcomes compare equal when both hold equal values or both hold
/// equal faults.
///
/// # Examples
///
/// ```rust
/// use outcome::{Code, Outcome};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum DivideError {
///     ByZero,
/// }
///
/// fn divide(dividend: u32, divisor: u32) -> Outcome<u32, Code<DivideError>> {
///     if divisor == 0 {
///         Outcome::err(Code(DivideError::ByZero))
///     } else {
///         Outcome::ok(dividend / divisor)
///     }
/// }
///
/// let quotient = divide(10, 2).match_with(|q| q, |_| 0);
/// assert_eq!(quotient, 5);
/// assert_eq!(divide(1, 0).to_string(), "ByZero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<V, E> {
    branch: Branch<V, E>,
}

impl<V, E: Fault> Outcome<V, E> {
    /// Constructs the success state from a committed result.
    ///
    /// No validation is performed; the caller guarantees `value` is the
    /// finished payload, not a partial one.
    #[must_use]
    pub const fn ok(value: V) -> Self {
        Self {
            branch: Branch::Value(value),
        }
    }

    /// Constructs the faulted state carrying `error`.
    ///
    /// Construction never raises anything; the fault sits inert until the
    /// caller dispatches on it.
    #[must_use]
    pub const fn err(error: E) -> Self {
        Self {
            branch: Branch::Fault(error),
        }
    }

    /// Whether the success branch is active.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.branch, Branch::Value(_))
    }

    /// Whether the fault branch is active.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self.branch, Branch::Fault(_))
    }

    /// Dispatches to exactly one of the two callbacks and returns its
    /// result.
    ///
    /// The selected callback runs synchronously on the current thread
    /// before this call returns; the other is dropped unused. Both branches
    /// must produce the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Code, Outcome};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// enum FetchError {
    ///     Offline,
    /// }
    ///
    /// let fetched: Outcome<String, Code<FetchError>> = Outcome::ok("body".into());
    /// let summary = fetched.match_with(
    ///     |body| format!("{} bytes", body.len()),
    ///     |error| format!("failed: {error}"),
    /// );
    /// assert_eq!(summary, "4 bytes");
    /// ```
    #[must_use]
    pub fn match_with<T>(
        self,
        on_value: impl FnOnce(V) -> T,
        on_fault: impl FnOnce(E) -> T,
    ) -> T {
        match self.branch {
            Branch::Value(value) => on_value(value),
            Branch::Fault(error) => on_fault(error),
        }
    }

    /// Dispatches to exactly one of the two callbacks for their side
    /// effects.
    ///
    /// Borrows rather than consumes, so the outcome survives inspection.
    pub fn visit(&self, on_value: impl FnOnce(&V), on_fault: impl FnOnce(&E)) {
        match &self.branch {
            Branch::Value(value) => on_value(value),
            Branch::Fault(error) => on_fault(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with the [`NoValueError`] message when the outcome is
    /// faulted. Callers who cannot rule the fault branch out should reach
    /// for [`Outcome::match_with`] or [`Outcome::into_result`] instead.
    #[must_use]
    #[track_caller]
    pub fn unwrap(self) -> V {
        match self.branch {
            Branch::Value(value) => value,
            Branch::Fault(_) => panic!("{}", NoValueError),
        }
    }

    /// Returns the success value, panicking with `message` when faulted.
    ///
    /// # Panics
    ///
    /// Panics with the caller-supplied `message` when the outcome is
    /// faulted.
    #[must_use]
    #[track_caller]
    pub fn expect(self, message: &str) -> V {
        match self.branch {
            Branch::Value(value) => value,
            Branch::Fault(_) => panic!("{message}"),
        }
    }

    /// Bridges into the standard library's `Result`.
    ///
    /// The panicking extractors are for callers who have already ruled the
    /// fault branch out; everyone else can convert and use `?` and the
    /// standard combinators.
    #[must_use]
    pub fn into_result(self) -> Result<V, E> {
        match self.branch {
            Branch::Value(value) => Ok(value),
            Branch::Fault(error) => Err(error),
        }
    }
}

impl<V, E: Sentinel> Outcome<V, E> {
    /// Constructs the faulted state from the fault type's canonical
    /// instance.
    ///
    /// The self-describing strategy needs no explicit payload: the
    /// singleton is reconstructible from the type alone, so error
    /// signalling reduces to naming the faulted variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Outcome, Sentinel};
    ///
    /// #[derive(Debug, PartialEq, Eq, Sentinel)]
    /// #[sentinel(message = "queue closed")]
    /// struct QueueClosed;
    ///
    /// let next: Outcome<String, QueueClosed> = Outcome::fault();
    /// assert_eq!(next.to_string(), "queue closed");
    /// ```
    #[must_use]
    pub fn fault() -> Self {
        Self::err(E::instance())
    }
}

impl<V: fmt::Display, E: Fault> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Branch::Value(value) => fmt::Display::fmt(value, f),
            Branch::Fault(error) => error.render(f),
        }
    }
}

impl<V, E: Fault> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        result.map_or_else(Self::err, Self::ok)
    }
}
