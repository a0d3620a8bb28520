//! View outcome variant: borrows its success value from the caller.

use std::fmt;

use crate::repr::Branch;
use crate::{Fault, NoValueError, Sentinel};

/// An outcome holding a mutable borrow of a caller-owned value, or a typed
/// fault.
///
/// `OutcomeMut` stores the borrow it was given, not a copy. The success
/// callback of [`OutcomeMut::match_with`] and the return of
/// [`OutcomeMut::unwrap`] hand that same borrow back, so mutations land in
/// the owner's storage and are visible once the call returns. The
/// referenced value is never owned or dropped by the outcome.
///
/// # Examples
///
/// ```rust
/// use outcome::{Code, OutcomeMut};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum TuneError {
///     Locked,
/// }
///
/// let mut gain = 3_u32;
/// let view: OutcomeMut<'_, u32, Code<TuneError>> = OutcomeMut::ok(&mut gain);
/// *view.unwrap() += 2;
/// assert_eq!(gain, 5);
///
/// let locked = OutcomeMut::<u32, Code<TuneError>>::err(Code(TuneError::Locked));
/// assert_eq!(locked.to_string(), "Locked");
/// ```
///
/// # Borrowing discipline
///
/// The `'v` lifetime ties the outcome to the referenced value: a view
/// outcome cannot be returned from the function that owns its referent,
/// stored beyond the referent's scope, or otherwise outlive it. The borrow
/// checker rejects the attempt:
///
/// ```rust,compile_fail
/// use outcome::{Code, OutcomeMut};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum TuneError {
///     Locked,
/// }
///
/// let escaped = {
///     let mut gain = 3_u32;
///     OutcomeMut::<u32, Code<TuneError>>::ok(&mut gain)
/// };
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct OutcomeMut<'v, V, E> {
    branch: Branch<&'v mut V, E>,
}

impl<'v, V, E: Fault> OutcomeMut<'v, V, E> {
    /// Borrows `value` as the success payload.
    ///
    /// The outcome stores the borrow itself; no copy of the referenced
    /// value is made.
    #[must_use]
    pub const fn ok(value: &'v mut V) -> Self {
        Self {
            branch: Branch::Value(value),
        }
    }

    /// Constructs the faulted state carrying `error`.
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
    /// The success callback receives the original borrow, so mutations it
    /// performs are visible to the owner after the call returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Code, OutcomeMut};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// enum TrimError {
    ///     Immutable,
    /// }
    ///
    /// let mut label = String::from("  calibrated  ");
    /// let trimmed = OutcomeMut::<String, Code<TrimError>>::ok(&mut label).match_with(
    ///     |text| {
    ///         *text = text.trim().to_owned();
    ///         true
    ///     },
    ///     |_| false,
    /// );
    /// assert!(trimmed);
    /// assert_eq!(label, "calibrated");
    /// ```
    #[must_use]
    pub fn match_with<T>(
        self,
        on_value: impl FnOnce(&'v mut V) -> T,
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
    /// Borrows rather than consumes, so the outcome survives inspection;
    /// the success callback sees the referenced value read-only.
    pub fn visit(&self, on_value: impl FnOnce(&V), on_fault: impl FnOnce(&E)) {
        match &self.branch {
            Branch::Value(value) => on_value(&**value),
            Branch::Fault(error) => on_fault(error),
        }
    }

    /// Returns the borrowed success value.
    ///
    /// Mutations through the returned borrow land in the owner's storage.
    ///
    /// # Panics
    ///
    /// Panics with the [`NoValueError`] message when the outcome is
    /// faulted. Callers who cannot rule the fault branch out should reach
    /// for [`OutcomeMut::match_with`] or [`OutcomeMut::into_result`]
    /// instead.
    #[must_use]
    #[track_caller]
    pub fn unwrap(self) -> &'v mut V {
        match self.branch {
            Branch::Value(value) => value,
            Branch::Fault(_) => panic!("{}", NoValueError),
        }
    }

    /// Returns the borrowed success value, panicking with `message` when
    /// faulted.
    ///
    /// # Panics
    ///
    /// Panics with the caller-supplied `message` when the outcome is
    /// faulted.
    #[must_use]
    #[track_caller]
    pub fn expect(self, message: &str) -> &'v mut V {
        match self.branch {
            Branch::Value(value) => value,
            Branch::Fault(_) => panic!("{message}"),
        }
    }

    /// Bridges into the standard library's `Result`, keeping the borrow.
    #[must_use]
    pub fn into_result(self) -> Result<&'v mut V, E> {
        match self.branch {
            Branch::Value(value) => Ok(value),
            Branch::Fault(error) => Err(error),
        }
    }
}

impl<'v, V, E: Sentinel> OutcomeMut<'v, V, E> {
    /// Constructs the faulted state from the fault type's canonical
    /// instance.
    #[must_use]
    pub fn fault() -> Self {
        Self::err(E::instance())
    }
}

impl<V: fmt::Display, E: Fault> fmt::Display for OutcomeMut<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Branch::Value(value) => fmt::Display::fmt(&**value, f),
            Branch::Fault(error) => error.render(f),
        }
    }
}

impl<'v, V, E: Fault> From<Result<&'v mut V, E>> for OutcomeMut<'v, V, E> {
    fn from(result: Result<&'v mut V, E>) -> Self {
        result.map_or_else(Self::err, Self::ok)
    }
}

#[cfg(test)]
mod tests;
