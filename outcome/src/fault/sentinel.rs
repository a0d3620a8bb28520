//! Self-describing-error strategy: singleton faults with fixed messages.

use crate::Fault;

/// A self-describing fault: a singleton type whose failure message is fixed
/// at the type level.
///
/// Implementors expose the canonical instance through
/// [`instance`](Sentinel::instance) and the human-readable description
/// through [`MESSAGE`](Sentinel::MESSAGE); rendering a faulted outcome of
/// this type writes `MESSAGE`. Because the instance is reconstructible from
/// the type alone, faulted outcomes are constructed without an argument via
/// [`Outcome::fault`](crate::Outcome::fault) and
/// [`OutcomeMut::fault`](crate::OutcomeMut::fault). Those constructors
/// deliberately accept no explicit instance; this narrows the flexibility
/// the enumerated strategy keeps, in exchange for parameterless error
/// signalling.
///
/// Most implementations come from the derive macro of the same name:
///
/// ```rust
/// use outcome::{Outcome, Sentinel};
///
/// #[derive(Debug, PartialEq, Eq, Sentinel)]
/// #[sentinel(message = "registry connection closed")]
/// struct ConnectionClosed;
///
/// let lost: Outcome<String, ConnectionClosed> = Outcome::fault();
/// assert_eq!(lost.to_string(), "registry connection closed");
/// assert_eq!(ConnectionClosed::MESSAGE, "registry connection closed");
/// ```
pub trait Sentinel: Fault + Sized {
    /// Fixed human-readable description of the failure.
    const MESSAGE: &'static str;

    /// Returns the canonical instance of this failure.
    fn instance() -> Self;
}
