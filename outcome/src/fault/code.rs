//! Enumerated-error strategy: an adapter giving plain enumerations fault
//! semantics.

use std::fmt;

use crate::Fault;

/// Adapter carrying one code from a closed set of named codes.
///
/// The wrapped enumeration needs no `Display` of its own: rendering yields
/// the chosen code's symbolic name, as produced by its `Debug` form. No
/// message is attached to the failure. `Code` also implements
/// `std::error::Error`, so results bridged out of an outcome compose with
/// `?`-based propagation.
///
/// # Examples
///
/// ```rust
/// use outcome::{Code, Outcome};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum LookupError {
///     Missing,
///     Ambiguous,
/// }
///
/// let miss: Outcome<u32, Code<LookupError>> = Outcome::err(LookupError::Missing.into());
/// assert_eq!(miss.to_string(), "Missing");
/// assert_eq!(Code(LookupError::Ambiguous).to_string(), "Ambiguous");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code<E>(pub E);

impl<E> Code<E> {
    /// Returns the wrapped code.
    #[must_use]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E: fmt::Debug> Fault for Code<E> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<E: fmt::Debug> fmt::Display for Code<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl<E> From<E> for Code<E> {
    fn from(code: E) -> Self {
        Self(code)
    }
}

impl<E: fmt::Debug> std::error::Error for Code<E> {}
