//! Core crate for the `outcome` success-or-fault types.
//!
//! An outcome is a value that is either a successful payload or a typed
//! fault, used in place of panics for expected failure paths. Callers get
//! explicit, inspectable failure signalling with no hidden control-flow
//! jumps: a fault sits inert inside the outcome until the caller dispatches
//! on it. Two variants cover the two ownership shapes:
//!
//! - [`Outcome`] owns its payload and moves like any other value.
//! - [`OutcomeMut`] borrows an existing value mutably and hands the borrow
//!   back on success, so callers mutate in place.
//!
//! Fault payloads are declared through one of two strategies: a plain
//! enumeration wrapped in [`Code`], rendered by variant name, or a
//! self-describing singleton implementing [`Sentinel`](trait@Sentinel),
//! rendered by its fixed message. Both satisfy [`Fault`], the only contract
//! the outcome types depend on.
//!
//! ```rust
//! use outcome::{Code, Outcome};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum ParseError {
//!     BadDigit,
//! }
//!
//! fn parse_digit(raw: char) -> Outcome<u32, Code<ParseError>> {
//!     raw.to_digit(10)
//!         .map_or_else(|| Outcome::err(Code(ParseError::BadDigit)), Outcome::ok)
//! }
//!
//! let four = parse_digit('4');
//! assert_eq!(four.unwrap(), 4);
//! assert_eq!(parse_digit('x').to_string(), "BadDigit");
//! ```

pub use outcome_macros::Sentinel;

mod error;
mod fault;
mod owning;
mod repr;
mod view;

pub use error::NoValueError;
pub use fault::{Code, Sentinel};
pub use owning::Outcome;
pub use view::OutcomeMut;

use std::fmt;

/// Contract a fault payload must satisfy to ride in an outcome.
///
/// The outcome types depend only on this trait; the two canonical shapes
/// satisfying it are the enumerated-code adapter [`Code`] and the
/// self-describing [`Sentinel`](trait@Sentinel) singletons.
pub trait Fault {
    /// Renders the failure in human-readable form.
    ///
    /// Invoked by the outcome types' `Display` implementations when the
    /// fault branch is active.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying formatter.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}
