//! Fault-declaration strategies for outcome error payloads.
//!
//! Two interchangeable shapes satisfy [`crate::Fault`]:
//!
//! - [`Code`] wraps a closed set of named codes and renders the chosen
//!   code's symbolic name.
//! - [`Sentinel`] types are zero-sized singletons carrying a fixed message;
//!   faulted outcomes of these types are constructed without an argument.

mod code;
mod sentinel;

pub use code::Code;
pub use sentinel::Sentinel;
