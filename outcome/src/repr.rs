//! Tagged-union storage shared by both outcome variants.
//!
//! The enum discriminant plays the role of a `faulted` flag: exactly one
//! case is ever materialised, so the inactive side needs neither storage
//! nor a default value.

/// Two-case storage for an outcome: a success payload or a fault payload.
///
/// The view variant instantiates this with `&mut V`, so the union itself
/// stays agnostic of ownership shape. Derived equality gives the wrappers
/// their value-semantics comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch<V, E> {
    Value(V),
    Fault(E),
}
