//! Ensures the public surface is reachable via crate-root re-exports.

use std::fmt;

use outcome::{Code, Fault, NoValueError, Outcome, OutcomeMut, Sentinel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Failed,
}

#[derive(Debug, PartialEq, Eq, Sentinel)]
struct Disconnected;

/// Renders any fault through the trait object, proving object safety.
struct Rendered<'a>(&'a dyn Fault);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

#[test]
fn reexports_are_public() {
    let owned: Outcome<u8, Code<Probe>> = Outcome::ok(1);
    assert!(owned.is_ok());

    let mut slot = 2_u8;
    let view: OutcomeMut<'_, u8, Code<Probe>> = OutcomeMut::ok(&mut slot);
    assert!(view.is_ok());

    assert_eq!(Disconnected::MESSAGE, "disconnected");
    assert!(!NoValueError.to_string().is_empty());
    assert_eq!(Rendered(&Code(Probe::Failed)).to_string(), "Failed");
}
