//! Derive with an explicit message attribute.

use outcome::{Outcome, Sentinel};

#[derive(Debug, PartialEq, Eq, Sentinel)]
#[sentinel(message = "replica lagging behind primary")]
struct ReplicaLagging;

fn main() {
    let sync: Outcome<u32, ReplicaLagging> = Outcome::fault();
    assert_eq!(sync.to_string(), "replica lagging behind primary");
    assert_eq!(ReplicaLagging::MESSAGE, "replica lagging behind primary");
}
