//! Derive falling back to the type-name message.

use outcome::{Outcome, Sentinel};

#[derive(Debug, PartialEq, Eq, Sentinel)]
struct QuotaExceeded;

fn main() {
    let reserved: Outcome<u32, QuotaExceeded> = Outcome::fault();
    assert_eq!(reserved.to_string(), "quota exceeded");
    assert_eq!(QuotaExceeded::MESSAGE, "quota exceeded");
}
