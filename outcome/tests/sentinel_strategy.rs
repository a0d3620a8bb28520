//! Behavioural coverage for self-describing sentinel outcomes.

use outcome::{Outcome, OutcomeMut, Sentinel};
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sentinel)]
#[sentinel(message = "ledger closed for posting")]
struct LedgerClosed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sentinel)]
struct StaleHandle;

#[rstest]
fn fault_requires_no_argument() {
    let posted: Outcome<u64, LedgerClosed> = Outcome::fault();
    assert!(posted.is_err());
}

#[rstest]
fn independently_constructed_faults_share_one_message() {
    let first: Outcome<u64, LedgerClosed> = Outcome::fault();
    let second: Outcome<u64, LedgerClosed> = Outcome::fault();
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.to_string(), LedgerClosed::MESSAGE);
}

#[rstest]
fn attribute_message_is_rendered_verbatim() {
    assert_eq!(LedgerClosed::MESSAGE, "ledger closed for posting");
}

#[rstest]
fn omitted_message_derives_from_the_type_name() {
    assert_eq!(StaleHandle::MESSAGE, "stale handle");
    let refreshed: Outcome<u64, StaleHandle> = Outcome::fault();
    assert_eq!(refreshed.to_string(), "stale handle");
}

#[rstest]
fn canonical_instance_compares_equal_to_itself() {
    assert_eq!(LedgerClosed::instance(), LedgerClosed);
}

#[rstest]
fn view_outcomes_share_the_strategy() {
    let view: OutcomeMut<'_, u64, LedgerClosed> = OutcomeMut::fault();
    assert!(view.is_err());
    assert_eq!(view.to_string(), "ledger closed for posting");
}

#[rstest]
fn sentinel_faults_still_travel_through_err() {
    let explicit: Outcome<u64, LedgerClosed> = Outcome::err(LedgerClosed::instance());
    let implied: Outcome<u64, LedgerClosed> = Outcome::fault();
    assert_eq!(explicit, implied);
}

#[rstest]
fn match_with_receives_the_singleton() {
    let fault: Outcome<u64, LedgerClosed> = Outcome::fault();
    let observed = fault.match_with(|_| None, Some);
    assert_eq!(observed, Some(LedgerClosed));
}
