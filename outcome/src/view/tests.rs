//! Unit tests for the view outcome variant.

use rstest::rstest;

use crate::{Code, OutcomeMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GaugeError {
    Offline,
    Saturated,
}

#[rstest]
fn unwrap_hands_back_the_original_borrow() {
    let mut level = 10_u32;
    let view: OutcomeMut<'_, u32, Code<GaugeError>> = OutcomeMut::ok(&mut level);
    *view.unwrap() += 5;
    assert_eq!(level, 15);
}

#[rstest]
fn expect_hands_back_the_original_borrow() {
    let mut level = 2_u32;
    let view: OutcomeMut<'_, u32, Code<GaugeError>> = OutcomeMut::ok(&mut level);
    *view.expect("gauge online") = 9;
    assert_eq!(level, 9);
}

#[rstest]
fn match_with_mutations_reach_the_owner() {
    let mut level = 1_u32;
    let doubled = OutcomeMut::<u32, Code<GaugeError>>::ok(&mut level).match_with(
        |value| {
            *value *= 2;
            true
        },
        |_| false,
    );
    assert!(doubled);
    assert_eq!(level, 2);
}

#[rstest]
fn match_with_surfaces_the_fault() {
    let code = OutcomeMut::<u32, Code<GaugeError>>::err(Code(GaugeError::Saturated))
        .match_with(|_| None, |error| Some(error.into_inner()));
    assert_eq!(code, Some(GaugeError::Saturated));
}

#[rstest]
fn visit_observes_without_consuming() {
    let mut level = 4_u32;
    let view = OutcomeMut::<u32, Code<GaugeError>>::ok(&mut level);
    let mut seen = None;
    view.visit(|value| seen = Some(*value), |_| {});
    assert_eq!(seen, Some(4));
    assert!(view.is_ok());
}

#[rstest]
fn faulted_views_render_the_code_name() {
    let view = OutcomeMut::<u32, Code<GaugeError>>::err(Code(GaugeError::Offline));
    assert!(view.is_err());
    assert_eq!(view.to_string(), "Offline");
}

#[rstest]
fn equality_compares_through_the_borrow() {
    let mut left = 3_u32;
    let mut right = 3_u32;
    assert_eq!(
        OutcomeMut::<u32, Code<GaugeError>>::ok(&mut left),
        OutcomeMut::ok(&mut right),
    );
}

#[rstest]
fn into_result_keeps_the_borrow_alive() {
    let mut level = 1_u32;
    let view = OutcomeMut::<u32, Code<GaugeError>>::ok(&mut level);
    let result = view.into_result();
    assert!(result.is_ok_and(|value| {
        *value = 7;
        true
    }));
    assert_eq!(level, 7);
}
