#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_options_match_page() {
    let options = RevealOptions::default();
    assert_eq!(options.threshold, 0.15);
    assert_eq!(options.bottom_margin_px, 80);
    assert_eq!(options.root_margin(), "0px 0px -80px 0px");
}

#[test]
fn first_intersection_reveals() {
    let mut state = RevealState::default();
    assert!(state.observe(true));
    assert_eq!(state, RevealState::Revealed);
}

#[test]
fn non_intersecting_report_does_nothing() {
    let mut state = RevealState::default();
    assert!(!state.observe(false));
    assert_eq!(state, RevealState::Unrevealed);
}

#[test]
fn reveal_is_monotonic() {
    let mut state = RevealState::default();
    state.observe(true);
    assert!(!state.observe(false));
    assert_eq!(state, RevealState::Revealed);
    assert!(!state.observe(true));
    assert_eq!(state, RevealState::Revealed);
}

#[test]
fn revealed_style_is_opaque_and_in_place() {
    assert_eq!(REVEALED_STYLE, [("opacity", "1"), ("transform", "translateY(0)")]);
}
