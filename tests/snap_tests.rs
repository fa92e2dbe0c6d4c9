// Host-side tests for wheel-driven section snapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod snap {
    include!("../src/core/snap.rs");
}

use snap::*;

const SECTIONS: [f64; 3] = [0.0, 800.0, 1600.0];
const VIEWPORT: f64 = 1000.0;

fn controller() -> SnapController {
    SnapController::for_viewport(VIEWPORT, 0.1)
}

#[test]
fn threshold_is_a_fraction_of_the_viewport() {
    assert_eq!(controller().threshold_px(), 100.0);
    assert_eq!(controller().state(), SnapState::Idle);
}

#[test]
fn wheel_down_near_top_snaps_to_next_section() {
    let mut c = controller();
    // midpoint 550, first top below it is 800, 750px away
    assert_eq!(
        c.on_wheel(40.0, 50.0, VIEWPORT, &SECTIONS),
        WheelDecision::SnapTo(800.0)
    );
    assert_eq!(c.state(), SnapState::Snapping);
}

#[test]
fn wheel_down_past_a_section_midpoint_targets_the_following_one() {
    let mut c = controller();
    // midpoint 1250 is past 800
    assert_eq!(
        c.on_wheel(40.0, 750.0, VIEWPORT, &SECTIONS),
        WheelDecision::SnapTo(1600.0)
    );
}

#[test]
fn events_during_a_snap_pass_through_until_released() {
    let mut c = controller();
    assert!(matches!(c.on_wheel(40.0, 50.0, VIEWPORT, &SECTIONS), WheelDecision::SnapTo(_)));
    assert_eq!(c.on_wheel(40.0, 60.0, VIEWPORT, &SECTIONS), WheelDecision::PassThrough);
    assert_eq!(c.state(), SnapState::Snapping);

    c.release();
    assert_eq!(c.state(), SnapState::Idle);
    assert_eq!(
        c.on_wheel(40.0, 60.0, VIEWPORT, &SECTIONS),
        WheelDecision::SnapTo(800.0)
    );
}

#[test]
fn upward_and_zero_deltas_never_snap() {
    let mut c = controller();
    assert_eq!(c.on_wheel(-40.0, 50.0, VIEWPORT, &SECTIONS), WheelDecision::PassThrough);
    assert_eq!(c.on_wheel(0.0, 50.0, VIEWPORT, &SECTIONS), WheelDecision::PassThrough);
    assert_eq!(c.state(), SnapState::Idle);
}

#[test]
fn target_within_threshold_passes_through() {
    let mut c = controller();
    // short viewport: midpoint 1570 picks 1600, only 80px below the scroll position
    assert_eq!(c.on_wheel(40.0, 1520.0, 100.0, &SECTIONS), WheelDecision::PassThrough);
    assert_eq!(c.state(), SnapState::Idle);
}

#[test]
fn no_section_below_passes_through() {
    let mut c = controller();
    assert_eq!(c.on_wheel(40.0, 1500.0, VIEWPORT, &SECTIONS), WheelDecision::PassThrough);
    assert_eq!(c.on_wheel(40.0, 0.0, VIEWPORT, &[]), WheelDecision::PassThrough);
}

#[test]
fn first_match_in_document_order_wins() {
    assert_eq!(next_section_below(&[0.0, 2000.0, 900.0], 500.0), Some(2000.0));
    assert_eq!(next_section_below(&SECTIONS, 800.0), Some(1600.0));
    assert_eq!(next_section_below(&SECTIONS, 1600.0), None);
}
