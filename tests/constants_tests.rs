// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn exclusion_spheres_fit_inside_their_cubes() {
    // Rejection sampling has no retry limit, so most of the cube must be valid
    assert!(NEAR_EXCLUSION_RADIUS < NEAR_CUBE_WIDTH / 2.0);
    assert!(FAR_EXCLUSION_RADIUS < FAR_CUBE_WIDTH / 2.0);

    // Near field starts outside the ring, far field outside the near one
    assert!(NEAR_EXCLUSION_RADIUS > RING_OUTER_RADIUS);
    assert!(FAR_EXCLUSION_RADIUS > NEAR_EXCLUSION_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_palette_stays_in_unit_range() {
    for i in 0..3 {
        assert!(PARTICLE_COLOR_BASE[i] >= 0.0);
        assert!(PARTICLE_COLOR_BASE[i] + PARTICLE_COLOR_JITTER[i] <= 1.0 + f32::EPSILON);
    }
    assert!(NEAR_SIZE_BASE > 0.0 && FAR_SIZE_BASE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_and_planet_geometry_is_consistent() {
    assert!(RING_INNER_RADIUS > PLANET_RADIUS);
    assert!(RING_OUTER_RADIUS > RING_INNER_RADIUS);
    assert!(RING_THETA_SEGMENTS >= 3 && RING_PHI_SEGMENTS >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_keyframes_and_projection_agree() {
    // Both keyframes sit outside the planet, and the far field fits before the far plane
    for p in [CAMERA_START_POSITION, CAMERA_END_POSITION] {
        assert!(p.length() > PLANET_RADIUS);
    }
    assert!(FAR_CUBE_WIDTH / 2.0 < CAMERA_FAR);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn snap_tuning_is_sane() {
    assert!(SNAP_THRESHOLD_VIEWPORT_FRACTION > 0.0 && SNAP_THRESHOLD_VIEWPORT_FRACTION < 0.5);
    assert!(SNAP_COOLDOWN_MS > 0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}
