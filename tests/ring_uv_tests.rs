// Host-side tests for the ring's polar texture mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod ring_uv {
        include!("../src/core/ring_uv.rs");
    }
}

use crate::core::geometry::flat_ring;
use crate::core::ring_uv::*;

const R0: f32 = 1.4;
const R1: f32 = 2.4;

#[test]
fn edges_map_to_exact_radial_endpoints() {
    assert_eq!(polar_uv(R0, 0.0, R0, R1)[0], 0.0);
    assert_eq!(polar_uv(R1, 0.0, R0, R1)[0], 1.0);
    assert_eq!(polar_uv(0.0, R0, R0, R1)[0], 0.0);
    assert_eq!(polar_uv(0.0, -R1, R0, R1)[0], 1.0);
}

#[test]
fn radial_coordinate_is_linear_and_monotonic() {
    let mut prev = -1.0;
    for i in 0..=100 {
        let r = R0 + (R1 - R0) * i as f32 / 100.0;
        let [u, _] = polar_uv(r, 0.0, R0, R1);
        let expected = (r - R0) / (R1 - R0);
        assert!((u - expected).abs() < 1e-6, "r={r}: {u} vs {expected}");
        assert!((0.0..=1.0).contains(&u));
        assert!(u > prev, "radius_t not increasing at r={r}");
        prev = u;
    }
}

#[test]
fn angle_starts_at_negative_x_and_sweeps_a_full_turn() {
    // atan2 = -pi just below the negative x axis
    let [_, v] = polar_uv(-2.0, -1e-6, R0, R1);
    assert!(v < 1e-4);
    let [_, v] = polar_uv(0.0, -2.0, R0, R1);
    assert!((v - 0.25).abs() < 1e-6);
    let [_, v] = polar_uv(2.0, 0.0, R0, R1);
    assert!((v - 0.5).abs() < 1e-6);
    let [_, v] = polar_uv(0.0, 2.0, R0, R1);
    assert!((v - 0.75).abs() < 1e-6);
    let [_, v] = polar_uv(-2.0, 0.0, R0, R1);
    assert!((v - 1.0).abs() < 1e-6);
}

#[test]
fn points_outside_the_annulus_are_not_clamped() {
    let [u, _] = polar_uv(1.0, 0.0, R0, R1);
    assert!(u < 0.0);
    let [u, _] = polar_uv(3.0, 0.0, R0, R1);
    assert!(u > 1.0);
}

#[test]
fn applied_to_ring_mesh_every_vertex_gets_polar_uv() {
    let mut ring = flat_ring(R0, R1, 64, 4);
    apply_polar_uvs(&mut ring.vertices, R0, R1);
    for v in &ring.vertices {
        let [x, y, _] = v.position;
        let r = (x * x + y * y).sqrt();
        let [u, a] = v.uv;
        assert!((u - (r - R0) / (R1 - R0)).abs() < 1e-5);
        assert!(u > -1e-5 && u < 1.0 + 1e-5, "radius_t out of range: {u}");
        assert!((0.0..=1.0).contains(&a), "angle_t out of range: {a}");
    }
}
