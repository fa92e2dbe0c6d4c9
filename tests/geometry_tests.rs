// Host-side tests for the procedural meshes and the camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/core/camera.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use camera::Camera;
use geometry::*;
use glam::{Vec3, Vec4Swizzles};

#[test]
fn sphere_has_expected_counts_and_skips_pole_triangles() {
    let m = uv_sphere(1.0, 64, 32);
    assert_eq!(m.vertices.len(), 65 * 33);
    assert_eq!(m.indices.len(), (64 * (2 * 32 - 2) * 3) as usize);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
}

#[test]
fn sphere_vertices_lie_on_the_radius_with_unit_normals() {
    let m = uv_sphere(2.5, 16, 8);
    for v in &m.vertices {
        let p = Vec3::from_array(v.position);
        let n = Vec3::from_array(v.normal);
        assert!((p.length() - 2.5).abs() < 1e-5);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(p.normalize().abs_diff_eq(n, 1e-5));
    }
    // north pole first, v = 0
    assert!((m.vertices[0].position[1] - 2.5).abs() < 1e-5);
    assert_eq!(m.vertices[0].uv[1], 0.0);
}

#[test]
fn ring_has_expected_counts_and_spans_the_annulus() {
    let m = flat_ring(1.4, 2.4, 128, 4);
    assert_eq!(m.vertices.len(), 129 * 5);
    assert_eq!(m.indices.len(), 128 * 4 * 6);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
    for v in &m.vertices {
        let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
        assert!(r > 1.4 - 1e-5 && r < 2.4 + 1e-5);
        assert_eq!(v.position[2], 0.0);
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn ring_triangles_face_positive_z() {
    let m = flat_ring(1.0, 2.0, 8, 1);
    for tri in m.indices.chunks(3) {
        let p = |i: u32| Vec3::from_array(m.vertices[i as usize].position);
        let n = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(n.z > 0.0, "triangle {tri:?} winds clockwise");
    }
}

#[test]
fn camera_projects_its_target_to_the_view_centre() {
    let mut cam = Camera::new(75.0, 1.0, 0.1, 100.0);
    cam.eye = Vec3::new(0.0, 0.6, 5.0);
    cam.target = Vec3::ZERO;
    let clip = cam.view_projection() * cam.target.extend(1.0);
    let ndc = clip.xyz() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn zero_sized_viewport_keeps_the_previous_aspect() {
    let mut cam = Camera::new(75.0, 1.0, 0.1, 100.0);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_viewport(0, 1080);
    cam.set_viewport(800, 0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
}
