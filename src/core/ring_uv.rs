// Polar texture coordinates for the flat ring.
//
// The ring's alpha mask is authored as radial bands, so u must follow the
// distance from the centre and v the angle around it.

use crate::core::geometry::MeshVertex;
use std::f32::consts::{PI, TAU};

/// Polar coordinate of one planar point: `(radius_t, angle_t)`.
///
/// `radius_t` is 0 on the inner edge and 1 on the outer edge; `angle_t`
/// starts at the negative x axis and covers one full turn. Nothing is
/// clamped: points outside `inner..=outer` map outside `0..=1`.
#[inline]
pub fn polar_uv(x: f32, y: f32, inner: f32, outer: f32) -> [f32; 2] {
    let r = (x * x + y * y).sqrt();
    let radius_t = (r - inner) / (outer - inner);
    let angle_t = (y.atan2(x) + PI) / TAU;
    [radius_t, angle_t]
}

/// Rewrite every vertex uv of a ring built in the XY plane.
pub fn apply_polar_uvs(vertices: &mut [MeshVertex], inner: f32, outer: f32) {
    for v in vertices.iter_mut() {
        v.uv = polar_uv(v.position[0], v.position[1], inner, outer);
    }
}
