// Procedural meshes for the scene: a latitude/longitude sphere for the planet
// and a flat annulus for the ring. Both are plain CPU-side buffers that the
// renderer uploads once.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Build a UV sphere centred on the origin.
///
/// Rows run from the north pole (v = 0) to the south pole (v = 1), so the top
/// row of an equirectangular texture lands on the +Y pole. The degenerate
/// triangles at both poles are skipped.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_t, cos_t) = (v * PI).sin_cos();
            let (sin_p, cos_p) = (u * TAU).sin_cos();
            let n = [-cos_p * sin_t, cos_t, sin_p * sin_t];
            vertices.push(MeshVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
                uv: [u, v],
            });
        }
    }

    let row = w + 1;
    let mut indices = Vec::with_capacity((w * (2 * h - 2) * 3) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    Mesh { vertices, indices }
}

/// Build a flat ring in the XY plane facing +Z.
///
/// `phi_segments` rings of `theta_segments` quads span `inner..=outer`. The
/// default texture coordinates are planar (x and y scaled into 0..1 by the
/// outer radius); the ring pass replaces them with polar ones.
pub fn flat_ring(inner: f32, outer: f32, theta_segments: u32, phi_segments: u32) -> Mesh {
    let theta = theta_segments.max(3);
    let phi = phi_segments.max(1);
    let step = (outer - inner) / phi as f32;
    let mut vertices = Vec::with_capacity(((theta + 1) * (phi + 1)) as usize);
    for j in 0..=phi {
        let radius = inner + j as f32 * step;
        for i in 0..=theta {
            let (s, c) = (i as f32 / theta as f32 * TAU).sin_cos();
            let (x, y) = (radius * c, radius * s);
            vertices.push(MeshVertex {
                position: [x, y, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [(x / outer + 1.0) * 0.5, (y / outer + 1.0) * 0.5],
            });
        }
    }

    let mut indices = Vec::with_capacity((theta * phi * 6) as usize);
    for j in 0..phi {
        let level = j * (theta + 1);
        for i in 0..theta {
            let a = level + i;
            let b = a + theta + 1;
            let c = a + theta + 2;
            let d = a + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    Mesh { vertices, indices }
}
