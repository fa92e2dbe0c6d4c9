// Scene assembly and the per-frame scene state driven by scroll.

use crate::core::config::SceneConfig;
use crate::core::geometry::{flat_ring, uv_sphere, Mesh};
use crate::core::particles::{generate_tier, ParticleBatch};
use crate::core::ring_uv::apply_polar_uvs;
use crate::core::scroll::{interpolate, spin, CameraKeyframes};
use crate::core::tunables::Tunables;
use glam::Vec3;
use rand::Rng;

/// Static scene content, built once at startup.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    pub planet: Mesh,
    pub ring: Mesh,
    /// Near-tier batches; these rotate every frame.
    pub near: Vec<ParticleBatch>,
    /// Far-tier batches; never moved.
    pub far: Vec<ParticleBatch>,
}

pub fn assemble<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> SceneGraph {
    let planet = uv_sphere(
        config.planet.radius,
        config.planet.width_segments,
        config.planet.height_segments,
    );
    let mut ring = flat_ring(
        config.ring.inner_radius,
        config.ring.outer_radius,
        config.ring.theta_segments,
        config.ring.phi_segments,
    );
    apply_polar_uvs(
        &mut ring.vertices,
        config.ring.inner_radius,
        config.ring.outer_radius,
    );
    let textures = config.sprite_paths.len();
    let near = generate_tier(rng, &config.near, textures);
    let far = generate_tier(rng, &config.far, textures);
    SceneGraph {
        planet,
        ring,
        near,
        far,
    }
}

/// Mutable transforms read by the renderer.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub progress: f32,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    /// `None` until the planet is ready to draw.
    pub planet_rotation_y: Option<f32>,
    /// One y angle per near batch, same order as `SceneGraph::near`.
    pub near_rotations: Vec<f32>,
}

impl SceneState {
    pub fn new(keyframes: &CameraKeyframes, near_batches: usize) -> Self {
        Self {
            progress: 0.0,
            camera_position: keyframes.start_position,
            camera_target: keyframes.start_target,
            planet_rotation_y: None,
            near_rotations: vec![0.0; near_batches],
        }
    }

    pub fn planet_ready(&mut self, keyframes: &CameraKeyframes) {
        if self.planet_rotation_y.is_none() {
            self.planet_rotation_y = Some(keyframes.planet_start_rotation_y);
        }
    }

    /// One frame of scroll-driven animation.
    pub fn update(&mut self, keyframes: &CameraKeyframes, tunables: &Tunables, progress: f32) {
        let pose = interpolate(
            keyframes,
            tunables.camera_end_position,
            tunables.look_at_end,
            progress,
        );
        self.progress = progress;
        self.camera_position = pose.position;
        self.camera_target = pose.target;
        if let Some(r) = self.planet_rotation_y.as_mut() {
            *r = pose.planet_rotation_y;
        }
        spin(&mut self.near_rotations, tunables.particle_speed);
    }
}
