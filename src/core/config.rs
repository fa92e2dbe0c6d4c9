// Single description of the scene: asset paths, geometry, particle tiers and
// the fixed scroll keyframes.

use crate::core::constants::*;
use crate::core::particles::ParticleTier;
use crate::core::scroll::CameraKeyframes;

#[derive(Clone, Debug)]
pub struct PlanetConfig {
    pub albedo_path: String,
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

#[derive(Clone, Debug)]
pub struct RingConfig {
    pub alpha_path: String,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub theta_segments: u32,
    pub phi_segments: u32,
    pub tint: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub planet: PlanetConfig,
    pub ring: RingConfig,
    /// One batch per sprite per tier.
    pub sprite_paths: Vec<String>,
    pub near: ParticleTier,
    pub far: ParticleTier,
    pub keyframes: CameraKeyframes,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            planet: PlanetConfig {
                albedo_path: "textures/planet/color.jpg".into(),
                radius: PLANET_RADIUS,
                width_segments: PLANET_WIDTH_SEGMENTS,
                height_segments: PLANET_HEIGHT_SEGMENTS,
            },
            ring: RingConfig {
                alpha_path: "textures/ring/alpha.png".into(),
                inner_radius: RING_INNER_RADIUS,
                outer_radius: RING_OUTER_RADIUS,
                theta_segments: RING_THETA_SEGMENTS,
                phi_segments: RING_PHI_SEGMENTS,
                tint: RING_TINT,
            },
            sprite_paths: vec![
                "textures/particles/1.png".into(),
                "textures/particles/2.png".into(),
                "textures/particles/3.png".into(),
            ],
            near: ParticleTier {
                total: NEAR_PARTICLE_COUNT,
                cube_width: NEAR_CUBE_WIDTH,
                exclusion_radius: NEAR_EXCLUSION_RADIUS,
                size_base: NEAR_SIZE_BASE,
                size_jitter: NEAR_SIZE_JITTER,
                color_base: PARTICLE_COLOR_BASE,
                color_jitter: PARTICLE_COLOR_JITTER,
            },
            far: ParticleTier {
                total: FAR_PARTICLE_COUNT,
                cube_width: FAR_CUBE_WIDTH,
                exclusion_radius: FAR_EXCLUSION_RADIUS,
                size_base: FAR_SIZE_BASE,
                size_jitter: FAR_SIZE_JITTER,
                color_base: PARTICLE_COLOR_BASE,
                color_jitter: PARTICLE_COLOR_JITTER,
            },
            keyframes: CameraKeyframes {
                start_position: CAMERA_START_POSITION,
                start_target: CAMERA_START_TARGET,
                planet_start_rotation_y: PLANET_START_ROTATION_Y,
                planet_end_rotation_y: PLANET_END_ROTATION_Y,
            },
        }
    }
}
