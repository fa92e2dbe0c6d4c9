use glam::Vec3;

// Shared scene constants: default geometry, particle tiers and scroll keyframes.

// Planet
pub const PLANET_RADIUS: f32 = 1.0;
pub const PLANET_WIDTH_SEGMENTS: u32 = 64;
pub const PLANET_HEIGHT_SEGMENTS: u32 = 64;

// Ring (flat annulus in the XY plane before rotation)
pub const RING_INNER_RADIUS: f32 = 1.4;
pub const RING_OUTER_RADIUS: f32 = 2.4;
pub const RING_THETA_SEGMENTS: u32 = 128;
pub const RING_PHI_SEGMENTS: u32 = 4;
pub const RING_TINT: [f32; 3] = [0.85, 0.8, 0.72];

// Near particle tier (rotates)
pub const NEAR_PARTICLE_COUNT: usize = 3000;
pub const NEAR_CUBE_WIDTH: f32 = 30.0;
pub const NEAR_EXCLUSION_RADIUS: f32 = 4.0;
pub const NEAR_SIZE_BASE: f32 = 0.05;
pub const NEAR_SIZE_JITTER: f32 = 0.1;

// Far particle tier (static)
pub const FAR_PARTICLE_COUNT: usize = 10000;
pub const FAR_CUBE_WIDTH: f32 = 100.0;
pub const FAR_EXCLUSION_RADIUS: f32 = 15.0;
pub const FAR_SIZE_BASE: f32 = 0.2;
pub const FAR_SIZE_JITTER: f32 = 0.3;

// Near-white / pale-blue palette: channel = base + random() * jitter
pub const PARTICLE_COLOR_BASE: [f32; 3] = [0.8, 0.85, 0.95];
pub const PARTICLE_COLOR_JITTER: [f32; 3] = [0.2, 0.15, 0.05];

// Scroll keyframes: fixed start values, end values live in the tunables
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 0.6, 5.0);
pub const CAMERA_START_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_END_POSITION: Vec3 = Vec3::new(2.5, 1.2, 3.0);
pub const CAMERA_END_TARGET: Vec3 = Vec3::new(0.8, 0.0, 0.0);
pub const PLANET_START_ROTATION_Y: f32 = 0.0;
pub const PLANET_END_ROTATION_Y: f32 = std::f32::consts::PI;

// Default ring orientation (radians, XYZ)
pub const RING_ROTATION: [f32; 3] = [-1.2, 0.0, 0.3];

// Radians subtracted from each near batch's y rotation per frame
pub const PARTICLE_ROTATION_SPEED: f32 = 0.0005;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.35;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

// Scroll snapping
pub const SNAP_THRESHOLD_VIEWPORT_FRACTION: f64 = 0.1;
pub const SNAP_COOLDOWN_MS: i32 = 200;
