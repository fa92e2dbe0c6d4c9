// Scroll-driven camera interpolation.

use glam::Vec3;

/// Normalized page position: `scroll_y / (document_height - viewport_height)`.
///
/// Returns 0 when the page cannot scroll. The ratio is not clamped, so an
/// offset past the measured extent yields a value above 1.
#[inline]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    let extent = document_height - viewport_height;
    if extent <= 0.0 {
        return 0.0;
    }
    (scroll_y / extent) as f32
}

// Weighted form so both endpoints are reproduced exactly.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Fixed half of the two-point scroll animation. The camera and look-at end
/// points are live-tunable and passed separately each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraKeyframes {
    pub start_position: Vec3,
    pub start_target: Vec3,
    pub planet_start_rotation_y: f32,
    pub planet_end_rotation_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub planet_rotation_y: f32,
}

/// Evaluate every scroll-driven value with the same `progress`.
pub fn interpolate(
    keyframes: &CameraKeyframes,
    end_position: Vec3,
    end_target: Vec3,
    progress: f32,
) -> CameraPose {
    CameraPose {
        position: lerp_vec3(keyframes.start_position, end_position, progress),
        target: lerp_vec3(keyframes.start_target, end_target, progress),
        planet_rotation_y: lerp(
            keyframes.planet_start_rotation_y,
            keyframes.planet_end_rotation_y,
            progress,
        ),
    }
}

/// Per-frame spin of the rotating particle groups, independent of scroll.
#[inline]
pub fn spin(rotations: &mut [f32], speed: f32) {
    for r in rotations.iter_mut() {
        *r -= speed;
    }
}
