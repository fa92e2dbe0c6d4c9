// Live-tunable values, written by the tuning panel and read by the frame loop.

use crate::core::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tunables {
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub light_position: Vec3,
    pub show_helpers: bool,
    /// Ring orientation in radians, applied X then Y then Z.
    pub ring_rotation: Vec3,
    /// Radians per frame.
    pub particle_speed: f32,
    pub camera_end_position: Vec3,
    pub look_at_end: Vec3,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            ambient_intensity: AMBIENT_INTENSITY,
            directional_intensity: DIRECTIONAL_INTENSITY,
            light_position: DIRECTIONAL_POSITION,
            show_helpers: false,
            ring_rotation: Vec3::from_array(RING_ROTATION),
            particle_speed: PARTICLE_ROTATION_SPEED,
            camera_end_position: CAMERA_END_POSITION,
            look_at_end: CAMERA_END_TARGET,
        }
    }
}

/// Every numeric field the panel exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TunableField {
    AmbientIntensity,
    DirectionalIntensity,
    LightX,
    LightY,
    LightZ,
    RingRotationX,
    RingRotationY,
    RingRotationZ,
    ParticleSpeed,
    CameraEndX,
    CameraEndY,
    CameraEndZ,
    LookAtEndX,
    LookAtEndY,
    LookAtEndZ,
}

/// Slider description: label, min, max, step.
#[derive(Clone, Copy, Debug)]
pub struct SliderSpec {
    pub field: TunableField,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

pub const SLIDERS: &[SliderSpec] = &[
    SliderSpec { field: TunableField::AmbientIntensity, label: "ambient", min: 0.0, max: 3.0, step: 0.001 },
    SliderSpec { field: TunableField::DirectionalIntensity, label: "directional", min: 0.0, max: 5.0, step: 0.001 },
    SliderSpec { field: TunableField::LightX, label: "light x", min: -10.0, max: 10.0, step: 0.01 },
    SliderSpec { field: TunableField::LightY, label: "light y", min: -10.0, max: 10.0, step: 0.01 },
    SliderSpec { field: TunableField::LightZ, label: "light z", min: -10.0, max: 10.0, step: 0.01 },
    SliderSpec { field: TunableField::RingRotationX, label: "ring rot x", min: -3.1416, max: 3.1416, step: 0.001 },
    SliderSpec { field: TunableField::RingRotationY, label: "ring rot y", min: -3.1416, max: 3.1416, step: 0.001 },
    SliderSpec { field: TunableField::RingRotationZ, label: "ring rot z", min: -3.1416, max: 3.1416, step: 0.001 },
    SliderSpec { field: TunableField::ParticleSpeed, label: "particle speed", min: 0.0, max: 0.01, step: 0.0001 },
    SliderSpec { field: TunableField::CameraEndX, label: "camera end x", min: -10.0, max: 10.0, step: 0.01 },
    SliderSpec { field: TunableField::CameraEndY, label: "camera end y", min: -10.0, max: 10.0, step: 0.01 },
    SliderSpec { field: TunableField::CameraEndZ, label: "camera end z", min: -10.0, max: 10.0, step: 0.01 },
    SliderSpec { field: TunableField::LookAtEndX, label: "look-at end x", min: -10.0, max: 10.0, step: 0.01 },
    SliderSpec { field: TunableField::LookAtEndY, label: "look-at end y", min: -10.0, max: 10.0, step: 0.01 },
    SliderSpec { field: TunableField::LookAtEndZ, label: "look-at end z", min: -10.0, max: 10.0, step: 0.01 },
];

impl Tunables {
    pub fn get(&self, field: TunableField) -> f32 {
        match field {
            TunableField::AmbientIntensity => self.ambient_intensity,
            TunableField::DirectionalIntensity => self.directional_intensity,
            TunableField::LightX => self.light_position.x,
            TunableField::LightY => self.light_position.y,
            TunableField::LightZ => self.light_position.z,
            TunableField::RingRotationX => self.ring_rotation.x,
            TunableField::RingRotationY => self.ring_rotation.y,
            TunableField::RingRotationZ => self.ring_rotation.z,
            TunableField::ParticleSpeed => self.particle_speed,
            TunableField::CameraEndX => self.camera_end_position.x,
            TunableField::CameraEndY => self.camera_end_position.y,
            TunableField::CameraEndZ => self.camera_end_position.z,
            TunableField::LookAtEndX => self.look_at_end.x,
            TunableField::LookAtEndY => self.look_at_end.y,
            TunableField::LookAtEndZ => self.look_at_end.z,
        }
    }

    pub fn set(&mut self, field: TunableField, value: f32) {
        let slot = match field {
            TunableField::AmbientIntensity => &mut self.ambient_intensity,
            TunableField::DirectionalIntensity => &mut self.directional_intensity,
            TunableField::LightX => &mut self.light_position.x,
            TunableField::LightY => &mut self.light_position.y,
            TunableField::LightZ => &mut self.light_position.z,
            TunableField::RingRotationX => &mut self.ring_rotation.x,
            TunableField::RingRotationY => &mut self.ring_rotation.y,
            TunableField::RingRotationZ => &mut self.ring_rotation.z,
            TunableField::ParticleSpeed => &mut self.particle_speed,
            TunableField::CameraEndX => &mut self.camera_end_position.x,
            TunableField::CameraEndY => &mut self.camera_end_position.y,
            TunableField::CameraEndZ => &mut self.camera_end_position.z,
            TunableField::LookAtEndX => &mut self.look_at_end.x,
            TunableField::LookAtEndY => &mut self.look_at_end.y,
            TunableField::LookAtEndZ => &mut self.look_at_end.z,
        };
        *slot = value;
    }
}
