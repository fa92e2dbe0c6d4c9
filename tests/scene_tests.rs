// Host-side tests for scene assembly, per-frame state and live tunables.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod ring_uv {
        include!("../src/core/ring_uv.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod tunables {
        include!("../src/core/tunables.rs");
    }
}

use crate::core::config::SceneConfig;
use crate::core::scene::{assemble, SceneState};
use crate::core::tunables::{Tunables, SLIDERS};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn graph() -> (SceneConfig, crate::core::scene::SceneGraph) {
    let config = SceneConfig::default();
    let graph = assemble(&config, &mut StdRng::seed_from_u64(9));
    (config, graph)
}

#[test]
fn assembles_one_batch_per_sprite_in_each_tier() {
    let (config, graph) = graph();
    assert_eq!(graph.near.len(), config.sprite_paths.len());
    assert_eq!(graph.far.len(), config.sprite_paths.len());
    for b in &graph.near {
        assert_eq!(b.particles.len(), 1000);
    }
    for b in &graph.far {
        assert_eq!(b.particles.len(), 3333);
    }
    assert!(graph.planet.triangle_count() > 0);
    assert!(graph.ring.triangle_count() > 0);
}

#[test]
fn ring_is_assembled_with_polar_uvs() {
    let (config, graph) = graph();
    let span = config.ring.outer_radius - config.ring.inner_radius;
    for v in &graph.ring.vertices {
        let [x, y, _] = v.position;
        let expected = ((x * x + y * y).sqrt() - config.ring.inner_radius) / span;
        assert!((v.uv[0] - expected).abs() < 1e-5);
    }
}

#[test]
fn no_sprites_means_no_particles() {
    let config = SceneConfig {
        sprite_paths: Vec::new(),
        ..SceneConfig::default()
    };
    let graph = assemble(&config, &mut StdRng::seed_from_u64(1));
    assert!(graph.near.is_empty());
    assert!(graph.far.is_empty());
}

#[test]
fn planet_rotation_waits_for_the_planet() {
    let (config, graph) = graph();
    let k = config.keyframes;
    let tunables = Tunables::default();
    let mut state = SceneState::new(&k, graph.near.len());

    state.update(&k, &tunables, 0.5);
    assert_eq!(state.planet_rotation_y, None);
    // camera still moves before the planet arrives
    assert!(state.camera_position.abs_diff_eq(
        (k.start_position + tunables.camera_end_position) * 0.5,
        1e-6
    ));

    state.planet_ready(&k);
    assert_eq!(state.planet_rotation_y, Some(k.planet_start_rotation_y));
    state.update(&k, &tunables, 1.0);
    assert_eq!(state.planet_rotation_y, Some(k.planet_end_rotation_y));
}

#[test]
fn update_reads_live_end_points_and_speed() {
    let (config, graph) = graph();
    let k = config.keyframes;
    let mut state = SceneState::new(&k, graph.near.len());
    let mut tunables = Tunables::default();
    tunables.camera_end_position = Vec3::new(0.0, 4.0, 0.0);
    tunables.look_at_end = Vec3::new(1.0, 1.0, 1.0);
    tunables.particle_speed = 0.25;

    state.update(&k, &tunables, 1.0);
    assert_eq!(state.progress, 1.0);
    assert_eq!(state.camera_position, tunables.camera_end_position);
    assert_eq!(state.camera_target, tunables.look_at_end);
    assert_eq!(state.near_rotations, vec![-0.25; graph.near.len()]);

    // spin is per frame, not per unit of scroll
    state.update(&k, &tunables, 1.0);
    assert_eq!(state.near_rotations, vec![-0.5; graph.near.len()]);
}

#[test]
fn every_slider_writes_its_own_field() {
    let defaults = Tunables::default();
    for slider in SLIDERS {
        assert!(slider.min < slider.max && slider.step > 0.0);
        let value = defaults.get(slider.field);
        assert!(
            value >= slider.min && value <= slider.max,
            "{} default {value} outside {}..{}",
            slider.label,
            slider.min,
            slider.max
        );

        let mut t = defaults;
        let moved = (slider.min + slider.max) * 0.5 + slider.step;
        t.set(slider.field, moved);
        assert_eq!(t.get(slider.field), moved);
        for other in SLIDERS.iter().filter(|s| s.field != slider.field) {
            assert_eq!(t.get(other.field), defaults.get(other.field), "{}", other.label);
        }
    }
}
