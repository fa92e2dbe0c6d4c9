// Host-side tests for exclusion-zone particle generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn near_tier() -> ParticleTier {
    ParticleTier {
        total: 10_000,
        cube_width: 30.0,
        exclusion_radius: 4.0,
        size_base: 0.05,
        size_jitter: 0.1,
        color_base: [0.8, 0.85, 0.95],
        color_jitter: [0.2, 0.15, 0.05],
    }
}

fn far_tier() -> ParticleTier {
    ParticleTier {
        total: 10_000,
        cube_width: 100.0,
        exclusion_radius: 15.0,
        size_base: 0.2,
        size_jitter: 0.3,
        ..near_tier()
    }
}

fn distance(p: &Particle) -> f32 {
    glam::Vec3::from_array(p.position).length()
}

#[test]
fn no_particle_falls_inside_the_exclusion_radius() {
    for tier in [near_tier(), far_tier()] {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = generate_batch(&mut rng, &tier, 0, 10_000);
        assert_eq!(batch.particles.len(), 10_000);
        let violations = batch
            .particles
            .iter()
            .filter(|p| distance(p) <= tier.exclusion_radius)
            .count();
        assert_eq!(violations, 0);
    }
}

#[test]
fn particles_stay_inside_the_sampling_cube() {
    let tier = far_tier();
    let half = tier.cube_width / 2.0;
    let mut rng = StdRng::seed_from_u64(11);
    for p in generate_batch(&mut rng, &tier, 0, 5_000).particles {
        for c in p.position {
            assert!((-half..=half).contains(&c), "coordinate {c} outside cube");
        }
    }
}

#[test]
fn colors_and_sizes_stay_within_base_plus_jitter() {
    let tier = near_tier();
    let mut rng = StdRng::seed_from_u64(3);
    for p in generate_batch(&mut rng, &tier, 0, 2_000).particles {
        for i in 0..3 {
            let lo = tier.color_base[i];
            let hi = lo + tier.color_jitter[i];
            assert!(p.color[i] >= lo && p.color[i] <= hi);
        }
        assert!(p.size >= tier.size_base && p.size <= tier.size_base + tier.size_jitter);
    }
}

#[test]
fn remainder_is_dropped_when_splitting_across_textures() {
    assert_eq!(per_texture_count(10_000, 3), 3333);
    assert_eq!(per_texture_count(9, 3), 3);
    assert_eq!(per_texture_count(2, 3), 0);
    assert_eq!(per_texture_count(100, 0), 0);

    let mut rng = StdRng::seed_from_u64(1);
    let batches = generate_tier(&mut rng, &near_tier(), 3);
    assert_eq!(batches.len(), 3);
    for (i, b) in batches.iter().enumerate() {
        assert_eq!(b.texture_index, i);
        assert_eq!(b.particles.len(), 3333);
    }
    let total: usize = batches.iter().map(|b| b.particles.len()).sum();
    assert_eq!(total, 9999);
}

#[test]
fn no_textures_means_no_batches() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate_tier(&mut rng, &near_tier(), 0).is_empty());
}

#[test]
fn same_seed_reproduces_the_same_field() {
    let a = generate_batch(&mut StdRng::seed_from_u64(42), &near_tier(), 0, 100);
    let b = generate_batch(&mut StdRng::seed_from_u64(42), &near_tier(), 0, 100);
    assert_eq!(a.particles, b.particles);
}

#[test]
fn rejection_sampling_keeps_cube_corners() {
    // Cube sampling reaches past half the width along the diagonals.
    let tier = near_tier();
    let half = tier.cube_width / 2.0;
    let mut rng = StdRng::seed_from_u64(5);
    let batch = generate_batch(&mut rng, &tier, 0, 10_000);
    assert!(batch.particles.iter().any(|p| distance(p) > half * 1.2));
}
