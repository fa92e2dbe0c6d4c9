// Particle field generation.
//
// Positions come from rejection sampling inside a cube: a candidate is kept
// only once it lies strictly outside the tier's exclusion sphere. Accepted
// points are not uniform over a spherical shell (cube corners get more than
// their share), which is the look the scene is tuned for.

use glam::Vec3;
use rand::Rng;

/// One point sprite, laid out for direct upload as per-instance vertex data.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
}

/// Generation parameters for one density tier.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleTier {
    /// Total particles for the tier before splitting across textures.
    pub total: usize,
    /// Full edge length of the sampling cube, centred on the origin.
    pub cube_width: f32,
    /// Candidates at or inside this distance from the origin are rejected.
    pub exclusion_radius: f32,
    pub size_base: f32,
    pub size_jitter: f32,
    pub color_base: [f32; 3],
    pub color_jitter: [f32; 3],
}

/// One immutable point cloud drawn with a single sprite texture.
#[derive(Clone, Debug)]
pub struct ParticleBatch {
    pub texture_index: usize,
    pub particles: Vec<Particle>,
}

/// Particles assigned to each texture; the remainder is dropped.
#[inline]
pub fn per_texture_count(total: usize, texture_count: usize) -> usize {
    if texture_count == 0 {
        0
    } else {
        total / texture_count
    }
}

/// Draw positions uniformly in `[-w/2, w/2]^3` until one is farther than
/// `exclusion_radius` from the origin. There is no retry limit; callers keep
/// the exclusion sphere well inside the cube.
pub fn sample_outside_exclusion<R: Rng + ?Sized>(
    rng: &mut R,
    cube_width: f32,
    exclusion_radius: f32,
) -> Vec3 {
    loop {
        let p = Vec3::new(
            (rng.gen::<f32>() - 0.5) * cube_width,
            (rng.gen::<f32>() - 0.5) * cube_width,
            (rng.gen::<f32>() - 0.5) * cube_width,
        );
        if p.length() > exclusion_radius {
            return p;
        }
    }
}

pub fn generate_particle<R: Rng + ?Sized>(rng: &mut R, tier: &ParticleTier) -> Particle {
    let position = sample_outside_exclusion(rng, tier.cube_width, tier.exclusion_radius);
    let mut color = [0.0; 3];
    for (c, (base, jitter)) in color
        .iter_mut()
        .zip(tier.color_base.iter().zip(tier.color_jitter.iter()))
    {
        *c = base + rng.gen::<f32>() * jitter;
    }
    Particle {
        position: position.to_array(),
        size: tier.size_base + rng.gen::<f32>() * tier.size_jitter,
        color,
    }
}

pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    tier: &ParticleTier,
    texture_index: usize,
    count: usize,
) -> ParticleBatch {
    let particles = (0..count).map(|_| generate_particle(rng, tier)).collect();
    ParticleBatch {
        texture_index,
        particles,
    }
}

/// One batch per texture, each holding `floor(total / texture_count)` points.
pub fn generate_tier<R: Rng + ?Sized>(
    rng: &mut R,
    tier: &ParticleTier,
    texture_count: usize,
) -> Vec<ParticleBatch> {
    let count = per_texture_count(tier.total, texture_count);
    (0..texture_count)
        .map(|i| generate_batch(rng, tier, i, count))
        .collect()
}
