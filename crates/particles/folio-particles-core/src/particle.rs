//! Particle store: the fixed pool and its per-particle parameters.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::buffer::InstanceTransform;
use crate::config::SamplingRanges;
use crate::update::Smoothing;

/// One oscillator in the field.
///
/// `speed`, `spatial_factor` and `offset` are fixed at creation. `phase` and
/// `pointer_influence` are the only state carried from frame to frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub phase: f64,
    pub speed: f64,
    pub spatial_factor: f64,
    pub offset: [f64; 3],
    #[serde(default)]
    pub pointer_influence: [f64; 2],
}

impl Particle {
    pub fn new(phase: f64, speed: f64, spatial_factor: f64, offset: [f64; 3]) -> Self {
        Self {
            phase,
            speed,
            spatial_factor,
            offset,
            pointer_influence: [0.0, 0.0],
        }
    }

    /// Draw every parameter independently from `ranges`.
    pub fn sample<R: Rng + ?Sized>(ranges: &SamplingRanges, rng: &mut R) -> Self {
        // Draw order matches the scene setup: phase, factor, speed, offsets.
        let phase = ranges.phase.lerp(rng.random::<f64>());
        let spatial_factor = ranges.spatial_factor.lerp(rng.random::<f64>());
        let speed = ranges.speed.lerp(rng.random::<f64>());
        let offset = [
            ranges.offset.lerp(rng.random::<f64>()),
            ranges.offset.lerp(rng.random::<f64>()),
            ranges.offset.lerp(rng.random::<f64>()),
        ];
        Self::new(phase, speed, spatial_factor, offset)
    }

    /// Advance one frame toward the smoothed pointer `target` (already scaled)
    /// and return the resulting transform.
    #[inline]
    pub fn advance(&mut self, target: [f64; 2], smoothing: f64) -> InstanceTransform {
        self.phase += self.speed / 2.0;
        let t = self.phase;
        let f = self.spatial_factor;

        let (sin_t, cos_t) = t.sin_cos();
        let cos_2t = (t * 2.0).cos();
        let a = cos_t + sin_t / 10.0;
        let b = sin_t + cos_2t / 10.0;

        self.pointer_influence[0] += (target[0] - self.pointer_influence[0]) * smoothing;
        self.pointer_influence[1] += (target[1] - self.pointer_influence[1]) * smoothing;
        let mx = self.pointer_influence[0] / 10.0;
        let my = self.pointer_influence[1] / 10.0;

        let (sin_tf, cos_tf) = (t / 10.0 * f).sin_cos();
        // z reads the y influence term on purpose; the scene has always done so.
        let x = mx * a + self.offset[0] + cos_tf + sin_t * f / 10.0;
        let y = my * b + self.offset[1] + sin_tf + cos_2t * f / 10.0;
        let z = my * b + self.offset[2] + cos_tf + (t * 3.0).sin() * f / 10.0;

        let scale = ((t * 5.0).sin() + 1.5) / 2.0;

        InstanceTransform {
            position: [x as f32, y as f32, z as f32],
            scale: scale as f32,
        }
    }
}

/// Fixed-size pool of particles. Index `i` identifies transform slot `i`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Allocate `count` particles sampled from the default ranges.
    pub fn initialize<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self::initialize_with(&SamplingRanges::default(), count, rng)
    }

    /// Allocate `count` particles sampled from `ranges`.
    pub fn initialize_with<R: Rng + ?Sized>(
        ranges: &SamplingRanges,
        count: usize,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count).map(|_| Particle::sample(ranges, rng)).collect();
        Self { particles }
    }

    /// Build a store from explicit particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Step every particle, handing each transform to `write` with its slot.
    pub(crate) fn advance_all(
        &mut self,
        target: [f64; 2],
        smoothing: &Smoothing,
        mut write: impl FnMut(usize, InstanceTransform),
    ) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            write(i, p.advance(target, smoothing.fraction));
        }
    }
}
