//! Idle drift of the keyword badges on skill cards.
//!
//! Each badge rises to `-rise` px and sways to `sway` px and back over one
//! `duration`, eased in and out on both halves, then plays the cycle again in
//! reverse, forever.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::easing::CubicBezier;

/// Sampling bounds, half-open.
pub const DURATION_RANGE: (f32, f32) = (2.0, 6.0);
pub const RISE_RANGE: (f32, f32) = (5.0, 15.0);
pub const SWAY_RANGE: (f32, f32) = (-5.0, 5.0);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BadgeDrift {
    /// Seconds per cycle.
    pub duration: f32,
    /// Peak upward travel in px (applied as a negative y).
    pub rise: f32,
    /// Peak horizontal travel in px.
    pub sway: f32,
}

fn lerp_range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}

impl BadgeDrift {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            duration: lerp_range(rng, DURATION_RANGE),
            rise: lerp_range(rng, RISE_RANGE),
            sway: lerp_range(rng, SWAY_RANGE),
        }
    }

    /// One drift per keyword, in keyword order.
    pub fn sample_many<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Self> {
        (0..count).map(|_| Self::sample(rng)).collect()
    }

    /// Progress within the current cycle in `[0, 1]`, reversed on odd cycles.
    fn cycle_progress(&self, t: f32) -> f32 {
        if self.duration <= 0.0 || !t.is_finite() || t <= 0.0 {
            return 0.0;
        }
        let cycles = t / self.duration;
        let n = cycles.floor();
        let p = cycles - n;
        if (n as u64) % 2 == 1 {
            1.0 - p
        } else {
            p
        }
    }

    /// `[x, y]` offset in px at time `t` (seconds since mount).
    pub fn offset_at(&self, t: f32) -> [f32; 2] {
        let p = self.cycle_progress(t) as f64;
        // Keyframes 0 → peak → 0 at evenly spaced times; each half is eased.
        let weight = if p <= 0.5 {
            CubicBezier::EASE_IN_OUT.ease(p * 2.0)
        } else {
            1.0 - CubicBezier::EASE_IN_OUT.ease((p - 0.5) * 2.0)
        };
        let w = weight as f32;
        [self.sway * w, -self.rise * w]
    }
}
