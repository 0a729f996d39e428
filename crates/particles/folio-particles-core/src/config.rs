//! Field configuration: pool size, sampling ranges and pointer smoothing.

use serde::{Deserialize, Serialize};

use crate::update::{POINTER_SCALE, POINTER_SMOOTHING};
use crate::DEFAULT_PARTICLE_COUNT;

/// Half-open sampling interval `[min, max)`.
///
/// Samples are drawn as `min + u * (max - min)` with `u` uniform in `[0, 1)`,
/// so `min == max` is accepted and yields a constant.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map a unit sample `u ∈ [0, 1)` into the range.
    #[inline]
    pub fn lerp(&self, u: f64) -> f64 {
        self.min + u * self.span()
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn contains(&self, v: f64) -> bool {
        if self.min == self.max {
            return v == self.min;
        }
        v >= self.min && v < self.max
    }
}

/// Per-parameter ranges sampled once when the pool is created.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingRanges {
    pub phase: SampleRange,
    pub spatial_factor: SampleRange,
    pub speed: SampleRange,
    /// Shared by all three offset components.
    pub offset: SampleRange,
}

impl Default for SamplingRanges {
    fn default() -> Self {
        Self {
            phase: SampleRange::new(0.0, 100.0),
            spatial_factor: SampleRange::new(20.0, 120.0),
            speed: SampleRange::new(0.01, 0.015),
            offset: SampleRange::new(-50.0, 50.0),
        }
    }
}

impl SamplingRanges {
    /// Named view used by validation and diagnostics.
    pub fn named(&self) -> [(&'static str, SampleRange); 4] {
        [
            ("phase", self.phase),
            ("spatial_factor", self.spatial_factor),
            ("speed", self.speed),
            ("offset", self.offset),
        ]
    }
}

/// Configuration for a particle field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles; fixed for the lifetime of the field.
    pub count: usize,
    pub ranges: SamplingRanges,
    /// Multiplier applied to the normalized pointer before smoothing.
    pub pointer_scale: f64,
    /// Fraction of the remaining distance closed per frame, in `(0, 1]`.
    pub pointer_smoothing: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            ranges: SamplingRanges::default(),
            pointer_scale: POINTER_SCALE,
            pointer_smoothing: POINTER_SMOOTHING,
        }
    }
}

impl FieldConfig {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}
