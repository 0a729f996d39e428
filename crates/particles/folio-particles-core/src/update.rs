//! Per-frame procedural step.
//!
//! Each particle is a phase-shifted Lissajous-like oscillator. Every particle
//! reads the same smoothed pointer but at its own phase, so the field
//! undulates toward the pointer instead of translating in lockstep.
//!
//! The phase advances by `speed / 2` per call, not by elapsed time, so the
//! motion speed follows the host frame rate.

use serde::{Deserialize, Serialize};

use crate::buffer::TransformBuffer;
use crate::particle::ParticleStore;

/// Multiplier from normalized pointer to influence space.
pub const POINTER_SCALE: f64 = 100.0;
/// Fraction of the remaining distance the influence closes per frame.
pub const POINTER_SMOOTHING: f64 = 0.01;

/// Normalized pointer snapshot, roughly `[-1, 1]` on each axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Replace non-finite components with 0.
    #[inline]
    pub fn sanitized(self) -> Self {
        let fix = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            x: fix(self.x),
            y: fix(self.y),
        }
    }
}

/// Pointer smoothing parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Smoothing {
    pub scale: f64,
    pub fraction: f64,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            scale: POINTER_SCALE,
            fraction: POINTER_SMOOTHING,
        }
    }
}

impl Smoothing {
    #[inline]
    fn target(&self, pointer: Pointer) -> [f64; 2] {
        [pointer.x * self.scale, pointer.y * self.scale]
    }
}

/// Advance every particle one frame and rewrite `buffer` slot by slot.
///
/// `_elapsed` is the host's absolute clock. It is accepted for the frame
/// callback contract but does not drive the motion; see the module docs.
pub fn update(
    store: &mut ParticleStore,
    buffer: &mut TransformBuffer,
    _elapsed: f64,
    pointer: Pointer,
) {
    update_with(store, buffer, pointer, &Smoothing::default());
}

/// [`update`] with explicit smoothing parameters.
pub fn update_with(
    store: &mut ParticleStore,
    buffer: &mut TransformBuffer,
    pointer: Pointer,
    smoothing: &Smoothing,
) {
    buffer.fit(store.len());
    if store.is_empty() {
        return;
    }
    let target = smoothing.target(pointer.sanitized());
    store.advance_all(target, smoothing, |i, t| buffer.set(i, t));
}
