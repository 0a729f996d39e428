//! Per-icon spin state.
//!
//! Some icons integrate a per-frame increment (frame-rate dependent), others
//! are closed-form in elapsed time. The animator keeps the outer group's
//! Euler rotation; [`IconPose`] adds the inner float bobbing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::float::FloatParams;
use crate::kind::IconKind;

/// Everything a host needs to place one icon for a frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IconPose {
    /// Outer group rotation (Euler xyz, radians).
    pub spin: [f32; 3],
    /// Inner float group rotation (Euler xyz, radians).
    pub float_rotation: [f32; 3],
    /// Inner float group vertical offset.
    pub float_y: f32,
}

/// Upper bound (exclusive) of a sampled float phase offset, in seconds.
pub const FLOAT_OFFSET_SPAN: f32 = 10_000.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconAnimator {
    kind: IconKind,
    rotation: [f32; 3],
    /// Phase added to elapsed time for the float bobbing, so neighbouring
    /// icons do not bob in sync.
    float_offset: f32,
}

impl IconAnimator {
    pub fn new(kind: IconKind) -> Self {
        Self::with_float_offset(kind, 0.0)
    }

    pub fn with_float_offset(kind: IconKind, float_offset: f32) -> Self {
        Self {
            kind,
            rotation: [0.0; 3],
            float_offset,
        }
    }

    /// Animator with a float offset drawn from `[0, FLOAT_OFFSET_SPAN)`.
    pub fn sample<R: Rng + ?Sized>(kind: IconKind, rng: &mut R) -> Self {
        Self::with_float_offset(kind, rng.random::<f32>() * FLOAT_OFFSET_SPAN)
    }

    pub fn kind(&self) -> IconKind {
        self.kind
    }

    pub fn rotation(&self) -> [f32; 3] {
        self.rotation
    }

    pub fn float_offset(&self) -> f32 {
        self.float_offset
    }

    /// Advance one frame at host time `elapsed` (seconds).
    pub fn step(&mut self, elapsed: f32, emphasized: bool) -> IconPose {
        let r = &mut self.rotation;
        match self.kind {
            IconKind::Dev => {
                r[0] = elapsed * 0.2;
                r[1] = elapsed * 0.3;
            }
            IconKind::Network => {
                r[1] += 0.005;
            }
            IconKind::Satcom => {
                r[1] = (elapsed * 0.5).sin() * 0.5;
                r[2] = (elapsed * 0.3).cos() * 0.1;
            }
            IconKind::Defense => {
                r[1] = elapsed * 0.5;
            }
            IconKind::Software => {
                let speed = if emphasized { 2.0 } else { 0.5 };
                r[0] += 0.01 * speed;
                r[1] += 0.015 * speed;
            }
            IconKind::Networking => {
                let speed = if emphasized { 3.0 } else { 1.0 };
                r[1] += 0.005 * speed;
            }
            IconKind::Leadership => {
                let speed = if emphasized { 2.0 } else { 0.5 };
                r[2] = (elapsed * speed).sin() * 0.2;
            }
        }

        let params = FloatParams::for_kind(self.kind, emphasized);
        let (float_rotation, float_y) = params.pose(self.float_offset + elapsed);
        IconPose {
            spin: self.rotation,
            float_rotation,
            float_y,
        }
    }
}
