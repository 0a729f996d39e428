//! Gentle bobbing applied inside every icon group.

use serde::{Deserialize, Serialize};

use crate::kind::IconKind;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatParams {
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }

    /// Bobbing parameters per icon. Skill icons liven up when emphasized.
    pub fn for_kind(kind: IconKind, emphasized: bool) -> Self {
        match kind {
            IconKind::Dev => Self::new(2.0, 0.5, 0.5),
            IconKind::Network => Self::new(1.5, 0.2, 0.5),
            IconKind::Satcom => Self::new(1.0, 0.1, 0.2),
            IconKind::Defense => Self::new(2.0, 0.2, 0.2),
            IconKind::Software if emphasized => Self::new(5.0, 1.0, 0.5),
            IconKind::Software => Self::new(2.0, 0.5, 0.5),
            IconKind::Networking if emphasized => Self::new(4.0, 0.2, 0.5),
            IconKind::Networking => Self::new(1.5, 0.2, 0.5),
            IconKind::Leadership if emphasized => Self::new(3.0, 0.5, 0.5),
            IconKind::Leadership => Self::new(1.0, 0.5, 0.5),
        }
    }

    /// Rotation (xyz) and vertical offset at time `t` (already offset by the
    /// per-icon phase).
    pub fn pose(&self, t: f32) -> ([f32; 3], f32) {
        if self.speed == 0.0 {
            return ([0.0; 3], 0.0);
        }
        let arg = t / 4.0 * self.speed;
        let (s, c) = arg.sin_cos();
        let rotation = [
            c / 8.0 * self.rotation_intensity,
            s / 8.0 * self.rotation_intensity,
            s / 20.0 * self.rotation_intensity,
        ];
        let y = s / 10.0 * self.float_intensity;
        (rotation, y)
    }
}
