//! Cubic-bezier timing curves (CSS `cubic-bezier(x1, y1, x2, y2)`).

use serde::{Deserialize, Serialize};

const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: u32 = 12;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// One coordinate of the curve at parameter `t`, with endpoints 0 and 1.
    #[inline]
    fn coord(t: f64, a1: f64, a2: f64) -> f64 {
        (((1.0 - 3.0 * a2 + 3.0 * a1) * t + (3.0 * a2 - 6.0 * a1)) * t + 3.0 * a1) * t
    }

    fn t_for_x(&self, x: f64) -> f64 {
        let (mut lo, mut hi) = (0.0, 1.0);
        let mut t = 0.5;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            t = lo + (hi - lo) / 2.0;
            let dx = Self::coord(t, self.x1, self.x2) - x;
            if dx.abs() <= SUBDIVISION_PRECISION {
                break;
            }
            if dx > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
        }
        t
    }

    /// Eased progress for linear progress `x`, clamped to `[0, 1]`.
    pub fn ease(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }
        Self::coord(self.t_for_x(x), self.y1, self.y2)
    }
}
