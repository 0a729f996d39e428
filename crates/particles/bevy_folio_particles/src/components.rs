use bevy::prelude::*;
use folio_icons_core::{IconAnimator, IconKind};

/// Marks the entity drawn at transform slot `.0` of the particle field.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleInstance(pub usize);

/// Decorative icon driven by [`IconAnimator`]. `anchor` is the icon's rest
/// position; the float bob is applied on top of it.
#[derive(Component, Debug, Clone)]
pub struct IconSpin {
    pub animator: IconAnimator,
    /// Hover emphasis, set by the host's picking logic.
    pub emphasized: bool,
    pub anchor: Vec3,
}

impl IconSpin {
    /// Icon with its own random float phase.
    pub fn new(kind: IconKind) -> Self {
        Self::from_animator(IconAnimator::sample(kind, &mut rand::rng()))
    }

    pub fn with_float_offset(kind: IconKind, float_offset: f32) -> Self {
        Self::from_animator(IconAnimator::with_float_offset(kind, float_offset))
    }

    fn from_animator(animator: IconAnimator) -> Self {
        Self {
            animator,
            emphasized: false,
            anchor: Vec3::ZERO,
        }
    }

    pub fn at(mut self, anchor: Vec3) -> Self {
        self.anchor = anchor;
        self
    }
}
