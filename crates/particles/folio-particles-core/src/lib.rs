//! Folio Particles Core (engine-agnostic)
//!
//! A fixed pool of independently phased oscillators that drift toward a
//! smoothed pointer. Hosts call [`update`] (or [`ParticleField::step`]) once
//! per rendered frame and then publish the [`TransformBuffer`] to whatever
//! instanced-draw surface they own.

pub mod buffer;
pub mod config;
pub mod field;
pub mod particle;
pub mod sink;
pub mod style;
pub mod update;

// Re-exports for consumers (adapters)
pub use buffer::{InstanceTransform, TransformBuffer, MATRIX_STRIDE, QUAD_STRIDE};
pub use config::{FieldConfig, SampleRange, SamplingRanges};
pub use field::{FieldError, ParticleField};
pub use particle::{Particle, ParticleStore};
pub use sink::{MatrixSink, TransformSink};
pub use style::{parse_hex_rgb, SceneStyle, StyleError};
pub use update::{update, update_with, Pointer, Smoothing, POINTER_SCALE, POINTER_SMOOTHING};

/// Pool size used by the background scene.
pub const DEFAULT_PARTICLE_COUNT: usize = 2000;
