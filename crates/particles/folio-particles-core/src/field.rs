//! ParticleField: owned store + buffer + config, stepped once per frame.

use log::{debug, trace, warn};
use rand::Rng;
use thiserror::Error;

use crate::buffer::TransformBuffer;
use crate::config::FieldConfig;
use crate::particle::ParticleStore;
use crate::sink::TransformSink;
use crate::update::{update_with, Pointer, Smoothing};

/// Errors produced while validating a [`FieldConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("sampling range `{name}` is invalid: [{min}, {max})")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("pointer smoothing must be in (0, 1], got {0}")]
    InvalidSmoothing(f64),
    #[error("pointer scale must be finite, got {0}")]
    InvalidPointerScale(f64),
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), FieldError> {
        for (name, range) in self.ranges.named() {
            if !range.is_valid() {
                return Err(FieldError::InvalidRange {
                    name,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        let s = self.pointer_smoothing;
        if !(s > 0.0 && s <= 1.0) {
            return Err(FieldError::InvalidSmoothing(s));
        }
        if !self.pointer_scale.is_finite() {
            return Err(FieldError::InvalidPointerScale(self.pointer_scale));
        }
        Ok(())
    }
}

/// A mounted particle field. Dropping it is the unmount.
#[derive(Debug, Clone)]
pub struct ParticleField {
    cfg: FieldConfig,
    store: ParticleStore,
    buffer: TransformBuffer,
    smoothing: Smoothing,
    frame: u64,
    warned_non_finite: bool,
}

impl ParticleField {
    /// Validate `cfg` and sample the pool from `rng`.
    pub fn new<R: Rng + ?Sized>(cfg: FieldConfig, rng: &mut R) -> Result<Self, FieldError> {
        cfg.validate()?;
        let store = ParticleStore::initialize_with(&cfg.ranges, cfg.count, rng);
        debug!(
            "particle field created: count={} smoothing={} scale={}",
            cfg.count, cfg.pointer_smoothing, cfg.pointer_scale
        );
        Ok(Self::assemble(cfg, store))
    }

    /// Field with [`FieldConfig::default`], which needs no validation.
    pub fn with_default_config<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let cfg = FieldConfig::default();
        let store = ParticleStore::initialize_with(&cfg.ranges, cfg.count, rng);
        Self::assemble(cfg, store)
    }

    /// Wrap an explicit store. The config's `count` is replaced by the store length.
    pub fn from_store(mut cfg: FieldConfig, store: ParticleStore) -> Result<Self, FieldError> {
        cfg.validate()?;
        cfg.count = store.len();
        Ok(Self::assemble(cfg, store))
    }

    fn assemble(cfg: FieldConfig, store: ParticleStore) -> Self {
        Self {
            smoothing: Smoothing {
                scale: cfg.pointer_scale,
                fraction: cfg.pointer_smoothing,
            },
            buffer: TransformBuffer::new(store.len()),
            store,
            cfg,
            frame: 0,
            warned_non_finite: false,
        }
    }

    /// Advance one frame. `elapsed` is the host clock; see [`crate::update`].
    pub fn step(&mut self, elapsed: f64, pointer: Pointer) -> &TransformBuffer {
        if !pointer.is_finite() && !self.warned_non_finite {
            warn!("non-finite pointer input ({}, {}) treated as 0", pointer.x, pointer.y);
            self.warned_non_finite = true;
        }
        trace!("step frame={} elapsed={elapsed}", self.frame);
        update_with(&mut self.store, &mut self.buffer, pointer, &self.smoothing);
        self.frame += 1;
        &self.buffer
    }

    /// Publish the current buffer. Without a sink, or with one that cannot
    /// hold every slot, the write is skipped and `false` is returned; particle
    /// state is not touched either way.
    pub fn publish(&self, sink: Option<&mut dyn TransformSink>) -> bool {
        let Some(sink) = sink else {
            trace!("no renderer attached, skipping publish for frame {}", self.frame);
            return false;
        };
        if sink.capacity() < self.buffer.len() {
            trace!(
                "renderer holds {} of {} slots, skipping publish for frame {}",
                sink.capacity(),
                self.buffer.len(),
                self.frame
            );
            return false;
        }
        for (i, t) in self.buffer.iter().enumerate() {
            sink.set_transform(i, t);
        }
        sink.mark_dirty();
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of completed steps.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn buffer(&self) -> &TransformBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }
}
