//! Renderer seam: where published transforms go.

use crate::buffer::{InstanceTransform, MATRIX_STRIDE};

/// Receiver of one frame's transforms. `set_transform` is called for every
/// slot in index order, then `mark_dirty` exactly once.
pub trait TransformSink {
    fn set_transform(&mut self, index: usize, transform: &InstanceTransform);
    fn mark_dirty(&mut self);

    /// Number of leading slots this sink can store. A frame is only
    /// published when every slot fits.
    fn capacity(&self) -> usize {
        usize::MAX
    }
}

/// Writes column-major instance matrices into a flat `f32` slice, the layout
/// of an instanced-mesh matrix attribute.
#[derive(Debug)]
pub struct MatrixSink<'a> {
    out: &'a mut [f32],
    dirty: bool,
}

impl<'a> MatrixSink<'a> {
    pub fn new(out: &'a mut [f32]) -> Self {
        Self { out, dirty: false }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl TransformSink for MatrixSink<'_> {
    fn set_transform(&mut self, index: usize, transform: &InstanceTransform) {
        let start = index * MATRIX_STRIDE;
        if let Some(chunk) = self.out.get_mut(start..start + MATRIX_STRIDE) {
            chunk.copy_from_slice(&transform.to_matrix());
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn capacity(&self) -> usize {
        self.out.len() / MATRIX_STRIDE
    }
}
