//! Transform buffer: the per-frame output consumed by instanced renderers.

use serde::{Deserialize, Serialize};

/// Floats per instance in the packed `[x, y, z, scale]` layout.
pub const QUAD_STRIDE: usize = 4;
/// Floats per instance in the column-major 4x4 matrix layout.
pub const MATRIX_STRIDE: usize = 16;

/// Position plus uniform scale for one instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceTransform {
    pub position: [f32; 3],
    pub scale: f32,
}

impl InstanceTransform {
    /// Column-major 4x4 matrix: uniform scale, no rotation, then translation.
    pub fn to_matrix(&self) -> [f32; 16] {
        let s = self.scale;
        let [x, y, z] = self.position;
        [
            s, 0.0, 0.0, 0.0, //
            0.0, s, 0.0, 0.0, //
            0.0, 0.0, s, 0.0, //
            x, y, z, 1.0,
        ]
    }

    #[inline]
    pub fn to_quad(&self) -> [f32; 4] {
        let [x, y, z] = self.position;
        [x, y, z, self.scale]
    }
}

/// One transform per particle, rewritten in full every frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformBuffer {
    slots: Vec<InstanceTransform>,
}

impl TransformBuffer {
    /// Zeroed buffer (scale 0, so nothing is visible before the first frame).
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![InstanceTransform::default(); len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&InstanceTransform> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstanceTransform> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[InstanceTransform] {
        &self.slots
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize, t: InstanceTransform) {
        self.slots[index] = t;
    }

    /// Match the pool size. Only allocates when the length changes.
    pub(crate) fn fit(&mut self, len: usize) {
        if self.slots.len() != len {
            self.slots.resize(len, InstanceTransform::default());
        }
    }

    /// Packed `[x, y, z, scale]` per instance.
    pub fn to_quads(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.slots.len() * QUAD_STRIDE);
        for t in &self.slots {
            out.extend_from_slice(&t.to_quad());
        }
        out
    }

    /// Write column-major matrices into `out`. Returns false, leaving `out`
    /// untouched, when it cannot hold every instance.
    pub fn write_matrices(&self, out: &mut [f32]) -> bool {
        if out.len() < self.slots.len() * MATRIX_STRIDE {
            return false;
        }
        for (t, chunk) in self.slots.iter().zip(out.chunks_exact_mut(MATRIX_STRIDE)) {
            chunk.copy_from_slice(&t.to_matrix());
        }
        true
    }
}
