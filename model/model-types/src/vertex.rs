//! Flattened render vertex.

use bytemuck::{Pod, Zeroable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A flattened render vertex with position, normal, and texture coordinate.
///
/// One `MeshVertex` is materialized per face corner. Corners are never
/// shared between faces, even when the same attribute combination recurs,
/// so the vertex buffer can be bound as-is with no attribute remapping.
///
/// # Memory Layout
///
/// Total size: 32 bytes (a stride of 8 f32s)
/// - position: 12 bytes (3 x f32)
/// - normal: 12 bytes (3 x f32)
/// - uv: 8 bytes (2 x f32)
///
/// # Example
///
/// ```
/// use model_types::MeshVertex;
///
/// let vertex = MeshVertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.5, 0.5]);
///
/// assert_eq!(std::mem::size_of::<MeshVertex>(), 32);
/// assert_eq!(vertex.uv, [0.5, 0.5]);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Vertex normal.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Number of f32 lanes per vertex (the buffer stride in floats).
    pub const STRIDE_FLOATS: usize = 8;

    /// Create a vertex from its attribute arrays.
    ///
    /// # Arguments
    ///
    /// * `position` - Object-space position [x, y, z]
    /// * `normal` - Vertex normal [x, y, z]
    /// * `uv` - Texture coordinate [u, v]
    #[must_use]
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}
