//! Bounding-box wireframe geometry.
//!
//! Every submodel owns one fixed-size slot in a shared pair of buffers, so
//! a slot's offsets follow from the submodel's position alone and no side
//! table is needed: vertex slot `9k`, index slot `25k`.
//!
//! # Slot Layout
//!
//! ```text
//! vertices (stride 3 floats, 9 per box)
//!     [0..8]  - box corners, max-z ring then min-z ring
//!     [8]     - box center
//! indices (25 per box)
//!     [0..24] - 12 edges as line-list index pairs
//!     [24]    - the center, drawn as a single point
//! ```

use crate::Aabb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Corner pairs forming the twelve edges of a box.
///
/// Pairs index into [`Aabb::corners`]: the first row traces the max-z
/// ring, the second the min-z ring, the third connects the rings.
const BOX_EDGES: [[u32; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Shared wireframe buffers outlining submodel bounding boxes.
///
/// Boxes are appended in submodel encounter order; box `k` always occupies
/// vertex slots `[9k, 9k + 9)` and index slots `[25k, 25k + 25)`. A
/// renderer binds [`BoxOutline::vertex_floats`] as a position-only vertex
/// buffer and draws, per box, 24 indices as a line list followed by 1
/// index as a point.
///
/// A box built from the empty sentinel [`Aabb`] still occupies its slot
/// (the stride must stay addressable) but carries non-finite coordinates;
/// callers that draw outlines for empty submodels should skip them via
/// [`Aabb::is_empty`].
///
/// # Example
///
/// ```
/// use model_types::{Aabb, BoxOutline, Point3};
///
/// let mut outline = BoxOutline::new();
/// outline.push_box(&Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 1.0),
/// ));
///
/// assert_eq!(outline.box_count(), 1);
/// assert_eq!(outline.lines(0).len(), 24);
/// assert_eq!(outline.point(0), 8); // the center vertex
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxOutline {
    /// Position-only vertex buffer, nine entries per box.
    pub vertices: Vec<[f32; 3]>,
    /// Line/point index buffer, 25 entries per box.
    pub indices: Vec<u32>,
}

impl BoxOutline {
    /// Vertices appended per box: eight corners plus the center.
    pub const VERTICES_PER_BOX: usize = 9;

    /// Indices appended per box: twelve edge pairs plus one point.
    pub const INDICES_PER_BOX: usize = 25;

    /// The leading line-list portion of a box's index slot.
    pub const LINE_INDICES_PER_BOX: usize = 24;

    /// Create empty outline buffers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create outline buffers pre-sized for `boxes` boxes.
    #[must_use]
    pub fn with_capacity(boxes: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(boxes * Self::VERTICES_PER_BOX),
            indices: Vec::with_capacity(boxes * Self::INDICES_PER_BOX),
        }
    }

    /// Append one box slot: nine vertices and 25 indices.
    ///
    /// The corners land in [`Aabb::corners`] order, followed by
    /// [`Aabb::center`]; the edge pairs reference them relative to the
    /// slot base, so earlier boxes are never touched.
    pub fn push_box(&mut self, bounds: &Aabb) {
        #[allow(clippy::cast_possible_truncation)]
        // Truncation: outline indices are u32, outlines with >4B vertices are unsupported
        let base = self.vertices.len() as u32;

        for corner in bounds.corners() {
            self.vertices.push(corner.into());
        }
        self.vertices.push(bounds.center().into());

        for [a, b] in BOX_EDGES {
            self.indices.push(base + a);
            self.indices.push(base + b);
        }
        // The center point sits after the eight corners.
        self.indices.push(base + 8);
    }

    /// Number of boxes held in the buffers.
    #[inline]
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.vertices.len() / Self::VERTICES_PER_BOX
    }

    /// Check if no boxes have been appended.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex slot of box `box_index` (a multiple of 9).
    #[inline]
    #[must_use]
    pub const fn vertex_offset(box_index: usize) -> usize {
        box_index * Self::VERTICES_PER_BOX
    }

    /// First index slot of box `box_index` (a multiple of 25).
    ///
    /// This is the index-buffer offset a renderer passes to its draw call
    /// for the box of the submodel at position `box_index`.
    #[inline]
    #[must_use]
    pub const fn index_offset(box_index: usize) -> usize {
        box_index * Self::INDICES_PER_BOX
    }

    /// The 24 line-list indices outlining box `box_index`.
    ///
    /// Consecutive entries pair up into segment endpoints.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is out of range.
    #[must_use]
    pub fn lines(&self, box_index: usize) -> &[u32] {
        let offset = Self::index_offset(box_index);
        &self.indices[offset..offset + Self::LINE_INDICES_PER_BOX]
    }

    /// The index of the center point of box `box_index`.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is out of range.
    #[must_use]
    pub fn point(&self, box_index: usize) -> u32 {
        self.indices[Self::index_offset(box_index) + Self::LINE_INDICES_PER_BOX]
    }

    /// The vertex buffer as raw floats (stride 3: x, y, z).
    #[must_use]
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}
