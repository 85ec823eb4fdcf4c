//! Submodel draw ranges.

use std::ops::Range;

use crate::Aabb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One named object group of a model: a contiguous slice of the index
/// buffer plus the bounding box of the positions recorded while the group
/// was open.
///
/// Submodels are stored on the [`Model`](crate::Model) in encounter order.
/// Their index ranges are disjoint and contiguous, partitioning the whole
/// index buffer, so a renderer can issue one indexed draw per submodel and
/// cover the model exactly once.
///
/// # Example
///
/// ```
/// use model_types::{Aabb, SubModel};
///
/// let submodel = SubModel {
///     offset: 6,
///     count: 9,
///     bounds: Aabb::empty(),
///     outline_index: 1,
/// };
///
/// assert_eq!(submodel.index_range(), 6..15);
/// assert_eq!(submodel.face_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubModel {
    /// Offset of the submodel's first entry in the model's index buffer.
    pub offset: usize,
    /// Number of index-buffer entries belonging to the submodel.
    pub count: usize,
    /// Bounding box of the positions recorded while the submodel was open,
    /// or the empty sentinel if none were.
    pub bounds: Aabb,
    /// Slot of the submodel's box in the shared [`BoxOutline`](crate::BoxOutline)
    /// buffers. Equal to the submodel's position in encounter order.
    pub outline_index: usize,
}

impl SubModel {
    /// The range of the model's index buffer covered by this submodel.
    #[inline]
    #[must_use]
    pub const fn index_range(&self) -> Range<usize> {
        self.offset..self.offset + self.count
    }

    /// Number of triangles in the submodel.
    #[inline]
    #[must_use]
    pub const fn face_count(&self) -> usize {
        self.count / 3
    }

    /// Check if the submodel owns no faces.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}
