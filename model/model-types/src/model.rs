//! The draw-ready model.

use crate::{Aabb, BoxOutline, MeshVertex, SubModel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A draw-ready triangle model with per-group structure.
///
/// Owns four parallel artifacts, all produced by one load:
///
/// - a flattened [`MeshVertex`] buffer (one entry per face corner),
/// - a `u32` triangle index buffer (three consecutive entries per face),
/// - the ordered [`SubModel`] list, whose ranges partition the index
///   buffer in encounter order,
/// - a [`BoxOutline`] holding one wireframe slot per submodel.
///
/// A renderer binds the two buffer pairs once and then iterates
/// `submodels`, drawing `count` indices at `offset` for the geometry and
/// 25 indices at `BoxOutline::index_offset(outline_index)` for the box.
///
/// # Example
///
/// ```
/// use model_types::{MeshVertex, Model};
///
/// let mut model = Model::new();
/// model.vertices.push(MeshVertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]));
/// model.vertices.push(MeshVertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]));
/// model.vertices.push(MeshVertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]));
/// model.indices.extend([0, 1, 2]);
///
/// assert_eq!(model.face_count(), 1);
/// assert!(!model.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Model {
    /// Flattened vertex buffer, one entry per face corner.
    pub vertices: Vec<MeshVertex>,
    /// Triangle index buffer, three consecutive entries per face.
    pub indices: Vec<u32>,
    /// Submodel draw ranges in encounter order.
    pub submodels: Vec<SubModel>,
    /// Wireframe geometry for every submodel's bounding box.
    pub outline: BoxOutline,
}

impl Model {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of flattened vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of index-buffer entries.
    #[inline]
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the model holds no geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box over the whole model.
    ///
    /// The union of the submodel boxes; the empty sentinel if every
    /// submodel is empty (or there are none).
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.submodels
            .iter()
            .fold(Aabb::empty(), |bounds, submodel| {
                bounds.union(&submodel.bounds)
            })
    }

    /// The slice of the index buffer covered by a submodel.
    ///
    /// # Panics
    ///
    /// Panics if the submodel's range lies outside the index buffer,
    /// which can only happen if it belongs to a different model.
    #[must_use]
    pub fn submodel_indices(&self, submodel: &SubModel) -> &[u32] {
        &self.indices[submodel.index_range()]
    }

    /// The vertex buffer as raw floats (stride 8: position, normal, uv).
    #[must_use]
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn two_group_model() -> Model {
        let mut model = Model::new();
        for k in 0..6u32 {
            let x = k as f32;
            model
                .vertices
                .push(MeshVertex::new([x, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]));
            model.indices.push(k);
        }

        let first = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
        let second = Aabb::new(Point3::new(3.0, 0.0, 0.0), Point3::new(5.0, 1.0, 1.0));
        model.outline.push_box(&first);
        model.outline.push_box(&second);
        model.submodels.push(SubModel {
            offset: 0,
            count: 3,
            bounds: first,
            outline_index: 0,
        });
        model.submodels.push(SubModel {
            offset: 3,
            count: 3,
            bounds: second,
            outline_index: 1,
        });
        model
    }

    #[test]
    fn model_counts() {
        let model = two_group_model();
        assert_eq!(model.vertex_count(), 6);
        assert_eq!(model.index_count(), 6);
        assert_eq!(model.face_count(), 2);
        assert!(!model.is_empty());
        assert!(Model::new().is_empty());
    }

    #[test]
    fn model_bounds_unions_submodels() {
        let model = two_group_model();
        let bounds = model.bounds();
        assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(5.0, 1.0, 1.0));
    }

    #[test]
    fn model_bounds_empty_without_submodels() {
        assert!(Model::new().bounds().is_empty());
    }

    #[test]
    fn model_submodel_indices() {
        let model = two_group_model();
        assert_eq!(model.submodel_indices(&model.submodels[0]), &[0, 1, 2]);
        assert_eq!(model.submodel_indices(&model.submodels[1]), &[3, 4, 5]);
    }

    #[test]
    fn model_vertex_floats_stride() {
        let model = two_group_model();
        let floats = model.vertex_floats();
        assert_eq!(floats.len(), 6 * MeshVertex::STRIDE_FLOATS);
        // Second vertex starts at lane 8 with its position.
        assert_eq!(floats[8], 1.0);
    }
}
