//! Core model types for Prism.
//!
//! This crate provides the foundational types for loading and drawing
//! segmented triangle models:
//!
//! - [`MeshVertex`] - A flattened render vertex (position, normal, uv)
//! - [`Model`] - Draw-ready vertex/index buffers with submodel structure
//! - [`SubModel`] - A contiguous draw range with its bounding box
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`BoxOutline`] - Shared wireframe buffers for submodel bounding boxes
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero renderer dependencies**. It can be
//! used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Asset pipelines
//!
//! # Buffer Layout
//!
//! All geometry is `f32`, laid out exactly as a renderer binds it:
//!
//! - Triangle vertices: stride 8 floats `[position(3), normal(3), uv(2)]`
//! - Triangle indices: `u32`, three per face
//! - Outline vertices: stride 3 floats, position only
//! - Outline indices: `u32`, 25 per box (24 line-list entries plus 1 point)
//!
//! # Example
//!
//! ```
//! use model_types::{Aabb, BoxOutline, Point3};
//!
//! let mut outline = BoxOutline::new();
//! let bounds = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
//! outline.push_box(&bounds);
//!
//! assert_eq!(outline.box_count(), 1);
//! assert_eq!(outline.vertices.len(), BoxOutline::VERTICES_PER_BOX);
//! assert_eq!(outline.indices.len(), BoxOutline::INDICES_PER_BOX);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod model;
mod outline;
mod submodel;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use model::Model;
pub use outline::BoxOutline;
pub use submodel::SubModel;
pub use vertex::MeshVertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
