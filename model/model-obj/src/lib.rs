//! Wavefront OBJ loading for Prism.
//!
//! This crate parses a triangles-only subset of the OBJ format into the
//! draw-ready [`Model`](model_types::Model) buffers from `model-types`:
//!
//! - `v`, `vn`, `vt` - attribute pools (positions, normals, texture coordinates)
//! - `o` - object groups, one [`SubModel`](model_types::SubModel) each
//! - `f` - triangles with full `p/t/n` corners, flattened on load
//!
//! Unrecognized records are skipped, so sources with comments, material
//! references, or smoothing groups load fine. Parsing is strict by
//! default and fails on the first invalid record; [`LoadOptions`] offers
//! a lenient mode that skips them instead.
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
//! # Example
//!
//! ```no_run
//! use model_obj::load_obj;
//!
//! let model = load_obj("bulb.obj").unwrap();
//!
//! for submodel in &model.submodels {
//!     println!(
//!         "{} indices starting at {}, box {:?}",
//!         submodel.count, submodel.offset, submodel.bounds
//!     );
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;

pub use error::{ObjError, ObjResult, PoolKind};
pub use obj::{load_obj, load_obj_with, parse_obj, parse_obj_with, LoadOptions};
