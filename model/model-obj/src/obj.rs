//! Wavefront OBJ subset loader.
//!
//! Parses the OBJ records below into a draw-ready [`Model`] in one pass:
//! a flattened stride-8 vertex buffer, a `u32` index buffer, one
//! [`SubModel`] per object group, and a [`BoxOutline`] slot per group.
//!
//! # Format
//!
//! ```text
//! v  x y z            - position
//! vn x y z            - normal
//! vt u v [w]          - texture coordinate (w ignored)
//! o  name             - start a new object group
//! f  p/t/n p/t/n p/t/n - triangle, 1-based indices into the pools above
//! ```
//!
//! Anything else (comments, materials, smoothing groups) is ignored.
//! Faces must be triangles, and every corner must carry all three indices;
//! attribute references resolve against the pools as populated so far, so
//! forward references are rejected.
//!
//! # Groups
//!
//! Each `o` record closes the previous group and opens a new one. A group
//! also opens implicitly when a `v` or `f` record arrives with none open,
//! so a source without any `o` records still yields exactly one submodel
//! spanning the whole index buffer. An implicitly opened group that has
//! not drawn any faces yet is claimed by the first `o` record rather than
//! closed, so positions pooled ahead of the marker (a common OBJ export
//! layout) land in the named group's bounding box; once it holds faces,
//! an `o` record closes it as a leading submodel of its own. A source
//! with no `v` or `f` records yields no submodels at all.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::SplitWhitespace;

use model_types::{Aabb, BoxOutline, MeshVertex, Model, Point3, SubModel, Vector3};
use tracing::{debug, info, warn};

use crate::error::{ObjError, ObjResult, PoolKind};

/// Options controlling how an OBJ source is parsed.
///
/// The default is strict: the first invalid record aborts the whole parse
/// and no model is returned.
///
/// # Example
///
/// ```
/// use model_obj::{parse_obj_with, LoadOptions};
///
/// let source = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 one\nvn 0 0 1\nvt 0 0\nf 1/1/1 2/1/1 3/1/1\n";
/// let options = LoadOptions { lenient: true };
///
/// let model = parse_obj_with(&source[..], &options).unwrap();
/// assert_eq!(model.face_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Skip invalid records instead of aborting.
    ///
    /// Only record-scoped failures are skippable (malformed fields,
    /// non-triangle faces, dangling references); a source that cannot be
    /// read still aborts. Note that skipping an attribute record shifts
    /// the 1-based indices of every later entry in that pool, so faces
    /// that depended on it are usually skipped as dangling in turn.
    pub lenient: bool,
}

/// Load a model from an OBJ file.
///
/// # Arguments
///
/// * `path` - Path to the OBJ file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - Any record is invalid (see [`ObjError`])
///
/// # Example
///
/// ```no_run
/// use model_obj::load_obj;
///
/// let model = load_obj("bulb.obj").unwrap();
/// println!("Loaded {} faces in {} groups", model.face_count(), model.submodels.len());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<Model> {
    load_obj_with(path, &LoadOptions::default())
}

/// Load a model from an OBJ file with explicit [`LoadOptions`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if a record
/// is invalid and `options.lenient` is not set.
pub fn load_obj_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> ObjResult<Model> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ObjError::SourceUnavailable {
        path: Some(path.to_path_buf()),
        source: e,
    })?;

    parse_obj_with(BufReader::new(file), options)
}

/// Parse a model from any buffered OBJ source.
///
/// In-memory sources parse directly, since `&[u8]` implements `BufRead`.
///
/// # Errors
///
/// Returns an error if the reader fails or any record is invalid.
///
/// # Example
///
/// ```
/// use model_obj::parse_obj;
///
/// let source = b"o tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nvt 0 0\nf 1/1/1 2/1/1 3/1/1\n";
/// let model = parse_obj(&source[..]).unwrap();
///
/// assert_eq!(model.face_count(), 1);
/// assert_eq!(model.submodels.len(), 1);
/// ```
pub fn parse_obj<R: BufRead>(reader: R) -> ObjResult<Model> {
    parse_obj_with(reader, &LoadOptions::default())
}

/// Parse a model from any buffered OBJ source with explicit [`LoadOptions`].
///
/// # Errors
///
/// Returns an error if the reader fails, or if a record is invalid and
/// `options.lenient` is not set.
pub fn parse_obj_with<R: BufRead>(reader: R, options: &LoadOptions) -> ObjResult<Model> {
    let mut state = ParseState::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ObjError::SourceUnavailable {
            path: None,
            source: e,
        })?;
        let number = index + 1;

        if let Err(error) = state.record(number, &line) {
            if options.lenient && error.is_record_error() {
                warn!(line = number, %error, "Skipping invalid record");
                continue;
            }
            return Err(error);
        }
    }

    Ok(state.finish())
}

/// Attribute pools and output buffers accumulated by one parse pass.
#[derive(Default)]
struct ParseState {
    positions: Vec<Point3<f32>>,
    normals: Vec<Vector3<f32>>,
    texcoords: Vec<[f32; 2]>,

    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    submodels: Vec<SubModel>,
    outline: BoxOutline,

    open: Option<OpenGroup>,
}

/// A group that has been started but not yet finalized.
struct OpenGroup {
    offset: usize,
    bounds: Aabb,
    /// Whether an `o` record owns this group. Implicitly opened groups
    /// stay unnamed and can be claimed by the next `o` record while they
    /// hold no faces.
    named: bool,
}

impl ParseState {
    /// Dispatch one source line on its leading keyword.
    fn record(&mut self, line: usize, text: &str) -> ObjResult<()> {
        let mut fields = text.split_whitespace();

        match fields.next() {
            Some("v") => self.position(line, text, &mut fields),
            Some("vn") => self.normal(line, text, &mut fields),
            Some("vt") => self.texcoord(line, text, &mut fields),
            Some("o") => {
                self.start_group(fields.next());
                Ok(())
            }
            Some("f") => self.face(line, text, &mut fields),
            // Comments, materials, smoothing groups: ignored.
            _ => Ok(()),
        }
    }

    /// Handle a `v` record: pool the position and fold it into the open
    /// group's bounding box.
    fn position(
        &mut self,
        line: usize,
        record: &str,
        fields: &mut SplitWhitespace<'_>,
    ) -> ObjResult<()> {
        let point = Point3::new(
            parse_float(fields, line, record)?,
            parse_float(fields, line, record)?,
            parse_float(fields, line, record)?,
        );

        self.positions.push(point);
        self.current_group().bounds.expand_to_include(&point);
        Ok(())
    }

    /// Handle a `vn` record. Normals do not touch the bounding box.
    fn normal(
        &mut self,
        line: usize,
        record: &str,
        fields: &mut SplitWhitespace<'_>,
    ) -> ObjResult<()> {
        let normal = Vector3::new(
            parse_float(fields, line, record)?,
            parse_float(fields, line, record)?,
            parse_float(fields, line, record)?,
        );

        self.normals.push(normal);
        Ok(())
    }

    /// Handle a `vt` record. An optional third component is ignored.
    fn texcoord(
        &mut self,
        line: usize,
        record: &str,
        fields: &mut SplitWhitespace<'_>,
    ) -> ObjResult<()> {
        let uv = [
            parse_float(fields, line, record)?,
            parse_float(fields, line, record)?,
        ];

        self.texcoords.push(uv);
        Ok(())
    }

    /// Handle an `o` record: close the previous group, open a new one.
    ///
    /// The name is diagnostic only and is not retained.
    fn start_group(&mut self, name: Option<&str>) {
        debug!(name = name.unwrap_or(""), "Starting object group");
        let offset = self.indices.len();

        // An implicitly opened group with no faces yet is claimed by the
        // marker instead of closed empty, keeping the positions pooled
        // ahead of it in the named group's box.
        if let Some(group) = &mut self.open {
            if !group.named && group.offset == offset {
                group.named = true;
                return;
            }
        }

        self.close_group();
        self.open = Some(OpenGroup {
            offset,
            bounds: Aabb::empty(),
            named: true,
        });
    }

    /// Handle an `f` record: resolve all three corners, then append them.
    ///
    /// Resolution happens before any buffer grows, so a rejected face
    /// leaves the model untouched.
    fn face(
        &mut self,
        line: usize,
        record: &str,
        fields: &mut SplitWhitespace<'_>,
    ) -> ObjResult<()> {
        let corners: Vec<&str> = fields.collect();
        if corners.len() != 3 {
            return Err(ObjError::UnsupportedFaceArity {
                line,
                corners: corners.len(),
            });
        }

        let a = self.corner(line, record, corners[0])?;
        let b = self.corner(line, record, corners[1])?;
        let c = self.corner(line, record, corners[2])?;

        self.current_group();

        #[allow(clippy::cast_possible_truncation)]
        // Truncation: mesh indices are u32, models with >4B corners are unsupported
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[a, b, c]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
        Ok(())
    }

    /// Resolve one `p/t/n` corner into a flattened vertex.
    fn corner(&self, line: usize, record: &str, corner: &str) -> ObjResult<MeshVertex> {
        let mut parts = corner.split('/');
        let p = parse_index(parts.next(), line, record)?;
        let t = parse_index(parts.next(), line, record)?;
        let n = parse_index(parts.next(), line, record)?;
        if parts.next().is_some() {
            return Err(ObjError::malformed(line, record));
        }

        let position = resolve(&self.positions, p, PoolKind::Position, line)?;
        let uv = resolve(&self.texcoords, t, PoolKind::Texcoord, line)?;
        let normal = resolve(&self.normals, n, PoolKind::Normal, line)?;

        Ok(MeshVertex::new((*position).into(), (*normal).into(), *uv))
    }

    /// The open group, opening an implicit one at the current index count
    /// if none is open.
    fn current_group(&mut self) -> &mut OpenGroup {
        let offset = self.indices.len();
        self.open.get_or_insert_with(|| OpenGroup {
            offset,
            bounds: Aabb::empty(),
            named: false,
        })
    }

    /// Finalize the open group, if any, into a submodel.
    ///
    /// Takes the group out of the state and consumes it, so the same
    /// group can never be finalized twice.
    fn close_group(&mut self) {
        if let Some(group) = self.open.take() {
            let count = self.indices.len() - group.offset;
            self.outline.push_box(&group.bounds);
            self.submodels.push(SubModel {
                offset: group.offset,
                count,
                bounds: group.bounds,
                outline_index: self.submodels.len(),
            });
        }
    }

    /// Close the trailing group and hand the buffers over as a model.
    fn finish(mut self) -> Model {
        self.close_group();

        info!(
            vertices = self.vertices.len(),
            faces = self.indices.len() / 3,
            submodels = self.submodels.len(),
            "Loaded OBJ model"
        );

        Model {
            vertices: self.vertices,
            indices: self.indices,
            submodels: self.submodels,
            outline: self.outline,
        }
    }
}

/// Parse the next whitespace field of a record as a float.
fn parse_float(fields: &mut SplitWhitespace<'_>, line: usize, record: &str) -> ObjResult<f32> {
    fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| ObjError::malformed(line, record))
}

/// Parse one 1-based corner index field.
fn parse_index(field: Option<&str>, line: usize, record: &str) -> ObjResult<usize> {
    field
        .filter(|field| !field.is_empty())
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| ObjError::malformed(line, record))
}

/// Look up a 1-based attribute reference in its pool.
///
/// Index 0 and indices past the pool's current size are rejected; pools
/// are populated strictly in file order, so this also rejects forward
/// references.
fn resolve<'a, T>(pool: &'a [T], index: usize, kind: PoolKind, line: usize) -> ObjResult<&'a T> {
    index
        .checked_sub(1)
        .and_then(|i| pool.get(i))
        .ok_or(ObjError::DanglingReference {
            line,
            pool: kind,
            index,
            len: pool.len(),
        })
}
