//! Conformance tests for the OBJ loader's buffer structure.
//!
//! These tests build OBJ sources programmatically and verify the
//! cross-buffer guarantees a renderer relies on:
//! - Submodels tile the index buffer contiguously and in file order
//! - Every submodel owns exactly one bounding box outline slot
//! - Outline slots sit at a fixed stride and reference only themselves
//!
//! To run: cargo test -p model-obj obj_conformance

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fmt::Write;

use model_obj::{load_obj, parse_obj, ObjError};
use model_types::{BoxOutline, Model, Point3};
use tempfile::tempdir;

/// Incrementally writes OBJ records while tracking global pool sizes,
/// so face indices stay valid across groups.
struct SourceBuilder {
    text: String,
    positions: usize,
    normals: usize,
    texcoords: usize,
}

impl SourceBuilder {
    fn new() -> Self {
        Self {
            text: String::from("# generated fixture\n"),
            positions: 0,
            normals: 0,
            texcoords: 0,
        }
    }

    /// Append an object group spanning the box from `min` to `max`:
    /// four positions chosen so the group's bounds equal the box exactly,
    /// one normal, one texture coordinate, and two triangles.
    fn push_box_group(&mut self, name: &str, min: [f32; 3], max: [f32; 3]) {
        writeln!(self.text, "o {name}").unwrap();

        let corners = [
            [min[0], min[1], min[2]],
            [max[0], min[1], min[2]],
            [max[0], max[1], max[2]],
            [min[0], max[1], max[2]],
        ];
        for corner in corners {
            writeln!(self.text, "v {} {} {}", corner[0], corner[1], corner[2]).unwrap();
        }
        writeln!(self.text, "vn 0 0 1").unwrap();
        writeln!(self.text, "vt 0 0").unwrap();

        let p = self.positions;
        let n = self.normals + 1;
        let t = self.texcoords + 1;
        writeln!(self.text, "f {}/{t}/{n} {}/{t}/{n} {}/{t}/{n}", p + 1, p + 2, p + 3).unwrap();
        writeln!(self.text, "f {}/{t}/{n} {}/{t}/{n} {}/{t}/{n}", p + 1, p + 3, p + 4).unwrap();

        self.positions += 4;
        self.normals += 1;
        self.texcoords += 1;
    }
}

/// A three-group source shaped like a desk lamp: wide base, thin stem,
/// flaring shade.
fn lamp_source() -> String {
    let mut builder = SourceBuilder::new();
    builder.push_box_group("base", [-4.0, -4.0, 0.0], [4.0, 4.0, 1.0]);
    builder.push_box_group("stem", [-0.5, -0.5, 1.0], [0.5, 0.5, 7.0]);
    builder.push_box_group("shade", [-2.0, -2.0, 7.0], [2.0, 2.0, 9.0]);
    builder.text
}

/// Assert every structural guarantee the loader makes, independent of
/// the source that produced the model.
fn assert_well_formed(model: &Model) {
    assert_eq!(model.index_count() % 3, 0, "indices come in triangles");
    assert_eq!(
        model.vertex_count(),
        model.index_count(),
        "flattened corners are never shared"
    );
    for (i, &index) in model.indices.iter().enumerate() {
        assert_eq!(index as usize, i, "indices form the identity sequence");
    }

    // Submodels tile the index buffer in order, without gaps or overlap.
    let mut expected_offset = 0;
    for (k, submodel) in model.submodels.iter().enumerate() {
        assert_eq!(submodel.offset, expected_offset, "submodel {k} offset");
        assert_eq!(submodel.outline_index, k, "submodel {k} outline slot");
        expected_offset += submodel.count;
    }
    assert_eq!(expected_offset, model.index_count(), "counts cover the buffer");

    // One outline slot per submodel, at fixed stride.
    assert_eq!(model.outline.box_count(), model.submodels.len());
    assert_eq!(
        model.outline.vertices.len(),
        model.submodels.len() * BoxOutline::VERTICES_PER_BOX
    );
    assert_eq!(
        model.outline.indices.len(),
        model.submodels.len() * BoxOutline::INDICES_PER_BOX
    );

    for (k, submodel) in model.submodels.iter().enumerate() {
        let first = BoxOutline::vertex_offset(k);

        // Slot indices stay inside the slot's own nine vertices.
        for &line_index in model.outline.lines(k) {
            let v = line_index as usize;
            assert!(
                v >= first && v < first + BoxOutline::VERTICES_PER_BOX,
                "slot {k} line index {line_index} escapes its slot"
            );
        }
        assert_eq!(
            model.outline.point(k) as usize,
            first + BoxOutline::VERTICES_PER_BOX - 1,
            "slot {k} point index"
        );

        if !submodel.bounds.is_empty() {
            let center = submodel.bounds.center();
            assert_eq!(
                model.outline.vertices[first + 8],
                [center.x, center.y, center.z],
                "slot {k} center vertex"
            );
            for corner in &model.outline.vertices[first..first + 8] {
                let point = Point3::new(corner[0], corner[1], corner[2]);
                assert!(
                    submodel.bounds.contains(&point),
                    "slot {k} corner {corner:?} outside its bounds"
                );
            }
        }
    }
}

// =============================================================================
// Buffer Structure
// =============================================================================

#[test]
fn test_lamp_groups_structure() {
    let model = parse_obj(lamp_source().as_bytes()).unwrap();
    assert_well_formed(&model);

    assert_eq!(model.submodels.len(), 3);
    assert_eq!(model.face_count(), 6);
    assert_eq!(model.vertex_count(), 18);
    for submodel in &model.submodels {
        assert_eq!(submodel.count, 6);
        assert_eq!(submodel.face_count(), 2);
    }
}

#[test]
fn test_source_without_groups_is_one_submodel() {
    let mut builder = SourceBuilder::new();
    builder.push_box_group("only", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    // Strip the `o` record, leaving bare geometry.
    let source: String = builder
        .text
        .lines()
        .filter(|line| !line.starts_with('o'))
        .fold(String::new(), |mut text, line| {
            text.push_str(line);
            text.push('\n');
            text
        });

    let model = parse_obj(source.as_bytes()).unwrap();
    assert_well_formed(&model);

    assert_eq!(model.submodels.len(), 1);
    assert_eq!(model.submodels[0].count, model.index_count());
}

#[test]
fn test_geometry_before_first_group() {
    let mut source = String::from("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nvt 0 0\nf 1/1/1 2/1/1 3/1/1\n");
    let mut builder = SourceBuilder::new();
    builder.positions = 3;
    builder.normals = 1;
    builder.texcoords = 1;
    builder.push_box_group("named", [5.0, 5.0, 5.0], [6.0, 6.0, 6.0]);
    source.push_str(builder.text.trim_start_matches("# generated fixture\n"));

    let model = parse_obj(source.as_bytes()).unwrap();
    assert_well_formed(&model);

    // The loose triangle lands in a leading, implicitly opened submodel.
    assert_eq!(model.submodels.len(), 2);
    assert_eq!(model.submodels[0].count, 3);
    assert_eq!(model.submodels[1].count, 6);
}

#[test]
fn test_empty_groups_keep_their_slots() {
    let mut builder = SourceBuilder::new();
    writeln!(builder.text, "o before").unwrap();
    builder.push_box_group("middle", [0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    writeln!(builder.text, "o after").unwrap();

    let model = parse_obj(builder.text.as_bytes()).unwrap();
    assert_well_formed(&model);

    assert_eq!(model.submodels.len(), 3);
    assert_eq!(model.submodels[0].count, 0);
    assert!(model.submodels[0].bounds.is_empty());
    assert_eq!(model.submodels[1].count, 6);
    assert_eq!(model.submodels[2].count, 0);
    assert_eq!(model.outline.box_count(), 3);
}

#[test]
fn test_empty_source() {
    let model = parse_obj(&b""[..]).unwrap();
    assert_well_formed(&model);
    assert!(model.is_empty());
}

#[test]
fn test_many_groups() {
    let mut builder = SourceBuilder::new();
    for k in 0..50 {
        let z = k as f32;
        builder.push_box_group(&format!("slab{k}"), [0.0, 0.0, z], [1.0, 1.0, z + 0.5]);
    }

    let model = parse_obj(builder.text.as_bytes()).unwrap();
    assert_well_formed(&model);

    assert_eq!(model.submodels.len(), 50);
    assert_eq!(model.face_count(), 100);
    assert_eq!(model.outline.vertices.len(), 50 * BoxOutline::VERTICES_PER_BOX);
    assert_eq!(model.outline.indices.len(), 50 * BoxOutline::INDICES_PER_BOX);
    assert_eq!(model.submodels[49].bounds.min, Point3::new(0.0, 0.0, 49.0));
}

// =============================================================================
// Bounding Boxes
// =============================================================================

#[test]
fn test_group_bounds_are_exact() {
    let model = parse_obj(lamp_source().as_bytes()).unwrap();

    let expected = [
        ([-4.0, -4.0, 0.0], [4.0, 4.0, 1.0]),
        ([-0.5, -0.5, 1.0], [0.5, 0.5, 7.0]),
        ([-2.0, -2.0, 7.0], [2.0, 2.0, 9.0]),
    ];
    for (submodel, (min, max)) in model.submodels.iter().zip(expected) {
        assert_eq!(submodel.bounds.min, Point3::new(min[0], min[1], min[2]));
        assert_eq!(submodel.bounds.max, Point3::new(max[0], max[1], max[2]));
    }

    // The whole-model bounds are the union over submodels.
    let bounds = model.bounds();
    assert_eq!(bounds.min, Point3::new(-4.0, -4.0, 0.0));
    assert_eq!(bounds.max, Point3::new(4.0, 4.0, 9.0));
}

#[test]
fn test_bounds_fold_position_records_not_face_references() {
    // Group B draws triangles but pools no positions of its own, so its
    // box stays the empty sentinel even though it has geometry.
    let source = b"o A\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nvt 0 0\nf 1/1/1 2/1/1 3/1/1\no B\nf 1/1/1 2/1/1 3/1/1\n";
    let model = parse_obj(&source[..]).unwrap();
    assert_well_formed(&model);

    assert_eq!(model.submodels[1].count, 3);
    assert!(model.submodels[1].bounds.is_empty());
    assert!(!model.submodels[0].bounds.is_empty());
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn test_strict_errors_carry_line_numbers() {
    let mut builder = SourceBuilder::new();
    builder.push_box_group("ok", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    let good_lines = builder.text.lines().count();

    builder.text.push_str("v not a number\n");
    match parse_obj(builder.text.as_bytes()) {
        Err(ObjError::MalformedRecord { line, .. }) => assert_eq!(line, good_lines + 1),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_dangling_reference_aborts_cleanly() {
    let mut builder = SourceBuilder::new();
    builder.push_box_group("ok", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    builder.text.push_str("f 99/1/1 1/1/1 2/1/1\n");

    assert!(matches!(
        parse_obj(builder.text.as_bytes()),
        Err(ObjError::DanglingReference { index: 99, .. })
    ));
}

// =============================================================================
// Disk Round Trip
// =============================================================================

#[test]
fn test_load_from_disk_matches_in_memory_parse() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("lamp.obj");
    std::fs::write(&path, lamp_source()).expect("write fixture");

    let from_disk = load_obj(&path).expect("load fixture");
    let in_memory = parse_obj(lamp_source().as_bytes()).expect("parse fixture");

    assert_well_formed(&from_disk);
    assert_eq!(from_disk.vertices, in_memory.vertices);
    assert_eq!(from_disk.indices, in_memory.indices);
    assert_eq!(from_disk.submodels, in_memory.submodels);
    assert_eq!(from_disk.outline.vertices, in_memory.outline.vertices);
    assert_eq!(from_disk.outline.indices, in_memory.outline.indices);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("absent.obj");

    match load_obj(&path) {
        Err(ObjError::SourceUnavailable { path: Some(p), .. }) => {
            assert!(p.ends_with("absent.obj"));
        }
        other => panic!("expected SourceUnavailable with a path, got {other:?}"),
    }
}
