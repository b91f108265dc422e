//! Minimal OBJ parser producing a flat interleaved triangle list.
//!
//! Supported directives: `v`, `vt`, `vn`, `f`. Everything else (`o`, `g`, `s`,
//! `mtllib`, `usemtl`, ...) is ignored. Faces are fan-triangulated from their
//! first corner, so only convex planar polygons come out geometrically right.
//!
//! The loader never logs. Non-fatal conditions are handed back to the caller
//! as [`LoadWarning`]s alongside the buffer.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use glam::Vec3;

use crate::{
    error::MeshError,
    mesh::{InterleavedBuffer, MeshVertex},
};

/// What to do with a face that references a missing or out-of-range vertex.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FacePolicy {
    /// Fail the whole load with [`MeshError::MalformedFace`].
    #[default]
    Abort,
    /// Drop the face, record a [`LoadWarning::SkippedFace`] and keep going.
    SkipFace,
}

/// How `vn` vectors are treated when read.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NormalMode {
    /// Rescale to unit length; zero vectors stay zero.
    #[default]
    Normalize,
    /// Use the file's values verbatim.
    Trust,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadOptions {
    pub face_policy: FacePolicy,
    pub normals: NormalMode,
}

impl LoadOptions {
    pub fn with_face_policy(mut self, face_policy: FacePolicy) -> Self {
        self.face_policy = face_policy;
        self
    }

    pub fn with_normals(mut self, normals: NormalMode) -> Self {
        self.normals = normals;
        self
    }
}

/// Non-fatal problem found while loading. Line numbers are 1-based.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadWarning {
    /// Face with fewer than three corners.
    DegenerateFace { line: usize, corners: usize },
    /// Malformed face dropped under [`FacePolicy::SkipFace`].
    SkippedFace { line: usize, reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::DegenerateFace { line, corners } => write!(
                f,
                "line {line}: face has {corners} corner(s), need at least 3; skipped"
            ),
            LoadWarning::SkippedFace { line, reason } => {
                write!(f, "line {line}: malformed face skipped: {reason}")
            }
        }
    }
}

/// Result of a successful load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjMesh {
    pub buffer: InterleavedBuffer,
    pub warnings: Vec<LoadWarning>,
}

/// One face corner as written in the file: raw, unresolved OBJ indices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VertexRef {
    pub position: i64,
    pub texcoord: Option<i64>,
    pub normal: Option<i64>,
}

/// Load an OBJ mesh from a file path.
pub fn load_obj_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<ObjMesh, MeshError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| MeshError::SourceUnavailable {
        path: origin.clone(),
        source,
    })?;
    parse_obj(BufReader::new(file), options, &origin)
}

/// Load an OBJ mesh from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(
    reader: R,
    options: &LoadOptions,
) -> Result<ObjMesh, MeshError> {
    parse_obj(reader, options, "<reader>")
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str, options: &LoadOptions) -> Result<ObjMesh, MeshError> {
    parse_obj(io::Cursor::new(contents), options, "<string>")
}

/// Split a face token (`v`, `v/vt`, `v//vn`, `v/vt/vn`) into raw indices.
pub fn parse_vertex_ref(token: &str) -> Result<VertexRef, String> {
    let mut fields = token.split('/');
    let position = match fields.next() {
        Some(p) if !p.is_empty() => parse_index(p)?,
        _ => return Err(format!("missing position index in '{token}'")),
    };
    let texcoord = parse_optional_index(fields.next())?;
    let normal = parse_optional_index(fields.next())?;
    if fields.next().is_some() {
        return Err(format!("too many '/' fields in '{token}'"));
    }
    Ok(VertexRef {
        position,
        texcoord,
        normal,
    })
}

/// Map a raw OBJ index onto a table of `len` entries.
///
/// `i > 0` is 1-based, `i < 0` counts back from the end, `0` is never valid.
pub fn resolve_index(raw: i64, len: usize) -> Option<usize> {
    let idx = if raw > 0 {
        usize::try_from(raw - 1).ok()?
    } else if raw < 0 {
        let back = usize::try_from(raw.unsigned_abs()).ok()?;
        len.checked_sub(back)?
    } else {
        return None;
    };
    (idx < len).then_some(idx)
}

fn parse_index(field: &str) -> Result<i64, String> {
    field
        .parse::<i64>()
        .map_err(|_| format!("invalid index '{field}'"))
}

fn parse_optional_index(field: Option<&str>) -> Result<Option<i64>, String> {
    match field {
        Some(value) if !value.is_empty() => parse_index(value).map(Some),
        _ => Ok(None),
    }
}

#[derive(Default)]
struct Tables {
    positions: Vec<Vec3>,
    texcoords: Vec<[f32; 2]>,
    normals: Vec<Vec3>,
}

#[derive(Clone, Copy)]
struct Corner {
    position: usize,
    texcoord: Option<usize>,
    normal: Option<usize>,
}

fn parse_obj<R: BufRead>(
    reader: R,
    options: &LoadOptions,
    origin: &str,
) -> Result<ObjMesh, MeshError> {
    let mut tables = Tables::default();
    let mut buffer = InterleavedBuffer::new();
    let mut warnings = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line_no = line_idx + 1;
        let line = line.map_err(|source| MeshError::SourceUnavailable {
            path: origin.to_string(),
            source,
        })?;
        // Everything from '#' on is a comment, whole-line or trailing.
        let content = line.split_once('#').map_or(line.as_str(), |(before, _)| before);
        let trimmed = content.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };

        match tag {
            "v" => {
                let [x, y, z] = parse_floats::<3>(&mut parts, line_no, "v")?;
                tables.positions.push(Vec3::new(x, y, z));
            }
            "vt" => {
                let uv = parse_floats::<2>(&mut parts, line_no, "vt")?;
                tables.texcoords.push(uv);
            }
            "vn" => {
                let n = Vec3::from_array(parse_floats::<3>(&mut parts, line_no, "vn")?);
                tables.normals.push(match options.normals {
                    NormalMode::Normalize => n.normalize_or_zero(),
                    NormalMode::Trust => n,
                });
            }
            "f" => {
                let tokens: Vec<&str> = parts.collect();
                if tokens.len() < 3 {
                    warnings.push(LoadWarning::DegenerateFace {
                        line: line_no,
                        corners: tokens.len(),
                    });
                    continue;
                }
                match resolve_face(&tokens, &tables) {
                    Ok(corners) => emit_face(&corners, &tables, &mut buffer),
                    Err(reason) => match options.face_policy {
                        FacePolicy::Abort => {
                            return Err(MeshError::MalformedFace {
                                line: line_no,
                                reason,
                            });
                        }
                        FacePolicy::SkipFace => warnings.push(LoadWarning::SkippedFace {
                            line: line_no,
                            reason,
                        }),
                    },
                }
            }
            _ => {
                // Ignore other directives (o/g/s/usemtl/etc.)
            }
        }
    }

    if buffer.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    Ok(ObjMesh { buffer, warnings })
}

fn parse_floats<'a, const N: usize>(
    parts: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    directive: &'static str,
) -> Result<[f32; N], MeshError> {
    let mut out = [0.0f32; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let token = parts.next().ok_or_else(|| MeshError::InvalidAttribute {
            line: line_no,
            directive,
            reason: format!("expected {N} components, found {i}"),
        })?;
        *slot = token
            .parse::<f32>()
            .map_err(|e| MeshError::InvalidAttribute {
                line: line_no,
                directive,
                reason: format!("component {}: '{token}': {e}", i + 1),
            })?;
    }
    Ok(out)
}

fn resolve_face(tokens: &[&str], tables: &Tables) -> Result<Vec<Corner>, String> {
    tokens
        .iter()
        .map(|token| {
            let r = parse_vertex_ref(token)?;
            let position = resolve_index(r.position, tables.positions.len()).ok_or_else(|| {
                format!(
                    "position index {} out of range (have {})",
                    r.position,
                    tables.positions.len()
                )
            })?;
            let texcoord = r
                .texcoord
                .map(|raw| {
                    resolve_index(raw, tables.texcoords.len()).ok_or_else(|| {
                        format!(
                            "texcoord index {raw} out of range (have {})",
                            tables.texcoords.len()
                        )
                    })
                })
                .transpose()?;
            let normal = r
                .normal
                .map(|raw| {
                    resolve_index(raw, tables.normals.len()).ok_or_else(|| {
                        format!(
                            "normal index {raw} out of range (have {})",
                            tables.normals.len()
                        )
                    })
                })
                .transpose()?;
            Ok(Corner {
                position,
                texcoord,
                normal,
            })
        })
        .collect()
}

/// Fan-triangulate around corner 0. Attribute presence is decided once for
/// the whole face; synthesized normals follow each sub-triangle's geometry.
fn emit_face(corners: &[Corner], tables: &Tables, out: &mut InterleavedBuffer) {
    let has_normals = corners.iter().all(|c| c.normal.is_some());
    let has_uvs = corners.iter().all(|c| c.texcoord.is_some());

    for i in 1..corners.len() - 1 {
        let tri = [corners[0], corners[i], corners[i + 1]];
        let p = tri.map(|c| tables.positions[c.position]);
        let flat = (p[1] - p[0]).cross(p[2] - p[0]).normalize_or_zero();

        let vertex = |c: Corner, pos: Vec3| {
            let normal = match c.normal {
                Some(n) if has_normals => tables.normals[n],
                _ => flat,
            };
            let uv = match c.texcoord {
                Some(t) if has_uvs => tables.texcoords[t],
                _ => [0.0, 0.0],
            };
            MeshVertex::new(pos.to_array(), normal.to_array(), uv)
        };

        out.push_triangle([
            vertex(tri[0], p[0]),
            vertex(tri[1], p[1]),
            vertex(tri[2], p[2]),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::FLOATS_PER_VERTEX;
    use std::io::Write;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    fn load(src: &str) -> ObjMesh {
        load_obj_from_str(src, &LoadOptions::default()).expect("parse OBJ")
    }

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn parse_simple_triangle() {
        let mesh = load(TRIANGLE);
        assert!(mesh.warnings.is_empty());
        let verts: Vec<_> = mesh.buffer.vertices().collect();
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(verts[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[2].position, [0.0, 1.0, 0.0]);
        for v in &verts {
            assert!(approx(v.normal, [0.0, 0.0, 1.0]));
            assert_eq!(v.uv, [0.0, 0.0]);
        }
    }

    #[test]
    fn textured_triangle_with_normals() {
        let src = r#"
            v 0.0 0.0 0.0
            v 1.0 0.0 0.0
            v 0.0 1.0 0.0
            vn 1.0 0.0 0.0
            vt 0.0 0.0
            vt 1.0 0.0
            vt 0.0 1.0
            f 1/1/1 2/2/1 3/3/1
        "#;
        let verts: Vec<_> = load(src).buffer.vertices().collect();
        assert_eq!(verts[1].uv, [1.0, 0.0]);
        assert_eq!(verts[2].uv, [0.0, 1.0]);
        // File normal wins over the geometric one.
        assert!(verts.iter().all(|v| v.normal == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn polygon_fans_into_n_minus_2_triangles() {
        for n in 3..9usize {
            let mut src = String::new();
            for i in 0..n {
                let a = i as f32 / n as f32 * std::f32::consts::TAU;
                src.push_str(&format!("v {} {} 0\n", a.cos(), a.sin()));
            }
            src.push('f');
            for i in 1..=n {
                src.push_str(&format!(" {i}"));
            }
            src.push('\n');
            let mesh = load(&src);
            assert_eq!(mesh.buffer.triangle_count(), n - 2);
            assert_eq!(mesh.buffer.as_floats().len(), 3 * (n - 2) * FLOATS_PER_VERTEX);
        }
    }

    #[test]
    fn fan_is_anchored_on_first_corner() {
        let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let verts: Vec<_> = load(src).buffer.vertices().collect();
        let positions: Vec<_> = verts.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ]
        );
    }

    #[test]
    fn synthesized_normal_follows_winding() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 3 2\n";
        let verts: Vec<_> = load(src).buffer.vertices().collect();
        assert!(verts.iter().all(|v| approx(v.normal, [0.0, 0.0, -1.0])));
    }

    #[test]
    fn synthesized_normal_is_per_sub_triangle() {
        // Non-planar quad: each half gets its own flat normal.
        let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 1\nf 1 2 3 4\n";
        let verts: Vec<_> = load(src).buffer.vertices().collect();
        assert!(approx(verts[0].normal, [0.0, 0.0, 1.0]));
        assert!(approx(verts[1].normal, verts[0].normal));
        assert!(approx(verts[2].normal, verts[0].normal));

        let p0 = Vec3::from_array(verts[3].position);
        let p1 = Vec3::from_array(verts[4].position);
        let p2 = Vec3::from_array(verts[5].position);
        let expected = (p1 - p0).cross(p2 - p0).normalize().to_array();
        for v in &verts[3..] {
            assert!(approx(v.normal, expected));
        }
        assert!(!approx(expected, [0.0, 0.0, 1.0]));
    }

    #[test]
    fn attribute_presence_is_decided_per_face() {
        // Corner 4 lacks vn/vt, so the whole face falls back.
        let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
                   vn 1 0 0\nvt 0.5 0.5\n\
                   f 1/1/1 2/1/1 3/1/1 4\n";
        let verts: Vec<_> = load(src).buffer.vertices().collect();
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(approx(v.normal, [0.0, 0.0, 1.0]));
            assert_eq!(v.uv, [0.0, 0.0]);
        }
    }

    #[test]
    fn missing_texcoords_are_zero_filled() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
        assert!(load(src).buffer.vertices().all(|v| v.uv == [0.0, 0.0]));
    }

    #[test]
    fn negative_indices_count_from_end() {
        let src = "v 9 9 9\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.25 0.75\nf -3/-1 -2/-1 -1/-1\n";
        let verts: Vec<_> = load(src).buffer.vertices().collect();
        assert_eq!(verts[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(verts[2].position, [0.0, 1.0, 0.0]);
        assert!(verts.iter().all(|v| v.uv == [0.25, 0.75]));
    }

    #[test]
    fn index_resolution_bounds() {
        let len = 5;
        assert_eq!(resolve_index(len as i64, len), Some(len - 1));
        assert_eq!(resolve_index(-1, len), Some(len - 1));
        assert_eq!(resolve_index(1, len), Some(0));
        assert_eq!(resolve_index(-(len as i64), len), Some(0));
        assert_eq!(resolve_index(0, len), None);
        assert_eq!(resolve_index(len as i64 + 1, len), None);
        assert_eq!(resolve_index(-(len as i64) - 1, len), None);
        assert_eq!(resolve_index(1, 0), None);
        assert_eq!(resolve_index(i64::MIN, len), None);
    }

    #[test]
    fn out_of_range_positions_fail_the_load() {
        for face in ["f 0 1 2", "f 1 2 4", "f -4 1 2"] {
            let src = format!("v 0 0 0\nv 1 0 0\nv 0 1 0\n{face}\n");
            match load_obj_from_str(&src, &LoadOptions::default()) {
                Err(MeshError::MalformedFace { line, .. }) => assert_eq!(line, 4),
                other => panic!("expected MalformedFace for '{face}', got {other:?}"),
            }
        }
    }

    #[test]
    fn out_of_range_normal_fails_the_load() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1//1 2//1 3//1\n";
        assert!(matches!(
            load_obj_from_str(src, &LoadOptions::default()),
            Err(MeshError::MalformedFace { line: 4, .. })
        ));
    }

    #[test]
    fn skip_policy_drops_only_the_bad_face() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 7\nf 1 2 3\n";
        let opts = LoadOptions::default().with_face_policy(FacePolicy::SkipFace);
        let mesh = load_obj_from_str(src, &opts).expect("skip bad face");
        assert_eq!(mesh.buffer.triangle_count(), 1);
        assert!(matches!(
            mesh.warnings.as_slice(),
            [LoadWarning::SkippedFace { line: 4, .. }]
        ));
    }

    #[test]
    fn short_face_is_skipped_with_warning() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2\nf 1 2 3\n";
        let mesh = load(src);
        assert_eq!(mesh.buffer.triangle_count(), 1);
        assert_eq!(
            mesh.warnings,
            vec![LoadWarning::DegenerateFace {
                line: 4,
                corners: 2
            }]
        );
    }

    #[test]
    fn empty_and_comment_only_sources_are_empty_meshes() {
        for src in ["", "\n\n", "# just a comment\n   # another\n", "v 0 0 0\no thing\n"] {
            assert!(matches!(
                load_obj_from_str(src, &LoadOptions::default()),
                Err(MeshError::EmptyMesh)
            ));
        }
    }

    #[test]
    fn trailing_comments_are_ignored() {
        let src = "v 0 0 0 # origin\nv 1 0 0\nv 0 1 0#tip\nf 1 2 3 # quad\n";
        let mesh = load(src);
        assert!(mesh.warnings.is_empty());
        assert_eq!(mesh.buffer, load(TRIANGLE).buffer);
    }

    #[test]
    fn unknown_directives_are_ignored() {
        let src = format!("mtllib a.mtl\no Tri\ng group\ns off\nusemtl red\n{TRIANGLE}");
        assert_eq!(load(&src).buffer, load(TRIANGLE).buffer);
    }

    #[test]
    fn bad_attribute_reports_directive() {
        let err = load_obj_from_str("v 0 zero 0\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidAttribute {
                line: 1,
                directive: "v",
                ..
            }
        ));
        let err = load_obj_from_str("vt 0.5\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidAttribute {
                directive: "vt",
                ..
            }
        ));
    }

    #[test]
    fn vertex_ref_grammar() {
        assert_eq!(
            parse_vertex_ref("3"),
            Ok(VertexRef {
                position: 3,
                texcoord: None,
                normal: None
            })
        );
        assert_eq!(
            parse_vertex_ref("3/-2"),
            Ok(VertexRef {
                position: 3,
                texcoord: Some(-2),
                normal: None
            })
        );
        assert_eq!(
            parse_vertex_ref("3//4"),
            Ok(VertexRef {
                position: 3,
                texcoord: None,
                normal: Some(4)
            })
        );
        assert_eq!(
            parse_vertex_ref("3/2/4"),
            Ok(VertexRef {
                position: 3,
                texcoord: Some(2),
                normal: Some(4)
            })
        );
        assert!(parse_vertex_ref("/2/4").is_err());
        assert!(parse_vertex_ref("a/2/4").is_err());
        assert!(parse_vertex_ref("1/x").is_err());
        assert!(parse_vertex_ref("1/2/3/4").is_err());
    }

    #[test]
    fn normals_are_normalized_on_read_by_default() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 2\nf 1//1 2//1 3//1\n";
        let mesh = load(src);
        assert!(mesh.buffer.vertices().all(|v| approx(v.normal, [0.0, 0.0, 1.0])));

        let trusted = load_obj_from_str(
            src,
            &LoadOptions::default().with_normals(NormalMode::Trust),
        )
        .expect("parse OBJ");
        assert!(trusted.buffer.vertices().all(|v| v.normal == [0.0, 0.0, 2.0]));
    }

    #[test]
    fn unit_normals_pass_through_either_mode() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 1 0\nf 1//1 2//1 3//1\n";
        let a = load(src);
        let b = load_obj_from_str(src, &LoadOptions::default().with_normals(NormalMode::Trust))
            .expect("parse OBJ");
        assert_eq!(a.buffer, b.buffer);
    }

    #[test]
    fn degenerate_triangle_gets_zero_normal() {
        let src = "v 0 0 0\nv 1 0 0\nv 2 0 0\nf 1 2 3\n";
        assert!(load(src).buffer.vertices().all(|v| v.normal == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn loading_twice_is_bit_identical() {
        let src = "v 0 0 0\nv 1 0.3 0\nv 0.7 1 0.1\nv -0.2 0.5 0.9\nvt 0.1 0.2\nf 1/1 2/1 3/1 4/1\n";
        let a: Vec<u32> = load(src).buffer.as_floats().iter().map(|f| f.to_bits()).collect();
        let b: Vec<u32> = load(src).buffer.as_floats().iter().map(|f| f.to_bits()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn load_from_path_and_missing_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(TRIANGLE.as_bytes()).expect("write OBJ");
        let mesh = load_obj_from_path(file.path(), &LoadOptions::default()).expect("load");
        assert_eq!(mesh.buffer, load(TRIANGLE).buffer);

        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.obj");
        assert!(matches!(
            load_obj_from_path(&missing, &LoadOptions::default()),
            Err(MeshError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn reader_front_door_matches_str() {
        let mesh = load_obj_from_reader(io::Cursor::new(TRIANGLE), &LoadOptions::default())
            .expect("parse OBJ");
        assert_eq!(mesh, load(TRIANGLE));
    }
}
