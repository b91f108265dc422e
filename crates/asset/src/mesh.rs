//! CPU-side interleaved mesh produced by the OBJ loader.
//!
//! Layout per vertex: `[px, py, pz, nx, ny, nz, u, v]`, triangle list,
//! no index buffer. Every 3 consecutive vertices form one triangle.

/// Number of `f32` values per vertex record.
pub const FLOATS_PER_VERTEX: usize = 8;
/// Float offset of the position attribute inside a record.
pub const POSITION_OFFSET: usize = 0;
/// Float offset of the normal attribute inside a record.
pub const NORMAL_OFFSET: usize = 3;
/// Float offset of the texture coordinate attribute inside a record.
pub const UV_OFFSET: usize = 6;

/// Vertex with position/normal/uv. Values are in object space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    fn from_record(r: &[f32]) -> Self {
        Self {
            position: [r[0], r[1], r[2]],
            normal: [r[3], r[4], r[5]],
            uv: [r[6], r[7]],
        }
    }
}

/// Axis-aligned bounding box over vertex positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Bounds {
    pub fn center(&self) -> [f32; 3] {
        [
            0.5 * (self.min[0] + self.max[0]),
            0.5 * (self.min[1] + self.max[1]),
            0.5 * (self.min[2] + self.max[2]),
        ]
    }

    pub fn extent(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Flat interleaved triangle list, ready for a single vertex-buffer upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterleavedBuffer {
    data: Vec<f32>,
}

impl InterleavedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fully-expanded triangle (corners a, b, c in order).
    pub fn push_triangle(&mut self, corners: [MeshVertex; 3]) {
        for c in corners {
            self.data.extend_from_slice(&c.position);
            self.data.extend_from_slice(&c.normal);
            self.data.extend_from_slice(&c.uv);
        }
    }

    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        &self.data
    }

    pub fn into_floats(self) -> Vec<f32> {
        self.data
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.data.len() / FLOATS_PER_VERTEX
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over records as structured vertices.
    pub fn vertices(&self) -> impl Iterator<Item = MeshVertex> + '_ {
        self.data
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(MeshVertex::from_record)
    }

    /// Returns `None` for an empty buffer.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut it = self.vertices();
        let first = it.next()?.position;
        let mut b = Bounds {
            min: first,
            max: first,
        };
        for v in it {
            for axis in 0..3 {
                b.min[axis] = b.min[axis].min(v.position[axis]);
                b.max[axis] = b.max[axis].max(v.position[axis]);
            }
        }
        Some(b)
    }
}
