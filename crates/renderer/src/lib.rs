//! Renderer-side contract for loaded meshes: vertex layout, upload, uniforms.
//! wgpu = 23.x

use bytemuck::{Pod, PodCastError, Zeroable};
use glam::{Mat4, Vec3};
use thiserror::Error;
use wgpu::{
    Buffer, BufferUsages, Device, RenderPass, VertexBufferLayout, VertexStepMode,
    util::{BufferInitDescriptor, DeviceExt},
};

use asset::InterleavedBuffer;
use corelib::camera::OrbitCamera;

/// Vertex: position + normal + uv, bit-compatible with one
/// [`InterleavedBuffer`] record.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl GpuVertex {
    pub const LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
        array_stride: std::mem::size_of::<GpuVertex>() as u64,
        step_mode: VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
    };
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Vertex cast failed: {0:?}")]
    Cast(PodCastError),

    #[error("Too many vertices for one draw: {0} exceeds u32::MAX")]
    TooManyVertices(usize),
}

/// Vertex count as a draw range bound.
pub fn draw_vertex_count(len: usize) -> Result<u32, RenderError> {
    u32::try_from(len).map_err(|_| RenderError::TooManyVertices(len))
}

/// Reinterpret the loader's floats as vertices without copying.
pub fn vertices_from_buffer(buf: &InterleavedBuffer) -> Result<&[GpuVertex], PodCastError> {
    bytemuck::try_cast_slice(buf.as_floats())
}

/// Per-draw uniform block (16-byte aligned).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    /// xyz = world-space light position, w unused.
    pub light_pos: [f32; 4],
    /// xyz = world-space eye position, w unused.
    pub camera_pos: [f32; 4],
}

impl SceneUniform {
    pub fn new(model: Mat4, camera: &OrbitCamera, aspect: f32, light: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: camera.view().to_cols_array_2d(),
            proj: camera.proj(aspect).to_cols_array_2d(),
            light_pos: light.extend(1.0).to_array(),
            camera_pos: camera.eye().extend(1.0).to_array(),
        }
    }
}

/// Non-indexed triangle list resident on the GPU.
pub struct GpuMesh {
    vertex_buf: Buffer,
    vertex_count: u32,
}

impl GpuMesh {
    pub fn upload(
        device: &Device,
        label: &str,
        mesh: &InterleavedBuffer,
    ) -> Result<Self, RenderError> {
        let vertices = vertices_from_buffer(mesh).map_err(RenderError::Cast)?;
        let vertex_count = draw_vertex_count(vertices.len())?;
        let vertex_buf = device.create_buffer_init(&BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });
        log::debug!(
            "Uploaded mesh '{}': {} vertices, {} bytes",
            label,
            vertices.len(),
            std::mem::size_of_val(vertices)
        );
        Ok(Self {
            vertex_buf,
            vertex_count,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn draw(&self, rpass: &mut RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}
