//! Built-in primitive meshes: triangle, quad, cube.
//!
//! Meshes are produced as CPU-side interleaved vertex/index data and
//! uploaded through any [`GraphicsDevice`] with
//! [`create_vertex_array`](create_vertex_array).

use bytemuck::{Pod, Zeroable};
use std::sync::Arc;

use crate::error::Result;
use crate::graphics_device::{
    BufferDesc, BufferHint, BufferUsage, GraphicsDevice, IndexType, ShaderDataType, VertexArray,
    VertexArrayDesc, VertexLayout,
};

/// One interleaved vertex: position, color, texture coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

/// CPU-side mesh: interleaved vertices plus a u32 index list
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// The vertex layout all built-in primitives share
    pub fn vertex_layout() -> VertexLayout {
        VertexLayout::new(&[
            ShaderDataType::Float3,
            ShaderDataType::Float3,
            ShaderDataType::Float2,
        ])
    }

    /// Vertex data as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Single triangle in the Y/Z plane, one color per corner
pub fn triangle() -> MeshData {
    MeshData {
        vertices: vec![
            Vertex {
                position: [0.0, -0.5, -0.5],
                color: [1.0, 0.0, 0.0],
                uv: [0.0, 0.0],
            },
            Vertex {
                position: [0.0, 0.5, -0.5],
                color: [0.0, 1.0, 0.0],
                uv: [1.0, 0.0],
            },
            Vertex {
                position: [0.0, 0.0, 0.5],
                color: [0.0, 0.0, 1.0],
                uv: [0.5, 1.0],
            },
        ],
        indices: vec![0, 1, 2],
    }
}

/// Unit quad in the Y/Z plane, facing +X
pub fn quad() -> MeshData {
    MeshData {
        vertices: vec![
            Vertex {
                position: [0.0, -0.5, -0.5],
                color: [1.0, 0.0, 0.0],
                uv: [0.0, 0.0],
            },
            Vertex {
                position: [0.0, 0.5, -0.5],
                color: [0.0, 1.0, 0.0],
                uv: [1.0, 0.0],
            },
            Vertex {
                position: [0.0, 0.5, 0.5],
                color: [0.0, 0.0, 1.0],
                uv: [1.0, 1.0],
            },
            Vertex {
                position: [0.0, -0.5, 0.5],
                color: [1.0, 1.0, 0.0],
                uv: [0.0, 1.0],
            },
        ],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

/// Unit cube centered at the origin, one color per corner
pub fn cube() -> MeshData {
    let corners = [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ];
    let colors = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ];
    let uvs = [
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
    ];

    let vertices = (0..8)
        .map(|i| Vertex {
            position: corners[i],
            color: colors[i],
            uv: uvs[i],
        })
        .collect();

    // Two triangles per face, counter-clockwise seen from outside
    let indices = vec![
        0, 2, 1, 0, 3, 2, // -Z
        4, 5, 6, 4, 6, 7, // +Z
        0, 1, 5, 0, 5, 4, // -Y
        3, 7, 6, 3, 6, 2, // +Y
        0, 4, 7, 0, 7, 3, // -X
        1, 2, 6, 1, 6, 5, // +X
    ];

    MeshData { vertices, indices }
}

/// Upload a mesh through a device, producing a drawable vertex array
///
/// Creates the vertex buffer (and the index buffer if the mesh is
/// indexed), writes the data, and binds everything into a vertex array.
///
/// # Errors
///
/// Propagates any resource-creation error from the device.
pub fn create_vertex_array(
    device: &mut dyn GraphicsDevice,
    mesh: &MeshData,
) -> Result<Arc<dyn VertexArray>> {
    let vertex_bytes = mesh.vertex_bytes();
    let vertex_buffer = device.create_buffer(BufferDesc {
        size: vertex_bytes.len() as u64,
        usage: BufferUsage::Vertex,
        hint: BufferHint::Static,
    })?;
    vertex_buffer.update(0, vertex_bytes)?;

    let index_buffer = if mesh.indices.is_empty() {
        None
    } else {
        let index_bytes = mesh.index_bytes();
        let buffer = device.create_buffer(BufferDesc {
            size: index_bytes.len() as u64,
            usage: BufferUsage::Index,
            hint: BufferHint::Static,
        })?;
        buffer.update(0, index_bytes)?;
        Some(buffer)
    };

    device.create_vertex_array(VertexArrayDesc {
        vertex_buffer,
        layout: MeshData::vertex_layout(),
        index_buffer,
        index_type: IndexType::U32,
        vertex_count: mesh.vertices.len() as u32,
        index_count: mesh.indices.len() as u32,
    })
}

#[cfg(test)]
#[path = "primitives_tests.rs"]
mod tests;
