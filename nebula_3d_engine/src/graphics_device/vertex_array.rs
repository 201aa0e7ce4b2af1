/// Vertex array trait and descriptor

use super::buffer::{Buffer, VertexLayout};
use std::sync::Arc;

/// Index element width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    U16,
    U32,
}

impl IndexType {
    /// Size of one index in bytes
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Descriptor for creating a vertex array
///
/// Binds a vertex buffer with its layout and an optional index buffer
/// into one drawable unit.
#[derive(Clone)]
pub struct VertexArrayDesc {
    /// Interleaved vertex data
    pub vertex_buffer: Arc<dyn Buffer>,
    /// Layout of one vertex in `vertex_buffer`
    pub layout: VertexLayout,
    /// Index buffer (None for non-indexed drawing)
    pub index_buffer: Option<Arc<dyn Buffer>>,
    /// Index element width (ignored if non-indexed)
    pub index_type: IndexType,
    /// Number of vertices in `vertex_buffer`
    pub vertex_count: u32,
    /// Number of indices in `index_buffer` (0 if non-indexed)
    pub index_count: u32,
}

/// Vertex array resource trait
pub trait VertexArray: Send + Sync {
    /// Number of vertices
    fn vertex_count(&self) -> u32;

    /// Number of indices (0 if non-indexed)
    fn index_count(&self) -> u32;

    /// Does this vertex array draw through an index buffer?
    fn is_indexed(&self) -> bool;
}
