/// Vertex array trait and vertex array descriptor

use std::fmt;
use crate::renderer::IndexType;

/// Descriptor for creating a vertex array
#[derive(Debug, Clone)]
pub struct VertexArrayDesc {
    /// Debug name
    pub name: String,
    /// Interleaved vertex data
    pub vertex_data: Vec<u8>,
    /// Size of one vertex in bytes
    pub vertex_stride: u32,
    /// Optional index data
    pub index_data: Option<Vec<u8>>,
    /// Type of indices in `index_data`
    pub index_type: IndexType,
}

impl VertexArrayDesc {
    /// Number of vertices in `vertex_data`
    pub fn vertex_count(&self) -> u32 {
        if self.vertex_stride == 0 {
            return 0;
        }
        (self.vertex_data.len() / self.vertex_stride as usize) as u32
    }

    /// Number of indices in `index_data` (0 when not indexed)
    pub fn index_count(&self) -> u32 {
        self.index_data
            .as_ref()
            .map(|data| (data.len() / self.index_type.size_bytes() as usize) as u32)
            .unwrap_or(0)
    }
}

/// GPU vertex array (vertex buffer + optional index buffer + layout)
///
/// Owned by graphics components and only bound by the rendering stages;
/// the GPU object is released when the last Arc is dropped.
pub trait VertexArray: Send + Sync + fmt::Debug {
    /// Debug name
    fn name(&self) -> &str;

    /// Number of vertices uploaded
    fn vertex_count(&self) -> u32;

    /// Number of indices uploaded (0 when not indexed)
    fn index_count(&self) -> u32;
}
