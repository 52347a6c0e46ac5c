/// CommandList trait - for recording the world renderer's commands

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{ShaderProgram, UniformValue, VertexArray};

/// Command list for recording rendering commands
///
/// The stages record into a command list borrowed for the duration of one
/// pass; submission is the caller's business.
pub trait CommandList: Send + Sync {
    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Make a program current. Subsequent `set_uniform` calls target it.
    fn use_program(&mut self, program: &Arc<dyn ShaderProgram>) -> Result<()>;

    /// Set a named uniform on the current program
    ///
    /// # Arguments
    ///
    /// * `name` - Uniform name as declared in the shader (e.g. "MV", "sunLight.color")
    /// * `value` - Uniform value
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()>;

    /// Bind a vertex array for the following draws
    fn bind_vertex_array(&mut self, vertex_array: &Arc<dyn VertexArray>) -> Result<()>;

    /// Draw non-indexed primitives
    ///
    /// # Arguments
    ///
    /// * `topology` - Primitive type
    /// * `first_vertex` - Index of first vertex
    /// * `vertex_count` - Number of vertices to draw
    fn draw_arrays(&mut self, topology: PrimitiveTopology, first_vertex: u32, vertex_count: u32) -> Result<()>;

    /// Draw indexed primitives
    ///
    /// # Arguments
    ///
    /// * `topology` - Primitive type
    /// * `index_count` - Number of indices to draw
    /// * `index_type` - Type of indices in the bound index buffer
    /// * `first_index` - Offset into the index buffer, in indices
    fn draw_elements(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        index_type: IndexType,
        first_index: u32,
    ) -> Result<()>;
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-window viewport with a [0, 1] depth range
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    Points,
    Lines,
    LineLoop,
    TriangleList,
}

/// Index element type
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
