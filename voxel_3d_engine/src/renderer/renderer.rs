/// Renderer trait - factory for the GPU objects the world renderer binds

use std::sync::Arc;
use winit::dpi::PhysicalSize;

use crate::error::Result;
use crate::renderer::{ShaderProgram, VertexArray, VertexArrayDesc};

/// Main renderer trait
///
/// Implemented by backend-specific renderers. The world renderer only uses
/// it at construction time (program lookup, window size); resource loading
/// collaborators use it to create the vertex arrays owned by graphics
/// components.
pub trait Renderer: Send + Sync {
    /// Load a linked shader program by name
    ///
    /// # Errors
    ///
    /// Returns an error if the backend has no program with that name or
    /// linking failed.
    fn load_shader_program(&mut self, name: &str) -> Result<Arc<dyn ShaderProgram>>;

    /// Upload vertex (and optional index) data into a new vertex array
    fn create_vertex_array(&mut self, desc: &VertexArrayDesc) -> Result<Arc<dyn VertexArray>>;

    /// Current window (default framebuffer) size in pixels
    fn window_size(&self) -> PhysicalSize<u32>;
}
