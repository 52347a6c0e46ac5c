/// Renderer module - collaborator interfaces consumed by the rendering stages

// Module declarations
pub mod renderer;
pub mod command_list;
pub mod shader_program;
pub mod vertex_array;
pub mod outline;
#[cfg(test)]
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use command_list::*;
pub use shader_program::*;
pub use vertex_array::*;
pub use outline::{bounding_box_outline, bounding_sphere_outline, DEFAULT_SPHERE_SEGMENTS};
