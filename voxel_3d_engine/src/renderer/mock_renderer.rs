/// Mock Renderer for unit tests (no GPU required)
///
/// Records every command as a short string so tests can assert on the exact
/// sequence the stages issue.

use std::sync::Arc;
use rustc_hash::{FxHashMap, FxHashSet};
use winit::dpi::PhysicalSize;

use crate::renderer::{
    Renderer, CommandList, ShaderProgram, VertexArray, VertexArrayDesc,
    UniformValue, Viewport, PrimitiveTopology, IndexType,
};
use crate::error::{Error, Result};
use crate::engine_bail;

// ============================================================================
// Mock ShaderProgram
// ============================================================================

#[derive(Debug)]
pub struct MockShaderProgram {
    pub name: String,
}

impl MockShaderProgram {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl ShaderProgram for MockShaderProgram {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Mock VertexArray
// ============================================================================

#[derive(Debug)]
pub struct MockVertexArray {
    pub name: String,
    pub vertex_count: u32,
    pub index_count: u32,
}

impl MockVertexArray {
    pub fn new(name: &str, vertex_count: u32, index_count: u32) -> Self {
        Self { name: name.to_string(), vertex_count, index_count }
    }

    /// Shorthand for a shared handle
    pub fn shared(name: &str, vertex_count: u32, index_count: u32) -> Arc<dyn VertexArray> {
        Arc::new(Self::new(name, vertex_count, index_count))
    }
}

impl VertexArray for MockVertexArray {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    fn index_count(&self) -> u32 {
        self.index_count
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

pub struct MockRenderer {
    pub window_size: PhysicalSize<u32>,
    /// Program names that fail to load
    pub missing_programs: FxHashSet<String>,
    /// Programs handed out so far, by name
    pub loaded_programs: FxHashMap<String, Arc<dyn ShaderProgram>>,
    pub vertex_arrays_created: u32,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::with_window_size(800, 600)
    }

    pub fn with_window_size(width: u32, height: u32) -> Self {
        Self {
            window_size: PhysicalSize::new(width, height),
            missing_programs: FxHashSet::default(),
            loaded_programs: FxHashMap::default(),
            vertex_arrays_created: 0,
        }
    }

    /// Make `load_shader_program(name)` fail
    pub fn without_program(mut self, name: &str) -> Self {
        self.missing_programs.insert(name.to_string());
        self
    }
}

impl Renderer for MockRenderer {
    fn load_shader_program(&mut self, name: &str) -> Result<Arc<dyn ShaderProgram>> {
        if self.missing_programs.contains(name) {
            engine_bail!("voxel3d::mock", "Shader program '{}' not found", name);
        }
        let program = self.loaded_programs
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MockShaderProgram::new(name)) as Arc<dyn ShaderProgram>);
        Ok(program.clone())
    }

    fn create_vertex_array(&mut self, desc: &VertexArrayDesc) -> Result<Arc<dyn VertexArray>> {
        if desc.vertex_data.is_empty() {
            return Err(Error::InvalidResource(format!("Vertex array '{}' has no vertices", desc.name)));
        }
        self.vertex_arrays_created += 1;
        Ok(Arc::new(MockVertexArray::new(&desc.name, desc.vertex_count(), desc.index_count())))
    }

    fn window_size(&self) -> PhysicalSize<u32> {
        self.window_size
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

#[derive(Debug, Default)]
pub struct MockCommandList {
    pub commands: Vec<String>,
    /// Every uniform set, in order, as (program, name, value)
    pub uniforms: Vec<(String, String, UniformValue)>,
    pub current_program: Option<String>,
    /// When set, every draw call fails
    pub fail_draws: bool,
}

impl MockCommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands starting with `prefix`
    pub fn commands_starting_with(&self, prefix: &str) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|c| c.starts_with(prefix))
            .map(|c| c.as_str())
            .collect()
    }

    /// Number of draw_arrays + draw_elements commands
    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|c| c.starts_with("draw_")).count()
    }

    /// Last value set for a uniform, whatever the program
    pub fn last_uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms
            .iter()
            .rev()
            .find(|(_, n, _)| n == name)
            .map(|(_, _, v)| *v)
    }
}

impl CommandList for MockCommandList {
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.commands.push(format!("set_viewport {}x{}", viewport.width, viewport.height));
        Ok(())
    }

    fn use_program(&mut self, program: &Arc<dyn ShaderProgram>) -> Result<()> {
        self.current_program = Some(program.name().to_string());
        self.commands.push(format!("use_program {}", program.name()));
        Ok(())
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        let program = match &self.current_program {
            Some(p) => p.clone(),
            None => engine_bail!("voxel3d::mock", "set_uniform('{}') with no program in use", name),
        };
        self.commands.push(format!("set_uniform {}", name));
        self.uniforms.push((program, name.to_string(), value));
        Ok(())
    }

    fn bind_vertex_array(&mut self, vertex_array: &Arc<dyn VertexArray>) -> Result<()> {
        self.commands.push(format!("bind_vertex_array {}", vertex_array.name()));
        Ok(())
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first_vertex: u32, vertex_count: u32) -> Result<()> {
        if self.fail_draws {
            engine_bail!("voxel3d::mock", "draw_arrays rejected");
        }
        self.commands.push(format!("draw_arrays {:?} {} {}", topology, first_vertex, vertex_count));
        Ok(())
    }

    fn draw_elements(
        &mut self,
        topology: PrimitiveTopology,
        index_count: u32,
        index_type: IndexType,
        first_index: u32,
    ) -> Result<()> {
        if self.fail_draws {
            engine_bail!("voxel3d::mock", "draw_elements rejected");
        }
        self.commands.push(format!(
            "draw_elements {:?} {} {:?} @{}",
            topology, index_count, index_type, first_index
        ));
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
