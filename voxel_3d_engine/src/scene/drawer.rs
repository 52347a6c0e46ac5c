/// Drawing strategies.
///
/// A Drawer walks the frame's entities and records program, uniform and
/// draw commands for the visible ones. It never allocates GPU resources:
/// every vertex array it binds is owned by a graphics component.

use std::sync::Arc;
use glam::{Vec3, Vec4};
use crate::error::Result;
use crate::entity::GraphicsKind;
use crate::renderer::{CommandList, PrimitiveTopology, IndexType, ShaderProgram, Viewport};
use super::frame::FrameContext;

/// Directional light applied by the main pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunLight {
    pub color: Vec3,
    /// World-space direction (w = 0)
    pub direction: Vec4,
    pub ambient_intensity: f32,
}

impl Default for SunLight {
    fn default() -> Self {
        Self {
            color: Vec3::new(0.7, 0.7, 0.7),
            direction: Vec4::new(1.0, 1.0, 1.0, 0.0),
            ambient_intensity: 0.5,
        }
    }
}

/// The three programs used by the world passes
#[derive(Debug, Clone)]
pub struct ShaderPrograms {
    pub main: Arc<dyn ShaderProgram>,
    pub bounding_box: Arc<dyn ShaderProgram>,
    pub bounding_sphere: Arc<dyn ShaderProgram>,
}

/// Strategy for drawing visible entities.
///
/// `&self` because drawing only reads entities; the sole frame state it
/// writes is `FrameStats::rendered_objects`. Without a viewpoint nothing
/// is recorded.
pub trait Drawer: Send + Sync {
    fn draw(
        &self,
        ctx: &mut FrameContext<'_>,
        programs: &ShaderPrograms,
        cmd: &mut dyn CommandList,
    ) -> Result<()>;
}

/// Main pass: one draw per visible entity, lit by a single sun light.
#[derive(Debug, Clone)]
pub struct ForwardDrawer {
    viewport: Viewport,
    sun_light: SunLight,
}

impl ForwardDrawer {
    pub fn new(viewport: Viewport, sun_light: SunLight) -> Self {
        Self { viewport, sun_light }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn sun_light(&self) -> &SunLight {
        &self.sun_light
    }

    pub fn set_sun_light(&mut self, sun_light: SunLight) {
        self.sun_light = sun_light;
    }
}

impl Drawer for ForwardDrawer {
    fn draw(
        &self,
        ctx: &mut FrameContext<'_>,
        programs: &ShaderPrograms,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        ctx.stats.rendered_objects = 0;
        let Some(viewpoint) = ctx.viewpoint else {
            return Ok(());
        };
        let projection = viewpoint.projection_matrix;

        cmd.set_viewport(self.viewport)?;
        cmd.use_program(&programs.main)?;
        let direction_view_space = (viewpoint.view_matrix * self.sun_light.direction).truncate();
        cmd.set_uniform("sunLight.color", self.sun_light.color.into())?;
        cmd.set_uniform("sunLight.directionViewSpace", direction_view_space.into())?;
        cmd.set_uniform("sunLight.ambientIntensity", self.sun_light.ambient_intensity.into())?;

        for (_, entity) in ctx.world.entities() {
            let Some((transform, graphics)) = entity.renderable() else {
                continue;
            };
            if !graphics.is_visible() {
                continue;
            }

            cmd.set_uniform("MV", (*transform.view_model_matrix()).into())?;
            cmd.set_uniform("P", projection.into())?;
            cmd.set_uniform("scale", transform.scale().into())?;

            match graphics.kind() {
                GraphicsKind::Svo(svo) => {
                    cmd.set_uniform("gridLength", (svo.grid_length() as f32).into())?;
                    cmd.bind_vertex_array(svo.vertex_array())?;
                    // Last point of the buffer is never submitted
                    cmd.draw_arrays(PrimitiveTopology::Points, 0, svo.point_count().saturating_sub(1))?;
                }
                GraphicsKind::Mesh(mesh) => {
                    cmd.bind_vertex_array(mesh.vertex_array())?;
                    cmd.draw_elements(PrimitiveTopology::TriangleList, mesh.index_count(), mesh.index_type(), 0)?;
                }
            }
            ctx.stats.rendered_objects += 1;
        }

        Ok(())
    }
}

/// Debug pass: 12-edge wireframe box around each visible entity.
///
/// The outline index buffer holds two 4-index loops (bottom and top
/// faces) followed by 8 indices forming the 4 vertical edges.
#[derive(Debug, Default)]
pub struct BoundingBoxDrawer;

impl BoundingBoxDrawer {
    pub fn new() -> Self {
        Self
    }
}

impl Drawer for BoundingBoxDrawer {
    fn draw(
        &self,
        ctx: &mut FrameContext<'_>,
        programs: &ShaderPrograms,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        let Some(viewpoint) = ctx.viewpoint else {
            return Ok(());
        };

        cmd.use_program(&programs.bounding_box)?;
        for (_, entity) in ctx.world.entities() {
            let Some((transform, graphics)) = entity.renderable() else {
                continue;
            };
            if !graphics.is_visible() {
                continue;
            }

            cmd.set_uniform("MV", (*transform.view_model_matrix()).into())?;
            cmd.set_uniform("P", viewpoint.projection_matrix.into())?;
            cmd.bind_vertex_array(&graphics.bounding_box().vertex_array)?;
            cmd.draw_elements(PrimitiveTopology::LineLoop, 4, IndexType::U16, 0)?;
            cmd.draw_elements(PrimitiveTopology::LineLoop, 4, IndexType::U16, 4)?;
            cmd.draw_elements(PrimitiveTopology::Lines, 8, IndexType::U16, 8)?;
        }
        Ok(())
    }
}

/// Debug pass: sphere outline around each visible entity, one line loop.
#[derive(Debug, Default)]
pub struct BoundingSphereDrawer;

impl BoundingSphereDrawer {
    pub fn new() -> Self {
        Self
    }
}

impl Drawer for BoundingSphereDrawer {
    fn draw(
        &self,
        ctx: &mut FrameContext<'_>,
        programs: &ShaderPrograms,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        let Some(viewpoint) = ctx.viewpoint else {
            return Ok(());
        };

        cmd.use_program(&programs.bounding_sphere)?;
        for (_, entity) in ctx.world.entities() {
            let Some((transform, graphics)) = entity.renderable() else {
                continue;
            };
            if !graphics.is_visible() {
                continue;
            }

            let outline = graphics.bounding_sphere();
            cmd.set_uniform("MV", (*transform.view_model_matrix()).into())?;
            cmd.set_uniform("P", viewpoint.projection_matrix.into())?;
            cmd.bind_vertex_array(&outline.vertex_array)?;
            cmd.draw_elements(PrimitiveTopology::LineLoop, outline.element_count, IndexType::U16, 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
