/// WorldRenderer: per-frame orchestration of the world passes.
///
/// `update` runs transform update, culling and the main draw in that
/// order. The two debug passes are invoked separately and reuse the
/// visibility flags left by the last cull of the same scene.

use std::sync::Arc;
use winit::dpi::PhysicalSize;
use crate::error::{Error, Result};
use crate::renderer::{CommandList, Renderer, ShaderProgram, Viewport};
use crate::{engine_debug, engine_info, engine_warn};
use super::culler::{Culler, SphereConeCuller};
use super::drawer::{
    Drawer, ForwardDrawer, BoundingBoxDrawer, BoundingSphereDrawer, ShaderPrograms, SunLight,
};
use super::frame::FrameStats;
use super::scene::Scene;
use super::updater::{TransformUpdater, Updater};

/// Construction parameters of a `WorldRenderer`
#[derive(Debug, Clone, PartialEq)]
pub struct WorldRendererConfig {
    pub main_program: String,
    pub bounding_box_program: String,
    pub bounding_sphere_program: String,
    pub sun_light: SunLight,
}

impl Default for WorldRendererConfig {
    fn default() -> Self {
        Self {
            main_program: "main".to_string(),
            bounding_box_program: "boundingbox".to_string(),
            bounding_sphere_program: "boundingsphere".to_string(),
            sun_light: SunLight::default(),
        }
    }
}

pub struct WorldRenderer {
    config: WorldRendererConfig,
    programs: ShaderPrograms,
    window_size: PhysicalSize<u32>,

    updater: Box<dyn Updater>,
    culler: Box<dyn Culler>,
    drawer: ForwardDrawer,
    bounding_box_drawer: BoundingBoxDrawer,
    bounding_sphere_drawer: BoundingSphereDrawer,

    stats: FrameStats,
}

impl WorldRenderer {
    /// Load the three shader programs and read the window size once
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` if a program cannot be loaded.
    pub fn new(renderer: &mut dyn Renderer, config: WorldRendererConfig) -> Result<Self> {
        let programs = ShaderPrograms {
            main: load_program(renderer, &config.main_program)?,
            bounding_box: load_program(renderer, &config.bounding_box_program)?,
            bounding_sphere: load_program(renderer, &config.bounding_sphere_program)?,
        };
        let window_size = renderer.window_size();
        let drawer = ForwardDrawer::new(
            Viewport::from_size(window_size.width, window_size.height),
            config.sun_light,
        );

        engine_info!("voxel3d::WorldRenderer", "World renderer created ({}x{})",
            window_size.width, window_size.height);

        Ok(Self {
            config,
            programs,
            window_size,
            updater: Box::new(TransformUpdater::new()),
            culler: Box::new(SphereConeCuller::new()),
            drawer,
            bounding_box_drawer: BoundingBoxDrawer::new(),
            bounding_sphere_drawer: BoundingSphereDrawer::new(),
            stats: FrameStats::default(),
        })
    }

    /// Run one frame: transform update, culling, main draw
    pub fn update(&mut self, scene: &mut Scene, cmd: &mut dyn CommandList) -> Result<()> {
        self.stats.frame_index += 1;
        {
            let mut ctx = scene.frame_context(&mut self.stats);
            self.updater.update(&mut ctx)?;
            self.culler.cull(&mut ctx);
        }
        scene.mark_culled();
        let mut ctx = scene.frame_context(&mut self.stats);
        self.drawer.draw(&mut ctx, &self.programs, cmd)
    }

    /// Transform update stage alone
    pub fn recalculate_matrices(&mut self, scene: &mut Scene) -> Result<()> {
        let mut ctx = scene.frame_context(&mut self.stats);
        self.updater.update(&mut ctx)
    }

    /// Culling stage alone
    pub fn cull(&mut self, scene: &mut Scene) {
        let mut ctx = scene.frame_context(&mut self.stats);
        self.culler.cull(&mut ctx);
        scene.mark_culled();
    }

    /// Main draw stage alone, with whatever flags the last cull left
    pub fn render(&mut self, scene: &mut Scene, cmd: &mut dyn CommandList) -> Result<()> {
        let mut ctx = scene.frame_context(&mut self.stats);
        self.drawer.draw(&mut ctx, &self.programs, cmd)
    }

    /// Debug pass: bounding-box wireframes of the visible entities
    pub fn render_bounding_boxes(&mut self, scene: &mut Scene, cmd: &mut dyn CommandList) -> Result<()> {
        if !scene.has_been_culled() {
            engine_warn!("voxel3d::WorldRenderer", "Scene '{}': bounding boxes requested before any culling pass, skipped",
                scene.name());
            return Ok(());
        }
        let mut ctx = scene.frame_context(&mut self.stats);
        self.bounding_box_drawer.draw(&mut ctx, &self.programs, cmd)
    }

    /// Debug pass: bounding-sphere wireframes of the visible entities
    pub fn render_bounding_spheres(&mut self, scene: &mut Scene, cmd: &mut dyn CommandList) -> Result<()> {
        if !scene.has_been_culled() {
            engine_warn!("voxel3d::WorldRenderer", "Scene '{}': bounding spheres requested before any culling pass, skipped",
                scene.name());
            return Ok(());
        }
        let mut ctx = scene.frame_context(&mut self.stats);
        self.bounding_sphere_drawer.draw(&mut ctx, &self.programs, cmd)
    }

    /// Counters of the last frame
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn window_size(&self) -> PhysicalSize<u32> {
        self.window_size
    }

    /// Track a new window size; the main pass viewport follows it
    pub fn resize(&mut self, width: u32, height: u32) {
        engine_debug!("voxel3d::WorldRenderer", "Resize {}x{} -> {}x{}",
            self.window_size.width, self.window_size.height, width, height);
        self.window_size = PhysicalSize::new(width, height);
        self.drawer.set_viewport(Viewport::from_size(width, height));
    }

    /// Replace the culling strategy
    pub fn set_culler(&mut self, culler: Box<dyn Culler>) {
        self.culler = culler;
    }

    /// Replace the transform update strategy
    pub fn set_updater(&mut self, updater: Box<dyn Updater>) {
        self.updater = updater;
    }

    pub fn set_sun_light(&mut self, sun_light: SunLight) {
        self.config.sun_light = sun_light;
        self.drawer.set_sun_light(sun_light);
    }

    pub fn config(&self) -> &WorldRendererConfig {
        &self.config
    }

    pub fn programs(&self) -> &ShaderPrograms {
        &self.programs
    }
}

fn load_program(renderer: &mut dyn Renderer, name: &str) -> Result<Arc<dyn ShaderProgram>> {
    renderer.load_shader_program(name).map_err(|e| {
        Error::InitializationFailed(format!("Shader program '{}': {}", name, e))
    })
}

#[cfg(test)]
#[path = "world_renderer_tests.rs"]
mod tests;
