/// Scene: a world of entities plus the camera it is viewed through.

use crate::error::{Error, Result};
use crate::entity::Entity;
use crate::engine_debug;
use super::frame::{FrameContext, FrameStats, Viewpoint};
use super::world::{EntityKey, World};

#[derive(Debug)]
pub struct Scene {
    name: String,
    world: World,
    active_camera: Option<EntityKey>,
    /// Set once a culling pass has run on this scene
    culled: bool,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world: World::new(),
            active_camera: None,
            culled: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Shorthand for `world_mut().add_entity(entity)`
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        self.world.add_entity(entity)
    }

    /// Remove an entity. Removing the active camera clears it.
    pub fn remove_entity(&mut self, key: EntityKey) -> Option<Entity> {
        if self.active_camera == Some(key) {
            self.clear_active_camera();
        }
        self.world.remove_entity(key)
    }

    // ===== ACTIVE CAMERA =====

    /// Make `key` the viewpoint of this scene.
    ///
    /// The entity is not required to own a camera component; while it does
    /// not, the scene has no viewpoint and every stage is a no-op.
    pub fn set_active_camera(&mut self, key: EntityKey) -> Result<()> {
        let entity = self.world.entity(key).ok_or_else(|| {
            Error::InvalidResource(format!("Scene '{}': unknown entity key for active camera", self.name))
        })?;
        engine_debug!("voxel3d::Scene", "Scene '{}': active camera set to '{}'", self.name, entity.name());
        self.active_camera = Some(key);
        Ok(())
    }

    pub fn clear_active_camera(&mut self) {
        if self.active_camera.take().is_some() {
            engine_debug!("voxel3d::Scene", "Scene '{}': active camera cleared", self.name);
        }
    }

    pub fn active_camera(&self) -> Option<EntityKey> {
        self.active_camera
    }

    /// Whether visibility flags of this scene were ever produced by a cull
    pub fn has_been_culled(&self) -> bool {
        self.culled
    }

    pub(crate) fn mark_culled(&mut self) {
        self.culled = true;
    }

    /// Snapshot of the active camera, if there is one and it owns a camera component
    pub fn viewpoint(&self) -> Option<Viewpoint> {
        self.active_camera
            .and_then(|key| self.world.entity(key))
            .and_then(|entity| entity.camera())
            .map(Viewpoint::from_camera)
    }

    /// Build the context the rendering stages run against this frame
    pub fn frame_context<'a>(&'a mut self, stats: &'a mut FrameStats) -> FrameContext<'a> {
        let viewpoint = self.viewpoint();
        FrameContext::new(&mut self.world, viewpoint, stats)
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
