/// Entity: identity plus up to three owned capabilities.
///
/// Components are moved in at construction and owned exclusively; an
/// entity is never copied, so no two entities share a component.

use crate::{engine_debug, engine_trace};
use super::capabilities::Capabilities;
use super::transform_component::TransformComponent;
use super::graphics_component::GraphicsComponent;
use super::camera_component::CameraComponent;

#[derive(Debug)]
pub struct Entity {
    id: u32,
    name: String,
    transform: Option<TransformComponent>,
    graphics: Option<GraphicsComponent>,
    camera: Option<CameraComponent>,
}

impl Entity {
    /// Create an entity, taking ownership of whichever components are given
    ///
    /// # Arguments
    ///
    /// * `id` - Caller-assigned identifier
    /// * `name` - Display name (not required to be unique)
    /// * `transform` - Spatial capability
    /// * `graphics` - Visual capability
    /// * `camera` - Viewpoint capability
    pub fn new(
        id: u32,
        name: impl Into<String>,
        transform: Option<TransformComponent>,
        graphics: Option<GraphicsComponent>,
        camera: Option<CameraComponent>,
    ) -> Self {
        let name = name.into();
        engine_debug!("voxel3d::Entity", "Constructing entity. id: {}, name: {}", id, name);
        Self { id, name, transform, graphics, camera }
    }

    /// Entity with no capability yet
    pub fn empty(id: u32, name: impl Into<String>) -> Self {
        Self::new(id, name, None, None, None)
    }

    pub fn with_transform(mut self, transform: TransformComponent) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_graphics(mut self, graphics: GraphicsComponent) -> Self {
        self.graphics = Some(graphics);
        self
    }

    pub fn with_camera(mut self, camera: CameraComponent) -> Self {
        self.camera = Some(camera);
        self
    }

    // ===== IDENTITY =====

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ===== CAPABILITIES =====

    pub fn transform(&self) -> Option<&TransformComponent> {
        self.transform.as_ref()
    }

    pub fn transform_mut(&mut self) -> Option<&mut TransformComponent> {
        self.transform.as_mut()
    }

    pub fn graphics(&self) -> Option<&GraphicsComponent> {
        self.graphics.as_ref()
    }

    pub fn graphics_mut(&mut self) -> Option<&mut GraphicsComponent> {
        self.graphics.as_mut()
    }

    pub fn camera(&self) -> Option<&CameraComponent> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut CameraComponent> {
        self.camera.as_mut()
    }

    /// Transform and graphics borrowed together, if both are present.
    ///
    /// Culling writes visibility while reading the transform, which needs
    /// disjoint borrows of the two slots.
    pub fn renderable_mut(&mut self) -> Option<(&TransformComponent, &mut GraphicsComponent)> {
        match (&self.transform, &mut self.graphics) {
            (Some(transform), Some(graphics)) => Some((transform, graphics)),
            _ => None,
        }
    }

    /// Transform and graphics, if both are present
    pub fn renderable(&self) -> Option<(&TransformComponent, &GraphicsComponent)> {
        match (&self.transform, &self.graphics) {
            (Some(transform), Some(graphics)) => Some((transform, graphics)),
            _ => None,
        }
    }

    /// Mask of the components this entity owns
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::TRANSFORM, self.transform.is_some());
        caps.set(Capabilities::GRAPHICS, self.graphics.is_some());
        caps.set(Capabilities::CAMERA, self.camera.is_some());
        caps
    }

    /// True if the entity owns every component in `required`
    pub fn has(&self, required: Capabilities) -> bool {
        self.capabilities().contains(required)
    }
}

impl Drop for Entity {
    fn drop(&mut self) {
        engine_trace!("voxel3d::Entity", "Destructing entity. id: {}, name: {}", self.id, self.name);
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
