/// Per-frame state handed explicitly to the rendering stages.
///
/// There is no global "active scene": the caller builds a `FrameContext`
/// from a scene and passes it to each stage in turn.

use glam::Mat4;
use crate::bounds::{Cone, Sphere};
use crate::entity::CameraComponent;
use super::world::World;

/// Snapshot of the active camera taken at frame start.
///
/// Stages read the viewpoint while mutating entities, so it is copied out
/// of the camera component instead of borrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub view_matrix: Mat4,
    pub projection_matrix: Mat4,
    pub bounding_sphere: Sphere,
    pub bounding_cone: Cone,
}

impl Viewpoint {
    pub fn from_camera(camera: &CameraComponent) -> Self {
        Self {
            view_matrix: *camera.view_matrix(),
            projection_matrix: *camera.projection_matrix(),
            bounding_sphere: *camera.bounding_sphere(),
            bounding_cone: *camera.bounding_cone(),
        }
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

/// Frame counters, read by diagnostic overlays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Entities marked visible by the last culling pass
    pub visible_objects: u32,
    /// Entities submitted by the last main draw pass
    pub rendered_objects: u32,
    /// Frames run through `WorldRenderer::update`
    pub frame_index: u64,
}

/// Everything a stage may touch during one frame
pub struct FrameContext<'a> {
    pub world: &'a mut World,
    /// None when the scene has no usable active camera
    pub viewpoint: Option<Viewpoint>,
    pub stats: &'a mut FrameStats,
}

impl<'a> FrameContext<'a> {
    pub fn new(world: &'a mut World, viewpoint: Option<Viewpoint>, stats: &'a mut FrameStats) -> Self {
        Self { world, viewpoint, stats }
    }
}
