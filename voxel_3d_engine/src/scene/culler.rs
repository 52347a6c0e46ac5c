/// Visibility culling strategies.
///
/// A Culler writes the visibility flag of every entity that owns both a
/// transform and a graphics component, and counts the visible ones in the
/// frame stats. Implementations range from brute force (everything
/// visible) to the sphere/cone test used by default.

use crate::bounds::{Frustum, Sphere};
use crate::entity::{GraphicsComponent, TransformComponent};
use super::frame::{FrameContext, Viewpoint};

/// Strategy for the visibility culling stage.
///
/// Resets `visible_objects` on every call. Without a viewpoint the
/// visibility flags keep their previous values.
pub trait Culler: Send + Sync {
    fn cull(&mut self, ctx: &mut FrameContext<'_>);
}

/// World-space bounding sphere of an entity: its position and the
/// component radius multiplied by the uniform scale
pub fn entity_bounding_sphere(transform: &TransformComponent, graphics: &GraphicsComponent) -> Sphere {
    Sphere::new(
        transform.position(),
        graphics.bounding_sphere_radius() * transform.scale(),
    )
}

/// Run `is_visible` over every renderable entity, write the flags and count
fn mark_visible<F>(ctx: &mut FrameContext<'_>, mut is_visible: F)
where
    F: FnMut(&Viewpoint, &TransformComponent, &GraphicsComponent) -> bool,
{
    ctx.stats.visible_objects = 0;
    let Some(viewpoint) = ctx.viewpoint else {
        return;
    };

    for (_, entity) in ctx.world.entities_mut() {
        let Some((transform, graphics)) = entity.renderable_mut() else {
            continue;
        };
        let visible = is_visible(&viewpoint, transform, &*graphics);
        graphics.set_visible(visible);
        if visible {
            ctx.stats.visible_objects += 1;
        }
    }
}

/// Default culler: coarse sphere/sphere test against the camera's
/// bounding sphere, then sphere/cone test against its bounding cone.
#[derive(Debug, Default)]
pub struct SphereConeCuller;

impl SphereConeCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Culler for SphereConeCuller {
    fn cull(&mut self, ctx: &mut FrameContext<'_>) {
        mark_visible(ctx, |viewpoint, transform, graphics| {
            let sphere = entity_bounding_sphere(transform, graphics);
            viewpoint.bounding_sphere.intersects(&sphere)
                && sphere.intersects_cone(&viewpoint.bounding_cone)
        });
    }
}

/// Brute-force culler: every renderable entity is visible.
///
/// Baseline for comparison and for scenes too small to bother.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Culler for BruteForceCuller {
    fn cull(&mut self, ctx: &mut FrameContext<'_>) {
        mark_visible(ctx, |_, _, _| true);
    }
}

/// Frustum culler: bounding sphere against the six planes of
/// projection * view. Tighter than the cone near the frustum corners.
#[derive(Debug, Default)]
pub struct FrustumPlaneCuller;

impl FrustumPlaneCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Culler for FrustumPlaneCuller {
    fn cull(&mut self, ctx: &mut FrameContext<'_>) {
        let frustum = ctx.viewpoint
            .map(|viewpoint| Frustum::from_view_projection(&viewpoint.view_projection_matrix()));

        mark_visible(ctx, |_, transform, graphics| match &frustum {
            Some(frustum) => frustum.intersects_sphere(&entity_bounding_sphere(transform, graphics)),
            None => false,
        });
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
