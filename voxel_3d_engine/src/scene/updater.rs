/// Update strategies.
///
/// An Updater refreshes per-entity derived state from the frame viewpoint
/// before culling runs.

use crate::error::Result;
use super::frame::FrameContext;

/// Strategy for the transform update stage.
///
/// `&mut self` allows stateful implementations (e.g. dirty tracking).
pub trait Updater: Send + Sync {
    /// Update derived state for every entity of the frame's world.
    ///
    /// Does nothing when the frame has no viewpoint.
    fn update(&mut self, ctx: &mut FrameContext<'_>) -> Result<()>;
}

/// Recomputes every transform against the viewpoint's view matrix.
///
/// Entities without a transform are skipped.
#[derive(Debug, Default)]
pub struct TransformUpdater;

impl TransformUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl Updater for TransformUpdater {
    fn update(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
        let Some(viewpoint) = ctx.viewpoint else {
            return Ok(());
        };

        for (_, entity) in ctx.world.entities_mut() {
            if let Some(transform) = entity.transform_mut() {
                transform.recalculate_matrices(&viewpoint.view_matrix);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
