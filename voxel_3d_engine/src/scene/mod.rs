//! Scene module
//!
//! Entity storage (World, Scene, SceneManager), the explicit per-frame
//! context, and the rendering stages (updating, culling, drawing) with the
//! WorldRenderer that sequences them.

mod world;
mod scene;
mod scene_manager;
mod frame;
mod updater;
mod culler;
mod drawer;
mod world_renderer;
#[cfg(test)]
mod test_fixtures;

pub use world::{World, EntityKey};
pub use scene::Scene;
pub use scene_manager::SceneManager;
pub use frame::{FrameContext, FrameStats, Viewpoint};
pub use updater::{Updater, TransformUpdater};
pub use culler::{
    Culler, SphereConeCuller, BruteForceCuller, FrustumPlaneCuller, entity_bounding_sphere,
};
pub use drawer::{
    Drawer, ForwardDrawer, BoundingBoxDrawer, BoundingSphereDrawer, ShaderPrograms, SunLight,
};
pub use world_renderer::{WorldRenderer, WorldRendererConfig};
