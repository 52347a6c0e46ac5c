//! Entity module: composition root and its optional capabilities.
//!
//! An entity owns at most one transform (spatial), one graphics component
//! (visual) and one camera (viewpoint). Any of them may be absent; the
//! rendering stages skip entities lacking what they need.

mod entity;
mod capabilities;
mod transform_component;
mod graphics_component;
mod camera_component;

pub use entity::Entity;
pub use capabilities::Capabilities;
pub use transform_component::TransformComponent;
pub use graphics_component::{
    GraphicsComponent, GraphicsKind, SvoGraphics, MeshGraphics,
    BoundingBoxOutline, BoundingSphereOutline,
};
pub use camera_component::{CameraComponent, CameraDesc};
