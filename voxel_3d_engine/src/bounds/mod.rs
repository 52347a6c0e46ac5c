//! Bounding volume geometry: simplified proxies used for culling.
//!
//! All types here are plain `Copy` values: they own no resources and are
//! rebuilt every time they are needed, never mutated in place.

mod sphere;
mod cone;
mod aabb;
mod frustum;

pub use sphere::Sphere;
pub use cone::Cone;
pub use aabb::Aabb;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
