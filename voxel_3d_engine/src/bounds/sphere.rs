/// Bounding sphere.
///
/// Used both for entity bounds (center = entity position, radius scaled by
/// the entity's uniform scale) and for the camera's far-plane region.

use glam::Vec3;
use super::cone::Cone;

/// Sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center in world space
    pub center: Vec3,
    /// Radius (>= 0)
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Test if two spheres overlap. Touching spheres intersect.
    ///
    /// Squared-distance comparison, no square root.
    pub fn intersects(&self, other: &Sphere) -> bool {
        let radius_sum = self.radius + other.radius;
        self.center.distance_squared(other.center) <= radius_sum * radius_sum
    }

    /// Test if this sphere overlaps a cone. See `Cone::intersects_sphere`.
    pub fn intersects_cone(&self, cone: &Cone) -> bool {
        cone.intersects_sphere(self)
    }

    /// Test if a point lies inside or on the sphere.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

#[cfg(test)]
#[path = "sphere_tests.rs"]
mod tests;
