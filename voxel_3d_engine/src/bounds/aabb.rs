/// Axis-aligned bounding box in local space.
///
/// Graphics components derive their bounding-sphere radius and their
/// bounding-box outline from it.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min: min.min(max), max: min.max(max) }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self { min: center - half_extents, max: center + half_extents }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Radius of the smallest sphere around the local origin enclosing the box.
    ///
    /// Culling centers entity spheres on the entity position, so the radius
    /// is measured from the origin rather than from the box center.
    pub fn bounding_sphere_radius(&self) -> f32 {
        self.corners()
            .iter()
            .map(|corner| corner.length())
            .fold(0.0, f32::max)
    }

    /// The 8 corners. Bit 0 of the index selects max.x, bit 1 max.y, bit 2 max.z.
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 != 0 { self.max.x } else { self.min.x },
                if i & 2 != 0 { self.max.y } else { self.min.y },
                if i & 4 != 0 { self.max.z } else { self.min.z },
            )
        })
    }

    /// Transform by a matrix, returning the enclosing box (Arvo's method).
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Aabb { min: new_min, max: new_max }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
