/// Bounding cone: directional approximation of a view frustum.
///
/// The cone starts at `apex`, opens along `axis` with `half_angle`, and is
/// capped at `range` along the axis (measured on the axis, not slanted).

use glam::Vec3;
use super::sphere::Sphere;

/// Finite right circular cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    /// Tip of the cone (camera eye)
    pub apex: Vec3,
    /// Unit direction the cone opens towards
    pub axis: Vec3,
    /// Angle between the axis and the cone surface, in radians
    pub half_angle: f32,
    /// Extent along the axis
    pub range: f32,
}

impl Cone {
    /// Create a cone. `axis` is normalized; a zero axis falls back to -Z.
    pub fn new(apex: Vec3, axis: Vec3, half_angle: f32, range: f32) -> Self {
        Self {
            apex,
            axis: axis.try_normalize().unwrap_or(Vec3::NEG_Z),
            half_angle,
            range,
        }
    }

    /// Test if a sphere overlaps this cone.
    ///
    /// With `v = center - apex` and `a = v·axis` (distance along the axis),
    /// the sphere is rejected when:
    /// - its signed distance to the cone surface,
    ///   `cos(θ)·|v - a·axis| - a·sin(θ)`, exceeds the radius (outside the angle)
    /// - `a > range + radius` (beyond the cap)
    /// - `a < -radius` (behind the apex)
    ///
    /// Conservative near the apex: a sphere just behind the apex but
    /// touching the mirrored cone region may be accepted.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let v = sphere.center - self.apex;
        let along = v.dot(self.axis);

        if along > self.range + sphere.radius || along < -sphere.radius {
            return false;
        }

        let lateral = (v.length_squared() - along * along).max(0.0).sqrt();
        let (sin, cos) = self.half_angle.sin_cos();
        let distance_to_surface = cos * lateral - along * sin;

        distance_to_surface <= sphere.radius
    }

    /// Test if a point lies inside the cone.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.intersects_sphere(&Sphere::new(point, 0.0))
    }
}

#[cfg(test)]
#[path = "cone_tests.rs"]
mod tests;
