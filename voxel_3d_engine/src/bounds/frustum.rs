/// Frustum: six clipping planes.
///
/// Exact counterpart of the camera's sphere + cone region, used by
/// `FrustumPlaneCuller`. Each plane is a Vec4 (A, B, C, D) with an
/// inward-pointing unit normal: a point P is inside when
/// `dot(normal, P) + D >= 0` for all six planes.

use glam::{Mat4, Vec3, Vec4};
use super::sphere::Sphere;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract planes from `projection * view` (Gribb & Hartmann).
    ///
    /// Assumes a [0, 1] clip-space depth range, as produced by glam's
    /// `perspective_rh`.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let mut planes = [
            row3 + row0, // left
            row3 - row0, // right
            row3 + row1, // bottom
            row3 - row1, // top
            row2,        // near (z >= 0)
            row3 - row2, // far
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from a point to one plane (positive = inside).
    pub fn signed_distance(&self, plane: usize, point: Vec3) -> f32 {
        let p = self.planes[plane];
        p.truncate().dot(point) + p.w
    }

    /// Test if a sphere is (potentially) inside or intersecting.
    ///
    /// Rejects only when the sphere lies entirely behind one plane, so it
    /// may accept spheres near frustum corners.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        (0..6).all(|i| self.signed_distance(i, sphere.center) >= -sphere.radius)
    }

    /// Test if a point is inside all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        (0..6).all(|i| self.signed_distance(i, point) >= 0.0)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
