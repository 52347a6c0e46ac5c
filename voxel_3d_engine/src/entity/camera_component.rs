/// CameraComponent: viewpoint capability.
///
/// Unlike a passive camera, this component derives everything from its
/// parameters: view and projection matrices plus the coarse visible region
/// (a sphere enclosing the frustum and a cone around the view direction)
/// used by the culling stage. Every mutator recomputes all of it.

use glam::{Mat4, Vec3};
use crate::bounds::{Cone, Sphere};

/// Parameters of a perspective camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDesc {
    /// Eye position in world space
    pub position: Vec3,
    /// Look direction (normalised on construction)
    pub direction: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CameraComponent {
    desc: CameraDesc,

    view_matrix: Mat4,
    projection_matrix: Mat4,
    bounding_sphere: Sphere,
    bounding_cone: Cone,
}

impl CameraComponent {
    pub fn new(desc: CameraDesc) -> Self {
        let mut camera = Self {
            desc,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            bounding_sphere: Sphere::new(Vec3::ZERO, 0.0),
            bounding_cone: Cone::new(Vec3::ZERO, Vec3::NEG_Z, 0.0, 0.0),
        };
        camera.desc.direction = normalize_direction(desc.direction);
        camera.recompute();
        camera
    }

    // ===== PARAMETERS =====

    pub fn desc(&self) -> &CameraDesc {
        &self.desc
    }

    pub fn position(&self) -> Vec3 {
        self.desc.position
    }

    /// Unit look direction
    pub fn direction(&self) -> Vec3 {
        self.desc.direction
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.desc.position = position;
        self.recompute();
    }

    /// Point the camera along `direction`. A zero direction falls back to -Z.
    pub fn look_to(&mut self, direction: Vec3, up: Vec3) {
        self.desc.direction = normalize_direction(direction);
        self.desc.up = up;
        self.recompute();
    }

    pub fn set_perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.desc.fov_y = fov_y;
        self.desc.aspect = aspect;
        self.desc.near = near;
        self.desc.far = far;
        self.recompute();
    }

    /// Keep the field of view and clip planes, change only the aspect ratio
    pub fn set_aspect(&mut self, aspect: f32) {
        self.desc.aspect = aspect;
        self.recompute();
    }

    // ===== DERIVED STATE =====

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Sphere enclosing the frustum between the near and far planes
    pub fn bounding_sphere(&self) -> &Sphere {
        &self.bounding_sphere
    }

    /// Cone from the eye along the view direction, wide enough for the
    /// frustum corners, reaching the far plane
    pub fn bounding_cone(&self) -> &Cone {
        &self.bounding_cone
    }

    /// Override the derived bounding sphere until the next mutation
    pub fn set_bounding_sphere(&mut self, sphere: Sphere) {
        self.bounding_sphere = sphere;
    }

    /// Override the derived bounding cone until the next mutation
    pub fn set_bounding_cone(&mut self, cone: Cone) {
        self.bounding_cone = cone;
    }

    fn recompute(&mut self) {
        let d = &self.desc;
        self.view_matrix = Mat4::look_to_rh(d.position, d.direction, view_up(d.direction, d.up));
        self.projection_matrix = Mat4::perspective_rh(d.fov_y, d.aspect, d.near, d.far);

        // Sphere centred halfway between the clip planes, reaching the far corners
        let tan_half_fov = (d.fov_y * 0.5).tan();
        let half_depth = (d.far - d.near) * 0.5;
        let far_height = d.far * tan_half_fov;
        let far_width = far_height * d.aspect;
        let center = d.position + d.direction * (d.near + half_depth);
        let radius = Vec3::new(far_width, far_height, half_depth).length();
        self.bounding_sphere = Sphere::new(center, radius);

        let half_diagonal = (tan_half_fov * (1.0 + d.aspect * d.aspect).sqrt()).atan();
        self.bounding_cone = Cone::new(d.position, d.direction, half_diagonal, d.far);
    }
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self::new(CameraDesc::default())
    }
}

fn normalize_direction(direction: Vec3) -> Vec3 {
    direction.try_normalize().unwrap_or(Vec3::NEG_Z)
}

/// `up` unless it is (nearly) parallel to `direction`, which would make the
/// view basis degenerate; then any vector orthogonal to `direction`
fn view_up(direction: Vec3, up: Vec3) -> Vec3 {
    if direction.cross(up).length_squared() > 1e-6 {
        up
    } else {
        direction.any_orthonormal_vector()
    }
}

#[cfg(test)]
#[path = "camera_component_tests.rs"]
mod tests;
