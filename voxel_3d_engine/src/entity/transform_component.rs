/// TransformComponent: spatial capability.
///
/// Local position, uniform scale and orientation, plus the matrices derived
/// from them and the camera's view matrix. The derived matrices are only
/// refreshed by `recalculate_matrices`; setters leave them stale until the
/// next transform update stage.

use glam::{Mat3, Mat4, Quat, Vec3};

#[derive(Debug, Clone)]
pub struct TransformComponent {
    position: Vec3,
    scale: f32,
    orientation: Quat,

    // Derived state, consistent with `last_view_matrix` and the local
    // transform as of the last recalculation.
    model_matrix: Mat4,
    view_model_matrix: Mat4,
    normal_matrix: Mat3,
    last_view_matrix: Mat4,
}

impl TransformComponent {
    /// Create a transform. Derived matrices are computed against an
    /// identity view so they are defined before the first frame.
    pub fn new(position: Vec3, scale: f32, orientation: Quat) -> Self {
        let mut transform = Self {
            position,
            scale,
            orientation,
            model_matrix: Mat4::IDENTITY,
            view_model_matrix: Mat4::IDENTITY,
            normal_matrix: Mat3::IDENTITY,
            last_view_matrix: Mat4::IDENTITY,
        };
        transform.recalculate_matrices(&Mat4::IDENTITY);
        transform
    }

    /// Transform at `position` with unit scale and no rotation
    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, 1.0, Quat::IDENTITY)
    }

    // ===== LOCAL TRANSFORM =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Uniform scale factor
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation.normalize();
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Apply `rotation` on top of the current orientation
    pub fn rotate(&mut self, rotation: Quat) {
        self.orientation = (rotation * self.orientation).normalize();
    }

    // ===== DERIVED MATRICES =====

    /// Recompute the derived matrices for a new view matrix.
    ///
    /// Pure function of `view` and the local transform: calling it twice
    /// with the same inputs yields bit-identical results.
    pub fn recalculate_matrices(&mut self, view: &Mat4) {
        self.model_matrix = Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation,
            self.position,
        );
        self.view_model_matrix = *view * self.model_matrix;
        self.normal_matrix = Mat3::from_mat4(self.view_model_matrix).inverse().transpose();
        self.last_view_matrix = *view;
    }

    /// Local-to-world matrix
    pub fn model_matrix(&self) -> &Mat4 {
        &self.model_matrix
    }

    /// Local-to-view matrix ("MV" uniform)
    pub fn view_model_matrix(&self) -> &Mat4 {
        &self.view_model_matrix
    }

    /// Inverse transpose of the view-model rotation/scale, for view-space normals
    pub fn normal_matrix(&self) -> &Mat3 {
        &self.normal_matrix
    }

    /// View matrix used by the last recalculation
    pub fn last_view_matrix(&self) -> &Mat4 {
        &self.last_view_matrix
    }
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

#[cfg(test)]
#[path = "transform_component_tests.rs"]
mod tests;
