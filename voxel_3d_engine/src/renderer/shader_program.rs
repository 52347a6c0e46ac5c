/// Shader program trait and uniform values

use std::fmt;
use glam::{Mat3, Mat4, Vec3, Vec4};

/// Linked shader program
///
/// Implemented by backend-specific program types. Uniforms are set through
/// the `CommandList` on the program currently in use.
pub trait ShaderProgram: Send + Sync + fmt::Debug {
    /// Name the program was loaded under ("main", "boundingbox", ...)
    fn name(&self) -> &str;
}

/// Value for a named uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat3(Mat3),
    Mat4(Mat4),
}

impl UniformValue {
    /// Raw bytes in std140-agnostic tight packing (column-major matrices)
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            UniformValue::Float(v) => bytemuck::bytes_of(v),
            UniformValue::Int(v) => bytemuck::bytes_of(v),
            UniformValue::Vec3(v) => bytemuck::bytes_of(v),
            UniformValue::Vec4(v) => bytemuck::bytes_of(v),
            UniformValue::Mat3(v) => bytemuck::bytes_of(v),
            UniformValue::Mat4(v) => bytemuck::bytes_of(v),
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        UniformValue::Float(v)
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        UniformValue::Int(v)
    }
}

impl From<Vec3> for UniformValue {
    fn from(v: Vec3) -> Self {
        UniformValue::Vec3(v)
    }
}

impl From<Vec4> for UniformValue {
    fn from(v: Vec4) -> Self {
        UniformValue::Vec4(v)
    }
}

impl From<Mat3> for UniformValue {
    fn from(v: Mat3) -> Self {
        UniformValue::Mat3(v)
    }
}

impl From<Mat4> for UniformValue {
    fn from(v: Mat4) -> Self {
        UniformValue::Mat4(v)
    }
}
