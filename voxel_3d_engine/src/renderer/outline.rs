/// Wireframe outline geometry for the debug bounding passes.
///
/// Resource-loading collaborators build these descriptors once per graphics
/// component and upload them with `Renderer::create_vertex_array`. The
/// draw layouts are fixed and mirrored by the bounding drawers:
/// - box: indices 0..4 and 4..8 are line loops, 8..16 are line segments
/// - sphere: all indices form one line loop

use glam::Vec3;
use crate::bounds::Aabb;
use crate::renderer::{IndexType, VertexArrayDesc};

/// Segments per great circle when the caller has no preference
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 32;

/// Box outline: 8 corners, 16 u16 indices describing the 12 edges.
pub fn bounding_box_outline(aabb: &Aabb) -> VertexArrayDesc {
    let corners = aabb.corners();
    let indices: [u16; 16] = [
        0, 1, 3, 2, // loop at min.z
        4, 5, 7, 6, // loop at max.z
        0, 4, 1, 5, 3, 7, 2, 6, // verticals
    ];

    VertexArrayDesc {
        name: "bounding_box".to_string(),
        vertex_data: bytemuck::cast_slice::<Vec3, u8>(&corners).to_vec(),
        vertex_stride: std::mem::size_of::<Vec3>() as u32,
        index_data: Some(bytemuck::cast_slice::<u16, u8>(&indices).to_vec()),
        index_type: IndexType::U16,
    }
}

/// Sphere outline: three great circles (XY, XZ, YZ) walked as one closed loop.
///
/// `segments` is clamped to [4, 4096] and rounded up to a multiple of 4 so the YZ circle
/// can start on a vertex of the XY circle. The loop visits
/// XY, then XZ (both start at +X), walks a quarter of XY up to +Y, does YZ,
/// and walks back to +X, so no chord is drawn between circles.
/// The index count is `3 * segments + segments / 2`.
pub fn bounding_sphere_outline(radius: f32, segments: u32) -> VertexArrayDesc {
    let segments = segments.clamp(4, 4096).div_ceil(4) * 4;
    let quarter = segments / 4;
    let step = std::f32::consts::TAU / segments as f32;

    let mut vertices: Vec<Vec3> = Vec::with_capacity((3 * segments - 2) as usize);
    // XY circle, starts at +X
    for i in 0..segments {
        let (sin, cos) = (i as f32 * step).sin_cos();
        vertices.push(Vec3::new(cos, sin, 0.0) * radius);
    }
    // XZ circle, +X shared with XY[0]
    let xz_start = vertices.len() as u16;
    for i in 1..segments {
        let (sin, cos) = (i as f32 * step).sin_cos();
        vertices.push(Vec3::new(cos, 0.0, sin) * radius);
    }
    // YZ circle, +Y shared with XY[quarter]
    let yz_start = vertices.len() as u16;
    for i in 1..segments {
        let (sin, cos) = (i as f32 * step).sin_cos();
        vertices.push(Vec3::new(0.0, cos, sin) * radius);
    }

    let segments = segments as u16;
    let quarter = quarter as u16;
    let mut indices: Vec<u16> = Vec::new();
    indices.extend(0..segments);
    indices.push(0);
    indices.extend(xz_start..xz_start + segments - 1);
    indices.push(0);
    indices.extend(1..=quarter);
    indices.extend(yz_start..yz_start + segments - 1);
    indices.push(quarter);
    indices.extend((1..quarter).rev());

    VertexArrayDesc {
        name: "bounding_sphere".to_string(),
        vertex_data: bytemuck::cast_slice::<Vec3, u8>(&vertices).to_vec(),
        vertex_stride: std::mem::size_of::<Vec3>() as u32,
        index_data: Some(bytemuck::cast_slice::<u16, u8>(&indices).to_vec()),
        index_type: IndexType::U16,
    }
}

#[cfg(test)]
#[path = "outline_tests.rs"]
mod tests;
