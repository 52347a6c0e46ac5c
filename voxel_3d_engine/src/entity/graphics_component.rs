/// GraphicsComponent: visual capability.
///
/// Common contract shared by every variant: the visibility flag written by
/// culling and read by drawing, the bounding-sphere radius, and the two
/// debug outline vertex arrays. The variant-specific payload lives in the
/// closed `GraphicsKind` enum so the draw stage dispatches with an
/// exhaustive match.

use std::sync::Arc;
use crate::renderer::{IndexType, VertexArray};

/// Sparse voxel octree rendered as a dense point cloud.
#[derive(Debug)]
pub struct SvoGraphics {
    vertex_array: Arc<dyn VertexArray>,
    grid_length: u32,
    point_count: u32,
}

impl SvoGraphics {
    /// # Arguments
    ///
    /// * `vertex_array` - Point buffer (one vertex per voxel)
    /// * `grid_length` - Voxels along one edge of the grid
    /// * `point_count` - Number of points uploaded in `vertex_array`
    pub fn new(vertex_array: Arc<dyn VertexArray>, grid_length: u32, point_count: u32) -> Self {
        Self { vertex_array, grid_length, point_count }
    }

    pub fn vertex_array(&self) -> &Arc<dyn VertexArray> {
        &self.vertex_array
    }

    pub fn grid_length(&self) -> u32 {
        self.grid_length
    }

    pub fn point_count(&self) -> u32 {
        self.point_count
    }
}

/// Indexed triangle mesh.
#[derive(Debug)]
pub struct MeshGraphics {
    vertex_array: Arc<dyn VertexArray>,
    index_count: u32,
    index_type: IndexType,
}

impl MeshGraphics {
    pub fn new(vertex_array: Arc<dyn VertexArray>, index_count: u32, index_type: IndexType) -> Self {
        Self { vertex_array, index_count, index_type }
    }

    pub fn vertex_array(&self) -> &Arc<dyn VertexArray> {
        &self.vertex_array
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn index_type(&self) -> IndexType {
        self.index_type
    }
}

/// Renderable representation of a graphics component
#[derive(Debug)]
pub enum GraphicsKind {
    Svo(SvoGraphics),
    Mesh(MeshGraphics),
}

/// Box wireframe (see `renderer::bounding_box_outline` for the index layout)
#[derive(Debug)]
pub struct BoundingBoxOutline {
    pub vertex_array: Arc<dyn VertexArray>,
}

/// Sphere wireframe drawn as one line loop of `element_count` indices
#[derive(Debug)]
pub struct BoundingSphereOutline {
    pub vertex_array: Arc<dyn VertexArray>,
    pub element_count: u32,
}

/// Visual capability of an entity.
///
/// Not `Clone`: the vertex arrays are shared handles, and cloning would
/// make two components claim the same GPU objects.
#[derive(Debug)]
pub struct GraphicsComponent {
    visible: bool,
    bounding_sphere_radius: f32,
    bounding_box: BoundingBoxOutline,
    bounding_sphere: BoundingSphereOutline,
    kind: GraphicsKind,
}

impl GraphicsComponent {
    /// Create a graphics component. It starts invisible until the first cull.
    ///
    /// # Arguments
    ///
    /// * `kind` - Variant payload
    /// * `bounding_sphere_radius` - Local-space radius around the entity origin
    /// * `bounding_box` - Box outline vertex array
    /// * `bounding_sphere` - Sphere outline vertex array and its element count
    pub fn new(
        kind: GraphicsKind,
        bounding_sphere_radius: f32,
        bounding_box: BoundingBoxOutline,
        bounding_sphere: BoundingSphereOutline,
    ) -> Self {
        Self {
            visible: false,
            bounding_sphere_radius,
            bounding_box,
            bounding_sphere,
            kind,
        }
    }

    /// Result of the last culling pass (false before any)
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Local-space radius, before the entity's scale is applied
    pub fn bounding_sphere_radius(&self) -> f32 {
        self.bounding_sphere_radius
    }

    pub fn bounding_box(&self) -> &BoundingBoxOutline {
        &self.bounding_box
    }

    pub fn bounding_sphere(&self) -> &BoundingSphereOutline {
        &self.bounding_sphere
    }

    pub fn kind(&self) -> &GraphicsKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut GraphicsKind {
        &mut self.kind
    }

    pub fn is_svo(&self) -> bool {
        matches!(self.kind, GraphicsKind::Svo(_))
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, GraphicsKind::Mesh(_))
    }
}

#[cfg(test)]
#[path = "graphics_component_tests.rs"]
mod tests;
