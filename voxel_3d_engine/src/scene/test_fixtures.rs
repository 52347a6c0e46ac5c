//! Entity and scene builders shared by the scene unit tests

use std::f32::consts::FRAC_PI_4;
use glam::Vec3;
use crate::bounds::{Cone, Sphere};
use crate::entity::{
    Entity, TransformComponent, GraphicsComponent, GraphicsKind, SvoGraphics, MeshGraphics,
    BoundingBoxOutline, BoundingSphereOutline, CameraComponent, CameraDesc,
};
use crate::renderer::IndexType;
use crate::renderer::mock_renderer::MockVertexArray;
use super::scene::Scene;
use super::world::EntityKey;

pub const SVO_POINT_COUNT: u32 = 100;
pub const SVO_GRID_LENGTH: u32 = 16;
pub const SPHERE_ELEMENT_COUNT: u32 = 112;

fn outlines(name: &str) -> (BoundingBoxOutline, BoundingSphereOutline) {
    (
        BoundingBoxOutline {
            vertex_array: MockVertexArray::shared(&format!("{}_bb", name), 8, 16),
        },
        BoundingSphereOutline {
            vertex_array: MockVertexArray::shared(&format!("{}_bs", name), 94, SPHERE_ELEMENT_COUNT),
            element_count: SPHERE_ELEMENT_COUNT,
        },
    )
}

pub fn svo_graphics(name: &str, radius: f32) -> GraphicsComponent {
    let (bb, bs) = outlines(name);
    let svo = SvoGraphics::new(
        MockVertexArray::shared(&format!("{}_svo", name), SVO_POINT_COUNT, 0),
        SVO_GRID_LENGTH,
        SVO_POINT_COUNT,
    );
    GraphicsComponent::new(GraphicsKind::Svo(svo), radius, bb, bs)
}

pub fn mesh_graphics(name: &str, radius: f32) -> GraphicsComponent {
    let (bb, bs) = outlines(name);
    let mesh = MeshGraphics::new(MockVertexArray::shared(&format!("{}_mesh", name), 24, 36), 36, IndexType::U16);
    GraphicsComponent::new(GraphicsKind::Mesh(mesh), radius, bb, bs)
}

/// Point-cloud entity at `position` with a local bounding radius
pub fn svo_entity(id: u32, name: &str, position: Vec3, radius: f32) -> Entity {
    Entity::empty(id, name)
        .with_transform(TransformComponent::from_position(position))
        .with_graphics(svo_graphics(name, radius))
}

pub fn mesh_entity(id: u32, name: &str, position: Vec3, radius: f32) -> Entity {
    Entity::empty(id, name)
        .with_transform(TransformComponent::from_position(position))
        .with_graphics(mesh_graphics(name, radius))
}

/// Camera at the origin looking down +Z, with the visible region replaced by
/// a radius 500 sphere at the origin and a 45 degree cone reaching 2000
pub fn scenario_camera() -> Entity {
    let mut camera = CameraComponent::new(CameraDesc {
        position: Vec3::ZERO,
        direction: Vec3::Z,
        up: Vec3::Y,
        fov_y: 60f32.to_radians(),
        aspect: 4.0 / 3.0,
        near: 0.1,
        far: 2000.0,
    });
    camera.set_bounding_sphere(Sphere::new(Vec3::ZERO, 500.0));
    camera.set_bounding_cone(Cone::new(Vec3::ZERO, Vec3::Z, FRAC_PI_4, 2000.0));
    Entity::empty(0, "camera").with_camera(camera)
}

/// Scene whose active camera is `scenario_camera()`
pub fn scene_with_camera() -> (Scene, EntityKey) {
    let mut scene = Scene::new("test");
    let camera = scene.add_entity(scenario_camera());
    scene.set_active_camera(camera).unwrap();
    (scene, camera)
}

/// Scene with the camera plus entities A (0,0,10), B (20,0,10) and
/// C (0,0,1000), all of radius 1
pub fn scenario_scene() -> (Scene, [EntityKey; 3]) {
    let (mut scene, _) = scene_with_camera();
    let a = scene.add_entity(svo_entity(1, "A", Vec3::new(0.0, 0.0, 10.0), 1.0));
    let b = scene.add_entity(svo_entity(2, "B", Vec3::new(20.0, 0.0, 10.0), 1.0));
    let c = scene.add_entity(svo_entity(3, "C", Vec3::new(0.0, 0.0, 1000.0), 1.0));
    (scene, [a, b, c])
}

pub fn is_visible(scene: &Scene, key: EntityKey) -> bool {
    scene.world()
        .entity(key)
        .and_then(|e| e.graphics())
        .map(|g| g.is_visible())
        .unwrap_or(false)
}
