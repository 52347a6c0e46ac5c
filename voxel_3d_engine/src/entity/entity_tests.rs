use std::sync::{Arc, Mutex};
use glam::Vec3;
use serial_test::serial;
use super::*;
use crate::entity::{
    CameraDesc, GraphicsKind, SvoGraphics, BoundingBoxOutline, BoundingSphereOutline,
};
use crate::renderer::mock_renderer::MockVertexArray;
use crate::voxel3d::Engine;
use crate::voxel3d::log::{Logger, LogEntry, LogSeverity};

fn create_graphics() -> GraphicsComponent {
    GraphicsComponent::new(
        GraphicsKind::Svo(SvoGraphics::new(MockVertexArray::shared("svo", 64, 0), 4, 64)),
        3.5,
        BoundingBoxOutline { vertex_array: MockVertexArray::shared("bb", 8, 16) },
        BoundingSphereOutline { vertex_array: MockVertexArray::shared("bs", 94, 112), element_count: 112 },
    )
}

/// Captures entity lifecycle messages mentioning one entity name
struct LifecycleLogger {
    name: &'static str,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for LifecycleLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == "voxel3d::Entity" && entry.message.contains(self.name) {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_empty_entity_has_no_capabilities() {
    let entity = Entity::empty(1, "marker");
    assert_eq!(entity.id(), 1);
    assert_eq!(entity.name(), "marker");
    assert!(entity.capabilities().is_empty());
    assert!(entity.transform().is_none());
    assert!(entity.graphics().is_none());
    assert!(entity.camera().is_none());
}

#[test]
fn test_new_takes_ownership_of_components() {
    let entity = Entity::new(
        2,
        "rock",
        Some(TransformComponent::from_position(Vec3::new(0.0, 0.0, 10.0))),
        Some(create_graphics()),
        None,
    );

    assert_eq!(entity.capabilities(), Capabilities::RENDERABLE);
    assert!(entity.has(Capabilities::TRANSFORM));
    assert!(!entity.has(Capabilities::CAMERA));
    assert_eq!(entity.transform().unwrap().position(), Vec3::new(0.0, 0.0, 10.0));
}

#[test]
fn test_builders_fill_slots() {
    let entity = Entity::empty(3, "player")
        .with_transform(TransformComponent::default())
        .with_camera(CameraComponent::new(CameraDesc::default()));

    assert_eq!(entity.capabilities(), Capabilities::TRANSFORM | Capabilities::CAMERA);
    assert!(!entity.has(Capabilities::RENDERABLE));
}

#[test]
fn test_renderable_requires_both_slots() {
    let mut transform_only = Entity::empty(4, "t").with_transform(TransformComponent::default());
    assert!(transform_only.renderable().is_none());
    assert!(transform_only.renderable_mut().is_none());

    let mut graphics_only = Entity::empty(5, "g").with_graphics(create_graphics());
    assert!(graphics_only.renderable_mut().is_none());

    let mut both = Entity::empty(6, "b")
        .with_transform(TransformComponent::default())
        .with_graphics(create_graphics());
    let (transform, graphics) = both.renderable_mut().unwrap();
    graphics.set_visible(true);
    assert_eq!(transform.scale(), 1.0);
    assert!(both.graphics().unwrap().is_visible());
}

#[test]
fn test_mutable_accessors() {
    let mut entity = Entity::empty(7, "cam")
        .with_transform(TransformComponent::default())
        .with_camera(CameraComponent::default());

    entity.transform_mut().unwrap().set_scale(2.0);
    entity.camera_mut().unwrap().set_position(Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(entity.transform().unwrap().scale(), 2.0);
    assert_eq!(entity.camera().unwrap().position(), Vec3::new(1.0, 2.0, 3.0));
    assert!(entity.graphics_mut().is_none());
}

// ============================================================================
// Lifecycle logging
// ============================================================================

#[test]
#[serial]
fn test_construction_and_drop_are_logged() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(LifecycleLogger { name: "lifecycle-check", entries: entries.clone() });

    let entity = Entity::empty(42, "lifecycle-check");
    drop(entity);
    Engine::reset_logger();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].severity, LogSeverity::Debug);
    assert!(entries[0].message.contains("id: 42"));
    assert_eq!(entries[1].severity, LogSeverity::Trace);
    assert!(entries[1].message.starts_with("Destructing entity"));
}
