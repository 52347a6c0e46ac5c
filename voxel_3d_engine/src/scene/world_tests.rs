use glam::Vec3;
use super::*;
use crate::entity::{CameraComponent, TransformComponent};

fn create_positioned(id: u32, name: &str) -> Entity {
    Entity::empty(id, name).with_transform(TransformComponent::from_position(Vec3::splat(id as f32)))
}

#[test]
fn test_new_world_is_empty() {
    let world = World::new();
    assert!(world.is_empty());
    assert_eq!(world.len(), 0);
    assert_eq!(world.entities().count(), 0);
}

#[test]
fn test_add_and_get() {
    let mut world = World::new();
    let key = world.add_entity(create_positioned(1, "a"));

    assert!(world.contains(key));
    assert_eq!(world.entity(key).unwrap().name(), "a");
    world.entity_mut(key).unwrap().transform_mut().unwrap().set_scale(3.0);
    assert_eq!(world.entity(key).unwrap().transform().unwrap().scale(), 3.0);
}

#[test]
fn test_iteration_follows_insertion_order() {
    let mut world = World::new();
    for (id, name) in [(1, "a"), (2, "b"), (3, "c")] {
        world.add_entity(create_positioned(id, name));
    }

    let names: Vec<&str> = world.entities().map(|(_, e)| e.name()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_remove_keeps_order_and_other_keys() {
    let mut world = World::new();
    let a = world.add_entity(create_positioned(1, "a"));
    let b = world.add_entity(create_positioned(2, "b"));
    let c = world.add_entity(create_positioned(3, "c"));

    let removed = world.remove_entity(b).unwrap();
    assert_eq!(removed.id(), 2);
    assert!(!world.contains(b));
    assert!(world.entity(b).is_none());

    assert_eq!(world.entity(a).unwrap().name(), "a");
    assert_eq!(world.entity(c).unwrap().name(), "c");

    let d = world.add_entity(create_positioned(4, "d"));
    let names: Vec<&str> = world.entities().map(|(_, e)| e.name()).collect();
    assert_eq!(names, vec!["a", "c", "d"]);
    assert_eq!(world.entity(d).unwrap().id(), 4);
}

#[test]
fn test_remove_twice_returns_none() {
    let mut world = World::new();
    let key = world.add_entity(create_positioned(1, "a"));
    assert!(world.remove_entity(key).is_some());
    assert!(world.remove_entity(key).is_none());
    assert!(world.is_empty());
}

#[test]
fn test_find_by_name() {
    let mut world = World::new();
    world.add_entity(create_positioned(1, "rock"));
    let tree = world.add_entity(create_positioned(2, "tree"));

    assert_eq!(world.find_by_name("tree"), Some(tree));
    assert_eq!(world.find_by_name("missing"), None);
}

#[test]
fn test_entities_mut_visits_every_entity() {
    let mut world = World::new();
    world.add_entity(create_positioned(1, "a"));
    world.add_entity(create_positioned(2, "b"));

    for (_, entity) in world.entities_mut() {
        entity.transform_mut().unwrap().translate(Vec3::X);
    }

    let xs: Vec<f32> = world.entities().map(|(_, e)| e.transform().unwrap().position().x).collect();
    assert_eq!(xs, vec![2.0, 3.0]);
}

#[test]
fn test_count_with() {
    let mut world = World::new();
    world.add_entity(create_positioned(1, "a"));
    world.add_entity(Entity::empty(2, "cam").with_camera(CameraComponent::default()));
    world.add_entity(Entity::empty(3, "marker"));

    assert_eq!(world.count_with(Capabilities::TRANSFORM), 1);
    assert_eq!(world.count_with(Capabilities::CAMERA), 1);
    assert_eq!(world.count_with(Capabilities::RENDERABLE), 0);
    assert_eq!(world.count_with(Capabilities::empty()), 3);
}
