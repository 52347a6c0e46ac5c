/// World: entity storage of a scene.
///
/// Keys come from a SlotMap and stay valid until their own entity is
/// removed. Entities are kept in insertion order so every stage visits
/// them in the same, reproducible order.

use slotmap::{new_key_type, SlotMap};
use crate::entity::{Capabilities, Entity};

new_key_type! {
    /// Stable key for an Entity within a World.
    pub struct EntityKey;
}

#[derive(Debug, Default)]
pub struct World {
    /// Key -> index into `entities`
    indices: SlotMap<EntityKey, usize>,
    /// Entities in insertion order
    entities: Vec<(EntityKey, Entity)>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity, taking ownership. Returns its stable key.
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        let key = self.indices.insert(self.entities.len());
        self.entities.push((key, entity));
        key
    }

    /// Remove an entity and hand it back. None if the key is unknown.
    ///
    /// O(n): later entities shift down to keep insertion order.
    pub fn remove_entity(&mut self, key: EntityKey) -> Option<Entity> {
        let index = self.indices.remove(key)?;
        let (_, entity) = self.entities.remove(index);
        for (_, i) in self.indices.iter_mut() {
            if *i > index {
                *i -= 1;
            }
        }
        Some(entity)
    }

    pub fn contains(&self, key: EntityKey) -> bool {
        self.indices.contains_key(key)
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        let index = *self.indices.get(key)?;
        self.entities.get(index).map(|(_, e)| e)
    }

    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        let index = *self.indices.get(key)?;
        self.entities.get_mut(index).map(|(_, e)| e)
    }

    /// Key of the first entity (in insertion order) named `name`
    pub fn find_by_name(&self, name: &str) -> Option<EntityKey> {
        self.entities
            .iter()
            .find(|(_, e)| e.name() == name)
            .map(|(key, _)| *key)
    }

    /// Iterate over all entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = (EntityKey, &Entity)> + '_ {
        self.entities.iter().map(|(key, e)| (*key, e))
    }

    /// Iterate mutably over all entities in insertion order
    pub fn entities_mut(&mut self) -> impl Iterator<Item = (EntityKey, &mut Entity)> + '_ {
        self.entities.iter_mut().map(|(key, e)| (*key, e))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities owning every component in `required`
    pub fn count_with(&self, required: Capabilities) -> usize {
        self.entities.iter().filter(|(_, e)| e.has(required)).count()
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
