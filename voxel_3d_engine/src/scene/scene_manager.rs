/// Named scenes and the one currently rendered.
///
/// Owned by the application and passed around explicitly; there is no
/// process-wide active scene.

use std::collections::hash_map::Entry;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::{engine_bail, engine_debug};
use super::scene::Scene;

#[derive(Debug, Default)]
pub struct SceneManager {
    scenes: FxHashMap<String, Scene>,
    active_scene: Option<String>,
}

impl SceneManager {
    /// Create a new empty scene manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty named scene
    ///
    /// # Errors
    ///
    /// Returns an error if a scene with the same name already exists.
    pub fn create_scene(&mut self, name: &str) -> Result<&mut Scene> {
        match self.scenes.entry(name.to_string()) {
            Entry::Occupied(_) => {
                engine_bail!("voxel3d::SceneManager", "Scene '{}' already exists", name);
            }
            Entry::Vacant(slot) => {
                engine_debug!("voxel3d::SceneManager", "Scene '{}' created", name);
                Ok(slot.insert(Scene::new(name)))
            }
        }
    }

    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    pub fn scene_mut(&mut self, name: &str) -> Option<&mut Scene> {
        self.scenes.get_mut(name)
    }

    /// Remove a scene by name. Removing the active scene leaves none active.
    pub fn remove_scene(&mut self, name: &str) -> Option<Scene> {
        if self.active_scene.as_deref() == Some(name) {
            self.active_scene = None;
        }
        self.scenes.remove(name)
    }

    /// Select the scene rendered from now on
    pub fn set_active_scene(&mut self, name: &str) -> Result<()> {
        if !self.scenes.contains_key(name) {
            return Err(Error::InvalidResource(format!("Scene '{}' not found", name)));
        }
        engine_debug!("voxel3d::SceneManager", "Active scene set to '{}'", name);
        self.active_scene = Some(name.to_string());
        Ok(())
    }

    pub fn active_scene_name(&self) -> Option<&str> {
        self.active_scene.as_deref()
    }

    pub fn active_scene(&self) -> Option<&Scene> {
        self.active_scene.as_deref().and_then(|name| self.scenes.get(name))
    }

    pub fn active_scene_mut(&mut self) -> Option<&mut Scene> {
        match self.active_scene.as_deref() {
            Some(name) => self.scenes.get_mut(name),
            None => None,
        }
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// All scene names, sorted
    pub fn scene_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scenes.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
