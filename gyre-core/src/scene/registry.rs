//! Registry of independent carousel scenes.
//!
//! Each key owns a scene state and a motion controller pair. Scenes never
//! share scroll state; removing a key drops both halves, which is how an
//! unmounted carousel's pending animation gets cancelled.

use std::collections::HashMap;

use gyre_config::Config;
use gyre_model::SceneKey;

use crate::motion::{MotionConfig, MotionController};
use crate::scene::state::SceneState;

#[derive(Debug, Default)]
pub struct SceneRegistry {
    scenes: HashMap<SceneKey, SceneState>,
    controllers: HashMap<SceneKey, MotionController>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the scene for `key`, with default tuning.
    pub fn ensure(
        &mut self,
        key: SceneKey,
        total_cards: usize,
    ) -> &mut SceneState {
        self.controllers
            .entry(key.clone())
            .or_insert_with(MotionController::new);
        self.scenes
            .entry(key)
            .or_insert_with(|| SceneState::new(total_cards))
    }

    /// Get or create the scene for `key`, tuned from a runtime config.
    pub fn ensure_with_config(
        &mut self,
        key: SceneKey,
        total_cards: usize,
        config: &Config,
    ) -> &mut SceneState {
        self.controllers.entry(key.clone()).or_insert_with(|| {
            MotionController::new_with_config(MotionConfig::from_config(
                config,
            ))
        });
        self.scenes
            .entry(key)
            .or_insert_with(|| SceneState::with_config(total_cards, config))
    }

    pub fn scene(&self, key: &SceneKey) -> Option<&SceneState> {
        self.scenes.get(key)
    }

    pub fn scene_mut(&mut self, key: &SceneKey) -> Option<&mut SceneState> {
        self.scenes.get_mut(key)
    }

    pub fn controller(&self, key: &SceneKey) -> Option<&MotionController> {
        self.controllers.get(key)
    }

    pub fn controller_mut(
        &mut self,
        key: &SceneKey,
    ) -> Option<&mut MotionController> {
        self.controllers.get_mut(key)
    }

    /// Scene and controller together; both present or neither.
    pub fn pair_mut(
        &mut self,
        key: &SceneKey,
    ) -> Option<(&mut SceneState, &mut MotionController)> {
        let scene = self.scenes.get_mut(key)?;
        let controller = self.controllers.get_mut(key)?;
        Some((scene, controller))
    }

    /// Drop a scene and its controller. Any in-flight animation dies with
    /// the controller.
    pub fn remove(&mut self, key: &SceneKey) -> Option<SceneState> {
        self.controllers.remove(key);
        self.scenes.remove(key)
    }

    /// Push a new runtime config to every registered scene.
    pub fn apply_config(&mut self, config: &Config) {
        for scene in self.scenes.values_mut() {
            scene.apply_config(config);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &SceneKey> {
        self.scenes.keys()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
