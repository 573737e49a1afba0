//! Per-scene state and the per-frame snapshot.
//!
//! The scroll offset is read exactly once per render pass, into a
//! [`FrameSnapshot`]. Every card transform in that pass derives from the
//! snapshot, so a controller update landing mid-pass can never tear the
//! layout.

use gyre_config::Config;
use gyre_model::{CardTransform, DepthTier, PlacementMode};

use crate::math::{self, safe_f32};
use crate::placement::{PositionCache, card_transform};

/// Immutable view of a scene at one instant. Copy; hand it to whatever
/// walks the cards this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub scroll_offset: f32,
    pub scene_yaw: f32,
    pub total_cards: usize,
    pub mode: PlacementMode,
}

impl FrameSnapshot {
    /// Transform for one card, computed directly (no cache).
    pub fn card(&self, index: usize) -> CardTransform {
        card_transform(index, self.total_cards, self.scroll_offset, &self.mode)
    }

    /// Normalized depth of one card: 0.0 facing the viewer, 1.0 at the
    /// back, accounting for the scene yaw.
    pub fn depth(&self, index: usize) -> f32 {
        math::depth(self.card(index).rotate_y, self.scene_yaw)
    }

    /// Rendering fidelity tier for one card.
    pub fn tier(&self, index: usize) -> DepthTier {
        DepthTier::from_depth(self.depth(index))
    }
}

/// Mutable state of one carousel scene.
#[derive(Debug, Clone)]
pub struct SceneState {
    total_cards: usize,
    mode: PlacementMode,
    scene_yaw: f32,
    scroll_offset: f32,
    config_version: u64,
    cache: PositionCache,
}

impl SceneState {
    /// A scene over `total_cards` cards with default mode and tuning.
    pub fn new(total_cards: usize) -> Self {
        Self {
            total_cards,
            mode: PlacementMode::default(),
            scene_yaw: 0.0,
            scroll_offset: 0.0,
            config_version: 0,
            cache: PositionCache::new(),
        }
    }

    /// A scene picking mode, yaw, and cache tuning from a runtime config.
    pub fn with_config(total_cards: usize, config: &Config) -> Self {
        Self {
            total_cards,
            mode: *config.placement(),
            scene_yaw: safe_f32(config.scene_yaw()),
            scroll_offset: 0.0,
            config_version: config.version(),
            cache: PositionCache::with_settings(config.cache()),
        }
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn mode(&self) -> &PlacementMode {
        &self.mode
    }

    pub fn scene_yaw(&self) -> f32 {
        self.scene_yaw
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Resize the card set. Invalidates cached transforms.
    pub fn set_total_cards(&mut self, total_cards: usize) {
        if self.total_cards != total_cards {
            self.total_cards = total_cards;
            self.cache.clear();
        }
    }

    /// Switch placement mode. Invalidates cached transforms on change.
    pub fn set_mode(&mut self, mode: PlacementMode) {
        if self.mode != mode {
            self.mode = mode;
            self.cache.clear();
        }
    }

    pub fn set_scene_yaw(&mut self, yaw_deg: f32) {
        self.scene_yaw = safe_f32(yaw_deg);
    }

    /// Adopt the controller's offset for the next frame. The offset is
    /// part of the cache key, so no invalidation is needed.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = safe_f32(offset);
    }

    /// Sync with a runtime config. A version change adopts the config's
    /// mode and yaw and drops all cached transforms; same version is a
    /// no-op.
    pub fn apply_config(&mut self, config: &Config) {
        if config.version() == self.config_version {
            return;
        }
        log::debug!(
            "scene config {} -> {}",
            self.config_version,
            config.version()
        );
        self.config_version = config.version();
        self.mode = *config.placement();
        self.scene_yaw = safe_f32(config.scene_yaw());
        self.cache = PositionCache::with_settings(config.cache());
    }

    /// Freeze the scene for one render pass.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            scroll_offset: self.scroll_offset,
            scene_yaw: self.scene_yaw,
            total_cards: self.total_cards,
            mode: self.mode,
        }
    }

    /// Transform for one card through the position cache.
    pub fn transform(&mut self, index: usize) -> CardTransform {
        self.cache.transform(
            index,
            self.total_cards,
            self.scroll_offset,
            &self.mode,
        )
    }

    /// Transforms for every card in index order, all derived from a
    /// single offset read.
    pub fn transforms(&mut self) -> Vec<CardTransform> {
        let snap = self.snapshot();
        (0..snap.total_cards)
            .map(|index| {
                self.cache.transform(
                    index,
                    snap.total_cards,
                    snap.scroll_offset,
                    &snap.mode,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyre_config::{ConfigAction, reduce};
    use gyre_model::PlacementModeKind;

    #[test]
    fn snapshot_is_immutable_while_state_moves() {
        let mut scene = SceneState::new(16);
        scene.set_scroll_offset(0.25);
        let snap = scene.snapshot();
        let before = snap.card(3);

        scene.set_scroll_offset(0.9);
        scene.set_mode(PlacementMode::preset(PlacementModeKind::Grid));
        assert_eq!(snap.card(3), before);
        assert_eq!(snap.scroll_offset, 0.25);
    }

    #[test]
    fn cached_pass_matches_snapshot_at_quantized_offset() {
        let mut scene = SceneState::new(12);
        scene.set_scroll_offset(0.37);
        let all = scene.transforms();

        // The cache computes at the quantized offset; recompute there.
        let mut reference = scene.snapshot();
        reference.scroll_offset =
            PositionCache::new().quantized_offset(0.37);
        for (index, t) in all.iter().enumerate() {
            assert_eq!(*t, reference.card(index), "index {index}");
        }
    }

    #[test]
    fn config_version_change_invalidates_the_cache() {
        let cfg = gyre_config::Config::default();
        let mut scene = SceneState::with_config(16, &cfg);
        scene.transforms();

        let cfg = reduce(&cfg, ConfigAction::SetSceneYaw(35.0));
        scene.apply_config(&cfg);
        assert_eq!(scene.scene_yaw(), 35.0);

        let (_, misses_before) = scene_cache_stats(&scene);
        scene.transforms();
        let (_, misses_after) = scene_cache_stats(&scene);
        // Every card recomputed after invalidation.
        assert_eq!(misses_after - misses_before, 16);
    }

    fn scene_cache_stats(scene: &SceneState) -> (u64, u64) {
        scene.cache.stats()
    }

    #[test]
    fn same_version_apply_is_a_noop() {
        let cfg = gyre_config::Config::default();
        let mut scene = SceneState::with_config(8, &cfg);
        scene.transforms();
        let populated = scene.cache.len();
        scene.apply_config(&cfg);
        assert_eq!(scene.cache.len(), populated);
    }

    #[test]
    fn mode_change_invalidates_but_same_mode_does_not() {
        let mut scene = SceneState::new(8);
        scene.transforms();
        assert!(!scene.cache.is_empty());

        scene.set_mode(PlacementMode::default());
        assert!(!scene.cache.is_empty());

        scene.set_mode(PlacementMode::preset(PlacementModeKind::Wave));
        assert!(scene.cache.is_empty());
    }

    #[test]
    fn depth_and_tier_follow_the_card_angle() {
        let scene = SceneState::new(16);
        let snap = scene.snapshot();
        assert_eq!(snap.depth(0), 0.0);
        assert_eq!(snap.tier(0), gyre_model::DepthTier::Near);
        assert!((snap.depth(8) - 1.0).abs() < 1e-3);
        assert_eq!(snap.tier(8), gyre_model::DepthTier::Far);
    }
}
