//! Runtime configuration model.
//!
//! One versioned struct rather than scattered toggle flags: every change
//! goes through the reducer in [`crate::reducer`], which returns a new
//! `Config` with a bumped version. Consumers compare versions to detect
//! staleness (the position cache clears itself when the version moves).

use gyre_model::PlacementMode;

use crate::constants;

/// Motion controller tuning as carried by the runtime config.
///
/// Mirrored into the engine's own `MotionConfig` at controller creation;
/// see `gyre-core`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    pub wheel_sensitivity: f32,
    pub touch_sensitivity: f32,
    pub key_impulse: f32,
    pub friction_base: f32,
    pub stiffness: f32,
    pub min_velocity: f32,
    pub max_velocity: f32,
    pub snap_velocity: f32,
    pub snap_epsilon: f32,
    pub boost_multiplier: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        use constants::motion as m;
        Self {
            wheel_sensitivity: m::WHEEL_SENSITIVITY,
            touch_sensitivity: m::TOUCH_SENSITIVITY,
            key_impulse: m::KEY_IMPULSE,
            friction_base: m::FRICTION_BASE,
            stiffness: m::STIFFNESS,
            min_velocity: m::MIN_VELOCITY,
            max_velocity: m::MAX_VELOCITY,
            snap_velocity: m::SNAP_VELOCITY,
            snap_epsilon: m::SNAP_EPSILON,
            boost_multiplier: m::BOOST_MULTIPLIER,
        }
    }
}

/// Position cache tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheSettings {
    pub capacity: usize,
    pub quantum_turns: f32,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: constants::cache::CAPACITY,
            quantum_turns: constants::cache::QUANTUM_TURNS,
        }
    }
}

/// The complete runtime configuration.
///
/// Immutable from the outside; produce a modified copy via
/// [`crate::reduce`]. The version is monotonically increasing and starts
/// at 0 for defaults and freshly loaded presets.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) version: u64,
    pub(crate) placement: PlacementMode,
    pub(crate) scene_yaw: f32,
    pub(crate) motion: MotionSettings,
    pub(crate) cache: CacheSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 0,
            placement: PlacementMode::default(),
            scene_yaw: 0.0,
            motion: MotionSettings::default(),
            cache: CacheSettings::default(),
        }
    }
}

impl Config {
    /// Monotonic change counter; bumped by every reduction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Active placement mode with its parameters.
    pub fn placement(&self) -> &PlacementMode {
        &self.placement
    }

    /// Scene yaw in degrees, added to every card angle when computing
    /// depth.
    pub fn scene_yaw(&self) -> f32 {
        self.scene_yaw
    }

    pub fn motion(&self) -> &MotionSettings {
        &self.motion
    }

    pub fn cache(&self) -> &CacheSettings {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyre_model::PlacementModeKind;

    #[test]
    fn default_config_starts_at_version_zero() {
        let cfg = Config::default();
        assert_eq!(cfg.version(), 0);
        assert_eq!(cfg.placement().kind(), PlacementModeKind::Helix);
    }

    #[test]
    fn default_motion_matches_constants() {
        let m = MotionSettings::default();
        assert_eq!(m.friction_base, constants::motion::FRICTION_BASE);
        assert_eq!(m.max_velocity, constants::motion::MAX_VELOCITY);
    }
}
