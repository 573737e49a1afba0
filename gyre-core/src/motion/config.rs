//! Configuration for the motion controller.
//!
//! All rates are in turns per second (1 turn = one full revolution of
//! the carousel) so the same controller works unchanged for any card
//! count or radius.

use gyre_config::{Config, constants::motion as defaults};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Velocity added per pixel of wheel `delta_y` (turns/s per px).
    pub wheel_sensitivity: f32,
    /// Velocity added per pixel of touch drag (turns/s per px).
    pub touch_sensitivity: f32,
    /// Fixed impulse per keypress (turns/s).
    pub key_impulse: f32,
    /// Per-60fps-frame velocity retention; applied as
    /// `friction_base.powf(dt * 60)` for frame-rate independence.
    pub friction_base: f32,
    /// Spring constant toward an active target.
    pub stiffness: f32,
    /// Velocity below which the controller goes idle (turns/s).
    pub min_velocity: f32,
    /// Hard velocity clamp (turns/s).
    pub max_velocity: f32,
    /// Velocity below which snap-point capture engages (turns/s).
    pub snap_velocity: f32,
    /// Maximum distance to a snap point for capture (turns).
    pub snap_epsilon: f32,
    /// Velocity clamp multiplier while boost is held.
    pub boost_multiplier: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: defaults::WHEEL_SENSITIVITY,
            touch_sensitivity: defaults::TOUCH_SENSITIVITY,
            key_impulse: defaults::KEY_IMPULSE,
            friction_base: defaults::FRICTION_BASE,
            stiffness: defaults::STIFFNESS,
            min_velocity: defaults::MIN_VELOCITY,
            max_velocity: defaults::MAX_VELOCITY,
            snap_velocity: defaults::SNAP_VELOCITY,
            snap_epsilon: defaults::SNAP_EPSILON,
            boost_multiplier: defaults::BOOST_MULTIPLIER,
        }
    }
}

impl MotionConfig {
    /// Mirror the runtime config's motion settings.
    pub fn from_config(cfg: &Config) -> Self {
        let m = cfg.motion();
        Self {
            wheel_sensitivity: m.wheel_sensitivity,
            touch_sensitivity: m.touch_sensitivity,
            key_impulse: m.key_impulse,
            friction_base: m.friction_base,
            stiffness: m.stiffness,
            min_velocity: m.min_velocity,
            max_velocity: m.max_velocity,
            snap_velocity: m.snap_velocity,
            snap_epsilon: m.snap_epsilon,
            boost_multiplier: m.boost_multiplier,
        }
    }
}
