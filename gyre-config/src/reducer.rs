//! Pure config reducer: `(old config, action) -> new config`.
//!
//! Every mutation of the runtime configuration flows through here so the
//! version counter stays honest and numeric inputs are sanitized in one
//! place. The reducer never mutates its input.

use gyre_model::{PlacementMode, PlacementModeKind};

use crate::models::Config;

/// An atomic configuration change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigAction {
    /// Switch to the named mode's preset parameters.
    SelectMode(PlacementModeKind),
    /// Replace the placement mode and parameters wholesale.
    SetPlacement(PlacementMode),
    /// Set the scene yaw in degrees.
    SetSceneYaw(f32),
    SetWheelSensitivity(f32),
    SetFrictionBase(f32),
    SetStiffness(f32),
    SetMaxVelocity(f32),
    SetSnapEpsilon(f32),
    SetCacheCapacity(usize),
    /// Discard everything and return to compiled-in defaults.
    ResetToDefaults,
}

/// Apply an action, returning a new config with a bumped version.
pub fn reduce(config: &Config, action: ConfigAction) -> Config {
    let mut next = match action {
        ConfigAction::ResetToDefaults => Config::default(),
        _ => config.clone(),
    };

    match action {
        ConfigAction::SelectMode(kind) => {
            next.placement = PlacementMode::preset(kind);
        }
        ConfigAction::SetPlacement(mode) => {
            next.placement = mode;
        }
        ConfigAction::SetSceneYaw(yaw) => {
            next.scene_yaw = sanitize(yaw, config.scene_yaw);
        }
        ConfigAction::SetWheelSensitivity(s) => {
            next.motion.wheel_sensitivity =
                sanitize(s, config.motion.wheel_sensitivity);
        }
        ConfigAction::SetFrictionBase(base) => {
            // Anything outside (0, 1) either diverges or freezes motion.
            let base = sanitize(base, config.motion.friction_base);
            let clamped = base.clamp(1e-3, 0.9999);
            if clamped != base {
                log::warn!(
                    "friction_base {base} outside (0, 1); clamped to {clamped}"
                );
            }
            next.motion.friction_base = clamped;
        }
        ConfigAction::SetStiffness(k) => {
            next.motion.stiffness =
                sanitize(k, config.motion.stiffness).max(0.0);
        }
        ConfigAction::SetMaxVelocity(v) => {
            next.motion.max_velocity =
                sanitize(v, config.motion.max_velocity).abs();
        }
        ConfigAction::SetSnapEpsilon(eps) => {
            next.motion.snap_epsilon =
                sanitize(eps, config.motion.snap_epsilon).abs();
        }
        ConfigAction::SetCacheCapacity(cap) => {
            next.cache.capacity = cap.max(1);
        }
        ConfigAction::ResetToDefaults => {}
    }

    next.version = config.version + 1;
    log::debug!(
        "config reduced to version {} via {action:?}",
        next.version
    );
    next
}

/// Keep the previous value when the incoming one is not a finite number.
fn sanitize(value: f32, previous: f32) -> f32 {
    if value.is_finite() { value } else { previous }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyre_model::HelixParams;

    #[test]
    fn reduce_bumps_version_monotonically() {
        let c0 = Config::default();
        let c1 = reduce(&c0, ConfigAction::SetSceneYaw(10.0));
        let c2 = reduce(&c1, ConfigAction::SetSceneYaw(20.0));
        assert_eq!(c0.version(), 0);
        assert_eq!(c1.version(), 1);
        assert_eq!(c2.version(), 2);
        // Input untouched
        assert_eq!(c0.scene_yaw(), 0.0);
    }

    #[test]
    fn reset_returns_defaults_but_advances_version() {
        let c0 = Config::default();
        let c1 = reduce(
            &c0,
            ConfigAction::SelectMode(PlacementModeKind::Wave),
        );
        let c2 = reduce(&c1, ConfigAction::ResetToDefaults);
        assert_eq!(c2.placement().kind(), PlacementModeKind::Helix);
        assert_eq!(c2.version(), 2);
    }

    #[test]
    fn select_mode_installs_preset() {
        let c = reduce(
            &Config::default(),
            ConfigAction::SelectMode(PlacementModeKind::Grid),
        );
        assert_eq!(c.placement().kind(), PlacementModeKind::Grid);
    }

    #[test]
    fn set_placement_keeps_custom_parameters() {
        let custom = PlacementMode::Helix(HelixParams {
            radius: 777.0,
            ..HelixParams::default()
        });
        let c = reduce(
            &Config::default(),
            ConfigAction::SetPlacement(custom),
        );
        assert_eq!(c.placement(), &custom);
    }

    #[test]
    fn friction_base_is_clamped_to_open_unit_interval() {
        let c = reduce(
            &Config::default(),
            ConfigAction::SetFrictionBase(1.7),
        );
        assert!(c.motion().friction_base < 1.0);

        let c = reduce(&c, ConfigAction::SetFrictionBase(-0.2));
        assert!(c.motion().friction_base > 0.0);
    }

    #[test]
    fn non_finite_values_keep_previous_setting() {
        let c0 = Config::default();
        let c1 = reduce(&c0, ConfigAction::SetSceneYaw(f32::NAN));
        assert_eq!(c1.scene_yaw(), c0.scene_yaw());
        let c2 =
            reduce(&c1, ConfigAction::SetMaxVelocity(f32::INFINITY));
        assert_eq!(
            c2.motion().max_velocity,
            c1.motion().max_velocity
        );
    }
}
