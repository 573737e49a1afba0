//! TOML preset loading.
//!
//! Every field in a preset file is optional: missing fields fall back to
//! the active mode's compiled-in preset, and an unrecognized mode name
//! falls back to the helix preset with a warning. Only I/O and TOML
//! syntax failures surface as errors.

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

use gyre_model::{
    CylinderParams, GridParams, HelixParams, PlacementMode,
    PlacementModeKind, SpiralParams, WaveParams,
};

use crate::models::{CacheSettings, Config, MotionSettings};
pub use error::ConfigLoadError;

/// Load a preset from a TOML file.
pub fn load_path(path: &Path) -> Result<Config, ConfigLoadError> {
    let text =
        std::fs::read_to_string(path).map_err(|source| {
            ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let doc: ConfigDoc = toml::from_str(&text).map_err(|source| {
        ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(doc.into_config())
}

/// Load a preset from TOML text.
pub fn load_str(text: &str) -> Result<Config, ConfigLoadError> {
    let doc: ConfigDoc = toml::from_str(text)?;
    Ok(doc.into_config())
}

/// Write a fully populated default preset, suitable as a starting point
/// for hand editing.
pub fn write_default_preset(path: &Path) -> anyhow::Result<()> {
    let doc = ConfigDoc::from_config(&Config::default());
    let text = toml::to_string_pretty(&doc)?;
    std::fs::write(path, text)?;
    Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigDoc {
    placement: PlacementDoc,
    scene: SceneDoc,
    motion: MotionDoc,
    cache: CacheDoc,
}

/// Raw placement table. Carries the union of every mode's named
/// parameters; only the ones relevant to the selected mode are read.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PlacementDoc {
    mode: Option<String>,
    radius: Option<f32>,
    vertical_span: Option<f32>,
    turns: Option<f32>,
    spacing: Option<f32>,
    angle_factor: Option<f32>,
    base_radius: Option<f32>,
    radius_growth: Option<f32>,
    wave_amplitude: Option<f32>,
    wave_frequency: Option<f32>,
    columns: Option<usize>,
    row_spacing: Option<f32>,
    column_spacing: Option<f32>,
    depth: Option<f32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SceneDoc {
    yaw: Option<f32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct MotionDoc {
    wheel_sensitivity: Option<f32>,
    touch_sensitivity: Option<f32>,
    key_impulse: Option<f32>,
    friction_base: Option<f32>,
    stiffness: Option<f32>,
    min_velocity: Option<f32>,
    max_velocity: Option<f32>,
    snap_velocity: Option<f32>,
    snap_epsilon: Option<f32>,
    boost_multiplier: Option<f32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CacheDoc {
    capacity: Option<usize>,
    quantum_turns: Option<f32>,
}

impl ConfigDoc {
    fn into_config(self) -> Config {
        Config {
            version: 0,
            placement: self.placement.into_mode(),
            scene_yaw: finite_or(self.scene.yaw, 0.0),
            motion: self.motion.into_settings(),
            cache: self.cache.into_settings(),
        }
    }

    fn from_config(cfg: &Config) -> Self {
        let mut placement = PlacementDoc {
            mode: Some(cfg.placement.kind().to_string()),
            ..PlacementDoc::default()
        };
        match cfg.placement {
            PlacementMode::Helix(p) => {
                placement.radius = Some(p.radius);
                placement.vertical_span = Some(p.vertical_span);
                placement.turns = Some(p.turns);
                placement.spacing = Some(p.spacing);
                placement.angle_factor = Some(p.angle_factor);
            }
            PlacementMode::Cylinder(p) => {
                placement.radius = Some(p.radius);
                placement.turns = Some(p.turns);
                placement.angle_factor = Some(p.angle_factor);
            }
            PlacementMode::Spiral(p) => {
                placement.base_radius = Some(p.base_radius);
                placement.radius_growth = Some(p.radius_growth);
                placement.vertical_span = Some(p.vertical_span);
                placement.turns = Some(p.turns);
                placement.spacing = Some(p.spacing);
                placement.angle_factor = Some(p.angle_factor);
            }
            PlacementMode::Wave(p) => {
                placement.base_radius = Some(p.base_radius);
                placement.wave_amplitude = Some(p.wave_amplitude);
                placement.wave_frequency = Some(p.wave_frequency);
                placement.vertical_span = Some(p.vertical_span);
                placement.turns = Some(p.turns);
                placement.spacing = Some(p.spacing);
                placement.angle_factor = Some(p.angle_factor);
            }
            PlacementMode::Grid(p) => {
                placement.columns = Some(p.columns);
                placement.row_spacing = Some(p.row_spacing);
                placement.column_spacing = Some(p.column_spacing);
                placement.depth = Some(p.depth);
            }
        }

        let m = &cfg.motion;
        Self {
            placement,
            scene: SceneDoc {
                yaw: Some(cfg.scene_yaw),
            },
            motion: MotionDoc {
                wheel_sensitivity: Some(m.wheel_sensitivity),
                touch_sensitivity: Some(m.touch_sensitivity),
                key_impulse: Some(m.key_impulse),
                friction_base: Some(m.friction_base),
                stiffness: Some(m.stiffness),
                min_velocity: Some(m.min_velocity),
                max_velocity: Some(m.max_velocity),
                snap_velocity: Some(m.snap_velocity),
                snap_epsilon: Some(m.snap_epsilon),
                boost_multiplier: Some(m.boost_multiplier),
            },
            cache: CacheDoc {
                capacity: Some(cfg.cache.capacity),
                quantum_turns: Some(cfg.cache.quantum_turns),
            },
        }
    }
}

impl PlacementDoc {
    fn into_mode(self) -> PlacementMode {
        let kind = match self.mode.as_deref() {
            None => PlacementModeKind::Helix,
            Some(name) => match name.parse::<PlacementModeKind>() {
                Ok(kind) => kind,
                Err(err) => {
                    log::warn!(
                        "{err}; falling back to the helix preset"
                    );
                    PlacementModeKind::Helix
                }
            },
        };

        let mode = match kind {
            PlacementModeKind::Helix => {
                let d = HelixParams::default();
                PlacementMode::Helix(HelixParams {
                    radius: finite_or(self.radius, d.radius),
                    vertical_span: finite_or(
                        self.vertical_span,
                        d.vertical_span,
                    ),
                    turns: finite_or(self.turns, d.turns),
                    spacing: finite_or(self.spacing, d.spacing),
                    angle_factor: finite_or(
                        self.angle_factor,
                        d.angle_factor,
                    ),
                })
            }
            PlacementModeKind::Cylinder => {
                let d = CylinderParams::default();
                PlacementMode::Cylinder(CylinderParams {
                    radius: finite_or(self.radius, d.radius),
                    turns: finite_or(self.turns, d.turns),
                    angle_factor: finite_or(
                        self.angle_factor,
                        d.angle_factor,
                    ),
                })
            }
            PlacementModeKind::Spiral => {
                let d = SpiralParams::default();
                PlacementMode::Spiral(SpiralParams {
                    base_radius: finite_or(
                        self.base_radius,
                        d.base_radius,
                    ),
                    radius_growth: finite_or(
                        self.radius_growth,
                        d.radius_growth,
                    ),
                    vertical_span: finite_or(
                        self.vertical_span,
                        d.vertical_span,
                    ),
                    turns: finite_or(self.turns, d.turns),
                    spacing: finite_or(self.spacing, d.spacing),
                    angle_factor: finite_or(
                        self.angle_factor,
                        d.angle_factor,
                    ),
                })
            }
            PlacementModeKind::Wave => {
                let d = WaveParams::default();
                PlacementMode::Wave(WaveParams {
                    base_radius: finite_or(
                        self.base_radius,
                        d.base_radius,
                    ),
                    wave_amplitude: finite_or(
                        self.wave_amplitude,
                        d.wave_amplitude,
                    ),
                    wave_frequency: finite_or(
                        self.wave_frequency,
                        d.wave_frequency,
                    ),
                    vertical_span: finite_or(
                        self.vertical_span,
                        d.vertical_span,
                    ),
                    turns: finite_or(self.turns, d.turns),
                    spacing: finite_or(self.spacing, d.spacing),
                    angle_factor: finite_or(
                        self.angle_factor,
                        d.angle_factor,
                    ),
                })
            }
            PlacementModeKind::Grid => {
                let d = GridParams::default();
                PlacementMode::Grid(GridParams {
                    columns: self.columns.unwrap_or(d.columns).max(1),
                    row_spacing: finite_or(
                        self.row_spacing,
                        d.row_spacing,
                    ),
                    column_spacing: finite_or(
                        self.column_spacing,
                        d.column_spacing,
                    ),
                    depth: finite_or(self.depth, d.depth),
                })
            }
        };

        if let Err(err) = mode.validate() {
            log::warn!("{err}; falling back to the {kind} preset");
            return PlacementMode::preset(kind);
        }
        mode
    }
}

impl MotionDoc {
    fn into_settings(self) -> MotionSettings {
        let d = MotionSettings::default();
        MotionSettings {
            wheel_sensitivity: finite_or(
                self.wheel_sensitivity,
                d.wheel_sensitivity,
            ),
            touch_sensitivity: finite_or(
                self.touch_sensitivity,
                d.touch_sensitivity,
            ),
            key_impulse: finite_or(self.key_impulse, d.key_impulse),
            friction_base: finite_or(
                self.friction_base,
                d.friction_base,
            )
            .clamp(1e-3, 0.9999),
            stiffness: finite_or(self.stiffness, d.stiffness).max(0.0),
            min_velocity: finite_or(self.min_velocity, d.min_velocity)
                .abs(),
            max_velocity: finite_or(self.max_velocity, d.max_velocity)
                .abs(),
            snap_velocity: finite_or(
                self.snap_velocity,
                d.snap_velocity,
            )
            .abs(),
            snap_epsilon: finite_or(self.snap_epsilon, d.snap_epsilon)
                .abs(),
            boost_multiplier: finite_or(
                self.boost_multiplier,
                d.boost_multiplier,
            )
            .max(1.0),
        }
    }
}

impl CacheDoc {
    fn into_settings(self) -> CacheSettings {
        let d = CacheSettings::default();
        CacheSettings {
            capacity: self.capacity.unwrap_or(d.capacity).max(1),
            quantum_turns: finite_or(
                self.quantum_turns,
                d.quantum_turns,
            )
            .abs()
            .max(1e-4),
        }
    }
}

/// Fall back to `default` when the value is absent or not finite.
fn finite_or(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = load_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn unknown_mode_falls_back_to_helix_preset() {
        let cfg = load_str("[placement]\nmode = \"dodecahedron\"\n")
            .unwrap();
        assert_eq!(
            cfg.placement(),
            &PlacementMode::Helix(HelixParams::default())
        );
    }

    #[test]
    fn missing_fields_take_mode_preset_values() {
        let cfg = load_str(
            "[placement]\nmode = \"wave\"\nwave_amplitude = 120.0\n",
        )
        .unwrap();
        let PlacementMode::Wave(p) = cfg.placement() else {
            panic!("expected wave mode");
        };
        assert_eq!(p.wave_amplitude, 120.0);
        assert_eq!(
            p.wave_frequency,
            WaveParams::default().wave_frequency
        );
    }

    #[test]
    fn invalid_parameters_fall_back_to_the_mode_preset() {
        let cfg =
            load_str("[placement]\nmode = \"cylinder\"\nradius = -10.0\n")
                .unwrap();
        assert_eq!(
            cfg.placement(),
            &PlacementMode::Cylinder(CylinderParams::default())
        );
    }

    #[test]
    fn syntax_error_is_reported() {
        assert!(load_str("[placement\nmode=").is_err());
    }
}
