//! Placement modes and their per-mode parameter sets.
//!
//! Each mode is a closed-form layout formula. The engine dispatches on the
//! `PlacementMode` tagged union by pattern matching; there is no stringly
//! typed mode lookup outside the config parsing boundary.

use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Discriminant-only view of a placement mode, used where the parameters
/// do not matter (config actions, display, parsing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlacementModeKind {
    Helix,
    Cylinder,
    Spiral,
    Wave,
    Grid,
}

impl Display for PlacementModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlacementModeKind::Helix => "helix",
            PlacementModeKind::Cylinder => "cylinder",
            PlacementModeKind::Spiral => "spiral",
            PlacementModeKind::Wave => "wave",
            PlacementModeKind::Grid => "grid",
        };
        f.write_str(name)
    }
}

impl FromStr for PlacementModeKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "helix" => Ok(PlacementModeKind::Helix),
            "cylinder" => Ok(PlacementModeKind::Cylinder),
            "spiral" => Ok(PlacementModeKind::Spiral),
            "wave" => Ok(PlacementModeKind::Wave),
            "grid" => Ok(PlacementModeKind::Grid),
            other => Err(ModelError::UnknownMode(other.to_string())),
        }
    }
}

/// Parameters for the standard helix: constant radius, cards advancing
/// vertically as they wind around the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HelixParams {
    /// Ring radius in layout units (CSS px for the DOM consumer).
    pub radius: f32,
    /// Vertical extent of one turn before spacing scaling.
    pub vertical_span: f32,
    /// Number of full revolutions the card sequence winds through.
    pub turns: f32,
    /// Multiplier on the vertical spread between consecutive cards.
    pub spacing: f32,
    /// Multiplier on the angular step between consecutive cards.
    pub angle_factor: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            radius: 420.0,
            vertical_span: 60.0,
            turns: 1.0,
            spacing: 1.0,
            angle_factor: 1.0,
        }
    }
}

/// Parameters for the cylinder: a helix with no vertical movement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CylinderParams {
    pub radius: f32,
    pub turns: f32,
    pub angle_factor: f32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: 420.0,
            turns: 1.0,
            angle_factor: 1.0,
        }
    }
}

/// Parameters for the spiral: radius grows linearly with card index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpiralParams {
    /// Radius of the innermost card.
    pub base_radius: f32,
    /// Radius gained per card index.
    pub radius_growth: f32,
    pub vertical_span: f32,
    pub turns: f32,
    pub spacing: f32,
    pub angle_factor: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            base_radius: 300.0,
            radius_growth: 14.0,
            vertical_span: 60.0,
            turns: 1.0,
            spacing: 1.0,
            angle_factor: 1.0,
        }
    }
}

/// Parameters for the wave: radius oscillates sinusoidally with card index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WaveParams {
    pub base_radius: f32,
    /// Peak radial deviation from `base_radius`.
    pub wave_amplitude: f32,
    /// Oscillation rate in radians per card index.
    pub wave_frequency: f32,
    pub vertical_span: f32,
    pub turns: f32,
    pub spacing: f32,
    pub angle_factor: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            base_radius: 380.0,
            wave_amplitude: 80.0,
            wave_frequency: 0.7,
            vertical_span: 60.0,
            turns: 1.0,
            spacing: 1.0,
            angle_factor: 1.0,
        }
    }
}

/// Parameters for the flat grid: row/column layout, no rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridParams {
    pub columns: usize,
    pub row_spacing: f32,
    pub column_spacing: f32,
    /// Z-depth gained per column of horizontal distance from center.
    pub depth: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            columns: 4,
            row_spacing: 340.0,
            column_spacing: 240.0,
            depth: 90.0,
        }
    }
}

/// A placement mode with its parameters. The active mode is selected once
/// per render pass; changing it is a user/dev action, never a per-frame
/// computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "mode", rename_all = "lowercase")
)]
pub enum PlacementMode {
    Helix(HelixParams),
    Cylinder(CylinderParams),
    Spiral(SpiralParams),
    Wave(WaveParams),
    Grid(GridParams),
}

impl Default for PlacementMode {
    fn default() -> Self {
        PlacementMode::Helix(HelixParams::default())
    }
}

impl PlacementMode {
    /// Preset parameters for the named mode.
    pub fn preset(kind: PlacementModeKind) -> Self {
        match kind {
            PlacementModeKind::Helix => {
                PlacementMode::Helix(HelixParams::default())
            }
            PlacementModeKind::Cylinder => {
                PlacementMode::Cylinder(CylinderParams::default())
            }
            PlacementModeKind::Spiral => {
                PlacementMode::Spiral(SpiralParams::default())
            }
            PlacementModeKind::Wave => {
                PlacementMode::Wave(WaveParams::default())
            }
            PlacementModeKind::Grid => {
                PlacementMode::Grid(GridParams::default())
            }
        }
    }

    pub fn kind(&self) -> PlacementModeKind {
        match self {
            PlacementMode::Helix(_) => PlacementModeKind::Helix,
            PlacementMode::Cylinder(_) => PlacementModeKind::Cylinder,
            PlacementMode::Spiral(_) => PlacementModeKind::Spiral,
            PlacementMode::Wave(_) => PlacementModeKind::Wave,
            PlacementMode::Grid(_) => PlacementModeKind::Grid,
        }
    }

    /// Whether the mode rotates cards around the scene axis. The grid is
    /// the only non-rotational layout.
    pub fn is_rotational(&self) -> bool {
        !matches!(self, PlacementMode::Grid(_))
    }

    /// Reject parameter sets that cannot produce a sensible layout. The
    /// engine itself tolerates anything, so this only guards config
    /// surfaces where a bad value is a mistake worth reporting.
    pub fn validate(&self) -> crate::error::Result<()> {
        match self {
            PlacementMode::Helix(p) => {
                positive("radius", p.radius)?;
                positive("turns", p.turns)
            }
            PlacementMode::Cylinder(p) => {
                positive("radius", p.radius)?;
                positive("turns", p.turns)
            }
            PlacementMode::Spiral(p) => {
                positive("base_radius", p.base_radius)?;
                positive("turns", p.turns)
            }
            PlacementMode::Wave(p) => {
                positive("base_radius", p.base_radius)?;
                positive("turns", p.turns)
            }
            PlacementMode::Grid(p) => {
                if p.columns == 0 {
                    return Err(ModelError::InvalidParameter {
                        name: "columns",
                        value: 0.0,
                        reason: "must be at least 1",
                    });
                }
                positive("row_spacing", p.row_spacing)
            }
        }
    }
}

fn positive(name: &'static str, value: f32) -> crate::error::Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            reason: "must be a positive finite number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_kind_parses_known_names() {
        assert_eq!(
            "helix".parse::<PlacementModeKind>().unwrap(),
            PlacementModeKind::Helix
        );
        assert_eq!(
            " Cylinder ".parse::<PlacementModeKind>().unwrap(),
            PlacementModeKind::Cylinder
        );
        assert_eq!(
            "GRID".parse::<PlacementModeKind>().unwrap(),
            PlacementModeKind::Grid
        );
    }

    #[test]
    fn mode_kind_rejects_unknown_names() {
        let err = "moebius".parse::<PlacementModeKind>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownMode(name) if name == "moebius"));
    }

    #[test]
    fn preset_round_trips_kind() {
        for kind in [
            PlacementModeKind::Helix,
            PlacementModeKind::Cylinder,
            PlacementModeKind::Spiral,
            PlacementModeKind::Wave,
            PlacementModeKind::Grid,
        ] {
            assert_eq!(PlacementMode::preset(kind).kind(), kind);
        }
    }

    #[test]
    fn validate_rejects_nonpositive_radius() {
        assert!(PlacementMode::default().validate().is_ok());

        let bad = PlacementMode::Helix(HelixParams {
            radius: -5.0,
            ..HelixParams::default()
        });
        let err = bad.validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidParameter { name: "radius", .. }
        ));

        let bad = PlacementMode::Grid(GridParams {
            columns: 0,
            ..GridParams::default()
        });
        assert!(bad.validate().is_err());
    }

    #[test]
    fn grid_is_the_only_non_rotational_mode() {
        assert!(PlacementMode::default().is_rotational());
        assert!(
            !PlacementMode::preset(PlacementModeKind::Grid).is_rotational()
        );
    }
}
