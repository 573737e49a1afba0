//! Engine/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in gyre-core or other consuming layers.

pub use super::error::{ModelError, Result as ModelResult};
pub use super::keys::SceneKey;
pub use super::mode::{
    CylinderParams, GridParams, HelixParams, PlacementMode,
    PlacementModeKind, SpiralParams, WaveParams,
};
pub use super::transform::{CardTransform, DepthTier};
