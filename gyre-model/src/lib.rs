//! Core data model definitions shared across Gyre crates.
#![allow(missing_docs)]

pub mod error;
pub mod keys;
pub mod mode;
pub mod prelude;
pub mod transform;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use keys::SceneKey;
pub use mode::{
    CylinderParams, GridParams, HelixParams, PlacementMode, PlacementModeKind,
    SpiralParams, WaveParams,
};
pub use transform::{CardTransform, DepthTier};
