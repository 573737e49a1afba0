//! Gyre engine: the geometry and motion core of a 3D card carousel.
//!
//! Data flows one direction: input events feed the motion controller,
//! which owns the scroll offset; the placement calculator turns
//! `(index, total, offset, mode)` into per-card 3D transforms; the scene
//! layer snapshots the offset once per frame so every card in a render
//! pass sees the same value. Nothing in the geometry path can fail — all
//! numeric edge cases degrade to safe defaults instead of NaN.

pub mod math;
pub mod motion;
pub mod placement;
pub mod scene;

pub use math::{depth, normalize_signed_deg, safe_f32};
pub use motion::{
    InputEvent, MotionConfig, MotionController, MotionMessage,
    StepDirection, update,
};
pub use placement::{PositionCache, card_transform};
pub use scene::{FrameSnapshot, SceneRegistry, SceneState};
