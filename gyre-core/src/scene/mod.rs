//! Scene state and the multi-carousel registry.

pub mod registry;
pub mod state;

pub use registry::SceneRegistry;
pub use state::{FrameSnapshot, SceneState};
