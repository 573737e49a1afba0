//! Motion: input normalization and the inertia/scroll controller.

pub mod config;
pub mod controller;
pub mod messages;
pub mod update;

// Re-export primary types for convenience
pub use config::MotionConfig;
pub use controller::MotionController;
pub use messages::{InputEvent, MotionMessage, StepDirection};
pub use update::update;
