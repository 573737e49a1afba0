use std::time::Instant;

/// Direction of a discrete keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Back,
}

impl StepDirection {
    /// Sign applied to the key impulse: forward scrolls positive.
    pub fn sign(self) -> f32 {
        match self {
            StepDirection::Forward => 1.0,
            StepDirection::Back => -1.0,
        }
    }
}

/// A raw input event from the (out-of-scope) rendering host, before
/// normalization into a velocity impulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Wheel movement; `delta_y` in pixels, positive scrolling forward.
    Wheel { delta_y: f32 },
    /// Touch drag; `delta_y` in pixels of accumulated drag distance.
    TouchDrag { delta_y: f32 },
    /// Arrow/page key press. Each press is one fixed impulse.
    Key(StepDirection),
}

/// Messages driving a scene's motion controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionMessage {
    Input(InputEvent),
    /// Frame-synchronized tick with the frame timestamp.
    Tick(Instant),
    /// Begin a spring animation toward an absolute offset (turns).
    SnapTo(f32),
    /// Cancel all motion. Safe from any state, idempotent.
    Stop,
    SetBoost(bool),
}
