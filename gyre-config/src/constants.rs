//! Tuning constants for the Gyre engine.
//!
//! This module centralizes all motion and geometry tuning to make
//! adjustment easier. Velocities are expressed in turns per second
//! (1 turn = one full revolution of the carousel).

/// Motion controller tuning.
pub mod motion {
    /// Velocity added per pixel of wheel `delta_y` (turns/s per px).
    pub const WHEEL_SENSITIVITY: f32 = 0.002;

    /// Velocity added per pixel of touch drag (turns/s per px).
    /// Touch drags report larger deltas than wheel ticks, so this is
    /// deliberately higher.
    pub const TOUCH_SENSITIVITY: f32 = 0.004;

    /// Fixed impulse per arrow/page keypress (turns/s).
    pub const KEY_IMPULSE: f32 = 0.35;

    /// Per-frame velocity retention at a 60fps reference rate. Actual
    /// decay is `friction_base.powf(dt * 60)` so behavior matches across
    /// refresh rates.
    pub const FRICTION_BASE: f32 = 0.92;

    /// Spring constant toward an active snap target (1/s²-ish; applied
    /// as `(target - position) * stiffness * dt`).
    pub const STIFFNESS: f32 = 8.0;

    /// Velocity magnitude below which the controller goes idle (turns/s).
    pub const MIN_VELOCITY: f32 = 0.01;

    /// Hard velocity clamp (turns/s).
    pub const MAX_VELOCITY: f32 = 3.0;

    /// Velocity below which snapping to a nearby snap point engages.
    pub const SNAP_VELOCITY: f32 = 0.08;

    /// Maximum distance to a snap point for the snap to engage (turns).
    pub const SNAP_EPSILON: f32 = 0.02;

    /// Velocity clamp multiplier while boost (e.g. Shift) is held.
    pub const BOOST_MULTIPLIER: f32 = 2.5;

    /// Upper bound on integration dt in seconds (30fps floor). Prevents
    /// velocity spikes when frames are dropped.
    pub const DT_CLAMP_S: f32 = 0.033;
}

/// Position cache tuning.
pub mod cache {
    /// Scroll offsets are quantized to this granularity (turns) before
    /// being used as cache keys. Keying on raw floats would almost never
    /// hit due to floating-point noise.
    pub const QUANTUM_TURNS: f32 = 0.01;

    /// Entry count beyond which the cache is wholesale cleared.
    pub const CAPACITY: usize = 4096;
}

/// Placement calculator tuning.
pub mod placement {
    /// Fraction of `vertical_span` applied per turn of scroll as a
    /// parallax adjustment to the vertical offset.
    pub const PARALLAX_FACTOR: f32 = 0.25;

    /// Minimum safe denominator substituted wherever an index
    /// normalization could divide by zero (e.g. `total - 1`).
    pub const MIN_DENOM: f32 = 1.0;
}
