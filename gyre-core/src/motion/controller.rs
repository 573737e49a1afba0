//! Inertia/scroll controller.
//!
//! Two pseudo-states: Idle (velocity below `min_velocity`, no spring
//! target) and Animating. Input impulses move Idle → Animating; the
//! per-frame `tick_at` integrates velocity and position until the idle
//! condition holds again. Integration is delta-time based so visual
//! behavior matches across display refresh rates.
//!
//! The controller exclusively owns the scroll offset and velocity;
//! placement and rendering only read the offset through a frame
//! snapshot. That single-writer rule is what makes the engine lock-free.

use std::time::Instant;

use gyre_config::constants::motion::DT_CLAMP_S;

use super::config::MotionConfig;
use super::messages::InputEvent;
use crate::math::safe_f32;

/// Offset movement below this is reported as "no change" (turns).
const MOVE_EPS: f32 = 1e-6;

/// Distance to a spring target at which the controller settles exactly
/// onto it (turns).
const SETTLE_EPS: f32 = 1e-3;

#[derive(Debug, Default, Clone)]
pub struct MotionController {
    /// Configuration; determines sensitivities, decay, and clamps.
    cfg: MotionConfig,
    /// Scroll offset in turns. Fractional, negative, unbounded.
    position: f32,
    /// Current velocity in turns/s (signed).
    v: f32,
    /// Active spring target, if any.
    target: Option<f32>,
    /// Offsets (turns) the controller may settle onto when slow.
    snap_points: Vec<f32>,
    /// Whether the controller is animating.
    active: bool,
    /// Boost mode active (e.g. Shift pressed).
    boost_active: bool,
    /// Last tick time.
    last_tick: Option<Instant>,
}

impl MotionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom tuning (typically mirrored from the runtime
    /// config).
    pub fn new_with_config(cfg: MotionConfig) -> Self {
        Self {
            cfg,
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current scroll offset in turns.
    pub fn offset(&self) -> f32 {
        self.position
    }

    /// Current velocity in turns/s.
    pub fn velocity(&self) -> f32 {
        self.v
    }

    /// Overwrite the scroll offset (state restoration). Does not touch
    /// velocity or the spring target.
    pub fn set_offset(&mut self, offset: f32) {
        self.position = safe_f32(offset);
    }

    /// Replace the snap points the controller may settle onto.
    pub fn set_snap_points(&mut self, points: Vec<f32>) {
        self.snap_points = points;
        self.snap_points.retain(|p| p.is_finite());
    }

    pub fn set_boost(&mut self, active: bool) {
        self.boost_active = active;
    }

    /// Normalize an input event into a velocity impulse and apply it.
    pub fn apply_input(&mut self, event: InputEvent) {
        let impulse = match event {
            InputEvent::Wheel { delta_y } => {
                safe_f32(delta_y) * self.cfg.wheel_sensitivity
            }
            InputEvent::TouchDrag { delta_y } => {
                safe_f32(delta_y) * self.cfg.touch_sensitivity
            }
            InputEvent::Key(dir) => dir.sign() * self.cfg.key_impulse,
        };
        self.impulse(impulse);
    }

    /// Add velocity directly (turns/s). Non-finite input is discarded.
    pub fn impulse(&mut self, add: f32) {
        let add = safe_f32(add);
        if add == 0.0 {
            return;
        }
        let vmax = self.max_speed();
        self.v = (self.v + add).clamp(-vmax, vmax);
        self.wake();
    }

    /// Begin a spring animation toward an absolute offset (turns).
    pub fn snap_to(&mut self, target: f32) {
        let target = safe_f32(target);
        self.target = Some(target);
        self.wake();
    }

    /// Cancel all motion: zero velocity, drop any spring target, go
    /// idle. Safe to call from any state, including mid-animation, and
    /// idempotent.
    pub fn stop(&mut self) {
        self.v = 0.0;
        self.target = None;
        self.active = false;
        self.last_tick = None;
    }

    /// Advance to `now` and return the new offset if it meaningfully
    /// moved. Returns None while idle, on the arming tick after waking,
    /// and once motion has settled.
    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }

        let last = self.last_tick.unwrap_or(now);
        let dt = now.saturating_duration_since(last);
        self.last_tick = Some(now);

        if dt.is_zero() {
            return None;
        }

        // Clamp dt to a 30fps floor to prevent spikes on frame drops.
        let dt_s = dt.as_secs_f32().min(DT_CLAMP_S);

        // Spring toward the target, if one is pending.
        if let Some(target) = self.target {
            self.v += (target - self.position) * self.cfg.stiffness * dt_s;
        }

        // Frictional decay, normalized to a 60fps-equivalent rate so the
        // decay curve is identical at any refresh rate.
        let base = self.cfg.friction_base.clamp(1e-3, 0.9999);
        self.v *= base.powf(dt_s * 60.0);

        let vmax = self.max_speed();
        self.v = self.v.clamp(-vmax, vmax);

        // Integrate position.
        let prev = self.position;
        self.position = safe_f32(self.position + self.v * dt_s);

        // Capture a nearby snap point once motion is slow enough.
        if self.v.abs() <= self.cfg.snap_velocity {
            if let Some(snap) = self.nearest_snap_point() {
                if (snap - self.position).abs() <= self.cfg.snap_epsilon {
                    self.position = snap;
                    self.v = 0.0;
                    if let Some(target) = self.target {
                        if (target - snap).abs() <= self.cfg.snap_epsilon {
                            self.target = None;
                        }
                    }
                }
            }
        }

        // Settle exactly onto the spring target once close and slow.
        if let Some(target) = self.target {
            if (target - self.position).abs() <= SETTLE_EPS
                && self.v.abs() <= self.cfg.min_velocity
            {
                self.position = target;
                self.v = 0.0;
                self.target = None;
            }
        }

        // Animating → Idle.
        if self.v.abs() < self.cfg.min_velocity && self.target.is_none() {
            self.active = false;
            self.v = 0.0;
        }

        if (self.position - prev).abs() < MOVE_EPS {
            return None;
        }
        Some(self.position)
    }

    /// Advance using the current wall clock. Prefer `tick_at` when the
    /// host supplies frame timestamps.
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    /// Transition to Animating, discarding any stale tick timestamp so
    /// the first frame after waking integrates a zero dt.
    fn wake(&mut self) {
        if !self.active {
            self.active = true;
            self.last_tick = None;
        }
    }

    fn max_speed(&self) -> f32 {
        if self.boost_active {
            self.cfg.max_velocity * self.cfg.boost_multiplier
        } else {
            self.cfg.max_velocity
        }
    }

    fn nearest_snap_point(&self) -> Option<f32> {
        self.snap_points
            .iter()
            .copied()
            .min_by(|a, b| {
                let da = (a - self.position).abs();
                let db = (b - self.position).abs();
                da.total_cmp(&db)
            })
    }
}
