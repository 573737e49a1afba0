//! Message dispatch: routes motion messages to a scene's controller and
//! publishes the resulting offset back into the scene state.

use gyre_model::SceneKey;

use crate::motion::messages::MotionMessage;
use crate::scene::{FrameSnapshot, SceneRegistry};

/// Apply one motion message to the scene registered under `key`.
///
/// Returns a fresh snapshot when the scroll offset moved (only `Tick` can
/// move it); input, snap, stop, and boost messages mutate the controller
/// and return None. Unknown keys are logged and ignored.
pub fn update(
    registry: &mut SceneRegistry,
    key: &SceneKey,
    message: MotionMessage,
) -> Option<FrameSnapshot> {
    let Some((scene, controller)) = registry.pair_mut(key) else {
        log::warn!("motion message for unregistered scene {key:?}");
        return None;
    };

    match message {
        MotionMessage::Input(event) => {
            controller.apply_input(event);
            None
        }
        MotionMessage::Tick(now) => {
            let offset = controller.tick_at(now)?;
            scene.set_scroll_offset(offset);
            Some(scene.snapshot())
        }
        MotionMessage::SnapTo(target) => {
            controller.snap_to(target);
            None
        }
        MotionMessage::Stop => {
            controller.stop();
            None
        }
        MotionMessage::SetBoost(active) => {
            controller.set_boost(active);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::messages::InputEvent;
    use std::time::{Duration, Instant};

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn tick_publishes_the_offset_into_the_scene() {
        let mut registry = SceneRegistry::new();
        registry.ensure(SceneKey::Showcase, 16);

        update(
            &mut registry,
            &SceneKey::Showcase,
            MotionMessage::Input(InputEvent::Wheel { delta_y: 600.0 }),
        );

        let t0 = Instant::now();
        let mut snapshot = None;
        for i in 0..10u32 {
            if let Some(s) = update(
                &mut registry,
                &SceneKey::Showcase,
                MotionMessage::Tick(t0 + FRAME * (i + 1)),
            ) {
                snapshot = Some(s);
            }
        }

        let snapshot = snapshot.expect("offset should have moved");
        assert!(snapshot.scroll_offset > 0.0);
        assert_eq!(
            registry
                .scene(&SceneKey::Showcase)
                .unwrap()
                .scroll_offset(),
            snapshot.scroll_offset
        );
    }

    #[test]
    fn stop_then_tick_yields_no_snapshot() {
        let mut registry = SceneRegistry::new();
        registry.ensure(SceneKey::Showcase, 16);

        update(
            &mut registry,
            &SceneKey::Showcase,
            MotionMessage::Input(InputEvent::Wheel { delta_y: 600.0 }),
        );
        update(&mut registry, &SceneKey::Showcase, MotionMessage::Stop);
        // Repeated stop is harmless.
        update(&mut registry, &SceneKey::Showcase, MotionMessage::Stop);

        let t0 = Instant::now();
        assert_eq!(
            update(
                &mut registry,
                &SceneKey::Showcase,
                MotionMessage::Tick(t0 + FRAME),
            ),
            None
        );
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut registry = SceneRegistry::new();
        assert_eq!(
            update(
                &mut registry,
                &SceneKey::Custom("missing"),
                MotionMessage::Stop,
            ),
            None
        );
    }
}
