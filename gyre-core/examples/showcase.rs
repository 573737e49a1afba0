//! Minimal driver: spin up a showcase scene, give it a wheel flick, and
//! print the front-facing cards as the inertia decays.
//!
//! Run with `RUST_LOG=debug cargo run --example showcase` to watch the
//! cache and controller logs.

use std::time::{Duration, Instant};

use gyre_config::{Config, ConfigAction, reduce};
use gyre_core::motion::{InputEvent, MotionMessage, update};
use gyre_core::scene::SceneRegistry;
use gyre_model::{PlacementModeKind, SceneKey};

const CARDS: usize = 16;
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let config = reduce(
        &Config::default(),
        ConfigAction::SelectMode(PlacementModeKind::Helix),
    );

    let mut registry = SceneRegistry::new();
    registry.ensure_with_config(SceneKey::Showcase, CARDS, &config);
    registry.apply_config(&config);

    update(
        &mut registry,
        &SceneKey::Showcase,
        MotionMessage::Input(InputEvent::Wheel { delta_y: 480.0 }),
    );

    let t0 = Instant::now();
    for frame in 0..240u32 {
        let tick = MotionMessage::Tick(t0 + FRAME * (frame + 1));
        let Some(snapshot) = update(&mut registry, &SceneKey::Showcase, tick)
        else {
            continue;
        };

        if frame % 30 == 0 {
            println!(
                "frame {frame:3}  offset {:+.3} turns",
                snapshot.scroll_offset
            );
            for index in 0..CARDS {
                let t = snapshot.card(index);
                if snapshot.depth(index) < 0.2 {
                    println!(
                        "  card {index:2}  x {:+7.1}  z {:+7.1}  \
                         rotY {:6.1}  opacity {:.1}",
                        t.translate_x, t.translate_z, t.rotate_y, t.opacity
                    );
                }
            }
        }
    }

    let controller = registry
        .controller(&SceneKey::Showcase)
        .expect("scene was registered above");
    println!(
        "settled: offset {:+.3} turns, velocity {:+.4} turns/s",
        controller.offset(),
        controller.velocity()
    );
}
