//! Debug module: feature gated runtime visualization & stats logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier2d::prelude::Velocity;
#[cfg(feature = "debug")]
use bevy_rapier2d::render::{DebugRenderContext, RapierDebugRenderPlugin};

#[cfg(feature = "debug")]
use crate::core::components::Bob;
#[cfg(feature = "debug")]
use crate::core::config::SimConfig;
#[cfg(feature = "debug")]
use crate::cradle::spawn::CurrentCradle;
#[cfg(feature = "debug")]
use crate::interaction::drag::{ActiveDrag, BOB_MASS};
#[cfg(feature = "debug")]
use crate::interaction::pointer::PointerState;

#[cfg(feature = "debug")]
#[derive(Resource)]
struct DebugCadence(Timer);
#[cfg(feature = "debug")]
impl Default for DebugCadence {
    fn default() -> Self {
        Self(Timer::from_seconds(5.0, TimerMode::Repeating))
    }
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        fn apply_initial_wireframe(cfg: Res<SimConfig>, mut ctx: ResMut<DebugRenderContext>) {
            ctx.enabled = cfg.rapier_debug;
        }

        // F2 flips the collider wireframe overlay at runtime.
        fn toggle_wireframe(keys: Res<ButtonInput<KeyCode>>, ctx: Option<ResMut<DebugRenderContext>>) {
            if keys.just_pressed(KeyCode::F2) {
                if let Some(mut c) = ctx {
                    c.enabled = !c.enabled;
                    info!("Debug: rapier wireframe {}", if c.enabled { "on" } else { "off" });
                }
            }
        }

        fn pointer_gizmo(
            pointer: Res<PointerState>,
            active: Res<ActiveDrag>,
            bobs: Query<&Transform, With<Bob>>,
            mut gizmos: Gizmos,
        ) {
            if !pointer.pressed {
                return;
            }
            let Some(p) = pointer.world_pos else {
                return;
            };
            gizmos.circle_2d(p, 8.0, Color::srgb(1.0, 1.0, 0.2));
            if let Some(bob) = active.bob {
                if let Ok(tf) = bobs.get(bob) {
                    gizmos.line_2d(p, tf.translation.truncate(), Color::srgb(1.0, 0.5, 0.0));
                }
            }
        }

        fn periodic_stats(
            time: Res<Time>,
            mut cadence: ResMut<DebugCadence>,
            current: Res<CurrentCradle>,
            bobs: Query<&Velocity, With<Bob>>,
        ) {
            if !cadence.0.tick(time.delta()).just_finished() {
                return;
            }
            let kinetic: f32 = bobs
                .iter()
                .map(|v| 0.5 * BOB_MASS * v.linvel.length_squared())
                .sum();
            info!(
                target: "stats",
                "generation {} | bobs {} | kinetic {:.1}",
                current.generation,
                bobs.iter().len(),
                kinetic
            );
        }

        app.init_resource::<DebugCadence>()
            .add_plugins(RapierDebugRenderPlugin::default().disabled())
            .add_systems(Startup, apply_initial_wireframe)
            .add_systems(Update, (toggle_wireframe, pointer_gizmo, periodic_stats));
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
