use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::SimConfig;

/// World scale: 100 pixels to the meter keeps the pixel-sized geometry in
/// Rapier's comfortable numeric range.
pub const PIXELS_PER_METER: f32 = 100.0;

pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            PIXELS_PER_METER,
        ))
        .add_systems(Update, apply_gravity_config);
    }
}

/// Pushes configured gravity into Rapier on startup and on every config
/// change thereafter.
fn apply_gravity_config(cfg: Res<SimConfig>, mut rapier_cfg: Query<&mut RapierConfiguration>) {
    if !cfg.is_changed() {
        return;
    }
    let Ok(mut rapier) = rapier_cfg.single_mut() else {
        return;
    };
    rapier.gravity = Vect::new(0.0, cfg.gravity.y);
    info!("Physics: gravity set to (0, {})", cfg.gravity.y);
}
