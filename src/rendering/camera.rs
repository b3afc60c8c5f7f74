use bevy::prelude::*;

pub fn setup_camera(mut commands: Commands) {
    // Bevy 0.16+: spawn Camera2d directly; Required Components supply defaults.
    commands.spawn(Camera2d);
}
