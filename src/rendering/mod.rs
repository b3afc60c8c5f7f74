pub mod camera;
pub mod hud;
pub mod palette;
pub mod ropes;

use bevy::prelude::*;

use crate::core::system::system_order::PresentSet;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (camera::setup_camera, hud::setup_hud))
            .add_systems(
                Update,
                (hud::update_hud, hud::update_hud_warning, ropes::draw_ropes)
                    .in_set(PresentSet),
            );
    }
}
