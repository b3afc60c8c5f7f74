pub mod layout;
pub mod params;
pub mod spawn;

use bevy::prelude::*;

use crate::core::system::system_order::RebuildSet;

pub use layout::{CradleLayout, BALL_SIZE};
pub use params::{CradleParams, InvalidParameter, ParamField};
pub use spawn::{CurrentCradle, RebuildCradle};

/// Owns the live composite: builds the first scene at startup and serves
/// every rebuild request after that.
pub struct CradlePlugin;

impl Plugin for CradlePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RebuildCradle>()
            .init_resource::<CradleParams>()
            .init_resource::<CurrentCradle>()
            .add_systems(
                Startup,
                (spawn::init_cradle_assets, spawn::request_initial_cradle).chain(),
            )
            .add_systems(Update, spawn::rebuild_cradle.in_set(RebuildSet));
    }
}
