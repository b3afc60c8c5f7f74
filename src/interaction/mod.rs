pub mod controls;
pub mod drag;
pub mod pointer;
pub mod session;

use bevy::prelude::*;

use crate::core::system::system_order::{PointerSet, RebuildSet};
use crate::cradle::spawn::rebuild_cradle;

pub use controls::{LastRejection, ParamInput, ParamRejected};
pub use drag::ActiveDrag;
pub use pointer::PointerState;

/// Pointer dragging plus the raw-text control surface. Drag systems run
/// before any rebuild so they never queue commands against entities that a
/// parameter change is about to despawn.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<ActiveDrag>()
            .init_resource::<LastRejection>()
            .add_event::<ParamInput>()
            .add_event::<ParamRejected>()
            .add_systems(Startup, drag::setup_pointer_anchor)
            .add_systems(
                Update,
                (
                    pointer::read_pointer,
                    drag::end_drag,
                    drag::begin_drag,
                    drag::follow_pointer,
                )
                    .chain()
                    .in_set(PointerSet),
            )
            .add_systems(
                Update,
                (
                    controls::keyboard_param_input.in_set(PointerSet),
                    controls::exit_on_escape,
                    controls::apply_param_inputs
                        .in_set(RebuildSet)
                        .before(rebuild_cradle),
                ),
            );
    }
}
