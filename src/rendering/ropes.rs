use bevy::prelude::*;

use crate::core::components::{Bob, RopeAnchor};
use crate::core::config::SimConfig;
use crate::rendering::palette;

/// Draws each rope as a line from its top-bar anchor to the live bob center.
/// Gizmos are immediate-mode, so despawned bobs leave nothing behind.
pub fn draw_ropes(
    mut gizmos: Gizmos,
    cfg: Res<SimConfig>,
    bobs: Query<(&Transform, &RopeAnchor), With<Bob>>,
) {
    if !cfg.draw_ropes {
        return;
    }
    for (tf, anchor) in bobs.iter() {
        gizmos.line_2d(anchor.0, tf.translation.truncate(), palette::ROPE_LINE);
    }
}
