use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::core::config::SimConfig;
use crate::cradle::params::CradleParams;
use crate::interaction::controls::LastRejection;
use crate::rendering::palette;

const HUD_Z: f32 = 500.0;
const HUD_MARGIN: f32 = 16.0;

/// Marker for the parameter readout in the top-left corner.
#[derive(Component)]
pub struct HudReadout;

/// Marker for the rejection line under the readout; empty while input is clean.
#[derive(Component)]
pub struct HudWarning;

pub fn setup_hud(mut commands: Commands, cfg: Res<SimConfig>) {
    let left = -cfg.window.width / 2.0 + HUD_MARGIN;
    let top = cfg.window.height / 2.0 - HUD_MARGIN;

    commands.spawn((
        Name::new("HudReadout"),
        HudReadout,
        Text2d::new(""),
        TextFont {
            font_size: 15.0,
            ..Default::default()
        },
        TextColor(palette::HUD_TEXT),
        Anchor::TopLeft,
        Transform::from_xyz(left, top, HUD_Z),
    ));
    commands.spawn((
        Name::new("HudWarning"),
        HudWarning,
        Text2d::new(""),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(palette::HUD_WARN),
        Anchor::TopLeft,
        Transform::from_xyz(left, top - 52.0, HUD_Z),
    ));
}

/// Rewrites the readout every frame. Runs after the rebuild step, so the
/// numbers always describe the scene actually on screen.
pub fn update_hud(
    params: Res<CradleParams>,
    mut text_q: Query<&mut Text2d, With<HudReadout>>,
) {
    let Some(mut text) = text_q.iter_mut().next() else {
        return;
    };
    text.0 = format!(
        "balls {}   spacing {}   rope {}\n\
         Up/Down balls | Left/Right spacing | PgUp/PgDn rope | R reset | drag a bob | Esc quit",
        params.ball_count, params.spacing, params.rope_length
    );
}

pub fn update_hud_warning(
    last: Res<LastRejection>,
    mut text_q: Query<&mut Text2d, With<HudWarning>>,
) {
    let Some(mut text) = text_q.iter_mut().next() else {
        return;
    };
    text.0 = match &last.0 {
        Some(err) => err.to_string(),
        None => String::new(),
    };
}
