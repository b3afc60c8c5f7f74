use bevy::app::AppExit;
use bevy::prelude::*;

use crate::core::config::SimConfig;
use crate::cradle::params::{CradleParams, InvalidParameter, ParamField};
use crate::cradle::spawn::RebuildCradle;

/// Raw text handed to one control, exactly as the outer surface produced it.
/// Parsing and validation happen on the receiving side, never at the source.
#[derive(Event, Debug, Clone)]
pub struct ParamInput {
    pub field: ParamField,
    pub raw: String,
}

impl ParamInput {
    pub fn new(field: ParamField, raw: impl Into<String>) -> Self {
        Self {
            field,
            raw: raw.into(),
        }
    }
}

/// Published whenever a [`ParamInput`] fails validation. The live scene and
/// the current parameters are untouched when this fires.
#[derive(Event, Debug, Clone)]
pub struct ParamRejected(pub InvalidParameter);

/// Most recent rejection, kept for the HUD until a value applies cleanly.
#[derive(Resource, Default, Debug)]
pub struct LastRejection(pub Option<InvalidParameter>);

// Keyboard steps per press.
const SPACING_STEP: f32 = 2.0;
const ROPE_STEP: f32 = 10.0;

/// Keyboard surface for the three controls. Steps are emitted as raw text so
/// they take the same validation path as any other input source; stepping the
/// count below 1 is rejected downstream, not clamped here.
pub fn keyboard_param_input(
    keys: Res<ButtonInput<KeyCode>>,
    params: Res<CradleParams>,
    cfg: Res<SimConfig>,
    mut out: EventWriter<ParamInput>,
) {
    if keys.just_pressed(KeyCode::ArrowUp) {
        out.write(ParamInput::new(
            ParamField::BallCount,
            (params.ball_count + 1).to_string(),
        ));
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        out.write(ParamInput::new(
            ParamField::BallCount,
            (params.ball_count as i64 - 1).to_string(),
        ));
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        out.write(ParamInput::new(
            ParamField::Spacing,
            (params.spacing + SPACING_STEP).to_string(),
        ));
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        out.write(ParamInput::new(
            ParamField::Spacing,
            (params.spacing - SPACING_STEP).to_string(),
        ));
    }
    if keys.just_pressed(KeyCode::PageUp) || keys.just_pressed(KeyCode::Equal) {
        out.write(ParamInput::new(
            ParamField::RopeLength,
            (params.rope_length + ROPE_STEP).to_string(),
        ));
    }
    if keys.just_pressed(KeyCode::PageDown) || keys.just_pressed(KeyCode::Minus) {
        out.write(ParamInput::new(
            ParamField::RopeLength,
            (params.rope_length - ROPE_STEP).to_string(),
        ));
    }
    if keys.just_pressed(KeyCode::KeyR) {
        let initial = &cfg.initial;
        out.write(ParamInput::new(
            ParamField::BallCount,
            initial.ball_count.to_string(),
        ));
        out.write(ParamInput::new(
            ParamField::Spacing,
            initial.spacing.to_string(),
        ));
        out.write(ParamInput::new(
            ParamField::RopeLength,
            initial.rope_length.to_string(),
        ));
    }
}

/// Folds the frame's raw inputs over the current parameters. Valid changes
/// become a single rebuild request; invalid ones are reported and skipped,
/// leaving every previous value in force.
pub fn apply_param_inputs(
    mut inputs: EventReader<ParamInput>,
    params: Res<CradleParams>,
    mut rebuilds: EventWriter<RebuildCradle>,
    mut rejections: EventWriter<ParamRejected>,
    mut last: ResMut<LastRejection>,
) {
    let mut next = *params;
    for input in inputs.read() {
        match next.with_field(input.field, &input.raw) {
            Ok(updated) => {
                next = updated;
                last.0 = None;
            }
            Err(err) => {
                warn!("Controls: {err}");
                last.0 = Some(err.clone());
                rejections.write(ParamRejected(err));
            }
        }
    }
    if next != *params {
        rebuilds.write(RebuildCradle(next));
    }
}

pub fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut ev_exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Controls: escape pressed, exiting");
        ev_exit.write(AppExit::Success);
    }
}
