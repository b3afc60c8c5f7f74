use bevy::prelude::*;

/// One frame of pointer state in world coordinates, unified across mouse and
/// touch. Drag logic reads only this resource; headless tests write it
/// directly instead of synthesizing window events.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerState {
    pub world_pos: Option<Vec2>,
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        return cursor_world_pos(camera_q, touch.position());
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(camera_q, cursor)
}

/// Samples mouse and touch input into [`PointerState`]. Without a window or
/// camera the press edges still update, so bindings stay testable.
pub fn read_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut pointer: ResMut<PointerState>,
) {
    pointer.just_pressed =
        buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some();
    pointer.just_released =
        buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some();
    pointer.pressed = buttons.pressed(MouseButton::Left) || touches.iter().next().is_some();

    let Ok(window) = windows_q.single() else {
        return;
    };
    pointer.world_pos = primary_pointer_world_pos(window, &touches, &camera_q);
}
