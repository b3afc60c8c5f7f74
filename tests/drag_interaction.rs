use bevy::prelude::*;
use bevy::sprite::ColorMaterial;
use bevy_rapier2d::prelude::ImpulseJoint;

use cradle_lab::core::components::{Bob, BobIndex, DragConstraint, PointerAnchor};
use cradle_lab::core::config::SimConfig;
use cradle_lab::core::system::system_order::{PointerSet, PresentSet, RebuildSet};
use cradle_lab::cradle::{CradleParams, RebuildCradle};
use cradle_lab::interaction::{ActiveDrag, InteractionPlugin, PointerState};

// Default layout: five bobs with pitch 50 resting at y -100, x -100..100.
const MIDDLE_BOB_REST: Vec2 = Vec2::new(0.0, -100.0);

fn test_app_with(cfg: SimConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.insert_resource(CradleParams::default());
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<ColorMaterial>>();
    app.insert_resource(ButtonInput::<MouseButton>::default());
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.init_resource::<Touches>();
    app.configure_sets(
        Update,
        (
            PointerSet,
            RebuildSet.after(PointerSet),
            PresentSet.after(RebuildSet),
        ),
    );
    app.add_plugins((cradle_lab::cradle::CradlePlugin, InteractionPlugin));
    // First update spawns the cradle and the pointer anchor.
    app.update();
    app
}

fn test_app() -> App {
    test_app_with(SimConfig::default())
}

// There is no window in these tests, so `read_pointer` leaves the injected
// world position alone and only refreshes the press edges.
fn point_at(app: &mut App, pos: Vec2) {
    app.world_mut().resource_mut::<PointerState>().world_pos = Some(pos);
}

fn press(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
}

fn release(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .release(MouseButton::Left);
}

fn clear_edges(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
}

fn count_springs(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<DragConstraint>>()
        .iter(app.world())
        .count()
}

fn anchor_entity(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<PointerAnchor>>()
        .single(app.world())
        .unwrap()
}

fn anchor_pos(app: &mut App) -> Vec2 {
    app.world_mut()
        .query_filtered::<&Transform, With<PointerAnchor>>()
        .single(app.world())
        .unwrap()
        .translation
        .truncate()
}

#[test]
fn press_near_bob_starts_drag() {
    let mut app = test_app();
    point_at(&mut app, MIDDLE_BOB_REST);
    press(&mut app);
    app.update();

    let active = app.world().resource::<ActiveDrag>();
    let bob = active.bob.expect("bob grabbed");
    let joint = active.joint.expect("spring spawned");
    assert_eq!(count_springs(&mut app), 1);
    assert_eq!(app.world().get::<BobIndex>(bob).unwrap().0, 2);

    let anchor = anchor_entity(&mut app);
    let impulse = app.world().get::<ImpulseJoint>(joint).unwrap();
    assert_eq!(impulse.parent, anchor, "spring pulls towards the anchor body");
    assert_eq!(anchor_pos(&mut app), MIDDLE_BOB_REST);
}

#[test]
fn anchor_follows_pointer_while_held() {
    let mut app = test_app();
    point_at(&mut app, MIDDLE_BOB_REST);
    press(&mut app);
    app.update();
    assert_eq!(count_springs(&mut app), 1);

    clear_edges(&mut app);
    point_at(&mut app, Vec2::new(30.0, -80.0));
    app.update();

    assert_eq!(anchor_pos(&mut app), Vec2::new(30.0, -80.0));
    assert_eq!(count_springs(&mut app), 1, "moving must not respawn the spring");
    assert!(app.world().resource::<ActiveDrag>().bob.is_some());
}

#[test]
fn release_removes_the_spring() {
    let mut app = test_app();
    point_at(&mut app, MIDDLE_BOB_REST);
    press(&mut app);
    app.update();
    assert_eq!(count_springs(&mut app), 1);

    release(&mut app);
    app.update();

    assert_eq!(count_springs(&mut app), 0);
    let active = app.world().resource::<ActiveDrag>();
    assert!(active.bob.is_none());
    assert!(active.joint.is_none());
}

#[test]
fn pointer_leaving_the_window_releases() {
    let mut app = test_app();
    point_at(&mut app, MIDDLE_BOB_REST);
    press(&mut app);
    app.update();
    assert_eq!(count_springs(&mut app), 1);

    clear_edges(&mut app);
    app.world_mut().resource_mut::<PointerState>().world_pos = None;
    app.update();

    assert_eq!(count_springs(&mut app), 0);
    assert!(app.world().resource::<ActiveDrag>().bob.is_none());
}

#[test]
fn press_on_empty_space_is_ignored() {
    let mut app = test_app();
    point_at(&mut app, Vec2::new(300.0, 200.0));
    press(&mut app);
    app.update();

    assert_eq!(count_springs(&mut app), 0);
    assert!(app.world().resource::<ActiveDrag>().bob.is_none());
}

#[test]
fn press_outside_grab_radius_is_ignored() {
    let mut app = test_app();
    // 60 px above the middle bob, outside the 35 px grab radius.
    point_at(&mut app, MIDDLE_BOB_REST + Vec2::new(0.0, 60.0));
    press(&mut app);
    app.update();

    assert_eq!(count_springs(&mut app), 0);
    assert!(app.world().resource::<ActiveDrag>().bob.is_none());
}

#[test]
fn nearest_bob_wins_when_two_are_in_range() {
    let mut app = test_app();
    // 20 px from the middle bob, 30 px from its left neighbour.
    point_at(&mut app, MIDDLE_BOB_REST + Vec2::new(-20.0, 0.0));
    press(&mut app);
    app.update();

    let bob = app.world().resource::<ActiveDrag>().bob.expect("grabbed");
    assert_eq!(app.world().get::<BobIndex>(bob).unwrap().0, 2);
}

#[test]
fn rebuild_during_drag_releases_cleanly() {
    let mut app = test_app();
    point_at(&mut app, MIDDLE_BOB_REST);
    press(&mut app);
    app.update();
    assert_eq!(count_springs(&mut app), 1);

    clear_edges(&mut app);
    app.world_mut().send_event(RebuildCradle(CradleParams {
        ball_count: 3,
        ..CradleParams::default()
    }));
    // Rebuild frame: the spring dies with its parent bob.
    app.update();
    assert_eq!(count_springs(&mut app), 0);

    // Next frame the drag notices the bob is gone and resets itself.
    app.update();
    let active = app.world().resource::<ActiveDrag>();
    assert!(active.bob.is_none());
    assert!(active.joint.is_none());

    let bobs = app
        .world_mut()
        .query_filtered::<(), With<Bob>>()
        .iter(app.world())
        .count();
    assert_eq!(bobs, 3);
}

#[test]
fn drag_can_be_disabled_in_config() {
    let mut cfg = SimConfig::default();
    cfg.drag.enabled = false;
    let mut app = test_app_with(cfg);

    point_at(&mut app, MIDDLE_BOB_REST);
    press(&mut app);
    app.update();

    assert_eq!(count_springs(&mut app), 0);
    assert!(app.world().resource::<ActiveDrag>().bob.is_none());
}
