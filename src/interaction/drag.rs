use bevy::prelude::*;
use bevy_rapier2d::prelude::{ImpulseJoint, RigidBody, SpringJointBuilder};

use crate::core::components::{Bob, BobIndex, BobRadius, DragConstraint, PointerAnchor};
use crate::core::config::SimConfig;
use crate::interaction::pointer::PointerState;

/// Converts the configured 0..1 pointer stiffness into a spring constant for
/// a unit-mass bob. 0.2 lands at a response of roughly 12 rad/s, a soft pull
/// that still lets the bob swing against the rope.
const DRAG_STIFFNESS_SCALE: f32 = 720.0;

/// Mass every bob is spawned with; the spring tuning assumes it.
pub const BOB_MASS: f32 = 1.0;

/// The single in-flight drag. `joint` is the transient spring entity parented
/// to the grabbed bob, so a scene rebuild removes it together with the bob.
#[derive(Resource, Default, Debug)]
pub struct ActiveDrag {
    pub bob: Option<Entity>,
    pub joint: Option<Entity>,
}

/// Spawns the kinematic body the drag spring pulls towards. It carries no
/// collider and just follows the pointer while a drag is active.
pub fn setup_pointer_anchor(mut commands: Commands) {
    commands.spawn((
        PointerAnchor,
        Name::new("PointerAnchor"),
        RigidBody::KinematicPositionBased,
        Transform::default(),
        GlobalTransform::default(),
    ));
}

/// Ends the drag on release or when the pointer leaves the window. Runs
/// before `begin_drag` so a release and press in the same frame start a
/// clean grab.
pub fn end_drag(
    pointer: Res<PointerState>,
    mut active: ResMut<ActiveDrag>,
    mut commands: Commands,
) {
    if active.bob.is_none() {
        return;
    }
    if pointer.just_released || !pointer.pressed || pointer.world_pos.is_none() {
        release(&mut active, &mut commands);
    }
}

/// Starts a drag when the pointer presses within grab range of a bob. The
/// nearest bob wins; a press on empty space does nothing.
pub fn begin_drag(
    pointer: Res<PointerState>,
    cfg: Res<SimConfig>,
    mut active: ResMut<ActiveDrag>,
    mut commands: Commands,
    mut anchor_q: Query<(Entity, &mut Transform), (With<PointerAnchor>, Without<Bob>)>,
    bobs: Query<(Entity, &Transform, &BobRadius, &BobIndex), With<Bob>>,
) {
    if !cfg.drag.enabled || active.bob.is_some() || !pointer.just_pressed {
        return;
    }
    let Some(world_pos) = pointer.world_pos else {
        return;
    };
    let Ok((anchor_entity, mut anchor_tf)) = anchor_q.single_mut() else {
        return;
    };

    let mut nearest: Option<(Entity, Vec2, usize, f32)> = None;
    for (entity, tf, radius, index) in bobs.iter() {
        let pos = tf.translation.truncate();
        let d2 = pos.distance_squared(world_pos);
        let grab_r = cfg.drag.grab_radius.max(radius.0);
        if d2 <= grab_r * grab_r && nearest.map(|(.., best)| d2 < best).unwrap_or(true) {
            nearest = Some((entity, pos, index.0, d2));
        }
    }
    let Some((bob, bob_pos, index, _)) = nearest else {
        return;
    };

    anchor_tf.translation = world_pos.extend(0.0);
    let stiffness = cfg.drag.stiffness * DRAG_STIFFNESS_SCALE;
    let damping = 2.0 * cfg.drag.damping_ratio * (stiffness * BOB_MASS).sqrt();
    let spring = SpringJointBuilder::new(0.0, stiffness, damping)
        .local_anchor1(Vec2::ZERO)
        .local_anchor2(world_pos - bob_pos);
    let joint = commands
        .spawn((
            DragConstraint,
            Name::new("DragSpring"),
            ImpulseJoint::new(anchor_entity, spring),
        ))
        .id();
    commands.entity(bob).add_child(joint);
    active.bob = Some(bob);
    active.joint = Some(joint);
    debug!("Drag: grabbed bob {index}");
}

/// Keeps the anchor under the pointer while a drag runs, and drops the drag
/// if a rebuild despawned the grabbed bob out from under it.
pub fn follow_pointer(
    pointer: Res<PointerState>,
    mut active: ResMut<ActiveDrag>,
    mut commands: Commands,
    mut anchor_q: Query<&mut Transform, (With<PointerAnchor>, Without<Bob>)>,
    bobs: Query<(), With<Bob>>,
) {
    let Some(bob) = active.bob else {
        return;
    };
    if bobs.get(bob).is_err() {
        release(&mut active, &mut commands);
        return;
    }
    let Some(world_pos) = pointer.world_pos else {
        return;
    };
    if let Ok(mut anchor_tf) = anchor_q.single_mut() {
        anchor_tf.translation = world_pos.extend(anchor_tf.translation.z);
    }
}

fn release(active: &mut ActiveDrag, commands: &mut Commands) {
    if let Some(joint) = active.joint.take() {
        if let Ok(mut entity) = commands.get_entity(joint) {
            entity.despawn();
        }
    }
    active.bob = None;
}
