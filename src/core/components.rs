use bevy::prelude::*;

/// Marker component identifying a pendulum bob entity (holds physics body & collider).
#[derive(Component)]
pub struct Bob;

/// Position of a bob in the row, left to right starting at 0.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct BobIndex(pub usize);

/// Logical radius used both for the collider and rendering scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BobRadius(pub f32);

/// A bob's undisplaced position, as derived from the current layout.
/// Kept on the entity so interaction and tests never have to re-derive it.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct RestPosition(pub Vec2);

/// World point the bob's rope hangs from, along the underside of the top bar.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct RopeAnchor(pub Vec2);

/// Marker for the root entity of the live cradle composite; all frame pieces,
/// bobs and rope joints are descendants of it.
#[derive(Component)]
pub struct CradleRig;

/// Marker for the four static frame pieces (top bar, legs, base).
#[derive(Component)]
pub struct FramePiece;

/// Marker for a rope joint entity (child of its bob).
#[derive(Component)]
pub struct RopeConstraint;

/// Marker for the transient pointer-drag spring joint entity.
#[derive(Component)]
pub struct DragConstraint;

/// Marker for the kinematic body the drag spring attaches to. Spawned once at
/// startup and moved to the pointer's world position while dragging.
#[derive(Component)]
pub struct PointerAnchor;
