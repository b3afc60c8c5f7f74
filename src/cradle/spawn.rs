// This file is part of Cradle Lab.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};
use bevy_rapier2d::prelude::{
    Collider, ColliderMassProperties, CollisionGroups, Damping, Friction, Group, ImpulseJoint,
    LockedAxes, Restitution, RigidBody, RopeJointBuilder, Velocity,
};

use crate::core::components::{
    Bob, BobIndex, BobRadius, CradleRig, FramePiece, RestPosition, RopeAnchor, RopeConstraint,
};
use crate::cradle::layout::{CradleLayout, FramePieceSpec, FrameRole, BALL_SIZE, FRAME_THICKNESS};
use crate::cradle::params::CradleParams;
use crate::rendering::palette;

// Z layering: frame behind bobs, sprites slightly in front of their body.
const FRAME_Z: f32 = 10.0;
const BOB_Z: f32 = 20.0;

/// Frame pieces sit in a collision group nothing filters in, so bobs and the
/// pointer pass straight through while the frame still registers as a body.
const FRAME_GROUPS: CollisionGroups = CollisionGroups::new(Group::GROUP_2, Group::NONE);

/// Request to replace the live cradle with one built from these parameters.
/// Values must already be validated; raw input never reaches this event.
#[derive(Event, Debug, Clone, Copy)]
pub struct RebuildCradle(pub CradleParams);

/// Handle to the live composite. `root` is the single entity whose despawn
/// takes the whole previous scene with it.
#[derive(Resource, Default)]
pub struct CurrentCradle {
    pub root: Option<Entity>,
    pub generation: u64,
}

/// Shared display assets for bobs. One mesh and material serve every rebuild,
/// so slider scrubbing does not pile up assets.
#[derive(Resource)]
pub struct CradleAssets {
    pub bob_mesh: Handle<Mesh>,
    pub bob_material: Handle<ColorMaterial>,
}

pub fn init_cradle_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(CradleAssets {
        bob_mesh: meshes.add(Mesh::from(Circle {
            radius: BALL_SIZE / 2.0,
        })),
        bob_material: materials.add(palette::BOB_METAL),
    });
}

/// Kicks off the first build from the startup parameters.
pub fn request_initial_cradle(
    params: Res<CradleParams>,
    mut requests: EventWriter<RebuildCradle>,
) {
    requests.write(RebuildCradle(*params));
}

/// Tears down the previous composite and spawns the requested one. Runs in a
/// single command batch, so observers never see a half-replaced scene. When a
/// frame carries several requests only the last one wins.
pub fn rebuild_cradle(
    mut commands: Commands,
    mut requests: EventReader<RebuildCradle>,
    mut current: ResMut<CurrentCradle>,
    mut params: ResMut<CradleParams>,
    assets: Res<CradleAssets>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };
    if let Some(root) = current.root.take() {
        commands.entity(root).despawn();
    }
    *params = request.0;
    let layout = CradleLayout::build(&request.0);
    current.root = Some(spawn_cradle(&mut commands, &assets, &layout));
    current.generation += 1;
    info!(
        "Cradle: built {} bobs, spacing {}, rope {} (frame {}x{})",
        layout.params.ball_count,
        layout.params.spacing,
        layout.params.rope_length,
        layout.frame_width,
        layout.frame_height,
    );
}

/// Spawns one complete cradle under a fresh root entity and returns the root.
pub fn spawn_cradle(
    commands: &mut Commands,
    assets: &CradleAssets,
    layout: &CradleLayout,
) -> Entity {
    let root = commands
        .spawn((
            CradleRig,
            Name::new("Cradle"),
            Transform::default(),
            GlobalTransform::default(),
            Visibility::Visible,
        ))
        .id();

    let mut top_bar = root;
    for piece in &layout.frame {
        let entity = spawn_frame_piece(commands, piece);
        commands.entity(root).add_child(entity);
        if piece.role == FrameRole::TopBar {
            top_bar = entity;
        }
    }

    let bar_center_y = layout.params.rope_length / 2.0 + FRAME_THICKNESS / 2.0;
    for spec in &layout.bobs {
        let bob = commands
            .spawn((
                Bob,
                BobIndex(spec.index),
                BobRadius(spec.radius),
                RestPosition(spec.rest),
                RopeAnchor(spec.anchor),
                RigidBody::Dynamic,
                Collider::ball(spec.radius),
                Restitution::coefficient(1.0),
                Friction::coefficient(0.0),
                Damping {
                    linear_damping: 0.0,
                    angular_damping: 0.0,
                },
                LockedAxes::ROTATION_LOCKED,
                ColliderMassProperties::Mass(1.0),
                Velocity::zero(),
                Mesh2d::from(assets.bob_mesh.clone()),
                MeshMaterial2d(assets.bob_material.clone()),
                Transform::from_xyz(spec.spawn.x, spec.spawn.y, BOB_Z),
                GlobalTransform::default(),
                Visibility::Visible,
            ))
            .id();
        commands.entity(root).add_child(bob);

        // Anchor the rope on the top bar, directly above the rest position.
        // The joint lives on a child of the bob so the bob entity stays free
        // for the transient drag joint.
        let rope = RopeJointBuilder::new(layout.params.rope_length)
            .local_anchor1(Vec2::new(spec.anchor.x, spec.anchor.y - bar_center_y))
            .local_anchor2(Vec2::ZERO);
        let joint = commands
            .spawn((
                RopeConstraint,
                Name::new(format!("Rope {}", spec.index)),
                ImpulseJoint::new(top_bar, rope),
            ))
            .id();
        commands.entity(bob).add_child(joint);
    }

    root
}

fn spawn_frame_piece(commands: &mut Commands, piece: &FramePieceSpec) -> Entity {
    let (name, color) = match piece.role {
        FrameRole::TopBar => ("TopBar", palette::FRAME_BAR),
        FrameRole::LeftLeg => ("LeftLeg", palette::FRAME_WOOD),
        FrameRole::RightLeg => ("RightLeg", palette::FRAME_WOOD),
        FrameRole::Base => ("Base", palette::FRAME_WOOD),
    };
    commands
        .spawn((
            FramePiece,
            Name::new(name),
            RigidBody::Fixed,
            Collider::cuboid(piece.size.x / 2.0, piece.size.y / 2.0),
            FRAME_GROUPS,
            Transform::from_xyz(piece.center.x, piece.center.y, FRAME_Z),
            GlobalTransform::default(),
            Visibility::Visible,
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite {
                    color,
                    custom_size: Some(piece.size),
                    ..Default::default()
                },
                Transform::from_translation(Vec3::new(0.0, 0.0, 0.1)),
            ));
        })
        .id()
}
