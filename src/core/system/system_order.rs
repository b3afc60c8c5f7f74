//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. Pointer (sample input, run the drag state machine on the live scene)
//! 2. Rebuild (apply parameter changes, replace the composite wholesale)
//! 3. Present (HUD text and rope overlay read the settled world)
//! 4. Rapier sync + step (handled by plugin in PostUpdate)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PointerSet; // drag logic runs before any despawn of its targets

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RebuildSet; // whole-composite replacement in one command batch

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentSet; // labels and overlays reflect applied state only
