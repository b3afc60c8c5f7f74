// This file is part of Cradle Lab.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::system::system_order::{PointerSet, PresentSet, RebuildSet};
use crate::cradle::CradlePlugin;
use crate::debug::DebugPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::interaction::InteractionPlugin;
use crate::physics::PhysicsSetupPlugin;
use crate::rendering::RenderingPlugin;

pub struct CradleAppPlugin;

impl Plugin for CradleAppPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                PointerSet,
                RebuildSet.after(PointerSet),
                PresentSet.after(RebuildSet),
            ),
        )
        .add_plugins((
            PhysicsSetupPlugin,
            CradlePlugin,
            InteractionPlugin,
            RenderingPlugin,
            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ));
    }
}
