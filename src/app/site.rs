// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::router::RouterPlugin;
use super::state::{HomePhase, Route};
use crate::core::system::system_order::{InputSet, PageSet, SceneSet};
use crate::debug::DebugPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::rendering::fonts::SiteFonts;
use crate::rendering::scene::FilterScenePlugin;
use crate::ui::UiPlugin;

/// Camera that draws the page; the 3D scenes render to images it displays.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PageCamera;

pub struct SitePlugin;

impl Plugin for SitePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (InputSet, PageSet.after(InputSet), SceneSet.after(PageSet)))
            .add_plugins(RouterPlugin)
            .add_sub_state::<HomePhase>()
            .enable_state_scoped_entities::<Route>()
            .enable_state_scoped_entities::<HomePhase>()
            .init_resource::<SiteFonts>()
            .add_systems(Startup, spawn_page_camera)
            .add_plugins((
                FilterScenePlugin,
                UiPlugin,
                DebugPlugin,
                ConfigHotReloadPlugin,
                AutoClosePlugin,
            ));
    }
}

fn spawn_page_camera(mut commands: Commands) {
    commands.spawn((Name::new("page-camera"), PageCamera, Camera2d));
}
