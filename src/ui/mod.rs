//! The 2D page: widgets, pages and the per-frame page behaviour.

pub mod actions;
pub mod fade;
pub mod floating;
pub mod loading;
pub mod logo;
pub mod navigation;
pub mod not_found;
pub mod poster;
pub mod presentation;
pub mod print;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod widgets;

use bevy::prelude::*;

use crate::core::system::system_order::PageSet;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Without an image store (headless runs) the logo falls back to empty handles.
        let logos = app
            .world_mut()
            .get_resource_mut::<Assets<Image>>()
            .map(|mut images| logo::LogoImages::rasterize(&mut images))
            .unwrap_or_default();
        app.insert_resource(logos)
            .add_plugins((
                actions::ActionsPlugin,
                scroll::ScrollPlugin,
                navigation::NavigationPlugin,
                loading::LoadingPlugin,
                reveal::RevealPlugin,
                sections::SectionsPlugin,
                floating::FloatingPlugin,
                presentation::PresentationPlugin,
                poster::PosterPlugin,
                print::PrintPlugin,
                not_found::NotFoundPlugin,
            ))
            .add_systems(Update, fade::apply_opacity.after(PageSet));
    }
}
