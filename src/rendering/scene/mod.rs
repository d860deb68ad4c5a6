pub mod composer;
pub mod droplets;
pub mod geometry;
pub mod particles;
pub mod viewport;

use bevy::prelude::*;

use crate::core::system::system_order::{InputSet, SceneSet};
use composer::{float_nodes, sway_groups, tick_scene_clocks};
use droplets::animate_droplets;
use geometry::FilterAssetCache;
use particles::animate_particle_fields;
use viewport::{apply_orbit_rigs, orbit_input};

pub use composer::{spawn_filter_scene, ComposedScene, FilterScene, SceneAssets, SceneSlot};
pub use viewport::SceneViewport;

/// Per-frame animation of every composed filter scene.
pub struct FilterScenePlugin;

impl Plugin for FilterScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FilterAssetCache>()
            .insert_resource(composer::SCENE_PRESET.ambient())
            .add_systems(Update, orbit_input.in_set(InputSet))
            .add_systems(
                Update,
                (
                    tick_scene_clocks,
                    (animate_particle_fields, animate_droplets, sway_groups, float_nodes, apply_orbit_rigs),
                )
                    .chain()
                    .in_set(SceneSet),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_light_is_set_once_from_the_shared_preset() {
        let mut app = App::new();
        app.add_plugins(FilterScenePlugin);
        let expected = composer::SCENE_PRESET.ambient();
        let ambient = app.world().resource::<AmbientLight>();
        assert_eq!(ambient.color, expected.color);
        assert_eq!(ambient.brightness, expected.brightness);
    }
}
