use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::{ConfigOverrides, SiteConfig, BASE_CONFIG_PATH, LOCAL_CONFIG_PATH};
use crate::rendering::scene::{FilterScene, SceneSlot};

/// Layers the running config was built from; the binary inserts the same list it loaded.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(BASE_CONFIG_PATH), PathBuf::from(LOCAL_CONFIG_PATH)],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}

impl Default for ConfigReloadState {
    fn default() -> Self {
        Self { last_mod: HashMap::new(), timer: Timer::from_seconds(0.5, TimerMode::Repeating) }
    }
}

/// Polls the config layers and applies window and scene settings live (native only).
pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .init_resource::<ConfigOverrides>()
                .add_systems(Startup, snapshot_layer_times)
                .add_systems(Update, poll_and_reload_config.run_if(resource_exists::<SiteConfig>));
        }
        #[cfg(target_arch = "wasm32")]
        let _ = app;
    }
}

/// Remember the layers as they were loaded so only later edits trigger a reload.
fn snapshot_layer_times(settings: Res<ConfigReloadSettings>, mut state: ResMut<ConfigReloadState>) {
    for path in &settings.paths {
        if let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) {
            state.last_mod.insert(path.clone(), modified);
        }
    }
}

/// Touch every known layer; true when any is newer than last seen.
fn layers_changed(settings: &ConfigReloadSettings, state: &mut ConfigReloadState) -> bool {
    use std::time::UNIX_EPOCH;
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) else { continue };
        let seen = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
        if modified > *seen {
            *seen = modified;
            dirty = true;
        }
    }
    dirty
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    overrides: Res<ConfigOverrides>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<SiteConfig>,
    mut windows: Query<&mut Window>,
    mut scenes: Query<&mut FilterScene>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state.timer.set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    if !layers_changed(&settings, &mut state) {
        return;
    }
    let (mut new_cfg, used, errors) = SiteConfig::load_paths(&settings.paths);
    for e in errors {
        warn!(target: "config", "hot reload: {e}");
    }
    if used.is_empty() {
        return;
    }
    overrides.apply(&mut new_cfg);
    if *cfg_res == new_cfg {
        return;
    }
    info!(target: "config", "hot reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window.resolution.set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    for mut scene in &mut scenes {
        let auto_rotate = match scene.slot {
            SceneSlot::Hero => new_cfg.hero_scene.auto_rotate,
            SceneSlot::HowItWorks => new_cfg.how_scene.auto_rotate,
        };
        if scene.auto_rotate != auto_rotate {
            scene.auto_rotate = auto_rotate;
        }
    }
    *cfg_res = new_cfg;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_layer_marks_dirty_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("site.ron");
        std::fs::write(&path, "(floating_motes: 4)").expect("write layer");
        let settings = ConfigReloadSettings { paths: vec![path], interval_secs: 0.5 };
        let mut state = ConfigReloadState::default();
        assert!(layers_changed(&settings, &mut state));
        assert!(!layers_changed(&settings, &mut state), "unchanged file is not reloaded");
    }

    #[test]
    fn missing_layers_are_ignored() {
        let settings = ConfigReloadSettings { paths: vec![PathBuf::from("does/not/exist.ron")], interval_secs: 0.5 };
        let mut state = ConfigReloadState::default();
        assert!(!layers_changed(&settings, &mut state));
    }
}
