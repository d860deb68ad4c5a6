#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use cleardrop::app::router::InitialPath;
use cleardrop::core::config::ConfigOverrides;
use cleardrop::interaction::session::config_hot_reload::ConfigReloadSettings;
use cleardrop::{HomePhase, Route, SiteConfig, SitePlugin};

pub const FRAME: Duration = Duration::from_millis(50);

/// Short splash and a fixed seed.
pub fn test_config() -> SiteConfig {
    let mut cfg = SiteConfig::default();
    cfg.loading.min_duration_ms = 500;
    cfg.seed = Some(7);
    cfg
}

/// Whole site without a window or renderer, opened at `path`.
pub fn site_app(path: &str, cfg: SiteConfig) -> App {
    // No layers: keep the on-disk config from replacing the test config.
    site_app_with_layers(path, cfg, Vec::new(), ConfigOverrides::default())
}

/// Like [`site_app`], but hot reload watches `layers` and keeps `overrides` on top.
pub fn site_app_with_layers(path: &str, cfg: SiteConfig, layers: Vec<PathBuf>, overrides: ConfigOverrides) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(InitialPath(path.into()))
        .insert_resource(ConfigReloadSettings { paths: layers, interval_secs: 0.5 })
        .insert_resource(overrides)
        .insert_resource(cfg)
        .add_plugins(SitePlugin);
    app.update();
    app
}

pub fn run(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn route(app: &App) -> Route {
    *app.world().resource::<State<Route>>().get()
}

pub fn home_phase(app: &App) -> Option<HomePhase> {
    app.world().get_resource::<State<HomePhase>>().map(|s| *s.get())
}

pub fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut().query_filtered::<(), With<C>>().iter(app.world()).count()
}
