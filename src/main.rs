use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use cleardrop::app::router::InitialPath;
use cleardrop::core::config::{ConfigOverrides, SiteConfig, BASE_CONFIG_PATH, LOCAL_CONFIG_PATH};
use cleardrop::interaction::session::config_hot_reload::ConfigReloadSettings;
use cleardrop::SitePlugin;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "ClearDrop greywater filter site", long_about = None)]
struct Cli {
    /// Page to open, e.g. `/poster` or `/presentation`.
    #[arg(long)]
    route: Option<String>,
    /// Config layers merged in order; replaces the default base + local layers.
    #[arg(long = "config")]
    configs: Vec<PathBuf>,
    /// Seed for every random stream (scenes, motes).
    #[arg(long)]
    seed: Option<u64>,
    /// Go straight to the content.
    #[arg(long)]
    skip_splash: bool,
}

// ---------------- Config Loading ----------------

#[cfg(target_arch = "wasm32")]
fn config_layers(_cli: &Cli) -> Vec<PathBuf> {
    Vec::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn config_layers(cli: &Cli) -> Vec<PathBuf> {
    if cli.configs.is_empty() {
        vec![BASE_CONFIG_PATH.into(), LOCAL_CONFIG_PATH.into()]
    } else {
        cli.configs.clone()
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config(_layers: &[PathBuf], notes: &mut Vec<String>) -> SiteConfig {
    SiteConfig::embedded().unwrap_or_else(|e| {
        notes.push(format!("embedded config: {e}; using defaults"));
        SiteConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(layers: &[PathBuf], notes: &mut Vec<String>) -> SiteConfig {
    let (cfg, used, errors) = SiteConfig::load_paths(layers);
    // The local layer is optional; a missing one is not worth a warning.
    notes.extend(
        errors
            .into_iter()
            .filter(|e| !(e.starts_with(LOCAL_CONFIG_PATH) && e.contains("read error"))),
    );
    if used.is_empty() {
        notes.push("no config layers found; using defaults".into());
    }
    cfg
}

#[cfg(target_arch = "wasm32")]
fn parse_cli() -> Cli {
    Cli::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_cli() -> Cli {
    Cli::parse()
}

// ---------------- Main ----------------

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let cli = parse_cli();
    let mut notes = Vec::new();
    let layers = config_layers(&cli);
    let mut cfg = load_config(&layers, &mut notes);
    let overrides = ConfigOverrides { seed: cli.seed, skip_splash: cli.skip_splash };
    overrides.apply(&mut cfg);
    let warnings = cfg.validate();

    let level = cfg.log.level.parse::<Level>().unwrap_or(Level::INFO);
    let mut app = App::new();
    if let Some(route) = cli.route.clone() {
        app.insert_resource(InitialPath(route));
    }
    app.insert_resource(cfg.clone())
        .insert_resource(overrides)
        .insert_resource(ConfigReloadSettings { paths: layers, ..default() })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: true,
                        canvas: Some("#bevy".into()),
                        fit_canvas_to_parent: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level,
                    filter: cfg.log.filter.clone(),
                    ..default()
                }),
        )
        .add_systems(Startup, move || {
            for note in &notes {
                warn!(target: "config", "{note}");
            }
            for w in &warnings {
                warn!(target: "config", "CONFIG WARNING: {w}");
            }
        })
        .add_plugins(SitePlugin)
        .run();
}
