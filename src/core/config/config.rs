// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::rendering::scene::particles::ParticleKind;

/// Default on-disk location of the base config layer.
pub const BASE_CONFIG_PATH: &str = "assets/config/site.ron";
/// Optional developer override layer, merged on top of the base layer.
pub const LOCAL_CONFIG_PATH: &str = "assets/config/site.local.ron";

const EMBEDDED_SITE_RON: &str = include_str!("../../../assets/config/site.ron");

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            title: "ClearDrop — מערכת סינון מים אפורים".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives appended to the level.
    pub filter: String,
    pub level: String,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "wgpu=error,naga=warn".into(),
            level: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoadingConfig {
    pub min_duration_ms: u64,
    /// Skip the splash entirely (smoke runs, screenshots).
    pub skip: bool,
}
impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: 2500,
            skip: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleFieldConfig {
    pub count: usize,
    pub kind: ParticleKind,
}
impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            kind: ParticleKind::Drops,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Radians per second of automatic orbit around the model; 0 disables.
    pub auto_orbit_speed: f32,
    pub drag_enabled: bool,
    pub zoom_enabled: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    /// Radians of rotation per logical pixel dragged.
    pub drag_sensitivity: f32,
}
impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            auto_orbit_speed: 0.0,
            drag_enabled: true,
            zoom_enabled: false,
            min_distance: 4.0,
            max_distance: 10.0,
            min_polar: std::f32::consts::FRAC_PI_6,
            max_polar: std::f32::consts::FRAC_PI_2,
            drag_sensitivity: 0.008,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Gentle yaw sway of the bottle group.
    pub auto_rotate: bool,
    pub particles: ParticleFieldConfig,
    pub camera: (f32, f32, f32),
    pub fov_degrees: f32,
    /// Off-screen render target size in physical pixels.
    pub viewport: (u32, u32),
    pub orbit: OrbitConfig,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            particles: ParticleFieldConfig::default(),
            camera: (3.0, 2.0, 5.0),
            fov_degrees: 50.0,
            viewport: (480, 560),
            orbit: OrbitConfig::default(),
        }
    }
}
impl SceneConfig {
    pub fn hero() -> Self {
        Self {
            auto_rotate: true,
            particles: ParticleFieldConfig {
                count: 40,
                kind: ParticleKind::Mixed,
            },
            camera: (3.0, 2.0, 5.0),
            fov_degrees: 50.0,
            viewport: (480, 560),
            orbit: OrbitConfig {
                auto_orbit_speed: 0.05,
                drag_enabled: true,
                zoom_enabled: false,
                min_polar: std::f32::consts::FRAC_PI_4,
                ..Default::default()
            },
        }
    }
    pub fn how_it_works() -> Self {
        Self {
            auto_rotate: false,
            particles: ParticleFieldConfig {
                count: 24,
                kind: ParticleKind::Drops,
            },
            camera: (4.0, 3.0, 6.0),
            fov_degrees: 45.0,
            viewport: (520, 600),
            orbit: OrbitConfig {
                zoom_enabled: true,
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    pub scroll_threshold: f32,
    /// Logical window width below which the header collapses into the mobile menu.
    pub mobile_breakpoint: f32,
    pub menu_slide_secs: f32,
}
impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            mobile_breakpoint: 768.0,
            menu_slide_secs: 0.3,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Pixels per wheel "line" notch.
    pub line_px: f32,
    /// Exponential approach rate of smooth anchor scrolling (1/s).
    pub smoothing: f32,
}
impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            line_px: 48.0,
            smoothing: 9.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub enabled: bool,
    pub duration: f32,
    pub stagger: f32,
    /// Inset from the viewport edges a section must cross before it reveals.
    pub margin: f32,
}
impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 0.8,
            stagger: 0.15,
            margin: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// Paths relative to `assets/`.
    pub regular: String,
    pub bold: String,
}
impl Default for FontConfig {
    fn default() -> Self {
        Self {
            regular: "fonts/NotoSansHebrew-Regular.ttf".into(),
            bold: "fonts/DejaVuSans-Bold.ttf".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PrintConfig {
    pub output_dir: String,
}
impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            output_dir: "print".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub window: WindowConfig,
    pub log: LogConfig,
    pub loading: LoadingConfig,
    pub hero_scene: SceneConfig,
    pub how_scene: SceneConfig,
    pub navigation: NavigationConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub fonts: FontConfig,
    pub print: PrintConfig,
    pub floating_motes: usize,
    /// Fixed seed for every procedural random draw; `None` draws from entropy.
    pub seed: Option<u64>,
}
impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log: LogConfig::default(),
            loading: LoadingConfig::default(),
            hero_scene: SceneConfig::hero(),
            how_scene: SceneConfig::how_it_works(),
            navigation: NavigationConfig::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            fonts: FontConfig::default(),
            print: PrintConfig::default(),
            floating_motes: 30,
            seed: None,
        }
    }
}

/// Values given on the command line. They sit above every config layer and
/// are re-applied whenever the layers are reloaded.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub skip_splash: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut SiteConfig) {
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if self.skip_splash {
            cfg.loading.skip = true;
        }
    }
}

impl SiteConfig {
    /// Parse a single file; `.toml` files use TOML, everything else RON.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| format!("read config: {e}"))?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&data).map_err(|e| format!("parse TOML: {e}"))
        } else {
            ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
        }
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Copy of `assets/config/site.ron` compiled into the binary (wasm has no filesystem).
    pub fn embedded() -> Result<Self, String> {
        ron::from_str(EMBEDDED_SITE_RON).map_err(|e| format!("parse embedded RON: {e}"))
    }

    /// Merge RON layers key-by-key (later layers win) and deserialize the result.
    /// Returns the config, the paths that contributed and any per-layer errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (SiteConfig::default(), used, errors);
        };
        match val.into_rust::<SiteConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (SiteConfig::default(), used, errors)
            }
        }
    }

    /// Load `paths` the way the binary does: a lone `.toml` file is read
    /// directly, anything else is merged as RON layers.
    pub fn load_paths(paths: &[PathBuf]) -> (Self, Vec<String>, Vec<String>) {
        if let [single] = paths {
            if single.extension().is_some_and(|e| e == "toml") {
                let (cfg, err) = Self::load_or_default(single);
                let used = if err.is_none() { vec![single.display().to_string()] } else { Vec::new() };
                return (cfg, used, err.into_iter().collect());
            }
        }
        Self::load_layered(paths)
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.loading.min_duration_ms == 0 {
            w.push("loading.min_duration_ms is 0; splash completes on the first tick".into());
        }
        if self.loading.min_duration_ms > 30_000 {
            w.push(format!(
                "loading.min_duration_ms {} very long; visitors wait on the splash",
                self.loading.min_duration_ms
            ));
        }
        for (label, scene) in [("hero_scene", &self.hero_scene), ("how_scene", &self.how_scene)] {
            if scene.particles.count == 0 {
                w.push(format!("{label}.particles.count is 0; no particles will spawn"));
            }
            if scene.particles.count > 5_000 {
                w.push(format!(
                    "{label}.particles.count {} very high; performance may suffer",
                    scene.particles.count
                ));
            }
            if !(10.0..=120.0).contains(&scene.fov_degrees) {
                w.push(format!("{label}.fov_degrees {} outside 10..120", scene.fov_degrees));
            }
            if scene.viewport.0 == 0 || scene.viewport.1 == 0 {
                w.push(format!("{label}.viewport must be non-zero"));
            }
            let orbit = &scene.orbit;
            if orbit.min_polar > orbit.max_polar {
                w.push(format!(
                    "{label}.orbit.min_polar ({}) greater than max_polar ({})",
                    orbit.min_polar, orbit.max_polar
                ));
            }
            if orbit.min_distance <= 0.0 || orbit.min_distance > orbit.max_distance {
                w.push(format!(
                    "{label}.orbit distance range {}..{} invalid",
                    orbit.min_distance, orbit.max_distance
                ));
            }
        }
        if self.navigation.scroll_threshold < 0.0 {
            w.push("navigation.scroll_threshold negative; header always renders scrolled".into());
        }
        if self.scroll.smoothing <= 0.0 {
            w.push("scroll.smoothing must be > 0; anchor scrolling would never arrive".into());
        }
        if self.reveal.duration <= 0.0 {
            w.push("reveal.duration must be > 0".into());
        }
        if self.reveal.stagger < 0.0 {
            w.push("reveal.stagger negative".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_clean() {
        let cfg = SiteConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.loading.min_duration_ms, 2500);
        assert_eq!(cfg.navigation.scroll_threshold, 50.0);
        assert_eq!(cfg.hero_scene.particles.count, 40);
        assert_eq!(cfg.hero_scene.particles.kind, ParticleKind::Mixed);
        assert!(!cfg.how_scene.auto_rotate);
    }

    #[test]
    fn embedded_config_parses() {
        let cfg = SiteConfig::embedded().expect("embedded site.ron must parse");
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn overrides_only_touch_what_was_given() {
        let mut cfg = SiteConfig { seed: Some(3), ..Default::default() };
        ConfigOverrides::default().apply(&mut cfg);
        assert_eq!(cfg, SiteConfig { seed: Some(3), ..Default::default() });
        ConfigOverrides { seed: Some(9), skip_splash: true }.apply(&mut cfg);
        assert_eq!(cfg.seed, Some(9));
        assert!(cfg.loading.skip);
    }

    #[test]
    fn zero_particles_warn() {
        let mut cfg = SiteConfig::default();
        cfg.how_scene.particles.count = 0;
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("how_scene.particles.count")));
    }
}
