mod common;

use std::fs;
use std::time::{Duration, SystemTime};

use cleardrop::core::config::{ConfigOverrides, SiteConfig};
use cleardrop::rendering::scene::particles::ParticleKind;
use common::*;

#[test]
fn local_layer_overrides_base_key_by_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("site.ron");
    let local = dir.path().join("site.local.ron");
    fs::write(
        &base,
        r#"(
            loading: (min_duration_ms: 1000),
            hero_scene: (particles: (count: 12, kind: "leaves")),
            floating_motes: 5,
        )"#,
    )
    .expect("write base");
    fs::write(&local, r#"(hero_scene: (particles: (count: 3)), seed: Some(11))"#).expect("write local");

    let (cfg, used, errors) = SiteConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.hero_scene.particles.count, 3, "local layer wins");
    assert_eq!(cfg.hero_scene.particles.kind, ParticleKind::Leaves, "sibling key from base survives");
    assert_eq!(cfg.loading.min_duration_ms, 1000);
    assert_eq!(cfg.floating_motes, 5);
    assert_eq!(cfg.seed, Some(11));
    assert_eq!(cfg.navigation.scroll_threshold, 50.0, "untouched sections keep defaults");
}

#[test]
fn missing_and_broken_layers_are_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(loading: (min_duration_ms: ").expect("write broken");
    let missing = dir.path().join("missing.ron");

    let (cfg, used, errors) = SiteConfig::load_layered([&broken, &missing]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 2);
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn unknown_particle_kind_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.ron");
    fs::write(&path, r#"(how_scene: (particles: (kind: "snow")))"#).expect("write");
    let (cfg, _used, errors) = SiteConfig::load_layered([&path]);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("snow"), "{errors:?}");
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn toml_file_is_accepted_by_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.toml");
    fs::write(&path, "floating_motes = 9\n\n[loading]\nmin_duration_ms = 100\n").expect("write");
    let cfg = SiteConfig::load_from_file(&path).expect("toml parses");
    assert_eq!(cfg.floating_motes, 9);
    assert_eq!(cfg.loading.min_duration_ms, 100);
}

#[test]
fn shipped_config_matches_embedded_and_validates() {
    let embedded = SiteConfig::embedded().expect("embedded config parses");
    let on_disk = SiteConfig::load_from_file("assets/config/site.ron").expect("site.ron parses");
    assert_eq!(embedded, on_disk);
    assert!(on_disk.validate().is_empty(), "{:?}", on_disk.validate());
}

#[test]
fn validation_flags_bad_values() {
    let mut cfg = SiteConfig::default();
    cfg.hero_scene.particles.count = 0;
    cfg.loading.min_duration_ms = 0;
    cfg.how_scene.orbit.min_polar = 2.0;
    cfg.reveal.duration = 0.0;
    let warnings = cfg.validate();
    assert_eq!(warnings.len(), 4, "{warnings:?}");
}

#[test]
fn command_line_values_survive_hot_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("site.ron");
    fs::write(&base, "(loading: (min_duration_ms: 500), floating_motes: 5)").expect("write base");
    let layers = vec![base.clone()];
    let overrides = ConfigOverrides { seed: Some(7), skip_splash: true };
    let (mut cfg, _used, errors) = SiteConfig::load_paths(&layers);
    assert!(errors.is_empty(), "{errors:?}");
    overrides.apply(&mut cfg);

    let mut app = site_app_with_layers("/", cfg, layers, overrides);
    // Several poll intervals with untouched layers: nothing is reloaded.
    run(&mut app, 20);
    let live = app.world().resource::<SiteConfig>();
    assert_eq!(live.seed, Some(7));
    assert!(live.loading.skip);
    assert_eq!(live.floating_motes, 5);

    fs::write(&base, "(loading: (min_duration_ms: 500), floating_motes: 9)").expect("rewrite base");
    fs::File::options()
        .write(true)
        .open(&base)
        .and_then(|f| f.set_modified(SystemTime::now() + Duration::from_secs(5)))
        .expect("bump mtime");
    run(&mut app, 20);
    let live = app.world().resource::<SiteConfig>();
    assert_eq!(live.floating_motes, 9, "edited layer is picked up");
    assert_eq!(live.seed, Some(7), "seed override re-applied after reload");
    assert!(live.loading.skip, "skip-splash override re-applied after reload");
}

#[test]
fn lone_toml_path_loads_directly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.toml");
    fs::write(&path, "floating_motes = 2\n").expect("write");
    let (cfg, used, errors) = SiteConfig::load_paths(&[path]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 1);
    assert_eq!(cfg.floating_motes, 2);
}
