mod common;

use cleardrop::app::router::Navigate;
use cleardrop::app::state::SplashState;
use cleardrop::ui::loading::LoadingScreen;
use cleardrop::ui::scroll::SectionAnchor;
use cleardrop::{HomePhase, Route};
use common::*;

#[test]
fn splash_blocks_content_until_gate_completes() {
    let mut app = site_app("/", test_config());
    assert_eq!(home_phase(&app), Some(HomePhase::Loading));
    assert_eq!(count::<LoadingScreen>(&mut app), 1);
    assert_eq!(count::<SectionAnchor>(&mut app), 0, "content must not mount behind the splash");

    // 500 ms of progress is not enough: the hold and exit fade follow.
    run(&mut app, 12);
    assert_eq!(home_phase(&app), Some(HomePhase::Loading));

    run(&mut app, 20);
    assert_eq!(home_phase(&app), Some(HomePhase::Content));
    assert_eq!(count::<LoadingScreen>(&mut app), 0);
    assert_eq!(count::<SectionAnchor>(&mut app), 8);
    assert!(app.world().resource::<SplashState>().shown);
}

#[test]
fn returning_home_skips_the_splash() {
    let mut app = site_app("/", test_config());
    run(&mut app, 40);
    assert_eq!(home_phase(&app), Some(HomePhase::Content));

    app.world_mut().send_event(Navigate(Route::Poster));
    run(&mut app, 3);
    assert_eq!(route(&app), Route::Poster);
    assert_eq!(home_phase(&app), None);
    assert_eq!(count::<SectionAnchor>(&mut app), 0, "home content despawns with its route");

    app.world_mut().send_event(Navigate(Route::Home));
    run(&mut app, 3);
    assert_eq!(home_phase(&app), Some(HomePhase::Content));
    assert_eq!(count::<LoadingScreen>(&mut app), 0);
}

#[test]
fn skip_flag_goes_straight_to_content() {
    let mut cfg = test_config();
    cfg.loading.skip = true;
    let mut app = site_app("/", cfg);
    run(&mut app, 2);
    assert_eq!(home_phase(&app), Some(HomePhase::Content));
    assert_eq!(count::<LoadingScreen>(&mut app), 0);
}

#[test]
fn auxiliary_pages_have_no_splash() {
    let mut app = site_app("/poster", test_config());
    assert_eq!(route(&app), Route::Poster);
    assert_eq!(home_phase(&app), None);
    assert_eq!(count::<LoadingScreen>(&mut app), 0);
}

#[test]
fn leaving_before_completion_cancels_the_gate() {
    let mut app = site_app("/", test_config());
    run(&mut app, 4);
    assert_eq!(count::<LoadingScreen>(&mut app), 1);

    app.world_mut().send_event(Navigate(Route::Presentation));
    run(&mut app, 3);
    assert_eq!(count::<LoadingScreen>(&mut app), 0, "gate despawns with the home route");

    // Well past the point the gate would have completed.
    run(&mut app, 60);
    assert!(!app.world().resource::<SplashState>().shown);
    assert_eq!(route(&app), Route::Presentation);

    // The splash never finished, so coming back shows it again.
    app.world_mut().send_event(Navigate(Route::Home));
    run(&mut app, 3);
    assert_eq!(home_phase(&app), Some(HomePhase::Loading));
    assert_eq!(count::<LoadingScreen>(&mut app), 1);
}

#[test]
fn home_page_composes_both_scenes_when_render_assets_exist() {
    use bevy::asset::AssetPlugin;
    use bevy::input::InputPlugin;
    use bevy::prelude::*;
    use bevy::state::app::StatesPlugin;
    use bevy::text::Font;
    use bevy::time::TimeUpdateStrategy;
    use cleardrop::app::router::InitialPath;
    use cleardrop::interaction::session::config_hot_reload::ConfigReloadSettings;
    use cleardrop::rendering::scene::{FilterScene, SceneViewport};
    use cleardrop::SitePlugin;

    let mut cfg = test_config();
    cfg.loading.skip = true;
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_asset::<Image>()
        .init_asset::<Font>()
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(InitialPath("/".into()))
        .insert_resource(ConfigReloadSettings { paths: Vec::new(), interval_secs: 0.5 })
        .insert_resource(cfg)
        .add_plugins(SitePlugin);
    run(&mut app, 3);
    assert_eq!(home_phase(&app), Some(HomePhase::Content));
    assert_eq!(count::<SectionAnchor>(&mut app), 8);
    assert_eq!(count::<FilterScene>(&mut app), 2, "hero and how-it-works each compose a scene");
    assert_eq!(count::<SceneViewport>(&mut app), 2);
}
