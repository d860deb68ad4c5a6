mod common;

use bevy::prelude::*;

use cleardrop::app::router::Navigate;
use cleardrop::ui::actions::{ActionTriggered, SiteAction};
use cleardrop::ui::not_found::HEADLINE;
use cleardrop::ui::print::PrintMode;
use cleardrop::ui::presentation::ScriptCursor;
use cleardrop::Route;
use common::*;

fn page_names(app: &mut App) -> Vec<String> {
    app.world_mut()
        .query::<&Name>()
        .iter(app.world())
        .map(|n| n.as_str().to_string())
        .filter(|n| n.ends_with("-page"))
        .collect()
}

#[test]
fn unknown_path_shows_not_found_with_a_way_home() {
    let mut app = site_app("/nowhere", test_config());
    assert_eq!(route(&app), Route::NotFound);
    assert_eq!(page_names(&mut app), vec!["not-found-page".to_string()]);
    let headline = app
        .world_mut()
        .query::<&Text>()
        .iter(app.world())
        .any(|t| t.0 == HEADLINE);
    assert!(headline);

    app.world_mut().send_event(ActionTriggered(SiteAction::Go(Route::Home)));
    run(&mut app, 4);
    assert_eq!(route(&app), Route::Home);
    assert!(!page_names(&mut app).contains(&"not-found-page".to_string()));
}

#[test]
fn each_route_mounts_only_its_own_page() {
    let mut app = site_app("/poster", test_config());
    assert_eq!(page_names(&mut app), vec!["poster-page".to_string()]);

    app.world_mut().send_event(Navigate(Route::Presentation));
    run(&mut app, 4);
    assert_eq!(page_names(&mut app), vec!["presentation-page".to_string()]);
    assert_eq!(count::<ScriptCursor>(&mut app), 1);

    app.world_mut().send_event(Navigate(Route::Poster));
    run(&mut app, 4);
    assert_eq!(count::<ScriptCursor>(&mut app), 0, "cursor state does not outlive its page");
}

#[test]
fn leaving_the_page_cancels_a_print() {
    let mut cfg = test_config();
    let dir = tempfile::tempdir().expect("tempdir");
    cfg.print.output_dir = dir.path().display().to_string();
    let mut app = site_app("/poster", cfg);

    app.world_mut().send_event(ActionTriggered(SiteAction::Print));
    app.update();
    assert!(app.world().resource::<PrintMode>().is_print_layout());

    app.world_mut().send_event(Navigate(Route::Home));
    run(&mut app, 4);
    assert!(!app.world().resource::<PrintMode>().is_print_layout());
}
