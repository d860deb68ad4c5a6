use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use cleardrop::core::content::SectionId;
use cleardrop::ui::actions::{ActionTriggered, SiteAction};
use cleardrop::ui::navigation::{style_header, track_scroll, NavigationShell};
use cleardrop::ui::scroll::{resolve_scroll_actions, smooth_scroll, Block, PageLayout, PageScroll, SectionAnchor};

/// Scroll systems over a hand-built layout: eight 600 px sections in an 800 px viewport.
fn setup() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)))
        .add_event::<ActionTriggered>()
        .init_resource::<PageLayout>()
        .add_systems(Update, (resolve_scroll_actions, smooth_scroll).chain());
    let page = app.world_mut().spawn((PageScroll::default(), ScrollPosition::default())).id();
    let blocks = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let entity = app.world_mut().spawn(SectionAnchor(*id)).id();
            Block { entity, top: i as f32 * 600.0, height: 600.0 }
        })
        .collect();
    *app.world_mut().resource_mut::<PageLayout>() =
        PageLayout { viewport: 800.0, content: 4800.0, scroll: 0.0, blocks };
    app.update();
    (app, page)
}

fn settle(app: &mut App) {
    for _ in 0..80 {
        app.update();
    }
}

fn offset(app: &App, page: Entity) -> f32 {
    app.world().get::<PageScroll>(page).map(|p| p.current).unwrap_or(f32::NAN)
}

#[test]
fn anchor_link_lands_on_its_section() {
    let (mut app, page) = setup();
    app.world_mut().send_event(ActionTriggered(SiteAction::ScrollTo(SectionId::Materials)));
    app.update();
    let mid = offset(&app, page);
    assert!(mid > 0.0 && mid < 2400.0, "scrolling is smooth, not a jump: {mid}");
    settle(&mut app);
    assert_eq!(offset(&app, page), 2400.0);
    assert_eq!(app.world().get::<ScrollPosition>(page).map(|p| p.offset_y), Some(2400.0));
    assert_eq!(app.world().resource::<PageLayout>().scroll, 2400.0);

    let mut shell = NavigationShell::new(50.0);
    assert!(shell.on_scroll(app.world().resource::<PageLayout>().scroll));
    assert!(shell.scrolled());
}

#[test]
fn last_section_clamps_to_page_end() {
    let (mut app, page) = setup();
    app.world_mut().send_event(ActionTriggered(SiteAction::ScrollTo(SectionId::Improvements)));
    settle(&mut app);
    assert_eq!(offset(&app, page), 4000.0);

    app.world_mut().send_event(ActionTriggered(SiteAction::ScrollTop));
    settle(&mut app);
    assert_eq!(offset(&app, page), 0.0);
}

#[test]
fn unmounted_anchor_is_ignored() {
    let (mut app, page) = setup();
    let safety = app
        .world_mut()
        .query::<(Entity, &SectionAnchor)>()
        .iter(app.world())
        .find(|(_, a)| a.0 == SectionId::Safety)
        .map(|(e, _)| e)
        .expect("anchor");
    app.world_mut().despawn(safety);
    app.world_mut().send_event(ActionTriggered(SiteAction::ScrollTo(SectionId::Safety)));
    settle(&mut app);
    assert_eq!(offset(&app, page), 0.0);
}

#[test]
fn header_threshold_and_menu() {
    let mut shell = NavigationShell::new(50.0);
    assert!(!shell.on_scroll(50.0), "exactly at the threshold is not scrolled");
    assert!(shell.on_scroll(51.0));
    assert!(!shell.on_scroll(400.0), "no change while staying past the threshold");
    assert!(shell.on_scroll(10.0));
    assert!(!shell.scrolled());

    shell.toggle_menu();
    assert!(shell.menu_open());
    shell.step_slide(0.15, 0.3);
    assert!((shell.menu_slide() - 0.5).abs() < 1e-6);
    shell.step_slide(1.0, 0.3);
    assert_eq!(shell.menu_slide(), 1.0);
    shell.select_item();
    assert!(!shell.menu_open());
    shell.step_slide(1.0, 0.3);
    assert_eq!(shell.menu_slide(), 0.0);
}

#[test]
fn header_follows_page_offset_without_hysteresis() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<PageLayout>()
        .add_systems(Update, (track_scroll, style_header).chain());
    let header = app
        .world_mut()
        .spawn((NavigationShell::new(50.0), BackgroundColor(Color::NONE), BorderColor(Color::NONE)))
        .id();

    let scrolled_at = |app: &mut App, y: f32| {
        app.world_mut().resource_mut::<PageLayout>().scroll = y;
        app.update();
        let shell = app.world().get::<NavigationShell>(header).expect("header");
        let bg = app.world().get::<BackgroundColor>(header).expect("background").0;
        (shell.scrolled(), bg != Color::NONE)
    };
    assert_eq!(scrolled_at(&mut app, 0.0), (false, false));
    assert_eq!(scrolled_at(&mut app, 50.0), (false, false));
    assert_eq!(scrolled_at(&mut app, 51.0), (true, true));
    assert_eq!(scrolled_at(&mut app, 10.0), (false, false));
}
