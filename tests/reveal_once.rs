use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use cleardrop::core::config::RevealConfig;
use cleardrop::ui::fade::Opacity;
use cleardrop::ui::reveal::{reveal_group, Reveal, RevealFrom, RevealObserver, RevealPlugin, RevealState};
use cleardrop::ui::scroll::{Block, PageLayout};

fn setup() -> (App, Entity, [Entity; 2]) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<PageLayout>()
        .add_plugins(RevealPlugin);
    let section = app.world_mut().spawn(Node::default()).id();
    let first = app.world_mut().spawn((Node::default(), ChildOf(section))).id();
    let second = app.world_mut().spawn((Node::default(), ChildOf(section))).id();
    {
        let mut commands = app.world_mut().commands();
        reveal_group(
            &mut commands,
            section,
            &[(first, RevealFrom::Right), (second, RevealFrom::Below)],
            &RevealConfig::default(),
        );
    }
    app.world_mut().flush();
    *app.world_mut().resource_mut::<PageLayout>() = PageLayout {
        viewport: 800.0,
        content: 2000.0,
        scroll: 0.0,
        blocks: vec![Block { entity: section, top: 1000.0, height: 400.0 }],
    };
    (app, section, [first, second])
}

fn scroll_to(app: &mut App, y: f32) {
    app.world_mut().resource_mut::<PageLayout>().scroll = y;
}

fn state(app: &App, e: Entity) -> RevealState {
    app.world().get::<Reveal>(e).map(Reveal::state).expect("reveal")
}

#[test]
fn section_below_the_fold_stays_hidden() {
    let (mut app, section, items) = setup();
    for _ in 0..5 {
        app.update();
    }
    for e in items {
        assert_eq!(state(&app, e), RevealState::Armed);
        assert_eq!(app.world().get::<Opacity>(e).map(|o| o.0), Some(0.0));
    }
    assert!(app.world().get::<RevealObserver>(section).is_some());
    let node = app.world().get::<Node>(items[0]).expect("node");
    assert_eq!(node.left, Val::Px(50.0));
}

#[test]
fn reveal_plays_once_and_never_replays() {
    let (mut app, section, items) = setup();
    app.update();
    scroll_to(&mut app, 600.0);
    app.update();
    assert!(app.world().get::<RevealObserver>(section).is_none(), "observer removed after firing");
    assert!(matches!(state(&app, items[1]), RevealState::Playing { .. }));

    // 0.8 s duration plus 0.15 s stagger on the second item.
    for _ in 0..12 {
        app.update();
    }
    for e in items {
        assert_eq!(state(&app, e), RevealState::Settled);
        assert_eq!(app.world().get::<Opacity>(e).map(|o| o.0), Some(1.0));
        assert_eq!(app.world().get::<Node>(e).map(|n| n.top), Some(Val::Px(0.0)));
    }

    scroll_to(&mut app, 0.0);
    app.update();
    scroll_to(&mut app, 600.0);
    app.update();
    for e in items {
        assert_eq!(state(&app, e), RevealState::Settled);
    }
}

#[test]
fn disabled_reveals_start_settled() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    let section = app.world_mut().spawn(Node::default()).id();
    let item = app.world_mut().spawn((Node::default(), ChildOf(section))).id();
    let cfg = RevealConfig { enabled: false, ..Default::default() };
    {
        let mut commands = app.world_mut().commands();
        reveal_group(&mut commands, section, &[(item, RevealFrom::Left)], &cfg);
    }
    app.world_mut().flush();
    assert_eq!(state(&app, item), RevealState::Settled);
    assert_eq!(app.world().get::<Opacity>(item).map(|o| o.0), Some(1.0));
}
