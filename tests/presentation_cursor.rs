mod common;

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;

use cleardrop::core::content::script::{PRESENTER_TIP_PREFIX, SCRIPT};
use cleardrop::ui::actions::{ActionTriggered, Disabled, SiteAction};
use cleardrop::ui::presentation::{NextButton, PositionLabel, PreviousButton, ScriptCursor, SlideParts};
use common::*;

fn cursor(app: &mut App) -> ScriptCursor {
    *app.world_mut()
        .query::<&ScriptCursor>()
        .single(app.world())
        .expect("presentation page mounted")
}

fn text(app: &App, entity: Entity) -> String {
    app.world().get::<Text>(entity).map(|t| t.0.clone()).unwrap_or_default()
}

fn trigger(app: &mut App, action: SiteAction) {
    app.world_mut().send_event(ActionTriggered(action));
}

fn press(app: &mut App, key: KeyCode, logical_key: Key) {
    app.world_mut().send_event(KeyboardInput {
        key_code: key,
        logical_key,
        state: ButtonState::Pressed,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
}

#[test]
fn selecting_a_section_swaps_the_slide() {
    let mut app = site_app("/presentation", test_config());
    assert_eq!(cursor(&mut app).index(), 0);

    trigger(&mut app, SiteAction::ScriptSelect(3));
    run(&mut app, 10);
    assert_eq!(cursor(&mut app).index(), 3);

    let parts = *app
        .world_mut()
        .query::<&SlideParts>()
        .single(app.world())
        .expect("slide card");
    let section = &SCRIPT[3];
    assert_eq!(text(&app, parts.title), section.title);
    assert_eq!(
        text(&app, parts.notes),
        format!("{PRESENTER_TIP_PREFIX}{}", section.notes.unwrap_or_default())
    );
    let shown: Vec<String> = app
        .world()
        .get::<Children>(parts.lines)
        .map(|kids| kids.iter().filter_map(|e| app.world().get::<Text>(e)).map(|t| t.0.clone()).collect())
        .unwrap_or_default();
    let expected: Vec<String> = section.lines.iter().filter(|l| !l.is_empty()).map(|l| l.to_string()).collect();
    assert_eq!(shown, expected);
}

#[test]
fn cursor_clamps_at_both_ends() {
    let mut app = site_app("/presentation", test_config());
    trigger(&mut app, SiteAction::ScriptPrevious);
    run(&mut app, 2);
    assert_eq!(cursor(&mut app).index(), 0);
    let previous = app.world_mut().query_filtered::<Entity, With<PreviousButton>>().single(app.world()).expect("previous");
    assert!(app.world().get::<Disabled>(previous).is_some());

    for _ in 0..20 {
        trigger(&mut app, SiteAction::ScriptNext);
    }
    run(&mut app, 2);
    assert_eq!(cursor(&mut app).index(), SCRIPT.len() - 1);
    let next = app.world_mut().query_filtered::<Entity, With<NextButton>>().single(app.world()).expect("next");
    assert!(app.world().get::<Disabled>(next).is_some());
    assert!(app.world().get::<Disabled>(previous).is_none());

    let label = app.world_mut().query_filtered::<&Text, With<PositionLabel>>().single(app.world()).expect("label").0.clone();
    assert_eq!(label, format!("{} / {}", SCRIPT.len(), SCRIPT.len()));
}

#[test]
fn left_arrow_moves_forward() {
    let mut app = site_app("/presentation", test_config());
    press(&mut app, KeyCode::ArrowLeft, Key::ArrowLeft);
    run(&mut app, 2);
    assert_eq!(cursor(&mut app).index(), 1);
}
