use bevy::prelude::*;

use super::{scene_viewport, section, PageContext};
use crate::core::content::home::how_it_works;
use crate::core::content::SectionId;
use crate::rendering::palette;
use crate::rendering::scene::{SceneAssets, SceneSlot};
use crate::ui::reveal::{reveal_group, RevealFrom};
use crate::ui::widgets::{TextRole, Ui};

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext, scenes: Option<&mut SceneAssets>) -> Entity {
    let (block, content) = section(ui, page, SectionId::HowItWorks, palette::PAGE_BACKGROUND);
    let heading = ui.heading(content, &how_it_works::HEADING);
    let mut items = vec![(heading, RevealFrom::Below)];

    let columns = ui.row(content, 48.0);
    ui.commands.entity(columns).entry::<Node>().and_modify(|mut n| {
        n.justify_content = JustifyContent::Center;
        n.align_items = AlignItems::Center;
    });

    let steps = ui.column(columns, 20.0);
    ui.commands.entity(steps).entry::<Node>().and_modify(|mut n| {
        n.flex_basis = Val::Px(440.0);
        n.flex_grow = 1.0;
    });
    for step in &how_it_works::STEPS {
        let (h, s, l) = step.accent;
        let accent = palette::hsl_pct(h, s, l);
        let row = ui.row(steps, 16.0);
        ui.commands.entity(row).entry::<Node>().and_modify(|mut n| {
            n.width = Val::Percent(100.0);
            n.flex_wrap = FlexWrap::NoWrap;
            n.align_items = AlignItems::FlexStart;
        });
        ui.badge(row, step.number.to_string(), 56.0, accent);
        let card = ui.card(row, Val::Auto);
        ui.commands.entity(card).entry::<Node>().and_modify(|mut n| n.flex_grow = 1.0);
        ui.text(card, step.title, TextRole::Subheading, palette::TEXT_PRIMARY);
        ui.text(card, step.subtitle, TextRole::Small, accent);
        ui.bullets(card, step.details, "•", palette::TEXT_MUTED);
        items.push((row, RevealFrom::Right));
    }
    let note = ui.panel(
        steps,
        Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            padding: UiRect::all(Val::Px(16.0)),
            ..default()
        },
        palette::INFO_SURFACE,
        12.0,
    );
    ui.centered_text(note, how_it_works::GRAVITY_NOTE, TextRole::Small, palette::hsl_pct(195.0, 70.0, 35.0));
    items.push((note, RevealFrom::Below));

    let viewer = ui.column(columns, 12.0);
    ui.commands.entity(viewer).entry::<Node>().and_modify(|mut n| n.align_items = AlignItems::Center);
    scene_viewport(ui, viewer, scenes, &ctx.cfg.how_scene, SceneSlot::HowItWorks, ctx.cfg.seed);
    ui.centered_text(viewer, how_it_works::VIEWER_HINT, TextRole::Small, palette::TEXT_MUTED);
    items.insert(1, (viewer, RevealFrom::Left));

    reveal_group(ui.commands, block, &items, &ctx.cfg.reveal);
    block
}
