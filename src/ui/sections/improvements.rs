use bevy::prelude::*;

use super::{card_text, grid, grid_card, section, PageContext};
use crate::core::content::home::improvements;
use crate::core::content::SectionId;
use crate::rendering::palette;
use crate::ui::reveal::{reveal_group, RevealFrom};
use crate::ui::widgets::{TextRole, Ui};

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext) -> Entity {
    let accent = palette::hsl_pct(270.0, 50.0, 50.0);
    let (block, content) = section(ui, page, SectionId::Improvements, palette::hsl_pct(270.0, 30.0, 95.0));
    let heading = ui.heading(content, &improvements::HEADING);
    let mut items = vec![(heading, RevealFrom::Below)];

    let upgrades = grid(ui, content, 24.0);
    for (i, item) in improvements::ITEMS.iter().enumerate() {
        let card = grid_card(ui, upgrades, 300.0);
        ui.badge(card, (i + 1).to_string(), 40.0, accent);
        card_text(ui, card, item.title, item.description);
        items.push((card, RevealFrom::Below));
    }

    let maintenance = ui.card(content, Val::Percent(100.0));
    ui.text(maintenance, improvements::MAINTENANCE_HEADING, TextRole::Heading, palette::hsl_pct(270.0, 30.0, 25.0));
    for task in &improvements::MAINTENANCE {
        let row = ui.panel(
            maintenance,
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::RowReverse,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            palette::hsl_pct(270.0, 30.0, 97.0),
            8.0,
        );
        ui.text(row, task.title, TextRole::Body, palette::TEXT_PRIMARY);
        ui.text(row, task.description, TextRole::Body, accent);
    }
    items.push((maintenance, RevealFrom::Below));

    let note = ui.panel(
        content,
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            padding: UiRect::all(Val::Px(20.0)),
            row_gap: Val::Px(4.0),
            ..default()
        },
        palette::hsl_pct(152.0, 50.0, 95.0),
        12.0,
    );
    ui.text(note, improvements::PERFORMANCE_NOTE.title, TextRole::Subheading, palette::hsl_pct(152.0, 60.0, 35.0));
    ui.text(note, improvements::PERFORMANCE_NOTE.description, TextRole::Body, palette::hsl_pct(152.0, 40.0, 30.0));
    items.push((note, RevealFrom::Below));

    reveal_group(ui.commands, block, &items, &ctx.cfg.reveal);
    block
}
