use bevy::prelude::*;

use super::{card_text, grid, grid_card, section, PageContext};
use crate::core::content::home::problem;
use crate::core::content::SectionId;
use crate::rendering::palette;
use crate::ui::reveal::{reveal_group, RevealFrom};
use crate::ui::widgets::{TextRole, Ui};

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext) -> Entity {
    let (block, content) = section(ui, page, SectionId::Problem, palette::hsl_pct(200.0, 60.0, 95.0));
    let heading = ui.heading(content, &problem::HEADING);
    let mut items = vec![(heading, RevealFrom::Below)];

    let cards = grid(ui, content, 32.0);
    for (i, (card, (h, s, l))) in problem::CARDS.iter().zip(problem::CARD_ACCENTS).enumerate() {
        let node = grid_card(ui, cards, 280.0);
        ui.commands.entity(node).entry::<Node>().and_modify(|mut n| n.align_items = AlignItems::Center);
        ui.badge(node, (i + 1).to_string(), 80.0, palette::hsl_pct(h, s, l));
        card_text(ui, node, card.title, card.description);
        items.push((node, RevealFrom::Below));
    }

    let stat = ui.panel(
        content,
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(32.0)),
            margin: UiRect::top(Val::Px(40.0)),
            row_gap: Val::Px(8.0),
            ..default()
        },
        palette::fade(palette::SURFACE, 0.8),
        16.0,
    );
    ui.centered_text(stat, problem::STAT, TextRole::Title, palette::TEXT_PRIMARY);
    ui.centered_text(stat, problem::STAT_NOTE, TextRole::Body, palette::TEXT_MUTED);
    items.push((stat, RevealFrom::Below));

    reveal_group(ui.commands, block, &items, &ctx.cfg.reveal);
    block
}
