use bevy::prelude::*;

use super::{card_text, grid, grid_card, section, PageContext};
use crate::core::content::home::{impact, TAGLINE_QUOTE};
use crate::core::content::SectionId;
use crate::rendering::palette;
use crate::ui::reveal::{reveal_group, RevealFrom};
use crate::ui::widgets::{TextRole, Ui};

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext) -> Entity {
    let (block, content) = section(ui, page, SectionId::Impact, palette::hsl_pct(152.0, 40.0, 92.0));
    let heading = ui.heading(content, &impact::HEADING);
    let mut items = vec![(heading, RevealFrom::Below)];

    let stats = grid(ui, content, 32.0);
    for stat in &impact::STATS {
        let (h, s, l) = stat.accent;
        let accent = palette::hsl_pct(h, s, l);
        let card = grid_card(ui, stats, 260.0);
        ui.commands.entity(card).entry::<Node>().and_modify(|mut n| n.align_items = AlignItems::Center);
        let figure = ui.row(card, 8.0);
        ui.text(figure, stat.value, TextRole::Display, accent);
        if !stat.unit.is_empty() {
            ui.text(figure, stat.unit, TextRole::Heading, accent);
        }
        ui.centered_text(card, stat.label, TextRole::Body, palette::TEXT_MUTED);
        items.push((card, RevealFrom::Below));
    }

    let uses = ui.column(content, 16.0);
    ui.commands.entity(uses).entry::<Node>().and_modify(|mut n| {
        n.align_items = AlignItems::Stretch;
        n.margin = UiRect::top(Val::Px(32.0));
    });
    ui.centered_text(uses, impact::USE_CASES_HEADING, TextRole::Heading, palette::TEXT_PRIMARY);
    let cases = grid(ui, uses, 16.0);
    for case in &impact::USE_CASES {
        let card = grid_card(ui, cases, 200.0);
        card_text(ui, card, case.title, case.description);
    }
    items.push((uses, RevealFrom::Below));

    let quote = ui.centered_text(content, TAGLINE_QUOTE, TextRole::Heading, palette::hsl_pct(152.0, 60.0, 32.0));
    items.push((quote, RevealFrom::Below));

    reveal_group(ui.commands, block, &items, &ctx.cfg.reveal);
    block
}
