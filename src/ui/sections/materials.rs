use bevy::prelude::*;

use super::{grid, grid_card, section, PageContext};
use crate::core::content::home::materials::{self, Category};
use crate::core::content::SectionId;
use crate::rendering::palette;
use crate::ui::reveal::{reveal_group, RevealFrom};
use crate::ui::widgets::{TextRole, Ui};

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext) -> Entity {
    let (block, content) = section(ui, page, SectionId::Materials, palette::SURFACE);
    let heading = ui.heading(content, &materials::HEADING);
    let mut items = vec![(heading, RevealFrom::Below)];

    let categories = grid(ui, content, 24.0);
    for category in Category::ALL {
        let card = grid_card(ui, categories, 300.0);
        ui.text(card, category.label(), TextRole::Subheading, palette::TEXT_MUTED);
        let names: Vec<&str> = materials::in_category(category).map(|m| m.name).collect();
        ui.bullets(card, names, "✓", palette::TEXT_PRIMARY);
        items.push((card, RevealFrom::Below));
    }

    let cost = ui.panel(
        content,
        Node {
            align_self: AlignSelf::Center,
            padding: UiRect::axes(Val::Px(32.0), Val::Px(16.0)),
            ..default()
        },
        palette::hsl_pct(152.0, 60.0, 42.0),
        999.0,
    );
    ui.centered_text(cost, materials::COST, TextRole::Heading, palette::TEXT_ON_DARK);
    items.push((cost, RevealFrom::Below));

    let tip = ui.card(content, Val::Percent(100.0));
    ui.text(tip, materials::TIP.title, TextRole::Subheading, palette::hsl_pct(150.0, 50.0, 40.0));
    ui.text(tip, materials::TIP.description, TextRole::Body, palette::TEXT_MUTED);
    items.push((tip, RevealFrom::Below));

    reveal_group(ui.commands, block, &items, &ctx.cfg.reveal);
    block
}
