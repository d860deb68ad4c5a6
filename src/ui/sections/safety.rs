use bevy::prelude::*;

use super::{section, PageContext};
use crate::core::content::home::safety::{self, RuleKind};
use crate::core::content::SectionId;
use crate::rendering::palette;
use crate::ui::reveal::{reveal_group, RevealFrom};
use crate::ui::widgets::{TextRole, Ui};

fn rule_colors(kind: RuleKind) -> (Color, Color, &'static str) {
    match kind {
        RuleKind::Warning => (palette::WARNING_SURFACE, palette::WARNING, "!"),
        RuleKind::Info => (palette::INFO_SURFACE, palette::WATER_BLUE, "i"),
    }
}

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext) -> Entity {
    let (block, content) = section(ui, page, SectionId::Safety, palette::hsl_pct(45.0, 60.0, 96.0));
    let heading = ui.heading(content, &safety::HEADING);
    let mut items = vec![(heading, RevealFrom::Below)];

    for rule in &safety::RULES {
        let (surface, accent, glyph) = rule_colors(rule.kind);
        let row = ui.panel(
            content,
            Node {
                flex_direction: FlexDirection::RowReverse,
                align_items: AlignItems::Center,
                column_gap: Val::Px(16.0),
                padding: UiRect::all(Val::Px(20.0)),
                border: UiRect::right(Val::Px(4.0)),
                ..default()
            },
            surface,
            12.0,
        );
        ui.commands.entity(row).insert(BorderColor(accent));
        ui.badge(row, glyph, 40.0, accent);
        let text = ui.column(row, 4.0);
        ui.text(text, rule.rule, TextRole::Subheading, palette::TEXT_PRIMARY);
        ui.text(text, rule.description, TextRole::Small, palette::TEXT_MUTED);
        items.push((row, RevealFrom::Right));
    }

    let compliance = ui.card(content, Val::Percent(100.0));
    ui.commands.entity(compliance).entry::<Node>().and_modify(|mut n| n.align_items = AlignItems::Center);
    ui.centered_text(compliance, safety::COMPLIANCE.title, TextRole::Subheading, palette::hsl_pct(150.0, 50.0, 30.0));
    ui.centered_text(compliance, safety::COMPLIANCE.description, TextRole::Body, palette::TEXT_MUTED);
    items.push((compliance, RevealFrom::Below));

    reveal_group(ui.commands, block, &items, &ctx.cfg.reveal);
    block
}
