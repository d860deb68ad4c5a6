use bevy::prelude::*;

use super::{section, PageContext};
use crate::core::content::home::{solution, FILTER_LAYERS};
use crate::core::content::SectionId;
use crate::rendering::palette;
use crate::ui::reveal::{reveal_group, RevealFrom};
use crate::ui::widgets::{TextRole, Ui};

fn pill(ui: &mut Ui, parent: Entity, label: &str, fill: Color, text: Color) {
    let pill = ui.panel(
        parent,
        Node {
            align_self: AlignSelf::Center,
            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
            ..default()
        },
        fill,
        999.0,
    );
    ui.centered_text(pill, label, TextRole::Small, text);
}

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext) -> Entity {
    let (block, content) = section(ui, page, SectionId::Solution, palette::SURFACE_MUTED);
    let heading = ui.heading(content, &solution::HEADING);

    let columns = ui.row(content, 48.0);
    ui.commands.entity(columns).entry::<Node>().and_modify(|mut n| {
        n.justify_content = JustifyContent::Center;
        n.align_items = AlignItems::Center;
    });

    let benefits = ui.column(columns, 16.0);
    ui.commands.entity(benefits).entry::<Node>().and_modify(|mut n| {
        n.flex_basis = Val::Px(420.0);
        n.flex_grow = 1.0;
    });
    for benefit in &solution::BENEFITS {
        let row = ui.panel(
            benefits,
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::RowReverse,
                align_items: AlignItems::Center,
                column_gap: Val::Px(16.0),
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
            palette::fade(palette::SURFACE, 0.6),
            12.0,
        );
        ui.badge(row, "✓", 48.0, palette::ACCENT_GREEN);
        let text = ui.column(row, 2.0);
        ui.text(text, benefit.title, TextRole::Subheading, palette::TEXT_PRIMARY);
        ui.text(text, benefit.description, TextRole::Body, palette::TEXT_MUTED);
    }
    let components = ui.card(benefits, Val::Percent(100.0));
    ui.text(components, solution::COMPONENTS_HEADING, TextRole::Subheading, palette::TEXT_PRIMARY);
    let lines: Vec<String> = solution::COMPONENTS
        .iter()
        .map(|c| format!("{} — {}", c.title, c.description))
        .collect();
    ui.bullets(components, lines.iter().map(String::as_str), "✓", palette::TEXT_PRIMARY);

    let diagram = ui.card(columns, Val::Px(360.0));
    ui.centered_text(diagram, solution::DIAGRAM_HEADING, TextRole::Subheading, palette::TEXT_PRIMARY);
    pill(
        ui,
        diagram,
        solution::DIAGRAM_INPUT,
        palette::hsl_pct(195.0, 70.0, 85.0),
        palette::hsl_pct(195.0, 70.0, 30.0),
    );
    for (i, layer) in FILTER_LAYERS.iter().enumerate() {
        if i > 0 {
            ui.panel(
                diagram,
                Node { width: Val::Px(2.0), height: Val::Px(16.0), align_self: AlignSelf::Center, ..default() },
                palette::hsl_pct(195.0, 70.0, 50.0),
                1.0,
            );
        }
        let swatch = ui.panel(
            diagram,
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            palette::hex(layer.gradient.0),
            10.0,
        );
        ui.centered_text(swatch, layer.label, TextRole::Subheading, palette::TEXT_ON_DARK);
        ui.centered_text(swatch, layer.material, TextRole::Small, palette::fade(palette::TEXT_ON_DARK, 0.9));
    }
    pill(
        ui,
        diagram,
        solution::DIAGRAM_OUTPUT,
        palette::hsl_pct(152.0, 60.0, 85.0),
        palette::hsl_pct(152.0, 60.0, 25.0),
    );

    reveal_group(
        ui.commands,
        block,
        &[(heading, RevealFrom::Below), (benefits, RevealFrom::Right), (diagram, RevealFrom::Left)],
        &ctx.cfg.reveal,
    );
    block
}
