//! Printable one-page poster.

use bevy::prelude::*;

use super::actions::{ButtonStyle, SiteAction};
use super::logo::{spawn_logo, LogoImages, LogoOptions, LogoSize, LogoVariant};
use super::print::NoPrint;
use super::scroll::PageScroll;
use super::widgets::{TextRole, Ui};
use crate::app::state::Route;
use crate::core::content::poster::{self, PosterBlock};
use crate::rendering::fonts::SiteFonts;
use crate::rendering::palette;

const POSTER_WIDTH: f32 = 900.0;

/// Tinted box tone: (surface, border, heading).
fn tone(hue: f32) -> (Color, Color, Color) {
    (
        palette::hsl_pct(hue, 80.0, 97.0),
        palette::hsl_pct(hue, 70.0, 85.0),
        palette::hsl_pct(hue, 70.0, 35.0),
    )
}

fn tinted_box(ui: &mut Ui, parent: Entity, hue: f32) -> (Entity, Color) {
    let (surface, border, heading) = tone(hue);
    let panel = ui.panel(
        parent,
        Node {
            flex_basis: Val::Px(360.0),
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            padding: UiRect::all(Val::Px(24.0)),
            row_gap: Val::Px(8.0),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        surface,
        12.0,
    );
    ui.commands.entity(panel).insert(BorderColor(border));
    (panel, heading)
}

fn block(ui: &mut Ui, parent: Entity, content: &PosterBlock, hue: f32) -> Entity {
    let (panel, heading) = tinted_box(ui, parent, hue);
    ui.text(panel, content.heading, TextRole::Heading, heading);
    if let Some(intro) = content.intro {
        ui.text(panel, intro, TextRole::Body, palette::TEXT_PRIMARY);
    }
    ui.bullets(panel, content.bullets.iter().copied(), "•", palette::TEXT_PRIMARY);
    if let Some(footer) = content.footer {
        let note = ui.panel(
            panel,
            Node { width: Val::Percent(100.0), justify_content: JustifyContent::Center, padding: UiRect::all(Val::Px(12.0)), ..default() },
            palette::hsl_pct(140.0, 60.0, 90.0),
            8.0,
        );
        ui.centered_text(note, footer, TextRole::Subheading, palette::hsl_pct(140.0, 60.0, 30.0));
    }
    panel
}

fn pair(ui: &mut Ui, parent: Entity) -> Entity {
    let row = ui.row(parent, 24.0);
    ui.commands.entity(row).entry::<Node>().and_modify(|mut n| {
        n.width = Val::Percent(100.0);
        n.align_items = AlignItems::Stretch;
    });
    row
}

pub fn spawn_poster(mut commands: Commands, fonts: Option<Res<SiteFonts>>, logos: Option<Res<LogoImages>>) {
    let fonts = fonts.map(|f| f.clone()).unwrap_or_else(SiteFonts::fallback);
    let logos = logos.map(|l| l.clone()).unwrap_or_default();
    let root = commands
        .spawn((
            Name::new("poster-page"),
            PageScroll::default(),
            ScrollPosition::default(),
            StateScoped(Route::Poster),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                overflow: Overflow::scroll_y(),
                ..default()
            },
            BackgroundColor(palette::hsl_pct(0.0, 0.0, 95.0)),
        ))
        .id();
    let mut ui = Ui::new(&mut commands, &fonts);

    let controls = ui.node(
        root,
        Node {
            width: Val::Percent(100.0),
            flex_shrink: 0.0,
            flex_direction: FlexDirection::RowReverse,
            justify_content: JustifyContent::SpaceBetween,
            padding: UiRect::all(Val::Px(16.0)),
            ..default()
        },
    );
    ui.commands.entity(controls).insert(NoPrint);
    ui.button(
        controls,
        poster::PRINT,
        SiteAction::Print,
        ButtonStyle::solid(palette::ACCENT_GREEN),
        palette::TEXT_ON_DARK,
    );
    ui.button(
        controls,
        poster::BACK,
        SiteAction::Go(Route::Home),
        ButtonStyle::solid(palette::SURFACE),
        palette::TEXT_PRIMARY,
    );

    let sheet = ui.panel(
        root,
        Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(POSTER_WIDTH),
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Stretch,
            padding: UiRect::all(Val::Px(32.0)),
            margin: UiRect::bottom(Val::Px(32.0)),
            row_gap: Val::Px(24.0),
            ..default()
        },
        palette::SURFACE,
        0.0,
    );

    let header = ui.panel(
        sheet,
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(8.0),
            padding: UiRect::bottom(Val::Px(24.0)),
            border: UiRect::bottom(Val::Px(4.0)),
            ..default()
        },
        Color::NONE,
        0.0,
    );
    ui.commands.entity(header).insert(BorderColor(palette::ACCENT_GREEN));
    spawn_logo(&mut ui, header, &logos, LogoOptions { variant: LogoVariant::Light, size: LogoSize::Lg, show_text: true });
    ui.centered_text(header, poster::TITLE, TextRole::Title, palette::TEXT_PRIMARY);
    ui.centered_text(header, poster::BYLINE, TextRole::Subheading, palette::TEXT_MUTED);

    let first = pair(&mut ui, sheet);
    block(&mut ui, first, &poster::PROBLEM, 0.0);
    block(&mut ui, first, &poster::SOLUTION, 140.0);

    let (layers, heading) = tinted_box(&mut ui, sheet, 210.0);
    ui.commands.entity(layers).entry::<Node>().and_modify(|mut n| n.align_items = AlignItems::Center);
    ui.centered_text(layers, poster::LAYERS_HEADING, TextRole::Heading, heading);
    let flow = ui.row(layers, 24.0);
    for (i, layer) in poster::LAYERS.iter().enumerate() {
        if i > 0 {
            ui.centered_text(flow, "←", TextRole::Title, palette::hsl_pct(210.0, 70.0, 65.0));
        }
        let stage = ui.node(
            flow,
            Node { flex_direction: FlexDirection::Column, align_items: AlignItems::Center, row_gap: Val::Px(4.0), ..default() },
        );
        let tile = ui.panel(
            stage,
            Node {
                width: Val::Px(96.0),
                height: Val::Px(96.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            palette::hex(layer.gradient.0),
            8.0,
        );
        ui.centered_text(tile, layer.label, TextRole::Body, palette::TEXT_ON_DARK);
        ui.centered_text(stage, layer.material, TextRole::Body, palette::TEXT_PRIMARY);
        ui.centered_text(stage, layer.role, TextRole::Small, palette::TEXT_MUTED);
    }

    let second = pair(&mut ui, sheet);
    block(&mut ui, second, &poster::MATERIALS, 38.0);
    block(&mut ui, second, &poster::SAFETY, 50.0);

    let (pro, heading) = tinted_box(&mut ui, sheet, 270.0);
    ui.text(pro, poster::PRO_HEADING, TextRole::Heading, heading);
    let upgrades = ui.row(pro, 12.0);
    ui.commands.entity(upgrades).entry::<Node>().and_modify(|mut n| n.width = Val::Percent(100.0));
    for upgrade in &poster::PRO_UPGRADES {
        let tile = ui.panel(
            upgrades,
            Node {
                flex_basis: Val::Px(240.0),
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexEnd,
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            palette::SURFACE,
            8.0,
        );
        ui.text(tile, upgrade.title, TextRole::Body, palette::TEXT_PRIMARY);
        ui.text(tile, upgrade.description, TextRole::Small, palette::TEXT_MUTED);
    }

    let impact = ui.panel(
        sheet,
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(24.0)),
            row_gap: Val::Px(16.0),
            ..default()
        },
        palette::PRIMARY_GREEN,
        12.0,
    );
    ui.centered_text(impact, poster::IMPACT_HEADING, TextRole::Heading, palette::TEXT_ON_DARK);
    let figures = ui.row(impact, 48.0);
    for (figure, caption) in poster::IMPACT {
        let cell = ui.node(
            figures,
            Node { flex_direction: FlexDirection::Column, align_items: AlignItems::Center, ..default() },
        );
        ui.centered_text(cell, figure, TextRole::Title, palette::TEXT_ON_DARK);
        ui.centered_text(cell, caption, TextRole::Small, palette::fade(palette::TEXT_ON_DARK, 0.85));
    }

    ui.centered_text(sheet, poster::TAGLINE, TextRole::Subheading, palette::hsl_pct(152.0, 60.0, 32.0));
    info!(target: "ui", "poster mounted");
}

pub struct PosterPlugin;

impl Plugin for PosterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Route::Poster), spawn_poster);
    }
}
