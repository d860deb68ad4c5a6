// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The scrolling home page: eight anchored sections and the footer, stacked
//! inside one `PageScroll` container.

pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod impact;
pub mod improvements;
pub mod materials;
pub mod problem;
pub mod safety;
pub mod solution;

use bevy::prelude::*;

use super::logo::LogoImages;
use super::scroll::{PageScroll, SectionAnchor};
use super::widgets::{TextRole, Ui};
use crate::app::state::HomePhase;
use crate::core::config::{SceneConfig, SiteConfig};
use crate::core::content::SectionId;
use crate::core::system::system_order::{LayoutSet, PageSet};
use crate::rendering::fonts::SiteFonts;
use crate::rendering::palette;
use crate::rendering::scene::geometry::FilterAssetCache;
use crate::rendering::scene::{spawn_filter_scene, SceneAssets, SceneSlot, SceneViewport};

/// Widest the section content grows before centring.
pub const CONTENT_WIDTH: f32 = 1100.0;

/// Everything a section builder needs besides the spawner.
pub struct PageContext<'c> {
    pub cfg: &'c SiteConfig,
    pub logos: &'c LogoImages,
}

pub struct SectionsPlugin;

impl Plugin for SectionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(HomePhase::Content), spawn_home_page).add_systems(
            Update,
            hero::hero_parallax
                .in_set(PageSet)
                .after(LayoutSet)
                .run_if(in_state(HomePhase::Content)),
        );
    }
}

pub fn spawn_home_page(
    mut commands: Commands,
    fonts: Option<Res<SiteFonts>>,
    logos: Option<Res<LogoImages>>,
    cfg: Option<Res<SiteConfig>>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    images: Option<ResMut<Assets<Image>>>,
    cache: ResMut<FilterAssetCache>,
) {
    // Headless runs have no render asset stores; scenes fall back to placeholders.
    let mut scenes = match (meshes, materials, images) {
        (Some(meshes), Some(materials), Some(images)) => Some(SceneAssets { meshes, materials, images, cache }),
        _ => None,
    };
    let fonts = fonts.map(|f| f.clone()).unwrap_or_else(SiteFonts::fallback);
    let logos = logos.map(|l| l.clone()).unwrap_or_default();
    let cfg = cfg.map(|c| c.clone()).unwrap_or_default();
    let ctx = PageContext { cfg: &cfg, logos: &logos };

    let page = commands
        .spawn((
            Name::new("home-page"),
            PageScroll::default(),
            ScrollPosition::default(),
            StateScoped(HomePhase::Content),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                overflow: Overflow::scroll_y(),
                ..default()
            },
            BackgroundColor(palette::PAGE_BACKGROUND),
        ))
        .id();
    let mut ui = Ui::new(&mut commands, &fonts);
    hero::spawn(&mut ui, page, &ctx, scenes.as_mut());
    problem::spawn(&mut ui, page, &ctx);
    solution::spawn(&mut ui, page, &ctx);
    how_it_works::spawn(&mut ui, page, &ctx, scenes.as_mut());
    materials::spawn(&mut ui, page, &ctx);
    safety::spawn(&mut ui, page, &ctx);
    impact::spawn(&mut ui, page, &ctx);
    improvements::spawn(&mut ui, page, &ctx);
    footer::spawn(&mut ui, page, &ctx);
    info!(target: "ui", "home page mounted ({} sections)", SectionId::ALL.len());
}

/// Anchored full-width block plus its centred content column.
pub(crate) fn section(ui: &mut Ui, page: Entity, id: SectionId, background: Color) -> (Entity, Entity) {
    let block = ui
        .commands
        .spawn((
            Name::new(format!("section:{}", id.anchor())),
            SectionAnchor(id),
            Node {
                width: Val::Percent(100.0),
                flex_shrink: 0.0,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(24.0), Val::Px(96.0)),
                ..default()
            },
            BackgroundColor(background),
            ChildOf(page),
        ))
        .id();
    let content = ui.node(
        block,
        Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(CONTENT_WIDTH),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Stretch,
            row_gap: Val::Px(24.0),
            ..default()
        },
    );
    (block, content)
}

/// Wrapping right-to-left grid of equal cards.
pub(crate) fn grid(ui: &mut Ui, parent: Entity, gap: f32) -> Entity {
    ui.node(
        parent,
        Node {
            flex_direction: FlexDirection::RowReverse,
            flex_wrap: FlexWrap::Wrap,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Stretch,
            column_gap: Val::Px(gap),
            row_gap: Val::Px(gap),
            ..default()
        },
    )
}

/// Card that shares a grid row with its siblings.
pub(crate) fn grid_card(ui: &mut Ui, grid: Entity, min_width: f32) -> Entity {
    let card = ui.card(grid, Val::Auto);
    ui.commands.entity(card).entry::<Node>().and_modify(move |mut node| {
        node.min_width = Val::Px(min_width);
        node.flex_basis = Val::Px(min_width);
        node.flex_grow = 1.0;
    });
    card
}

/// Title and description stacked inside a card.
pub(crate) fn card_text(ui: &mut Ui, card: Entity, title: &str, description: &str) {
    ui.text(card, title, TextRole::Subheading, palette::TEXT_PRIMARY);
    ui.text(card, description, TextRole::Body, palette::TEXT_MUTED);
}

/// Off-screen filter scene shown through an image node. Without render
/// assets (headless runs) a plain panel holds its place.
pub(crate) fn scene_viewport(
    ui: &mut Ui,
    parent: Entity,
    scenes: Option<&mut SceneAssets>,
    scene_cfg: &SceneConfig,
    slot: SceneSlot,
    seed: Option<u64>,
) -> Entity {
    let (w, h) = scene_cfg.viewport;
    let node = Node {
        width: Val::Px(w as f32),
        max_width: Val::Percent(100.0),
        height: Val::Px(h as f32),
        flex_shrink: 0.0,
        ..default()
    };
    let Some(assets) = scenes else {
        debug!(target: "scene", "no render assets; {} scene replaced by a placeholder", slot.label());
        return ui.panel(parent, node, palette::SURFACE_MUTED, 24.0);
    };
    let composed = spawn_filter_scene(ui.commands, assets, scene_cfg, slot, seed);
    ui.commands.entity(composed.root).insert(StateScoped(HomePhase::Content));
    ui.commands
        .spawn((
            Name::new(format!("viewport:{}", slot.label())),
            ImageNode::new(composed.image),
            SceneViewport { camera: composed.camera },
            Interaction::default(),
            node,
            BorderRadius::all(Val::Px(24.0)),
            ChildOf(parent),
        ))
        .id()
}
