// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Page scrolling: wheel and keyboard input, smooth anchor scrolling and a
//! per-frame measurement of where every top-level block sits.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::actions::{ActionTriggered, SiteAction};
use crate::core::config::SiteConfig;
use crate::core::content::SectionId;
use crate::core::system::system_order::{InputSet, LayoutSet, PageSet};
use crate::rendering::scene::viewport::OrbitRig;
use crate::rendering::scene::SceneViewport;

const ARROW_STEP: f32 = 40.0;
const PAGE_FRACTION: f32 = 0.9;
const SNAP: f32 = 0.5;
const MAX_MARGIN_FRACTION: f32 = 0.25;

/// Scroll container of the current page. Its direct children are the page blocks.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PageScroll {
    pub current: f32,
    pub target: f32,
}

/// Marks a home-page block as the destination of `#anchor` links.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionAnchor(pub SectionId);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub entity: Entity,
    pub top: f32,
    pub height: f32,
}

/// Logical-pixel geometry of the scrolled page, refreshed every frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct PageLayout {
    pub viewport: f32,
    pub content: f32,
    pub scroll: f32,
    pub blocks: Vec<Block>,
}

impl PageLayout {
    pub fn max_scroll(&self) -> f32 {
        (self.content - self.viewport).max(0.0)
    }

    pub fn block(&self, entity: Entity) -> Option<&Block> {
        self.blocks.iter().find(|b| b.entity == entity)
    }

    /// Top edge of a block relative to the top of the viewport.
    pub fn viewport_top(&self, entity: Entity) -> Option<f32> {
        self.block(entity).map(|b| b.top - self.scroll)
    }

    /// Whether the block overlaps the viewport shrunk by `margin` on top and bottom.
    /// The margin never takes more than a quarter of the viewport from each edge.
    pub fn intersects(&self, entity: Entity, margin: f32) -> bool {
        let Some(block) = self.block(entity) else { return false };
        let top = block.top - self.scroll;
        let bottom = top + block.height;
        let margin = margin.clamp(0.0, self.viewport * MAX_MARGIN_FRACTION);
        let (lo, hi) = (margin, self.viewport - margin);
        hi > lo && bottom > lo && top < hi
    }
}

/// Exponential approach that lands exactly on `target` once close enough.
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let diff = target - current;
    if diff.abs() < SNAP {
        return target;
    }
    current + diff * (1.0 - (-rate * dt).exp())
}

pub struct ScrollPlugin;

impl Plugin for ScrollPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PageLayout>()
            .configure_sets(Update, LayoutSet.in_set(PageSet))
            .add_systems(Update, (wheel_scroll, keyboard_scroll).in_set(InputSet))
            .add_systems(
                Update,
                (measure_page, resolve_scroll_actions, smooth_scroll).chain().in_set(LayoutSet),
            );
    }
}

fn logical_height(node: &ComputedNode) -> f32 {
    node.size().y * node.inverse_scale_factor()
}

pub fn measure_page(
    roots: Query<(&ComputedNode, Option<&Children>), With<PageScroll>>,
    blocks: Query<&ComputedNode>,
    mut layout: ResMut<PageLayout>,
) {
    let Ok((root, children)) = roots.single() else {
        if !layout.blocks.is_empty() {
            *layout = PageLayout::default();
        }
        return;
    };
    let viewport = logical_height(root);
    // Layout has not run yet for a freshly spawned page.
    if viewport <= 0.0 {
        return;
    }
    let mut top = 0.0;
    let mut measured = Vec::new();
    for &child in children.into_iter().flatten() {
        let Ok(node) = blocks.get(child) else { continue };
        let height = logical_height(node);
        measured.push(Block { entity: child, top, height });
        top += height;
    }
    layout.viewport = viewport;
    layout.content = top;
    layout.blocks = measured;
}

fn zoomable_viewport_hovered(viewports: &Query<(&Interaction, &SceneViewport)>, rigs: &Query<&OrbitRig>) -> bool {
    viewports.iter().any(|(interaction, viewport)| {
        *interaction != Interaction::None
            && rigs.get(viewport.camera).is_ok_and(|rig| rig.limits.zoom_enabled)
    })
}

fn wheel_scroll(
    mut wheel: EventReader<MouseWheel>,
    cfg: Option<Res<SiteConfig>>,
    viewports: Query<(&Interaction, &SceneViewport)>,
    rigs: Query<&OrbitRig>,
    mut pages: Query<&mut PageScroll>,
) {
    let line_px = cfg.map(|c| c.scroll.line_px).unwrap_or(48.0);
    let dy: f32 = wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y * line_px,
            MouseScrollUnit::Pixel => ev.y,
        })
        .sum();
    if dy == 0.0 || zoomable_viewport_hovered(&viewports, &rigs) {
        return;
    }
    for mut page in &mut pages {
        page.target -= dy;
    }
}

fn keyboard_scroll(keys: Res<ButtonInput<KeyCode>>, layout: Res<PageLayout>, mut pages: Query<&mut PageScroll>) {
    let page = layout.viewport * PAGE_FRACTION;
    let mut delta = 0.0;
    let mut jump = None;
    if keys.just_pressed(KeyCode::ArrowDown) {
        delta += ARROW_STEP;
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        delta -= ARROW_STEP;
    }
    if keys.just_pressed(KeyCode::PageDown) || keys.just_pressed(KeyCode::Space) {
        delta += page;
    }
    if keys.just_pressed(KeyCode::PageUp) {
        delta -= page;
    }
    if keys.just_pressed(KeyCode::Home) {
        jump = Some(0.0);
    }
    if keys.just_pressed(KeyCode::End) {
        jump = Some(layout.max_scroll());
    }
    if delta == 0.0 && jump.is_none() {
        return;
    }
    for mut scroll in &mut pages {
        scroll.target = jump.unwrap_or(scroll.target) + delta;
    }
}

/// `ScrollTo` moves the matching anchor to the top; unknown or unmounted anchors do nothing.
pub fn resolve_scroll_actions(
    mut actions: EventReader<ActionTriggered>,
    layout: Res<PageLayout>,
    anchors: Query<(Entity, &SectionAnchor)>,
    mut pages: Query<&mut PageScroll>,
) {
    for ActionTriggered(action) in actions.read() {
        let destination = match *action {
            SiteAction::ScrollTop => Some(0.0),
            SiteAction::ScrollTo(id) => {
                let top = anchors
                    .iter()
                    .find(|(_, anchor)| anchor.0 == id)
                    .and_then(|(entity, _)| layout.block(entity))
                    .map(|b| b.top);
                if top.is_none() {
                    debug!(target: "nav", "anchor #{} not on this page; ignoring", id.anchor());
                }
                top
            }
            _ => None,
        };
        let Some(y) = destination else { continue };
        for mut page in &mut pages {
            page.target = y;
        }
    }
}

pub fn smooth_scroll(
    time: Res<Time>,
    cfg: Option<Res<SiteConfig>>,
    mut layout: ResMut<PageLayout>,
    mut pages: Query<(&mut PageScroll, &mut ScrollPosition)>,
) {
    let rate = cfg.map(|c| c.scroll.smoothing).unwrap_or(9.0);
    let max = layout.max_scroll();
    for (mut page, mut position) in &mut pages {
        let target = page.target.clamp(0.0, max);
        if page.target != target {
            page.target = target;
        }
        if page.current != target {
            page.current = approach(page.current, target, rate, time.delta_secs());
        }
        if position.offset_y != page.current {
            position.offset_y = page.current;
        }
        layout.scroll = page.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(blocks: &[f32], viewport: f32) -> PageLayout {
        let mut top = 0.0;
        let blocks = blocks
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let b = Block { entity: Entity::from_raw(i as u32), top, height: *h };
                top += h;
                b
            })
            .collect();
        PageLayout { viewport, content: top, scroll: 0.0, blocks }
    }

    #[test]
    fn approach_converges_and_snaps() {
        let mut y = 0.0;
        for _ in 0..240 {
            y = approach(y, 1000.0, 9.0, 1.0 / 60.0);
        }
        assert_eq!(y, 1000.0);
        assert_eq!(approach(10.0, 10.3, 9.0, 0.016), 10.3);
    }

    #[test]
    fn intersection_respects_margin() {
        let mut l = layout(&[800.0, 600.0, 600.0], 800.0);
        let third = Entity::from_raw(2);
        assert!(!l.intersects(third, 100.0));
        l.scroll = 650.0; // third block top sits at 750, inside the viewport but within the margin
        assert!(!l.intersects(third, 100.0));
        l.scroll = 800.0;
        assert!(l.intersects(third, 100.0));
        assert_eq!(l.viewport_top(third), Some(600.0));
    }

    #[test]
    fn short_viewport_still_reveals() {
        let mut l = layout(&[150.0, 600.0], 160.0);
        let second = Entity::from_raw(1);
        assert!(!l.intersects(second, 100.0));
        l.scroll = 60.0; // second block top at 90, inside the 40..120 band
        assert!(l.intersects(second, 100.0));
    }

    #[test]
    fn max_scroll_never_negative() {
        assert_eq!(layout(&[100.0], 800.0).max_scroll(), 0.0);
        assert_eq!(layout(&[1000.0, 500.0], 800.0).max_scroll(), 700.0);
    }
}
