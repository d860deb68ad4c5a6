use bevy::prelude::*;

use super::{scene_viewport, section, PageContext};
use crate::core::content::home::{hero, CREATORS, TAGLINE};
use crate::core::content::SectionId;
use crate::rendering::palette;
use crate::rendering::scene::{SceneAssets, SceneSlot};
use crate::ui::actions::SiteAction;
use crate::ui::fade::Opacity;
use crate::ui::logo::{spawn_logo, LogoOptions, LogoSize, LogoVariant};
use crate::ui::reveal::{reveal_group, RevealFrom};
use crate::ui::scroll::{PageLayout, SectionAnchor};
use crate::ui::widgets::{TextRole, Ui};

pub const PARALLAX_PX: f32 = 200.0;

/// Hero content that sinks and fades while the hero scrolls away.
#[derive(Component)]
pub struct HeroParallax;

/// (downward offset, opacity) for `scroll` pixels into a hero `height` tall.
/// The offset spans the whole hero, the fade only its first half.
pub fn parallax(scroll: f32, height: f32) -> (f32, f32) {
    if height <= 0.0 {
        return (0.0, 1.0);
    }
    let progress = (scroll / height).clamp(0.0, 1.0);
    (progress * PARALLAX_PX, (1.0 - progress * 2.0).max(0.0))
}

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext, scenes: Option<&mut SceneAssets>) -> Entity {
    let (block, content) = section(ui, page, SectionId::Hero, palette::SURFACE_MUTED);
    ui.commands.entity(block).entry::<Node>().and_modify(|mut node| {
        node.min_height = Val::Vh(100.0);
        node.justify_content = JustifyContent::Center;
    });
    ui.commands.entity(content).insert((HeroParallax, Opacity(1.0))).entry::<Node>().and_modify(|mut node| {
        node.align_items = AlignItems::Center;
    });

    let mark = spawn_logo(
        ui,
        content,
        ctx.logos,
        LogoOptions { variant: LogoVariant::Light, size: LogoSize::Xl, show_text: true },
    );
    let title = ui.column(content, 4.0);
    ui.commands.entity(title).entry::<Node>().and_modify(|mut node| node.align_items = AlignItems::Center);
    ui.centered_text(title, hero::TITLE, TextRole::Display, palette::TEXT_PRIMARY);
    ui.centered_text(title, hero::TITLE_ACCENT, TextRole::Display, palette::hsl_pct(195.0, 70.0, 40.0));
    let tagline = ui.centered_text(content, TAGLINE, TextRole::Subheading, palette::TEXT_MUTED);
    let creators = ui.centered_text(content, CREATORS, TextRole::Body, palette::TEXT_MUTED);
    let viewport = scene_viewport(ui, content, scenes, &ctx.cfg.hero_scene, SceneSlot::Hero, ctx.cfg.seed);
    let hint = ui.link(content, format!("{} ↓", hero::HINT), SiteAction::ScrollTo(SectionId::Problem), palette::TEXT_MUTED);

    reveal_group(
        ui.commands,
        block,
        &[
            (mark, RevealFrom::Below),
            (title, RevealFrom::Below),
            (tagline, RevealFrom::Below),
            (creators, RevealFrom::Below),
            (viewport, RevealFrom::Below),
            (hint, RevealFrom::Below),
        ],
        &ctx.cfg.reveal,
    );
    block
}

pub fn hero_parallax(
    layout: Res<PageLayout>,
    heroes: Query<(Entity, &SectionAnchor)>,
    mut content: Query<(&mut Node, &mut Opacity), With<HeroParallax>>,
) {
    let Some(block) = heroes
        .iter()
        .find(|(_, anchor)| anchor.0 == SectionId::Hero)
        .and_then(|(entity, _)| layout.block(entity))
    else {
        return;
    };
    let (offset, alpha) = parallax(layout.scroll - block.top, block.height);
    for (mut node, mut opacity) in &mut content {
        let top = Val::Px(offset);
        if node.top != top {
            node.top = top;
        }
        if opacity.0 != alpha {
            opacity.0 = alpha;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_sinks_and_fades() {
        assert_eq!(parallax(0.0, 800.0), (0.0, 1.0));
        let (y, a) = parallax(200.0, 800.0);
        assert_eq!(y, 50.0);
        assert!((a - 0.5).abs() < 1e-6);
        assert_eq!(parallax(400.0, 800.0).1, 0.0);
        assert_eq!(parallax(5000.0, 800.0), (PARALLAX_PX, 0.0));
        assert_eq!(parallax(-30.0, 800.0), (0.0, 1.0));
    }
}
