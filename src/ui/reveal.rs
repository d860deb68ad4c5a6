//! One-shot enter animations for page sections.
//!
//! A `RevealObserver` sits on a top-level page block. The first frame the block
//! overlaps the inset viewport, every `Reveal` below it starts playing and the
//! observer is removed, so a section never animates twice.

use bevy::prelude::*;

use super::fade::Opacity;
use super::scroll::PageLayout;
use crate::core::config::{RevealConfig, SiteConfig};
use crate::core::system::system_order::{LayoutSet, PageSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    Armed,
    Playing { elapsed: f32 },
    Settled,
}

/// Where an element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealFrom {
    Below,
    Left,
    Right,
}

impl RevealFrom {
    fn offset(self) -> Vec2 {
        match self {
            RevealFrom::Below => Vec2::new(0.0, 30.0),
            RevealFrom::Left => Vec2::new(-50.0, 0.0),
            RevealFrom::Right => Vec2::new(50.0, 0.0),
        }
    }
}

/// Entry animation of one element.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub delay: f32,
    pub duration: f32,
    pub offset: Vec2,
    state: RevealState,
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

impl Reveal {
    pub fn new(delay: f32, duration: f32, from: RevealFrom) -> Self {
        Self { delay, duration, offset: from.offset(), state: RevealState::Armed }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Start playing; later calls do nothing.
    pub fn trigger(&mut self) {
        if self.state == RevealState::Armed {
            self.state = RevealState::Playing { elapsed: 0.0 };
        }
    }

    pub fn settle(&mut self) {
        self.state = RevealState::Settled;
    }

    pub fn step(&mut self, dt: f32) {
        if let RevealState::Playing { elapsed } = self.state {
            let elapsed = elapsed + dt;
            self.state = if elapsed >= self.delay + self.duration {
                RevealState::Settled
            } else {
                RevealState::Playing { elapsed }
            };
        }
    }

    /// Eased completion in [0, 1].
    pub fn progress(&self) -> f32 {
        match self.state {
            RevealState::Armed => 0.0,
            RevealState::Settled => 1.0,
            RevealState::Playing { elapsed } => {
                let t = ((elapsed - self.delay) / self.duration.max(f32::EPSILON)).clamp(0.0, 1.0);
                ease_out_cubic(t)
            }
        }
    }

    /// (offset from rest, opacity) for the current state.
    pub fn sample(&self) -> (Vec2, f32) {
        let p = self.progress();
        (self.offset * (1.0 - p), p)
    }
}

/// Watches a page block until it first becomes visible.
#[derive(Component, Debug, Clone, Copy)]
pub struct RevealObserver {
    pub margin: f32,
}

/// Staggered entry animations for a section's children.
pub fn reveal_group(commands: &mut Commands, section: Entity, items: &[(Entity, RevealFrom)], cfg: &RevealConfig) {
    commands.entity(section).insert(RevealObserver { margin: cfg.margin });
    for (i, &(item, from)) in items.iter().enumerate() {
        let mut reveal = Reveal::new(i as f32 * cfg.stagger, cfg.duration, from);
        if !cfg.enabled {
            reveal.settle();
        }
        let (offset, alpha) = reveal.sample();
        commands.entity(item).insert((reveal, Opacity(alpha)));
        if offset != Vec2::ZERO {
            commands.entity(item).entry::<Node>().and_modify(move |mut node| {
                node.left = Val::Px(offset.x);
                node.top = Val::Px(offset.y);
            });
        }
    }
}

pub struct RevealPlugin;

impl Plugin for RevealPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (observe_sections, play_reveals).chain().in_set(PageSet).after(LayoutSet),
        );
    }
}

fn trigger_descendants(entity: Entity, children: &Query<&Children>, reveals: &mut Query<&mut Reveal>) -> usize {
    let mut fired = 0;
    if let Ok(mut reveal) = reveals.get_mut(entity) {
        reveal.trigger();
        fired += 1;
    }
    if let Ok(kids) = children.get(entity) {
        for &child in kids {
            fired += trigger_descendants(child, children, reveals);
        }
    }
    fired
}

pub fn observe_sections(
    mut commands: Commands,
    layout: Res<PageLayout>,
    observers: Query<(Entity, &RevealObserver, Option<&Name>)>,
    children: Query<&Children>,
    mut reveals: Query<&mut Reveal>,
) {
    for (entity, observer, name) in &observers {
        if !layout.intersects(entity, observer.margin) {
            continue;
        }
        let fired = trigger_descendants(entity, &children, &mut reveals);
        debug!(
            target: "reveal",
            "{} in view; {fired} element(s) revealed",
            name.map(Name::as_str).unwrap_or("section")
        );
        commands.entity(entity).remove::<RevealObserver>();
    }
}

pub fn play_reveals(
    time: Res<Time>,
    cfg: Option<Res<SiteConfig>>,
    mut items: Query<(&mut Reveal, &mut Opacity, &mut Node)>,
) {
    let enabled = cfg.map(|c| c.reveal.enabled).unwrap_or(true);
    for (mut reveal, mut opacity, mut node) in &mut items {
        if !matches!(reveal.state(), RevealState::Playing { .. }) {
            continue;
        }
        if enabled {
            reveal.step(time.delta_secs());
        } else {
            reveal.settle();
        }
        let (offset, alpha) = reveal.sample();
        opacity.0 = alpha;
        node.left = Val::Px(offset.x);
        node.top = Val::Px(offset.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_plays_once_with_delay() {
        let mut r = Reveal::new(0.3, 0.8, RevealFrom::Below);
        assert_eq!(r.sample(), (Vec2::new(0.0, 30.0), 0.0));
        r.step(1.0);
        assert_eq!(r.state(), RevealState::Armed, "does not play before triggered");
        r.trigger();
        r.step(0.2);
        assert_eq!(r.progress(), 0.0, "still inside the stagger delay");
        r.step(0.5);
        assert!(r.progress() > 0.0 && r.progress() < 1.0);
        r.step(1.0);
        assert_eq!(r.state(), RevealState::Settled);
        r.trigger();
        assert_eq!(r.state(), RevealState::Settled, "never re-armed");
        assert_eq!(r.sample(), (Vec2::ZERO, 1.0));
    }
}
