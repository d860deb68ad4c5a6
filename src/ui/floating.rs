//! Decorative drops and leaves drifting behind the home page content.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::app::state::HomePhase;
use crate::core::config::SiteConfig;
use crate::core::system::system_order::PageSet;
use crate::rendering::palette;

const DRIFT_PX: f32 = 20.0;
const MOTE_ALPHA: f32 = 0.4;

/// One floating mote; positions are percentages of the window.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Mote {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub period: f32,
    pub delay: f32,
    pub is_leaf: bool,
}

impl Mote {
    pub fn random(index: usize, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(4.0..12.0),
            period: rng.gen_range(15.0..35.0),
            delay: rng.gen_range(0.0..10.0),
            is_leaf: index % 4 == 0,
        }
    }

    /// (width, height) in logical pixels.
    pub fn extent(&self) -> Vec2 {
        if self.is_leaf {
            Vec2::splat(self.size * 2.0)
        } else {
            Vec2::new(self.size, self.size * 1.5)
        }
    }

    /// Upward drift in pixels at time `t`; zero until the delay passes.
    pub fn drift(&self, t: f32) -> f32 {
        let local = t - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        let phase = (local / self.period).fract();
        (1.0 - (phase * TAU).cos()) * 0.5 * DRIFT_PX
    }
}

#[derive(Component)]
struct MoteLayer;

pub struct FloatingPlugin;

impl Plugin for FloatingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(HomePhase::Content), spawn_motes).add_systems(
            Update,
            drift_motes.in_set(PageSet).run_if(in_state(HomePhase::Content)),
        );
    }
}

fn spawn_motes(mut commands: Commands, cfg: Option<Res<SiteConfig>>) {
    let (count, seed) = cfg.map(|c| (c.floating_motes, c.seed)).unwrap_or((30, None));
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s.wrapping_add(0x4d4f_5445)),
        None => StdRng::from_entropy(),
    };
    let layer = commands
        .spawn((
            Name::new("floating-motes"),
            MoteLayer,
            StateScoped(HomePhase::Content),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                overflow: Overflow::clip(),
                ..default()
            },
            GlobalZIndex(10),
        ))
        .id();
    for i in 0..count {
        let mote = Mote::random(i, &mut rng);
        let extent = mote.extent();
        let (color, radius) = if mote.is_leaf {
            (palette::ACCENT_GREEN, BorderRadius::new(Val::Px(0.0), Val::Percent(100.0), Val::Px(0.0), Val::Percent(100.0)))
        } else {
            (palette::WATER_BLUE, BorderRadius::MAX)
        };
        commands.spawn((
            mote,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(mote.x),
                top: Val::Percent(mote.y),
                width: Val::Px(extent.x),
                height: Val::Px(extent.y),
                ..default()
            },
            BackgroundColor(color.with_alpha(MOTE_ALPHA)),
            radius,
            ChildOf(layer),
        ));
    }
    debug!(target: "ui", "spawned {count} floating motes");
}

fn drift_motes(time: Res<Time>, mut motes: Query<(&Mote, &mut Node)>) {
    let t = time.elapsed_secs();
    for (mote, mut node) in &mut motes {
        node.margin.top = Val::Px(-mote.drift(t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fourth_mote_is_a_leaf() {
        let mut rng = StdRng::seed_from_u64(3);
        let motes: Vec<Mote> = (0..30).map(|i| Mote::random(i, &mut rng)).collect();
        assert_eq!(motes.iter().filter(|m| m.is_leaf).count(), 8);
        for m in &motes {
            assert!((4.0..12.0).contains(&m.size));
            assert!((15.0..35.0).contains(&m.period));
            assert!((0.0..10.0).contains(&m.delay));
        }
    }

    #[test]
    fn drift_waits_for_delay_and_stays_bounded() {
        let mote = Mote { x: 0.0, y: 0.0, size: 6.0, period: 20.0, delay: 4.0, is_leaf: false };
        assert_eq!(mote.drift(3.9), 0.0);
        assert!((mote.drift(14.0) - DRIFT_PX).abs() < 1e-3);
        for i in 0..400 {
            let d = mote.drift(i as f32 * 0.25);
            assert!((0.0..=DRIFT_PX + 1e-4).contains(&d));
        }
    }
}
