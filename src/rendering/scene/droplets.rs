use bevy::prelude::*;
use rand::Rng;

use super::composer::{SceneClock, SceneMember};

pub const DROPLET_COUNT: usize = 8;
pub const DROPLET_RADIUS: f32 = 0.04;
const CYCLE: f32 = 8.0;
const TOP: f32 = 10.0;
const STAGGER: f32 = 0.3;

/// A single water drop looping down through the bottle stack.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WaterDroplet {
    pub speed: f32,
    pub delay: f32,
}

impl WaterDroplet {
    pub fn random(index: usize, rng: &mut impl Rng) -> Self {
        Self {
            speed: 0.5 + rng.gen_range(0.0..0.5),
            delay: index as f32 * STAGGER,
        }
    }

    /// Height and uniform scale at scene time `t`.
    pub fn sample(&self, t: f32) -> (f32, f32) {
        let phase = ((t + self.delay) * self.speed).rem_euclid(CYCLE) - CYCLE / 2.0;
        (TOP - phase, (phase * 0.5).sin() * 0.3 + 0.7)
    }
}

/// Horizontal jitter of a droplet around the stack axis.
pub fn droplet_offset(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(rng.gen_range(-0.15..0.15), rng.gen_range(-0.15..0.15))
}

pub fn animate_droplets(
    clocks: Query<&SceneClock>,
    mut droplets: Query<(&WaterDroplet, &SceneMember, &mut Transform)>,
) {
    for (droplet, member, mut tf) in &mut droplets {
        let Ok(clock) = clocks.get(member.0) else { continue };
        let (y, scale) = droplet.sample(clock.elapsed);
        tf.translation.y = y;
        // Droplets share the unit sphere mesh.
        tf.scale = Vec3::splat(scale * DROPLET_RADIUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn droplet_loops_within_band() {
        let d = WaterDroplet { speed: 0.75, delay: 0.6 };
        for step in 0..400 {
            let (y, scale) = d.sample(step as f32 * 0.1);
            assert!((TOP - CYCLE / 2.0..=TOP + CYCLE / 2.0).contains(&y));
            assert!((0.4..=1.0).contains(&scale));
        }
    }

    #[test]
    fn delay_staggers_start() {
        let a = WaterDroplet { speed: 1.0, delay: 0.0 };
        let b = WaterDroplet { speed: 1.0, delay: STAGGER };
        assert_ne!(a.sample(0.0).0, b.sample(0.0).0);
    }
}
