//! Falling droplet / leaf particle pool.
//!
//! The pool is plain data advanced by [`ParticlePool::step`]; the Bevy side
//! ([`ParticleField`] + [`animate_particle_fields`]) only owns one pool per scene
//! and copies the resulting transforms onto instance entities.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

use super::composer::{SceneClock, SceneMember};

/// Particles falling below this height wrap back to [`CEILING_Y`].
pub const FLOOR_Y: f32 = -5.0;
pub const CEILING_Y: f32 = 10.0;
/// Horizontal spawn / re-spawn band is `[-HALF_WIDTH, HALF_WIDTH)`.
pub const HALF_WIDTH: f32 = 10.0;
pub const HALF_DEPTH: f32 = 5.0;
/// Velocities are expressed per reference frame at this rate.
pub const REFERENCE_FPS: f32 = 60.0;
const LEAF_DRIFT: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ParticleKind {
    #[default]
    Drops,
    Leaves,
    Mixed,
}

impl ParticleKind {
    /// `mixed` makes every third particle a leaf.
    pub fn is_leaf(self, index: usize) -> bool {
        match self {
            ParticleKind::Drops => false,
            ParticleKind::Leaves => true,
            ParticleKind::Mixed => index % 3 == 0,
        }
    }
    pub fn as_str(self) -> &'static str {
        match self {
            ParticleKind::Drops => "drops",
            ParticleKind::Leaves => "leaves",
            ParticleKind::Mixed => "mixed",
        }
    }
}

impl TryFrom<String> for ParticleKind {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "drops" => Ok(ParticleKind::Drops),
            "leaves" => Ok(ParticleKind::Leaves),
            "mixed" => Ok(ParticleKind::Mixed),
            other => Err(format!("unknown particle kind '{other}' (expected drops|leaves|mixed)")),
        }
    }
}

impl From<ParticleKind> for String {
    fn from(kind: ParticleKind) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    pub is_leaf: bool,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, is_leaf: bool) -> Self {
        Self {
            position: Vec3::new(
                rng.gen_range(-HALF_WIDTH..HALF_WIDTH),
                rng.gen_range(FLOOR_Y..CEILING_Y),
                rng.gen_range(-HALF_DEPTH..HALF_DEPTH),
            ),
            velocity: Vec3::new(
                rng.gen_range(-0.01..0.01),
                -0.02 - rng.gen_range(0.0..0.03),
                rng.gen_range(-0.005..0.005),
            ),
            rotation: rng.gen_range(0.0..TAU),
            rotation_speed: rng.gen_range(-0.01..0.01),
            scale: rng.gen_range(0.5..1.0),
            is_leaf,
        }
    }

    /// Drops spin about Y only; leaves tumble on all three axes.
    pub fn transform(&self) -> Transform {
        let r = self.rotation;
        let rotation = if self.is_leaf {
            Quat::from_euler(EulerRot::XYZ, r, r, r * 0.5)
        } else {
            Quat::from_rotation_y(r)
        };
        Transform {
            translation: self.position,
            rotation,
            scale: Vec3::splat(self.scale),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticlePool {
    kind: ParticleKind,
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new(count: usize, kind: ParticleKind, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|i| Particle::random(rng, kind.is_leaf(i)))
            .collect();
        Self { kind, particles }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }
    pub fn len(&self) -> usize {
        self.particles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle by `frame_scale` reference frames (1.0 == one 60 Hz frame).
    /// `elapsed` is the scene clock in seconds and drives the leaf drift.
    /// Returns how many particles wrapped this step.
    pub fn step(&mut self, frame_scale: f32, elapsed: f32, rng: &mut impl Rng) -> usize {
        let mut wrapped = 0;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.position += p.velocity * frame_scale;
            p.rotation += p.rotation_speed * frame_scale;
            if p.position.y < FLOOR_Y {
                p.position.y = CEILING_Y;
                p.position.x = rng.gen_range(-HALF_WIDTH..HALF_WIDTH);
                wrapped += 1;
            }
            if p.is_leaf {
                p.position.x += (elapsed + i as f32).sin() * LEAF_DRIFT * frame_scale;
            }
        }
        wrapped
    }
}

/// One pool per scene, with its own random stream so scenes never share state.
#[derive(Component)]
pub struct ParticleField {
    pub pool: ParticlePool,
    pub rng: StdRng,
    /// Instance entity for each pool slot, same order as the pool.
    pub instances: Vec<Entity>,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ParticleInstance {
    pub index: usize,
}

pub fn animate_particle_fields(
    time: Res<Time>,
    mut fields: Query<(&mut ParticleField, &SceneMember)>,
    clocks: Query<&SceneClock>,
    mut instances: Query<&mut Transform, With<ParticleInstance>>,
) {
    let frame_scale = time.delta_secs() * REFERENCE_FPS;
    for (mut field, member) in &mut fields {
        let elapsed = clocks.get(member.0).map(|c| c.elapsed).unwrap_or(0.0);
        let field = &mut *field;
        field.pool.step(frame_scale, elapsed, &mut field.rng);
        for (particle, entity) in field.pool.particles().iter().zip(&field.instances) {
            if let Ok(mut tf) = instances.get_mut(*entity) {
                *tf = particle.transform();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn mixed_kind_marks_every_third_as_leaf() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = ParticlePool::new(9, ParticleKind::Mixed, &mut rng);
        let leaves: Vec<usize> = pool
            .particles()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_leaf)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(leaves, vec![0, 3, 6]);
    }

    #[test]
    fn initial_ranges_hold() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = ParticlePool::new(500, ParticleKind::Drops, &mut rng);
        for p in pool.particles() {
            assert!((-HALF_WIDTH..HALF_WIDTH).contains(&p.position.x));
            assert!((FLOOR_Y..CEILING_Y).contains(&p.position.y));
            assert!(p.velocity.y <= -0.02 && p.velocity.y > -0.05);
            assert!((0.5..1.0).contains(&p.scale));
        }
    }

    #[test]
    fn drops_spin_about_y_only() {
        let p = Particle {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            rotation: 1.0,
            rotation_speed: 0.0,
            scale: 0.75,
            is_leaf: false,
        };
        let tf = p.transform();
        let (x, y, z) = tf.rotation.to_euler(EulerRot::XYZ);
        assert!(x.abs() < 1e-5 && z.abs() < 1e-5);
        assert!((y - 1.0).abs() < 1e-5);
        assert_eq!(tf.scale, Vec3::splat(0.75));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(ParticleKind::try_from("Leaves".to_string()), Ok(ParticleKind::Leaves));
        assert!(ParticleKind::try_from("snow".to_string()).is_err());
    }
}
