// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Procedural bottle-filter geometry.
//!
//! Builders return [`Blueprint`]s: flat lists of primitives (shape, finish,
//! local transform). Spawning them into the world is a separate step so the
//! layout can be asserted without a renderer.

use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::math::primitives::{Circle, ConicalFrustum, Cuboid, Sphere, Torus};
use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use rand::Rng;
use smallvec::SmallVec;

pub const BOTTLE_HEIGHT: f32 = 2.8;
pub const BOTTLE_RADIUS: f32 = 0.45;
pub const NECK_HEIGHT: f32 = 0.6;
pub const NECK_RADIUS: f32 = 0.15;
pub const PEBBLE_COUNT: usize = 12;
pub const GRANULE_COUNT: usize = 20;
const GRANULE_SIZE: f32 = 0.04;
const JOINT_MAJOR_RADIUS: f32 = 0.48;
const JOINT_MINOR_RADIUS: f32 = 0.08;

/// Which bottle of the stack a segment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    /// Top bottle: fabric, coarse sand and pebbles.
    PreFilter,
    /// Middle bottle: granular activated carbon.
    Carbon,
    /// Bottom bottle: filtered water.
    Collection,
}

impl SegmentRole {
    pub const ALL: [SegmentRole; 3] = [SegmentRole::PreFilter, SegmentRole::Carbon, SegmentRole::Collection];

    /// The top bottle is cut below its neck; the others keep theirs.
    pub fn has_neck(self) -> bool {
        !matches!(self, SegmentRole::PreFilter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Frustum { radius_top: f32, radius_bottom: f32, height: f32 },
    Sphere { radius: f32 },
    Cube { size: f32 },
    Disc { radius: f32 },
    Torus { major_radius: f32, minor_radius: f32 },
}

/// Surface look of a primitive. `Pebble` carries its grey lightness (0..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Finish {
    BottlePlastic,
    NeckPlastic,
    Fabric,
    CoarseSand,
    PebbleBed,
    Pebble { lightness: f32 },
    ActivatedCarbon,
    CharcoalGranule,
    CleanWater,
    WaterSurface,
    VesselWall,
    VesselBase,
    VesselWater,
    Droplet,
    Tape,
}

impl Finish {
    pub fn material(&self) -> StandardMaterial {
        let translucent = |base: Color, roughness: f32, transmission: f32| StandardMaterial {
            base_color: base,
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: roughness,
            specular_transmission: transmission,
            thickness: 0.5,
            ..default()
        };
        let matte = |hex: &str, roughness: f32, metallic: f32| StandardMaterial {
            base_color: hex_color(hex),
            perceptual_roughness: roughness,
            metallic,
            ..default()
        };
        match *self {
            Finish::BottlePlastic => StandardMaterial {
                double_sided: true,
                cull_mode: None,
                ..translucent(hex_color("#e8f4f8").with_alpha(0.4), 0.1, 0.6)
            },
            Finish::NeckPlastic => translucent(hex_color("#e8f4f8").with_alpha(0.5), 0.1, 0.0),
            Finish::Fabric => matte("#f5f5dc", 0.9, 0.0),
            Finish::CoarseSand => matte("#c2b280", 0.95, 0.0),
            Finish::PebbleBed => matte("#808080", 0.8, 0.0),
            Finish::Pebble { lightness } => StandardMaterial {
                base_color: Color::hsl(0.0, 0.0, lightness),
                perceptual_roughness: 0.8,
                ..default()
            },
            Finish::ActivatedCarbon => matte("#1a1a1a", 0.9, 0.1),
            Finish::CharcoalGranule => matte("#0a0a0a", 0.7, 0.2),
            Finish::CleanWater => translucent(hex_color("#60b0e0").with_alpha(0.6), 0.1, 0.8),
            Finish::WaterSurface => StandardMaterial {
                double_sided: true,
                cull_mode: None,
                ..translucent(hex_color("#80c8f0").with_alpha(0.4), 0.0, 0.0)
            },
            Finish::VesselWall => StandardMaterial {
                double_sided: true,
                cull_mode: None,
                ..matte("#4a7c59", 0.6, 0.0)
            },
            Finish::VesselBase => matte("#3d6b4a", 0.6, 0.0),
            Finish::VesselWater => translucent(hex_color("#60b0e0").with_alpha(0.7), 0.1, 0.0),
            Finish::Droplet => translucent(hex_color("#60b0e0").with_alpha(0.8), 0.0, 0.9),
            Finish::Tape => matte("#666666", 0.5, 0.3),
        }
    }
}

fn hex_color(hex: &str) -> Color {
    Srgba::hex(hex).map(Color::from).unwrap_or(Color::WHITE)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub finish: Finish,
    pub transform: Transform,
}

impl Primitive {
    fn at(shape: Shape, finish: Finish, y: f32) -> Self {
        Self { shape, finish, transform: Transform::from_xyz(0.0, y, 0.0) }
    }
}

pub type Blueprint = SmallVec<[Primitive; 24]>;

fn frustum(radius_top: f32, radius_bottom: f32, height: f32) -> Shape {
    Shape::Frustum { radius_top, radius_bottom, height }
}

/// Horizontal disc facing +Y.
fn disc(radius: f32, finish: Finish, y: f32) -> Primitive {
    Primitive {
        shape: Shape::Disc { radius },
        finish,
        transform: Transform::from_xyz(0.0, y, 0.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
    }
}

/// Build one bottle segment in its own local frame (base at y = 0).
pub fn build_segment(role: SegmentRole, rng: &mut impl Rng) -> Blueprint {
    let h = BOTTLE_HEIGHT;
    let r = BOTTLE_RADIUS;
    let mut parts = Blueprint::new();
    parts.push(Primitive::at(frustum(r, r * 0.9, h), Finish::BottlePlastic, h / 2.0));
    if role.has_neck() {
        parts.push(Primitive::at(
            frustum(NECK_RADIUS, NECK_RADIUS * 1.2, NECK_HEIGHT),
            Finish::NeckPlastic,
            h + NECK_HEIGHT / 2.0,
        ));
    }
    match role {
        SegmentRole::PreFilter => {
            parts.push(Primitive::at(frustum(r * 0.95, r * 0.95, 0.15), Finish::Fabric, h - 0.1));
            parts.push(Primitive::at(frustum(r * 0.92, r * 0.88, 0.8), Finish::CoarseSand, h - 0.6));
            let bed_y = h - 1.4;
            parts.push(Primitive::at(frustum(r * 0.88, r * 0.85, 0.7), Finish::PebbleBed, bed_y));
            for i in 0..PEBBLE_COUNT {
                let angle = i as f32 / PEBBLE_COUNT as f32 * TAU;
                let ring = 0.2 + rng.gen_range(0.0..0.15);
                let y = bed_y + (rng.gen::<f32>() - 0.5) * 0.3;
                let radius = 0.06 + rng.gen_range(0.0..0.04);
                let lightness = 0.4 + rng.gen_range(0.0..0.3);
                parts.push(Primitive {
                    shape: Shape::Sphere { radius },
                    finish: Finish::Pebble { lightness },
                    transform: Transform::from_xyz(angle.cos() * ring, y, angle.sin() * ring),
                });
            }
        }
        SegmentRole::Carbon => {
            parts.push(Primitive::at(frustum(r * 0.9, r * 0.85, h * 0.8), Finish::ActivatedCarbon, h / 2.0));
            for i in 0..GRANULE_COUNT {
                let angle = i as f32 / GRANULE_COUNT as f32 * TAU;
                let ring = rng.gen_range(0.0..0.35);
                let y = h * 0.7 + rng.gen_range(0.0..0.3);
                parts.push(Primitive {
                    shape: Shape::Cube { size: GRANULE_SIZE },
                    finish: Finish::CharcoalGranule,
                    transform: Transform::from_xyz(angle.cos() * ring, y, angle.sin() * ring),
                });
            }
        }
        SegmentRole::Collection => {
            parts.push(Primitive::at(frustum(r * 0.88, r * 0.85, 1.4), Finish::CleanWater, 0.8));
            parts.push(disc(r * 0.88, Finish::WaterSurface, 1.5));
        }
    }
    parts
}

/// Open cup the bottom bottle drains into.
pub fn collection_vessel() -> Blueprint {
    let mut parts = Blueprint::new();
    parts.push(Primitive::at(frustum(0.6, 0.5, 0.8), Finish::VesselWall, 0.4));
    parts.push(disc(0.5, Finish::VesselBase, 0.0));
    parts.push(Primitive::at(frustum(0.55, 0.48, 0.4), Finish::VesselWater, 0.25));
    parts
}

/// Tape ring sealing two bottles together at height `y`.
pub fn tape_joint(y: f32) -> Primitive {
    Primitive {
        shape: Shape::Torus { major_radius: JOINT_MAJOR_RADIUS, minor_radius: JOINT_MINOR_RADIUS },
        finish: Finish::Tape,
        transform: Transform::from_xyz(0.0, y, 0.0),
    }
}

/// Placement of each bottle inside the scene group; upper two hang neck-down.
pub fn segment_placement(role: SegmentRole) -> Transform {
    match role {
        SegmentRole::PreFilter => Transform::from_xyz(0.0, 6.0, 0.0).with_rotation(Quat::from_rotation_x(PI)),
        SegmentRole::Carbon => Transform::from_xyz(0.0, 3.0, 0.0).with_rotation(Quat::from_rotation_x(PI)),
        SegmentRole::Collection => Transform::IDENTITY,
    }
}

/// Mesh/material cache so the two scenes (and repeated primitives) share GPU assets.
#[derive(Resource, Default)]
pub struct FilterAssetCache {
    meshes: HashMap<ShapeKey, Handle<Mesh>>,
    materials: HashMap<FinishKey, Handle<StandardMaterial>>,
}

#[derive(Hash, PartialEq, Eq, Clone, Copy)]
struct ShapeKey([u32; 4]);

#[derive(Hash, PartialEq, Eq, Clone, Copy)]
struct FinishKey(u8, u32);

impl FilterAssetCache {
    pub fn mesh(&mut self, shape: Shape, meshes: &mut Assets<Mesh>) -> (Handle<Mesh>, Vec3) {
        // Spheres and cubes share a unit mesh and carry their size in the scale.
        let (key, scale) = match shape {
            Shape::Sphere { radius } => (ShapeKey([0, 0, 0, 0]), Vec3::splat(radius)),
            Shape::Cube { size } => (ShapeKey([1, 0, 0, 0]), Vec3::splat(size)),
            Shape::Frustum { radius_top, radius_bottom, height } => (
                ShapeKey([2, radius_top.to_bits(), radius_bottom.to_bits(), height.to_bits()]),
                Vec3::ONE,
            ),
            Shape::Disc { radius } => (ShapeKey([3, radius.to_bits(), 0, 0]), Vec3::ONE),
            Shape::Torus { major_radius, minor_radius } => {
                (ShapeKey([4, major_radius.to_bits(), minor_radius.to_bits(), 0]), Vec3::ONE)
            }
        };
        let handle = self
            .meshes
            .entry(key)
            .or_insert_with(|| {
                let mesh = match shape {
                    Shape::Sphere { .. } => Mesh::from(Sphere::new(1.0)),
                    Shape::Cube { .. } => Mesh::from(Cuboid::from_length(1.0)),
                    Shape::Frustum { radius_top, radius_bottom, height } => {
                        Mesh::from(ConicalFrustum { radius_top, radius_bottom, height })
                    }
                    Shape::Disc { radius } => Mesh::from(Circle::new(radius)),
                    Shape::Torus { major_radius, minor_radius } => {
                        Mesh::from(Torus { minor_radius, major_radius })
                    }
                };
                meshes.add(mesh)
            })
            .clone();
        (handle, scale)
    }

    pub fn material(&mut self, finish: Finish, materials: &mut Assets<StandardMaterial>) -> Handle<StandardMaterial> {
        let key = match finish {
            // Quantize pebble greys so a handful of materials cover every pebble.
            Finish::Pebble { lightness } => FinishKey(0, (lightness * 20.0).round() as u32),
            other => FinishKey(finish_ordinal(other), 0),
        };
        self.materials
            .entry(key)
            .or_insert_with(|| materials.add(finish.material()))
            .clone()
    }
}

fn finish_ordinal(finish: Finish) -> u8 {
    match finish {
        Finish::Pebble { .. } => 0,
        Finish::BottlePlastic => 1,
        Finish::NeckPlastic => 2,
        Finish::Fabric => 3,
        Finish::CoarseSand => 4,
        Finish::PebbleBed => 5,
        Finish::ActivatedCarbon => 6,
        Finish::CharcoalGranule => 7,
        Finish::CleanWater => 8,
        Finish::WaterSurface => 9,
        Finish::VesselWall => 10,
        Finish::VesselBase => 11,
        Finish::VesselWater => 12,
        Finish::Droplet => 13,
        Finish::Tape => 14,
    }
}

/// Spawn every primitive of `blueprint` as a child of `parent` on `layers`.
pub fn spawn_blueprint(
    commands: &mut Commands,
    parent: Entity,
    blueprint: &[Primitive],
    layers: &RenderLayers,
    cache: &mut FilterAssetCache,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    for prim in blueprint {
        let (mesh, scale) = cache.mesh(prim.shape, meshes);
        let material = cache.material(prim.finish, materials);
        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            prim.transform.with_scale(prim.transform.scale * scale),
            layers.clone(),
            ChildOf(parent),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn count(parts: &[Primitive], pred: impl Fn(&Finish) -> bool) -> usize {
        parts.iter().filter(|p| pred(&p.finish)).count()
    }

    #[test]
    fn prefilter_has_twelve_pebbles_and_no_neck() {
        let mut rng = StdRng::seed_from_u64(3);
        let parts = build_segment(SegmentRole::PreFilter, &mut rng);
        assert_eq!(count(&parts, |f| matches!(f, Finish::Pebble { .. })), PEBBLE_COUNT);
        assert_eq!(count(&parts, |f| *f == Finish::NeckPlastic), 0);
        assert_eq!(count(&parts, |f| *f == Finish::Fabric), 1);
    }

    #[test]
    fn carbon_has_twenty_granules_and_a_neck() {
        let mut rng = StdRng::seed_from_u64(4);
        let parts = build_segment(SegmentRole::Carbon, &mut rng);
        assert_eq!(count(&parts, |f| *f == Finish::CharcoalGranule), GRANULE_COUNT);
        assert_eq!(count(&parts, |f| *f == Finish::NeckPlastic), 1);
    }

    #[test]
    fn pebbles_stay_inside_the_bottle() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let parts = build_segment(SegmentRole::PreFilter, &mut rng);
            for p in parts.iter().filter(|p| matches!(p.finish, Finish::Pebble { .. })) {
                let t = p.transform.translation;
                assert!(Vec2::new(t.x, t.z).length() < BOTTLE_RADIUS);
            }
        }
    }

    #[test]
    fn collection_holds_water_and_surface() {
        let mut rng = StdRng::seed_from_u64(6);
        let parts = build_segment(SegmentRole::Collection, &mut rng);
        assert_eq!(count(&parts, |f| *f == Finish::CleanWater), 1);
        assert_eq!(count(&parts, |f| *f == Finish::WaterSurface), 1);
        assert_eq!(collection_vessel().len(), 3);
    }
}
