// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Assembles one complete filter scene: lights, the three-bottle stack, the
//! collection vessel, falling droplets and the particle pool, filmed by its own
//! camera into an off-screen image.

use bevy::ecs::system::SystemParam;
use bevy::math::primitives::{Ellipse, Sphere};
use bevy::prelude::*;
use bevy::render::camera::{ClearColorConfig, RenderTarget};
use bevy::render::view::RenderLayers;
use rand::{rngs::StdRng, SeedableRng};

use super::droplets::{droplet_offset, WaterDroplet, DROPLET_COUNT};
use super::geometry::{
    build_segment, collection_vessel, segment_placement, spawn_blueprint, tape_joint, Finish,
    FilterAssetCache, SegmentRole, Shape,
};
use super::particles::{ParticleField, ParticleInstance, ParticlePool};
use super::viewport::{create_render_target, orbit_rig_for};
use crate::core::config::SceneConfig;

const GROUP_OFFSET_Y: f32 = -2.0;
const VESSEL_Y: f32 = -1.5;
const JOINT_HEIGHTS: [f32; 2] = [5.8, 2.8];
const SWAY_RATE: f32 = 0.3;
pub const MAX_SWAY: f32 = 0.3;
/// Scenes are spread along X so their worlds never overlap.
const SLOT_SPACING: f32 = 200.0;

/// Which page slot a scene fills; also selects its render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneSlot {
    Hero,
    HowItWorks,
}

impl SceneSlot {
    pub fn layer(self) -> usize {
        match self {
            SceneSlot::Hero => 1,
            SceneSlot::HowItWorks => 2,
        }
    }
    fn origin(self) -> Vec3 {
        Vec3::new(self.layer() as f32 * SLOT_SPACING, 0.0, 0.0)
    }
    pub fn label(self) -> &'static str {
        match self {
            SceneSlot::Hero => "hero",
            SceneSlot::HowItWorks => "how-it-works",
        }
    }
}

/// Root of a composed scene.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FilterScene {
    pub slot: SceneSlot,
    pub auto_rotate: bool,
}

/// Private per-scene clock; two scenes never share time.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneClock {
    pub elapsed: f32,
}

/// Back-reference from an animated scene part to its scene root.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneMember(pub Entity);

/// Group the bottle stack hangs in; yaws gently when `auto_rotate` is on.
#[derive(Component)]
pub struct SwayGroup;

/// Slow bob and tilt applied above the sway group.
#[derive(Component, Debug, Clone, Copy)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.2,
            float_intensity: 0.3,
        }
    }
}

impl FloatMotion {
    pub fn sample(&self, t: f32) -> Transform {
        let phase = t / 4.0 * self.speed;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            phase.cos() / 8.0 * self.rotation_intensity,
            phase.sin() / 8.0 * self.rotation_intensity,
            phase.sin() / 20.0 * self.rotation_intensity,
        );
        Transform::from_xyz(0.0, phase.sin() / 10.0 * self.float_intensity, 0.0).with_rotation(rotation)
    }
}

/// Image-based lighting stand-in: tints the ambient term and adds a soft fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentPreset {
    Sunset,
}

impl EnvironmentPreset {
    pub fn ambient(self) -> AmbientLight {
        match self {
            EnvironmentPreset::Sunset => AmbientLight {
                color: Color::srgb(1.0, 0.86, 0.72),
                brightness: 450.0,
                ..default()
            },
        }
    }
    fn fill(self) -> (Color, f32, Vec3) {
        match self {
            EnvironmentPreset::Sunset => (Color::srgb(1.0, 0.62, 0.38), 900.0, Vec3::new(-6.0, 1.5, 4.0)),
        }
    }
}

/// Preset shared by every composed scene.
pub const SCENE_PRESET: EnvironmentPreset = EnvironmentPreset::Sunset;

pub fn sway_yaw(t: f32) -> f32 {
    (t * SWAY_RATE).sin() * MAX_SWAY
}

#[derive(SystemParam)]
pub struct SceneAssets<'w> {
    pub meshes: ResMut<'w, Assets<Mesh>>,
    pub materials: ResMut<'w, Assets<StandardMaterial>>,
    pub images: ResMut<'w, Assets<Image>>,
    pub cache: ResMut<'w, FilterAssetCache>,
}

/// Entities created for one composed scene.
#[derive(Debug, Clone)]
pub struct ComposedScene {
    pub root: Entity,
    pub camera: Entity,
    pub image: Handle<Image>,
}

/// Compose a scene in `slot`. Despawning `root` tears the whole scene down.
pub fn spawn_filter_scene(
    commands: &mut Commands,
    assets: &mut SceneAssets,
    cfg: &SceneConfig,
    slot: SceneSlot,
    seed: Option<u64>,
) -> ComposedScene {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s ^ slot.layer() as u64),
        None => StdRng::from_entropy(),
    };
    let layers = RenderLayers::layer(slot.layer());
    let preset = SCENE_PRESET;
    let root = commands
        .spawn((
            Name::new(format!("filter-scene:{}", slot.label())),
            FilterScene { slot, auto_rotate: cfg.auto_rotate },
            SceneClock::default(),
            Transform::from_translation(slot.origin()),
            Visibility::default(),
        ))
        .id();

    // Lights. The ambient term is global and set once by the plugin.
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        layers.clone(),
        ChildOf(root),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 1_800.0,
            ..default()
        },
        Transform::from_xyz(-5.0, 5.0, -5.0).looking_at(Vec3::ZERO, Vec3::Y),
        layers.clone(),
        ChildOf(root),
    ));
    let (fill_color, fill_lux, fill_from) = preset.fill();
    commands.spawn((
        DirectionalLight {
            color: fill_color,
            illuminance: fill_lux,
            ..default()
        },
        Transform::from_translation(fill_from).looking_at(Vec3::ZERO, Vec3::Y),
        layers.clone(),
        ChildOf(root),
    ));
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0x60, 0xb0, 0xe0),
            intensity: 80_000.0,
            range: 15.0,
            ..default()
        },
        Transform::from_xyz(0.0, 5.0, 0.0),
        layers.clone(),
        ChildOf(root),
    ));

    // Bottle stack.
    let float_node = commands
        .spawn((
            FloatMotion::default(),
            SceneMember(root),
            Transform::default(),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();
    let group = commands
        .spawn((
            SwayGroup,
            SceneMember(root),
            Transform::from_xyz(0.0, GROUP_OFFSET_Y, 0.0),
            Visibility::default(),
            ChildOf(float_node),
        ))
        .id();
    for role in SegmentRole::ALL {
        let segment = commands
            .spawn((segment_placement(role), Visibility::default(), ChildOf(group)))
            .id();
        let blueprint = build_segment(role, &mut rng);
        spawn_blueprint(
            commands,
            segment,
            &blueprint,
            &layers,
            &mut assets.cache,
            &mut assets.meshes,
            &mut assets.materials,
        );
    }
    let vessel = commands
        .spawn((Transform::from_xyz(0.0, VESSEL_Y, 0.0), Visibility::default(), ChildOf(group)))
        .id();
    spawn_blueprint(
        commands,
        vessel,
        &collection_vessel(),
        &layers,
        &mut assets.cache,
        &mut assets.meshes,
        &mut assets.materials,
    );
    let joints: Vec<_> = JOINT_HEIGHTS.iter().map(|&y| tape_joint(y)).collect();
    spawn_blueprint(
        commands,
        group,
        &joints,
        &layers,
        &mut assets.cache,
        &mut assets.meshes,
        &mut assets.materials,
    );

    // Droplets.
    let (droplet_mesh, _) = assets.cache.mesh(Shape::Sphere { radius: 1.0 }, &mut assets.meshes);
    let droplet_material = assets.cache.material(Finish::Droplet, &mut assets.materials);
    for i in 0..DROPLET_COUNT {
        let droplet = WaterDroplet::random(i, &mut rng);
        let offset = droplet_offset(&mut rng);
        commands.spawn((
            droplet,
            SceneMember(root),
            Mesh3d(droplet_mesh.clone()),
            MeshMaterial3d(droplet_material.clone()),
            Transform::from_xyz(offset.x, droplet.sample(0.0).0, offset.y),
            layers.clone(),
            ChildOf(group),
        ));
    }

    // Particle pool.
    let pool = ParticlePool::new(cfg.particles.count, cfg.particles.kind, &mut rng);
    let drop_mesh = assets.meshes.add(Sphere::new(0.05));
    let leaf_mesh = assets.meshes.add(Ellipse::new(0.1, 0.05));
    let particle_material = |base: Color| StandardMaterial {
        base_color: base.with_alpha(0.6),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    };
    let drop_material = assets.materials.add(particle_material(Color::srgb_u8(0x60, 0xa5, 0xfa)));
    let leaf_material = assets.materials.add(particle_material(Color::srgb_u8(0x4a, 0xde, 0x80)));
    let field = commands
        .spawn((
            Name::new("particle-field"),
            SceneMember(root),
            Transform::default(),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();
    let instances = pool
        .particles()
        .iter()
        .enumerate()
        .map(|(index, particle)| {
            let (mesh, material) = if particle.is_leaf {
                (leaf_mesh.clone(), leaf_material.clone())
            } else {
                (drop_mesh.clone(), drop_material.clone())
            };
            commands
                .spawn((
                    ParticleInstance { index },
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    particle.transform(),
                    layers.clone(),
                    ChildOf(field),
                ))
                .id()
        })
        .collect();
    commands.entity(field).insert(ParticleField {
        pool,
        rng: StdRng::from_rng(&mut rng).unwrap_or_else(|_| StdRng::seed_from_u64(slot.layer() as u64)),
        instances,
    });

    // Camera.
    let image = create_render_target(&mut assets.images, cfg.viewport);
    let rig = orbit_rig_for(cfg, Vec3::ZERO);
    let camera = commands
        .spawn((
            Camera3d::default(),
            Camera {
                order: -(slot.layer() as isize),
                target: RenderTarget::Image(image.clone().into()),
                clear_color: ClearColorConfig::Custom(Color::NONE),
                ..default()
            },
            Projection::from(PerspectiveProjection {
                fov: cfg.fov_degrees.to_radians(),
                ..default()
            }),
            rig.transform(),
            rig,
            layers,
            ChildOf(root),
        ))
        .id();

    info!(
        target: "scene",
        "composed {} scene: particles={} kind={} auto_rotate={}",
        slot.label(),
        cfg.particles.count,
        cfg.particles.kind.as_str(),
        cfg.auto_rotate
    );
    ComposedScene { root, camera, image }
}

pub fn tick_scene_clocks(time: Res<Time>, mut clocks: Query<&mut SceneClock>) {
    let dt = time.delta_secs();
    for mut clock in &mut clocks {
        clock.elapsed += dt;
    }
}

pub fn sway_groups(
    scenes: Query<(&FilterScene, &SceneClock)>,
    mut groups: Query<(&SceneMember, &mut Transform), With<SwayGroup>>,
) {
    for (member, mut tf) in &mut groups {
        let Ok((scene, clock)) = scenes.get(member.0) else { continue };
        if scene.auto_rotate {
            tf.rotation = Quat::from_rotation_y(sway_yaw(clock.elapsed));
        }
    }
}

pub fn float_nodes(
    clocks: Query<&SceneClock>,
    mut nodes: Query<(&FloatMotion, &SceneMember, &mut Transform)>,
) {
    for (motion, member, mut tf) in &mut nodes {
        if let Ok(clock) = clocks.get(member.0) {
            *tf = motion.sample(clock.elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sway_never_exceeds_limit() {
        for i in 0..2_000 {
            let yaw = sway_yaw(i as f32 * 0.05);
            assert!(yaw.abs() <= MAX_SWAY + 1e-6);
        }
        assert_eq!(sway_yaw(0.0), 0.0);
    }

    #[test]
    fn float_motion_is_gentle() {
        let motion = FloatMotion::default();
        for i in 0..200 {
            let tf = motion.sample(i as f32 * 0.1);
            assert!(tf.translation.y.abs() <= 0.03 + 1e-6);
        }
    }

    #[test]
    fn slots_use_distinct_layers_and_origins() {
        assert_ne!(SceneSlot::Hero.layer(), SceneSlot::HowItWorks.layer());
        assert!(SceneSlot::Hero.origin().distance(SceneSlot::HowItWorks.origin()) >= SLOT_SPACING);
    }
}
