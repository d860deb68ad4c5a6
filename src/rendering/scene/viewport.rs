//! Off-screen render targets and the orbit camera that films each scene.

use std::f32::consts::FRAC_PI_2;

use bevy::asset::RenderAssetUsages;
use bevy::input::mouse::{AccumulatedMouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages};

use crate::core::config::{OrbitConfig, SceneConfig};

/// Spherical camera rig orbiting a target point.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitRig {
    pub target: Vec3,
    pub yaw: f32,
    /// Angle from the +Y axis; π/2 looks at the target horizontally.
    pub polar: f32,
    pub distance: f32,
    pub limits: OrbitConfig,
}

impl OrbitRig {
    /// Rig whose initial pose reproduces a camera placed at `eye` looking at `target`.
    pub fn from_eye(eye: Vec3, target: Vec3, limits: OrbitConfig) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(f32::EPSILON);
        let mut rig = Self {
            target,
            yaw: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            distance,
            limits,
        };
        rig.clamp();
        rig
    }

    pub fn clamp(&mut self) {
        let l = &self.limits;
        let (lo, hi) = (l.min_polar.min(l.max_polar), l.max_polar.max(l.min_polar));
        self.polar = self.polar.clamp(lo.max(0.01), hi.min(FRAC_PI_2 * 2.0 - 0.01));
        if self.limits.zoom_enabled {
            self.distance = self.distance.clamp(l.min_distance, l.max_distance.max(l.min_distance));
        }
    }

    /// Rotate by a pointer drag of `delta` logical pixels.
    pub fn drag(&mut self, delta: Vec2) {
        if !self.limits.drag_enabled {
            return;
        }
        self.yaw -= delta.x * self.limits.drag_sensitivity;
        self.polar -= delta.y * self.limits.drag_sensitivity;
        self.clamp();
    }

    /// Dolly in (positive) or out (negative); ignored unless zoom is enabled.
    pub fn zoom(&mut self, amount: f32) -> bool {
        if !self.limits.zoom_enabled {
            return false;
        }
        self.distance *= (1.0 - amount * 0.1).clamp(0.5, 1.5);
        self.clamp();
        true
    }

    pub fn advance(&mut self, dt: f32) {
        self.yaw += self.limits.auto_orbit_speed * dt;
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        self.target + Vec3::new(sp * sy, cp, sp * cy) * self.distance
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

/// UI image showing a scene's render target; carries the camera it displays.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneViewport {
    pub camera: Entity,
}

/// Allocate a colour target the scene camera renders into and the UI samples from.
pub fn create_render_target(images: &mut Assets<Image>, size: (u32, u32)) -> Handle<Image> {
    let extent = Extent3d {
        width: size.0.max(1),
        height: size.1.max(1),
        depth_or_array_layers: 1,
    };
    let mut image = Image::new_fill(
        extent,
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Bgra8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.texture_descriptor.usage =
        TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST | TextureUsages::RENDER_ATTACHMENT;
    images.add(image)
}

pub fn orbit_rig_for(cfg: &SceneConfig, target: Vec3) -> OrbitRig {
    let (x, y, z) = cfg.camera;
    OrbitRig::from_eye(target + Vec3::new(x, y, z), target, cfg.orbit.clone())
}

/// Drag rotates while the viewport is pressed; wheel zooms while it is hovered.
pub fn orbit_input(
    viewports: Query<(&Interaction, &SceneViewport)>,
    motion: Res<AccumulatedMouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut rigs: Query<&mut OrbitRig>,
) {
    let scroll: f32 = wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        })
        .sum();
    for (interaction, viewport) in &viewports {
        let Ok(mut rig) = rigs.get_mut(viewport.camera) else { continue };
        match interaction {
            Interaction::Pressed => rig.drag(motion.delta),
            Interaction::Hovered if scroll != 0.0 => {
                rig.zoom(scroll);
            }
            _ => {}
        }
    }
}

pub fn apply_orbit_rigs(time: Res<Time>, mut rigs: Query<(&mut OrbitRig, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut rig, mut tf) in &mut rigs {
        rig.advance(dt);
        *tf = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

    fn limits(zoom: bool) -> OrbitConfig {
        OrbitConfig {
            zoom_enabled: zoom,
            min_polar: FRAC_PI_6,
            max_polar: FRAC_PI_2,
            ..Default::default()
        }
    }

    #[test]
    fn from_eye_round_trips_position() {
        let eye = Vec3::new(4.0, 3.0, 6.0);
        let rig = OrbitRig::from_eye(eye, Vec3::ZERO, limits(true));
        assert!((rig.eye() - eye).length() < 1e-3);
    }

    #[test]
    fn polar_clamps_to_limits() {
        let mut rig = OrbitRig::from_eye(Vec3::new(4.0, 3.0, 6.0), Vec3::ZERO, limits(true));
        rig.drag(Vec2::new(0.0, 10_000.0));
        assert!((rig.polar - FRAC_PI_6).abs() < 1e-5);
        rig.drag(Vec2::new(0.0, -10_000.0));
        assert!((rig.polar - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn hero_pose_sits_inside_its_limits() {
        let hero = OrbitConfig { min_polar: FRAC_PI_4, ..limits(false) };
        let rig = OrbitRig::from_eye(Vec3::new(3.0, 2.0, 5.0), Vec3::ZERO, hero);
        assert!((rig.eye() - Vec3::new(3.0, 2.0, 5.0)).length() < 1e-3);
    }

    #[test]
    fn zoom_respects_distance_band_and_toggle() {
        let mut rig = OrbitRig::from_eye(Vec3::new(4.0, 3.0, 6.0), Vec3::ZERO, limits(true));
        for _ in 0..50 {
            rig.zoom(1.0);
        }
        assert!((rig.distance - 4.0).abs() < 1e-4);
        for _ in 0..50 {
            rig.zoom(-1.0);
        }
        assert!((rig.distance - 10.0).abs() < 1e-4);

        let mut fixed = OrbitRig::from_eye(Vec3::new(3.0, 2.0, 5.0), Vec3::ZERO, limits(false));
        let before = fixed.distance;
        assert!(!fixed.zoom(1.0));
        assert_eq!(fixed.distance, before);
    }
}
