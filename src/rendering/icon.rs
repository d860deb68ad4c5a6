//! CPU rasterizer for the ClearDrop drop-and-leaf mark.
//!
//! Shapes are described in a 100x100 view box and sampled 4x4 per pixel, so
//! any output size stays smooth. Output is straight-alpha RGBA8 in sRGB.

use bevy::math::Vec2;

const VIEW_BOX: f32 = 100.0;
const SUPERSAMPLE: u32 = 4;

/// Colour scheme of the mark; `text` colours the word mark next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoScheme {
    pub primary: [u8; 3],
    pub secondary: [u8; 3],
    pub accent: [u8; 3],
    pub text: [u8; 3],
}

impl LogoScheme {
    /// For light backgrounds.
    pub const LIGHT: LogoScheme = LogoScheme {
        primary: [0x2d, 0x8a, 0x5e],
        secondary: [0x34, 0x98, 0xdb],
        accent: [0x27, 0xae, 0x60],
        text: [0x1a, 0x5a, 0x3a],
    };
    /// For dark backgrounds.
    pub const DARK: LogoScheme = LogoScheme {
        primary: [0x4a, 0xde, 0x80],
        secondary: [0x60, 0xa5, 0xfa],
        accent: [0x34, 0xd3, 0x99],
        text: [0xff, 0xff, 0xff],
    };
}

#[derive(Debug, Clone, Copy, Default)]
struct Rgba([f32; 4]);

impl Rgba {
    fn solid(rgb: [u8; 3], alpha: f32) -> Self {
        Rgba([rgb[0] as f32 / 255.0, rgb[1] as f32 / 255.0, rgb[2] as f32 / 255.0, alpha])
    }

    fn mix(a: [u8; 3], b: [u8; 3], t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |i: usize| (a[i] as f32 * (1.0 - t) + b[i] as f32 * t) / 255.0;
        Rgba([ch(0), ch(1), ch(2), 1.0])
    }

    /// Source-over with straight alpha.
    fn over(self, dst: Rgba) -> Rgba {
        let sa = self.0[3];
        let da = dst.0[3];
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Rgba::default();
        }
        let ch = |i: usize| (self.0[i] * sa + dst.0[i] * da * (1.0 - sa)) / out_a;
        Rgba([ch(0), ch(1), ch(2), out_a])
    }
}

/// Circle of radius `r` at `(50, cy)` joined to a cone tangent from `(50, apex_y)`.
fn inside_drop(p: Vec2, apex_y: f32, cy: f32, r: f32) -> bool {
    let dx = p.x - 50.0;
    let dy = p.y - cy;
    if dx * dx + dy * dy <= r * r {
        return true;
    }
    let d = cy - apex_y;
    if p.y < apex_y || d <= r {
        return false;
    }
    let sin = r / d;
    let cos2 = 1.0 - sin * sin;
    let tangent_y = apex_y + d * cos2;
    let tan = sin / cos2.sqrt();
    p.y <= tangent_y && dx.abs() <= (p.y - apex_y) * tan
}

fn inside_ellipse(p: Vec2, center: Vec2, radii: Vec2, angle: f32) -> bool {
    let (s, c) = angle.sin_cos();
    let d = p - center;
    let local = Vec2::new(d.x * c + d.y * s, -d.x * s + d.y * c) / radii;
    local.length_squared() <= 1.0
}

fn on_segment(p: Vec2, a: Vec2, b: Vec2, half_width: f32) -> bool {
    let ab = b - a;
    let t = ((p - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
    (a + ab * t).distance_squared(p) <= half_width * half_width
}

const FILTER_LINES: [(f32, f32, f32); 3] = [(60.0, 35.0, 65.0), (68.0, 38.0, 62.0), (76.0, 42.0, 58.0)];

fn shade(p: Vec2, scheme: &LogoScheme) -> Rgba {
    let mut color = Rgba::default();
    if inside_drop(p, 10.0, 65.0, 30.0) {
        color = Rgba::mix(scheme.secondary, scheme.primary, (p.y - 10.0) / 85.0).over(color);
    }
    if inside_drop(p, 25.0, 66.0, 20.0) {
        color = Rgba::solid([255, 255, 255], 0.3).over(color);
    }
    if inside_ellipse(p, Vec2::new(38.0, 50.0), Vec2::new(6.0, 10.0), 0.0) {
        color = Rgba::solid([255, 255, 255], 0.5).over(color);
    }
    if inside_ellipse(p, Vec2::new(80.0, 37.0), Vec2::new(9.0, 5.5), -0.5) {
        let t = ((p.x - 71.0) + (p.y - 28.0)) / 36.0;
        color = Rgba::mix(scheme.accent, scheme.primary, t).over(color);
    }
    for (y, x0, x1) in FILTER_LINES {
        if on_segment(p, Vec2::new(x0, y), Vec2::new(x1, y), 1.0) {
            color = Rgba::solid([255, 255, 255], 0.4).over(color);
        }
    }
    color
}

/// Render the mark into a `size`x`size` RGBA8 buffer (row-major, top row first).
pub fn rasterize_logo(scheme: &LogoScheme, size: u32) -> Vec<u8> {
    let size = size.max(1);
    let mut out = Vec::with_capacity((size * size * 4) as usize);
    let scale = VIEW_BOX / size as f32;
    let samples = (SUPERSAMPLE * SUPERSAMPLE) as f32;
    for py in 0..size {
        for px in 0..size {
            let mut acc = [0.0f32; 4];
            for sy in 0..SUPERSAMPLE {
                for sx in 0..SUPERSAMPLE {
                    let p = Vec2::new(
                        (px as f32 + (sx as f32 + 0.5) / SUPERSAMPLE as f32) * scale,
                        (py as f32 + (sy as f32 + 0.5) / SUPERSAMPLE as f32) * scale,
                    );
                    let c = shade(p, scheme);
                    // Premultiply while averaging so transparent samples add no colour.
                    for (i, slot) in acc.iter_mut().enumerate().take(3) {
                        *slot += c.0[i] * c.0[3];
                    }
                    acc[3] += c.0[3];
                }
            }
            let alpha = acc[3] / samples;
            for slot in acc.iter().take(3) {
                let straight = if acc[3] > 0.0 { slot / acc[3] } else { 0.0 };
                out.push((straight * 255.0).round().clamp(0.0, 255.0) as u8);
            }
            out.push((alpha * 255.0).round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * size + x) * 4) as usize;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn corners_are_transparent_and_body_is_opaque() {
        let size = 64;
        let buf = rasterize_logo(&LogoScheme::LIGHT, size);
        assert_eq!(buf.len(), (size * size * 4) as usize);
        assert_eq!(pixel(&buf, size, 0, 0)[3], 0);
        assert_eq!(pixel(&buf, size, 0, size - 1)[3], 0);
        // Lower body of the drop, clear of the highlight and filter lines.
        assert_eq!(pixel(&buf, size, 32, 56)[3], 255);
    }

    #[test]
    fn drop_tip_is_narrow() {
        assert!(inside_drop(Vec2::new(50.0, 12.0), 10.0, 65.0, 30.0));
        assert!(!inside_drop(Vec2::new(60.0, 12.0), 10.0, 65.0, 30.0));
        assert!(inside_drop(Vec2::new(79.0, 65.0), 10.0, 65.0, 30.0));
    }

    #[test]
    fn schemes_render_differently() {
        let light = rasterize_logo(&LogoScheme::LIGHT, 16);
        let dark = rasterize_logo(&LogoScheme::DARK, 16);
        assert_ne!(light, dark);
    }
}
