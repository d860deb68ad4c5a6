use bevy::prelude::*;

// Brand colours
pub const PRIMARY_GREEN: Color = Color::srgb(0.176, 0.541, 0.369); // #2d8a5e
pub const WATER_BLUE: Color = Color::srgb(0.204, 0.596, 0.859); // #3498db
pub const ACCENT_GREEN: Color = Color::srgb(0.153, 0.682, 0.376); // #27ae60
pub const SAND: Color = Color::srgb(0.761, 0.698, 0.502); // #c2b280
pub const CHARCOAL: Color = Color::srgb(0.173, 0.243, 0.314); // #2c3e50
pub const OFF_WHITE: Color = Color::srgb(0.973, 0.980, 0.973); // #f8faf8

// Page surfaces and text
pub const PAGE_BACKGROUND: Color = OFF_WHITE;
pub const SURFACE: Color = Color::WHITE;
pub const SURFACE_MUTED: Color = Color::srgb(0.925, 0.953, 0.937);
pub const TEXT_PRIMARY: Color = Color::srgb(0.10, 0.16, 0.13);
pub const TEXT_MUTED: Color = Color::srgb(0.38, 0.45, 0.42);
pub const TEXT_ON_DARK: Color = Color::srgb(0.95, 0.97, 0.96);
pub const FOOTER_BACKGROUND: Color = Color::srgb(0.09, 0.20, 0.15);
pub const WARNING: Color = Color::srgb(0.86, 0.33, 0.20);
pub const WARNING_SURFACE: Color = Color::srgb(0.99, 0.93, 0.90);
pub const INFO_SURFACE: Color = Color::srgb(0.90, 0.95, 0.99);
pub const DISABLED: Color = Color::srgb(0.78, 0.80, 0.79);

/// Footer swatch list: (label, hex).
pub const SWATCHES: [(&str, &str); 6] = [
    ("Primary Green", "#2d8a5e"),
    ("Water Blue", "#3498db"),
    ("Accent Green", "#27ae60"),
    ("Sand", "#c2b280"),
    ("Charcoal", "#2c3e50"),
    ("Off White", "#f8faf8"),
];

/// Parse `#rrggbb`; malformed input falls back to magenta so it is obvious on screen.
#[inline]
pub fn hex(code: &str) -> Color {
    Srgba::hex(code).map(Color::from).unwrap_or(Color::srgb(1.0, 0.0, 1.0))
}

/// Hue in degrees, saturation and lightness in percent.
#[inline]
pub fn hsl_pct(hue: f32, saturation: f32, lightness: f32) -> Color {
    Color::hsl(hue, saturation / 100.0, lightness / 100.0)
}

#[inline]
pub fn fade(color: Color, alpha: f32) -> Color {
    let base = color.alpha();
    color.with_alpha(base * alpha.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatches_parse_to_brand_constants() {
        let parsed = hex(SWATCHES[0].1).to_srgba();
        let brand = PRIMARY_GREEN.to_srgba();
        assert!((parsed.red - brand.red).abs() < 0.01);
        assert!((parsed.green - brand.green).abs() < 0.01);
        assert!((parsed.blue - brand.blue).abs() < 0.01);
    }

    #[test]
    fn fade_scales_alpha() {
        let c = fade(WATER_BLUE.with_alpha(0.5), 0.5);
        assert!((c.alpha() - 0.25).abs() < 1e-6);
    }
}
