//! Page fonts and Hebrew glyph coverage checks.

use std::path::Path;

use bevy::prelude::*;

use crate::core::config::SiteConfig;

/// First and last letters of the Hebrew alphabet (final forms included in between).
pub const HEBREW_LETTERS: std::ops::RangeInclusive<char> = '\u{05D0}'..='\u{05EA}';

#[derive(Resource, Clone)]
pub struct SiteFonts {
    pub regular: Handle<Font>,
    pub bold: Handle<Font>,
}

impl SiteFonts {
    /// Bevy's built-in font for both weights.
    pub fn fallback() -> Self {
        Self { regular: Handle::default(), bold: Handle::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub covered: usize,
    pub total: usize,
    pub missing: Vec<char>,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Count which Hebrew letters the font in `data` has glyphs for.
pub fn hebrew_coverage(data: &[u8]) -> Result<Coverage, String> {
    let face = ttf_parser::Face::parse(data, 0).map_err(|e| format!("parse font: {e}"))?;
    let mut missing = Vec::new();
    let mut total = 0;
    for ch in HEBREW_LETTERS {
        total += 1;
        if face.glyph_index(ch).is_none() {
            missing.push(ch);
        }
    }
    Ok(Coverage { covered: total - missing.len(), total, missing })
}

pub fn hebrew_coverage_of_file(path: impl AsRef<Path>) -> Result<Coverage, String> {
    let data = std::fs::read(path.as_ref()).map_err(|e| format!("read {}: {e}", path.as_ref().display()))?;
    hebrew_coverage(&data)
}

/// Resolve one configured font: loaded when it exists on disk and covers Hebrew,
/// otherwise the built-in default (with a warning, since it renders Hebrew as boxes).
#[cfg(not(target_arch = "wasm32"))]
fn resolve_font(asset_server: &AssetServer, rel: &str) -> Handle<Font> {
    let disk_path = format!("assets/{rel}");
    if !Path::new(&disk_path).exists() {
        warn!(target: "fonts", "font missing at {disk_path}; using the default font. Add a Hebrew TTF there for readable text.");
        return Handle::default();
    }
    match hebrew_coverage_of_file(&disk_path) {
        Ok(cov) if cov.is_complete() => info!(target: "fonts", "{rel}: Hebrew coverage {}/{}", cov.covered, cov.total),
        Ok(cov) => warn!(target: "fonts", "{rel}: missing {} Hebrew letters ({:?})", cov.missing.len(), cov.missing),
        Err(e) => warn!(target: "fonts", "{rel}: {e}"),
    }
    asset_server.load(rel.to_string())
}

/// Resolved at plugin build time so pages spawned by the first state
/// transition already have their fonts. Headless apps (no `AssetServer`)
/// keep the default handles.
impl FromWorld for SiteFonts {
    fn from_world(world: &mut World) -> Self {
        let Some(asset_server) = world.get_resource::<AssetServer>() else {
            return SiteFonts::fallback();
        };
        let cfg = world.get_resource::<SiteConfig>().cloned().unwrap_or_default();
        #[cfg(target_arch = "wasm32")]
        let fonts = SiteFonts {
            regular: asset_server.load(cfg.fonts.regular.clone()),
            bold: asset_server.load(cfg.fonts.bold.clone()),
        };
        #[cfg(not(target_arch = "wasm32"))]
        let fonts = SiteFonts {
            regular: resolve_font(asset_server, &cfg.fonts.regular),
            bold: resolve_font(asset_server, &cfg.fonts.bold),
        };
        fonts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_twenty_seven_code_points() {
        assert_eq!(HEBREW_LETTERS.count(), 27);
    }

    #[test]
    fn configured_fonts_cover_the_alphabet() {
        let fonts = SiteConfig::default().fonts;
        for rel in [&fonts.regular, &fonts.bold] {
            let cov = hebrew_coverage_of_file(format!("assets/{rel}")).expect("shipped font parses");
            assert!(cov.is_complete(), "{rel} lacks {:?}", cov.missing);
            assert_eq!(cov.covered, 27);
        }
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(hebrew_coverage(b"definitely not a font").is_err());
    }
}
