use bevy::prelude::*;
use bevy::asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::widgets::{TextRole, Ui};
use crate::rendering::icon::{rasterize_logo, LogoScheme};

/// Pixel size the mark is rasterized at; nodes scale it down.
const ICON_RESOLUTION: u32 = 192;
pub const WORD_MARK: &str = "ClearDrop";
pub const WORD_MARK_HE: &str = "קלירדרופ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoVariant {
    #[default]
    Light,
    Dark,
}

impl LogoVariant {
    pub fn scheme(self) -> &'static LogoScheme {
        match self {
            LogoVariant::Light => &LogoScheme::LIGHT,
            LogoVariant::Dark => &LogoScheme::DARK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl LogoSize {
    pub fn icon_px(self) -> f32 {
        match self {
            LogoSize::Sm => 32.0,
            LogoSize::Md => 48.0,
            LogoSize::Lg => 64.0,
            LogoSize::Xl => 96.0,
        }
    }

    pub fn text_px(self) -> f32 {
        match self {
            LogoSize::Sm => 18.0,
            LogoSize::Md => 24.0,
            LogoSize::Lg => 30.0,
            LogoSize::Xl => 48.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoOptions {
    pub variant: LogoVariant,
    pub size: LogoSize,
    pub show_text: bool,
}

impl Default for LogoOptions {
    fn default() -> Self {
        Self {
            variant: LogoVariant::Light,
            size: LogoSize::Md,
            show_text: true,
        }
    }
}

/// Rasterized marks, one per variant.
#[derive(Resource, Debug, Clone, Default)]
pub struct LogoImages {
    pub light: Handle<Image>,
    pub dark: Handle<Image>,
}

impl LogoImages {
    pub fn get(&self, variant: LogoVariant) -> Handle<Image> {
        match variant {
            LogoVariant::Light => self.light.clone(),
            LogoVariant::Dark => self.dark.clone(),
        }
    }
}

pub fn logo_image(variant: LogoVariant) -> Image {
    Image::new(
        Extent3d {
            width: ICON_RESOLUTION,
            height: ICON_RESOLUTION,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rasterize_logo(variant.scheme(), ICON_RESOLUTION),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

impl LogoImages {
    /// Rasterize both variants into `images`.
    pub fn rasterize(images: &mut Assets<Image>) -> Self {
        LogoImages {
            light: images.add(logo_image(LogoVariant::Light)),
            dark: images.add(logo_image(LogoVariant::Dark)),
        }
    }
}

fn scheme_color(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

/// Mark plus optional two-line word mark; returns the row entity.
pub fn spawn_logo(ui: &mut Ui, parent: Entity, images: &LogoImages, options: LogoOptions) -> Entity {
    let row = ui.row(parent, 12.0);
    ui.commands.spawn((
        ImageNode::new(images.get(options.variant)),
        Node {
            width: Val::Px(options.size.icon_px()),
            height: Val::Px(options.size.icon_px()),
            flex_shrink: 0.0,
            ..default()
        },
        ChildOf(row),
    ));
    if options.show_text {
        let text_color = scheme_color(options.variant.scheme().text);
        let words = ui.column(row, 0.0);
        let mark = ui.text(words, WORD_MARK, TextRole::Heading, text_color);
        let font = ui.font(true);
        ui.commands.entity(mark).insert(TextFont {
            font,
            font_size: options.size.text_px(),
            ..default()
        });
        ui.text(words, WORD_MARK_HE, TextRole::Caption, text_color.with_alpha(0.7));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_sizes_follow_scale() {
        let sizes: Vec<f32> = [LogoSize::Sm, LogoSize::Md, LogoSize::Lg, LogoSize::Xl]
            .iter()
            .map(|s| s.icon_px())
            .collect();
        assert_eq!(sizes, vec![32.0, 48.0, 64.0, 96.0]);
    }

    #[test]
    fn rasterize_stores_both_variants() {
        let mut images = Assets::<Image>::default();
        let logos = LogoImages::rasterize(&mut images);
        assert_eq!(images.len(), 2);
        assert_ne!(logos.light, logos.dark);
        assert!(images.get(&logos.get(LogoVariant::Dark)).is_some());
    }

    #[test]
    fn image_matches_resolution() {
        let image = logo_image(LogoVariant::Dark);
        assert_eq!(image.width(), ICON_RESOLUTION);
        assert_eq!(image.data.as_ref().map(Vec::len), Some((ICON_RESOLUTION * ICON_RESOLUTION * 4) as usize));
    }
}
