//! Subtree opacity for UI nodes. Bevy UI has no group alpha, so an `Opacity`
//! on a node scales the alpha of every background, text and image below it.

use bevy::prelude::*;

/// Multiplies the alpha of this node and all descendants. Nested values multiply.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Opacity(pub f32);

impl Default for Opacity {
    fn default() -> Self {
        Opacity(1.0)
    }
}

/// Alpha values a node had before any fading touched it.
#[derive(Component, Debug, Clone, Copy)]
pub struct BaseAlpha {
    background: Option<f32>,
    text: Option<f32>,
    image: Option<f32>,
}

fn ancestor_factor(mut entity: Entity, parents: &Query<&ChildOf>, opacities: &Query<&Opacity>) -> f32 {
    let mut factor = 1.0;
    while let Ok(parent) = parents.get(entity) {
        entity = parent.0;
        if let Ok(o) = opacities.get(entity) {
            factor *= o.0;
        }
    }
    factor
}

fn collect(
    entity: Entity,
    factor: f32,
    children: &Query<&Children>,
    opacities: &Query<&Opacity>,
    out: &mut Vec<(Entity, f32)>,
) {
    let factor = factor * opacities.get(entity).map(|o| o.0.clamp(0.0, 1.0)).unwrap_or(1.0);
    out.push((entity, factor));
    if let Ok(kids) = children.get(entity) {
        for &child in kids {
            collect(child, factor, children, opacities, out);
        }
    }
}

type Paintable<'a> = (
    Option<&'a mut BackgroundColor>,
    Option<&'a mut TextColor>,
    Option<&'a mut ImageNode>,
    Option<&'a BaseAlpha>,
);

pub fn apply_opacity(
    mut commands: Commands,
    roots: Query<(Entity, Ref<Opacity>)>,
    opacities: Query<&Opacity>,
    parents: Query<&ChildOf>,
    children: Query<&Children>,
    mut paintable: Query<Paintable>,
) {
    let mut touched: Vec<(Entity, f32)> = Vec::new();
    for (entity, opacity) in &roots {
        if !opacity.is_changed() && opacity.0 >= 1.0 {
            continue;
        }
        let inherited = ancestor_factor(entity, &parents, &opacities);
        collect(entity, inherited, &children, &opacities, &mut touched);
    }
    if touched.is_empty() {
        return;
    }
    // A node reached from several roots keeps the deepest (last) factor.
    touched.reverse();
    touched.sort_by_key(|(e, _)| *e);
    touched.dedup_by_key(|(e, _)| *e);

    for (entity, factor) in touched {
        let Ok((bg, text, image, base)) = paintable.get_mut(entity) else { continue };
        let base = base.copied().unwrap_or_else(|| {
            let captured = BaseAlpha {
                background: bg.as_ref().map(|c| c.0.alpha()),
                text: text.as_ref().map(|c| c.0.alpha()),
                image: image.as_ref().map(|i| i.color.alpha()),
            };
            commands.entity(entity).insert(captured);
            captured
        });
        if let (Some(mut bg), Some(a)) = (bg, base.background) {
            let c = bg.0.with_alpha(a * factor);
            if bg.0 != c {
                bg.0 = c;
            }
        }
        if let (Some(mut text), Some(a)) = (text, base.text) {
            let c = text.0.with_alpha(a * factor);
            if text.0 != c {
                text.0 = c;
            }
        }
        if let (Some(mut image), Some(a)) = (image, base.image) {
            let c = image.color.with_alpha(a * factor);
            if image.color != c {
                image.color = c;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_opacity_multiplies() {
        let mut app = App::new();
        app.add_systems(Update, apply_opacity);
        let root = app.world_mut().spawn((Opacity(0.5), BackgroundColor(Color::WHITE))).id();
        let mid = app.world_mut().spawn((Opacity(0.5), ChildOf(root))).id();
        let leaf = app
            .world_mut()
            .spawn((TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)), ChildOf(mid)))
            .id();
        app.update();
        let bg = app.world().get::<BackgroundColor>(root).map(|c| c.0.alpha());
        assert_eq!(bg, Some(0.5));
        let text = app.world().get::<TextColor>(leaf).map(|c| c.0.alpha()).unwrap_or_default();
        assert!((text - 0.2).abs() < 1e-5, "{text}");

        app.world_mut().entity_mut(root).insert(Opacity(1.0));
        app.world_mut().entity_mut(mid).insert(Opacity(1.0));
        app.update();
        let text = app.world().get::<TextColor>(leaf).map(|c| c.0.alpha()).unwrap_or_default();
        assert!((text - 0.8).abs() < 1e-5, "base alpha restored: {text}");
    }
}
