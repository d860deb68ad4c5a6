use bevy::prelude::*;

use super::stats::{DebugState, DebugStats};

#[derive(Component)]
pub(crate) struct DebugOverlayText;

pub fn debug_overlay_spawn(mut commands: Commands) {
    commands.spawn((
        Name::new("debug-overlay"),
        Text::new(String::new()),
        TextFont {
            font_size: 13.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(4.0),
            left: Val::Px(6.0),
            padding: UiRect::all(Val::Px(4.0)),
            ..Default::default()
        },
        GlobalZIndex(1000),
        Visibility::Hidden,
        DebugOverlayText,
    ));
}

pub fn overlay_line(stats: &DebugStats) -> String {
    let route = stats.route.map(|r| r.path()).unwrap_or("-");
    format!(
        "FPS {:.1} ft {:.1}ms scenes {} particles {} route {} scroll {:.0}",
        stats.fps, stats.frame_time_ms, stats.scene_count, stats.particle_count, route, stats.scroll
    )
}

pub(crate) fn debug_overlay_update(
    state: Res<DebugState>,
    stats: Res<DebugStats>,
    mut q_text: Query<(&mut Text, &mut Visibility), With<DebugOverlayText>>,
) {
    let Ok((mut text, mut visibility)) = q_text.single_mut() else {
        return;
    };
    visibility.set_if_neq(if state.overlay_visible { Visibility::Visible } else { Visibility::Hidden });
    if state.overlay_visible && (state.is_changed() || stats.is_changed()) {
        text.0 = overlay_line(&stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Route;

    #[test]
    fn line_names_route_path() {
        let stats = DebugStats { route: Some(Route::Poster), particle_count: 30, ..Default::default() };
        let line = overlay_line(&stats);
        assert!(line.contains("route /poster"));
        assert!(line.contains("particles 30"));
    }
}
