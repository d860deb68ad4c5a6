use bevy::prelude::*;

use crate::app::state::Route;
use crate::rendering::scene::particles::ParticleField;
use crate::ui::scroll::PageScroll;

#[derive(Resource, Debug, Clone)]
pub struct DebugState {
    pub overlay_visible: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            overlay_visible: false,
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub particle_count: usize,
    pub scene_count: usize,
    pub route: Option<Route>,
    pub scroll: f32,
}

/// Exponential moving average; the first sample seeds it.
pub fn smooth(previous: f32, sample: f32) -> f32 {
    if previous == 0.0 {
        sample
    } else {
        previous * 0.9 + sample * 0.1
    }
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    fields: Query<&ParticleField>,
    route: Option<Res<State<Route>>>,
    pages: Query<&PageScroll>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    stats.fps = smooth(stats.fps, 1.0 / dt);
    stats.frame_time_ms = smooth(stats.frame_time_ms, dt * 1000.0);
    stats.particle_count = fields.iter().map(|f| f.pool.len()).sum();
    stats.scene_count = fields.iter().count();
    stats.route = route.map(|r| *r.get());
    stats.scroll = pages.iter().next().map(|p| p.current).unwrap_or_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_seeds_average() {
        assert_eq!(smooth(0.0, 60.0), 60.0);
        let next = smooth(60.0, 30.0);
        assert!((next - 57.0).abs() < 1e-4);
    }
}
