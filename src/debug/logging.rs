use super::stats::{DebugState, DebugStats};
use bevy::prelude::*;

pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(target: "debug", "SITE frame={} t={:.3}s fps={:.1} ft_ms={:.1} scenes={} particles={} route={:?} scroll={:.0}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.scene_count,
            stats.particle_count,
            stats.route,
            stats.scroll);
    }
}
