use crate::core::config::SiteConfig;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

/// Exits after `window.auto_close` seconds; zero disables it.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Option<Res<SiteConfig>>) {
    let secs = cfg.map(|c| c.window.auto_close).unwrap_or_default();
    if secs > 0.0 {
        info!(target: "session", seconds = secs, "auto close armed");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(t) = timer.as_mut() {
        t.tick(time.delta());
        if t.just_finished() {
            info!(target: "session", "auto close timer finished, requesting exit");
            ev_exit.write(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    #[test]
    fn exits_once_the_delay_elapses() {
        let mut cfg = SiteConfig::default();
        cfg.window.auto_close = 0.5;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(cfg)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)))
            .add_plugins(AutoClosePlugin);
        app.update();
        assert!(app.should_exit().is_none());
        for _ in 0..4 {
            app.update();
        }
        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }
}
