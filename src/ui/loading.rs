// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! First-visit splash. The gate holds the home content back for a minimum
//! duration, then fades out and signals completion exactly once.

use std::time::Duration;

use bevy::prelude::*;
use smallvec::SmallVec;

use super::fade::Opacity;
use super::logo::{spawn_logo, LogoImages, LogoOptions, LogoSize, LogoVariant};
use super::widgets::{TextRole, Ui};
use crate::app::state::{HomePhase, SplashState};
use crate::core::config::SiteConfig;
use crate::core::content::home::LOADING_TAGLINE;
use crate::core::system::system_order::PageSet;
use crate::rendering::fonts::SiteFonts;
use crate::rendering::palette;

pub const TICK: Duration = Duration::from_millis(50);
pub const HOLD: Duration = Duration::from_millis(300);
pub const EXIT: Duration = Duration::from_millis(500);

const DROP_COUNT: usize = 5;
const DROP_PERIOD: f32 = 1.5;
const RIPPLE_COUNT: usize = 3;
const RIPPLE_PERIOD: f32 = 3.0;
const RIPPLE_SIZE: f32 = 300.0;
const BAR_WIDTH: f32 = 256.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Running,
    Completing,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// Progress reached 100 and the hold elapsed; the exit fade starts.
    ExitStarted,
    /// Exit fade finished; the content may mount.
    Completed,
}

/// Time-boxed progress gate driven by explicit time deltas.
#[derive(Debug, Clone)]
pub struct LoadingGate {
    min_duration: Duration,
    ticks: u32,
    tick_accum: Duration,
    phase: GatePhase,
    phase_elapsed: Duration,
    progress: f32,
    completed: bool,
}

pub fn progress_at(elapsed: Duration, min_duration: Duration) -> f32 {
    if min_duration.is_zero() {
        return 100.0;
    }
    (elapsed.as_secs_f64() / min_duration.as_secs_f64() * 100.0).min(100.0) as f32
}

impl LoadingGate {
    pub fn new(min_duration: Duration) -> Self {
        Self {
            min_duration,
            ticks: 0,
            tick_accum: Duration::ZERO,
            phase: GatePhase::Running,
            phase_elapsed: Duration::ZERO,
            progress: 0.0,
            completed: false,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// The exit animation is running or done.
    pub fn finished(&self) -> bool {
        self.phase == GatePhase::Done
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// 0 while visible, 1 once the exit fade is over.
    pub fn exit_fraction(&self) -> f32 {
        match self.phase {
            GatePhase::Done => (self.phase_elapsed.as_secs_f32() / EXIT.as_secs_f32()).min(1.0),
            _ => 0.0,
        }
    }

    pub fn advance(&mut self, delta: Duration) -> SmallVec<[GateEvent; 2]> {
        let mut events = SmallVec::new();
        let mut remaining = delta;
        loop {
            match self.phase {
                GatePhase::Running => {
                    let needed = TICK - self.tick_accum;
                    if remaining < needed {
                        self.tick_accum += remaining;
                        break;
                    }
                    remaining -= needed;
                    self.tick_accum = Duration::ZERO;
                    self.ticks += 1;
                    self.progress = progress_at(TICK * self.ticks, self.min_duration);
                    if self.progress >= 100.0 {
                        self.phase = GatePhase::Completing;
                        self.phase_elapsed = Duration::ZERO;
                    }
                }
                GatePhase::Completing => {
                    let needed = HOLD - self.phase_elapsed;
                    if remaining < needed {
                        self.phase_elapsed += remaining;
                        break;
                    }
                    remaining -= needed;
                    self.phase = GatePhase::Done;
                    self.phase_elapsed = Duration::ZERO;
                    events.push(GateEvent::ExitStarted);
                }
                GatePhase::Done => {
                    if self.completed {
                        break;
                    }
                    let needed = EXIT - self.phase_elapsed;
                    if remaining < needed {
                        self.phase_elapsed += remaining;
                        break;
                    }
                    self.phase_elapsed = EXIT;
                    self.completed = true;
                    events.push(GateEvent::Completed);
                    break;
                }
            }
        }
        events
    }
}

/// Splash root; owns its gate so despawning it cancels the gate.
#[derive(Component, Debug)]
pub struct LoadingScreen {
    pub gate: LoadingGate,
    elapsed: f32,
}

/// Sent once when the splash finished.
#[derive(Event, Debug, Clone, Copy)]
pub struct LoadingComplete;

#[derive(Component)]
struct ProgressFill;

#[derive(Component)]
struct ProgressLabel;

#[derive(Component)]
struct SplashDrop(usize);

#[derive(Component)]
struct Ripple(usize);

/// Bob of splash drop `i`: (y offset px, opacity).
pub fn drop_bob(t: f32, index: usize) -> (f32, f32) {
    let phase = ((t - index as f32 * 0.2).max(0.0) / DROP_PERIOD).fract();
    let wave = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
    (20.0 * wave, 0.5 + 0.5 * wave)
}

/// Ripple `i`: (scale, opacity); invisible until its delay passed.
pub fn ripple(t: f32, index: usize) -> (f32, f32) {
    let local = t - index as f32;
    if local < 0.0 {
        return (0.0, 0.0);
    }
    let p = (local / RIPPLE_PERIOD).fract();
    let eased = 1.0 - (1.0 - p) * (1.0 - p);
    (3.0 * eased, 0.5 * (1.0 - eased))
}

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SplashState>()
            .add_event::<LoadingComplete>()
            .add_systems(OnEnter(HomePhase::Loading), enter_loading)
            .add_systems(
                Update,
                (tick_loading_gates, animate_splash, finish_loading)
                    .chain()
                    .in_set(PageSet)
                    .run_if(in_state(HomePhase::Loading)),
            );
    }
}

fn enter_loading(
    mut commands: Commands,
    splash: Res<SplashState>,
    cfg: Option<Res<SiteConfig>>,
    fonts: Option<Res<SiteFonts>>,
    logos: Option<Res<LogoImages>>,
    mut next: ResMut<NextState<HomePhase>>,
) {
    let cfg = cfg.map(|c| c.loading.clone()).unwrap_or_default();
    if splash.shown || cfg.skip {
        debug!(target: "loading", "splash skipped (shown={} skip={})", splash.shown, cfg.skip);
        next.set(HomePhase::Content);
        return;
    }
    info!(target: "loading", "splash started: min_duration={}ms", cfg.min_duration_ms);
    let fonts = fonts.map(|f| f.clone()).unwrap_or_else(SiteFonts::fallback);
    let logos = logos.map(|l| l.clone()).unwrap_or_default();
    spawn_loading_screen(&mut commands, &fonts, &logos, Duration::from_millis(cfg.min_duration_ms));
}

pub fn spawn_loading_screen(commands: &mut Commands, fonts: &SiteFonts, logos: &LogoImages, min: Duration) -> Entity {
    let root = commands
        .spawn((
            Name::new("loading-screen"),
            LoadingScreen { gate: LoadingGate::new(min), elapsed: 0.0 },
            StateScoped(HomePhase::Loading),
            Opacity(1.0),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(palette::SURFACE_MUTED),
            GlobalZIndex(100),
        ))
        .id();

    for i in 0..RIPPLE_COUNT {
        commands.spawn((
            Ripple(i),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(0.0),
                height: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(palette::fade(palette::WATER_BLUE, 0.2)),
            BorderRadius::MAX,
            ChildOf(root),
        ));
    }

    let mut ui = Ui::new(commands, fonts);
    let column = ui.node(
        root,
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(32.0),
            ..default()
        },
    );
    let drops = ui.node(
        column,
        Node {
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(24.0),
            height: Val::Px(44.0),
            ..default()
        },
    );
    for i in 0..DROP_COUNT {
        ui.commands.spawn((
            SplashDrop(i),
            Node {
                width: Val::Px(16.0),
                height: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(Color::srgba_u8(96, 176, 224, 204)),
            BorderRadius::new(Val::Percent(50.0), Val::Percent(50.0), Val::Percent(40.0), Val::Percent(40.0)),
            ChildOf(drops),
        ));
    }
    spawn_logo(
        &mut ui,
        column,
        logos,
        LogoOptions { variant: LogoVariant::Light, size: LogoSize::Xl, show_text: true },
    );
    ui.centered_text(column, LOADING_TAGLINE, TextRole::Subheading, palette::TEXT_PRIMARY);
    let track = ui.panel(
        column,
        Node {
            width: Val::Px(BAR_WIDTH),
            height: Val::Px(8.0),
            overflow: Overflow::clip(),
            ..default()
        },
        palette::fade(palette::PRIMARY_GREEN, 0.2),
        4.0,
    );
    let fill = ui.panel(
        track,
        Node {
            width: Val::Percent(0.0),
            height: Val::Percent(100.0),
            ..default()
        },
        palette::PRIMARY_GREEN,
        4.0,
    );
    ui.commands.entity(fill).insert(ProgressFill);
    let label = ui.centered_text(column, "0%", TextRole::Small, palette::TEXT_MUTED);
    ui.commands.entity(label).insert(ProgressLabel);
    root
}

fn tick_loading_gates(
    time: Res<Time>,
    mut screens: Query<(&mut LoadingScreen, &mut Opacity)>,
    mut done: EventWriter<LoadingComplete>,
) {
    for (mut screen, mut opacity) in &mut screens {
        screen.elapsed += time.delta_secs();
        for event in screen.gate.advance(time.delta()) {
            match event {
                GateEvent::ExitStarted => debug!(target: "loading", "exit fade started"),
                GateEvent::Completed => {
                    info!(target: "loading", "splash complete");
                    done.write(LoadingComplete);
                }
            }
        }
        let target = 1.0 - screen.gate.exit_fraction();
        if opacity.0 != target {
            opacity.0 = target;
        }
    }
}

#[allow(clippy::type_complexity)]
fn animate_splash(
    screens: Query<&LoadingScreen>,
    mut fills: Query<&mut Node, (With<ProgressFill>, Without<Ripple>)>,
    mut labels: Query<&mut Text, With<ProgressLabel>>,
    mut drops: Query<(&SplashDrop, &mut Node, &mut BackgroundColor), (Without<ProgressFill>, Without<Ripple>)>,
    mut ripples: Query<(&Ripple, &mut Node, &mut BackgroundColor), (Without<ProgressFill>, Without<SplashDrop>)>,
) {
    let Ok(screen) = screens.single() else { return };
    let progress = screen.gate.progress();
    for mut node in &mut fills {
        node.width = Val::Percent(progress);
    }
    for mut text in &mut labels {
        let label = format!("{}%", progress.round() as u32);
        if text.0 != label {
            text.0 = label;
        }
    }
    let t = screen.elapsed;
    for (drop, mut node, mut bg) in &mut drops {
        let (y, alpha) = drop_bob(t, drop.0);
        node.top = Val::Px(y);
        bg.0 = bg.0.with_alpha(0.8 * alpha);
    }
    for (ripple_of, mut node, mut bg) in &mut ripples {
        let (scale, alpha) = ripple(t, ripple_of.0);
        let size = RIPPLE_SIZE * scale;
        node.width = Val::Px(size);
        node.height = Val::Px(size);
        bg.0 = bg.0.with_alpha(0.2 * alpha);
    }
}

fn finish_loading(
    mut events: EventReader<LoadingComplete>,
    mut splash: ResMut<SplashState>,
    mut next: ResMut<NextState<HomePhase>>,
) {
    if events.read().last().is_some() {
        splash.shown = true;
        next.set(HomePhase::Content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_never_decreases_or_overshoots() {
        let mut gate = LoadingGate::new(Duration::from_millis(2500));
        let mut last = 0.0;
        for _ in 0..200 {
            gate.advance(Duration::from_millis(17));
            assert!(gate.progress() >= last);
            assert!(gate.progress() <= 100.0);
            last = gate.progress();
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn completes_exactly_once_after_hold_and_exit() {
        let mut gate = LoadingGate::new(Duration::from_millis(2500));
        let mut completed_at = Vec::new();
        let mut exit_at = Vec::new();
        for ms in 1..=5_000u64 {
            for event in gate.advance(Duration::from_millis(1)) {
                match event {
                    GateEvent::ExitStarted => exit_at.push(ms),
                    GateEvent::Completed => completed_at.push(ms),
                }
            }
            if ms < 2500 {
                assert!(gate.progress() < 100.0, "100% reached early at {ms}ms");
            }
        }
        assert_eq!(exit_at, vec![2800]);
        assert_eq!(completed_at, vec![3300]);
    }

    #[test]
    fn one_huge_step_still_fires_both_events_in_order() {
        let mut gate = LoadingGate::new(Duration::from_millis(100));
        let events = gate.advance(Duration::from_secs(10));
        assert_eq!(events.as_slice(), &[GateEvent::ExitStarted, GateEvent::Completed]);
        assert!(gate.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut gate = LoadingGate::new(Duration::ZERO);
        gate.advance(TICK);
        assert_eq!(gate.progress(), 100.0);
        assert_eq!(gate.phase(), GatePhase::Completing);
    }

    #[test]
    fn decorations_stay_in_range() {
        for i in 0..300 {
            let t = i as f32 * 0.05;
            let (y, a) = drop_bob(t, 3);
            assert!((0.0..=20.0).contains(&y));
            assert!((0.5..=1.0).contains(&a));
            let (s, o) = ripple(t, 2);
            assert!((0.0..=3.0).contains(&s));
            assert!((0.0..=0.5).contains(&o));
        }
    }
}
