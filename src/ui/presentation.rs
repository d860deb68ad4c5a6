// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Presentation-script page: one section at a time behind a clamped cursor,
//! cross-faded on every change, plus a print-only copy of the whole script.

use bevy::prelude::*;

use super::actions::{ActionTriggered, ButtonStyle, Disabled, SiteAction};
use super::fade::Opacity;
use super::logo::{spawn_logo, LogoImages, LogoOptions, LogoSize, LogoVariant};
use super::print::{NoPrint, PrintOnly};
use super::scroll::PageScroll;
use super::widgets::{TextRole, Ui};
use crate::app::state::Route;
use crate::core::content::print::script_heading;
use crate::core::content::script::{self, ScriptSection, SCRIPT};
use crate::core::system::system_order::{LayoutSet, PageSet};
use crate::rendering::fonts::SiteFonts;
use crate::rendering::palette;

/// Seconds for each half (exit, enter) of a slide change.
pub const SLIDE_HALF_SECS: f32 = 0.15;
const SLIDE_SHIFT_PX: f32 = 20.0;

/// Index into the script; every move clamps to `[0, len - 1]`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptCursor {
    index: usize,
    len: usize,
}

impl ScriptCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Returns whether the cursor moved.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn select(&mut self, index: usize) -> bool {
        let clamped = index.min(self.len.saturating_sub(1));
        let moved = clamped != self.index;
        self.index = clamped;
        moved
    }

    /// "n / len", 1-based.
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            return "0 / 0".into();
        }
        format!("{} / {}", self.index + 1, self.len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlidePhase {
    Idle,
    Exiting { elapsed: f32, target: usize },
    Entering { elapsed: f32 },
}

/// Exit-then-enter cross-fade between displayed sections.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    phase: SlidePhase,
    shown: usize,
}

impl SlideTransition {
    pub fn new(shown: usize) -> Self {
        Self { phase: SlidePhase::Idle, shown }
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Section currently on screen.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Section the transition ends on.
    pub fn destination(&self) -> usize {
        match self.phase {
            SlidePhase::Exiting { target, .. } => target,
            _ => self.shown,
        }
    }

    /// Head for `target`, discarding whatever transition is running.
    pub fn retarget(&mut self, target: usize) {
        self.phase = SlidePhase::Exiting { elapsed: 0.0, target };
    }

    /// Advance; returns the new section index at the moment content must swap.
    pub fn step(&mut self, dt: f32) -> Option<usize> {
        match self.phase {
            SlidePhase::Idle => None,
            SlidePhase::Exiting { elapsed, target } => {
                let elapsed = elapsed + dt;
                if elapsed >= SLIDE_HALF_SECS {
                    self.shown = target;
                    self.phase = SlidePhase::Entering { elapsed: 0.0 };
                    Some(target)
                } else {
                    self.phase = SlidePhase::Exiting { elapsed, target };
                    None
                }
            }
            SlidePhase::Entering { elapsed } => {
                let elapsed = elapsed + dt;
                self.phase = if elapsed >= SLIDE_HALF_SECS {
                    SlidePhase::Idle
                } else {
                    SlidePhase::Entering { elapsed }
                };
                None
            }
        }
    }

    /// (horizontal offset px, opacity). Leaves toward -x, enters from +x.
    pub fn sample(&self) -> (f32, f32) {
        match self.phase {
            SlidePhase::Idle => (0.0, 1.0),
            SlidePhase::Exiting { elapsed, .. } => {
                let t = (elapsed / SLIDE_HALF_SECS).clamp(0.0, 1.0);
                (-SLIDE_SHIFT_PX * t, 1.0 - t)
            }
            SlidePhase::Entering { elapsed } => {
                let t = (elapsed / SLIDE_HALF_SECS).clamp(0.0, 1.0);
                (SLIDE_SHIFT_PX * (1.0 - t), t)
            }
        }
    }
}

/// Text entities of the slide card that change with the section.
#[derive(Component, Debug, Clone, Copy)]
pub struct SlideParts {
    pub title: Entity,
    pub duration: Entity,
    pub lines: Entity,
    pub notes_panel: Entity,
    pub notes: Entity,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptPill(pub usize);

#[derive(Component)]
pub struct PreviousButton;

#[derive(Component)]
pub struct NextButton;

#[derive(Component)]
pub struct PositionLabel;

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Route::Presentation), spawn_presentation).add_systems(
            Update,
            (cursor_input, start_slide_transitions, play_slide_transitions, sync_script_controls)
                .chain()
                .in_set(PageSet)
                .after(LayoutSet)
                .run_if(in_state(Route::Presentation)),
        );
    }
}

fn pill_style(active: bool) -> (ButtonStyle, Color) {
    if active {
        (ButtonStyle::solid(palette::ACCENT_GREEN), palette::TEXT_ON_DARK)
    } else {
        (ButtonStyle::solid(palette::SURFACE), palette::TEXT_MUTED)
    }
}

fn fill_lines(ui: &mut Ui, lines: Entity, section: &ScriptSection) {
    for line in section.lines {
        if line.is_empty() {
            ui.node(lines, Node { height: Val::Px(8.0), ..default() });
        } else {
            ui.text(lines, *line, TextRole::Subheading, palette::hsl_pct(150.0, 20.0, 30.0));
        }
    }
}

pub fn spawn_presentation(mut commands: Commands, fonts: Option<Res<SiteFonts>>, logos: Option<Res<LogoImages>>) {
    let fonts = fonts.map(|f| f.clone()).unwrap_or_else(SiteFonts::fallback);
    let logos = logos.map(|l| l.clone()).unwrap_or_default();
    let cursor = ScriptCursor::new(SCRIPT.len());
    let root = commands
        .spawn((
            Name::new("presentation-page"),
            cursor,
            PageScroll::default(),
            ScrollPosition::default(),
            StateScoped(Route::Presentation),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                overflow: Overflow::scroll_y(),
                ..default()
            },
            BackgroundColor(palette::hsl_pct(0.0, 0.0, 97.0)),
        ))
        .id();
    let mut ui = Ui::new(&mut commands, &fonts);

    // Header.
    let header = ui.panel(
        root,
        Node {
            width: Val::Percent(100.0),
            flex_shrink: 0.0,
            flex_direction: FlexDirection::RowReverse,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            padding: UiRect::axes(Val::Px(24.0), Val::Px(16.0)),
            ..default()
        },
        palette::SURFACE,
        0.0,
    );
    ui.commands.entity(header).insert(NoPrint);
    ui.link(header, script::BACK_TO_SITE, SiteAction::Go(Route::Home), palette::TEXT_MUTED);
    spawn_logo(
        &mut ui,
        header,
        &logos,
        LogoOptions { variant: LogoVariant::Light, size: LogoSize::Sm, show_text: true },
    );
    ui.text(
        header,
        format!("{}{}", script::TOTAL_PREFIX, script::total_duration_label(&SCRIPT)),
        TextRole::Body,
        palette::TEXT_MUTED,
    );

    let main = ui.node(
        root,
        Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(900.0),
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Stretch,
            padding: UiRect::axes(Val::Px(16.0), Val::Px(32.0)),
            row_gap: Val::Px(32.0),
            ..default()
        },
    );
    let titles = ui.node(
        main,
        Node { flex_direction: FlexDirection::Column, align_items: AlignItems::Center, row_gap: Val::Px(8.0), ..default() },
    );
    ui.centered_text(titles, script::SCRIPT_TITLE, TextRole::Title, palette::TEXT_PRIMARY);
    ui.centered_text(titles, script::SCRIPT_SUBTITLE, TextRole::Body, palette::TEXT_MUTED);

    // Section pills.
    let pills = ui.row(main, 8.0);
    ui.commands
        .entity(pills)
        .insert(NoPrint)
        .entry::<Node>()
        .and_modify(|mut n| n.justify_content = JustifyContent::Center);
    for (i, section) in SCRIPT.iter().enumerate() {
        let (style, text) = pill_style(i == cursor.index());
        let pill = ui.button(pills, script::pill_label(i, section), SiteAction::ScriptSelect(i), style, text);
        ui.commands.entity(pill).insert(ScriptPill(i));
    }

    // Current section.
    let first = &SCRIPT[cursor.index()];
    let card = ui.card(main, Val::Percent(100.0));
    let top = ui.row(card, 12.0);
    ui.commands.entity(top).entry::<Node>().and_modify(|mut n| {
        n.width = Val::Percent(100.0);
        n.justify_content = JustifyContent::SpaceBetween;
    });
    let title = ui.text(top, first.title, TextRole::Heading, palette::TEXT_PRIMARY);
    let chip = ui.panel(
        top,
        Node { padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)), ..default() },
        palette::INFO_SURFACE,
        999.0,
    );
    let duration = ui.text(chip, format!("⏱ {}", first.duration_label()), TextRole::Small, palette::WATER_BLUE);
    let lines = ui.column(card, 12.0);
    fill_lines(&mut ui, lines, first);
    let notes_panel = ui.panel(
        card,
        Node {
            width: Val::Percent(100.0),
            padding: UiRect::all(Val::Px(16.0)),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        palette::hsl_pct(45.0, 90.0, 96.0),
        8.0,
    );
    ui.commands.entity(notes_panel).insert(BorderColor(palette::hsl_pct(45.0, 85.0, 80.0)));
    let notes = ui.text(
        notes_panel,
        first.notes.map(|n| format!("{}{n}", script::PRESENTER_TIP_PREFIX)).unwrap_or_default(),
        TextRole::Small,
        palette::hsl_pct(35.0, 80.0, 30.0),
    );
    ui.commands.entity(card).insert((
        SlideTransition::new(cursor.index()),
        SlideParts { title, duration, lines, notes_panel, notes },
        Opacity(1.0),
    ));

    // Previous / position / next.
    let controls = ui.row(main, 16.0);
    ui.commands.entity(controls).insert(NoPrint).entry::<Node>().and_modify(|mut n| {
        n.justify_content = JustifyContent::SpaceBetween;
        n.flex_wrap = FlexWrap::NoWrap;
    });
    let previous = ui.button(
        controls,
        script::PREVIOUS,
        SiteAction::ScriptPrevious,
        ButtonStyle::solid(palette::SURFACE),
        palette::TEXT_PRIMARY,
    );
    ui.commands.entity(previous).insert(PreviousButton);
    let position = ui.text(controls, cursor.position_label(), TextRole::Body, palette::TEXT_MUTED);
    ui.commands.entity(position).insert(PositionLabel);
    let next = ui.button(
        controls,
        script::NEXT,
        SiteAction::ScriptNext,
        ButtonStyle::solid(palette::ACCENT_GREEN),
        palette::TEXT_ON_DARK,
    );
    ui.commands.entity(next).insert(NextButton);
    if !cursor.can_go_previous() {
        ui.commands.entity(previous).insert(Disabled);
    }
    if !cursor.can_go_next() {
        ui.commands.entity(next).insert(Disabled);
    }

    // Full script, print layout only.
    let full = ui.column(main, 24.0);
    ui.commands.entity(full).insert(PrintOnly).entry::<Node>().and_modify(|mut n| {
        n.display = Display::None;
        n.align_items = AlignItems::Stretch;
    });
    ui.centered_text(full, script::FULL_SCRIPT_HEADING, TextRole::Heading, palette::TEXT_PRIMARY);
    for (i, section) in SCRIPT.iter().enumerate() {
        let entry = ui.column(full, 6.0);
        ui.text(entry, script_heading(i, section), TextRole::Subheading, palette::TEXT_PRIMARY);
        let body = ui.column(entry, 4.0);
        ui.commands.entity(body).insert(BorderColor(palette::ACCENT_GREEN)).entry::<Node>().and_modify(|mut n| {
            n.border = UiRect::right(Val::Px(4.0));
            n.padding = UiRect::right(Val::Px(16.0));
        });
        for line in section.lines {
            ui.text(body, *line, TextRole::Body, palette::TEXT_PRIMARY);
        }
        if let Some(note) = section.notes {
            ui.text(entry, format!("{}{note}", script::PRINT_TIP_PREFIX), TextRole::Small, palette::TEXT_MUTED);
        }
    }

    let print_row = ui.node(
        main,
        Node { justify_content: JustifyContent::Center, ..default() },
    );
    ui.commands.entity(print_row).insert(NoPrint);
    ui.button(
        print_row,
        script::PRINT_FULL,
        SiteAction::Print,
        ButtonStyle::solid(palette::CHARCOAL),
        palette::TEXT_ON_DARK,
    );
    info!(target: "ui", "presentation mounted: {} sections, {}", SCRIPT.len(), script::total_duration_label(&SCRIPT));
}

/// Buttons and arrow keys move the cursor. Arrows follow the right-to-left
/// reading order: Left is forward.
pub fn cursor_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut actions: EventReader<ActionTriggered>,
    mut cursors: Query<&mut ScriptCursor>,
) {
    let mut requests: Vec<SiteAction> = actions
        .read()
        .map(|ActionTriggered(action)| *action)
        .filter(|a| matches!(a, SiteAction::ScriptPrevious | SiteAction::ScriptNext | SiteAction::ScriptSelect(_)))
        .collect();
    if let Some(keys) = keys {
        if keys.just_pressed(KeyCode::ArrowLeft) {
            requests.push(SiteAction::ScriptNext);
        }
        if keys.just_pressed(KeyCode::ArrowRight) {
            requests.push(SiteAction::ScriptPrevious);
        }
    }
    if requests.is_empty() {
        return;
    }
    for mut cursor in &mut cursors {
        let mut next = *cursor;
        for request in &requests {
            match *request {
                SiteAction::ScriptPrevious => next.go_previous(),
                SiteAction::ScriptNext => next.go_next(),
                SiteAction::ScriptSelect(i) => next.select(i),
                _ => false,
            };
        }
        if next != *cursor {
            debug!(target: "ui", "script cursor {} -> {}", cursor.index(), next.index());
            *cursor = next;
        }
    }
}

fn start_slide_transitions(
    cursors: Query<&ScriptCursor, Changed<ScriptCursor>>,
    mut slides: Query<&mut SlideTransition>,
) {
    let Some(cursor) = cursors.iter().next() else { return };
    for mut slide in &mut slides {
        if slide.destination() != cursor.index() {
            slide.retarget(cursor.index());
        }
    }
}

fn play_slide_transitions(
    mut commands: Commands,
    time: Res<Time>,
    fonts: Option<Res<SiteFonts>>,
    mut slides: Query<(&mut SlideTransition, &SlideParts, &mut Opacity, &mut Node)>,
    mut texts: Query<&mut Text>,
    mut panels: Query<&mut Node, Without<SlideTransition>>,
) {
    let fonts = fonts.map(|f| f.clone()).unwrap_or_else(SiteFonts::fallback);
    for (mut slide, parts, mut opacity, mut node) in &mut slides {
        if slide.phase() == SlidePhase::Idle {
            continue;
        }
        if let Some(index) = slide.step(time.delta_secs()) {
            let Some(section) = SCRIPT.get(index) else { continue };
            show_section(&mut commands, &fonts, parts, section, &mut texts, &mut panels);
        }
        let (dx, alpha) = slide.sample();
        opacity.0 = alpha;
        node.left = Val::Px(dx);
    }
}

fn show_section(
    commands: &mut Commands,
    fonts: &SiteFonts,
    parts: &SlideParts,
    section: &ScriptSection,
    texts: &mut Query<&mut Text>,
    panels: &mut Query<&mut Node, Without<SlideTransition>>,
) {
    if let Ok(mut text) = texts.get_mut(parts.title) {
        text.0 = section.title.into();
    }
    if let Ok(mut text) = texts.get_mut(parts.duration) {
        text.0 = format!("⏱ {}", section.duration_label());
    }
    if let Ok(mut text) = texts.get_mut(parts.notes) {
        text.0 = section
            .notes
            .map(|n| format!("{}{n}", script::PRESENTER_TIP_PREFIX))
            .unwrap_or_default();
    }
    if let Ok(mut node) = panels.get_mut(parts.notes_panel) {
        node.display = if section.notes.is_some() { Display::Flex } else { Display::None };
    }
    commands.entity(parts.lines).despawn_related::<Children>();
    let mut ui = Ui::new(commands, fonts);
    fill_lines(&mut ui, parts.lines, section);
}

fn sync_script_controls(
    mut commands: Commands,
    cursors: Query<&ScriptCursor, Changed<ScriptCursor>>,
    mut pills: Query<(&ScriptPill, &mut ButtonStyle, &Children)>,
    mut colors: Query<&mut TextColor>,
    previous: Query<Entity, With<PreviousButton>>,
    next: Query<Entity, With<NextButton>>,
    mut labels: Query<&mut Text, With<PositionLabel>>,
) {
    let Some(cursor) = cursors.iter().next() else { return };
    for (pill, mut style, children) in &mut pills {
        let (wanted, text) = pill_style(pill.0 == cursor.index());
        *style = wanted;
        for &child in children {
            if let Ok(mut color) = colors.get_mut(child) {
                color.0 = text;
            }
        }
    }
    for entity in &previous {
        if cursor.can_go_previous() {
            commands.entity(entity).remove::<Disabled>();
        } else {
            commands.entity(entity).insert(Disabled);
        }
    }
    for entity in &next {
        if cursor.can_go_next() {
            commands.entity(entity).remove::<Disabled>();
        } else {
            commands.entity(entity).insert(Disabled);
        }
    }
    for mut label in &mut labels {
        label.0 = cursor.position_label();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut cursor = ScriptCursor::new(8);
        assert!(!cursor.go_previous());
        assert_eq!(cursor.index(), 0);
        for _ in 0..10 {
            cursor.go_next();
        }
        assert_eq!(cursor.index(), 7);
        assert!(!cursor.can_go_next());
        assert!(!cursor.go_next());
        assert!(cursor.select(3));
        assert_eq!(cursor.position_label(), "4 / 8");
        cursor.select(99);
        assert_eq!(cursor.index(), 7);
    }

    #[test]
    fn empty_cursor_never_moves() {
        let mut cursor = ScriptCursor::new(0);
        assert!(cursor.is_empty());
        assert!(!cursor.go_next());
        assert!(!cursor.select(4));
        assert_eq!(cursor.position_label(), "0 / 0");
    }

    #[test]
    fn transition_swaps_once_at_midpoint() {
        let mut slide = SlideTransition::new(0);
        slide.retarget(2);
        assert_eq!(slide.step(0.1), None);
        assert_eq!(slide.shown(), 0);
        assert_eq!(slide.step(0.1), Some(2));
        assert_eq!(slide.shown(), 2);
        assert_eq!(slide.step(0.1), None);
        assert_eq!(slide.step(0.1), None);
        assert_eq!(slide.phase(), SlidePhase::Idle);
        assert_eq!(slide.sample(), (0.0, 1.0));
    }

    #[test]
    fn retarget_replaces_running_transition() {
        let mut slide = SlideTransition::new(0);
        slide.retarget(1);
        slide.step(0.1);
        slide.retarget(5);
        assert_eq!(slide.destination(), 5);
        assert_eq!(slide.sample().1, 1.0, "restarts from fully visible");
        assert_eq!(slide.step(0.2), Some(5));
        assert_eq!(slide.shown(), 5);
    }
}
