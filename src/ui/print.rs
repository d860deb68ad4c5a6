// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Print layout for the poster and presentation pages.
//!
//! A print request hides `NoPrint` nodes and shows `PrintOnly` nodes, waits a
//! frame for layout, then captures. Native builds save a window screenshot and
//! a plain-text rendition into `print.output_dir`; the browser build opens the
//! print dialog. The screen layout comes back once the capture is queued.

use bevy::prelude::*;

use super::actions::{ActionTriggered, SiteAction};
use crate::app::state::Route;
use crate::core::config::SiteConfig;
use crate::core::content::print::{render_poster, render_script};
use crate::core::content::script::SCRIPT;
use crate::core::system::system_order::PageSet;

/// Frames the print layout is given to settle before capture.
const SETTLE_FRAMES: u8 = 1;
/// Frames the capture keeps the print layout on screen.
const CAPTURE_FRAMES: u8 = 2;

/// Hidden while printing.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct NoPrint;

/// Shown only while printing; spawn with `Display::None`.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PrintOnly;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PrintStage {
    #[default]
    Idle,
    Settling(u8),
    Capturing(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStep {
    Capture,
    Restore,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct PrintMode {
    stage: PrintStage,
    /// Completed captures in this process; numbers the output files.
    pub captures: u32,
}

impl PrintMode {
    /// Start a print; ignored while one is already running.
    pub fn request(&mut self) -> bool {
        if self.stage != PrintStage::Idle {
            return false;
        }
        self.stage = PrintStage::Settling(SETTLE_FRAMES);
        true
    }

    pub fn is_print_layout(&self) -> bool {
        self.stage != PrintStage::Idle
    }

    pub fn cancel(&mut self) {
        self.stage = PrintStage::Idle;
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> Option<PrintStep> {
        match self.stage {
            PrintStage::Idle => None,
            PrintStage::Settling(0) => {
                self.stage = PrintStage::Capturing(CAPTURE_FRAMES);
                self.captures += 1;
                Some(PrintStep::Capture)
            }
            PrintStage::Settling(n) => {
                self.stage = PrintStage::Settling(n - 1);
                None
            }
            PrintStage::Capturing(0) => {
                self.stage = PrintStage::Idle;
                Some(PrintStep::Restore)
            }
            PrintStage::Capturing(n) => {
                self.stage = PrintStage::Capturing(n - 1);
                None
            }
        }
    }
}

/// Route slug used in output file names.
fn slug(route: Route) -> &'static str {
    route.path().trim_start_matches('/')
}

/// Printable text for a route, if it has one.
pub fn print_text(route: Route) -> Option<String> {
    match route {
        Route::Poster => Some(render_poster()),
        Route::Presentation => Some(render_script(&SCRIPT)),
        _ => None,
    }
}

pub struct PrintPlugin;

impl Plugin for PrintPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PrintMode>()
            .add_systems(Update, cancel_on_route_change.run_if(state_changed::<Route>))
            .add_systems(Update, (request_print, drive_print, apply_print_layout).chain().in_set(PageSet));
    }
}

fn cancel_on_route_change(mut mode: ResMut<PrintMode>) {
    if mode.is_print_layout() {
        mode.cancel();
    }
}

fn request_print(mut actions: EventReader<ActionTriggered>, route: Res<State<Route>>, mut mode: ResMut<PrintMode>) {
    for ActionTriggered(action) in actions.read() {
        if *action != SiteAction::Print {
            continue;
        }
        if print_text(*route.get()).is_none() {
            debug!(target: "print", "{:?} has no print layout", route.get());
        } else if mode.request() {
            info!(target: "print", "print layout requested for {}", route.get().path());
        }
    }
}

fn drive_print(
    mut commands: Commands,
    mut mode: ResMut<PrintMode>,
    route: Res<State<Route>>,
    cfg: Option<Res<SiteConfig>>,
) {
    if !mode.is_print_layout() {
        return;
    }
    match mode.tick() {
        Some(PrintStep::Capture) => {
            let dir = cfg.map(|c| c.print.output_dir.clone()).unwrap_or_else(|| "print".into());
            capture(&mut commands, *route.get(), &dir, mode.captures);
        }
        Some(PrintStep::Restore) => debug!(target: "print", "print layout released"),
        None => {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn capture(commands: &mut Commands, route: Route, dir: &str, index: u32) {
    use bevy::render::view::screenshot::{save_to_disk, Screenshot};
    use std::path::Path;

    if let Err(e) = std::fs::create_dir_all(dir) {
        warn!(target: "print", "cannot create {dir}: {e}");
        return;
    }
    let stem = Path::new(dir).join(format!("{}-{index}", slug(route)));
    if let Some(text) = print_text(route) {
        let txt = stem.with_extension("txt");
        match std::fs::write(&txt, text) {
            Ok(()) => info!(target: "print", "wrote {}", txt.display()),
            Err(e) => warn!(target: "print", "write {}: {e}", txt.display()),
        }
    }
    let png = stem.with_extension("png");
    info!(target: "print", "capturing {}", png.display());
    commands.spawn(Screenshot::primary_window()).observe(save_to_disk(png));
}

#[cfg(target_arch = "wasm32")]
fn capture(_commands: &mut Commands, route: Route, _dir: &str, _index: u32) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.print() {
        warn!(target: "print", "print dialog failed for {}: {e:?}", slug(route));
    }
}

fn apply_print_layout(
    mode: Res<PrintMode>,
    mut hidden: Query<&mut Node, (With<NoPrint>, Without<PrintOnly>)>,
    mut shown: Query<&mut Node, (With<PrintOnly>, Without<NoPrint>)>,
    added: Query<(), Or<(Added<NoPrint>, Added<PrintOnly>)>>,
) {
    if !mode.is_changed() && added.is_empty() {
        return;
    }
    let printing = mode.is_print_layout();
    let (screen_only, print_only) = if printing {
        (Display::None, Display::Flex)
    } else {
        (Display::Flex, Display::None)
    };
    for mut node in &mut hidden {
        if node.display != screen_only {
            node.display = screen_only;
        }
    }
    for mut node in &mut shown {
        if node.display != print_only {
            node.display = print_only;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_runs_settle_capture_restore() {
        let mut mode = PrintMode::default();
        assert!(!mode.is_print_layout());
        assert!(mode.request());
        assert!(!mode.request(), "second request while printing is ignored");
        let steps: Vec<Option<PrintStep>> = (0..6).map(|_| mode.tick()).collect();
        assert_eq!(
            steps,
            vec![None, Some(PrintStep::Capture), None, None, Some(PrintStep::Restore), None]
        );
        assert_eq!(mode.captures, 1);
        assert!(!mode.is_print_layout());
    }

    #[test]
    fn only_printable_routes_have_text() {
        assert!(print_text(Route::Poster).is_some());
        assert!(print_text(Route::Presentation).is_some());
        assert!(print_text(Route::Home).is_none());
        assert_eq!(slug(Route::Presentation), "presentation");
    }
}
