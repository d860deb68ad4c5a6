// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::state::Route;
use crate::core::config::SiteConfig;
use crate::core::system::system_order::PageSet;

/// Request to show another page.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigate(pub Route);

/// Path the app should open on; inserted by the binary from `--route`.
#[derive(Resource, Debug, Clone)]
pub struct InitialPath(pub String);

pub struct RouterPlugin;

impl Plugin for RouterPlugin {
    fn build(&self, app: &mut App) {
        let path = app
            .world()
            .get_resource::<InitialPath>()
            .map(|p| p.0.clone())
            .or_else(browser_path)
            .unwrap_or_else(|| "/".to_string());
        let initial = Route::from_path(&path);
        info!(target: "route", "initial path '{path}' -> {initial:?}");

        app.insert_state(initial)
            .add_event::<Navigate>()
            .add_systems(Update, apply_navigation.in_set(PageSet))
            .add_systems(Update, sync_window_title.run_if(state_changed::<Route>));
    }
}

fn apply_navigation(
    mut requests: EventReader<Navigate>,
    current: Res<State<Route>>,
    mut next: ResMut<NextState<Route>>,
) {
    // Last request in a frame wins.
    let Some(Navigate(route)) = requests.read().last().copied() else { return };
    if route == *current.get() {
        debug!(target: "route", "already on {route:?}");
        return;
    }
    info!(target: "route", "{:?} -> {route:?} ({})", current.get(), route.path());
    if let Some(path) = route.history_path() {
        push_browser_path(path);
    }
    next.set(route);
}

fn sync_window_title(route: Res<State<Route>>, cfg: Option<Res<SiteConfig>>, mut windows: Query<&mut Window>) {
    let home = cfg.map(|c| c.window.title.clone()).unwrap_or_default();
    let title = route.get().title(&home);
    if let Ok(mut window) = windows.single_mut() {
        if window.title != title {
            window.title = title;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_path() -> Option<String> {
    let pathname = web_sys::window()?.location().pathname().ok()?;
    js_sys::decode_uri(&pathname).ok().map(String::from).or(Some(pathname))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn push_browser_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else { return };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
        warn!(target: "route", "pushState failed: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn push_browser_path(_path: &str) {}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn app_at(path: &str) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(InitialPath(path.into()))
            .add_plugins(RouterPlugin);
        app.update();
        app
    }

    #[test]
    fn initial_path_selects_route() {
        let app = app_at("/presentation");
        assert_eq!(*app.world().resource::<State<Route>>().get(), Route::Presentation);
        let app = app_at("/nope");
        assert_eq!(*app.world().resource::<State<Route>>().get(), Route::NotFound);
    }

    #[test]
    fn navigate_event_changes_route() {
        let mut app = app_at("/");
        app.world_mut().send_event(Navigate(Route::Poster));
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<Route>>().get(), Route::Poster);
    }
}
