//! Fixed header: anchor links, a "scrolled" style past a threshold and a
//! slide-in menu for narrow windows.

use bevy::prelude::*;

use super::actions::{ActionTriggered, ButtonStyle, SiteAction};
use super::logo::{spawn_logo, LogoImages, LogoOptions, LogoSize, LogoVariant};
use super::scroll::PageLayout;
use super::widgets::{TextRole, Ui};
use crate::app::state::{HomePhase, Route};
use crate::core::config::{NavigationConfig, SiteConfig};
use crate::core::content::nav::{DESKTOP_POSTER_LABEL, NAV_ITEMS, ROUTE_ITEMS};
use crate::core::system::system_order::{LayoutSet, PageSet};
use crate::rendering::fonts::SiteFonts;
use crate::rendering::palette;

const HEADER_HEIGHT: f32 = 72.0;
const MENU_WIDTH: f32 = 280.0;

/// Header state; lives on the header entity.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct NavigationShell {
    threshold: f32,
    scrolled: bool,
    menu_open: bool,
    /// 0 = menu fully hidden, 1 = fully shown.
    menu_slide: f32,
}

impl NavigationShell {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, scrolled: false, menu_open: false, menu_slide: 0.0 }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_slide(&self) -> f32 {
        self.menu_slide
    }

    /// Returns true when the scrolled flag flipped.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any menu selection closes the menu.
    pub fn select_item(&mut self) {
        self.menu_open = false;
    }

    /// Move the slide toward the open/closed end; `secs` is the full slide time.
    pub fn step_slide(&mut self, dt: f32, secs: f32) {
        let goal = if self.menu_open { 1.0 } else { 0.0 };
        let step = if secs > 0.0 { dt / secs } else { 1.0 };
        self.menu_slide = if goal > self.menu_slide {
            (self.menu_slide + step).min(goal)
        } else {
            (self.menu_slide - step).max(goal)
        };
    }
}

#[derive(Component)]
struct DesktopOnly;

#[derive(Component)]
struct MobileOnly;

#[derive(Component)]
struct MobileMenu;

#[derive(Component)]
struct MenuToggleGlyph;

pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(HomePhase::Content), spawn_header).add_systems(
            Update,
            (track_scroll, menu_actions, slide_menu, responsive_header, style_header)
                .chain()
                .in_set(PageSet)
                .after(LayoutSet)
                .run_if(in_state(HomePhase::Content)),
        );
    }
}

fn spawn_header(
    mut commands: Commands,
    fonts: Option<Res<SiteFonts>>,
    logos: Option<Res<LogoImages>>,
    cfg: Option<Res<SiteConfig>>,
) {
    let fonts = fonts.map(|f| f.clone()).unwrap_or_else(SiteFonts::fallback);
    let logos = logos.map(|l| l.clone()).unwrap_or_default();
    let nav_cfg = cfg.map(|c| c.navigation.clone()).unwrap_or_default();
    spawn_navigation(&mut commands, &fonts, &logos, &nav_cfg);
}

pub fn spawn_navigation(
    commands: &mut Commands,
    fonts: &SiteFonts,
    logos: &LogoImages,
    cfg: &NavigationConfig,
) -> Entity {
    let header = commands
        .spawn((
            Name::new("navigation"),
            NavigationShell::new(cfg.scroll_threshold),
            StateScoped(HomePhase::Content),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(HEADER_HEIGHT),
                flex_direction: FlexDirection::RowReverse,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::horizontal(Val::Px(24.0)),
                border: UiRect::bottom(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
            BorderColor(Color::NONE),
            GlobalZIndex(50),
        ))
        .id();

    let mut ui = Ui::new(commands, fonts);
    let brand = spawn_logo(
        &mut ui,
        header,
        logos,
        LogoOptions { variant: LogoVariant::Light, size: LogoSize::Sm, show_text: true },
    );
    ui.commands.entity(brand).insert((Button, SiteAction::ScrollTop, ButtonStyle::link(), BackgroundColor(Color::NONE)));

    let links = ui.row(header, 4.0);
    ui.commands.entity(links).insert(DesktopOnly);
    for item in NAV_ITEMS {
        if let Some(action) = SiteAction::from_href(item.href) {
            ui.link(links, item.label, action, palette::TEXT_PRIMARY);
        }
    }
    ui.button(
        links,
        DESKTOP_POSTER_LABEL,
        SiteAction::Go(Route::Poster),
        ButtonStyle::solid(palette::PRIMARY_GREEN),
        palette::TEXT_ON_DARK,
    );

    let toggle_style = ButtonStyle::link();
    let toggle = ui
        .commands
        .spawn((
            MobileOnly,
            Button,
            SiteAction::ToggleMenu,
            toggle_style,
            Node {
                display: Display::None,
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(toggle_style.idle),
            BorderRadius::all(Val::Px(8.0)),
            ChildOf(header),
        ))
        .id();
    let glyph = ui.text(toggle, "☰", TextRole::Heading, palette::TEXT_PRIMARY);
    ui.commands.entity(glyph).insert(MenuToggleGlyph);

    let menu = ui.panel(
        header,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(HEADER_HEIGHT),
            right: Val::Px(-MENU_WIDTH),
            width: Val::Px(MENU_WIDTH),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            padding: UiRect::all(Val::Px(16.0)),
            row_gap: Val::Px(4.0),
            ..default()
        },
        palette::SURFACE,
        12.0,
    );
    ui.commands.entity(menu).insert(MobileMenu);
    for item in NAV_ITEMS.iter().chain(ROUTE_ITEMS.iter()) {
        if let Some(action) = SiteAction::from_href(item.href) {
            ui.link(menu, item.label, action, palette::TEXT_PRIMARY);
        }
    }
    header
}

pub fn track_scroll(layout: Res<PageLayout>, mut shells: Query<&mut NavigationShell>) {
    for mut shell in &mut shells {
        // Compare first so an unchanged offset does not mark the shell changed.
        let scrolled = layout.scroll > shell.threshold;
        if scrolled != shell.scrolled && shell.on_scroll(layout.scroll) {
            debug!(target: "nav", "scrolled={} at {:.0}px", shell.scrolled, layout.scroll);
        }
    }
}

fn menu_actions(mut actions: EventReader<ActionTriggered>, mut shells: Query<&mut NavigationShell>) {
    for ActionTriggered(action) in actions.read() {
        for mut shell in &mut shells {
            match action {
                SiteAction::ToggleMenu => shell.toggle_menu(),
                SiteAction::ScrollTo(_) | SiteAction::ScrollTop | SiteAction::Go(_) if shell.menu_open => {
                    shell.select_item()
                }
                _ => {}
            }
        }
    }
}

fn slide_menu(
    time: Res<Time>,
    cfg: Option<Res<SiteConfig>>,
    mut shells: Query<&mut NavigationShell>,
    mut menus: Query<&mut Node, With<MobileMenu>>,
    mut glyphs: Query<&mut Text, With<MenuToggleGlyph>>,
) {
    let secs = cfg.map(|c| c.navigation.menu_slide_secs).unwrap_or(0.3);
    for mut shell in &mut shells {
        let goal = if shell.menu_open { 1.0 } else { 0.0 };
        if shell.menu_slide == goal {
            continue;
        }
        shell.step_slide(time.delta_secs(), secs);
        let slide = shell.menu_slide;
        for mut node in &mut menus {
            node.right = Val::Px(-MENU_WIDTH * (1.0 - slide));
        }
        for mut text in &mut glyphs {
            text.0 = if shell.menu_open { "✕" } else { "☰" }.into();
        }
    }
}

fn responsive_header(
    windows: Query<&Window>,
    cfg: Option<Res<SiteConfig>>,
    mut desktop: Query<&mut Node, (With<DesktopOnly>, Without<MobileOnly>)>,
    mut mobile: Query<&mut Node, (With<MobileOnly>, Without<DesktopOnly>)>,
    mut shells: Query<&mut NavigationShell>,
) {
    let Ok(window) = windows.single() else { return };
    let breakpoint = cfg.map(|c| c.navigation.mobile_breakpoint).unwrap_or(768.0);
    let is_mobile = window.width() < breakpoint;
    let (desktop_display, mobile_display) = if is_mobile {
        (Display::None, Display::Flex)
    } else {
        (Display::Flex, Display::None)
    };
    for mut node in &mut desktop {
        if node.display != desktop_display {
            node.display = desktop_display;
        }
    }
    for mut node in &mut mobile {
        if node.display != mobile_display {
            node.display = mobile_display;
        }
    }
    if !is_mobile {
        for mut shell in &mut shells {
            if shell.menu_open {
                shell.select_item();
            }
        }
    }
}

pub fn style_header(mut headers: Query<(&NavigationShell, &mut BackgroundColor, &mut BorderColor), Changed<NavigationShell>>) {
    for (shell, mut bg, mut border) in &mut headers {
        let (fill, edge) = if shell.scrolled {
            (palette::fade(palette::SURFACE, 0.95), palette::fade(palette::PRIMARY_GREEN, 0.15))
        } else {
            (Color::NONE, Color::NONE)
        };
        bg.set_if_neq(BackgroundColor(fill));
        border.set_if_neq(BorderColor(edge));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut shell = NavigationShell::new(50.0);
        assert!(!shell.on_scroll(0.0));
        assert!(!shell.scrolled());
        assert!(!shell.on_scroll(50.0));
        assert!(shell.on_scroll(51.0));
        assert!(shell.scrolled());
        assert!(shell.on_scroll(10.0));
        assert!(!shell.scrolled());
    }

    #[test]
    fn selecting_closes_menu() {
        let mut shell = NavigationShell::new(50.0);
        shell.toggle_menu();
        assert!(shell.menu_open());
        shell.select_item();
        assert!(!shell.menu_open());
        shell.select_item();
        assert!(!shell.menu_open());
    }

    #[test]
    fn slide_reaches_ends() {
        let mut shell = NavigationShell::new(50.0);
        shell.toggle_menu();
        for _ in 0..30 {
            shell.step_slide(1.0 / 60.0, 0.3);
        }
        assert_eq!(shell.menu_slide(), 1.0);
        shell.select_item();
        shell.step_slide(1.0, 0.3);
        assert_eq!(shell.menu_slide(), 0.0);
    }
}
