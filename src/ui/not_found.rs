use bevy::prelude::*;

use super::actions::{ButtonStyle, SiteAction};
use super::widgets::{TextRole, Ui};
use crate::app::state::Route;
use crate::rendering::fonts::SiteFonts;
use crate::rendering::palette;

pub const HEADLINE: &str = "404";
pub const MESSAGE: &str = "הדף שחיפשתם לא נמצא";
pub const HOME_LINK: &str = "חזרה לדף הבית";

pub struct NotFoundPlugin;

impl Plugin for NotFoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Route::NotFound), spawn_not_found);
    }
}

pub fn spawn_not_found(mut commands: Commands, fonts: Option<Res<SiteFonts>>) {
    let fonts = fonts.map(|f| f.clone()).unwrap_or_else(SiteFonts::fallback);
    let root = commands
        .spawn((
            Name::new("not-found-page"),
            StateScoped(Route::NotFound),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(palette::PAGE_BACKGROUND),
        ))
        .id();
    let mut ui = Ui::new(&mut commands, &fonts);
    ui.centered_text(root, HEADLINE, TextRole::Display, palette::PRIMARY_GREEN);
    ui.centered_text(root, MESSAGE, TextRole::Heading, palette::TEXT_PRIMARY);
    ui.button(
        root,
        HOME_LINK,
        SiteAction::Go(Route::Home),
        ButtonStyle::solid(palette::PRIMARY_GREEN),
        palette::TEXT_ON_DARK,
    );
    warn!(target: "route", "no page for this path; showing the not-found page");
}
