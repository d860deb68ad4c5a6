//! Clickable page elements and the actions they trigger.

use bevy::prelude::*;

use crate::app::router::Navigate;
use crate::app::state::Route;
use crate::core::content::SectionId;
use crate::core::system::system_order::InputSet;
use crate::rendering::palette;

/// What pressing a button does.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteAction {
    Go(Route),
    ScrollTo(SectionId),
    ScrollTop,
    ToggleMenu,
    Print,
    ScriptPrevious,
    ScriptNext,
    ScriptSelect(usize),
}

impl SiteAction {
    /// Resolve a link target: `/path` navigates, `#anchor` scrolls.
    pub fn from_href(href: &str) -> Option<Self> {
        if let Some(route) = Route::from_href(href) {
            return Some(SiteAction::Go(route));
        }
        SectionId::from_href(href).map(SiteAction::ScrollTo)
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTriggered(pub SiteAction);

/// Button ignores presses and renders greyed out.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Disabled;

/// Background colours per interaction state.
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonStyle {
    pub idle: Color,
    pub hover: Color,
    pub pressed: Color,
}

impl ButtonStyle {
    pub fn solid(color: Color) -> Self {
        Self {
            idle: color,
            hover: palette::fade(color, 0.85),
            pressed: palette::fade(color, 0.7),
        }
    }

    /// Transparent until hovered; used for text links.
    pub fn link() -> Self {
        Self {
            idle: Color::NONE,
            hover: palette::fade(palette::PRIMARY_GREEN, 0.1),
            pressed: palette::fade(palette::PRIMARY_GREEN, 0.2),
        }
    }

    pub fn color_for(&self, interaction: Interaction, disabled: bool) -> Color {
        if disabled {
            return palette::DISABLED;
        }
        match interaction {
            Interaction::Pressed => self.pressed,
            Interaction::Hovered => self.hover,
            Interaction::None => self.idle,
        }
    }
}

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ActionTriggered>()
            .add_systems(
                Update,
                ((dispatch_presses, forward_route_actions).chain(), paint_buttons).in_set(InputSet),
            );
    }
}

fn dispatch_presses(
    buttons: Query<(&Interaction, &SiteAction, Has<Disabled>), (Changed<Interaction>, With<Button>)>,
    mut out: EventWriter<ActionTriggered>,
) {
    for (interaction, action, disabled) in &buttons {
        if *interaction == Interaction::Pressed && !disabled {
            debug!(target: "ui", "pressed {action:?}");
            out.write(ActionTriggered(*action));
        }
    }
}

fn paint_buttons(mut buttons: Query<(&Interaction, &ButtonStyle, Has<Disabled>, &mut BackgroundColor)>) {
    for (interaction, style, disabled, mut bg) in &mut buttons {
        bg.set_if_neq(BackgroundColor(style.color_for(*interaction, disabled)));
    }
}

fn forward_route_actions(mut actions: EventReader<ActionTriggered>, mut navigate: EventWriter<Navigate>) {
    for ActionTriggered(action) in actions.read() {
        if let SiteAction::Go(route) = action {
            navigate.write(Navigate(*route));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_become_actions() {
        assert_eq!(SiteAction::from_href("/poster"), Some(SiteAction::Go(Route::Poster)));
        assert_eq!(
            SiteAction::from_href("#impact"),
            Some(SiteAction::ScrollTo(SectionId::Impact))
        );
        assert_eq!(SiteAction::from_href("#unknown"), None);
    }

    #[test]
    fn disabled_overrides_interaction() {
        let style = ButtonStyle::solid(palette::PRIMARY_GREEN);
        assert_eq!(style.color_for(Interaction::Pressed, true), palette::DISABLED);
        assert_eq!(style.color_for(Interaction::None, false), palette::PRIMARY_GREEN);
    }
}
