// This file is part of ClearDrop.
// Copyright (C) 2025 Golan, Eitan, Daniel and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Small spawning helpers shared by every page. All rows run right-to-left.

use bevy::prelude::*;

use super::actions::{ButtonStyle, SiteAction};
use crate::core::content::home::SectionHeading;
use crate::rendering::fonts::SiteFonts;
use crate::rendering::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Display,
    Title,
    Heading,
    Subheading,
    Body,
    Small,
    Caption,
}

impl TextRole {
    pub fn size(self) -> f32 {
        match self {
            TextRole::Display => 48.0,
            TextRole::Title => 36.0,
            TextRole::Heading => 24.0,
            TextRole::Subheading => 20.0,
            TextRole::Body => 16.0,
            TextRole::Small => 14.0,
            TextRole::Caption => 12.0,
        }
    }

    pub fn bold(self) -> bool {
        matches!(self, TextRole::Display | TextRole::Title | TextRole::Heading)
    }
}

/// Spawns page nodes under a parent through `ChildOf`.
pub struct Ui<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub fonts: &'a SiteFonts,
}

impl<'a, 'w, 's> Ui<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, fonts: &'a SiteFonts) -> Self {
        Self { commands, fonts }
    }

    pub fn node(&mut self, parent: Entity, node: Node) -> Entity {
        self.commands.spawn((node, ChildOf(parent))).id()
    }

    /// Right-to-left row.
    pub fn row(&mut self, parent: Entity, gap: f32) -> Entity {
        self.node(
            parent,
            Node {
                flex_direction: FlexDirection::RowReverse,
                flex_wrap: FlexWrap::Wrap,
                align_items: AlignItems::Center,
                column_gap: Val::Px(gap),
                row_gap: Val::Px(gap),
                ..default()
            },
        )
    }

    /// Column whose children hug the right edge.
    pub fn column(&mut self, parent: Entity, gap: f32) -> Entity {
        self.node(
            parent,
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexEnd,
                row_gap: Val::Px(gap),
                ..default()
            },
        )
    }

    /// Rounded filled box.
    pub fn panel(&mut self, parent: Entity, node: Node, color: Color, radius: f32) -> Entity {
        self.commands
            .spawn((node, BackgroundColor(color), BorderRadius::all(Val::Px(radius)), ChildOf(parent)))
            .id()
    }

    /// White card with padding, used by most sections.
    pub fn card(&mut self, parent: Entity, width: Val) -> Entity {
        self.panel(
            parent,
            Node {
                width,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexEnd,
                padding: UiRect::all(Val::Px(24.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            palette::SURFACE,
            16.0,
        )
    }

    pub fn font(&self, bold: bool) -> Handle<Font> {
        if bold {
            self.fonts.bold.clone()
        } else {
            self.fonts.regular.clone()
        }
    }

    pub fn text_bundle(&self, text: String, role: TextRole, color: Color) -> impl Bundle {
        (
            Text::new(text),
            TextFont {
                font: self.font(role.bold()),
                font_size: role.size(),
                ..default()
            },
            TextColor(color),
            TextLayout::new_with_justify(JustifyText::Right),
        )
    }

    pub fn text(&mut self, parent: Entity, text: impl Into<String>, role: TextRole, color: Color) -> Entity {
        let bundle = self.text_bundle(text.into(), role, color);
        self.commands.spawn((bundle, ChildOf(parent))).id()
    }

    pub fn centered_text(&mut self, parent: Entity, text: impl Into<String>, role: TextRole, color: Color) -> Entity {
        let id = self.text(parent, text, role, color);
        self.commands
            .entity(id)
            .insert(TextLayout::new_with_justify(JustifyText::Center));
        id
    }

    /// Title plus subtitle, centred above a section body.
    pub fn heading(&mut self, parent: Entity, heading: &SectionHeading) -> Entity {
        let block = self.node(
            parent,
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                margin: UiRect::bottom(Val::Px(48.0)),
                ..default()
            },
        );
        self.centered_text(block, heading.title, TextRole::Title, palette::TEXT_PRIMARY);
        self.centered_text(block, heading.subtitle, TextRole::Subheading, palette::TEXT_MUTED);
        block
    }

    /// Bullet list with the marker on the right.
    pub fn bullets<'t>(
        &mut self,
        parent: Entity,
        items: impl IntoIterator<Item = &'t str>,
        marker: &str,
        color: Color,
    ) -> Entity {
        let list = self.column(parent, 6.0);
        for item in items {
            let row = self.row(list, 8.0);
            self.text(row, marker, TextRole::Body, palette::PRIMARY_GREEN);
            self.text(row, item, TextRole::Body, color);
        }
        list
    }

    pub fn button(
        &mut self,
        parent: Entity,
        label: impl Into<String>,
        action: SiteAction,
        style: ButtonStyle,
        text_color: Color,
    ) -> Entity {
        let bundle = self.text_bundle(label.into(), TextRole::Body, text_color);
        let button = self
            .commands
            .spawn((
                Button,
                action,
                style,
                Node {
                    padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(style.idle),
                BorderRadius::all(Val::Px(999.0)),
                ChildOf(parent),
            ))
            .id();
        self.commands.spawn((bundle, ChildOf(button)));
        button
    }

    /// Text-only button for inline links.
    pub fn link(&mut self, parent: Entity, label: impl Into<String>, action: SiteAction, color: Color) -> Entity {
        self.button(parent, label, action, ButtonStyle::link(), color)
    }

    /// Round badge with centred content.
    pub fn badge(&mut self, parent: Entity, label: impl Into<String>, size: f32, color: Color) -> Entity {
        let badge = self.panel(
            parent,
            Node {
                width: Val::Px(size),
                height: Val::Px(size),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            color,
            size * 0.5,
        );
        self.centered_text(badge, label, TextRole::Heading, palette::TEXT_ON_DARK);
        badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_bold_body_is_not() {
        assert!(TextRole::Title.bold());
        assert!(!TextRole::Body.bold());
        assert!(TextRole::Display.size() > TextRole::Title.size());
    }

    #[test]
    fn rows_spawn_under_parent_right_to_left() {
        let mut world = World::new();
        let fonts = SiteFonts::fallback();
        let parent = world.spawn(Node::default()).id();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let row = {
            let mut commands = Commands::new(&mut queue, &world);
            let mut ui = Ui::new(&mut commands, &fonts);
            let row = ui.row(parent, 4.0);
            ui.text(row, "שלום", TextRole::Body, palette::TEXT_PRIMARY);
            row
        };
        queue.apply(&mut world);
        let node = world.get::<Node>(row).expect("row node");
        assert_eq!(node.flex_direction, FlexDirection::RowReverse);
        assert_eq!(world.get::<ChildOf>(row).map(|c| c.0), Some(parent));
        let children = world.get::<Children>(row).expect("row has children");
        assert_eq!(children.len(), 1);
    }
}
