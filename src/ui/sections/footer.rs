use bevy::prelude::*;

use super::{PageContext, CONTENT_WIDTH};
use crate::app::state::Route;
use crate::core::content::home::{footer, TAGLINE};
use crate::core::content::nav::FOOTER_LINKS;
use crate::rendering::palette;
use crate::ui::actions::SiteAction;
use crate::ui::logo::{spawn_logo, LogoOptions, LogoSize, LogoVariant};
use crate::ui::widgets::{TextRole, Ui};

/// Proleptic Gregorian year of a day count since 1970-01-01.
pub fn year_from_unix_days(days: i64) -> i32 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    year as i32
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();
    year_from_unix_days(secs.div_euclid(86_400))
}

#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

fn link_column(ui: &mut Ui, parent: Entity, heading: &str) -> Entity {
    let column = ui.column(parent, 8.0);
    ui.commands.entity(column).entry::<Node>().and_modify(|mut n| n.min_width = Val::Px(200.0));
    ui.text(column, heading, TextRole::Subheading, palette::TEXT_ON_DARK);
    column
}

pub fn spawn(ui: &mut Ui, page: Entity, ctx: &PageContext) -> Entity {
    let link_color = palette::hsl_pct(152.0, 60.0, 65.0);
    let muted = palette::hsl_pct(150.0, 15.0, 65.0);
    let block = ui
        .commands
        .spawn((
            Name::new("footer"),
            Node {
                width: Val::Percent(100.0),
                flex_shrink: 0.0,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(24.0), Val::Px(48.0)),
                ..default()
            },
            BackgroundColor(palette::FOOTER_BACKGROUND),
            ChildOf(page),
        ))
        .id();
    let content = ui.node(
        block,
        Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(CONTENT_WIDTH),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(32.0),
            ..default()
        },
    );

    let columns = ui.row(content, 48.0);
    ui.commands.entity(columns).entry::<Node>().and_modify(|mut n| {
        n.justify_content = JustifyContent::SpaceBetween;
        n.align_items = AlignItems::FlexStart;
    });

    let brand = ui.column(columns, 12.0);
    spawn_logo(
        ui,
        brand,
        ctx.logos,
        LogoOptions { variant: LogoVariant::Dark, size: LogoSize::Md, show_text: true },
    );
    ui.text(brand, TAGLINE, TextRole::Small, muted);

    let quick = link_column(ui, columns, footer::QUICK_LINKS_HEADING);
    for item in &FOOTER_LINKS {
        if let Some(action) = SiteAction::from_href(item.href) {
            ui.link(quick, item.label, action, link_color);
        }
    }

    let resources = link_column(ui, columns, footer::RESOURCES_HEADING);
    ui.link(resources, footer::POSTER_LINK, SiteAction::Go(Route::Poster), link_color);
    ui.link(resources, footer::SCRIPT_LINK, SiteAction::Go(Route::Presentation), link_color);

    let swatches = link_column(ui, columns, footer::PALETTE_HEADING);
    let chips = ui.row(swatches, 8.0);
    for (label, code) in palette::SWATCHES {
        let chip = ui.panel(
            chips,
            Node { width: Val::Px(32.0), height: Val::Px(32.0), ..default() },
            palette::hex(code),
            8.0,
        );
        ui.commands.entity(chip).insert(Name::new(format!("swatch:{label}")));
    }

    let bottom = ui.panel(
        content,
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::top(Val::Px(24.0)),
            border: UiRect::top(Val::Px(1.0)),
            ..default()
        },
        Color::NONE,
        0.0,
    );
    ui.commands.entity(bottom).insert(BorderColor(palette::hsl_pct(150.0, 20.0, 25.0)));
    ui.centered_text(bottom, footer::credit(current_year()), TextRole::Small, palette::hsl_pct(150.0, 15.0, 55.0));
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_days_map_to_years() {
        assert_eq!(year_from_unix_days(0), 1970);
        assert_eq!(year_from_unix_days(-1), 1969);
        assert_eq!(year_from_unix_days(19_722), 2023); // 2023-12-31
        assert_eq!(year_from_unix_days(19_723), 2024); // 2024-01-01
        assert_eq!(year_from_unix_days(11_016), 2000); // 2000-02-29
    }
}
