//! Plain-text renditions of the printable pages.

use std::fmt::Write;

use super::home::FilterLayer;
use super::poster::{self, PosterBlock};
use super::script::{ScriptSection, FULL_SCRIPT_HEADING, PRINT_TIP_PREFIX};

/// "n. title (duration)" heading used by the full printed script.
pub fn script_heading(index: usize, section: &ScriptSection) -> String {
    format!("{}. {} ({})", index + 1, section.title, section.duration_label())
}

/// The full script as printed: every section, its lines and its tip.
pub fn render_script(script: &[ScriptSection]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{FULL_SCRIPT_HEADING}\n");
    for (i, section) in script.iter().enumerate() {
        let _ = writeln!(out, "{}", script_heading(i, section));
        for line in section.lines {
            let _ = writeln!(out, "  {line}");
        }
        if let Some(notes) = section.notes {
            let _ = writeln!(out, "{PRINT_TIP_PREFIX}{notes}");
        }
        out.push('\n');
    }
    out
}

fn render_block(out: &mut String, block: &PosterBlock) {
    let _ = writeln!(out, "{}", block.heading);
    if let Some(intro) = block.intro {
        let _ = writeln!(out, "{intro}");
    }
    for bullet in block.bullets {
        let _ = writeln!(out, "• {bullet}");
    }
    if let Some(footer) = block.footer {
        let _ = writeln!(out, "{footer}");
    }
    out.push('\n');
}

fn render_layers(out: &mut String, layers: &[FilterLayer]) {
    let _ = writeln!(out, "{}", poster::LAYERS_HEADING);
    let row: Vec<String> = layers
        .iter()
        .map(|l| format!("{}: {} ({})", l.label, l.material, l.role))
        .collect();
    let _ = writeln!(out, "{}\n", row.join(" → "));
}

pub fn render_poster() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ClearDrop — {}", poster::TITLE);
    let _ = writeln!(out, "{}\n", poster::BYLINE);
    render_block(&mut out, &poster::PROBLEM);
    render_block(&mut out, &poster::SOLUTION);
    render_layers(&mut out, poster::LAYERS);
    render_block(&mut out, &poster::MATERIALS);
    render_block(&mut out, &poster::SAFETY);
    let _ = writeln!(out, "{}", poster::PRO_HEADING);
    for upgrade in poster::PRO_UPGRADES {
        let _ = writeln!(out, "• {} — {}", upgrade.title, upgrade.description);
    }
    out.push('\n');
    let _ = writeln!(out, "{}", poster::IMPACT_HEADING);
    for (figure, caption) in poster::IMPACT {
        let _ = writeln!(out, "{figure} {caption}");
    }
    let _ = writeln!(out, "\n{}", poster::TAGLINE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::script::SCRIPT;

    #[test]
    fn script_text_lists_every_section_in_order() {
        let text = render_script(&SCRIPT);
        let mut cursor = 0;
        for (i, section) in SCRIPT.iter().enumerate() {
            let heading = script_heading(i, section);
            let at = text[cursor..].find(&heading).expect("heading present in order");
            cursor += at + heading.len();
        }
        assert!(text.contains("1. פתיחה (15 שניות)"));
    }

    #[test]
    fn poster_text_carries_cost_and_tagline() {
        let text = render_poster();
        assert!(text.contains("עלות: פחות מ-10 ש\"ח!"));
        assert!(text.contains(poster::TAGLINE));
        assert!(text.contains("שכבה 2: פחם פעיל (טיהור עמוק)"));
    }
}
