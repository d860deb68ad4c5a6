//! ClearDrop site tools
//!
//! Subcommands:
//!   export-script  Print (or write) the presentation script as plain text or JSON
//!   export-poster  Print (or write) the poster copy as plain text or JSON
//!   font-check     Report Hebrew glyph coverage of a TTF/OTF file
//!   export-logo    Rasterize the drop-and-leaf mark to a PNG
//!
//! Example:
//!   cargo run --bin site_tools -- export-script --out print/script.txt

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cleardrop::core::content::poster;
use cleardrop::core::content::print::{render_poster, render_script};
use cleardrop::core::content::script::{total_duration_secs, SCRIPT, SCRIPT_TITLE};
use cleardrop::rendering::fonts::hebrew_coverage_of_file;
use cleardrop::rendering::icon::{rasterize_logo, LogoScheme};

#[derive(Parser, Debug)]
#[command(author, version, about = "ClearDrop content and asset tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export the presentation script
    ExportScript(ExportArgs),
    /// Export the poster copy
    ExportPoster(ExportArgs),
    /// Check that a font covers the Hebrew alphabet
    FontCheck(FontArgs),
    /// Write the logo mark as a PNG
    ExportLogo(LogoArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FontArgs {
    #[arg(default_value = "assets/fonts/NotoSansHebrew-Regular.ttf")]
    font: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scheme {
    Light,
    Dark,
}

#[derive(Args, Debug)]
struct LogoArgs {
    #[arg(long, default_value_t = 256)]
    size: u32,
    #[arg(long, value_enum, default_value_t = Scheme::Light)]
    scheme: Scheme,
    #[arg(long, default_value = "print/logo.png")]
    out: PathBuf,
}

fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_export_script(a: ExportArgs) -> Result<()> {
    let text = if a.json {
        serde_json::to_string_pretty(&serde_json::json!({
            "title": SCRIPT_TITLE,
            "total_secs": total_duration_secs(&SCRIPT),
            "sections": SCRIPT,
        }))?
    } else {
        render_script(&SCRIPT)
    };
    emit(&text, a.out.as_deref())
}

fn cmd_export_poster(a: ExportArgs) -> Result<()> {
    let text = if a.json {
        serde_json::to_string_pretty(&serde_json::json!({
            "title": poster::TITLE,
            "byline": poster::BYLINE,
            "problem": poster::PROBLEM,
            "solution": poster::SOLUTION,
            "layers": poster::LAYERS,
            "materials": poster::MATERIALS,
            "safety": poster::SAFETY,
            "pro": poster::PRO_UPGRADES,
            "impact": poster::IMPACT,
            "tagline": poster::TAGLINE,
        }))?
    } else {
        render_poster()
    };
    emit(&text, a.out.as_deref())
}

fn cmd_font_check(a: FontArgs) -> Result<()> {
    let cov = hebrew_coverage_of_file(&a.font).map_err(anyhow::Error::msg)?;
    println!("{}: Hebrew coverage {}/{}", a.font.display(), cov.covered, cov.total);
    if !cov.is_complete() {
        let missing: String = cov.missing.iter().collect();
        anyhow::bail!("missing glyphs: {missing}");
    }
    Ok(())
}

fn cmd_export_logo(a: LogoArgs) -> Result<()> {
    if a.size < 16 {
        anyhow::bail!("size too small (<16)");
    }
    let scheme = match a.scheme {
        Scheme::Light => LogoScheme::LIGHT,
        Scheme::Dark => LogoScheme::DARK,
    };
    let pixels = rasterize_logo(&scheme, a.size);
    let img = image::RgbaImage::from_raw(a.size, a.size, pixels).context("logo buffer has the wrong size")?;
    if let Some(dir) = a.out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    img.save(&a.out).with_context(|| format!("save {}", a.out.display()))?;
    println!("Wrote {} ({}x{})", a.out.display(), a.size, a.size);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::ExportScript(a) => cmd_export_script(a),
        Commands::ExportPoster(a) => cmd_export_poster(a),
        Commands::FontCheck(a) => cmd_font_check(a),
        Commands::ExportLogo(a) => cmd_export_logo(a),
    }
}
