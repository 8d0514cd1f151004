use anyhow::{bail, Context, Result};
use colored::Colorize;
use image::ImageFormat;

use crate::cli::Cli;
use crate::iconset::{self, ICNS_NAME, ICONSET_NAME, ICO_NAME, SOURCE_NAME};

pub fn run(cli: &Cli) -> Result<()> {
    let icon_dir = &cli.icon_dir;
    let source = icon_dir.join(SOURCE_NAME);

    if !source.exists() {
        bail!("{} not found", source.display());
    }

    let img = image::open(&source)
        .with_context(|| format!("Failed to open {}", source.display()))?
        .to_rgba8();

    // Re-save over the source so a misnamed JPEG becomes a real RGBA PNG.
    img.save_with_format(&source, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", source.display()))?;
    println!("{} Normalized {} to RGBA PNG", "✓".green(), source.display());

    let iconset_dir = icon_dir.join(ICONSET_NAME);
    iconset::write_iconset(&img, &iconset_dir)?;
    println!("{} Generated iconset PNGs", "✓".green());

    iconset::write_standalone(&img, icon_dir)?;
    println!("{} Generated standalone icons", "✓".green());

    let ico_path = icon_dir.join(ICO_NAME);
    iconset::write_ico(&img, &ico_path)?;
    println!("{} Generated {}", "✓".green(), ico_path.display());

    let icns_path = icon_dir.join(ICNS_NAME);
    match iconset::assemble_icns(&iconset_dir, &icns_path) {
        Ok(()) => println!("{} Generated {}", "✓".green(), icns_path.display()),
        Err(err) => println!("{} Failed to generate icns: {err:#}", "!".yellow()),
    }

    Ok(())
}
