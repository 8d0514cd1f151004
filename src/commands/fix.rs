use anyhow::{Context, Result};
use colored::Colorize;
use image::ImageFormat;

use crate::cli::Cli;
use crate::iconset::SOURCE_NAME;
use crate::strip;

pub fn run(cli: &Cli) -> Result<()> {
    let source = cli.icon_dir.join(SOURCE_NAME);

    println!("Opening {}...", source.display());
    let img = image::open(&source)
        .with_context(|| format!("Failed to open {}", source.display()))?
        .to_rgba8();

    let fixed = strip::fix(&img);

    fixed
        .save_with_format(&source, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", source.display()))?;

    println!(
        "{} Saved fixed icon ({size}x{size}, content padded) to {}",
        "✓".green(),
        source.display(),
        size = strip::CANVAS_SIZE
    );
    Ok(())
}
