use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "iconprep",
    about = "Prepare and generate application icon assets for desktop packaging"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding icon.png and receiving all generated assets
    #[arg(long, global = true, default_value = "src-tauri/icons")]
    pub icon_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strip the near-white background from icon.png, crop to content, and
    /// re-pad onto a transparent 1024x1024 canvas (overwrites the file)
    Fix,

    /// Generate the platform icon set from icon.png: macOS iconset + icns,
    /// Windows ico, and standalone PNGs
    Generate,

    /// Run fix followed by generate
    All,
}
