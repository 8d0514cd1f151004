//! Icon set generation: resized PNG copies for the macOS iconset and the
//! standalone Tauri entries, a multi-resolution Windows ICO, and ICNS
//! assembly through the external `iconutil` tool.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

pub const SOURCE_NAME: &str = "icon.png";
pub const ICONSET_NAME: &str = "icon.iconset";
pub const ICO_NAME: &str = "icon.ico";
pub const ICNS_NAME: &str = "icon.icns";

/// Entries of the macOS iconset, as `(pixel size, file name)`. The @2x names
/// carry double the pixels of their nominal point size.
pub const ICONSET_ENTRIES: &[(u32, &str)] = &[
    (16, "icon_16x16.png"),
    (32, "icon_16x16@2x.png"),
    (32, "icon_32x32.png"),
    (64, "icon_32x32@2x.png"),
    (128, "icon_128x128.png"),
    (256, "icon_128x128@2x.png"),
    (256, "icon_256x256.png"),
    (512, "icon_256x256@2x.png"),
    (512, "icon_512x512.png"),
    (1024, "icon_512x512@2x.png"),
];

/// Standalone icons referenced by tauri.conf.json, written next to the
/// source image.
pub const STANDALONE_ENTRIES: &[(u32, &str)] = &[
    (32, "32x32.png"),
    (128, "128x128.png"),
    (256, "128x128@2x.png"),
];

/// Sizes embedded in the Windows ICO container.
pub const ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

pub fn resized(img: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(img, size, size, FilterType::Lanczos3)
}

fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Writes every iconset entry into `iconset_dir`, creating it if absent.
pub fn write_iconset(img: &RgbaImage, iconset_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(iconset_dir)
        .with_context(|| format!("Failed to create {}", iconset_dir.display()))?;

    for &(size, name) in ICONSET_ENTRIES {
        write_png(&resized(img, size), &iconset_dir.join(name))?;
    }
    Ok(())
}

pub fn write_standalone(img: &RgbaImage, icon_dir: &Path) -> Result<()> {
    for &(size, name) in STANDALONE_ENTRIES {
        write_png(&resized(img, size), &icon_dir.join(name))?;
    }
    Ok(())
}

/// Writes a multi-resolution ICO containing all of [`ICO_SIZES`].
pub fn write_ico(img: &RgbaImage, path: &Path) -> Result<()> {
    let mut dir = IconDir::new(ResourceType::Icon);

    for &size in ICO_SIZES {
        let layer = IconImage::from_rgba_data(size, size, resized(img, size).into_raw());
        let entry = IconDirEntry::encode(&layer)
            .with_context(|| format!("Failed to encode {size}x{size} ICO entry"))?;
        dir.add_entry(entry);
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    dir.write(BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Assembles an ICNS from an iconset directory by invoking `iconutil`.
/// Only available on macOS; callers treat failure as non-fatal.
pub fn assemble_icns(iconset_dir: &Path, out: &Path) -> Result<()> {
    let status = Command::new("iconutil")
        .arg("-c")
        .arg("icns")
        .arg(iconset_dir)
        .arg("-o")
        .arg(out)
        .status()
        .context("Failed to run iconutil")?;

    if !status.success() {
        bail!("iconutil exited with {status}");
    }
    Ok(())
}
