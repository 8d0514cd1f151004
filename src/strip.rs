//! Background stripper: removes the near-white background of a source icon,
//! crops to the remaining content, and re-pads it centered on a transparent
//! square canvas. Matches the standard dock icon layout of roughly 824x824
//! of visual content inside a 1024x1024 box.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::flood_fill::flood_fill;

/// Somewhat aggressive distance threshold (summed over RGBA channels) so the
/// fill also catches shadows and JPEG compression artifacts around the edges.
pub const BACKGROUND_THRESHOLD: u32 = 50;

pub const CONTENT_SIZE: u32 = 824;
pub const CANVAS_SIZE: u32 = 1024;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Flood fills all four corners with transparency. The top-left fill usually
/// reaches the whole background; the other corners are seeded in case the
/// content splits the background into disconnected regions.
pub fn clear_background(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }

    for corner in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        flood_fill(img, corner, TRANSPARENT, BACKGROUND_THRESHOLD);
    }
}

/// Bounding box `(x, y, width, height)` of all pixels with nonzero alpha, or
/// `None` if the image is fully transparent.
pub fn content_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] != 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if found {
        Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    } else {
        None
    }
}

/// Full pipeline: strip the background, crop to content (skipped when
/// nothing opaque remains), scale to the content size, and center on a fresh
/// transparent canvas.
pub fn fix(img: &RgbaImage) -> RgbaImage {
    let mut img = img.clone();
    clear_background(&mut img);

    let content = match content_bounds(&img) {
        Some((x, y, w, h)) => imageops::crop_imm(&img, x, y, w, h).to_image(),
        None => img,
    };

    let resized = imageops::resize(&content, CONTENT_SIZE, CONTENT_SIZE, FilterType::Lanczos3);

    let margin = i64::from((CANVAS_SIZE - CONTENT_SIZE) / 2);
    let mut canvas = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);
    imageops::replace(&mut canvas, &resized, margin, margin);
    canvas
}
