use image::{Rgba, RgbaImage};

use iconprep::cli::{Cli, Commands};
use iconprep::commands;
use iconprep::flood_fill::flood_fill;
use iconprep::strip::{self, CANVAS_SIZE};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// White canvas with a solid red square at the given rectangle.
fn white_with_red_square(size: u32, x0: u32, y0: u32, side: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, WHITE);
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            img.put_pixel(x, y, RED);
        }
    }
    img
}

#[test]
fn flood_fill_clears_connected_near_white() {
    let mut img = white_with_red_square(8, 3, 3, 2);
    // Near-white artifact next to the background, within threshold 50.
    img.put_pixel(1, 1, Rgba([250, 250, 250, 255]));

    strip::clear_background(&mut img);

    assert_eq!(*img.get_pixel(0, 0), CLEAR);
    assert_eq!(*img.get_pixel(1, 1), CLEAR);
    assert_eq!(*img.get_pixel(7, 7), CLEAR);
    assert_eq!(*img.get_pixel(3, 3), RED);
    assert_eq!(*img.get_pixel(4, 4), RED);
}

#[test]
fn flood_fill_respects_threshold_boundary() {
    let mut img = RgbaImage::from_pixel(4, 1, WHITE);
    img.put_pixel(1, 0, Rgba([255, 255, 205, 255])); // distance 50 from white
    img.put_pixel(3, 0, Rgba([255, 255, 204, 255])); // distance 51

    flood_fill(&mut img, (0, 0), CLEAR, 50);

    assert_eq!(*img.get_pixel(0, 0), CLEAR);
    assert_eq!(*img.get_pixel(1, 0), CLEAR);
    assert_eq!(*img.get_pixel(2, 0), CLEAR);
    assert_eq!(*img.get_pixel(3, 0), Rgba([255, 255, 204, 255]));
}

#[test]
fn flood_fill_preserves_enclosed_region() {
    // Red ring with a white center: the center is not connected to the
    // outside background and must survive the corner fill.
    let mut img = RgbaImage::from_pixel(7, 7, WHITE);
    for y in 2..5 {
        for x in 2..5 {
            img.put_pixel(x, y, RED);
        }
    }
    img.put_pixel(3, 3, WHITE);

    strip::clear_background(&mut img);

    assert_eq!(*img.get_pixel(0, 0), CLEAR);
    assert_eq!(*img.get_pixel(2, 2), RED);
    assert_eq!(*img.get_pixel(3, 3), WHITE);
}

#[test]
fn flood_fill_is_noop_when_seed_equals_fill() {
    let mut img = RgbaImage::from_pixel(3, 1, CLEAR);
    // Within threshold of the transparent seed, but the early return must
    // keep it untouched.
    img.put_pixel(1, 0, Rgba([0, 0, 0, 40]));

    flood_fill(&mut img, (0, 0), CLEAR, 50);

    assert_eq!(*img.get_pixel(1, 0), Rgba([0, 0, 0, 40]));
}

#[test]
fn flood_fill_is_noop_when_seed_is_within_threshold_of_fill() {
    // Distance 50 from the transparent fill color: the whole call is
    // skipped, the row is not wiped.
    let dark = Rgba([10, 10, 10, 20]);
    let mut img = RgbaImage::from_pixel(3, 1, dark);

    flood_fill(&mut img, (0, 0), CLEAR, 50);

    assert_eq!(*img.get_pixel(0, 0), dark);
    assert_eq!(*img.get_pixel(2, 0), dark);
}

#[test]
fn flood_fill_ignores_out_of_bounds_seed() {
    let mut img = RgbaImage::from_pixel(2, 2, WHITE);

    flood_fill(&mut img, (5, 5), CLEAR, 50);

    assert_eq!(*img.get_pixel(0, 0), WHITE);
    assert_eq!(*img.get_pixel(1, 1), WHITE);
}

#[test]
fn content_bounds_finds_opaque_rectangle() {
    let mut img = RgbaImage::from_pixel(10, 10, CLEAR);
    for y in 3..6 {
        for x in 2..5 {
            img.put_pixel(x, y, RED);
        }
    }

    assert_eq!(strip::content_bounds(&img), Some((2, 3, 3, 3)));
}

#[test]
fn content_bounds_of_transparent_image_is_none() {
    let img = RgbaImage::from_pixel(10, 10, CLEAR);
    assert_eq!(strip::content_bounds(&img), None);
}

#[test]
fn fix_output_is_always_canvas_sized() {
    let img = white_with_red_square(64, 24, 24, 16);
    let fixed = strip::fix(&img);

    assert_eq!(fixed.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    assert_eq!(*fixed.get_pixel(0, 0), CLEAR);
    assert_eq!(*fixed.get_pixel(CANVAS_SIZE - 1, CANVAS_SIZE - 1), CLEAR);
    // Content scaled up and centered.
    let center = *fixed.get_pixel(CANVAS_SIZE / 2, CANVAS_SIZE / 2);
    assert_eq!(center, RED);
}

#[test]
fn fix_is_idempotent_after_first_pass() {
    let img = white_with_red_square(64, 10, 10, 30);

    let once = strip::fix(&img);
    let twice = strip::fix(&once);

    assert_eq!(twice.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    assert_eq!(strip::content_bounds(&once), strip::content_bounds(&twice));
}

#[test]
fn fix_without_content_yields_transparent_canvas() {
    let img = RgbaImage::from_pixel(32, 32, WHITE);
    let fixed = strip::fix(&img);

    assert_eq!(fixed.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    assert_eq!(strip::content_bounds(&fixed), None);
}

#[test]
fn fix_command_overwrites_source_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    white_with_red_square(64, 24, 24, 16).save(&source).unwrap();

    let cli = Cli {
        command: Commands::Fix,
        icon_dir: dir.path().to_path_buf(),
    };
    commands::fix::run(&cli).unwrap();

    assert_eq!(
        image::image_dimensions(&source).unwrap(),
        (CANVAS_SIZE, CANVAS_SIZE)
    );
}

#[test]
fn fix_command_fails_on_missing_source() {
    let dir = tempfile::tempdir().unwrap();

    let cli = Cli {
        command: Commands::Fix,
        icon_dir: dir.path().to_path_buf(),
    };
    assert!(commands::fix::run(&cli).is_err());
}
