//! Threshold flood fill over an RGBA buffer. Pixels 4-connected to the seed
//! whose color is within `threshold` of the seed's original color are
//! replaced with the fill color. Used to knock out near-white icon
//! backgrounds (and the compression artifacts around them) from the corners.

use std::collections::VecDeque;

use bit_vec::BitVec;
use image::{Rgba, RgbaImage};

/// Flood fill starting at `seed`. The match reference is the color found at
/// the seed before filling; a pixel matches when the sum of its absolute
/// per-channel differences from that reference is `<= threshold`.
///
/// No-op when the seed lies outside the image or its color is already within
/// `threshold` of `fill`, so seeding every corner of an image whose
/// background is one connected region is cheap.
pub fn flood_fill(img: &mut RgbaImage, seed: (u32, u32), fill: Rgba<u8>, threshold: u32) {
    let (w, h) = img.dimensions();

    let (sx, sy) = seed;
    if sx >= w || sy >= h {
        return;
    }

    let background = *img.get_pixel(sx, sy);
    if color_diff(fill, background) <= threshold {
        return;
    }

    let mut visited = Mask2::new(w, h);
    let mut to_visit = VecDeque::new();

    visited.set(sx, sy);
    img.put_pixel(sx, sy, fill);
    to_visit.push_back((sx, sy));

    while let Some((x, y)) = to_visit.pop_front() {
        for (x_next, y_next) in adjacent_positions(x, y, w, h) {
            if visited.get(x_next, y_next) {
                continue;
            }
            visited.set(x_next, y_next);

            if color_diff(*img.get_pixel(x_next, y_next), background) <= threshold {
                img.put_pixel(x_next, y_next, fill);
                to_visit.push_back((x_next, y_next));
            }
        }
    }
}

fn adjacent_positions(x: u32, y: u32, w: u32, h: u32) -> impl Iterator<Item = (u32, u32)> {
    DIRECTIONS.iter().filter_map(move |(x_offset, y_offset)| {
        let x_next = (x as i64) + x_offset;
        let y_next = (y as i64) + y_offset;

        if x_next < 0 || y_next < 0 || x_next >= w as i64 || y_next >= h as i64 {
            return None;
        }

        Some((x_next as u32, y_next as u32))
    })
}

fn color_diff(a: Rgba<u8>, b: Rgba<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&ca, &cb)| (ca as i32 - cb as i32).unsigned_abs())
        .sum()
}

const DIRECTIONS: &[(i64, i64)] = &[(1, 0), (-1, 0), (0, 1), (0, -1)];

struct Mask2 {
    size: (u32, u32),
    data: BitVec,
}

impl Mask2 {
    fn new(w: u32, h: u32) -> Self {
        Self {
            size: (w, h),
            data: BitVec::from_elem((w * h) as usize, false),
        }
    }

    fn get(&self, x: u32, y: u32) -> bool {
        let index = x + y * self.size.0;
        self.data.get(index as usize).unwrap_or(false)
    }

    fn set(&mut self, x: u32, y: u32) {
        let index = x + y * self.size.0;
        self.data.set(index as usize, true);
    }
}
