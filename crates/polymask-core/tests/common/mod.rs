#![allow(dead_code)]

use image::{Rgb, RgbImage};

use polymask_core::vertices::Vertex;

/// Solid grey source image of the given size.
pub fn make_source(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([128, 128, 128]))
}

pub fn v(x: u32, y: u32) -> Vertex {
    Vertex::new(x, y)
}

/// Axis-aligned square with corners at `lo` and `hi`, clockwise from top-left.
pub fn square(lo: u32, hi: u32) -> Vec<Vertex> {
    vec![v(lo, lo), v(hi, lo), v(hi, hi), v(lo, hi)]
}

/// Distinct RGB values present in an image.
pub fn distinct_pixels(img: &RgbImage) -> Vec<[u8; 3]> {
    let mut seen: Vec<[u8; 3]> = img.pixels().map(|p| p.0).collect();
    seen.sort_unstable();
    seen.dedup();
    seen
}
