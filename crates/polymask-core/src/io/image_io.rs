use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array2;
use tracing::info;

use crate::consts::{BACKGROUND_VALUE, MASK_VALUE};
use crate::error::{PolymaskError, Result};

/// Load the source image as 8-bit RGB.
///
/// Any format the `image` crate can decode is accepted. Images with a zero
/// dimension are rejected.
pub fn load_source(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?.to_rgb8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(PolymaskError::InvalidDimensions { width, height });
    }
    info!(path = %path.display(), width, height, "Loaded source image");
    Ok(img)
}

/// Convert a coverage grid to a three-channel image: [`MASK_VALUE`] on every
/// channel inside, [`BACKGROUND_VALUE`] outside.
pub fn mask_to_rgb(coverage: &Array2<bool>) -> RgbImage {
    let (h, w) = coverage.dim();
    let inside = Rgb([MASK_VALUE; 3]);
    let outside = Rgb([BACKGROUND_VALUE; 3]);

    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let px = if coverage[[row, col]] { inside } else { outside };
            img.put_pixel(col as u32, row as u32, px);
        }
    }
    img
}

/// Save a coverage grid as an 8-bit RGB PNG, overwriting `path`.
pub fn save_mask_png(coverage: &Array2<bool>, path: &Path) -> Result<()> {
    mask_to_rgb(coverage).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
