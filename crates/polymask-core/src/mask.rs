//! Polygon rasterization and mask export.
//!
//! The fill samples every pixel at its centre and keeps those with an odd
//! number of polygon edges to their left (even-odd rule), then sets every
//! pixel the outline passes through. The outline includes the closing edge
//! from the last vertex back to the first, so the result matches an integer
//! polygon fill that includes its boundary.
//!
//! A vertex list whose last entry repeats the first is ordinary input (the
//! user clicks back onto the start point); the repeat only adds a
//! zero-length edge.

use std::path::{Path, PathBuf};

use imageproc::drawing::BresenhamLineIter;
use ndarray::Array2;
use rayon::prelude::*;
use tracing::info;

use crate::consts::{MIN_POLYGON_VERTICES, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{PolymaskError, Result};
use crate::io::image_io::save_mask_png;
use crate::vertices::Vertex;

/// Outcome of a successful [`export_mask`].
#[derive(Clone, Debug, PartialEq)]
pub struct MaskWriteResult {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Number of pixels set to the mask value.
    pub filled_pixels: usize,
}

/// Rasterize the closed polygon through `vertices` into a `height` x `width`
/// coverage grid (`true` = inside).
///
/// Any vertex count is accepted: an empty list yields an empty mask, one or
/// two vertices yield only their outline. Vertices outside the grid are
/// clipped.
pub fn rasterize_polygon(vertices: &[Vertex], width: u32, height: u32) -> Array2<bool> {
    let h = height as usize;
    let w = width as usize;
    let mut coverage = Array2::from_elem((h, w), false);

    if vertices.is_empty() || h == 0 || w == 0 {
        return coverage;
    }

    let spans: Vec<Vec<(usize, usize)>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|row| row_spans(vertices, row, w))
            .collect()
    } else {
        (0..h).map(|row| row_spans(vertices, row, w)).collect()
    };

    for (row, row_spans) in spans.iter().enumerate() {
        for &(start, end) in row_spans {
            for col in start..end {
                coverage[[row, col]] = true;
            }
        }
    }

    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        draw_segment(&mut coverage, from, to);
    }

    coverage
}

/// Check the vertex count, rasterize the polygon and write it to `path` as a
/// three-channel PNG (255 inside, 0 outside), replacing any existing file.
///
/// With fewer than [`MIN_POLYGON_VERTICES`] vertices nothing is written and
/// [`PolymaskError::TooFewVertices`] is returned.
pub fn export_mask(
    vertices: &[Vertex],
    width: u32,
    height: u32,
    path: &Path,
) -> Result<MaskWriteResult> {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return Err(PolymaskError::TooFewVertices {
            count: vertices.len(),
        });
    }
    if width == 0 || height == 0 {
        return Err(PolymaskError::InvalidDimensions { width, height });
    }

    let coverage = rasterize_polygon(vertices, width, height);
    let filled_pixels = coverage.iter().filter(|&&inside| inside).count();

    save_mask_png(&coverage, path)?;
    info!(
        path = %path.display(),
        width,
        height,
        vertices = vertices.len(),
        filled_pixels,
        "Three-channel mask saved"
    );

    Ok(MaskWriteResult {
        path: path.to_path_buf(),
        width,
        height,
        filled_pixels,
    })
}

/// Half-open column ranges of `row` whose pixel centres lie inside the
/// polygon under the even-odd rule.
fn row_spans(vertices: &[Vertex], row: usize, width: usize) -> Vec<(usize, usize)> {
    let yc = row as f64 + 0.5;
    let n = vertices.len();
    let mut crossings: Vec<f64> = Vec::new();

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let (ay, by) = (a.y as f64, b.y as f64);

        // Half-open in y so a vertex shared by two edges is counted once.
        if (ay <= yc) == (by <= yc) {
            continue;
        }

        let t = (yc - ay) / (by - ay);
        crossings.push(a.x as f64 + t * (b.x as f64 - a.x as f64));
    }

    crossings.sort_by(|a, b| a.total_cmp(b));

    crossings
        .chunks_exact(2)
        .filter_map(|pair| {
            let start = (pair[0] - 0.5).ceil().max(0.0);
            let end = (pair[1] - 0.5).ceil().min(width as f64);
            (end > start).then_some((start as usize, end as usize))
        })
        .collect()
}

/// Set every cell on the segment from `from` to `to`, clipped to the grid.
fn draw_segment(coverage: &mut Array2<bool>, from: Vertex, to: Vertex) {
    let line = BresenhamLineIter::new(
        (from.x as f32, from.y as f32),
        (to.x as f32, to.y as f32),
    );
    for (x, y) in line {
        if x < 0 || y < 0 {
            continue;
        }
        if let Some(px) = coverage.get_mut([y as usize, x as usize]) {
            *px = true;
        }
    }
}
