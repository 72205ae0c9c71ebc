//! Annotation overlay and viewport canvas composition.
//!
//! Markers and edges are drawn on a copy of the source image at source
//! resolution, then the annotated image is resampled to the fitted size and
//! centred on a black canvas the size of the viewport. Vertex labels are not
//! rasterized here; [`vertex_labels`] gives their viewport positions so the
//! display layer can draw them as text.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use tracing::debug;

use crate::consts::{
    EDGE_COLOR, EDGE_THICKNESS, LABEL_FONT_SIZE, LABEL_OFFSET_X, MARKER_COLOR, MARKER_RADIUS,
};
use crate::geometry::ViewportState;
use crate::vertices::{Vertex, VertexStore};

/// A 1-indexed vertex label positioned in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Text height in viewport pixels; follows the image scale.
    pub size: f64,
}

/// Copy `source` and draw a filled marker at every vertex plus an edge
/// between each pair of consecutive vertices. The polygon is left open:
/// no edge joins the last vertex back to the first.
pub fn annotate(source: &RgbImage, vertices: &[Vertex]) -> RgbImage {
    let mut img = source.clone();
    let marker = Rgb(MARKER_COLOR);
    let edge = Rgb(EDGE_COLOR);

    for v in vertices {
        draw_filled_circle_mut(&mut img, (v.x as i32, v.y as i32), MARKER_RADIUS, marker);
    }

    for pair in vertices.windows(2) {
        draw_thick_segment(&mut img, pair[0], pair[1], edge);
    }

    img
}

/// Resample `annotated` to the fitted size and centre it on a black canvas
/// of the viewport's size.
pub fn compose_canvas(annotated: &RgbImage, viewport: &ViewportState) -> RgbImage {
    let scaled = resample(annotated, viewport.scaled_width, viewport.scaled_height);
    let mut canvas = RgbImage::new(viewport.viewport_width, viewport.viewport_height);
    imageops::replace(
        &mut canvas,
        &scaled,
        viewport.x_offset as i64,
        viewport.y_offset as i64,
    );
    canvas
}

/// Labels "1", "2", ... placed just right of each vertex, sized in
/// proportion to the source image.
pub fn vertex_labels(vertices: &[Vertex], viewport: &ViewportState) -> Vec<VertexLabel> {
    vertices
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let (x, y) = viewport.to_viewport((v.x + LABEL_OFFSET_X) as f64, v.y as f64);
            VertexLabel {
                text: (i + 1).to_string(),
                x,
                y,
                size: LABEL_FONT_SIZE * viewport.scale,
            }
        })
        .collect()
}

/// Area averaging when shrinking, triangle filter when enlarging.
fn resample(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    if img.dimensions() == (width, height) {
        img.clone()
    } else if width <= img.width() && height <= img.height() {
        imageops::thumbnail(img, width, height)
    } else {
        imageops::resize(img, width, height, FilterType::Triangle)
    }
}

fn draw_thick_segment(img: &mut RgbImage, from: Vertex, to: Vertex, color: Rgb<u8>) {
    for dy in 0..EDGE_THICKNESS {
        for dx in 0..EDGE_THICKNESS {
            draw_line_segment_mut(
                img,
                ((from.x + dx) as f32, (from.y + dy) as f32),
                ((to.x + dx) as f32, (to.y + dy) as f32),
                color,
            );
        }
    }
}

/// Caches the annotated image and the composed canvas between frames.
///
/// The annotated image is rebuilt when the vertex list changes; the canvas
/// when either the vertex list or the viewport layout changes.
#[derive(Default)]
pub struct Renderer {
    annotated: Option<(u64, RgbImage)>,
    canvas_key: Option<(u64, ViewportState)>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a fresh canvas if anything changed since the last call, or
    /// `None` if the previously returned canvas is still current.
    pub fn render(
        &mut self,
        source: &RgbImage,
        vertices: &VertexStore,
        viewport: &ViewportState,
    ) -> Option<RgbImage> {
        let revision = vertices.revision();
        if self.canvas_key == Some((revision, *viewport)) {
            return None;
        }

        if self.annotated.as_ref().map(|(rev, _)| *rev) != Some(revision) {
            self.annotated = Some((revision, annotate(source, vertices.as_slice())));
        }
        let Some((_, annotated)) = &self.annotated else {
            return None;
        };

        debug!(
            revision,
            width = viewport.viewport_width,
            height = viewport.viewport_height,
            scale = viewport.scale,
            "Recomposing canvas"
        );
        let canvas = compose_canvas(annotated, viewport);
        self.canvas_key = Some((revision, *viewport));
        Some(canvas)
    }
}
