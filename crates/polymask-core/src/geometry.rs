//! Mapping between viewport pixels and source-image pixels.
//!
//! The source image is scaled uniformly to fit the viewport and centred, so
//! whichever axis is not limiting gets a black border on both sides. All
//! functions here are pure; the gui recomputes a [`ViewportState`] every
//! frame and hands it to the renderer and the input handler.

use crate::consts::{MIN_VIEWPORT_EXTENT, SCALE_EPSILON};
use crate::vertices::Vertex;

/// Layout of the scaled source image inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Viewport size after clamping to [`MIN_VIEWPORT_EXTENT`].
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub source_width: u32,
    pub source_height: u32,
    /// Viewport pixels per source pixel. Always > 0.
    pub scale: f64,
    /// Size of the scaled source image inside the viewport.
    pub scaled_width: u32,
    pub scaled_height: u32,
    /// Top-left corner of the scaled image inside the viewport.
    pub x_offset: u32,
    pub y_offset: u32,
}

impl ViewportState {
    /// Fit a `source_width` x `source_height` image into a viewport of
    /// `viewport_width` x `viewport_height`, preserving aspect ratio.
    ///
    /// Each viewport dimension is clamped to at least [`MIN_VIEWPORT_EXTENT`].
    /// Source dimensions must be non-zero (the loader rejects empty images).
    pub fn fit(viewport_width: u32, viewport_height: u32, source_width: u32, source_height: u32) -> Self {
        debug_assert!(source_width > 0 && source_height > 0);

        let vw = viewport_width.max(MIN_VIEWPORT_EXTENT);
        let vh = viewport_height.max(MIN_VIEWPORT_EXTENT);
        let sw = source_width.max(1);
        let sh = source_height.max(1);

        let scale = (vw as f64 / sw as f64).min(vh as f64 / sh as f64);
        let scaled_width = scaled_extent(sw, scale, vw);
        let scaled_height = scaled_extent(sh, scale, vh);

        Self {
            viewport_width: vw,
            viewport_height: vh,
            source_width: sw,
            source_height: sh,
            scale,
            scaled_width,
            scaled_height,
            x_offset: (vw - scaled_width) / 2,
            y_offset: (vh - scaled_height) / 2,
        }
    }

    /// Map a viewport position to the source pixel under it.
    ///
    /// Returns `None` for positions on the letterbox border or outside the
    /// viewport; callers drop those samples without touching any state.
    pub fn to_source(&self, px: f64, py: f64) -> Option<Vertex> {
        let sx = ((px - self.x_offset as f64) / self.scale).floor();
        let sy = ((py - self.y_offset as f64) / self.scale).floor();

        if sx < 0.0 || sy < 0.0 || sx >= self.source_width as f64 || sy >= self.source_height as f64 {
            return None;
        }

        Some(Vertex::new(sx as u32, sy as u32))
    }

    /// Map a source position to viewport coordinates (top-left of the pixel).
    pub fn to_viewport(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale + self.x_offset as f64,
            y * self.scale + self.y_offset as f64,
        )
    }

    /// [`Self::to_viewport`] for a vertex.
    pub fn vertex_to_viewport(&self, vertex: Vertex) -> (f64, f64) {
        self.to_viewport(vertex.x as f64, vertex.y as f64)
    }
}

/// `floor(extent * scale)`, capped at the viewport extent.
fn scaled_extent(extent: u32, scale: f64, limit: u32) -> u32 {
    let scaled = (extent as f64 * scale + SCALE_EPSILON).floor() as u32;
    scaled.clamp(1, limit)
}
