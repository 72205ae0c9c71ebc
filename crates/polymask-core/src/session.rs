//! Annotation session: the source image, the vertex list and the input
//! state machine that mutates it.

use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::error::Result;
use crate::geometry::ViewportState;
use crate::mask::{export_mask, MaskWriteResult};
use crate::vertices::{Vertex, VertexStore};

/// Input already translated from the host toolkit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary pointer button pressed at a viewport position (pixels).
    PrimaryPress { x: f64, y: f64 },
    /// Secondary pointer button pressed anywhere.
    SecondaryPress,
    /// A character key.
    Key(char),
    Escape,
}

/// What the host loop should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Nothing changed.
    Ignored,
    /// The vertex list may have changed; draw again.
    Redraw,
    /// Export the mask, then end the session if that succeeded.
    Save,
    /// End the session without exporting.
    Exit,
}

/// One image being annotated.
pub struct Session {
    source: RgbImage,
    vertices: VertexStore,
}

impl Session {
    pub fn new(source: RgbImage) -> Self {
        Self {
            source,
            vertices: VertexStore::new(),
        }
    }

    pub fn source(&self) -> &RgbImage {
        &self.source
    }

    pub fn vertices(&self) -> &VertexStore {
        &self.vertices
    }

    /// Source image size as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.source.dimensions()
    }

    /// Lay out the source image in a viewport of the given size.
    pub fn fit_viewport(&self, viewport_width: u32, viewport_height: u32) -> ViewportState {
        let (w, h) = self.dimensions();
        ViewportState::fit(viewport_width, viewport_height, w, h)
    }

    /// Apply one input event.
    ///
    /// Presses on the letterbox border are dropped. Undo on an empty list is
    /// a no-op but still asks for a redraw.
    pub fn handle(&mut self, event: InputEvent, viewport: &ViewportState) -> SessionAction {
        match event {
            InputEvent::PrimaryPress { x, y } => match viewport.to_source(x, y) {
                Some(vertex) => {
                    self.add_vertex(vertex);
                    SessionAction::Redraw
                }
                None => SessionAction::Ignored,
            },
            InputEvent::SecondaryPress => {
                self.undo();
                SessionAction::Redraw
            }
            InputEvent::Key('s' | 'S') => SessionAction::Save,
            InputEvent::Escape => SessionAction::Exit,
            InputEvent::Key(_) => SessionAction::Ignored,
        }
    }

    /// Write the current polygon as a mask the size of the source image.
    pub fn export(&self, path: &Path) -> Result<MaskWriteResult> {
        let (w, h) = self.dimensions();
        export_mask(self.vertices.as_slice(), w, h, path)
    }

    fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.append(vertex);
        debug!(x = vertex.x, y = vertex.y, count = self.vertices.count(), "Vertex added");
    }

    fn undo(&mut self) {
        if let Some(vertex) = self.vertices.remove_last() {
            debug!(x = vertex.x, y = vertex.y, count = self.vertices.count(), "Vertex removed");
        }
    }
}
