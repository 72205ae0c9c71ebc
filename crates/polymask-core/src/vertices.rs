//! Ordered list of polygon vertices in source-image coordinates.

/// A polygon vertex in source-image pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: u32,
    pub y: u32,
}

impl Vertex {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Vertices in click order. Append-only apart from popping the last entry.
///
/// Duplicates, collinear runs and self-intersections are all kept as given.
#[derive(Clone, Debug, Default)]
pub struct VertexStore {
    vertices: Vec<Vertex>,
    revision: u64,
}

impl VertexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
        self.revision += 1;
    }

    /// Remove the most recent vertex. Does nothing on an empty store.
    pub fn remove_last(&mut self) -> Option<Vertex> {
        let removed = self.vertices.pop();
        if removed.is_some() {
            self.revision += 1;
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Owned copy of the vertices in click order.
    pub fn snapshot(&self) -> Vec<Vertex> {
        self.vertices.clone()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Counter bumped by every mutation that changed the list.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
