//! Edge-length labels and edit handles drawn over shapes.

use floorplan_core::{format_feet, WorldPoint};

use crate::model::{edge_midpoint, Shape};

/// A length label placed at the middle of an edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub edge_index: usize,
    pub position: WorldPoint,
    pub length_ft: f64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Vertex(usize),
    /// Midpoint of the edge with this index.
    Midpoint(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub kind: HandleKind,
    pub position: WorldPoint,
}

/// One label per edge, honoring whether the shape is closed.
pub fn edge_labels(shape: &Shape) -> Vec<EdgeLabel> {
    shape
        .edges()
        .into_iter()
        .zip(shape.edge_lengths())
        .enumerate()
        .map(|(edge_index, ((a, b), length_ft))| EdgeLabel {
            edge_index,
            position: edge_midpoint(a, b),
            length_ft,
            text: format!("{} ft", format_feet(length_ft)),
        })
        .collect()
}

/// Vertex handles followed by edge-midpoint handles.
pub fn handles(shape: &Shape) -> Vec<Handle> {
    let vertices = shape.vertices_ft.iter().enumerate().map(|(i, v)| Handle {
        kind: HandleKind::Vertex(i),
        position: *v,
    });
    let midpoints = shape
        .edges()
        .into_iter()
        .enumerate()
        .map(|(i, (a, b))| Handle {
            kind: HandleKind::Midpoint(i),
            position: edge_midpoint(a, b),
        });
    vertices.chain(midpoints).collect()
}
