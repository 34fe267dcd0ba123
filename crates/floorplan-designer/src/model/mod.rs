//! Shape data model: identifiers, types, layers, colors, metadata and the
//! measurement helpers that operate on world-space vertex lists.

mod color;
pub mod geometry;
mod shape;

pub use color::Color;
pub use geometry::{
    edge_lengths, edge_midpoint, path_lengths, polygon_area, translate_vertices, Bounds,
};
pub use shape::{generate_shape_id, Layer, Shape, ShapeId, ShapeMetadata, ShapePatch, ShapeType};

pub use floorplan_core::WorldPoint;

/// Bounding box of a shape; an empty vertex list is an error.
pub fn shape_bounds(shape: &Shape) -> Result<Bounds, floorplan_core::GeometryError> {
    shape.bounds()
}
