use floorplan_core::{GeometryError, PlanePoint, WorldPoint};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::Color;
use super::geometry::{self, Bounds};

/// Opaque, immutable shape identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates a session-unique shape id: `shape_<unix millis>_<9 random chars>`.
///
/// Uniqueness is probabilistic, not cryptographic.
pub fn generate_shape_id() -> ShapeId {
    let millis = chrono::Utc::now().timestamp_millis();
    let random = uuid::Uuid::new_v4().simple().to_string();
    ShapeId(format!("shape_{}_{}", millis, &random[..9]))
}

/// Drawable shape kinds. All are stored as a vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Polygon,
    Polyline,
    Freehand,
    Line,
}

impl ShapeType {
    /// Closed shapes connect their last vertex back to the first.
    pub fn is_closed(&self) -> bool {
        matches!(self, ShapeType::Rectangle | ShapeType::Polygon)
    }

    pub fn min_vertices(&self) -> usize {
        if self.is_closed() {
            3
        } else {
            2
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::Polygon => "polygon",
            ShapeType::Polyline => "polyline",
            ShapeType::Freehand => "freehand",
            ShapeType::Line => "line",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drawing layer. Affects default styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Boundary,
    Building,
    Paths,
    Symbols,
}

impl Layer {
    pub fn default_color(&self) -> Color {
        match self {
            Layer::Boundary => Color::BOUNDARY,
            Layer::Building => Color::BUILDING,
            Layer::Paths => Color::PATHS,
            Layer::Symbols => Color::SYMBOLS,
        }
    }
}

/// Well-known optional annotations on a shape.
///
/// Unknown keys in loaded files are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetadata {
    /// Who created the shape: `wizard`, `tool`, ...
    #[serde(rename = "createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Pointer position before snapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_position_ft: Option<WorldPoint>,
    /// Pointer position after snapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapped_position_ft: Option<WorldPoint>,
}

impl ShapeMetadata {
    pub const CREATED_BY_WIZARD: &'static str = "wizard";
    pub const CREATED_BY_TOOL: &'static str = "tool";

    pub fn wizard(label: impl Into<String>) -> Self {
        Self {
            created_by: Some(Self::CREATED_BY_WIZARD.to_string()),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn tool(raw: WorldPoint, snapped: WorldPoint) -> Self {
        Self {
            created_by: Some(Self::CREATED_BY_TOOL.to_string()),
            raw_position_ft: Some(raw),
            snapped_position_ft: Some(snapped),
            ..Self::default()
        }
    }
}

/// A polygon-like drawable entity with all geometry in world feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub layer: Layer,
    pub stroke_mm: f64,
    pub stroke_color: Color,
    pub fill: Option<Color>,
    pub vertices_ft: Vec<WorldPoint>,
    #[serde(default)]
    pub metadata: ShapeMetadata,
}

impl Shape {
    /// Creates a shape with a fresh id after validating the vertex count and
    /// stroke width.
    pub fn new(
        shape_type: ShapeType,
        layer: Layer,
        stroke_mm: f64,
        stroke_color: Color,
        vertices_ft: Vec<WorldPoint>,
    ) -> Result<Self, GeometryError> {
        let shape = Self {
            id: generate_shape_id(),
            shape_type,
            layer,
            stroke_mm,
            stroke_color,
            fill: None,
            vertices_ft,
            metadata: ShapeMetadata::default(),
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Replaces the generated id, e.g. when restoring a known shape.
    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_metadata(mut self, metadata: ShapeMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.metadata.label.as_deref()
    }

    /// Checks the shape invariants: enough finite vertices for the type and a
    /// positive stroke width.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.vertices_ft.is_empty() {
            return Err(GeometryError::EmptyVertices);
        }
        let required = self.shape_type.min_vertices();
        if self.vertices_ft.len() < required {
            return Err(GeometryError::TooFewVertices {
                shape_type: self.shape_type.to_string(),
                required,
                actual: self.vertices_ft.len(),
            });
        }
        if self.vertices_ft.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite(format!("shape {}", self.id)));
        }
        if !(self.stroke_mm.is_finite() && self.stroke_mm > 0.0) {
            return Err(GeometryError::NonPositiveStroke(self.stroke_mm));
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.shape_type.is_closed()
    }

    pub fn bounds(&self) -> Result<Bounds, GeometryError> {
        Bounds::from_points(&self.vertices_ft)
    }

    /// Edge segments in drawing order; closed types include last → first.
    pub fn edges(&self) -> Vec<(WorldPoint, WorldPoint)> {
        let mut edges: Vec<_> = self
            .vertices_ft
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        if self.is_closed() {
            if let (Some(last), Some(first)) = (self.vertices_ft.last(), self.vertices_ft.first()) {
                edges.push((*last, *first));
            }
        }
        edges
    }

    /// Edge lengths honoring whether the type is closed.
    pub fn edge_lengths(&self) -> Vec<f64> {
        if self.is_closed() {
            geometry::edge_lengths(&self.vertices_ft)
        } else {
            geometry::path_lengths(&self.vertices_ft)
        }
    }

    pub fn perimeter(&self) -> f64 {
        self.edge_lengths().iter().sum()
    }

    /// Enclosed area in square feet; zero for open paths.
    pub fn area(&self) -> f64 {
        if self.is_closed() {
            geometry::polygon_area(&self.vertices_ft)
        } else {
            0.0
        }
    }

    pub fn translate(&mut self, delta: WorldPoint) {
        self.vertices_ft = geometry::translate_vertices(&self.vertices_ft, delta);
    }

    /// Distance from `p` to the nearest edge.
    pub fn distance_to(&self, p: WorldPoint) -> f64 {
        self.edges()
            .into_iter()
            .map(|(a, b)| geometry::distance_to_segment(p, a, b))
            .fold(f64::INFINITY, f64::min)
    }

    /// True when `p` is within `tolerance` of an edge, or inside a filled
    /// closed shape.
    pub fn hit_test(&self, p: WorldPoint, tolerance: f64) -> bool {
        if self.is_closed()
            && self.fill.is_some()
            && geometry::point_in_polygon(p, &self.vertices_ft)
        {
            return true;
        }
        self.distance_to(p) <= tolerance
    }

    /// Returns a copy with `patch` applied, validated against the shape
    /// invariants. `self` is left untouched.
    pub fn patched(&self, patch: &ShapePatch) -> Result<Shape, GeometryError> {
        let mut next = self.clone();
        if let Some(layer) = patch.layer {
            next.layer = layer;
        }
        if let Some(stroke_mm) = patch.stroke_mm {
            next.stroke_mm = stroke_mm;
        }
        if let Some(color) = patch.stroke_color {
            next.stroke_color = color;
        }
        if let Some(fill) = patch.fill {
            next.fill = fill;
        }
        if let Some(vertices) = &patch.vertices_ft {
            next.vertices_ft = vertices.clone();
        }
        if let Some(label) = &patch.label {
            next.metadata.label = label.clone();
        }
        next.validate()?;
        Ok(next)
    }
}

/// Partial update for [`Shape::patched`]. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePatch {
    pub layer: Option<Layer>,
    pub stroke_mm: Option<f64>,
    pub stroke_color: Option<Color>,
    /// `Some(None)` removes the fill.
    pub fill: Option<Option<Color>>,
    pub vertices_ft: Option<Vec<WorldPoint>>,
    /// `Some(None)` clears the label.
    pub label: Option<Option<String>>,
}

impl ShapePatch {
    pub fn vertices(vertices: Vec<WorldPoint>) -> Self {
        Self {
            vertices_ft: Some(vertices),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
