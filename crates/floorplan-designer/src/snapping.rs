//! Grid and geometry snapping.
//!
//! Grid snapping quantizes each axis to the nearest multiple of the grid
//! spacing, but only when the pointer is already within `threshold` of it.
//! Geometry snapping pulls the pointer onto the nearest vertex or edge of an
//! existing shape within `threshold`. Anything outside the threshold is left
//! exactly where it was.

use floorplan_core::constants::MIN_GRID_SPACING_FT;
use floorplan_core::{GeometryError, PlanePoint, WorldPoint};
use serde::{Deserialize, Serialize};

use crate::model::geometry::project_onto_segment;
use crate::model::{Shape, ShapeId};

/// Grid display and snapping spacing, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub enabled: bool,
    pub spacing_ft: f64,
    /// Expected to be a multiple of `spacing_ft`; not enforced.
    #[serde(rename = "majorSpacing_ft", alias = "major_spacing_ft")]
    pub major_spacing_ft: f64,
}

impl GridSettings {
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.spacing_ft.is_finite() && self.spacing_ft > 0.0) {
            return Err(GeometryError::NonPositiveSpacing(self.spacing_ft));
        }
        if self.spacing_ft < MIN_GRID_SPACING_FT {
            return Err(GeometryError::SpacingTooSmall {
                spacing: self.spacing_ft,
                min: MIN_GRID_SPACING_FT,
            });
        }
        if !(self.major_spacing_ft.is_finite() && self.major_spacing_ft > 0.0) {
            return Err(GeometryError::NonPositiveSpacing(self.major_spacing_ft));
        }
        Ok(())
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            spacing_ft: 1.0,
            major_spacing_ft: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapMode {
    None,
    Grid,
    Geometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    pub enabled: bool,
    pub mode: SnapMode,
    pub threshold_ft: f64,
}

impl SnapSettings {
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.threshold_ft.is_finite() && self.threshold_ft >= 0.0) {
            return Err(GeometryError::non_positive("threshold_ft", self.threshold_ft));
        }
        Ok(())
    }

    /// True when snapping is switched on and the mode does something.
    pub fn is_active(&self) -> bool {
        self.enabled && self.mode != SnapMode::None
    }
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: SnapMode::Grid,
            threshold_ft: 0.5,
        }
    }
}

/// Rounds `value` to the nearest multiple of `spacing` when it lies within
/// `threshold` (inclusive) of it; otherwise returns `value` unchanged.
pub fn snap_to_grid(value: f64, spacing: f64, threshold: f64) -> f64 {
    debug_assert!(spacing > 0.0, "grid spacing must be positive, got {spacing}");
    let nearest = (value / spacing).round() * spacing;
    if (value - nearest).abs() <= threshold {
        nearest
    } else {
        value
    }
}

/// Outcome of snapping a point to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnap {
    pub point: WorldPoint,
    /// True if either axis moved.
    pub snapped: bool,
}

/// Applies [`snap_to_grid`] to each axis independently.
pub fn snap_point_to_grid(point: WorldPoint, spacing: f64, threshold: f64) -> GridSnap {
    let x = snap_to_grid(point.x, spacing, threshold);
    let y = snap_to_grid(point.y, spacing, threshold);
    GridSnap {
        point: WorldPoint::new(x, y),
        snapped: x != point.x || y != point.y,
    }
}

/// What a snapped point attached to.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapTarget {
    None,
    Grid,
    Vertex { shape_id: ShapeId, index: usize },
    Edge { shape_id: ShapeId, edge_index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// Pointer position before snapping.
    pub raw: WorldPoint,
    /// Position after snapping; equal to `raw` when nothing was in range.
    pub point: WorldPoint,
    pub target: SnapTarget,
}

impl SnapResult {
    pub fn unsnapped(raw: WorldPoint) -> Self {
        Self {
            raw,
            point: raw,
            target: SnapTarget::None,
        }
    }

    pub fn snapped(&self) -> bool {
        self.target != SnapTarget::None
    }
}

/// Snaps `point` to the nearest vertex or edge of `shapes` within `threshold`.
///
/// Vertices are preferred over edge projections at equal distance. The shape
/// named by `exclude` (typically the one being edited) is skipped.
pub fn snap_to_geometry(
    point: WorldPoint,
    shapes: &[Shape],
    threshold: f64,
    exclude: Option<&ShapeId>,
) -> SnapResult {
    let mut best: Option<(f64, WorldPoint, SnapTarget)> = None;
    let candidates = shapes.iter().filter(|s| Some(s.id()) != exclude);

    for shape in candidates.clone() {
        for (index, vertex) in shape.vertices_ft.iter().enumerate() {
            let dist = point.distance_to(vertex);
            if dist <= threshold && best.as_ref().is_none_or(|(d, _, _)| dist < *d) {
                let target = SnapTarget::Vertex {
                    shape_id: shape.id().clone(),
                    index,
                };
                best = Some((dist, *vertex, target));
            }
        }
    }

    for shape in candidates {
        for (edge_index, (a, b)) in shape.edges().into_iter().enumerate() {
            let projected = project_onto_segment(point, a, b);
            let dist = point.distance_to(&projected);
            if dist <= threshold && best.as_ref().is_none_or(|(d, _, _)| dist < *d) {
                let target = SnapTarget::Edge {
                    shape_id: shape.id().clone(),
                    edge_index,
                };
                best = Some((dist, projected, target));
            }
        }
    }

    match best {
        Some((_, snapped, target)) => SnapResult {
            raw: point,
            point: snapped,
            target,
        },
        None => SnapResult::unsnapped(point),
    }
}

/// Snaps `point` according to `settings`.
///
/// Grid mode uses `grid.spacing_ft`; geometry mode searches `shapes`. When
/// snapping is disabled or the mode is `none` the point is returned as-is.
pub fn snap(
    point: WorldPoint,
    settings: &SnapSettings,
    grid: &GridSettings,
    shapes: &[Shape],
    exclude: Option<&ShapeId>,
) -> SnapResult {
    if !settings.enabled {
        return SnapResult::unsnapped(point);
    }
    match settings.mode {
        SnapMode::None => SnapResult::unsnapped(point),
        SnapMode::Grid => {
            let result = snap_point_to_grid(point, grid.spacing_ft, settings.threshold_ft);
            SnapResult {
                raw: point,
                point: result.point,
                target: if result.snapped {
                    SnapTarget::Grid
                } else {
                    SnapTarget::None
                },
            }
        }
        SnapMode::Geometry => snap_to_geometry(point, shapes, settings.threshold_ft, exclude),
    }
}
